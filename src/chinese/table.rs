//! 夏曆年份編碼表，涵蓋 1900 至 2100 年。
//!
//! 每年一個 20 位整數：低 4 位為閏月月序（0 表示當年無閏月），其上各位自高而低為各月「槽位」的大小，1 為大月（30 日），0 為小月（29 日）。第 `k` 槽讀自第 `16 − k` 位。
//!
//! 平月 `m` 佔第 `m` 槽；若當年有閏月 `L` 且 `m > L`，則佔第 `m + 1` 槽。閏月自身佔第 `L + 1` 槽。
//!
//! 位運算僅見於本模塊的 [`checked_month_days`]，其餘代碼一律經由本模塊的函數取得月長。

use super::Month;
use crate::error::LunarError;

/// 編碼表首年
pub const FIRST_YEAR: i32 = 1900;
/// 編碼表末年
pub const LAST_YEAR: i32 = 2100;
/// 查詢無效時返回的月長。並非真實月長，調用者不應據以編算。
pub const SENTINEL_DAYS: u32 = 30;

#[rustfmt::skip]
static LUNAR_INFO: [u32; 201] = [
    0x04bd8, 0x04ae0, 0x0a570, 0x054d5, 0x0d260, 0x0d950, 0x16554, 0x056a0, 0x09ad0, 0x055d2, // 1900..=1909
    0x04ae0, 0x0a5b6, 0x0a4d0, 0x0d250, 0x1d255, 0x0b540, 0x0d6a0, 0x0ada2, 0x095b0, 0x14977, // 1910..=1919
    0x04970, 0x0a4b0, 0x0b4b5, 0x06a50, 0x06d40, 0x1ab54, 0x02b60, 0x09570, 0x052f2, 0x04970, // 1920..=1929
    0x06566, 0x0d4a0, 0x0ea50, 0x06e95, 0x05ad0, 0x02b60, 0x186e3, 0x092e0, 0x1c8d7, 0x0c950, // 1930..=1939
    0x0d4a0, 0x1d8a6, 0x0b550, 0x056a0, 0x1a5b4, 0x025d0, 0x092d0, 0x0d2b2, 0x0a950, 0x0b557, // 1940..=1949
    0x06ca0, 0x0b550, 0x15355, 0x04da0, 0x0a5b0, 0x14573, 0x052b0, 0x0a9a8, 0x0e950, 0x06aa0, // 1950..=1959
    0x0aea6, 0x0ab50, 0x04b60, 0x0aae4, 0x0a570, 0x05260, 0x0f263, 0x0d950, 0x05b57, 0x056a0, // 1960..=1969
    0x096d0, 0x04dd5, 0x04ad0, 0x0a4d0, 0x0d4d4, 0x0d250, 0x0d558, 0x0b540, 0x0b6a0, 0x195a6, // 1970..=1979
    0x095b0, 0x049b0, 0x0a974, 0x0a4b0, 0x0b27a, 0x06a50, 0x06d40, 0x0af46, 0x0ab60, 0x09570, // 1980..=1989
    0x04af5, 0x04970, 0x064b0, 0x074a3, 0x0ea50, 0x06b58, 0x055c0, 0x0ab60, 0x096d5, 0x092e0, // 1990..=1999
    0x0c960, 0x0d954, 0x0d4a0, 0x0da50, 0x07552, 0x056a0, 0x0abb7, 0x025d0, 0x092d0, 0x0cab5, // 2000..=2009
    0x0a950, 0x0b4a0, 0x0baa4, 0x0ad50, 0x055d9, 0x04ba0, 0x0a5b0, 0x15176, 0x052b0, 0x0a930, // 2010..=2019
    0x07954, 0x06aa0, 0x0ad50, 0x05b52, 0x04b60, 0x0a6e6, 0x0a4e0, 0x0d260, 0x0ea65, 0x0d530, // 2020..=2029
    0x05aa0, 0x076a3, 0x096d0, 0x04afb, 0x04ad0, 0x0a4d0, 0x1d0b6, 0x0d250, 0x0d520, 0x0dd45, // 2030..=2039
    0x0b5a0, 0x056d0, 0x055b2, 0x049b0, 0x0a577, 0x0a4b0, 0x0aa50, 0x1b255, 0x06d20, 0x0ada0, // 2040..=2049
    0x14b63, 0x09370, 0x049f8, 0x04970, 0x064b0, 0x168a6, 0x0ea50, 0x06b20, 0x1a6c4, 0x0aae0, // 2050..=2059
    0x0a2e0, 0x0d2e3, 0x0c960, 0x0d557, 0x0d4a0, 0x0da50, 0x05d55, 0x056a0, 0x0a6d0, 0x055d4, // 2060..=2069
    0x052d0, 0x0a9b8, 0x0a950, 0x0b4a0, 0x0b6a6, 0x0ad50, 0x055a0, 0x0aba4, 0x0a5b0, 0x052b0, // 2070..=2079
    0x0b273, 0x06930, 0x07337, 0x06aa0, 0x0ad50, 0x14b55, 0x04b60, 0x0a570, 0x054e4, 0x0d160, // 2080..=2089
    0x0e968, 0x0d520, 0x0daa0, 0x16aa6, 0x056d0, 0x04ae0, 0x0a9d4, 0x0a2d0, 0x0d150, 0x0f252, // 2090..=2099
    0x0d520, // 2100
];

/// 取得公元 `year` 年的原始編碼，表外年份返回 `None`。
///
/// # 用例
///
/// ```
/// use lunkalendaro::chinese::table;
///
/// assert_eq!(Some(0x04bd8), table::lookup_year(1900));
/// assert_eq!(None, table::lookup_year(2101));
/// ```
pub fn lookup_year(year: i32) -> Option<u32> {
    let idx = usize::try_from(year.checked_sub(FIRST_YEAR)?).ok()?;
    LUNAR_INFO.get(idx).copied()
}

/// 年份是否在編碼表內。
pub fn contains(year: i32) -> bool {
    (FIRST_YEAR..=LAST_YEAR).contains(&year)
}

/// 取得該年閏月月序，無閏月或表外年份返回 0。
pub fn leap_month(year: i32) -> u32 {
    lookup_year(year).map_or(0, |raw| raw & 0xf)
}

/// 取得該年某月的日數（29 或 30）。
///
/// 表外年份、無效月序、或所查閏月並非當年閏月時，返回 [`SENTINEL_DAYS`]。
///
/// # 用例
///
/// ```
/// use lunkalendaro::chinese::{table, Month::*};
///
/// assert_eq!(30, table::month_days(2025, Leap(6)));
/// assert_eq!(29, table::month_days(2025, Common(7)));
/// // 2024 年無閏月，得哨兵值
/// assert_eq!(table::SENTINEL_DAYS, table::month_days(2024, Leap(6)));
/// ```
pub fn month_days(year: i32, month: Month) -> u32 {
    checked_month_days(year, month).unwrap_or(SENTINEL_DAYS)
}

/// 同 [`month_days`]，但無效查詢回報 `Err` 而非哨兵值。
pub fn checked_month_days(year: i32, month: Month) -> Result<u32, LunarError> {
    let raw = lookup_year(year).ok_or(LunarError::YearOutOfRange { year })?;
    let num = month.num();
    if !(1..=12).contains(&num) {
        return Err(LunarError::InvalidMonth { month: num });
    }
    let leap = raw & 0xf;
    let slot = match month {
        Month::Leap(m) if m != leap => {
            return Err(LunarError::NoSuchLeapMonth {
                year,
                month: m,
                leap,
            });
        }
        Month::Leap(m) => m + 1,
        Month::Common(m) if leap > 0 && m > leap => m + 1,
        Month::Common(m) => m,
    };
    Ok(if (raw >> (16 - slot)) & 1 == 1 { 30 } else { 29 })
}

/// 依次列出該年各月，閏月緊接同序平月之後。
///
/// ```
/// use lunkalendaro::chinese::{table, Month::*};
///
/// let months: Vec<_> = table::months(2023).take(4).collect();
/// assert_eq!(vec![Common(1), Common(2), Leap(2), Common(3)], months);
/// ```
pub fn months(year: i32) -> impl Iterator<Item = Month> {
    let leap = leap_month(year);
    (1..=12).flat_map(move |m| {
        std::iter::once(Month::Common(m)).chain((m == leap).then_some(Month::Leap(m)))
    })
}

/// 該年總日數，即十二平月與閏月（若有）日數之和。表外年份各月均取哨兵值，得 360。
pub fn year_days(year: i32) -> u32 {
    months(year).map(|m| month_days(year, m)).sum()
}
