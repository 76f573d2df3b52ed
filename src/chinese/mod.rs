//! Chinese calendar
//!
//! Note: 為方便處理諸多術語，本模塊文檔用中文。
//!
//! 本程序依 1900 至 2100 年的夏曆編碼表（見 [`table`]）推算公曆日期所對應的農曆年月日，並給出年名、生肖、月名、日名、傳統節日及近似節氣。
//!
//! 曆元為公曆 1900-01-31，即農曆 1900 年正月初一。所有計算皆為純函數，不讀系統時鐘，不作時區換算。
//!
//! 注意：編碼表按本程序的槽位規則解讀（見 [`table`]），所得月長與實際天象不盡相符；年名天干亦與史實錯位（見 [`fmt::year_name`]）。

use std::fmt as std_fmt;

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use tracing::trace;

use crate::date::Date;
use crate::error::LunarError;

pub mod festival;
pub mod fmt;
pub mod solar_term;
pub mod table;
pub mod walk;

pub use solar_term::SolarTerm;
pub use walk::YearWalk;

/// 曆元：公曆 1900-01-31，農曆 1900 年正月初一。
pub const EPOCH: Date = Date::from_jdn(2_415_051);

/// 月名，`Common` 為平月，`Leap` 為閏月。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Month {
    Common(u32),
    Leap(u32),
}
impl Month {
    /// 取得月序號，無論平閏。
    pub fn num(&self) -> u32 {
        use Month::*;
        *match self {
            Common(v) | Leap(v) => v,
        }
    }
    /// 閏月為 `true`，平月為 `false`
    pub fn is_leap(&self) -> bool {
        matches!(self, Self::Leap(_))
    }
    /// 取得月名的文本形式，十一、十二月稱「冬月」「腊月」。
    pub fn name(&self) -> String {
        fmt::month_name(*self)
    }
}

/// 農曆日期
///
/// 由 [`LunarDate::new`] 建立者必定合乎：`day` 不超過該月日數，閏月僅見於當年閏月月序。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct LunarDate {
    pub year: i32,
    pub month: Month,
    pub day: u32,
}

impl LunarDate {
    /// 建立並校驗農曆日期。
    ///
    /// # 用例
    ///
    /// ```
    /// use lunkalendaro::chinese::{LunarDate, Month::*};
    ///
    /// assert!(LunarDate::new(2025, Leap(6), 30).is_ok());
    /// assert!(LunarDate::new(2024, Leap(6), 1).is_err());
    /// ```
    pub fn new(year: i32, month: Month, day: u32) -> Result<Self, LunarError> {
        let max_day = table::checked_month_days(year, month)?;
        if !(1..=max_day).contains(&day) {
            return Err(LunarError::InvalidDay { day, max_day });
        }
        Ok(Self { year, month, day })
    }
    /// 是否為閏月
    pub fn is_leap_month(&self) -> bool {
        self.month.is_leap()
    }
}

impl Serialize for LunarDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("LunarDate", 4)?;
        s.serialize_field("year", &self.year)?;
        s.serialize_field("month", &self.month.num())?;
        s.serialize_field("day", &self.day)?;
        s.serialize_field("isLeapMonth", &self.is_leap_month())?;
        s.end()
    }
}

/// 結果不可作準的原因。此類結果形式完整，但數值未必正確。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Degradation {
    /// 所在農曆年在編碼表外，月長皆為哨兵值
    OutsideTable,
    /// 舊式年份推求無法收斂，於表外首年截止
    NonConvergent,
    /// 日數超出全年，定於末月末日
    Overrun,
}

/// 帶文本名稱的農曆日期
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NamedLunarDate {
    /// 輸入的公曆日期
    pub gregorian: Date,
    #[serde(flatten)]
    pub lunar: LunarDate,
    /// 年名，如「甲子年」
    pub year_name: String,
    /// 月名，如「闰六月」
    pub month_name: String,
    /// 日名，如「初一」
    pub day_name: &'static str,
    pub zodiac: &'static str,
    pub festival: Option<&'static str>,
    pub solar_term: Option<SolarTerm>,
    /// 為 `Some` 時結果不可作準
    pub degradation: Option<Degradation>,
}

impl NamedLunarDate {
    fn describe(gregorian: Date, lunar: LunarDate, degradation: Option<Degradation>) -> Self {
        Self {
            gregorian,
            lunar,
            year_name: fmt::year_name(lunar.year),
            month_name: fmt::month_name(lunar.month),
            day_name: fmt::day_name(lunar.day),
            zodiac: fmt::zodiac(lunar.year),
            festival: festival::festival_on(lunar.month, lunar.day),
            solar_term: solar_term::estimate_for(gregorian),
            degradation,
        }
    }

    /// 結果是否可作準
    pub fn is_authoritative(&self) -> bool {
        self.degradation.is_none()
    }

    /// 完整形式，如「戊辰年 龙年 正月初一 【春节】 【立春】」。
    pub fn long_form(&self) -> String {
        let mut rt = format!(
            "{} {}年 {}{}",
            self.year_name, self.zodiac, self.month_name, self.day_name
        );
        if let Some(festival) = self.festival {
            rt += &format!(" 【{festival}】");
        }
        if let Some(term) = self.solar_term {
            rt += &format!(" 【{term}】");
        }
        rt
    }

    /// 簡短形式，如「农历正月初一 | 春节 | 立春」。
    pub fn short_form(&self) -> String {
        let mut rt = format!("农历{}{}", self.month_name, self.day_name);
        if let Some(festival) = self.festival {
            rt += &format!(" | {festival}");
        }
        if let Some(term) = self.solar_term {
            rt += &format!(" | {term}");
        }
        rt
    }
}

impl std_fmt::Display for NamedLunarDate {
    fn fmt(&self, f: &mut std_fmt::Formatter<'_>) -> std_fmt::Result {
        f.write_str(&self.long_form())
    }
}

/// 換算選項
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConversionOptions {
    pub year_walk: YearWalk,
}

/// 按給定選項將公曆日期換算為農曆。
///
/// # 用例
///
/// ```
/// use lunkalendaro::Date;
/// use lunkalendaro::chinese::{ConversionOptions, Converter, YearWalk};
///
/// let converter = Converter::new(ConversionOptions { year_walk: YearWalk::Legacy });
/// let date = Date::from_gregorian(1900, 2, 14).unwrap();
/// assert_eq!("农历正月十五 | 元宵节", converter.short_form(date).unwrap());
/// ```
#[derive(Debug, Copy, Clone, Default)]
pub struct Converter {
    options: ConversionOptions,
}

impl Converter {
    pub fn new(options: ConversionOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> ConversionOptions {
        self.options
    }

    /// 公曆轉農曆。
    ///
    /// 早於曆元的日期回報 [`LunarError::BeforeEpoch`]；其餘日期皆有結果，不可作準者見 [`NamedLunarDate::degradation`]。
    pub fn solar_to_lunar(&self, date: Date) -> Result<NamedLunarDate, LunarError> {
        if date < EPOCH {
            return Err(LunarError::BeforeEpoch {
                days: EPOCH.jdn() - date.jdn(),
            });
        }
        let offset = date.jdn() - EPOCH.jdn();
        let year = walk::resolve_year(offset, self.options.year_walk);
        let month = walk::resolve_month_day(year.year, year.residual);
        trace!(
            offset,
            year = year.year,
            residual = year.residual,
            month = ?month.month,
            day = month.day,
            "resolved lunar date"
        );
        let lunar = LunarDate {
            year: year.year,
            month: month.month,
            day: month.day,
        };
        Ok(NamedLunarDate::describe(
            date,
            lunar,
            year.degradation.or(month.degradation),
        ))
    }

    /// 完整形式的農曆日期，見 [`NamedLunarDate::long_form`]。
    pub fn long_form(&self, date: Date) -> Result<String, LunarError> {
        self.solar_to_lunar(date).map(|lunar| lunar.long_form())
    }

    /// 簡短形式的農曆日期，見 [`NamedLunarDate::short_form`]。
    pub fn short_form(&self, date: Date) -> Result<String, LunarError> {
        self.solar_to_lunar(date).map(|lunar| lunar.short_form())
    }
}

/// 以預設選項（[`YearWalk::Accumulating`]）將公曆轉為農曆。
///
/// # 用例
///
/// ```
/// use lunkalendaro::Date;
/// use lunkalendaro::chinese::{self, Month::*};
///
/// let lunar = chinese::solar_to_lunar(Date::from_gregorian(1900, 1, 31).unwrap()).unwrap();
/// assert_eq!((1900, Common(1), 1), (lunar.lunar.year, lunar.lunar.month, lunar.lunar.day));
/// ```
pub fn solar_to_lunar(date: Date) -> Result<NamedLunarDate, LunarError> {
    Converter::default().solar_to_lunar(date)
}

/// 以預設選項取得完整形式。
pub fn long_form(date: Date) -> Result<String, LunarError> {
    Converter::default().long_form(date)
}

/// 以預設選項取得簡短形式。
pub fn short_form(date: Date) -> Result<String, LunarError> {
    Converter::default().short_form(date)
}

/// 農曆轉公曆，為 [`YearWalk::Accumulating`] 換算的逆運算。
///
/// ```
/// use lunkalendaro::Date;
/// use lunkalendaro::chinese::{self, LunarDate, Month::*};
///
/// let lunar = LunarDate::new(2025, Common(1), 7).unwrap();
/// assert_eq!(Date::from_gregorian(2025, 1, 29).unwrap(), chinese::lunar_to_solar(&lunar).unwrap());
/// ```
pub fn lunar_to_solar(date: &LunarDate) -> Result<Date, LunarError> {
    walk::offset_of(date).map(|offset| EPOCH + offset as i32)
}

/// 取得所給公元年的干支序號（1 為甲子，60 為癸亥），與史實相符。
///
/// # 用例
///
/// ```
/// use lunkalendaro::chinese::sexagenary_for_year;
///
/// assert_eq!(1, sexagenary_for_year(-2696));
/// ```
pub fn sexagenary_for_year(year: i32) -> u32 {
    (year.rem_euclid(60) as u32 + 2696) % 60 + 1
}
