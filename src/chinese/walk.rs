//! 由曆元起算的日數推求農曆年、月、日，及其逆運算。

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::table::{self, FIRST_YEAR, LAST_YEAR};
use super::{Degradation, LunarDate, Month};
use crate::error::LunarError;

/// 推求年份的走法。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YearWalk {
    /// 逐年扣減年長，直至餘數落入當年。
    #[default]
    Accumulating,
    /// 舊有走法：日數從不扣減，只拿原始日數逐年比較年長。
    ///
    /// 日數小於 1900 年年長（385 日）時與 [`YearWalk::Accumulating`] 相同；否則無法收斂，走到表外首年即截止，並標記 [`Degradation::NonConvergent`]。
    Legacy,
}

/// 年份推求結果
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct YearPosition {
    /// 農曆年
    pub year: i32,
    /// 該年首日起算的日數
    pub residual: u32,
    pub degradation: Option<Degradation>,
}

/// 依曆元起算的日數 `offset` 求所在農曆年。
///
/// # 用例
///
/// ```
/// use lunkalendaro::chinese::walk::{self, YearWalk};
///
/// // 1900 年共 385 日
/// let pos = walk::resolve_year(385, YearWalk::Accumulating);
/// assert_eq!((1901, 0), (pos.year, pos.residual));
///
/// let pos = walk::resolve_year(385, YearWalk::Legacy);
/// assert!(pos.degradation.is_some());
/// ```
pub fn resolve_year(offset: u32, walk: YearWalk) -> YearPosition {
    match walk {
        YearWalk::Accumulating => {
            let mut year = FIRST_YEAR;
            let mut residual = offset;
            loop {
                let days = table::year_days(year);
                if residual < days {
                    break;
                }
                if year > LAST_YEAR {
                    // 表外年長恆定，可直接整除
                    year += (residual / days) as i32;
                    residual %= days;
                    break;
                }
                residual -= days;
                year += 1;
            }
            YearPosition {
                year,
                residual,
                degradation: outside_table(year),
            }
        }
        YearWalk::Legacy => {
            let mut year = FIRST_YEAR;
            while offset >= table::year_days(year) {
                // 表外每年皆 360 日，再走也不會停
                if year > LAST_YEAR {
                    warn!(offset, year, "legacy year walk does not converge");
                    return YearPosition {
                        year,
                        residual: offset,
                        degradation: Some(Degradation::NonConvergent),
                    };
                }
                year += 1;
            }
            YearPosition {
                year,
                residual: offset,
                degradation: outside_table(year),
            }
        }
    }
}

fn outside_table(year: i32) -> Option<Degradation> {
    if table::contains(year) {
        None
    } else {
        debug!(year, "lunar year outside encoding table");
        Some(Degradation::OutsideTable)
    }
}

/// 月日推求結果
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct MonthPosition {
    pub month: Month,
    pub day: u32,
    pub degradation: Option<Degradation>,
}

/// 在 `year` 年內依次扣減各月日數（閏月緊接同序平月），求 `residual` 所在月日。
///
/// 若 `residual` 超出全年，則定於末月末日，並標記 [`Degradation::Overrun`]。
///
/// # 用例
///
/// ```
/// use lunkalendaro::chinese::{walk, Month::*};
///
/// // 2025 年閏六月，正月至六月共 177 日
/// let pos = walk::resolve_month_day(2025, 177);
/// assert_eq!((Leap(6), 1), (pos.month, pos.day));
/// ```
pub fn resolve_month_day(year: i32, residual: u32) -> MonthPosition {
    let mut residual = residual;
    for month in table::months(year) {
        let days = table::month_days(year, month);
        if residual < days {
            return MonthPosition {
                month,
                day: residual + 1,
                degradation: None,
            };
        }
        residual -= days;
    }
    debug!(year, excess = residual, "offset overruns lunar year");
    let month = table::months(year).last().unwrap_or(Month::Common(12));
    MonthPosition {
        month,
        day: table::month_days(year, month),
        degradation: Some(Degradation::Overrun),
    }
}

/// 求農曆日期距曆元的日數，即 [`YearWalk::Accumulating`] 的逆運算。
///
/// 年份須在編碼表內，月、日須合乎當年月份；否則回報 `Err`。
pub fn offset_of(date: &LunarDate) -> Result<u32, LunarError> {
    let max_day = table::checked_month_days(date.year, date.month)?;
    if !(1..=max_day).contains(&date.day) {
        return Err(LunarError::InvalidDay {
            day: date.day,
            max_day,
        });
    }
    let years: u32 = (FIRST_YEAR..date.year).map(table::year_days).sum();
    let months: u32 = table::months(date.year)
        .take_while(|&m| m != date.month)
        .map(|m| table::month_days(date.year, m))
        .sum();
    Ok(years + months + date.day - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use Month::*;

    #[test]
    fn accumulating_years() {
        for (std, offset) in [
            ((1900, 0), 0),
            ((1900, 384), 384),
            ((1901, 0), 385),
            ((1901, 353), 738),
            ((1902, 0), 739),
        ] {
            let pos = resolve_year(offset, YearWalk::Accumulating);
            assert_eq!(std, (pos.year, pos.residual), "{offset}");
            assert_eq!(None, pos.degradation);
        }
        for (std, offset) in [(1999, 36494), (2025, 45654), (2100, 73383)] {
            let pos = resolve_year(offset, YearWalk::Accumulating);
            assert_eq!(std, pos.year, "{offset}");
            assert!(pos.residual < table::year_days(pos.year));
        }
    }

    #[test]
    fn accumulating_past_table() {
        let pos = resolve_year(73403, YearWalk::Accumulating);
        assert_eq!(
            YearPosition {
                year: 2101,
                residual: 0,
                degradation: Some(Degradation::OutsideTable)
            },
            pos
        );
        let pos = resolve_year(73403 + 360, YearWalk::Accumulating);
        assert_eq!((2102, 0), (pos.year, pos.residual));
        let pos = resolve_year(73403 + 360 * 1000 + 17, YearWalk::Accumulating);
        assert_eq!((3101, 17), (pos.year, pos.residual));
        let pos = resolve_year(u32::MAX, YearWalk::Accumulating);
        assert_eq!(Some(Degradation::OutsideTable), pos.degradation);
        assert_eq!(
            u32::MAX - 73403,
            (pos.year - 2101) as u32 * 360 + pos.residual
        );
    }

    #[test]
    fn legacy_years() {
        for offset in [0, 29, 236, 384] {
            assert_eq!(
                resolve_year(offset, YearWalk::Accumulating),
                resolve_year(offset, YearWalk::Legacy),
                "{offset}"
            );
        }
        for offset in [385, 36494, 45654, 73383, 100_000] {
            let pos = resolve_year(offset, YearWalk::Legacy);
            assert_eq!(
                YearPosition {
                    year: 2101,
                    residual: offset,
                    degradation: Some(Degradation::NonConvergent)
                },
                pos,
                "{offset}"
            );
        }
    }

    #[test]
    fn months_and_days() {
        let dataset = [
            ((1900, 0), (Common(1), 1)),
            ((1900, 236), (Leap(8), 1)),
            ((1900, 265), (Leap(8), 30)),
            ((1900, 266), (Common(9), 1)),
            ((1900, 384), (Common(12), 30)),
            ((2025, 6), (Common(1), 7)),
            ((2025, 176), (Common(6), 30)),
            ((2025, 177), (Leap(6), 1)),
            ((2025, 206), (Leap(6), 30)),
            ((2025, 207), (Common(7), 1)),
            ((2023, 59), (Leap(2), 1)),
        ];
        for ((year, residual), std) in dataset {
            let pos = resolve_month_day(year, residual);
            assert_eq!(std, (pos.month, pos.day), "{year} +{residual}");
            assert_eq!(None, pos.degradation);
        }
    }

    #[test]
    fn overrun_pins_last_day() {
        let pos = resolve_month_day(2025, 384);
        assert_eq!(
            MonthPosition {
                month: Common(12),
                day: 29,
                degradation: Some(Degradation::Overrun)
            },
            pos
        );
        let pos = resolve_month_day(2101, 36494);
        assert_eq!((Common(12), 30), (pos.month, pos.day));
    }

    #[test]
    fn inverse() {
        for offset in (0..73403).step_by(97) {
            let year = resolve_year(offset, YearWalk::Accumulating);
            let month = resolve_month_day(year.year, year.residual);
            let date = LunarDate {
                year: year.year,
                month: month.month,
                day: month.day,
            };
            assert_eq!(Ok(offset), offset_of(&date), "{date:?}");
        }
        assert_eq!(Ok(73402), offset_of(&LunarDate { year: 2100, month: Common(12), day: 29 }));
    }

    #[test]
    fn inverse_rejects_invalid() {
        let date = LunarDate { year: 2024, month: Leap(6), day: 1 };
        assert!(matches!(offset_of(&date), Err(LunarError::NoSuchLeapMonth { .. })));
        let date = LunarDate { year: 2025, month: Common(12), day: 30 };
        assert_eq!(Err(LunarError::InvalidDay { day: 30, max_day: 29 }), offset_of(&date));
        let date = LunarDate { year: 2101, month: Common(1), day: 1 };
        assert_eq!(Err(LunarError::YearOutOfRange { year: 2101 }), offset_of(&date));
    }
}
