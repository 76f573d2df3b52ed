//! 近似節氣
//!
//! 僅以公曆月日比對八個節氣（四立、二分、二至），每節氣取兩個候選日以兼顧閏年漂移。並非天文計算，其餘十六節氣不予識別。

use std::fmt;

use serde::{Serialize, Serializer};

use crate::date::Date;

/// 可識別的八個節氣
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum SolarTerm {
    /// 立春
    StartOfSpring,
    /// 春分
    SpringEquinox,
    /// 立夏
    StartOfSummer,
    /// 夏至
    SummerSolstice,
    /// 立秋
    StartOfAutumn,
    /// 秋分
    AutumnEquinox,
    /// 立冬
    StartOfWinter,
    /// 冬至
    WinterSolstice,
}

use SolarTerm::*;

/// `(節氣, 公曆月, 候選日)`
static TERM_DATES: [(SolarTerm, u32, [u32; 2]); 8] = [
    (StartOfSpring, 2, [4, 5]),
    (SpringEquinox, 3, [20, 21]),
    (StartOfSummer, 5, [5, 6]),
    (SummerSolstice, 6, [21, 22]),
    (StartOfAutumn, 8, [7, 8]),
    (AutumnEquinox, 9, [22, 23]),
    (StartOfWinter, 11, [7, 8]),
    (WinterSolstice, 12, [21, 22]),
];

impl SolarTerm {
    /// 二十四節氣序號，`1..=24` 對應立春到大寒。
    pub fn index(&self) -> u32 {
        match self {
            StartOfSpring => 1,
            SpringEquinox => 4,
            StartOfSummer => 7,
            SummerSolstice => 10,
            StartOfAutumn => 13,
            AutumnEquinox => 16,
            StartOfWinter => 19,
            WinterSolstice => 22,
        }
    }
    /// 節氣名稱
    pub fn name(&self) -> &'static str {
        super::fmt::solar_term(self.index())
    }
}

impl fmt::Display for SolarTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for SolarTerm {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// 依公曆月日估算節氣，不在候選日則返回 `None`。
///
/// # 用例
///
/// ```
/// use lunkalendaro::chinese::{SolarTerm, solar_term};
///
/// assert_eq!(Some(SolarTerm::StartOfSpring), solar_term::estimate(2, 4));
/// assert_eq!(None, solar_term::estimate(2, 6));
/// ```
pub fn estimate(month: u32, day: u32) -> Option<SolarTerm> {
    TERM_DATES
        .iter()
        .find(|(_, m, days)| *m == month && days.contains(&day))
        .map(|&(term, _, _)| term)
}

/// 依公曆日期估算節氣。
pub fn estimate_for(date: Date) -> Option<SolarTerm> {
    let (_, month, day) = date.gregorian();
    estimate(month, day)
}
