//! 格式化日期相關功能
//!
//! 輸出一律為簡體字。無效輸入（月序不在 `1..=12`、日序不在 `1..=30`）得空字串，不 panic。

use super::Month;
use super::table::FIRST_YEAR;

static STEMS: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];
static BRANCHES: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];
static ZODIAC: [&str; 12] = [
    "鼠", "牛", "虎", "兔", "龙", "蛇", "马", "羊", "猴", "鸡", "狗", "猪",
];
static MONTH_LABELS: [&str; 12] = [
    "正", "二", "三", "四", "五", "六", "七", "八", "九", "十", "冬", "腊",
];
#[rustfmt::skip]
static DAY_LABELS: [&str; 30] = [
    "初一", "初二", "初三", "初四", "初五", "初六", "初七", "初八", "初九", "初十",
    "十一", "十二", "十三", "十四", "十五", "十六", "十七", "十八", "十九", "二十",
    "廿一", "廿二", "廿三", "廿四", "廿五", "廿六", "廿七", "廿八", "廿九", "三十",
];

/// 取得年名（含「年」字），以 1900 年為甲子起算。
///
/// 注意：此為沿用的舊算法，1900 年實為庚子年，故天干與史實相差六位（地支則相符）。需要與史實相符的干支請用 [`historical_year_name`]。
///
/// # 用例
///
/// ```
/// use lunkalendaro::chinese;
///
/// assert_eq!("甲子年", chinese::fmt::year_name(1900));
/// assert_eq!("己巳年", chinese::fmt::year_name(2025));
/// ```
pub fn year_name(year: i32) -> String {
    let k = year - FIRST_YEAR;
    format!(
        "{}{}年",
        STEMS[k.rem_euclid(10) as usize],
        BRANCHES[k.rem_euclid(12) as usize]
    )
}

/// 取得生肖，以 1900 年為鼠年起算。
///
/// ```
/// use lunkalendaro::chinese;
///
/// assert_eq!("蛇", chinese::fmt::zodiac(2025));
/// ```
pub fn zodiac(year: i32) -> &'static str {
    ZODIAC[(year - FIRST_YEAR).rem_euclid(12) as usize]
}

/// 取得月序的單字標籤（不含「月」字、不分平閏），十一、十二月為「冬」「腊」。
pub fn month_label(num: u32) -> &'static str {
    label(&MONTH_LABELS, num)
}

/// 取得月名（含「月」字），閏月冠以「闰」。
///
/// # 用例
///
/// ```
/// use lunkalendaro::chinese::{self, Month::*};
///
/// assert_eq!("正月", chinese::fmt::month_name(Common(1)));
/// assert_eq!("闰正月", chinese::fmt::month_name(Leap(1)));
/// assert_eq!("冬月", chinese::fmt::month_name(Common(11)));
/// assert_eq!("", chinese::fmt::month_name(Common(13)));
/// ```
pub fn month_name(m: Month) -> String {
    let label = month_label(m.num());
    if label.is_empty() {
        return String::new();
    }
    let mut rt = String::new();
    if m.is_leap() {
        rt += "闰";
    }
    rt += label;
    rt += "月";
    rt
}

/// 取得日名，前十日為「初一」到「初十」，第 21 至 29 日為「廿一」到「廿九」。
///
/// ```
/// use lunkalendaro::chinese;
///
/// assert_eq!("初十", chinese::fmt::day_name(10));
/// assert_eq!("廿五", chinese::fmt::day_name(25));
/// assert_eq!("三十", chinese::fmt::day_name(30));
/// ```
pub fn day_name(d: u32) -> &'static str {
    label(&DAY_LABELS, d)
}

fn label(labels: &[&'static str], num: u32) -> &'static str {
    num.checked_sub(1)
        .and_then(|i| labels.get(i as usize))
        .copied()
        .unwrap_or("")
}

/// 干支序號轉為文本形式，`1..=60` 對應甲子到癸亥。
///
/// ```
/// use lunkalendaro::chinese;
///
/// assert_eq!("乙巳", chinese::fmt::sexagenary(42));
/// ```
pub fn sexagenary(num: u32) -> String {
    STEMS[((num + 9) % 10) as usize].to_owned() + BRANCHES[((num + 11) % 12) as usize]
}

/// 取得與史實相符的年名（含「年」字）。
///
/// ```
/// use lunkalendaro::chinese;
///
/// assert_eq!("庚子年", chinese::fmt::historical_year_name(1900));
/// assert_eq!("乙巳年", chinese::fmt::historical_year_name(2025));
/// ```
pub fn historical_year_name(year: i32) -> String {
    sexagenary(super::sexagenary_for_year(year)) + "年"
}

/// 節氣序號轉為名稱。`1..=24` 分別為立春到大寒。
///
/// ```
/// use lunkalendaro::chinese;
///
/// assert_eq!("谷雨", chinese::fmt::solar_term(6));
/// ```
pub fn solar_term(term: u32) -> &'static str {
    const NAMES: &[&str] = &[
        "大寒", "立春", "雨水", "惊蛰", "春分", "清明", "谷雨", "立夏", "小满", "芒种", "夏至",
        "小暑", "大暑", "立秋", "处暑", "白露", "秋分", "寒露", "霜降", "立冬", "小雪", "大雪",
        "冬至", "小寒",
    ];
    NAMES[(term % 24) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use Month::*;

    #[test]
    fn test_year_name() {
        for (std, year) in [("甲子年", 1900), ("癸酉年", 1909), ("甲戌年", 1910), ("戊辰年", 2024), ("甲申年", 2100)] {
            assert_eq!(std, year_name(year));
        }
    }

    #[test]
    fn test_zodiac() {
        for (std, year) in [("鼠", 1900), ("猪", 1911), ("龙", 2024), ("蛇", 2025), ("猴", 2100)] {
            assert_eq!(std, zodiac(year));
        }
    }

    #[test]
    fn legacy_branch_matches_history() {
        // 只有天干錯位，地支與生肖仍與史實相符
        for year in [1900, 1949, 2000, 2025, 2100] {
            assert_eq!(
                year_name(year).chars().nth(1),
                historical_year_name(year).chars().nth(1),
                "{year}"
            );
        }
        assert_ne!(year_name(1900), historical_year_name(1900));
    }

    #[test]
    fn test_month_name() {
        for (std, m) in [
            ("正月", Common(1)),
            ("闰正月", Leap(1)),
            ("十月", Common(10)),
            ("闰六月", Leap(6)),
            ("腊月", Common(12)),
            ("", Common(0)),
            ("", Leap(13)),
        ] {
            assert_eq!(std, month_name(m));
        }
        assert_eq!("腊", month_label(12));
        assert_eq!("", month_label(0));
    }

    #[test]
    fn test_day_name() {
        for (std, d) in [
            ("初一", 1),
            ("初十", 10),
            ("十一", 11),
            ("二十", 20),
            ("廿一", 21),
            ("三十", 30),
            ("", 0),
            ("", 31),
        ] {
            assert_eq!(std, day_name(d));
        }
    }

    #[test]
    fn test_sexagenary() {
        for (std, num) in [("甲子", 1), ("庚寅", 27), ("庚子", 37), ("癸亥", 60)] {
            assert_eq!(std, sexagenary(num));
        }
    }

    #[test]
    fn test_solar_term() {
        for (std, term) in [("立春", 1), ("春分", 4), ("冬至", 22), ("大寒", 24)] {
            assert_eq!(std, solar_term(term));
        }
    }
}
