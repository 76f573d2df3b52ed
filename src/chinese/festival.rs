//! 傳統節日

use super::{Month, fmt};

static FESTIVALS: [(&str, &str); 9] = [
    ("正月初一", "春节"),
    ("正月十五", "元宵节"),
    ("五月初五", "端午节"),
    ("七月初七", "七夕节"),
    ("八月十五", "中秋节"),
    ("九月初九", "重阳节"),
    ("腊月三十", "除夕"),
    ("腊月廿三", "小年"),
    ("腊月廿四", "小年"),
];

/// 以月名（含「月」字、不含「闰」字）與日名查找節日。
///
/// 鍵為兩者直接相接，須完全吻合；每日至多一個節日。
///
/// # 用例
///
/// ```
/// use lunkalendaro::chinese::festival;
///
/// assert_eq!(Some("春节"), festival::festival_for("正月", "初一"));
/// assert_eq!(Some("中秋节"), festival::festival_for("八月", "十五"));
/// assert_eq!(None, festival::festival_for("八月", "十六"));
/// ```
pub fn festival_for(month_name: &str, day_name: &str) -> Option<&'static str> {
    let key = format!("{month_name}{day_name}");
    FESTIVALS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|&(_, name)| name)
}

/// 取得農曆某月某日的節日。
///
/// 不分平閏：閏八月十五亦為中秋。除夕只認腊月三十，腊月小建之年無除夕。
pub fn festival_on(month: Month, day: u32) -> Option<&'static str> {
    festival_for(
        &format!("{}月", fmt::month_label(month.num())),
        fmt::day_name(day),
    )
}
