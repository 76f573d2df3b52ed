use lunkalendaro::Date;
use lunkalendaro::chinese::{
    self, ConversionOptions, Converter, Degradation, LunarDate, Month::*, YearWalk, festival, fmt,
    table,
};

fn date(y: i32, m: u32, d: u32) -> Date {
    Date::from_gregorian(y, m, d).unwrap()
}

fn converter(year_walk: YearWalk) -> Converter {
    Converter::new(ConversionOptions { year_walk })
}

#[test]
fn epoch_is_first_day_of_1900() {
    for walk in [YearWalk::Accumulating, YearWalk::Legacy] {
        let lunar = converter(walk).solar_to_lunar(chinese::EPOCH).unwrap();
        assert_eq!(
            LunarDate {
                year: 1900,
                month: Common(1),
                day: 1
            },
            lunar.lunar,
            "{walk:?}"
        );
    }
}

#[test]
fn year_lengths_sum_months() {
    for year in table::FIRST_YEAR..=table::LAST_YEAR {
        let days = table::year_days(year);
        assert!((353..=385).contains(&days), "{year}: {days}");
        let sum: u32 = table::months(year).map(|m| table::month_days(year, m)).sum();
        assert_eq!(sum, days, "{year}");
        let leap = table::leap_month(year);
        assert!(leap <= 12, "{year}");
        assert_eq!(12 + (leap > 0) as usize, table::months(year).count(), "{year}");
    }
}

#[test]
fn labels() {
    assert_eq!("蛇", fmt::zodiac(2025));
    assert_eq!("正月", fmt::month_name(Common(1)));
    assert_eq!("闰正月", fmt::month_name(Leap(1)));
    assert_eq!(Some("春节"), festival::festival_for("正月", "初一"));
    assert_eq!(Some("中秋节"), festival::festival_for("八月", "十五"));
    assert_eq!(None, festival::festival_for("三月", "初三"));
}

#[test]
fn known_dates_accumulating() {
    let walk = converter(YearWalk::Accumulating);
    for ((y, m, d), std) in [
        ((2000, 1, 1), (1999, Common(12), 1)),
        ((2025, 1, 29), (2025, Common(1), 7)),
        ((2100, 12, 31), (2100, Common(12), 10)),
    ] {
        let lunar = walk.solar_to_lunar(date(y, m, d)).unwrap();
        assert_eq!(std, (lunar.lunar.year, lunar.lunar.month, lunar.lunar.day));
        assert!(lunar.is_authoritative());
    }
}

#[test]
fn known_dates_legacy() {
    // The non-subtracting walk never stops inside the table for these dates.
    let walk = converter(YearWalk::Legacy);
    for (y, m, d) in [(2000, 1, 1), (2025, 1, 29), (2100, 12, 31)] {
        let lunar = walk.solar_to_lunar(date(y, m, d)).unwrap();
        assert_eq!(Some(Degradation::NonConvergent), lunar.degradation);
        assert_eq!(2101, lunar.lunar.year);
        assert!((1..=30).contains(&lunar.lunar.day));
        assert!(!lunar.year_name.is_empty() && !lunar.day_name.is_empty());
    }
}

#[test]
fn round_trip_accumulating() {
    let walk = converter(YearWalk::Accumulating);
    let last = date(2101, 1, 19);
    let mut day = chinese::EPOCH;
    while day <= last {
        let lunar = walk.solar_to_lunar(day).unwrap();
        assert!(lunar.is_authoritative(), "{day}");
        assert_eq!(Ok(day), chinese::lunar_to_solar(&lunar.lunar), "{day}");
        day = day + 13;
    }
    let lunar = walk.solar_to_lunar(last).unwrap();
    assert_eq!((2100, Common(12), 29), (lunar.lunar.year, lunar.lunar.month, lunar.lunar.day));
}

#[test]
fn round_trip_legacy_is_lossy() {
    let walk = converter(YearWalk::Legacy);
    let day = date(1901, 2, 19);
    let lunar = walk.solar_to_lunar(day).unwrap();
    assert_eq!(Ok(day), chinese::lunar_to_solar(&lunar.lunar));

    // 2101 lies outside the table, so there is nothing to map back to.
    let day = date(1901, 2, 20);
    let lunar = walk.solar_to_lunar(day).unwrap();
    assert!(chinese::lunar_to_solar(&lunar.lunar).is_err());
}

#[test]
fn invariants_hold_in_range() {
    let mut day = chinese::EPOCH;
    while day < date(2101, 1, 20) {
        let lunar = chinese::solar_to_lunar(day).unwrap();
        let LunarDate { year, month, day: d } = lunar.lunar;
        assert!(d >= 1 && d <= table::month_days(year, month), "{day}");
        if month.is_leap() {
            assert_eq!(table::leap_month(year), month.num(), "{day}");
        }
        day = day + 29;
    }
}

#[test]
fn forms_via_facade() {
    let day = date(2025, 1, 23);
    assert_eq!(Ok("己巳年 蛇年 正月初一 【春节】".to_owned()), chinese::long_form(day));
    assert_eq!(Ok("农历正月初一 | 春节".to_owned()), chinese::short_form(day));

    let day = date(2024, 1, 28);
    assert_eq!(Ok("农历腊月廿三 | 小年".to_owned()), chinese::short_form(day));
}

#[test]
fn before_epoch_is_error() {
    assert!(chinese::solar_to_lunar(date(1899, 12, 31)).is_err());
    assert!(chinese::long_form(date(1900, 1, 30)).is_err());
}
