//! Calendar-independant date.

use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::DateError;

/// JDN of 0001-01-01 (proleptic Gregorian) minus one, i.e. the offset between
/// chrono's day count from the Common Era and the Julian day number.
const JDN_CE_OFFSET: i64 = 1_721_425;

/// A calendar-independant date.
///
/// Supported range begins from January 1, 4713 BC, proleptic Julian calendar.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Date {
    jdn: u32,
}

impl Date {
    /// Creates a `Date` with a Julian day number (JDN).
    pub const fn from_jdn(jdn: u32) -> Self {
        Self { jdn }
    }
    /// Returns the Julian day number (JDN) of the date.
    pub fn jdn(&self) -> u32 {
        self.jdn
    }

    /// Creates a `Date` with a Gregorian calendar date.
    ///
    /// `year` should be an astronomical year number, i.e. 1 BC is `0`, 2
    /// BC is `-1`, etc.
    ///
    /// # Errors
    ///
    /// Returns [`DateError`] if the month or day does not exist, or if the
    /// date falls before the start of the supported range.
    ///
    /// # Example
    ///
    /// ```
    /// use lunkalendaro::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!(2451545, date.jdn());
    /// assert!(Date::from_gregorian(2023, 2, 29).is_err());
    /// ```
    pub fn from_gregorian(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        if !(1..=12).contains(&month) {
            return Err(DateError::InvalidMonth { month });
        }
        let max_day = days_in_month(year, month);
        if !(1..=max_day).contains(&day) {
            return Err(DateError::InvalidDay {
                year,
                month,
                day,
                max_day,
            });
        }
        let (y, m, d) = (i64::from(year), i64::from(month), i64::from(day));
        let jdn = (1461 * (y + 4800 + (m - 14) / 12)) / 4
            + (367 * (m - 2 - 12 * ((m - 14) / 12))) / 12
            - (3 * ((y + 4900 + (m - 14) / 12) / 100)) / 4
            + d
            - 32075;
        u32::try_from(jdn)
            .map(Self::from_jdn)
            .map_err(|_| DateError::OutOfRange { year, month, day })
    }
    /// Represents the date in Gregorian calendar.
    ///
    /// Returns in `(year, month, day)` format.
    ///
    /// # Example
    ///
    /// ```
    /// use lunkalendaro::Date;
    ///
    /// let date = Date::from_jdn(2451545);
    /// assert_eq!((2000, 1, 1), date.gregorian());
    /// ```
    pub fn gregorian(&self) -> (i32, u32, u32) {
        let jdn = i64::from(self.jdn);
        let f = jdn + 1401 + (((4 * jdn + 274277) / 146097) * 3) / 4 - 38;
        let e = 4 * f + 3;
        let g = (e % 1461) / 4;
        let h = 5 * g + 2;
        let day = (h % 153) / 5 + 1;
        let month = (h / 153 + 2) % 12 + 1;
        let year = e / 1461 - 4716 + (12 + 2 - month) / 12;
        // u32 JDNs end well inside the i32 year range.
        (year as i32, month as u32, day as u32)
    }
    /// Formats the date in ISO 8601 format.
    ///
    /// # Example
    ///
    /// ```
    /// use lunkalendaro::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!("2000-01-01", date.iso_gregorian());
    /// ```
    pub fn iso_gregorian(&self) -> String {
        let (y, m, d) = self.gregorian();
        format!("{:04}-{:02}-{:02}", y, m, d)
    }
}

/// # Panics
///
/// Panics if the result leaves the JDN range of `u32`.
impl Add<i32> for Date {
    type Output = Date;
    fn add(self, rhs: i32) -> Self::Output {
        let jdn = self
            .jdn
            .checked_add_signed(rhs)
            .expect("date arithmetic out of JDN range");
        Date::from_jdn(jdn)
    }
}
impl Sub<Date> for Date {
    type Output = i64;
    fn sub(self, rhs: Date) -> Self::Output {
        i64::from(self.jdn) - i64::from(rhs.jdn)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.iso_gregorian())
    }
}

/// Parses `YYYY-MM-DD` (non-negative years only).
///
/// ```
/// use lunkalendaro::Date;
///
/// let date: Date = "2025-01-29".parse().unwrap();
/// assert_eq!((2025, 1, 29), date.gregorian());
/// ```
impl FromStr for Date {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_err = || DateError::Parse {
            input: s.to_owned(),
        };
        let mut parts = s.split('-');
        let (Some(y), Some(m), Some(d), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(parse_err());
        };
        let all_digits = |p: &str| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit());
        if !(all_digits(y) && all_digits(m) && all_digits(d)) {
            return Err(parse_err());
        }
        let year = y.parse().map_err(|_| parse_err())?;
        let month = m.parse().map_err(|_| parse_err())?;
        let day = d.parse().map_err(|_| parse_err())?;
        Self::from_gregorian(year, month, day)
    }
}

impl TryFrom<NaiveDate> for Date {
    type Error = DateError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        u32::try_from(i64::from(date.num_days_from_ce()) + JDN_CE_OFFSET)
            .map(Self::from_jdn)
            .map_err(|_| DateError::OutOfRange {
                year: date.year(),
                month: date.month(),
                day: date.day(),
            })
    }
}

impl Serialize for Date {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.iso_gregorian())
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Indicates whether a year is a leap year or common year.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum YearType {
    Common,
    Leap,
}

impl YearType {
    /// Determines if `year` is a leap year in Gregorian calendar.
    pub fn from_gregorian(year: i32) -> Self {
        if year % 4 == 0 && year % 100 != 0 || year % 400 == 0 {
            Self::Leap
        } else {
            Self::Common
        }
    }
    /// Returns `true` if `self` is `Leap`, otherwise `false`.
    pub fn is_leap(&self) -> bool {
        matches!(self, YearType::Leap)
    }
}

/// Number of days in a Gregorian month, `0` for a month outside `1..=12`.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => 28 + YearType::from_gregorian(year).is_leap() as u32,
        _ => 0,
    }
}
