//! Utilities for converting Gregorian dates into the Chinese lunisolar
//! calendar.
//!
//! The conversion is driven by a packed per-year table covering lunar years
//! 1900 through 2100, counted from the epoch 1900-01-31 (the first day of
//! the first month of lunar year 1900). Besides the lunar year, month and
//! day, each conversion yields the stem-branch year name, zodiac animal,
//! month and day names, a traditional festival and one of eight
//! approximately-dated solar terms.
//!
//! # Examples
//!
//! Basic usage with [`Date`]:
//!
//! ```
//! use lunkalendaro::Date;
//!
//! let date = Date::from_gregorian(2000, 1, 1).unwrap();
//! assert_eq!(2451545, date.jdn());
//! ```
//!
//! Chinese lunisolar calendar:
//!
//! ```
//! use lunkalendaro::Date;
//! use lunkalendaro::chinese::{self, Month::*};
//!
//! let date = Date::from_gregorian(2024, 2, 4).unwrap();
//! let lunar = chinese::solar_to_lunar(date).unwrap();
//!
//! assert_eq!((2024, Common(1), 1), (lunar.lunar.year, lunar.lunar.month, lunar.lunar.day));
//! assert_eq!("戊辰年 龙年 正月初一 【春节】 【立春】", lunar.long_form());
//! assert_eq!("农历正月初一 | 春节 | 立春", lunar.short_form());
//! ```
//!
//! # Limitations
//!
//! - Lunar years outside 1900..=2100 fall back to 30-day months; such
//!   results carry a [`chinese::Degradation`] and must not be shown as
//!   authoritative.
//! - Only 8 of the 24 solar terms are recognized, by fixed Gregorian dates.
//! - Year names count 1900 as 甲子, which is not historically accurate for
//!   the stem (see [`chinese::fmt::historical_year_name`]).

pub mod chinese;
pub mod date;
pub mod error;

pub use date::{Date, YearType};
pub use error::{DateError, LunarError};
