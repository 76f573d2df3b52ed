//! Error types for date construction and checked lunar-calendar queries.
//!
//! Conversions themselves never fail for dates on or after the epoch; see
//! [`crate::chinese::Degradation`] for the soft failure modes.

/// Error returned when a Gregorian date cannot be built or parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// Month number outside `1..=12`.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth { month: u32 },

    /// Day number outside the length of the given month.
    #[error("invalid day: {day} for {year:04}-{month:02} (max {max_day})")]
    InvalidDay {
        year: i32,
        month: u32,
        day: u32,
        max_day: u32,
    },

    /// Date precedes the start of the Julian day count.
    #[error("date {year}-{month:02}-{day:02} is out of supported range")]
    OutOfRange { year: i32, month: u32, day: u32 },

    /// Text is not of the form `YYYY-MM-DD`.
    #[error("cannot parse {input:?} as a YYYY-MM-DD date")]
    Parse { input: String },
}

/// Error returned by checked lunar-calendar queries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LunarError {
    /// The Gregorian date lies before 1900-01-31.
    #[error("date is {days} day(s) before the 1900-01-31 epoch")]
    BeforeEpoch { days: u32 },

    /// Lunar year not covered by the encoding table.
    #[error("lunar year {year} is outside the table (1900..=2100)")]
    YearOutOfRange { year: i32 },

    /// Month number outside `1..=12`.
    #[error("invalid lunar month: {month} (must be 1..=12)")]
    InvalidMonth { month: u32 },

    /// Leap month requested for a month that is not the year's leap month.
    #[error("lunar year {year} has no leap month {month} (leap month: {leap})")]
    NoSuchLeapMonth { year: i32, month: u32, leap: u32 },

    /// Day number outside the resolved month length.
    #[error("invalid lunar day: {day} (month has {max_day} days)")]
    InvalidDay { day: u32, max_day: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_error_messages() {
        let err = DateError::InvalidMonth { month: 13 };
        assert_eq!(err.to_string(), "invalid month: 13 (must be 1..=12)");
        let err = DateError::InvalidDay {
            year: 2023,
            month: 2,
            day: 29,
            max_day: 28,
        };
        assert_eq!(err.to_string(), "invalid day: 29 for 2023-02 (max 28)");
        let err = DateError::Parse {
            input: "2023/02/01".into(),
        };
        assert_eq!(
            err.to_string(),
            "cannot parse \"2023/02/01\" as a YYYY-MM-DD date"
        );
    }

    #[test]
    fn lunar_error_messages() {
        let err = LunarError::NoSuchLeapMonth {
            year: 2024,
            month: 6,
            leap: 0,
        };
        assert_eq!(
            err.to_string(),
            "lunar year 2024 has no leap month 6 (leap month: 0)"
        );
        let err = LunarError::BeforeEpoch { days: 1 };
        assert_eq!(err.to_string(), "date is 1 day(s) before the 1900-01-31 epoch");
    }

    #[test]
    fn errors_are_send_sync_std_error() {
        fn assert_impl<T: std::error::Error + Send + Sync + 'static>() {}
        assert_impl::<DateError>();
        assert_impl::<LunarError>();
    }
}
