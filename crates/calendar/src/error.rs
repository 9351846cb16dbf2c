//! Error types for the kalends-calendar crate.

/// Error type for all fallible operations in the kalends-calendar crate.
///
/// Every variant carries the offending input so callers can report it
/// without re-deriving context.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum CalendarError {
    /// Returned when a year is negative. The calendar starts at year 0.
    #[error("invalid year: {year} (must be >= 0)")]
    InvalidYear {
        /// The invalid year.
        year: i64,
    },

    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the number of days in the given month.
    #[error("invalid day: {day} for month {month} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The maximum valid day for the given month.
        max_day: u8,
    },

    /// Returned when a day-of-year value is outside 1..=365 (or 1..=366 in a leap year).
    #[error("invalid day of year: {day_of_year} (max {max})")]
    InvalidDayOfYear {
        /// The invalid day-of-year value.
        day_of_year: u16,
        /// The length of the year in question.
        max: u16,
    },

    /// Returned when an absolute day count is negative.
    #[error("invalid day count: {days} (must be >= 0)")]
    InvalidDayCount {
        /// The invalid day count.
        days: i64,
    },

    /// Returned when a second-of-day value is outside 0..86400.
    #[error("invalid second of day: {seconds} (must be 0..86400)")]
    InvalidSecondOfDay {
        /// The invalid number of seconds.
        seconds: i64,
    },

    /// Returned when a weekday rank is zero or exceeds the period maximum.
    #[error("invalid rank: {rank} (must be non-zero with magnitude <= {max_rank})")]
    InvalidRank {
        /// The invalid rank.
        rank: i32,
        /// The largest magnitude accepted for the period.
        max_rank: i32,
    },

    /// Returned when a weekday name or number cannot be recognized.
    #[error("invalid weekday: {name:?}")]
    InvalidWeekday {
        /// The unrecognized input.
        name: String,
    },

    /// Returned when a resolution name cannot be recognized.
    #[error("invalid resolution: {name:?}")]
    InvalidResolution {
        /// The unrecognized input.
        name: String,
    },

    /// Returned when an intermediate day or second count leaves the `i64` range.
    #[error("arithmetic overflow in {operation}")]
    Overflow {
        /// The computation that overflowed.
        operation: &'static str,
    },
}
