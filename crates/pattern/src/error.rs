//! Error types for the kalends-pattern crate.

use kalends_calendar::{CalendarError, Resolution, Weekday};

/// Error type for all fallible operations in the kalends-pattern crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PatternError {
    /// Returned when a cycle is built from an empty sequence.
    #[error("cycle pattern is empty")]
    EmptyCycle,

    /// Returned when a cycle has no ON position.
    #[error("cycle pattern of length {length} has no ON position")]
    InactiveCycle {
        /// Length of the rejected pattern.
        length: usize,
    },

    /// Returned when a negative time is compressed or expanded.
    #[error("negative time {time} cannot be mapped through a cycle")]
    NegativeTime {
        /// The rejected time.
        time: i64,
    },

    /// Returned when a time falls on an OFF position of a cycle.
    #[error("time {time} falls on an OFF position of the cycle")]
    OffCycle {
        /// The raw time that was requested.
        time: i64,
    },

    /// Returned when a requested sub-period value is not admissible and no
    /// adjustment was requested.
    #[error("sub-period value {value} is not admissible in base period {period}")]
    MissingSubPeriod {
        /// The base period index.
        period: i64,
        /// The requested sub-period value (month, day, or second of day).
        value: i64,
    },

    /// Returned when a sub-period position does not exist in its base period,
    /// for example day 31 in June or a fifth Friday.
    #[error("sub-period position {position} does not exist in this base period")]
    DeadSubPeriod {
        /// The position within the base period.
        position: usize,
    },

    /// Returned when a position is beyond the pattern size.
    #[error("sub-period position {position} is out of range (size {size})")]
    PositionOutOfRange {
        /// The rejected position.
        position: usize,
        /// The number of positions per base period.
        size: usize,
    },

    /// Returned when index arithmetic leaves the `i64` range.
    #[error("arithmetic overflow in {operation}")]
    Overflow {
        /// The computation that overflowed.
        operation: &'static str,
    },

    /// Returned for base/sub unit pairs that have no implementation.
    #[error("unsupported sub-period pairing: {base} -> {sub}")]
    UnsupportedPairing {
        /// The base unit.
        base: Resolution,
        /// The sub unit.
        sub: Resolution,
    },

    /// Returned when a sub-period pattern lists no positions.
    #[error("sub-period pattern has no positions")]
    EmptyRanks,

    /// Returned when a sub-period position is outside the range of its unit.
    #[error("invalid {unit} position: {rank}")]
    InvalidRank {
        /// The rejected position value.
        rank: i64,
        /// The sub unit the value was meant for.
        unit: Resolution,
    },

    /// Returned when a sub-period position is listed twice.
    #[error("duplicate sub-period position: {rank}")]
    DuplicateRank {
        /// The repeated value.
        rank: i64,
    },

    /// Returned when a weekday rank is listed twice.
    #[error("duplicate day ranking: {weekday} #{rank}")]
    DuplicateDayRank {
        /// The repeated weekday.
        weekday: Weekday,
        /// The repeated rank.
        rank: i32,
    },

    /// Returned when weekday ranks do not fall in the listed order in some
    /// period.
    #[error("day rankings are out of order in period {year}-{month:02}")]
    UnorderedDayRanks {
        /// Year of the first offending period.
        year: i64,
        /// Month of the first offending period (0 for a whole year).
        month: u8,
    },

    /// Returned when an underlying calendar computation fails.
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}
