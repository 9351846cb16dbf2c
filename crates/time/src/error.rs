//! Error types for the kalends-time crate.

use std::fmt;

use kalends_calendar::{CalendarError, Resolution};
use kalends_pattern::PatternError;

/// Broad category of a [`TimeError`], stable across releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed constructor input.
    InvalidArgument,
    /// An index outside the bounds of its domain.
    OutOfRange,
    /// A requested point that does not exist in the domain.
    UnreachableTime,
    /// Signed 64-bit wraparound in index arithmetic.
    Overflow,
    /// A base/sub unit combination with no implementation.
    UnsupportedPairing,
    /// Text that does not match the time grammar.
    ParseFailure,
    /// An operation between values of different domains.
    DomainMismatch,
}

impl ErrorKind {
    /// Returns the machine-readable key of this kind.
    pub fn key(self) -> &'static str {
        match self {
            ErrorKind::InvalidArgument => "invalid_argument",
            ErrorKind::OutOfRange => "out_of_range",
            ErrorKind::UnreachableTime => "unreachable_time",
            ErrorKind::Overflow => "overflow",
            ErrorKind::UnsupportedPairing => "unsupported_pairing",
            ErrorKind::ParseFailure => "parse_failure",
            ErrorKind::DomainMismatch => "domain_mismatch",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Error type for all fallible operations in the kalends-time crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TimeError {
    /// Returned when a domain definition is inconsistent.
    #[error("invalid domain definition: {reason}")]
    InvalidDefinition {
        /// What is wrong with the definition.
        reason: String,
    },

    /// Returned when a calendar component is outside its range.
    #[error("invalid {field}: {value}")]
    InvalidField {
        /// Name of the component.
        field: &'static str,
        /// The rejected value.
        value: i64,
    },

    /// Returned when a second of 60 is given on a day that cannot carry a
    /// leap second.
    #[error("leap second not allowed on {year:04}-{month:02}-{day:02}")]
    InvalidLeapSecond {
        /// Year of the request.
        year: i64,
        /// Month of the request.
        month: u8,
        /// Day of the request.
        day: u8,
    },

    /// Returned when a label is registered twice for different domains.
    #[error("label {label:?} already names a different domain")]
    LabelConflict {
        /// The contested label.
        label: String,
    },

    /// Returned when ranges are joined across a gap.
    #[error("ranges {left} and {right} are neither overlapping nor adjacent")]
    DisjointRanges {
        /// The first range.
        left: String,
        /// The second range.
        right: String,
    },

    /// Returned when a weekday is requested at a resolution coarser than a day.
    #[error("day of week is undefined at {resolution} resolution")]
    CoarseDayOfWeek {
        /// The effective resolution of the domain.
        resolution: Resolution,
    },

    /// Returned when an index is outside the bounds of its domain.
    #[error("index {index} is outside the domain bounds [0, {max}]")]
    OutOfRange {
        /// The rejected index.
        index: i64,
        /// The largest index of the domain.
        max: i64,
    },

    /// Returned when an offset from the domain origin does not fit in 32 bits.
    #[error("offset {offset} does not fit in a 32-bit integer")]
    OffsetOutOfRange {
        /// The offset that was computed.
        offset: i64,
    },

    /// Returned when a point lies before 0000-01-01 00:00 UTC.
    #[error("time lies before the start of the calendar")]
    BeforeCalendar,

    /// Returned when index arithmetic leaves the `i64` range.
    #[error("arithmetic overflow in {operation}")]
    Overflow {
        /// The computation that overflowed.
        operation: &'static str,
    },

    /// Returned when text does not match the time grammar.
    #[error("cannot parse {input:?}: {reason}")]
    Parse {
        /// The rejected text.
        input: String,
        /// What did not match.
        reason: &'static str,
    },

    /// Returned when an operation needs both operands in the same domain.
    #[error("domain mismatch: {left} vs {right}")]
    DomainMismatch {
        /// Description of the first domain.
        left: String,
        /// Description of the second domain.
        right: String,
    },

    /// Returned when an underlying calendar computation fails.
    #[error(transparent)]
    Calendar(#[from] CalendarError),

    /// Returned when an underlying pattern computation fails.
    #[error(transparent)]
    Pattern(#[from] PatternError),
}

impl TimeError {
    /// Returns the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            TimeError::InvalidDefinition { .. }
            | TimeError::InvalidField { .. }
            | TimeError::InvalidLeapSecond { .. }
            | TimeError::LabelConflict { .. }
            | TimeError::DisjointRanges { .. }
            | TimeError::CoarseDayOfWeek { .. } => ErrorKind::InvalidArgument,
            TimeError::OutOfRange { .. }
            | TimeError::OffsetOutOfRange { .. }
            | TimeError::BeforeCalendar => ErrorKind::OutOfRange,
            TimeError::Overflow { .. } => ErrorKind::Overflow,
            TimeError::Parse { .. } => ErrorKind::ParseFailure,
            TimeError::DomainMismatch { .. } => ErrorKind::DomainMismatch,
            TimeError::Calendar(e) => calendar_kind(e),
            TimeError::Pattern(e) => pattern_kind(e),
        }
    }

    /// Returns the machine-readable key of this error's kind.
    pub fn key(&self) -> &'static str {
        self.kind().key()
    }
}

fn calendar_kind(e: &CalendarError) -> ErrorKind {
    match e {
        CalendarError::Overflow { .. } => ErrorKind::Overflow,
        _ => ErrorKind::InvalidArgument,
    }
}

fn pattern_kind(e: &PatternError) -> ErrorKind {
    match e {
        PatternError::OffCycle { .. }
        | PatternError::MissingSubPeriod { .. }
        | PatternError::DeadSubPeriod { .. } => ErrorKind::UnreachableTime,
        PatternError::Overflow { .. } => ErrorKind::Overflow,
        PatternError::UnsupportedPairing { .. } => ErrorKind::UnsupportedPairing,
        PatternError::Calendar(e) => calendar_kind(e),
        PatternError::EmptyCycle
        | PatternError::InactiveCycle { .. }
        | PatternError::NegativeTime { .. }
        | PatternError::PositionOutOfRange { .. }
        | PatternError::EmptyRanks
        | PatternError::InvalidRank { .. }
        | PatternError::DuplicateRank { .. }
        | PatternError::DuplicateDayRank { .. }
        | PatternError::UnorderedDayRanks { .. } => ErrorKind::InvalidArgument,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_stable() {
        assert_eq!(ErrorKind::InvalidArgument.key(), "invalid_argument");
        assert_eq!(ErrorKind::UnreachableTime.to_string(), "unreachable_time");
        let e = TimeError::Overflow {
            operation: "index addition",
        };
        assert_eq!(e.key(), "overflow");
        assert_eq!(e.to_string(), "arithmetic overflow in index addition");
    }

    #[test]
    fn pattern_kinds_are_preserved() {
        let off = TimeError::from(PatternError::OffCycle { time: 7 });
        assert_eq!(off.kind(), ErrorKind::UnreachableTime);
        let pairing = TimeError::from(PatternError::UnsupportedPairing {
            base: Resolution::Day,
            sub: Resolution::Hour,
        });
        assert_eq!(pairing.kind(), ErrorKind::UnsupportedPairing);
        let overflow = TimeError::from(PatternError::Calendar(CalendarError::Overflow {
            operation: "day count",
        }));
        assert_eq!(overflow.kind(), ErrorKind::Overflow);
        assert_eq!(
            TimeError::from(PatternError::EmptyCycle).kind(),
            ErrorKind::InvalidArgument
        );
    }

    #[test]
    fn calendar_kinds_are_preserved() {
        let e = TimeError::from(CalendarError::InvalidMonth { month: 13 });
        assert_eq!(e.kind(), ErrorKind::InvalidArgument);
        assert_eq!(e.to_string(), "invalid month: 13 (must be 1..=12)");
    }

    #[test]
    fn out_of_range_message() {
        let e = TimeError::OutOfRange { index: -1, max: 10 };
        assert_eq!(e.to_string(), "index -1 is outside the domain bounds [0, 10]");
        assert_eq!(e.key(), "out_of_range");
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<TimeError>();
    }
}
