//! Time resolutions, from years down to nanoseconds.

use std::fmt;
use std::str::FromStr;

use crate::error::CalendarError;

/// Unit of a time index, ordered from coarsest to finest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Resolution {
    Year,
    Month,
    Day,
    Hour,
    Min,
    Sec,
    Msec,
    Usec,
    Nsec,
}

impl Resolution {
    /// All resolutions, coarsest first.
    pub const ALL: [Resolution; 9] = [
        Resolution::Year,
        Resolution::Month,
        Resolution::Day,
        Resolution::Hour,
        Resolution::Min,
        Resolution::Sec,
        Resolution::Msec,
        Resolution::Usec,
        Resolution::Nsec,
    ];

    /// Returns the lowercase name of the resolution.
    pub fn name(self) -> &'static str {
        match self {
            Resolution::Year => "year",
            Resolution::Month => "month",
            Resolution::Day => "day",
            Resolution::Hour => "hour",
            Resolution::Min => "min",
            Resolution::Sec => "sec",
            Resolution::Msec => "msec",
            Resolution::Usec => "usec",
            Resolution::Nsec => "nsec",
        }
    }

    /// Returns the number of fractional-second digits shown at this
    /// resolution (0 for second and coarser).
    pub fn fraction_digits(self) -> usize {
        match self {
            Resolution::Msec => 3,
            Resolution::Usec => 6,
            Resolution::Nsec => 9,
            _ => 0,
        }
    }

    /// Returns how many units of this resolution make one second, for
    /// second and finer resolutions.
    pub fn units_per_second(self) -> Option<i64> {
        match self {
            Resolution::Sec => Some(1),
            Resolution::Msec => Some(1_000),
            Resolution::Usec => Some(1_000_000),
            Resolution::Nsec => Some(1_000_000_000),
            _ => None,
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Resolution {
    type Err = CalendarError;

    /// Parses a resolution name, ignoring case. Common long forms such as
    /// `"minute"`, `"second"` and `"millisecond"` are accepted too.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "year" => Ok(Resolution::Year),
            "month" => Ok(Resolution::Month),
            "day" => Ok(Resolution::Day),
            "hour" => Ok(Resolution::Hour),
            "min" | "minute" => Ok(Resolution::Min),
            "sec" | "second" => Ok(Resolution::Sec),
            "msec" | "millisecond" => Ok(Resolution::Msec),
            "usec" | "microsecond" => Ok(Resolution::Usec),
            "nsec" | "nanosecond" => Ok(Resolution::Nsec),
            _ => Err(CalendarError::InvalidResolution {
                name: s.to_string(),
            }),
        }
    }
}
