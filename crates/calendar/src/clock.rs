//! Time-of-day conversions.

use crate::error::CalendarError;

/// Number of seconds in a day (leap seconds are folded into 23:59:59).
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Number of nanoseconds in a second.
pub const NANOS_PER_SECOND: u32 = 1_000_000_000;

/// Returns the number of seconds elapsed since midnight.
///
/// The components are not range-checked; callers validate them first.
pub fn seconds_of_day(hour: u8, minute: u8, second: u8) -> i64 {
    i64::from(hour) * 3600 + i64::from(minute) * 60 + i64::from(second)
}

/// Splits a second-of-day value into `(hour, minute, second)`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidSecondOfDay`] if `seconds` is not in
/// `0..86400`.
pub fn hms(seconds: i64) -> Result<(u8, u8, u8), CalendarError> {
    if !(0..SECONDS_PER_DAY).contains(&seconds) {
        return Err(CalendarError::InvalidSecondOfDay { seconds });
    }
    Ok((
        (seconds / 3600) as u8,
        (seconds % 3600 / 60) as u8,
        (seconds % 60) as u8,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seconds_of_day_values() {
        assert_eq!(seconds_of_day(0, 0, 0), 0);
        assert_eq!(seconds_of_day(1, 1, 1), 3661);
        assert_eq!(seconds_of_day(23, 59, 59), SECONDS_PER_DAY - 1);
    }

    #[test]
    fn hms_values() {
        assert_eq!(hms(0).unwrap(), (0, 0, 0));
        assert_eq!(hms(3661).unwrap(), (1, 1, 1));
        assert_eq!(hms(86_399).unwrap(), (23, 59, 59));
    }

    #[test]
    fn hms_rejects_out_of_day() {
        assert_eq!(
            hms(86_400).unwrap_err(),
            CalendarError::InvalidSecondOfDay { seconds: 86_400 }
        );
        assert!(hms(-1).is_err());
    }

    #[test]
    fn round_trip_whole_day() {
        for s in 0..SECONDS_PER_DAY {
            let (h, m, sec) = hms(s).unwrap();
            assert_eq!(seconds_of_day(h, m, sec), s);
        }
    }
}
