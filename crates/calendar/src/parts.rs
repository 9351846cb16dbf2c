//! Calendar components of a point in time.

/// A UTC offset, as written after a time (`+01:30`, `-05`).
///
/// The offset is the amount local time is ahead of UTC when `negative` is
/// false, behind it otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct UtcOffset {
    pub negative: bool,
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
    pub nanos: u32,
}

impl UtcOffset {
    /// The zero offset, written `Z`.
    pub const UTC: UtcOffset = UtcOffset {
        negative: false,
        hours: 0,
        minutes: 0,
        seconds: 0,
        nanos: 0,
    };

    /// Creates an offset of whole hours and minutes; negative values put the
    /// local time behind UTC.
    pub fn hm(hours: i8, minutes: u8) -> Self {
        Self {
            negative: hours < 0,
            hours: hours.unsigned_abs(),
            minutes,
            ..Self::UTC
        }
    }

    /// Returns `true` if the offset is zero.
    pub fn is_zero(&self) -> bool {
        self.hours == 0 && self.minutes == 0 && self.seconds == 0 && self.nanos == 0
    }
}

/// An unvalidated bag of calendar components.
///
/// Values are produced by the text scanner or assembled directly, and are
/// validated only when packed into a time index. `second` may be 60 for a
/// leap second and `hour` may be 24 for end-of-day midnight; the packer
/// decides whether those are acceptable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeParts {
    pub year: i64,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    /// Fraction of the second, in nanoseconds.
    pub nanos: u32,
    pub offset: Option<UtcOffset>,
}

impl TimeParts {
    /// January 1st, 00:00 of `year`.
    pub fn new(year: i64) -> Self {
        Self {
            year,
            month: 1,
            day: 1,
            hour: 0,
            minute: 0,
            second: 0,
            nanos: 0,
            offset: None,
        }
    }

    /// Midnight at the start of the given date.
    pub fn ymd(year: i64, month: u8, day: u8) -> Self {
        Self {
            month,
            day,
            ..Self::new(year)
        }
    }

    /// The given date and time of day.
    pub fn ymd_hms(year: i64, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            hour,
            minute,
            second,
            ..Self::ymd(year, month, day)
        }
    }

    /// Sets the fraction of the second, in nanoseconds.
    pub fn with_nanos(mut self, nanos: u32) -> Self {
        self.nanos = nanos;
        self
    }

    /// Sets the UTC offset the components are expressed in.
    pub fn with_offset(mut self, offset: UtcOffset) -> Self {
        self.offset = Some(offset);
        self
    }
}

impl Default for TimeParts {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors() {
        let p = TimeParts::ymd_hms(2008, 6, 25, 10, 15, 30).with_nanos(5);
        assert_eq!(p.year, 2008);
        assert_eq!((p.month, p.day), (6, 25));
        assert_eq!((p.hour, p.minute, p.second), (10, 15, 30));
        assert_eq!(p.nanos, 5);
        assert_eq!(p.offset, None);
    }

    #[test]
    fn default_is_start_of_year_zero() {
        assert_eq!(TimeParts::default(), TimeParts::ymd(0, 1, 1));
    }

    #[test]
    fn offsets() {
        let west = UtcOffset::hm(-5, 30);
        assert!(west.negative);
        assert_eq!((west.hours, west.minutes), (5, 30));
        assert!(UtcOffset::UTC.is_zero());
        assert!(!west.is_zero());
    }
}
