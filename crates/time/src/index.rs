//! Immutable points in time.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, OnceLock};

use kalends_calendar::{TimeParts, Weekday};
use kalends_pattern::Adjustment;

use crate::domain::TimeDomain;
use crate::error::TimeError;

/// A point in time: an index into a [`TimeDomain`].
///
/// Values are created through the domain (`time`, `time_from_str`, ...)
/// and always hold a valid index. The calendar components are computed on
/// first use and kept.
///
/// Equality and hashing use the domain and the index. Values in different
/// domains are ordered with [`compare`](Self::compare), which goes through
/// pattern-free domains.
///
/// # Example
///
/// ```
/// use kalends_calendar::Resolution;
/// use kalends_pattern::Adjustment;
/// use kalends_time::TimeDomain;
///
/// let sec = TimeDomain::unrestricted(Resolution::Sec);
/// let t = sec.time_from_str("2008-12-31 23:59:60", Adjustment::None).unwrap();
/// assert_eq!(t.to_string(), "2008-12-31 23:59:59");
/// assert_eq!(t.next().unwrap().to_string(), "2009-01-01 00:00:00");
/// ```
#[derive(Clone)]
pub struct TimeIndex {
    domain: Arc<TimeDomain>,
    index: i64,
    parts: OnceLock<TimeParts>,
}

impl TimeIndex {
    /// Wraps an index the domain has already validated, with its components
    /// when they were computed during validation.
    pub(crate) fn from_checked(
        domain: Arc<TimeDomain>,
        index: i64,
        parts: Option<TimeParts>,
    ) -> Self {
        Self {
            domain,
            index,
            parts: parts.map_or_else(OnceLock::new, OnceLock::from),
        }
    }

    pub fn domain(&self) -> &Arc<TimeDomain> {
        &self.domain
    }

    /// Returns the raw index.
    pub fn index(&self) -> i64 {
        self.index
    }

    /// Returns the index relative to the domain origin.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::OffsetOutOfRange`] if the offset does not fit in
    /// an `i32`.
    pub fn offset(&self) -> Result<i32, TimeError> {
        self.domain.offset_of(self.index)
    }

    /// Returns the calendar components, in UTC.
    pub fn parts(&self) -> TimeParts {
        *self.parts.get_or_init(|| {
            self.domain
                .unpack(self.index)
                .expect("index was validated by its domain")
        })
    }

    pub fn year(&self) -> i64 {
        self.parts().year
    }

    pub fn month(&self) -> u8 {
        self.parts().month
    }

    pub fn day(&self) -> u8 {
        self.parts().day
    }

    /// Returns the weekday.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::CoarseDayOfWeek`] for domains coarser than a day.
    pub fn day_of_week(&self) -> Result<Weekday, TimeError> {
        self.domain.day_of_week(self.index)
    }

    /// Returns the time `n` indices later (earlier for negative `n`).
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::Overflow`] when the index wraps and
    /// [`TimeError::OutOfRange`] when it leaves the domain.
    pub fn add(&self, n: i64) -> Result<TimeIndex, TimeError> {
        let index = self.index.checked_add(n).ok_or(TimeError::Overflow {
            operation: "index addition",
        })?;
        self.domain.time(index)
    }

    /// Returns the number of indices from `other` to `self`.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::DomainMismatch`] when the domains differ.
    pub fn sub(&self, other: &TimeIndex) -> Result<i64, TimeError> {
        self.same_domain(other)?;
        self.index
            .checked_sub(other.index)
            .ok_or(TimeError::Overflow {
                operation: "index subtraction",
            })
    }

    pub fn next(&self) -> Result<TimeIndex, TimeError> {
        self.add(1)
    }

    pub fn previous(&self) -> Result<TimeIndex, TimeError> {
        self.add(-1)
    }

    /// Re-expresses this time in another domain.
    pub fn convert(
        &self,
        domain: &Arc<TimeDomain>,
        adjust: Adjustment,
    ) -> Result<TimeIndex, TimeError> {
        if self.domain == *domain {
            return Ok(self.clone());
        }
        domain.time_from_parts(&self.parts(), adjust)
    }

    /// Orders two times, possibly from different domains.
    ///
    /// Times in the same domain compare by index. Otherwise the coarser one
    /// is moved to the unrestricted domain of the finer resolution; at equal
    /// resolutions both are moved to the unrestricted domain of that
    /// resolution.
    pub fn compare(&self, other: &TimeIndex) -> Result<Ordering, TimeError> {
        if self.domain == other.domain {
            return Ok(self.index.cmp(&other.index));
        }
        let (mine, theirs) = (self.domain.resolution(), other.domain.resolution());
        match mine.cmp(&theirs) {
            Ordering::Less => {
                let finer = TimeDomain::unrestricted(theirs);
                self.convert(&finer, Adjustment::None)?.compare(other)
            }
            Ordering::Greater => {
                let finer = TimeDomain::unrestricted(mine);
                self.compare(&other.convert(&finer, Adjustment::None)?)
            }
            Ordering::Equal => {
                let common = TimeDomain::unrestricted(mine);
                let a = self.convert(&common, Adjustment::None)?;
                let b = other.convert(&common, Adjustment::None)?;
                Ok(a.index.cmp(&b.index))
            }
        }
    }

    pub(crate) fn same_domain(&self, other: &TimeIndex) -> Result<(), TimeError> {
        if self.domain != other.domain {
            return Err(TimeError::DomainMismatch {
                left: self.domain.to_string(),
                right: other.domain.to_string(),
            });
        }
        Ok(())
    }
}

impl PartialEq for TimeIndex {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && self.domain == other.domain
    }
}

impl Eq for TimeIndex {}

impl Hash for TimeIndex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.domain.hash(state);
        self.index.hash(state);
    }
}

impl fmt::Display for TimeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.domain.format(&self.parts()))
    }
}

impl fmt::Debug for TimeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimeIndex")
            .field("domain", &format_args!("{}", self.domain))
            .field("index", &self.index)
            .finish()
    }
}
