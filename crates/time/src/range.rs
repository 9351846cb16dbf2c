//! Closed intervals of time indices.

use std::fmt;
use std::sync::Arc;

use crate::domain::TimeDomain;
use crate::error::TimeError;
use crate::index::TimeIndex;

/// A closed interval `[first, last]` of indices in one domain.
///
/// All empty ranges of a domain are equal.
///
/// # Example
///
/// ```
/// use kalends_calendar::Resolution;
/// use kalends_pattern::Adjustment;
/// use kalends_time::{Range, TimeDomain};
///
/// let day = TimeDomain::unrestricted(Resolution::Day);
/// let first = day.time_from_str("2008-06-29", Adjustment::None).unwrap();
/// let last = day.time_from_str("2008-07-01", Adjustment::None).unwrap();
/// let range = Range::new(&first, &last).unwrap();
/// assert_eq!(range.len(), 3);
/// assert_eq!(range.to_string(), "[2008-06-29, 2008-07-01]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Range {
    domain: Arc<TimeDomain>,
    first: i64,
    last: i64,
}

impl Range {
    /// Creates the range between two times of the same domain. The range is
    /// empty when `first` is after `last`.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::DomainMismatch`] when the domains differ.
    pub fn new(first: &TimeIndex, last: &TimeIndex) -> Result<Self, TimeError> {
        first.same_domain(last)?;
        Ok(Self::canonical(
            Arc::clone(first.domain()),
            first.index(),
            last.index(),
        ))
    }

    /// Creates a range from raw indices.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::OutOfRange`] when a bound of a non-empty range
    /// is outside the domain.
    pub fn from_indices(domain: &Arc<TimeDomain>, first: i64, last: i64) -> Result<Self, TimeError> {
        if first <= last {
            domain.valid(first)?;
            domain.valid(last)?;
        }
        Ok(Self::canonical(Arc::clone(domain), first, last))
    }

    pub fn empty(domain: &Arc<TimeDomain>) -> Self {
        Self::canonical(Arc::clone(domain), 0, -1)
    }

    fn canonical(domain: Arc<TimeDomain>, first: i64, last: i64) -> Self {
        if first > last {
            Self {
                domain,
                first: 0,
                last: -1,
            }
        } else {
            Self {
                domain,
                first,
                last,
            }
        }
    }

    pub fn domain(&self) -> &Arc<TimeDomain> {
        &self.domain
    }

    pub fn is_empty(&self) -> bool {
        self.first > self.last
    }

    /// Returns the number of indices covered.
    pub fn len(&self) -> u64 {
        if self.is_empty() {
            0
        } else {
            (self.last - self.first) as u64 + 1
        }
    }

    /// Returns the first index, or `None` if the range is empty.
    pub fn first_index(&self) -> Option<i64> {
        (!self.is_empty()).then_some(self.first)
    }

    /// Returns the last index, or `None` if the range is empty.
    pub fn last_index(&self) -> Option<i64> {
        (!self.is_empty()).then_some(self.last)
    }

    /// Returns the earliest existing time in the range.
    pub fn first(&self) -> Option<TimeIndex> {
        self.iter().next()
    }

    /// Returns the latest existing time in the range.
    pub fn last(&self) -> Option<TimeIndex> {
        self.iter().next_back()
    }

    pub fn contains(&self, time: &TimeIndex) -> bool {
        self.domain == *time.domain() && (self.first..=self.last).contains(&time.index())
    }

    /// Joins two overlapping or adjacent ranges.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::DomainMismatch`] when the domains differ and
    /// [`TimeError::DisjointRanges`] when a gap separates the ranges.
    pub fn union(&self, other: &Range) -> Result<Range, TimeError> {
        self.same_domain(other)?;
        if self.is_empty() {
            return Ok(other.clone());
        }
        if other.is_empty() {
            return Ok(self.clone());
        }
        let (low, high) = if self.first <= other.first {
            (self, other)
        } else {
            (other, self)
        };
        if high.first - low.last > 1 {
            return Err(TimeError::DisjointRanges {
                left: self.to_string(),
                right: other.to_string(),
            });
        }
        Ok(Self::canonical(
            Arc::clone(&self.domain),
            low.first,
            low.last.max(high.last),
        ))
    }

    /// Returns the indices common to both ranges.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::DomainMismatch`] when the domains differ.
    pub fn intersection(&self, other: &Range) -> Result<Range, TimeError> {
        self.same_domain(other)?;
        if self.is_empty() || other.is_empty() {
            return Ok(Self::empty(&self.domain));
        }
        Ok(Self::canonical(
            Arc::clone(&self.domain),
            self.first.max(other.first),
            self.last.min(other.last),
        ))
    }

    /// Iterates over the existing times in the range, skipping sub-period
    /// positions that are absent from their base period.
    pub fn iter(&self) -> RangeIter {
        RangeIter {
            domain: Arc::clone(&self.domain),
            bounds: (!self.is_empty()).then_some((self.first, self.last)),
        }
    }

    fn same_domain(&self, other: &Range) -> Result<(), TimeError> {
        if self.domain != other.domain {
            return Err(TimeError::DomainMismatch {
                left: self.domain.to_string(),
                right: other.domain.to_string(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.first(), self.last()) {
            (Some(first), Some(last)) => write!(f, "[{first}, {last}]"),
            _ => f.write_str("[]"),
        }
    }
}

impl IntoIterator for &Range {
    type Item = TimeIndex;
    type IntoIter = RangeIter;

    fn into_iter(self) -> RangeIter {
        self.iter()
    }
}

/// Iterator over the times of a [`Range`].
#[derive(Debug, Clone)]
pub struct RangeIter {
    domain: Arc<TimeDomain>,
    bounds: Option<(i64, i64)>,
}

impl Iterator for RangeIter {
    type Item = TimeIndex;

    fn next(&mut self) -> Option<TimeIndex> {
        while let Some((front, back)) = self.bounds {
            self.bounds = (front < back).then(|| (front + 1, back));
            if let Ok(time) = self.domain.time(front) {
                return Some(time);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let Some((front, back)) = self.bounds else {
            return (0, Some(0));
        };
        let remaining = usize::try_from((back - front) as u64 + 1).ok();
        if self.domain.definition().sub_pattern().is_some() {
            (0, remaining)
        } else {
            (remaining.unwrap_or(usize::MAX), remaining)
        }
    }
}

impl DoubleEndedIterator for RangeIter {
    fn next_back(&mut self) -> Option<TimeIndex> {
        while let Some((front, back)) = self.bounds {
            self.bounds = (front < back).then(|| (front, back - 1));
            if let Ok(time) = self.domain.time(back) {
                return Some(time);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use kalends_calendar::Resolution;
    use kalends_pattern::{Adjustment, FixedSubPeriods};

    use super::*;
    use crate::definition::DomainDefinition;
    use crate::error::ErrorKind;

    fn day() -> Arc<TimeDomain> {
        TimeDomain::unrestricted(Resolution::Day)
    }

    fn days(first: i64, last: i64) -> Range {
        Range::from_indices(&day(), first, last).unwrap()
    }

    #[test]
    fn empty_ranges_are_canonical() {
        assert_eq!(days(5, 2), Range::empty(&day()));
        assert!(days(5, 2).is_empty());
        assert_eq!(days(5, 2).len(), 0);
        assert_eq!(days(5, 2).to_string(), "[]");
        assert_eq!(days(5, 2).first_index(), None);
    }

    #[test]
    fn bounds_are_validated() {
        assert_eq!(
            Range::from_indices(&day(), -1, 3).unwrap_err().kind(),
            ErrorKind::OutOfRange
        );
        assert!(Range::from_indices(&day(), 3, -1).unwrap().is_empty());
    }

    #[test]
    fn union_and_intersection() {
        assert_eq!(days(1, 5).union(&days(6, 9)).unwrap(), days(1, 9));
        assert_eq!(days(4, 9).union(&days(1, 5)).unwrap(), days(1, 9));
        assert_eq!(days(1, 9).union(&days(3, 4)).unwrap(), days(1, 9));
        assert_eq!(days(1, 5).union(&Range::empty(&day())).unwrap(), days(1, 5));
        let err = days(1, 5).union(&days(7, 9)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        assert_eq!(days(1, 5).intersection(&days(4, 9)).unwrap(), days(4, 5));
        assert!(days(1, 5).intersection(&days(6, 9)).unwrap().is_empty());
    }

    #[test]
    fn mismatched_domains() {
        let hours = Range::from_indices(&TimeDomain::unrestricted(Resolution::Hour), 1, 2).unwrap();
        assert_eq!(
            days(1, 2).union(&hours).unwrap_err().kind(),
            ErrorKind::DomainMismatch
        );
    }

    #[test]
    fn iteration_both_ways() {
        let r = days(730_485, 730_487);
        let forward: Vec<String> = r.iter().map(|t| t.to_string()).collect();
        assert_eq!(forward, ["2000-01-01", "2000-01-02", "2000-01-03"]);
        let backward: Vec<i64> = r.iter().rev().map(|t| t.index()).collect();
        assert_eq!(backward, [730_487, 730_486, 730_485]);
        assert_eq!(r.iter().size_hint(), (3, Some(3)));

        let mut it = r.iter();
        assert_eq!(it.next().unwrap().index(), 730_485);
        assert_eq!(it.next_back().unwrap().index(), 730_487);
        assert_eq!(it.next().unwrap().index(), 730_486);
        assert!(it.next().is_none());
        assert!(it.next_back().is_none());
    }

    #[test]
    fn iteration_at_the_top_of_the_domain() {
        let r = days(i64::MAX - 1, i64::MAX);
        assert_eq!(r.iter().count(), 2);
    }

    #[test]
    fn contains() {
        let r = days(10, 20);
        assert!(r.contains(&day().time(10).unwrap()));
        assert!(!r.contains(&day().time(21).unwrap()));
        assert!(!r.contains(&TimeDomain::unrestricted(Resolution::Hour).time(15).unwrap()));
    }

    #[test]
    fn dead_positions_are_skipped() {
        let sub = FixedSubPeriods::new(Resolution::Month, Resolution::Day, [15, 31]).unwrap();
        let d = TimeDomain::new(DomainDefinition::new(Resolution::Month).with_sub_pattern(sub))
            .unwrap();
        let first = d.time_from_str("2008-06-15", Adjustment::None).unwrap();
        let last = d.time_from_str("2008-07-31", Adjustment::None).unwrap();
        let r = Range::new(&first, &last).unwrap();
        assert_eq!(r.len(), 4);
        let texts: Vec<String> = r.iter().map(|t| t.to_string()).collect();
        assert_eq!(texts, ["2008-06-15", "2008-07-15", "2008-07-31"]);
        assert_eq!(r.to_string(), "[2008-06-15, 2008-07-31]");
    }
}
