//! Admissible finer positions nested inside each base period.
//!
//! A dense index in a domain with a sub-period pattern is
//! `base_period * size + position`. The pattern converts between that form
//! and calendar fields in both directions, resolving requests for positions
//! that do not exist according to an [`Adjustment`].

use kalends_calendar::{Resolution, TimeParts, days_in_month, hms, seconds_of_day};
use tracing::trace;

use crate::adjust::Adjustment;
use crate::day_rank::DayRankingSubPeriods;
use crate::error::PatternError;

/// Finer positions admitted inside each base period.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SubPeriodPattern {
    /// A fixed, sorted set of positions (month numbers, day numbers or
    /// seconds of the day).
    Fixed(FixedSubPeriods),
    /// Days selected by weekday and rank, recomputed for every period.
    DayRanking(DayRankingSubPeriods),
}

impl SubPeriodPattern {
    /// Returns the unit of the periods the pattern subdivides.
    pub fn base_unit(&self) -> Resolution {
        match self {
            SubPeriodPattern::Fixed(p) => p.base_unit(),
            SubPeriodPattern::DayRanking(p) => p.base_unit(),
        }
    }

    /// Returns the unit of the admitted positions.
    pub fn sub_unit(&self) -> Resolution {
        match self {
            SubPeriodPattern::Fixed(p) => p.sub_unit(),
            SubPeriodPattern::DayRanking(_) => Resolution::Day,
        }
    }

    /// Returns the number of positions per base period.
    pub fn size(&self) -> usize {
        match self {
            SubPeriodPattern::Fixed(p) => p.ranks().len(),
            SubPeriodPattern::DayRanking(p) => p.ranks().len(),
        }
    }

    /// Combines a dense base period index with the sub-period requested by
    /// `parts`, returning the dense index of the admitted position.
    ///
    /// When the requested value is not admitted, [`Adjustment::Up`] takes the
    /// next admitted position (rolling into the next base period if needed),
    /// [`Adjustment::Down`] the previous one, and [`Adjustment::None`] fails.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::MissingSubPeriod`] when the value is not
    /// admitted and `adjust` is `None`, and [`PatternError::Overflow`] when
    /// the dense index leaves the `i64` range.
    pub fn adjust_for_sub_period(
        &self,
        time: i64,
        adjust: Adjustment,
        parts: &TimeParts,
    ) -> Result<i64, PatternError> {
        let (value, lookup) = match self {
            SubPeriodPattern::Fixed(p) => p.lookup(parts)?,
            SubPeriodPattern::DayRanking(p) => p.lookup(parts)?,
        };
        place(time, self.size(), value, lookup, adjust)
    }

    /// Writes the calendar value of `position` into `parts`, whose base
    /// period fields must already be set.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::DeadSubPeriod`] when the position does not
    /// exist in that base period and [`PatternError::PositionOutOfRange`]
    /// when `position >= size`.
    pub fn fill_in_sub_period(
        &self,
        position: usize,
        parts: &mut TimeParts,
    ) -> Result<(), PatternError> {
        if position >= self.size() {
            return Err(PatternError::PositionOutOfRange {
                position,
                size: self.size(),
            });
        }
        match self {
            SubPeriodPattern::Fixed(p) => p.fill_in(position, parts),
            SubPeriodPattern::DayRanking(p) => p.fill_in(position, parts),
        }
    }
}

impl From<FixedSubPeriods> for SubPeriodPattern {
    fn from(p: FixedSubPeriods) -> Self {
        SubPeriodPattern::Fixed(p)
    }
}

impl From<DayRankingSubPeriods> for SubPeriodPattern {
    fn from(p: DayRankingSubPeriods) -> Self {
        SubPeriodPattern::DayRanking(p)
    }
}

/// Where a requested sub-period value sits among the admitted positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Lookup {
    /// The value is admitted at this position.
    Found(usize),
    /// The value is not admitted. `next` is the first later position (or
    /// `size` if none), `previous` the last earlier one.
    Missing {
        next: usize,
        previous: Option<usize>,
    },
}

fn place(
    time: i64,
    size: usize,
    value: i64,
    lookup: Lookup,
    adjust: Adjustment,
) -> Result<i64, PatternError> {
    let overflow = PatternError::Overflow {
        operation: "sub-period adjustment",
    };
    let size = size as i64;
    let base = time.checked_mul(size).ok_or(overflow.clone())?;
    let position = match (lookup, adjust) {
        (Lookup::Found(i), _) => i as i64,
        (Lookup::Missing { .. }, Adjustment::None) => {
            return Err(PatternError::MissingSubPeriod {
                period: time,
                value,
            });
        }
        (Lookup::Missing { next, .. }, Adjustment::Up) => {
            if next as i64 == size {
                trace!(period = time, value, "rolling to next base period");
            }
            next as i64
        }
        (Lookup::Missing { previous, .. }, Adjustment::Down) => match previous {
            Some(p) => p as i64,
            None => {
                trace!(period = time, value, "rolling to previous base period");
                -1
            }
        },
    };
    base.checked_add(position).ok_or(overflow)
}

/// A fixed set of admissible positions for one of the supported pairings:
/// year → month, month → day, day → second.
///
/// # Example
///
/// ```
/// use kalends_calendar::{Resolution, TimeParts};
/// use kalends_pattern::{Adjustment, FixedSubPeriods, SubPeriodPattern};
///
/// // The 10th and 20th of every month
/// let p: SubPeriodPattern = FixedSubPeriods::new(Resolution::Month, Resolution::Day, [10, 20])
///     .unwrap()
///     .into();
/// let request = TimeParts::ymd(2008, 6, 25);
/// assert_eq!(p.adjust_for_sub_period(7, Adjustment::Down, &request).unwrap(), 15);
/// assert_eq!(p.adjust_for_sub_period(7, Adjustment::Up, &request).unwrap(), 16);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FixedSubPeriods {
    base: Resolution,
    sub: Resolution,
    ranks: Vec<i64>,
}

impl FixedSubPeriods {
    /// Creates a pattern from its units and admitted positions, given in any
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::UnsupportedPairing`] for unit pairs other than
    /// year → month, month → day and day → second, and
    /// [`PatternError::EmptyRanks`], [`PatternError::InvalidRank`] or
    /// [`PatternError::DuplicateRank`] for bad positions.
    pub fn new(
        base: Resolution,
        sub: Resolution,
        ranks: impl IntoIterator<Item = i64>,
    ) -> Result<Self, PatternError> {
        let valid = match (base, sub) {
            (Resolution::Year, Resolution::Month) => 1..=12,
            (Resolution::Month, Resolution::Day) => 1..=31,
            (Resolution::Day, Resolution::Sec) => 0..=86_399,
            _ => return Err(PatternError::UnsupportedPairing { base, sub }),
        };
        let mut ranks: Vec<i64> = ranks.into_iter().collect();
        if ranks.is_empty() {
            return Err(PatternError::EmptyRanks);
        }
        ranks.sort_unstable();
        for pair in ranks.windows(2) {
            if pair[0] == pair[1] {
                return Err(PatternError::DuplicateRank { rank: pair[0] });
            }
        }
        if let Some(&rank) = ranks.iter().find(|r| !valid.contains(*r)) {
            return Err(PatternError::InvalidRank { rank, unit: sub });
        }
        Ok(Self { base, sub, ranks })
    }

    /// Returns the base unit.
    pub fn base_unit(&self) -> Resolution {
        self.base
    }

    /// Returns the sub unit.
    pub fn sub_unit(&self) -> Resolution {
        self.sub
    }

    /// Returns the admitted positions in ascending order.
    pub fn ranks(&self) -> &[i64] {
        &self.ranks
    }

    fn requested(&self, parts: &TimeParts) -> i64 {
        match self.sub {
            Resolution::Month => i64::from(parts.month),
            Resolution::Day => i64::from(parts.day),
            _ => seconds_of_day(parts.hour, parts.minute, parts.second),
        }
    }

    fn lookup(&self, parts: &TimeParts) -> Result<(i64, Lookup), PatternError> {
        let value = self.requested(parts);
        let lookup = match self.ranks.binary_search(&value) {
            Ok(i) => Lookup::Found(i),
            Err(insertion) => Lookup::Missing {
                next: insertion,
                previous: insertion.checked_sub(1),
            },
        };
        Ok((value, lookup))
    }

    fn fill_in(&self, position: usize, parts: &mut TimeParts) -> Result<(), PatternError> {
        let rank = self.ranks[position];
        match self.sub {
            Resolution::Month => parts.month = rank as u8,
            Resolution::Day => {
                let last = days_in_month(parts.year, parts.month)?;
                if rank > i64::from(last) {
                    return Err(PatternError::DeadSubPeriod { position });
                }
                parts.day = rank as u8;
            }
            _ => {
                let (hour, minute, second) = hms(rank)?;
                parts.hour = hour;
                parts.minute = minute;
                parts.second = second;
            }
        }
        Ok(())
    }
}
