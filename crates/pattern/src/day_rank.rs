//! Sub-period positions chosen by weekday and rank ("3rd Friday", "last Monday").

use std::collections::HashSet;

use kalends_calendar::{
    Resolution, TimeParts, Weekday, day_by_rank, day_of_year, is_leap, month_and_day,
};

use crate::error::PatternError;
use crate::sub_period::Lookup;

/// The `rank`-th `weekday` of a period; negative ranks count from the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayRank {
    pub weekday: Weekday,
    pub rank: i32,
}

impl DayRank {
    pub fn new(weekday: Weekday, rank: i32) -> Self {
        Self { weekday, rank }
    }
}

/// Days of a month or year selected by weekday and rank.
///
/// Positions are numbered in the order the ranks are listed. The days are
/// recomputed for every base period; a rank that has no occurrence in some
/// period (a fifth Friday) leaves a dead position there.
///
/// # Example
///
/// ```
/// use kalends_calendar::{Resolution, TimeParts, Weekday};
/// use kalends_pattern::{Adjustment, DayRank, DayRankingSubPeriods, SubPeriodPattern};
///
/// let third_friday: SubPeriodPattern =
///     DayRankingSubPeriods::new(Resolution::Month, [DayRank::new(Weekday::Friday, 3)])
///         .unwrap()
///         .into();
/// let mut parts = TimeParts::ymd(2000, 1, 1);
/// let index = third_friday.adjust_for_sub_period(0, Adjustment::Up, &parts).unwrap();
/// third_friday.fill_in_sub_period(index as usize, &mut parts).unwrap();
/// assert_eq!(parts.day, 21);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DayRankingSubPeriods {
    base: Resolution,
    ranks: Vec<DayRank>,
}

impl DayRankingSubPeriods {
    /// Creates a pattern over months or years.
    ///
    /// The listed ranks must fall in ascending day order in every period in
    /// which they exist; this is checked over a full 400-year cycle, after
    /// which weekdays repeat.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::UnsupportedPairing`] unless `base` is month or
    /// year, [`PatternError::EmptyRanks`] or
    /// [`PatternError::DuplicateDayRank`] for bad lists,
    /// [`PatternError::Calendar`] for a rank out of range, and
    /// [`PatternError::UnorderedDayRanks`] when the order does not hold.
    pub fn new(
        base: Resolution,
        ranks: impl IntoIterator<Item = DayRank>,
    ) -> Result<Self, PatternError> {
        let months: Vec<u8> = match base {
            Resolution::Month => (1..=12).collect(),
            Resolution::Year => vec![0],
            _ => {
                return Err(PatternError::UnsupportedPairing {
                    base,
                    sub: Resolution::Day,
                });
            }
        };
        let ranks: Vec<DayRank> = ranks.into_iter().collect();
        if ranks.is_empty() {
            return Err(PatternError::EmptyRanks);
        }
        let mut seen = HashSet::new();
        for r in &ranks {
            if !seen.insert(*r) {
                return Err(PatternError::DuplicateDayRank {
                    weekday: r.weekday,
                    rank: r.rank,
                });
            }
            day_by_rank(0, months[0], r.weekday, r.rank)?;
        }

        let pattern = Self { base, ranks };
        if pattern.ranks.len() > 1 {
            for year in 0..400 {
                for &month in &months {
                    let days = pattern.days_in(year, month)?;
                    let mut live = days.iter().filter(|&&d| d != 0);
                    let mut last = live.next().copied().unwrap_or(0);
                    for &d in live {
                        if d <= last {
                            return Err(PatternError::UnorderedDayRanks { year, month });
                        }
                        last = d;
                    }
                }
            }
        }
        Ok(pattern)
    }

    /// Returns the base unit (month or year).
    pub fn base_unit(&self) -> Resolution {
        self.base
    }

    /// Returns the ranks in position order.
    pub fn ranks(&self) -> &[DayRank] {
        &self.ranks
    }

    /// Day within the period for every position, 0 where it does not exist.
    fn days_in(&self, year: i64, month: u8) -> Result<Vec<u16>, PatternError> {
        self.ranks
            .iter()
            .map(|r| day_by_rank(year, month, r.weekday, r.rank).map_err(PatternError::from))
            .collect()
    }

    fn period(&self, parts: &TimeParts) -> (i64, u8) {
        match self.base {
            Resolution::Month => (parts.year, parts.month),
            _ => (parts.year, 0),
        }
    }

    pub(crate) fn lookup(&self, parts: &TimeParts) -> Result<(i64, Lookup), PatternError> {
        let (year, month) = self.period(parts);
        let value = match self.base {
            Resolution::Month => u16::from(parts.day),
            _ => day_of_year(parts.year, parts.month, parts.day)?,
        };
        let days = self.days_in(year, month)?;
        let lookup = match days.iter().position(|&d| d == value) {
            Some(i) => Lookup::Found(i),
            None => Lookup::Missing {
                next: days.iter().position(|&d| d > value).unwrap_or(days.len()),
                previous: days.iter().rposition(|&d| d != 0 && d < value),
            },
        };
        Ok((i64::from(value), lookup))
    }

    pub(crate) fn fill_in(&self, position: usize, parts: &mut TimeParts) -> Result<(), PatternError> {
        let (year, month) = self.period(parts);
        let r = self.ranks[position];
        let day = day_by_rank(year, month, r.weekday, r.rank)?;
        if day == 0 {
            return Err(PatternError::DeadSubPeriod { position });
        }
        match self.base {
            Resolution::Month => parts.day = day as u8,
            _ => {
                let (m, d) = month_and_day(day, is_leap(year))?;
                parts.month = m;
                parts.day = d;
            }
        }
        Ok(())
    }
}
