//! Weekdays and "nth weekday of a period" search.

use std::fmt;
use std::str::FromStr;

use crate::error::CalendarError;
use crate::gregorian::{day_count, days_in_month, days_in_year};

/// Day of the week, numbered 1 (Monday) to 7 (Sunday) as in ISO 8601.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
    Sunday = 7,
}

/// Largest rank magnitude for a weekday within a month.
pub const MAX_RANK_IN_MONTH: i32 = 5;

/// Largest rank magnitude for a weekday within a year.
pub const MAX_RANK_IN_YEAR: i32 = 53;

impl Weekday {
    /// All weekdays, Monday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Returns the ISO number of this weekday (Monday = 1).
    pub fn number(self) -> u8 {
        self as u8
    }

    /// Creates a weekday from its ISO number (Monday = 1).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidWeekday`] if `number` is not in 1..=7.
    pub fn from_number(number: u8) -> Result<Self, CalendarError> {
        match number {
            1..=7 => Ok(Self::ALL[usize::from(number) - 1]),
            _ => Err(CalendarError::InvalidWeekday {
                name: number.to_string(),
            }),
        }
    }

    /// Returns the English name of this weekday.
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    fn index(self) -> i64 {
        i64::from(self.number()) - 1
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Weekday {
    type Err = CalendarError;

    /// Accepts full English names and three-letter abbreviations, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Weekday::ALL
            .into_iter()
            .find(|w| {
                let name = w.name().to_ascii_lowercase();
                lower == name || (lower.len() == 3 && name.starts_with(&lower))
            })
            .ok_or_else(|| CalendarError::InvalidWeekday { name: s.to_string() })
    }
}

/// Returns the weekday of a day counted from 0000-01-01, which was a Saturday.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidDayCount`] if `days` is negative.
pub fn day_of_week(days: i64) -> Result<Weekday, CalendarError> {
    if days < 0 {
        return Err(CalendarError::InvalidDayCount { days });
    }
    // Saturday has index 5 when Monday is 0
    let index = (days % 7 + 5) % 7;
    Ok(Weekday::ALL[index as usize])
}

/// Finds the day on which the `rank`-th `weekday` of a period falls.
///
/// The period is `month` of `year`, or the whole year when `month` is 0.
/// A positive rank counts from the start of the period, a negative rank from
/// its end (-1 is the last occurrence). The result is the 1-based day within
/// the period (day of month, or day of year), or 0 when the requested
/// occurrence does not exist in that period (e.g. a fifth Friday).
///
/// # Errors
///
/// Returns [`CalendarError::InvalidRank`] if `rank` is 0 or its magnitude
/// exceeds 5 (month) or 53 (year), and [`CalendarError`] if the period itself
/// is invalid.
pub fn day_by_rank(
    year: i64,
    month: u8,
    weekday: Weekday,
    rank: i32,
) -> Result<u16, CalendarError> {
    let (first_day, length, max_rank) = if month == 0 {
        (day_count(year, 1, 1)?, i64::from(days_in_year(year)), MAX_RANK_IN_YEAR)
    } else {
        (
            day_count(year, month, 1)?,
            i64::from(days_in_month(year, month)?),
            MAX_RANK_IN_MONTH,
        )
    };
    if rank == 0 || rank.unsigned_abs() > max_rank.unsigned_abs() {
        return Err(CalendarError::InvalidRank { rank, max_rank });
    }

    let first_weekday = day_of_week(first_day)?;
    let first = 1 + (weekday.index() - first_weekday.index()).rem_euclid(7);
    let rank = i64::from(rank);
    let day = if rank > 0 {
        first + (rank - 1) * 7
    } else {
        let last = first + (length - first) / 7 * 7;
        last + (rank + 1) * 7
    };
    if day < 1 || day > length {
        return Ok(0);
    }
    Ok(day as u16)
}
