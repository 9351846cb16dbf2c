//! Proleptic Gregorian day arithmetic.
//!
//! Day 0 is 0000-01-01. Years are non-negative and bounded only by `i64`;
//! every conversion is integer-only and exact across the whole range.

use crate::error::CalendarError;

/// Number of days in a 400-year Gregorian block (303 common and 97 leap years).
pub const DAYS_PER_400_YEARS: i64 = 365 * 303 + 366 * 97;

/// Days elapsed before the start of each month, for common (row 0) and
/// leap (row 1) years. Index 12 holds the length of the year.
#[rustfmt::skip]
pub(crate) const DAYS_BEFORE_MONTH: [[u16; 13]; 2] = [
    [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334, 365],
    [0, 31, 60, 91, 121, 152, 182, 213, 244, 274, 305, 335, 366],
];

/// Returns `true` if `year` is a Gregorian leap year.
pub fn is_leap(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Returns the number of leap years strictly before `year`, counting year 0
/// as a leap year.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidYear`] if `year` is negative.
pub fn leap_years(year: i64) -> Result<i64, CalendarError> {
    check_year(year)?;
    Ok(leap_years_before(year))
}

/// Returns the number of days in `year` (365 or 366).
pub fn days_in_year(year: i64) -> u16 {
    DAYS_BEFORE_MONTH[usize::from(is_leap(year))][12]
}

/// Returns the number of days in `month` of `year`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
pub fn days_in_month(year: i64, month: u8) -> Result<u8, CalendarError> {
    check_month(month)?;
    let table = &DAYS_BEFORE_MONTH[usize::from(is_leap(year))];
    let m = usize::from(month);
    // at most 31, always fits
    Ok((table[m] - table[m - 1]) as u8)
}

/// Returns the 1-based day of the year for a validated date.
///
/// # Errors
///
/// Returns [`CalendarError`] if the year, month or day is invalid.
pub fn day_of_year(year: i64, month: u8, day: u8) -> Result<u16, CalendarError> {
    check_date(year, month, day)?;
    let table = &DAYS_BEFORE_MONTH[usize::from(is_leap(year))];
    Ok(table[usize::from(month) - 1] + u16::from(day))
}

/// Converts a date to the number of days elapsed since 0000-01-01.
///
/// # Errors
///
/// Returns [`CalendarError`] if the date is invalid, or
/// [`CalendarError::Overflow`] if the count does not fit in an `i64`.
pub fn day_count(year: i64, month: u8, day: u8) -> Result<i64, CalendarError> {
    let doy = day_of_year(year, month, day)?;
    let blocks = year / 400;
    let within = days_before_year_in_block(year % 400) + i64::from(doy) - 1;
    blocks
        .checked_mul(DAYS_PER_400_YEARS)
        .and_then(|d| d.checked_add(within))
        .ok_or(CalendarError::Overflow {
            operation: "day count",
        })
}

/// Converts a number of days elapsed since 0000-01-01 to `(year, month, day)`.
///
/// Whole 400-year blocks are removed first; the year within the block is
/// estimated by ignoring leap days, corrected by the leap days the estimate
/// spans, and finally backed off by one if the estimate missed.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidDayCount`] if `days` is negative.
pub fn date_from_day_count(days: i64) -> Result<(i64, u8, u8), CalendarError> {
    if days < 0 {
        return Err(CalendarError::InvalidDayCount { days });
    }
    let blocks = days / DAYS_PER_400_YEARS;
    let rem = days % DAYS_PER_400_YEARS;

    let pseudo_year = rem / 365;
    let mut year = (rem - leap_years_before(pseudo_year)) / 365;
    if days_before_year_in_block(year + 1) <= rem {
        year += 1;
    } else if days_before_year_in_block(year) > rem {
        year -= 1;
    }

    // rem < DAYS_PER_400_YEARS, so the remainder is below 366
    let doy = (rem - days_before_year_in_block(year)) as u16 + 1;
    let (month, day) = month_and_day(doy, is_leap(year))?;
    Ok((blocks * 400 + year, month, day))
}

/// Converts a 1-based day of the year to `(month, day)` by binary search on
/// the cumulative month table.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidDayOfYear`] if `day_of_year` is zero or
/// beyond the end of the year.
pub fn month_and_day(day_of_year: u16, leap: bool) -> Result<(u8, u8), CalendarError> {
    let table = &DAYS_BEFORE_MONTH[usize::from(leap)];
    if day_of_year == 0 || day_of_year > table[12] {
        return Err(CalendarError::InvalidDayOfYear {
            day_of_year,
            max: table[12],
        });
    }
    let zero_based = day_of_year - 1;
    let month_index = table[1..].partition_point(|&before| before <= zero_based);
    let day = zero_based - table[month_index] + 1;
    Ok((month_index as u8 + 1, day as u8))
}

/// Validates a `(year, month, day)` triple.
///
/// # Errors
///
/// Returns the first [`CalendarError`] found, checking year, then month,
/// then day.
pub fn check_date(year: i64, month: u8, day: u8) -> Result<(), CalendarError> {
    check_year(year)?;
    let max_day = days_in_month(year, month)?;
    if !(1..=max_day).contains(&day) {
        return Err(CalendarError::InvalidDay {
            day,
            month,
            max_day,
        });
    }
    Ok(())
}

fn check_year(year: i64) -> Result<(), CalendarError> {
    if year < 0 {
        return Err(CalendarError::InvalidYear { year });
    }
    Ok(())
}

fn check_month(month: u8) -> Result<(), CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }
    Ok(())
}

fn leap_years_before(year: i64) -> i64 {
    if year == 0 {
        return 0;
    }
    let y = year - 1;
    y / 4 - y / 100 + y / 400 + 1
}

// Only called with 0..=400, where the product cannot overflow.
fn days_before_year_in_block(year: i64) -> i64 {
    365 * year + leap_years_before(year)
}
