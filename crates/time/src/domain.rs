//! The packing engine of a realized time domain.
//!
//! A [`TimeDomain`] turns calendar components into dense indices and back:
//!
//! ```text
//! TimeParts ──normalize──▶ UTC parts ──raw_index──▶ raw base index
//!     ──Cycle::compress──▶ dense base ──adjust_for_sub_period──▶ index
//! ```
//!
//! `unpack` runs the same chain in reverse.

use std::fmt;
use std::hash::{DefaultHasher, Hash, Hasher};
use std::sync::{Arc, OnceLock};

use kalends_calendar::{
    NANOS_PER_SECOND, Resolution, SECONDS_PER_DAY, TimeParts, UtcOffset, Weekday, check_date,
    date_from_day_count, day_count, day_of_week, hms, seconds_of_day,
};
use kalends_pattern::{Adjustment, PatternError, SubPeriodPattern};
use tracing::{debug, trace};

use crate::definition::DomainDefinition;
use crate::error::TimeError;
use crate::index::TimeIndex;
use crate::text;

const NANOS_PER_DAY: i64 = SECONDS_PER_DAY * NANOS_PER_SECOND as i64;

/// A realized time domain, shared through [`Arc`] by every value in it.
///
/// Indices run from 0 to [`max_index`](Self::max_index). Two domains are
/// equal when their definitions are equal (labels aside).
#[derive(Debug)]
pub struct TimeDomain {
    definition: DomainDefinition,
    max_index: i64,
    min_offset_index: i64,
    max_offset_index: i64,
    hash: OnceLock<u64>,
}

impl TimeDomain {
    /// Realizes a domain from its definition.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::InvalidDefinition`] when the sub-period pattern
    /// subdivides a different unit than the base resolution.
    pub fn new(definition: DomainDefinition) -> Result<Arc<Self>, TimeError> {
        if let Some(sub) = definition.sub_pattern()
            && sub.base_unit() != definition.base_unit()
        {
            return Err(TimeError::InvalidDefinition {
                reason: format!(
                    "sub-period pattern subdivides {} periods but the base unit is {}",
                    sub.base_unit(),
                    definition.base_unit()
                ),
            });
        }

        let mut domain = Self {
            definition,
            max_index: 0,
            min_offset_index: 0,
            max_offset_index: 0,
            hash: OnceLock::new(),
        };
        domain.max_index = domain.find_max_index()?;
        let origin = domain.definition.origin();
        domain.min_offset_index = origin.saturating_add(i64::from(i32::MIN)).max(0);
        domain.max_offset_index = origin
            .saturating_add(i64::from(i32::MAX))
            .min(domain.max_index);

        debug!(
            domain = %domain,
            resolution = %domain.resolution(),
            max_index = domain.max_index,
            "realized time domain"
        );
        Ok(Arc::new(domain))
    }

    /// Returns the shared unrestricted domain of a resolution: origin 0, no
    /// patterns.
    pub fn unrestricted(resolution: Resolution) -> Arc<Self> {
        static DOMAINS: OnceLock<Vec<Arc<TimeDomain>>> = OnceLock::new();
        let domains = DOMAINS.get_or_init(|| {
            Resolution::ALL
                .iter()
                .map(|&r| {
                    TimeDomain::new(DomainDefinition::unrestricted(r))
                        .expect("unrestricted definitions are always valid")
                })
                .collect()
        });
        Arc::clone(&domains[resolution as usize])
    }

    pub fn definition(&self) -> &DomainDefinition {
        &self.definition
    }

    pub fn label(&self) -> Option<&str> {
        self.definition.label()
    }

    /// Returns the effective resolution of the domain's indices.
    pub fn resolution(&self) -> Resolution {
        self.definition.resolution()
    }

    pub fn origin(&self) -> i64 {
        self.definition.origin()
    }

    /// Returns the largest valid index.
    pub fn max_index(&self) -> i64 {
        self.max_index
    }

    /// Returns the smallest index whose offset from the origin fits in an `i32`.
    pub fn min_offset_index(&self) -> i64 {
        self.min_offset_index
    }

    /// Returns the largest index whose offset from the origin fits in an `i32`.
    pub fn max_offset_index(&self) -> i64 {
        self.max_offset_index
    }

    /// Checks that `index` is within the domain bounds.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::OutOfRange`] for negative indices and indices
    /// beyond [`max_index`](Self::max_index).
    pub fn valid(&self, index: i64) -> Result<(), TimeError> {
        if !(0..=self.max_index).contains(&index) {
            return Err(TimeError::OutOfRange {
                index,
                max: self.max_index,
            });
        }
        Ok(())
    }

    /// Returns the offset of `index` from the domain origin.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::OffsetOutOfRange`] when the offset does not fit
    /// in an `i32`.
    pub fn offset_of(&self, index: i64) -> Result<i32, TimeError> {
        let offset = i128::from(index) - i128::from(self.origin());
        i32::try_from(offset).map_err(|_| TimeError::OffsetOutOfRange {
            offset: i64::try_from(offset).unwrap_or(i64::MIN),
        })
    }

    /// Packs calendar components into an index.
    ///
    /// Components that name a point the domain does not contain are moved
    /// to the next (`Up`) or previous (`Down`) existing point, or rejected
    /// (`None`).
    ///
    /// # Errors
    ///
    /// Returns a [`TimeError`] of kind `InvalidArgument` for out-of-range
    /// components, `UnreachableTime` for a missing point with
    /// [`Adjustment::None`], `OutOfRange` when the result leaves the domain
    /// bounds and `Overflow` when index arithmetic overflows.
    pub fn pack(&self, parts: &TimeParts, adjust: Adjustment) -> Result<i64, TimeError> {
        let parts = normalize(parts)?;
        let raw = raw_index(&parts, self.definition.base_unit())?;
        let (base, moved) = self.compress(raw, adjust)?;

        let Some(sub) = self.definition.sub_pattern() else {
            self.valid(base)?;
            return Ok(base);
        };
        let size = sub.size() as i64;
        let index = if moved {
            // The requested base period is OFF. Taking the nearest position
            // of the period the cycle moved to keeps pack monotonic in the
            // requested time for Up and Down.
            let position = if adjust == Adjustment::Down { size - 1 } else { 0 };
            base.checked_mul(size)
                .and_then(|i| i.checked_add(position))
                .ok_or(TimeError::Overflow {
                    operation: "sub-period adjustment",
                })?
        } else {
            sub.adjust_for_sub_period(base, adjust, &parts)?
        };
        self.settle(index, adjust)
    }

    /// Unpacks an index into calendar components.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::OutOfRange`] for indices outside the domain and
    /// an `UnreachableTime` error for a sub-period position that does not
    /// exist in its base period.
    pub fn unpack(&self, index: i64) -> Result<TimeParts, TimeError> {
        self.valid(index)?;
        self.decompose(index)
    }

    /// Returns the weekday of `index`.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::CoarseDayOfWeek`] for domains coarser than a day,
    /// and the errors of [`unpack`](Self::unpack).
    pub fn day_of_week(&self, index: i64) -> Result<Weekday, TimeError> {
        let resolution = self.resolution();
        if resolution < Resolution::Day {
            return Err(TimeError::CoarseDayOfWeek { resolution });
        }
        let parts = self.unpack(index)?;
        Ok(day_of_week(day_count(parts.year, parts.month, parts.day)?)?)
    }

    /// Formats components at the domain's resolution.
    pub fn format(&self, parts: &TimeParts) -> String {
        text::format(parts, self.resolution())
    }

    /// Returns the time at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::OutOfRange`] for indices outside the domain and
    /// an `UnreachableTime` error for a dead sub-period position.
    pub fn time(self: &Arc<Self>, index: i64) -> Result<TimeIndex, TimeError> {
        self.valid(index)?;
        let parts = match self.definition.sub_pattern() {
            Some(_) => Some(self.decompose(index)?),
            None => None,
        };
        Ok(TimeIndex::from_checked(Arc::clone(self), index, parts))
    }

    /// Returns the time `offset` indices after the origin.
    pub fn time_from_offset(self: &Arc<Self>, offset: i32) -> Result<TimeIndex, TimeError> {
        let index = self
            .origin()
            .checked_add(i64::from(offset))
            .ok_or(TimeError::Overflow {
                operation: "offset from origin",
            })?;
        self.time(index)
    }

    /// Packs calendar components into a time. See [`pack`](Self::pack).
    pub fn time_from_parts(
        self: &Arc<Self>,
        parts: &TimeParts,
        adjust: Adjustment,
    ) -> Result<TimeIndex, TimeError> {
        let index = self.pack(parts, adjust)?;
        self.time(index)
    }

    /// Scans and packs text such as `"2008-06-25 12:00"`.
    pub fn time_from_str(
        self: &Arc<Self>,
        text: &str,
        adjust: Adjustment,
    ) -> Result<TimeIndex, TimeError> {
        self.time_from_parts(&text::scan(text)?, adjust)
    }

    pub fn min_time(self: &Arc<Self>) -> Result<TimeIndex, TimeError> {
        let index = self.settle(0, Adjustment::Up)?;
        self.time(index)
    }

    pub fn max_time(self: &Arc<Self>) -> Result<TimeIndex, TimeError> {
        self.time(self.max_index)
    }

    /// Returns the earliest time whose offset from the origin fits in an `i32`.
    pub fn min_offset_compatible_time(self: &Arc<Self>) -> Result<TimeIndex, TimeError> {
        let index = self.settle(self.min_offset_index, Adjustment::Up)?;
        self.offset_of(index)?;
        self.time(index)
    }

    /// Returns the latest time whose offset from the origin fits in an `i32`.
    pub fn max_offset_compatible_time(self: &Arc<Self>) -> Result<TimeIndex, TimeError> {
        let index = self.settle(self.max_offset_index, Adjustment::Down)?;
        self.offset_of(index)?;
        self.time(index)
    }

    /// Compresses a raw base index through the cycle, stepping one base
    /// period at a time in the direction of `adjust` while it lands OFF.
    /// The flag reports whether a step was taken.
    fn compress(&self, raw: i64, adjust: Adjustment) -> Result<(i64, bool), TimeError> {
        let Some(cycle) = self.definition.cycle() else {
            return Ok((raw, false));
        };
        let mut raw = raw;
        let mut moved = false;
        loop {
            match cycle.compress(raw) {
                Ok(dense) => return Ok((dense, moved)),
                Err(e @ PatternError::OffCycle { .. }) => {
                    raw = match adjust {
                        Adjustment::None => return Err(e.into()),
                        Adjustment::Up => raw.checked_add(1).ok_or(TimeError::Overflow {
                            operation: "upward adjustment",
                        })?,
                        Adjustment::Down if raw == 0 => return Err(TimeError::BeforeCalendar),
                        Adjustment::Down => raw - 1,
                    };
                    trace!(raw, %adjust, "retrying cycle compression");
                    moved = true;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Steps from `index` in the direction of `adjust` until it names a
    /// live sub-period position.
    fn settle(&self, index: i64, adjust: Adjustment) -> Result<i64, TimeError> {
        let mut index = index;
        loop {
            self.valid(index)?;
            match self.decompose(index) {
                Ok(_) => return Ok(index),
                Err(TimeError::Pattern(PatternError::DeadSubPeriod { .. }))
                    if adjust != Adjustment::None =>
                {
                    index = if adjust == Adjustment::Up {
                        index.checked_add(1).ok_or(TimeError::Overflow {
                            operation: "upward adjustment",
                        })?
                    } else {
                        index - 1
                    };
                    trace!(index, %adjust, "skipping dead sub-period position");
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Unpacks without a bounds check.
    fn decompose(&self, index: i64) -> Result<TimeParts, TimeError> {
        let sub = self.definition.sub_pattern();
        let (base, position) = match sub {
            Some(sub) => {
                let size = sub.size() as i64;
                (index / size, (index % size) as usize)
            }
            None => (index, 0),
        };
        let raw = match self.definition.cycle() {
            Some(cycle) => cycle.expand(base)?,
            None => base,
        };
        let mut parts = parts_from_raw(raw, self.definition.base_unit())?;
        if let Some(sub) = sub {
            sub.fill_in_sub_period(position, &mut parts)?;
        }
        Ok(parts)
    }

    /// Finds the largest index whose raw base period is representable.
    ///
    /// With a sub-period pattern the raw range is first divided by the
    /// pattern size, which gives up the positions of an incomplete final
    /// base period.
    fn find_max_index(&self) -> Result<i64, TimeError> {
        let sub = self.definition.sub_pattern();
        let size = sub.map_or(1, |s| s.size() as i64);
        let mut raw = i64::MAX / size;
        if let Some(SubPeriodPattern::DayRanking(_)) = sub {
            // Ranked days are located through absolute day counts
            raw = raw.min(last_day_countable_period(self.definition.base_unit())?);
        }
        let base = match self.definition.cycle() {
            Some(cycle) => (0..cycle.length() as i64)
                .find_map(|i| cycle.compress(raw - i).ok())
                .expect("every cycle window holds an ON position"),
            None => raw,
        };
        if sub.is_none() {
            return Ok(base);
        }

        let mut max = base
            .checked_mul(size)
            .and_then(|i| i.checked_add(size - 1))
            .unwrap_or_else(|| base * size - 1);
        while let Err(TimeError::Pattern(PatternError::DeadSubPeriod { .. })) = self.decompose(max)
        {
            max -= 1;
        }
        Ok(max)
    }

    fn cached_hash(&self) -> u64 {
        *self.hash.get_or_init(|| {
            let mut hasher = DefaultHasher::new();
            self.definition.hash(&mut hasher);
            hasher.finish()
        })
    }
}

impl PartialEq for TimeDomain {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other) || self.definition == other.definition
    }
}

impl Eq for TimeDomain {}

impl Hash for TimeDomain {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.cached_hash());
    }
}

impl fmt::Display for TimeDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.label() {
            Some(label) => f.write_str(label),
            None => write!(f, "unlabeled {} domain", self.definition.base_unit()),
        }
    }
}

/// Validates components and resolves leap seconds, 24:00 and UTC offsets,
/// returning plain UTC components.
fn normalize(parts: &TimeParts) -> Result<TimeParts, TimeError> {
    check_date(parts.year, parts.month, parts.day)?;
    check_field("hour", i64::from(parts.hour), 24)?;
    check_field("minute", i64::from(parts.minute), 59)?;
    check_field("second", i64::from(parts.second), 60)?;
    check_field(
        "fraction",
        i64::from(parts.nanos),
        i64::from(NANOS_PER_SECOND) - 1,
    )?;

    let mut p = *parts;
    if p.second == 60 {
        if !matches!((p.month, p.day), (6, 30) | (12, 31)) {
            return Err(TimeError::InvalidLeapSecond {
                year: p.year,
                month: p.month,
                day: p.day,
            });
        }
        p.second = 59;
    }
    if p.hour == 24 {
        if p.minute != 0 || p.second != 0 || p.nanos != 0 {
            return Err(TimeError::InvalidField {
                field: "hour",
                value: 24,
            });
        }
        let days = day_count(p.year, p.month, p.day)?;
        let next = days.checked_add(1).ok_or(TimeError::Overflow {
            operation: "midnight rollover",
        })?;
        let (year, month, day) = date_from_day_count(next)?;
        p = TimeParts {
            year,
            month,
            day,
            hour: 0,
            ..p
        };
    }
    match p.offset.take() {
        Some(offset) if !offset.is_zero() => apply_offset(p, offset),
        _ => Ok(p),
    }
}

fn check_field(field: &'static str, value: i64, max: i64) -> Result<(), TimeError> {
    if !(0..=max).contains(&value) {
        return Err(TimeError::InvalidField { field, value });
    }
    Ok(())
}

/// Converts local components to UTC by subtracting `offset`, carrying into
/// the date.
fn apply_offset(parts: TimeParts, offset: UtcOffset) -> Result<TimeParts, TimeError> {
    check_field("offset hours", i64::from(offset.hours), 23)?;
    check_field("offset minutes", i64::from(offset.minutes), 59)?;
    check_field("offset seconds", i64::from(offset.seconds), 59)?;
    check_field(
        "offset fraction",
        i64::from(offset.nanos),
        i64::from(NANOS_PER_SECOND) - 1,
    )?;

    let to_nanos = |h: u8, m: u8, s: u8, n: u32| {
        seconds_of_day(h, m, s) * i64::from(NANOS_PER_SECOND) + i64::from(n)
    };
    let local = to_nanos(parts.hour, parts.minute, parts.second, parts.nanos);
    let shift = to_nanos(offset.hours, offset.minutes, offset.seconds, offset.nanos);
    let utc = if offset.negative {
        local + shift
    } else {
        local - shift
    };

    let days = day_count(parts.year, parts.month, parts.day)?
        .checked_add(utc.div_euclid(NANOS_PER_DAY))
        .ok_or(TimeError::Overflow {
            operation: "offset carry",
        })?;
    if days < 0 {
        return Err(TimeError::BeforeCalendar);
    }
    let within_day = utc.rem_euclid(NANOS_PER_DAY);
    let (year, month, day) = date_from_day_count(days)?;
    let (hour, minute, second) = hms(within_day / i64::from(NANOS_PER_SECOND))?;
    Ok(TimeParts {
        year,
        month,
        day,
        hour,
        minute,
        second,
        nanos: (within_day % i64::from(NANOS_PER_SECOND)) as u32,
        offset: None,
    })
}

/// Computes the raw index of validated UTC components at `resolution`.
/// Finer fields are truncated.
fn raw_index(parts: &TimeParts, resolution: Resolution) -> Result<i64, TimeError> {
    let days = || day_count(parts.year, parts.month, parts.day);
    let hour = i64::from(parts.hour);
    let minute = i64::from(parts.minute);
    let raw = match resolution {
        Resolution::Year => Some(parts.year),
        Resolution::Month => parts
            .year
            .checked_mul(12)
            .and_then(|m| m.checked_add(i64::from(parts.month) - 1)),
        Resolution::Day => Some(days()?),
        Resolution::Hour => days()?.checked_mul(24).and_then(|h| h.checked_add(hour)),
        Resolution::Min => days()?
            .checked_mul(24 * 60)
            .and_then(|m| m.checked_add(hour * 60 + minute)),
        Resolution::Sec | Resolution::Msec | Resolution::Usec | Resolution::Nsec => {
            let units = resolution.units_per_second().unwrap_or(1);
            let fraction = i64::from(parts.nanos) / (i64::from(NANOS_PER_SECOND) / units);
            let seconds = seconds_of_day(parts.hour, parts.minute, parts.second);
            days()?
                .checked_mul(SECONDS_PER_DAY)
                .and_then(|s| s.checked_add(seconds))
                .and_then(|s| s.checked_mul(units))
                .and_then(|t| t.checked_add(fraction))
        }
    };
    raw.ok_or(TimeError::Overflow {
        operation: "calendar index",
    })
}

/// Decomposes a non-negative raw index at `resolution`.
fn parts_from_raw(raw: i64, resolution: Resolution) -> Result<TimeParts, TimeError> {
    let date = |days: i64| -> Result<TimeParts, TimeError> {
        let (year, month, day) = date_from_day_count(days)?;
        Ok(TimeParts::ymd(year, month, day))
    };
    let parts = match resolution {
        Resolution::Year => TimeParts::new(raw),
        Resolution::Month => {
            let mut p = TimeParts::new(raw / 12);
            p.month = (raw % 12) as u8 + 1;
            p
        }
        Resolution::Day => date(raw)?,
        Resolution::Hour => {
            let mut p = date(raw / 24)?;
            p.hour = (raw % 24) as u8;
            p
        }
        Resolution::Min => {
            let mut p = date(raw / (24 * 60))?;
            let minutes = raw % (24 * 60);
            p.hour = (minutes / 60) as u8;
            p.minute = (minutes % 60) as u8;
            p
        }
        Resolution::Sec | Resolution::Msec | Resolution::Usec | Resolution::Nsec => {
            let units = resolution.units_per_second().unwrap_or(1);
            let seconds = raw / units;
            let mut p = date(seconds / SECONDS_PER_DAY)?;
            (p.hour, p.minute, p.second) = hms(seconds % SECONDS_PER_DAY)?;
            p.nanos = ((raw % units) * (i64::from(NANOS_PER_SECOND) / units)) as u32;
            p
        }
    };
    Ok(parts)
}

/// Largest raw month or year index whose whole period has a day count.
fn last_day_countable_period(base: Resolution) -> Result<i64, TimeError> {
    let (last_year, _, _) = date_from_day_count(i64::MAX)?;
    Ok(match base {
        Resolution::Year => last_year - 1,
        Resolution::Month => (last_year - 1) * 12 + 11,
        _ => i64::MAX,
    })
}
