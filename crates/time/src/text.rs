//! ISO 8601-like text form of calendar components.
//!
//! Two layouts are accepted:
//!
//! - extended: `[+]YYYY[-MM[-DD[{T| }hh[:mm[:ss[{.|,}f…]]]]]][Z|±hh[:mm[:ss[.f…]]]]`
//! - basic: `[+]YYYYMMDDThh[mm[ss[{.|,}f…]]][Z|±hh[mm[ss]]]`
//!
//! Years with more than four digits must carry a leading `+`.

use std::sync::OnceLock;

use kalends_calendar::{Resolution, TimeParts, UtcOffset};
use regex::{Captures, Regex};

use crate::error::TimeError;

// `\d` would admit any Unicode digit; only ASCII digits are part of the grammar.
const EXTENDED: &str = r"^(\+)?([0-9]{4,})(?:-([0-9]{2})(?:-([0-9]{2})(?:[T ]([0-9]{2})(?::([0-9]{2})(?::([0-9]{2})(?:[.,]([0-9]{1,9}))?)?)?)?)?)?(Z|[+-][0-9]{2}(?::[0-9]{2}(?::[0-9]{2}(?:\.[0-9]{1,9})?)?)?)?$";
const BASIC: &str = r"^(\+)?([0-9]{4,})([0-9]{2})([0-9]{2})T([0-9]{2})(?:([0-9]{2})(?:([0-9]{2})(?:[.,]([0-9]{1,9}))?)?)?(Z|[+-][0-9]{2}(?:[0-9]{2}(?:[0-9]{2})?)?)?$";
const OFFSET: &str = r"^([+-])([0-9]{2}):?(?:([0-9]{2}):?(?:([0-9]{2})(?:\.([0-9]{1,9}))?)?)?$";

fn extended() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(EXTENDED).expect("extended time pattern compiles"))
}

fn basic() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(BASIC).expect("basic time pattern compiles"))
}

fn offset() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(OFFSET).expect("offset pattern compiles"))
}

/// Scans text into calendar components.
///
/// Omitted fields default to the start of the enclosing period. Components
/// are not range-checked here; packing does that.
///
/// # Errors
///
/// Returns [`TimeError::Parse`] when the text matches neither layout, when
/// a year of more than four digits lacks its `+`, or when the year does not
/// fit in an `i64`.
pub fn scan(text: &str) -> Result<TimeParts, TimeError> {
    let text = text.trim();
    let fail = |reason| TimeError::Parse {
        input: text.to_string(),
        reason,
    };
    let caps = extended()
        .captures(text)
        .or_else(|| basic().captures(text))
        .ok_or_else(|| fail("does not match the time grammar"))?;

    let year_digits = &caps[2];
    if year_digits.len() > 4 && caps.get(1).is_none() {
        return Err(fail("years beyond four digits need a leading '+'"));
    }
    let year: i64 = year_digits
        .parse()
        .map_err(|_| fail("year does not fit in 64 bits"))?;

    let mut parts = TimeParts::new(year);
    parts.month = field(&caps, 3, 1).ok_or_else(|| fail("malformed month"))?;
    parts.day = field(&caps, 4, 1).ok_or_else(|| fail("malformed day"))?;
    parts.hour = field(&caps, 5, 0).ok_or_else(|| fail("malformed hour"))?;
    parts.minute = field(&caps, 6, 0).ok_or_else(|| fail("malformed minute"))?;
    parts.second = field(&caps, 7, 0).ok_or_else(|| fail("malformed second"))?;
    parts.nanos = caps
        .get(8)
        .map_or(Some(0), |m| fraction(m.as_str()))
        .ok_or_else(|| fail("malformed fraction"))?;
    if let Some(m) = caps.get(9) {
        parts.offset = Some(scan_offset(m.as_str()).ok_or_else(|| fail("malformed UTC offset"))?);
    }
    Ok(parts)
}

/// Parses a matched two-digit group, or returns `default` when the group
/// did not take part in the match.
fn field(caps: &Captures<'_>, i: usize, default: u8) -> Option<u8> {
    caps.get(i).map_or(Some(default), |m| m.as_str().parse().ok())
}

/// Converts up to nine fraction digits to nanoseconds.
fn fraction(digits: &str) -> Option<u32> {
    let missing = 9u32.checked_sub(u32::try_from(digits.len()).ok()?)?;
    digits.parse::<u32>().ok()?.checked_mul(10u32.pow(missing))
}

fn scan_offset(text: &str) -> Option<UtcOffset> {
    if text == "Z" {
        return Some(UtcOffset::UTC);
    }
    let caps = offset().captures(text)?;
    Some(UtcOffset {
        negative: &caps[1] == "-",
        hours: caps[2].parse().ok()?,
        minutes: field(&caps, 3, 0)?,
        seconds: field(&caps, 4, 0)?,
        nanos: caps.get(5).map_or(Some(0), |m| fraction(m.as_str()))?,
    })
}

/// Formats components at the given resolution, e.g. `"2008-06-25"` for a
/// day or `"2008-06-25 12:00:00.250"` for a millisecond.
///
/// Years beyond 9999 get a leading `+` so that the text scans back.
pub fn format(parts: &TimeParts, resolution: Resolution) -> String {
    let sign = if parts.year > 9999 { "+" } else { "" };
    let mut text = format!("{sign}{:04}", parts.year);
    if resolution >= Resolution::Month {
        text.push_str(&format!("-{:02}", parts.month));
    }
    if resolution >= Resolution::Day {
        text.push_str(&format!("-{:02}", parts.day));
    }
    if resolution >= Resolution::Hour {
        text.push_str(&format!(" {:02}", parts.hour));
    }
    if resolution >= Resolution::Min {
        text.push_str(&format!(":{:02}", parts.minute));
    }
    if resolution >= Resolution::Sec {
        text.push_str(&format!(":{:02}", parts.second));
    }
    let digits = resolution.fraction_digits();
    if digits > 0 {
        let value = parts.nanos / 10u32.pow(9 - digits as u32);
        text.push_str(&format!(".{value:0digits$}"));
    }
    text
}
