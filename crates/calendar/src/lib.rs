//! # kalends-calendar
//!
//! Pure, integer-only arithmetic for the proleptic Gregorian calendar
//! starting at year 0, plus the small value types shared by the rest of the
//! workspace.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["(year, month, day)"] -->|"day_count()"| B["days since 0000-01-01"]
//!     B -->|"date_from_day_count()"| A
//!     B -->|"day_of_week()"| C["Weekday"]
//!     D["(year, month, weekday, rank)"] -->|"day_by_rank()"| E["day of period"]
//!     F["seconds of day"] -->|"hms()"| G["(hour, min, sec)"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use kalends_calendar::{Weekday, date_from_day_count, day_by_rank, day_count};
//!
//! let days = day_count(2000, 1, 1).unwrap();
//! assert_eq!(days, 730_485);
//! assert_eq!(date_from_day_count(days).unwrap(), (2000, 1, 1));
//!
//! // Third Friday of January 2000
//! assert_eq!(day_by_rank(2000, 1, Weekday::Friday, 3).unwrap(), 21);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `gregorian` | Leap years, month lengths, day counts in 400-year blocks |
//! | `clock` | Second-of-day conversions |
//! | `weekday` | Weekday type, day of week, nth weekday of a period |
//! | `resolution` | Ordered time units from year to nanosecond |
//! | `parts` | Unvalidated calendar components and UTC offsets |
//! | `error` | Error types |

mod clock;
mod error;
mod gregorian;
mod parts;
mod resolution;
mod weekday;

pub use clock::{NANOS_PER_SECOND, SECONDS_PER_DAY, hms, seconds_of_day};
pub use error::CalendarError;
pub use gregorian::{
    DAYS_PER_400_YEARS, check_date, date_from_day_count, day_count, day_of_year, days_in_month,
    days_in_year, is_leap, leap_years, month_and_day,
};
pub use parts::{TimeParts, UtcOffset};
pub use resolution::Resolution;
pub use weekday::{MAX_RANK_IN_MONTH, MAX_RANK_IN_YEAR, Weekday, day_by_rank, day_of_week};
