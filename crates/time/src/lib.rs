//! # kalends-time
//!
//! Time domains and the dense time indices that live in them.
//!
//! A [`TimeDomain`] is realized from a [`DomainDefinition`]: a base
//! resolution, an origin, and optional patterns that remove base periods
//! (a [`Cycle`](kalends_pattern::Cycle)) or select positions inside them
//! (a [`SubPeriodPattern`](kalends_pattern::SubPeriodPattern)). The domain
//! packs calendar components into consecutive integers and unpacks them
//! again; a [`TimeIndex`] is one such integer tied to its domain.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["text"] -->|"scan()"| B["TimeParts"]
//!     B -->|"TimeDomain::pack()"| C["index"]
//!     C -->|"TimeDomain::unpack()"| B
//!     B -->|"format()"| A
//!     C --> D["TimeIndex"]
//!     D --> E["Range"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use kalends_calendar::Resolution;
//! use kalends_pattern::{Adjustment, FixedSubPeriods};
//! use kalends_time::{DomainDefinition, TimeDomain};
//!
//! // The 10th and 20th of every month
//! let sub = FixedSubPeriods::new(Resolution::Month, Resolution::Day, [10, 20]).unwrap();
//! let domain = TimeDomain::new(DomainDefinition::new(Resolution::Month).with_sub_pattern(sub)).unwrap();
//!
//! let down = domain.time_from_str("2008-06-25", Adjustment::Down).unwrap();
//! let up = domain.time_from_str("2008-06-25", Adjustment::Up).unwrap();
//! assert_eq!(down.to_string(), "2008-06-20");
//! assert_eq!(up.to_string(), "2008-07-10");
//! assert_eq!(up.sub(&down).unwrap(), 1);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `definition` | Domain definitions and the built-in catalog |
//! | `domain` | Packing engine and domain bounds |
//! | `index` | Time values, arithmetic and cross-domain comparison |
//! | `range` | Closed intervals of time values |
//! | `registry` | Deduplicating domain catalog |
//! | `text` | ISO 8601-like scanning and formatting |
//! | `error` | Error types |

mod definition;
mod domain;
mod error;
mod index;
mod range;
mod registry;
mod text;

pub use definition::{BUILTIN_LABELS, DomainDefinition};
pub use domain::TimeDomain;
pub use error::{ErrorKind, TimeError};
pub use index::TimeIndex;
pub use range::{Range, RangeIter};
pub use registry::DomainRegistry;
pub use text::{format, scan};
