//! # kalends-pattern
//!
//! Patterns that carve a dense index space out of the calendar.
//!
//! | Pattern | Acts on | Effect |
//! |---------|---------|--------|
//! | [`Cycle`] | base periods | repeating ON/OFF selection, e.g. a work week |
//! | [`FixedSubPeriods`] | positions inside a base period | fixed months, days or clock times |
//! | [`DayRankingSubPeriods`] | days inside a month or year | "3rd Friday", "last Monday" |
//!
//! Requests for points a pattern does not admit are resolved with an
//! [`Adjustment`]: fail, move up to the next admitted point, or move down to
//! the previous one.
//!
//! # Architecture
//!
//! ```text
//! raw base index ──Cycle::compress──▶ dense base index
//!                                        │
//!                    SubPeriodPattern::adjust_for_sub_period
//!                                        ▼
//!                        dense index = base * size + position
//! ```

mod adjust;
mod cycle;
mod day_rank;
mod error;
mod sub_period;

pub use adjust::{Adjustment, ParseAdjustmentError};
pub use cycle::Cycle;
pub use day_rank::{DayRank, DayRankingSubPeriods};
pub use error::PatternError;
pub use sub_period::{FixedSubPeriods, SubPeriodPattern};
