//! Declarative description of a time domain.

use std::hash::{Hash, Hasher};

use kalends_calendar::Resolution;
use kalends_pattern::{Cycle, SubPeriodPattern};

/// An immutable description of a time domain.
///
/// A definition combines a base resolution, an origin (the index that
/// offsets are measured from), an optional [`Cycle`] selecting which base
/// periods exist, and an optional [`SubPeriodPattern`] selecting finer
/// positions inside each of them.
///
/// Equality and hashing ignore the label: two definitions with the same
/// resolution, origin and patterns describe the same domain.
///
/// # Example
///
/// ```
/// use kalends_calendar::Resolution;
/// use kalends_pattern::Cycle;
/// use kalends_time::DomainDefinition;
///
/// let work_week = DomainDefinition::new(Resolution::Day)
///     .with_label("workweek")
///     .with_cycle(Cycle::new([false, false, true, true, true, true, true]).unwrap());
/// assert_eq!(work_week, DomainDefinition::builtin("workweek").unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct DomainDefinition {
    label: Option<String>,
    base: Resolution,
    origin: i64,
    cycle: Option<Cycle>,
    sub: Option<SubPeriodPattern>,
}

/// Labels of the built-in definitions, coarsest first.
pub const BUILTIN_LABELS: [&str; 10] = [
    "year",
    "month",
    "day",
    "workweek",
    "hour",
    "minute",
    "second",
    "millisecond",
    "microsecond",
    "nanosecond",
];

impl DomainDefinition {
    /// Creates an unlabeled definition with origin 0 and no patterns.
    pub fn new(base: Resolution) -> Self {
        Self {
            label: None,
            base,
            origin: 0,
            cycle: None,
            sub: None,
        }
    }

    /// The unrestricted definition of a resolution: origin 0, no patterns.
    pub fn unrestricted(resolution: Resolution) -> Self {
        Self::new(resolution)
    }

    /// Returns the built-in definition with the given label.
    ///
    /// See [`BUILTIN_LABELS`] for the available names.
    pub fn builtin(label: &str) -> Option<Self> {
        let base = match label {
            "year" => Resolution::Year,
            "month" => Resolution::Month,
            "day" | "workweek" => Resolution::Day,
            "hour" => Resolution::Hour,
            "minute" => Resolution::Min,
            "second" => Resolution::Sec,
            "millisecond" => Resolution::Msec,
            "microsecond" => Resolution::Usec,
            "nanosecond" => Resolution::Nsec,
            _ => return None,
        };
        let mut def = Self::new(base).with_label(label);
        if label == "workweek" {
            // 0000-01-01 was a Saturday
            let week = [false, false, true, true, true, true, true];
            def = def.with_cycle(Cycle::new(week).expect("work week has ON positions"));
        }
        Some(def)
    }

    /// Returns every built-in definition, coarsest first.
    pub fn builtins() -> Vec<Self> {
        BUILTIN_LABELS
            .iter()
            .filter_map(|label| Self::builtin(label))
            .collect()
    }

    /// Sets the human-readable label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the origin index.
    pub fn with_origin(mut self, origin: i64) -> Self {
        self.origin = origin;
        self
    }

    /// Sets the base-period cycle. A cycle with every position ON selects
    /// every base period and is dropped.
    pub fn with_cycle(mut self, cycle: Cycle) -> Self {
        self.cycle = cycle.is_effective().then_some(cycle);
        self
    }

    /// Sets the sub-period pattern.
    pub fn with_sub_pattern(mut self, sub: impl Into<SubPeriodPattern>) -> Self {
        self.sub = Some(sub.into());
        self
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Returns the base resolution.
    pub fn base_unit(&self) -> Resolution {
        self.base
    }

    /// Returns the effective resolution: the sub unit if a sub-period
    /// pattern is present, the base unit otherwise.
    pub fn resolution(&self) -> Resolution {
        self.sub.as_ref().map_or(self.base, SubPeriodPattern::sub_unit)
    }

    pub fn origin(&self) -> i64 {
        self.origin
    }

    pub fn cycle(&self) -> Option<&Cycle> {
        self.cycle.as_ref()
    }

    pub fn sub_pattern(&self) -> Option<&SubPeriodPattern> {
        self.sub.as_ref()
    }

    /// Returns `true` if neither a cycle nor a sub-period pattern is set.
    pub fn is_unrestricted(&self) -> bool {
        self.cycle.is_none() && self.sub.is_none()
    }
}

impl PartialEq for DomainDefinition {
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base
            && self.origin == other.origin
            && self.cycle == other.cycle
            && self.sub == other.sub
    }
}

impl Eq for DomainDefinition {}

impl Hash for DomainDefinition {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.base.hash(state);
        self.origin.hash(state);
        self.cycle.hash(state);
        self.sub.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use kalends_pattern::FixedSubPeriods;

    use super::*;

    #[test]
    fn label_is_not_part_of_identity() {
        let a = DomainDefinition::new(Resolution::Day).with_label("daily");
        let b = DomainDefinition::new(Resolution::Day).with_label("days");
        assert_eq!(a, b);
        let set: HashSet<_> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn origin_and_patterns_are_part_of_identity() {
        let day = DomainDefinition::new(Resolution::Day);
        assert_ne!(day, day.clone().with_origin(1));
        assert_ne!(day, DomainDefinition::builtin("workweek").unwrap());
        assert_ne!(day, DomainDefinition::new(Resolution::Hour));
    }

    #[test]
    fn all_on_cycle_is_dropped() {
        let def = DomainDefinition::new(Resolution::Day).with_cycle(Cycle::new([true; 7]).unwrap());
        assert!(def.cycle().is_none());
        assert_eq!(def, DomainDefinition::unrestricted(Resolution::Day));
    }

    #[test]
    fn effective_resolution() {
        let sub = FixedSubPeriods::new(Resolution::Month, Resolution::Day, [10, 20]).unwrap();
        let def = DomainDefinition::new(Resolution::Month).with_sub_pattern(sub);
        assert_eq!(def.base_unit(), Resolution::Month);
        assert_eq!(def.resolution(), Resolution::Day);
        assert!(!def.is_unrestricted());
    }

    #[test]
    fn builtins() {
        let all = DomainDefinition::builtins();
        assert_eq!(all.len(), BUILTIN_LABELS.len());
        assert_eq!(all[3].label(), Some("workweek"));
        assert_eq!(all[3].cycle().unwrap().compressed_length(), 5);
        assert_eq!(
            DomainDefinition::builtin("microsecond").unwrap(),
            DomainDefinition::unrestricted(Resolution::Usec)
        );
        assert!(DomainDefinition::builtin("fortnight").is_none());
    }
}
