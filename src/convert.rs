//! Pure conversion functions: TOML config structs -> library types.

use anyhow::{Context, Result, bail};
use kalends_calendar::{Resolution, Weekday};
use kalends_pattern::{
    Adjustment, Cycle, DayRank, DayRankingSubPeriods, FixedSubPeriods, SubPeriodPattern,
};
use kalends_time::{DomainDefinition, DomainRegistry};

use crate::config::*;

/// Parses an adjustment name (`none`, `up`, `down`).
pub fn parse_adjustment(s: &str) -> Result<Adjustment> {
    Ok(s.parse::<Adjustment>()?)
}

/// Parses a resolution name such as `day` or `millisecond`.
pub fn parse_resolution(s: &str) -> Result<Resolution> {
    Ok(s.parse::<Resolution>()?)
}

/// Converts a TOML sub-period table into a [`SubPeriodPattern`].
///
/// Exactly one of `ranks` or `weekdays` must be set.
pub fn build_sub_pattern(base: Resolution, sub: &SubToml) -> Result<SubPeriodPattern> {
    let unit = parse_resolution(&sub.unit)?;
    match (&sub.ranks, &sub.weekdays) {
        (Some(ranks), None) => Ok(FixedSubPeriods::new(base, unit, ranks.iter().copied())?.into()),
        (None, Some(weekdays)) => {
            if unit != Resolution::Day {
                bail!("weekday rankings select days, got sub unit {unit}");
            }
            let ranks = weekdays
                .iter()
                .map(|w| Ok(DayRank::new(w.weekday.parse::<Weekday>()?, w.rank)))
                .collect::<Result<Vec<_>>>()?;
            Ok(DayRankingSubPeriods::new(base, ranks)?.into())
        }
        (Some(_), Some(_)) => bail!("sub pattern must have exactly one of ranks or weekdays, got both"),
        (None, None) => bail!("sub pattern must have exactly one of ranks or weekdays, got neither"),
    }
}

/// Builds a [`DomainDefinition`] from a TOML domain table.
pub fn build_definition(domain: &DomainToml) -> Result<DomainDefinition> {
    let base = parse_resolution(&domain.resolution)?;
    let mut def = DomainDefinition::new(base)
        .with_label(&domain.label)
        .with_origin(domain.origin);
    if let Some(ref pattern) = domain.cycle {
        def = def.with_cycle(Cycle::new(pattern.clone())?);
    }
    if let Some(ref sub) = domain.sub {
        def = def.with_sub_pattern(build_sub_pattern(base, sub)?);
    }
    Ok(def)
}

/// Builds a registry holding the built-in domains plus those of `config`.
pub fn build_registry(config: &KalendsConfig) -> Result<DomainRegistry> {
    let registry = DomainRegistry::with_builtins();
    for domain in &config.domain {
        let def = build_definition(domain)
            .with_context(|| format!("invalid domain {:?}", domain.label))?;
        registry
            .get_or_insert(def)
            .with_context(|| format!("cannot register domain {:?}", domain.label))?;
    }
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn domain_toml(src: &str) -> DomainToml {
        toml::from_str(src).unwrap()
    }

    #[test]
    fn adjustment_and_resolution_names() {
        assert_eq!(parse_adjustment("Down").unwrap(), Adjustment::Down);
        assert!(parse_adjustment("left").is_err());
        assert_eq!(parse_resolution("millisecond").unwrap(), Resolution::Msec);
        assert!(parse_resolution("fortnight").is_err());
    }

    #[test]
    fn fixed_sub_pattern() {
        let d = domain_toml(
            r#"
label = "dekads"
resolution = "month"
sub = { unit = "day", ranks = [1, 11, 21] }
"#,
        );
        let def = build_definition(&d).unwrap();
        assert_eq!(def.label(), Some("dekads"));
        assert_eq!(def.resolution(), Resolution::Day);
        assert_eq!(def.sub_pattern().unwrap().size(), 3);
    }

    #[test]
    fn sub_pattern_needs_exactly_one_source() {
        let both = SubToml {
            unit: "day".to_string(),
            ranks: Some(vec![1]),
            weekdays: Some(Vec::new()),
        };
        let err = build_sub_pattern(Resolution::Month, &both).unwrap_err();
        assert!(err.to_string().contains("got both"));
        let neither = SubToml {
            unit: "day".to_string(),
            ranks: None,
            weekdays: None,
        };
        assert!(build_sub_pattern(Resolution::Month, &neither).is_err());
    }

    #[test]
    fn weekday_rankings_select_days() {
        let sub = SubToml {
            unit: "sec".to_string(),
            ranks: None,
            weekdays: Some(vec![WeekdayRankToml {
                weekday: "friday".to_string(),
                rank: 3,
            }]),
        };
        assert!(build_sub_pattern(Resolution::Month, &sub).is_err());
    }

    #[test]
    fn extreme_weekday_rank_is_an_error() {
        let sub = SubToml {
            unit: "day".to_string(),
            ranks: None,
            weekdays: Some(vec![WeekdayRankToml {
                weekday: "mon".to_string(),
                rank: i32::MIN,
            }]),
        };
        let err = build_sub_pattern(Resolution::Month, &sub).unwrap_err();
        assert!(err.to_string().contains("-2147483648"));
    }

    #[test]
    fn registry_includes_config_domains() {
        let config: KalendsConfig = toml::from_str(
            r#"
[[domain]]
label = "odd-days"
resolution = "day"
cycle = [true, false]
"#,
        )
        .unwrap();
        let registry = build_registry(&config).unwrap();
        assert!(registry.by_label("odd-days").is_some());
        assert!(registry.by_label("workweek").is_some());
    }

    #[test]
    fn conflicting_labels_are_reported() {
        let config: KalendsConfig = toml::from_str(
            r#"
[[domain]]
label = "day"
resolution = "hour"
"#,
        )
        .unwrap();
        let err = build_registry(&config).unwrap_err();
        assert!(format!("{err:#}").contains("cannot register domain \"day\""));
    }
}
