use std::sync::Arc;

use kalends_calendar::{Resolution, Weekday};
use kalends_pattern::{Adjustment, Cycle, DayRank, DayRankingSubPeriods, FixedSubPeriods};
use kalends_time::{DomainDefinition, TimeDomain};
use proptest::prelude::*;

fn domains() -> Vec<Arc<TimeDomain>> {
    let mut defs: Vec<DomainDefinition> = DomainDefinition::builtins();
    defs.push(
        DomainDefinition::new(Resolution::Month).with_sub_pattern(
            FixedSubPeriods::new(Resolution::Month, Resolution::Day, [1, 15, 31]).unwrap(),
        ),
    );
    defs.push(
        DomainDefinition::new(Resolution::Year).with_sub_pattern(
            FixedSubPeriods::new(Resolution::Year, Resolution::Month, [3, 6, 9, 12]).unwrap(),
        ),
    );
    defs.push(
        DomainDefinition::new(Resolution::Day)
            .with_cycle(Cycle::new([true, false, true]).unwrap())
            .with_sub_pattern(
                FixedSubPeriods::new(Resolution::Day, Resolution::Sec, [0, 43_200, 86_399])
                    .unwrap(),
            ),
    );
    defs.push(
        DomainDefinition::new(Resolution::Month).with_sub_pattern(
            DayRankingSubPeriods::new(
                Resolution::Month,
                [
                    DayRank::new(Weekday::Monday, 1),
                    DayRank::new(Weekday::Monday, 5),
                ],
            )
            .unwrap(),
        ),
    );
    defs.into_iter()
        .map(|def| TimeDomain::new(def).unwrap())
        .collect()
}

fn assert_roundtrip(domain: &TimeDomain, index: i64) -> Result<(), TestCaseError> {
    let Ok(parts) = domain.unpack(index) else {
        // Dead sub-period position
        return Ok(());
    };
    for adjust in [Adjustment::None, Adjustment::Up, Adjustment::Down] {
        prop_assert_eq!(domain.pack(&parts, adjust).unwrap(), index, "{}", domain);
    }
    let text = domain.format(&parts);
    prop_assert_eq!(
        domain.pack(&kalends_time::scan(&text).unwrap(), Adjustment::None).unwrap(),
        index
    );
    Ok(())
}

proptest! {
    #[test]
    fn unpack_then_pack_near_the_epoch(slot in 0usize..14, index in 0i64..10_000_000) {
        let all = domains();
        let domain = &all[slot % all.len()];
        prop_assume!(index <= domain.max_index());
        assert_roundtrip(domain, index)?;
    }

    #[test]
    fn unpack_then_pack_anywhere(slot in 0usize..14, fraction in 0.0f64..=1.0) {
        let all = domains();
        let domain = &all[slot % all.len()];
        let index = (domain.max_index() as f64 * fraction) as i64;
        assert_roundtrip(domain, index.clamp(0, domain.max_index()))?;
    }

    #[test]
    fn adjustment_brackets_the_request(days in 0i64..3_000_000) {
        let day = TimeDomain::unrestricted(Resolution::Day);
        let week = TimeDomain::new(DomainDefinition::builtin("workweek").unwrap()).unwrap();
        let parts = day.unpack(days).unwrap();
        let up = week.time_from_parts(&parts, Adjustment::Up).unwrap();
        let down = week.time_from_parts(&parts, Adjustment::Down);
        let request = day.time(days).unwrap();
        prop_assert!(up.compare(&request).unwrap().is_ge());
        match week.time_from_parts(&parts, Adjustment::None) {
            Ok(exact) => {
                prop_assert_eq!(&exact, &up);
                prop_assert_eq!(&exact, &down.unwrap());
            }
            Err(_) => {
                if let Ok(down) = down {
                    prop_assert!(down.compare(&request).unwrap().is_le());
                    prop_assert_eq!(up.index(), down.index() + 1);
                }
            }
        }
    }
}
