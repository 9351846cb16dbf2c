use std::cmp::Ordering;
use std::sync::Arc;

use kalends_calendar::{Resolution, Weekday};
use kalends_pattern::{Adjustment, Cycle, DayRank, DayRankingSubPeriods, FixedSubPeriods};
use kalends_time::{DomainDefinition, DomainRegistry, ErrorKind, TimeDomain};

fn domain(def: DomainDefinition) -> Arc<TimeDomain> {
    TimeDomain::new(def).unwrap()
}

fn third_friday() -> Arc<TimeDomain> {
    let sub = DayRankingSubPeriods::new(Resolution::Month, [DayRank::new(Weekday::Friday, 3)])
        .unwrap();
    domain(DomainDefinition::new(Resolution::Month).with_sub_pattern(sub))
}

#[test]
fn work_week_starts_on_the_first_monday() {
    let week = domain(DomainDefinition::builtin("workweek").unwrap());
    assert_eq!(week.time(0).unwrap().to_string(), "0000-01-03");
    let monday = week.time_from_str("0000-01-03", Adjustment::None).unwrap();
    assert_eq!(monday.index(), 0);
    assert_eq!(monday.day_of_week().unwrap(), Weekday::Monday);
    assert_eq!(monday.add(5).unwrap().to_string(), "0000-01-10");
}

#[test]
fn tenth_and_twentieth_of_the_month() {
    let sub = FixedSubPeriods::new(Resolution::Month, Resolution::Day, [10, 20]).unwrap();
    let d = domain(DomainDefinition::new(Resolution::Month).with_sub_pattern(sub));
    let down = d.time_from_str("2008-06-25", Adjustment::Down).unwrap();
    let up = d.time_from_str("2008-06-25", Adjustment::Up).unwrap();
    assert_eq!(down.to_string(), "2008-06-20");
    assert_eq!(up.to_string(), "2008-07-10");
    let err = d.time_from_str("2008-06-25", Adjustment::None).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnreachableTime);
    assert_eq!(err.key(), "unreachable_time");
}

#[test]
fn third_friday_of_the_month() {
    let d = third_friday();
    let t = d.time_from_str("2000-01-01", Adjustment::Up).unwrap();
    assert_eq!(t.to_string(), "2000-01-21");
    assert_eq!(t.day_of_week().unwrap(), Weekday::Friday);
    assert_eq!(t.next().unwrap().to_string(), "2000-02-18");
    let before = d.time_from_str("2000-01-01", Adjustment::Down).unwrap();
    assert_eq!(before.to_string(), "1999-12-17");
}

#[test]
fn day_max_time_plus_one_overflows() {
    let registry = DomainRegistry::with_builtins();
    let day = registry.by_label("day").unwrap();
    let err = day.max_time().unwrap().add(1).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Overflow);
}

#[test]
fn microsecond_max_formats_and_rescans() {
    let usec = TimeDomain::unrestricted(Resolution::Usec);
    let t = usec.time(i64::MAX).unwrap();
    let text = t.to_string();
    assert_eq!(text, "+292277-01-09 04:00:54.775807");
    let back = usec.time_from_str(&text, Adjustment::None).unwrap();
    assert_eq!(back, t);
}

#[test]
fn leap_second_folds_into_the_previous_second() {
    let sec = TimeDomain::unrestricted(Resolution::Sec);
    let t = sec.time_from_str("2008-12-31 23:59:60", Adjustment::None).unwrap();
    assert_eq!(t.to_string(), "2008-12-31 23:59:59");
    assert_eq!(t.add(1).unwrap().to_string(), "2009-01-01 00:00:00");
    let err = sec
        .time_from_str("2008-11-30 23:59:60", Adjustment::None)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn end_of_day_midnight_rolls_over() {
    let min = TimeDomain::unrestricted(Resolution::Min);
    let t = min.time_from_str("2008-02-29T24:00", Adjustment::None).unwrap();
    assert_eq!(t.to_string(), "2008-03-01 00:00");
}

#[test]
fn offsets_are_applied() {
    let hour = TimeDomain::unrestricted(Resolution::Hour);
    let t = hour
        .time_from_str("2000-01-01T02:00+03:00", Adjustment::None)
        .unwrap();
    assert_eq!(t.to_string(), "1999-12-31 23");
    let z = hour.time_from_str("2000-01-01T02Z", Adjustment::None).unwrap();
    assert_eq!(z.to_string(), "2000-01-01 02");
}

#[test]
fn cross_domain_comparison() {
    let registry = DomainRegistry::with_builtins();
    let daily = registry.by_label("day").unwrap();
    let work_week = registry.by_label("workweek").unwrap();
    // Thursdays only; 0000-01-01 was a Saturday
    let thursdays = registry
        .get_or_insert(
            DomainDefinition::new(Resolution::Day)
                .with_label("thursdays")
                .with_cycle(Cycle::new([false, false, false, false, false, true, false]).unwrap()),
        )
        .unwrap();

    let a = daily.time_from_str("2005-06-02", Adjustment::None).unwrap();
    let b = thursdays.time_from_str("2005-06-01", Adjustment::Up).unwrap();
    let c = work_week.time_from_str("2005-06-02", Adjustment::None).unwrap();
    assert_eq!(b.to_string(), "2005-06-02");
    for (x, y) in [(&a, &b), (&b, &c), (&a, &c), (&c, &a)] {
        assert_eq!(x.compare(y).unwrap(), Ordering::Equal, "{x:?} vs {y:?}");
    }
    assert_ne!(a, c);

    let later = work_week.time_from_str("2005-06-03", Adjustment::None).unwrap();
    assert_eq!(later.compare(&b).unwrap(), Ordering::Greater);
    let hour = TimeDomain::unrestricted(Resolution::Hour)
        .time_from_str("2005-06-02 01", Adjustment::None)
        .unwrap();
    assert_eq!(c.compare(&hour).unwrap(), Ordering::Less);
}

#[test]
fn first_of_january_formats_for_every_year() {
    let day = TimeDomain::unrestricted(Resolution::Day);
    for year in 0..=9999 {
        let t = day
            .time_from_parts(&kalends_calendar::TimeParts::ymd(year, 1, 1), Adjustment::None)
            .unwrap();
        assert_eq!(t.to_string(), format!("{year:04}-01-01"));
    }
}

#[test]
fn offset_compatible_bounds() {
    let d = domain(DomainDefinition::new(Resolution::Sec).with_origin(1 << 40));
    let min = d.min_offset_compatible_time().unwrap();
    let max = d.max_offset_compatible_time().unwrap();
    assert_eq!(min.offset().unwrap(), i32::MIN);
    assert_eq!(max.offset().unwrap(), i32::MAX);
    assert_eq!(min.previous().unwrap().offset().unwrap_err().kind(), ErrorKind::OutOfRange);
}

#[test]
fn min_time_skips_dead_positions() {
    // No fifth Friday in January of year 0
    let sub = DayRankingSubPeriods::new(Resolution::Month, [DayRank::new(Weekday::Friday, 5)])
        .unwrap();
    let d = domain(DomainDefinition::new(Resolution::Month).with_sub_pattern(sub));
    let first = d.min_time().unwrap();
    assert_eq!(first.day_of_week().unwrap(), Weekday::Friday);
    assert!(first.day() >= 29);
    assert_eq!(d.time(0).unwrap_err().kind(), ErrorKind::UnreachableTime);
}
