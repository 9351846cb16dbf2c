use kalends_calendar::{
    CalendarError, date_from_day_count, day_count, day_of_year, days_in_month, is_leap,
    month_and_day,
};
use proptest::prelude::*;

#[test]
fn first_of_january_roundtrip_all_years() {
    for year in 0..=9999 {
        let days = day_count(year, 1, 1).unwrap();
        assert_eq!(
            date_from_day_count(days).unwrap(),
            (year, 1, 1),
            "roundtrip failed for year {year}"
        );
    }
}

#[test]
fn consecutive_days_are_consecutive_dates() {
    let start = day_count(1999, 12, 1).unwrap();
    let mut expected = (1999, 12, 1);
    for days in start..start + 1200 {
        assert_eq!(date_from_day_count(days).unwrap(), expected);
        let (y, m, d) = expected;
        expected = if d < days_in_month(y, m).unwrap() {
            (y, m, d + 1)
        } else if m < 12 {
            (y, m + 1, 1)
        } else {
            (y + 1, 1, 1)
        };
    }
}

#[test]
fn day_of_year_matches_month_and_day() {
    for year in [1900, 2000, 2001, 2004] {
        let mut doy = 0;
        for month in 1..=12 {
            for day in 1..=days_in_month(year, month).unwrap() {
                doy += 1;
                assert_eq!(day_of_year(year, month, day).unwrap(), doy);
                assert_eq!(month_and_day(doy, is_leap(year)).unwrap(), (month, day));
            }
        }
    }
}

#[test]
fn invalid_dates_are_rejected() {
    assert_eq!(
        day_count(2001, 2, 29).unwrap_err(),
        CalendarError::InvalidDay {
            day: 29,
            month: 2,
            max_day: 28
        }
    );
    assert_eq!(
        day_count(-1, 1, 1).unwrap_err(),
        CalendarError::InvalidYear { year: -1 }
    );
}

proptest! {
    #[test]
    fn day_count_roundtrip(days in 0i64..i64::MAX / 2) {
        let (y, m, d) = date_from_day_count(days).unwrap();
        prop_assert_eq!(day_count(y, m, d).unwrap(), days);
    }
}
