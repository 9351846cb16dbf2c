use kalends_calendar::{Weekday, day_by_rank, day_count, day_of_week, days_in_month};

#[test]
fn every_ranked_day_has_the_requested_weekday() {
    for year in [1999, 2000, 2100] {
        for month in 1..=12 {
            for weekday in Weekday::ALL {
                for rank in [1, 2, 3, 4, 5, -1, -2, -5] {
                    let day = day_by_rank(year, month, weekday, rank).unwrap();
                    if day == 0 {
                        continue;
                    }
                    let days = day_count(year, month, day as u8).unwrap();
                    assert_eq!(day_of_week(days).unwrap(), weekday);
                }
            }
        }
    }
}

#[test]
fn first_and_last_occurrences_bracket_the_month() {
    for month in 1..=12 {
        let first = day_by_rank(2010, month, Weekday::Wednesday, 1).unwrap();
        let last = day_by_rank(2010, month, Weekday::Wednesday, -1).unwrap();
        assert!((1..=7).contains(&first));
        let length = u16::from(days_in_month(2010, month).unwrap());
        assert!(last + 7 > length && last <= length);
    }
}

#[test]
fn positive_and_negative_ranks_agree_in_four_week_months() {
    // February 2010 has exactly four of every weekday
    for weekday in Weekday::ALL {
        for rank in 1..=4 {
            assert_eq!(
                day_by_rank(2010, 2, weekday, rank).unwrap(),
                day_by_rank(2010, 2, weekday, rank - 5).unwrap()
            );
        }
        assert_eq!(day_by_rank(2010, 2, weekday, 5).unwrap(), 0);
        assert_eq!(day_by_rank(2010, 2, weekday, -5).unwrap(), 0);
    }
}
