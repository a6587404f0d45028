use calendar_preview::models::week::Week;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use proptest::prelude::*;

fn date_from_offset(offset: i64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1).unwrap() + Duration::days(offset)
}

proptest! {
    /// Property: a week is seven consecutive dates starting on Monday with one "today"
    #[test]
    fn prop_week_is_monday_based(offset in 0..20_000i64) {
        let today = date_from_offset(offset);
        let week = Week::containing(today);
        let days = week.days();

        prop_assert_eq!(days.len(), 7);
        prop_assert_eq!(days[0].date.weekday(), Weekday::Mon);
        for pair in days.windows(2) {
            prop_assert_eq!(pair[1].date - pair[0].date, Duration::days(1));
        }
        prop_assert_eq!(days.iter().filter(|d| d.is_today).count(), 1);
        prop_assert!(days.iter().any(|d| d.date == today && d.is_today));
        prop_assert_eq!(week.today_index(), Some(today.weekday().num_days_from_monday() as usize));
    }

    /// Property: when today lies in another week, no date is flagged
    #[test]
    fn prop_other_week_has_no_today(offset in 0..20_000i64, weeks in 1..50i64) {
        let reference = date_from_offset(offset);
        let today = reference + Duration::weeks(weeks);
        let week = Week::for_dates(reference, today);

        prop_assert!(week.days().iter().all(|d| !d.is_today));
        prop_assert_eq!(week.today_index(), None);
    }
}
