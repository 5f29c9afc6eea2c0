#[cfg(test)]
mod tests {
    use crate::models::{OpeningPeriod, Query, Schedule, MINUTES_PER_DAY};
    use crate::parsing::hours::{
        day_index, parse_clock_time, parse_day_portion, parse_day_range, parse_schedule,
        parse_segment,
    };
    use crate::services::availability::is_open;
    use proptest::prelude::*;

    fn period(days: &[u8], start: u16, end: u16) -> OpeningPeriod {
        OpeningPeriod::new(days.iter().copied(), start, end)
    }

    // ==================== Clock times ====================

    #[test]
    fn test_clock_time_noon_and_midnight() {
        assert_eq!(parse_clock_time("12 am"), Some(0));
        assert_eq!(parse_clock_time("12:30 am"), Some(30));
        assert_eq!(parse_clock_time("12 pm"), Some(720));
        assert_eq!(parse_clock_time("12:15 pm"), Some(735));
    }

    #[test]
    fn test_clock_time_conversion() {
        assert_eq!(parse_clock_time("11 am"), Some(660));
        assert_eq!(parse_clock_time("11:00 am"), Some(660));
        assert_eq!(parse_clock_time("1 PM"), Some(780));
        assert_eq!(parse_clock_time("9:45pm"), Some(1305));
        assert_eq!(parse_clock_time("11:59 pm"), Some(1439));
        assert_eq!(parse_clock_time("  5:30 Am "), Some(330));
    }

    #[test]
    fn test_clock_time_rejects_garbage() {
        assert_eq!(parse_clock_time("noon"), None);
        assert_eq!(parse_clock_time("11"), None);
    }

    #[test]
    fn test_clock_time_out_of_range_passes_through() {
        assert_eq!(parse_clock_time("9:75 am"), Some(615));
        assert_eq!(parse_clock_time("13 am"), Some(780));
        assert_eq!(parse_clock_time("13 pm"), Some(MINUTES_PER_DAY));
        assert_eq!(parse_clock_time("99:99 pm"), Some(MINUTES_PER_DAY));
    }

    // ==================== Days ====================

    #[test]
    fn test_day_lookup_covers_abbreviations() {
        assert_eq!(day_index("sun"), Some(0));
        assert_eq!(day_index("sunday"), Some(0));
        assert_eq!(day_index("tues"), Some(2));
        assert_eq!(day_index("thurs"), Some(4));
        assert_eq!(day_index("saturday"), Some(6));
        assert_eq!(day_index("Sat"), None, "lookup expects lower case");
        assert_eq!(day_index("weekend"), None);
    }

    #[test]
    fn test_day_range_forward() {
        assert_eq!(parse_day_range("Mon-Fri"), vec![1, 2, 3, 4, 5]);
        assert_eq!(parse_day_range("wed - thu"), vec![3, 4]);
        assert_eq!(parse_day_range("Sat"), vec![6]);
    }

    #[test]
    fn test_day_range_wraps_through_week_end() {
        assert_eq!(parse_day_range("Sat-Sun"), vec![6, 0]);
        assert_eq!(parse_day_range("Fri-Mon"), vec![5, 6, 0, 1]);
    }

    #[test]
    fn test_day_range_unrecognized() {
        assert!(parse_day_range("").is_empty());
        assert!(parse_day_range("Funday").is_empty());
        assert!(parse_day_range("Mon-Someday").is_empty());
        assert!(parse_day_range("Mon-Tue-Wed").is_empty());
    }

    #[test]
    fn test_day_portion_merges_groups() {
        let days = parse_day_portion("Mon-Wed, Tue-Thu, Sun");
        assert_eq!(days.into_iter().collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
    }

    // ==================== Segments ====================

    #[test]
    fn test_segment_without_time_range() {
        assert!(parse_segment("Sat closed").is_empty());
        assert!(parse_segment("").is_empty());
        assert!(parse_segment("Mon-Fri 11 - 10").is_empty());
    }

    #[test]
    fn test_segment_out_of_range_end_runs_to_midnight() {
        let schedule = parse_schedule("Mon 9 am - 13 pm");
        assert_eq!(schedule, Schedule::new(vec![period(&[1], 540, MINUTES_PER_DAY)]));
        assert!(is_open(&schedule, Query::new(1, 600)));
        assert!(!is_open(&schedule, Query::new(2, 600)));
    }

    #[test]
    fn test_segment_out_of_range_start_is_inert() {
        let periods = parse_segment("Mon 13 pm - 14 pm");
        assert_eq!(periods, vec![period(&[1], MINUTES_PER_DAY, MINUTES_PER_DAY)]);
        assert!(periods.iter().all(|p| p.is_inert()));
    }

    // ==================== Full schedules ====================

    #[test]
    fn test_midnight_crossing_split() {
        let schedule = parse_schedule("Fri 11 pm - 1 am");
        assert_eq!(
            schedule,
            Schedule::new(vec![period(&[5], 1380, MINUTES_PER_DAY), period(&[6], 0, 60)])
        );
    }

    #[test]
    fn test_midnight_crossing_wraps_saturday_to_sunday() {
        let schedule = parse_schedule("Fri-Sat 8 pm - 2 am");
        assert_eq!(
            schedule.periods(),
            &[period(&[5, 6], 1200, 1440), period(&[6, 0], 0, 120)]
        );
    }

    #[test]
    fn test_two_segments() {
        let schedule = parse_schedule("Mon-Fri 11 am - 10 pm / Sat 11 am - 12 pm");
        assert_eq!(
            schedule.periods(),
            &[period(&[1, 2, 3, 4, 5], 660, 1320), period(&[6], 660, 720)]
        );
    }

    #[test]
    fn test_comma_groups_and_minutes() {
        let schedule = parse_schedule("Mon-Wed, Fri, Sun 11:30 am - 9:45 pm");
        assert_eq!(schedule.periods(), &[period(&[0, 1, 2, 3, 5], 690, 1305)]);
    }

    #[test]
    fn test_weekend_range() {
        let schedule = parse_schedule("Sat-Sun 10:30 am - 3 pm");
        assert_eq!(schedule.periods(), &[period(&[6, 0], 630, 900)]);
    }

    #[test]
    fn test_whitespace_and_case_insensitive() {
        let canonical = parse_schedule("Mon-Fri 11 am - 10 pm / Sat 11 am - 12 pm");
        let messy = parse_schedule("  MON-fri   11AM-10PM  /sat 11 Am -  12 pM ");
        assert_eq!(canonical, messy);
    }

    #[test]
    fn test_malformed_segment_is_skipped() {
        let schedule = parse_schedule("Mon-Fri 11 am - 10 pm / Sat by appointment");
        assert_eq!(schedule.periods(), &[period(&[1, 2, 3, 4, 5], 660, 1320)]);
    }

    #[test]
    fn test_unparseable_string_gives_empty_schedule() {
        assert!(parse_schedule("Closed for renovation").is_empty());
        assert!(parse_schedule("").is_empty());
        assert!(parse_schedule("///").is_empty());
    }

    #[test]
    fn test_empty_day_portion_is_inert() {
        let schedule = parse_schedule("11 am - 10 pm");
        assert_eq!(schedule.len(), 1);
        assert!(schedule.periods()[0].days().is_empty());
        assert_eq!(schedule.usable_periods(), 0);
    }

    #[test]
    fn test_unknown_day_is_inert() {
        let schedule = parse_schedule("Funday 9 am - 5 pm");
        assert_eq!(schedule.periods(), &[period(&[], 540, 1020)]);
    }

    #[test]
    fn test_zero_length_range() {
        let schedule = parse_schedule("Mon 9 am - 9 am");
        assert_eq!(schedule.periods(), &[period(&[1], 540, 540)]);
        assert_eq!(schedule.usable_periods(), 0);
    }

    #[test]
    fn test_close_at_midnight_keeps_inert_tail() {
        let schedule = parse_schedule("Sun 11 am - 12 am");
        assert_eq!(
            schedule.periods(),
            &[period(&[0], 660, 1440), period(&[1], 0, 0)]
        );
        assert_eq!(schedule.usable_periods(), 1);
    }

    #[test]
    fn test_deduplicated_days_in_split() {
        let schedule = parse_schedule("Mon-Sun, Sat 5 pm - 12:30 am");
        assert_eq!(
            schedule.periods(),
            &[
                period(&[0, 1, 2, 3, 4, 5, 6], 1020, 1440),
                period(&[0, 1, 2, 3, 4, 5, 6], 0, 30)
            ]
        );
    }

    // ==================== Properties ====================

    proptest! {
        #[test]
        fn prop_parse_is_deterministic(input in ".{0,80}") {
            prop_assert_eq!(parse_schedule(&input), parse_schedule(&input));
        }

        #[test]
        fn prop_periods_stay_in_bounds(
            input in "(Mon|Tues|Wed|Thu|Fri|Sat|Sun)(-(Mon|Wed|Fri|Sun))?(, Sat)? [0-9]{1,2}(:[0-5][0-9])? ?(am|pm) - [0-9]{1,2}(:[0-5][0-9])? ?(am|pm)( / Sun [0-9]{1,2} pm - [0-9]{1,2} am)?"
        ) {
            let schedule = parse_schedule(&input);
            for p in schedule.iter() {
                prop_assert!(p.end_minute() <= MINUTES_PER_DAY);
                prop_assert!(p.is_inert() || p.start_minute() < MINUTES_PER_DAY);
                prop_assert!(p.start_minute() <= p.end_minute());
                prop_assert!(p.days().iter().all(|d| *d < 7));
            }
        }
    }
}
