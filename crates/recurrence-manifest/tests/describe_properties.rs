//! Locale fallback and list-join properties of descriptions.

use chrono::{Month, NaiveDate, Weekday};
use recurrence_core::types::Locale;
use recurrence_manifest::describe::{describe, describe_for_code};
use recurrence_manifest::model::{
    Arbitrator, RecurrenceManifest, RecurrencePattern, RecurrenceTermination, WeekdaySet,
};

const ALL_DAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

fn weekly(days: &[Weekday]) -> RecurrenceManifest {
    RecurrenceManifest::new(
        RecurrencePattern::WeeklyStandard {
            days: days.iter().copied().collect(),
        },
        RecurrenceTermination::StopAfterXInstances {
            stop_after_x_occurrences: 3,
        },
    )
}

fn sample_patterns() -> Vec<RecurrencePattern> {
    vec![
        RecurrencePattern::DailyEveryXDay { interval: 2 },
        RecurrencePattern::DailyEveryWeekday,
        RecurrencePattern::WeeklyStandard {
            days: WeekdaySet::workdays(),
        },
        RecurrencePattern::MonthEveryXDayEveryYMonth {
            day_of_month: 31,
            interval: 1,
        },
        RecurrencePattern::MonthEveryArbitraryDateOfMonth {
            arbitrator: Arbitrator::Fourth,
            day_of_week: Weekday::Sat,
            interval: 3,
        },
        RecurrencePattern::YearlyEveryXOfMonth {
            day_of_month: 1,
            month: Month::January,
            interval: 1,
        },
        RecurrencePattern::YearlyEveryArbitraryWeekdayInMonth {
            arbitrator: Arbitrator::Third,
            day_of_week: Weekday::Wed,
            month: Month::June,
            interval: 4,
        },
    ]
}

fn sample_terminations() -> Vec<RecurrenceTermination> {
    vec![
        RecurrenceTermination::StopWithin {
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            stop_within: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        },
        RecurrenceTermination::StopAfterXInstances {
            stop_after_x_occurrences: 1,
        },
        RecurrenceTermination::NoStopDate {
            project_x_months_into_future: 24,
        },
    ]
}

#[test]
fn every_combination_is_non_empty_and_deterministic() {
    for pattern in sample_patterns() {
        for termination in sample_terminations() {
            let manifest = RecurrenceManifest::new(pattern, termination);
            for locale in [Locale::Default, Locale::NbNo] {
                let first = describe(&manifest, locale);
                assert!(!first.is_empty());
                assert_eq!(first, describe(&manifest, locale));
            }
        }
    }
}

#[test]
fn unrecognized_codes_fall_back_to_default() {
    let manifest = weekly(&[Weekday::Tue, Weekday::Thu]);
    let expected = describe(&manifest, Locale::Default);

    for code in ["", "en", "en-GB", "nn-NO", "nb", "no", "de-DE", "not a locale"] {
        assert_eq!(describe_for_code(&manifest, code), expected, "{code:?}");
    }
    assert_ne!(describe_for_code(&manifest, "nb-no"), expected);
}

#[test]
fn weekly_join_law() {
    for count in 1..=ALL_DAYS.len() {
        let days = &ALL_DAYS[..count];
        let text = describe(&weekly(days), Locale::Default);

        let and_count = text.matches(" and ").count();
        let comma_count = text.matches(',').count();

        if count == 1 {
            assert_eq!(and_count, 0, "{text}");
        } else {
            assert_eq!(and_count, 1, "{text}");
        }
        assert_eq!(comma_count, count.saturating_sub(2), "{text}");
    }
}

#[test]
fn weekly_spec_examples() {
    assert_eq!(
        describe(&weekly(&[Weekday::Mon]), Locale::Default),
        "Weekly every monday after 3 "
    );
    assert_eq!(
        describe(&weekly(&[Weekday::Fri, Weekday::Mon, Weekday::Wed]), Locale::Default),
        "Weekly every monday, wednesday and friday after 3 "
    );
    assert_eq!(
        describe(&weekly(&[Weekday::Mon, Weekday::Wed]), Locale::NbNo),
        "Ukentlig hver mandag og onsdag etter 3 forekomster"
    );
}

#[test]
fn stop_within_scenario() {
    let manifest = RecurrenceManifest::new(
        RecurrencePattern::DailyEveryWeekday,
        RecurrenceTermination::StopWithin {
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            stop_within: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        },
    );

    let english = describe(&manifest, Locale::Default);
    assert!(english.contains("between"));
    assert!(english.contains("2024-01-01"));
    assert!(english.contains("2024-06-01"));

    let norwegian = describe(&manifest, Locale::NbNo);
    assert!(norwegian.contains("mellom"));
    assert!(norwegian.contains("1. juni 2024"));
}
