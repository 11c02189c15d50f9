use recurrence_manifest::describe::describe_stored;
use recurrence_manifest::stored::StoredManifest;

pub struct DescribeCase {
    pub name: &'static str,
    pub stored: &'static str,
    pub expected_default: &'static str,
    pub expected_nb_no: &'static str,
}

#[expect(clippy::too_many_lines)]
pub fn describe_cases() -> Vec<DescribeCase> {
    vec![
        DescribeCase {
            name: "daily_every_x_day_stop_within",
            stored: r#"{
                "pattern_strategy": "daily__every_x_day",
                "recurrence_strategy": "stop_within",
                "interval": 3,
                "start_date": "2024-01-01",
                "stop_within": "2024-06-01"
            }"#,
            expected_default: "Daily every 3 day between 2024-01-01 and 2024-06-01",
            expected_nb_no: "Daglig hver 3. dag mellom 1. januar 2024 og 1. juni 2024",
        },
        DescribeCase {
            name: "daily_every_weekday_stop_after",
            stored: r#"{
                "pattern_strategy": "daily__every_weekday",
                "recurrence_strategy": "stop_after_x_instances",
                "stop_after_x_occurrences": 10
            }"#,
            expected_default: "Every weekday after 10 ",
            expected_nb_no: "Hver ukedag etter 10 forekomster",
        },
        DescribeCase {
            name: "weekly_three_days_no_stop",
            stored: r#"{
                "pattern_strategy": "weekly__standard",
                "recurrence_strategy": "no_stop_date",
                "monday": true,
                "wednesday": true,
                "friday": true,
                "project_x_months_into_future": 6
            }"#,
            expected_default: "Weekly every monday, wednesday and friday for eternity (project 6 months into the future)",
            expected_nb_no: "Ukentlig hver mandag, onsdag og fredag for evig (prosjekt 6 måneder inn i fremtiden)",
        },
        DescribeCase {
            name: "weekly_two_days_no_stop",
            stored: r#"{
                "pattern_strategy": "weekly__standard",
                "recurrence_strategy": "no_stop_date",
                "monday": true,
                "friday": true,
                "project_x_months_into_future": 12
            }"#,
            expected_default: "Weekly every monday and friday for eternity (project 12 months into the future)",
            expected_nb_no: "Ukentlig hver mandag og fredag for evig (prosjekt 12 måneder inn i fremtiden)",
        },
        DescribeCase {
            name: "weekly_weekend_flags_out_of_order",
            stored: r#"{
                "pattern_strategy": "weekly__standard",
                "recurrence_strategy": "stop_after_x_instances",
                "sunday": true,
                "saturday": true,
                "stop_after_x_occurrences": 8
            }"#,
            expected_default: "Weekly every saturday and sunday after 8 ",
            expected_nb_no: "Ukentlig hver lørdag og søndag etter 8 forekomster",
        },
        DescribeCase {
            name: "month_every_x_day_every_y_month",
            stored: r#"{
                "pattern_strategy": "month__every_x_day_every_y_month",
                "recurrence_strategy": "stop_after_x_instances",
                "day_of_month": 15,
                "interval": 2,
                "stop_after_x_occurrences": 4
            }"#,
            expected_default: "The 15 every 2 month after 4 ",
            expected_nb_no: "Den 15. hver 2. måned etter 4 forekomster",
        },
        DescribeCase {
            name: "month_every_arbitrary_date_of_month",
            stored: r#"{
                "pattern_strategy": "month__every_arbitrary_date_of_month",
                "recurrence_strategy": "no_stop_date",
                "arbitrator": "second",
                "day_of_week": 1,
                "interval": 1,
                "project_x_months_into_future": 3
            }"#,
            expected_default: "Every second tuesday every 1 month for eternity (project 3 months into the future)",
            expected_nb_no: "Hver andre tirsdag hver 1. måned for evig (prosjekt 3 måneder inn i fremtiden)",
        },
        DescribeCase {
            name: "yearly_every_x_of_month",
            stored: r#"{
                "pattern_strategy": "yearly__every_x_of_month",
                "recurrence_strategy": "stop_within",
                "day_of_month": 17,
                "month": 5,
                "interval": 1,
                "start_date": "2024-05-17",
                "stop_within": "2030-12-31"
            }"#,
            expected_default: "The 17 May every 1 year(s) between 2024-05-17 and 2030-12-31",
            expected_nb_no: "Den 17. mai hvert 1. år mellom 17. mai 2024 og 31. desember 2030",
        },
        DescribeCase {
            name: "yearly_every_arbitrary_weekday_in_month",
            stored: r#"{
                "pattern_strategy": "yearly__every_arbitrary_weekday_in_month",
                "recurrence_strategy": "stop_after_x_instances",
                "arbitrator": "last",
                "day_of_week": 4,
                "month": 11,
                "interval": 2,
                "stop_after_x_occurrences": 5
            }"#,
            expected_default: "The last friday in November every 2 year(s) after 5 ",
            expected_nb_no: "Den siste fredag i november hvert 2. år etter 5 forekomster",
        },
        DescribeCase {
            name: "inverted_range_renders_literally",
            stored: r#"{
                "pattern_strategy": "daily__every_weekday",
                "recurrence_strategy": "stop_within",
                "start_date": "2024-06-01",
                "stop_within": "2024-01-01"
            }"#,
            expected_default: "Every weekday between 2024-06-01 and 2024-01-01",
            expected_nb_no: "Hver ukedag mellom 1. juni 2024 og 1. januar 2024",
        },
        DescribeCase {
            name: "weekly_no_days_renders_literally",
            stored: r#"{
                "pattern_strategy": "weekly__standard",
                "recurrence_strategy": "no_stop_date",
                "project_x_months_into_future": 0
            }"#,
            expected_default: "Weekly every  for eternity (project 0 months into the future)",
            expected_nb_no: "Ukentlig hver  for evig (prosjekt 0 måneder inn i fremtiden)",
        },
    ]
}

pub fn assert_case(case: &DescribeCase) {
    let records = StoredManifest::from_json(case.stored)
        .unwrap_or_else(|err| panic!("{}: stored record should parse: {err}", case.name));
    let stored = &records[0];

    for (code, expected) in [
        ("en", case.expected_default),
        ("nb-no", case.expected_nb_no),
    ] {
        let first = describe_stored(stored, code)
            .unwrap_or_else(|err| panic!("{} [{code}]: should describe: {err}", case.name));
        let second = describe_stored(stored, code).expect("second call");

        assert_eq!(first, expected, "{} [{code}]", case.name);
        assert_eq!(first, second, "{} [{code}] must be deterministic", case.name);
        assert!(!first.is_empty(), "{} [{code}]", case.name);
    }
}
