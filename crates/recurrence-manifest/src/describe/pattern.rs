use chrono::{Month, Weekday};
use recurrence_core::types::Locale;

use super::join::join_list;
use super::names::{conjunction, month_name, ordinal, weekday_name};
use crate::model::{Arbitrator, RecurrencePattern, WeekdaySet};

/// Renders the "how often" half of a manifest.
pub(crate) fn pattern_phrase(pattern: &RecurrencePattern, locale: Locale) -> String {
    match *pattern {
        RecurrencePattern::DailyEveryXDay { interval } => every_x_day(locale, interval),
        RecurrencePattern::DailyEveryWeekday => every_weekday(locale).to_string(),
        RecurrencePattern::WeeklyStandard { days } => weekly(locale, days),
        RecurrencePattern::MonthEveryXDayEveryYMonth {
            day_of_month,
            interval,
        } => monthly_by_date(locale, day_of_month, interval),
        RecurrencePattern::MonthEveryArbitraryDateOfMonth {
            arbitrator,
            day_of_week,
            interval,
        } => monthly_by_weekday(locale, arbitrator, day_of_week, interval),
        RecurrencePattern::YearlyEveryXOfMonth {
            day_of_month,
            month,
            interval,
        } => yearly_by_date(locale, day_of_month, month, interval),
        RecurrencePattern::YearlyEveryArbitraryWeekdayInMonth {
            arbitrator,
            day_of_week,
            month,
            interval,
        } => yearly_by_weekday(locale, arbitrator, day_of_week, month, interval),
    }
}

// Intervals are never pluralized: "every 1 day", "every 3 day".
fn every_x_day(locale: Locale, interval: u32) -> String {
    match locale {
        Locale::Default => format!("Daily every {interval} day"),
        Locale::NbNo => format!("Daglig hver {interval}. dag"),
    }
}

const fn every_weekday(locale: Locale) -> &'static str {
    match locale {
        Locale::Default => "Every weekday",
        Locale::NbNo => "Hver ukedag",
    }
}

fn weekly(locale: Locale, days: WeekdaySet) -> String {
    let names: Vec<_> = days.days().map(|day| weekday_name(locale, day)).collect();
    let joined = join_list(&names, conjunction(locale));
    match locale {
        Locale::Default => format!("Weekly every {joined}"),
        Locale::NbNo => format!("Ukentlig hver {joined}"),
    }
}

fn monthly_by_date(locale: Locale, day_of_month: u8, interval: u32) -> String {
    match locale {
        Locale::Default => format!("The {day_of_month} every {interval} month"),
        Locale::NbNo => format!("Den {day_of_month}. hver {interval}. måned"),
    }
}

fn monthly_by_weekday(
    locale: Locale,
    arbitrator: Arbitrator,
    day_of_week: Weekday,
    interval: u32,
) -> String {
    let nth = ordinal(locale, arbitrator);
    let day = weekday_name(locale, day_of_week);
    match locale {
        Locale::Default => format!("Every {nth} {day} every {interval} month"),
        Locale::NbNo => format!("Hver {nth} {day} hver {interval}. måned"),
    }
}

fn yearly_by_date(locale: Locale, day_of_month: u8, month: Month, interval: u32) -> String {
    let month = month_name(locale, month);
    match locale {
        Locale::Default => format!("The {day_of_month} {month} every {interval} year(s)"),
        Locale::NbNo => format!("Den {day_of_month}. {month} hvert {interval}. år"),
    }
}

fn yearly_by_weekday(
    locale: Locale,
    arbitrator: Arbitrator,
    day_of_week: Weekday,
    month: Month,
    interval: u32,
) -> String {
    let nth = ordinal(locale, arbitrator);
    let day = weekday_name(locale, day_of_week);
    let month = month_name(locale, month);
    match locale {
        Locale::Default => format!("The {nth} {day} in {month} every {interval} year(s)"),
        Locale::NbNo => format!("Den {nth} {day} i {month} hvert {interval}. år"),
    }
}
