//! Localized name tables and date formatting.

use chrono::{Datelike, Month, NaiveDate, Weekday};
use recurrence_core::types::Locale;

use crate::model::Arbitrator;

const NB_MONTHS: [&str; 12] = [
    "januar",
    "februar",
    "mars",
    "april",
    "mai",
    "juni",
    "juli",
    "august",
    "september",
    "oktober",
    "november",
    "desember",
];

pub(crate) const fn weekday_name(locale: Locale, weekday: Weekday) -> &'static str {
    match locale {
        Locale::Default => match weekday {
            Weekday::Mon => "monday",
            Weekday::Tue => "tuesday",
            Weekday::Wed => "wednesday",
            Weekday::Thu => "thursday",
            Weekday::Fri => "friday",
            Weekday::Sat => "saturday",
            Weekday::Sun => "sunday",
        },
        Locale::NbNo => match weekday {
            Weekday::Mon => "mandag",
            Weekday::Tue => "tirsdag",
            Weekday::Wed => "onsdag",
            Weekday::Thu => "torsdag",
            Weekday::Fri => "fredag",
            Weekday::Sat => "lørdag",
            Weekday::Sun => "søndag",
        },
    }
}

pub(crate) fn month_name(locale: Locale, month: Month) -> &'static str {
    match locale {
        Locale::Default => month.name(),
        Locale::NbNo => nb_month(month.number_from_month()),
    }
}

/// `number` is 1-based, as in `Datelike::month`.
fn nb_month(number: u32) -> &'static str {
    NB_MONTHS[(number as usize + 11) % 12]
}

pub(crate) const fn ordinal(locale: Locale, arbitrator: Arbitrator) -> &'static str {
    match locale {
        Locale::Default => match arbitrator {
            Arbitrator::First => "first",
            Arbitrator::Second => "second",
            Arbitrator::Third => "third",
            Arbitrator::Fourth => "fourth",
            Arbitrator::Last => "last",
        },
        Locale::NbNo => match arbitrator {
            Arbitrator::First => "første",
            Arbitrator::Second => "andre",
            Arbitrator::Third => "tredje",
            Arbitrator::Fourth => "fjerde",
            Arbitrator::Last => "siste",
        },
    }
}

pub(crate) const fn conjunction(locale: Locale) -> &'static str {
    match locale {
        Locale::Default => "and",
        Locale::NbNo => "og",
    }
}

/// Default renders ISO `YYYY-MM-DD`; `nb-no` renders `1. juni 2024`.
pub(crate) fn format_date(locale: Locale, date: NaiveDate) -> String {
    match locale {
        Locale::Default => date.to_string(),
        Locale::NbNo => format!(
            "{}. {} {}",
            date.day(),
            nb_month(date.month()),
            date.year()
        ),
    }
}
