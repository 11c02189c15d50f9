use recurrence_core::types::Locale;

use super::names::format_date;
use crate::model::RecurrenceTermination;

/// Renders the "until when" half of a manifest.
///
/// Inverted date ranges are rendered as given.
pub(crate) fn termination_phrase(termination: &RecurrenceTermination, locale: Locale) -> String {
    match *termination {
        RecurrenceTermination::StopWithin {
            start_date,
            stop_within,
        } => {
            let start = format_date(locale, start_date);
            let stop = format_date(locale, stop_within);
            match locale {
                Locale::Default => format!("between {start} and {stop}"),
                Locale::NbNo => format!("mellom {start} og {stop}"),
            }
        }
        // The English phrase is a fragment with a trailing space; kept verbatim
        // until product decides on a completion.
        RecurrenceTermination::StopAfterXInstances {
            stop_after_x_occurrences,
        } => match locale {
            Locale::Default => format!("after {stop_after_x_occurrences} "),
            Locale::NbNo => format!("etter {stop_after_x_occurrences} forekomster"),
        },
        RecurrenceTermination::NoStopDate {
            project_x_months_into_future,
        } => match locale {
            Locale::Default => format!(
                "for eternity (project {project_x_months_into_future} months into the future)"
            ),
            Locale::NbNo => format!(
                "for evig (prosjekt {project_x_months_into_future} måneder inn i fremtiden)"
            ),
        },
    }
}
