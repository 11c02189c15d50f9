//! RFC 5545 projection and occurrence expansion of recurrence manifests.
//!
//! Occurrences are whole days: the series starts at local midnight in the
//! requested zone and every expanded instance is reported as its local date.

use chrono::{DateTime, Months, NaiveDate, NaiveTime, TimeZone};
use rrule::{Frequency, NWeekday, RRule, RRuleSet, Tz, Unvalidated};

use crate::error::{ManifestError, ManifestResult};
use crate::model::{
    Arbitrator, RecurrenceManifest, RecurrencePattern, RecurrenceTermination, Weekday, WeekdaySet,
};

/// A manifest anchored to a concrete series start.
#[derive(Debug)]
pub struct Projection {
    /// DTSTART of the series.
    pub dt_start: DateTime<Tz>,
    pub rule: RRule<Unvalidated>,
}

impl Projection {
    /// ## Summary
    /// Validates the rule against its start.
    ///
    /// ## Errors
    /// Returns `ManifestError::Rule` if the rule is rejected.
    pub fn build(self) -> ManifestResult<RRuleSet> {
        self.rule
            .build(self.dt_start)
            .map_err(|err| ManifestError::Rule(err.to_string()))
    }
}

fn interval(value: u32) -> ManifestResult<u16> {
    u16::try_from(value)
        .map_err(|_err| ManifestError::Rule(format!("interval {value} exceeds {}", u16::MAX)))
}

fn day_of_month(value: u8) -> ManifestResult<i8> {
    i8::try_from(value)
        .map_err(|_err| ManifestError::Rule(format!("day of month {value} out of range")))
}

fn by_weekdays(days: WeekdaySet) -> Vec<NWeekday> {
    days.days().map(NWeekday::Every).collect()
}

fn nth_weekday(arbitrator: Arbitrator, day: Weekday) -> Vec<NWeekday> {
    vec![NWeekday::Nth(arbitrator.nth(), day)]
}

fn local_midnight(tz: Tz, date: NaiveDate) -> ManifestResult<DateTime<Tz>> {
    tz.from_local_datetime(&date.and_time(NaiveTime::MIN))
        .earliest()
        .ok_or_else(|| ManifestError::Rule(format!("{date} has no local midnight in {tz:?}")))
}

/// Last second of `date` in `tz`, expressed in UTC as UNTIL requires for
/// zoned start times.
fn until_end_of_day(tz: Tz, date: NaiveDate) -> ManifestResult<DateTime<Tz>> {
    let next = date
        .succ_opt()
        .ok_or_else(|| ManifestError::Rule(format!("{date} has no following day")))?;
    let end = local_midnight(tz, next)? - chrono::TimeDelta::seconds(1);
    Ok(end.with_timezone(&Tz::UTC))
}

/// ## Summary
/// Maps the pattern half of a manifest onto an RRULE without COUNT or UNTIL.
///
/// ## Errors
/// Returns `ManifestError::Rule` when an interval or day does not fit the
/// rule's value ranges.
pub fn pattern_rule(pattern: &RecurrencePattern) -> ManifestResult<RRule<Unvalidated>> {
    Ok(match *pattern {
        RecurrencePattern::DailyEveryXDay { interval: every } => {
            RRule::new(Frequency::Daily).interval(interval(every)?)
        }
        RecurrencePattern::DailyEveryWeekday => {
            RRule::new(Frequency::Weekly).by_weekday(by_weekdays(WeekdaySet::workdays()))
        }
        RecurrencePattern::WeeklyStandard { days } => {
            RRule::new(Frequency::Weekly).by_weekday(by_weekdays(days))
        }
        RecurrencePattern::MonthEveryXDayEveryYMonth {
            day_of_month: day,
            interval: every,
        } => RRule::new(Frequency::Monthly)
            .interval(interval(every)?)
            .by_month_day(vec![day_of_month(day)?]),
        RecurrencePattern::MonthEveryArbitraryDateOfMonth {
            arbitrator,
            day_of_week,
            interval: every,
        } => RRule::new(Frequency::Monthly)
            .interval(interval(every)?)
            .by_weekday(nth_weekday(arbitrator, day_of_week)),
        RecurrencePattern::YearlyEveryXOfMonth {
            day_of_month: day,
            month,
            interval: every,
        } => RRule::new(Frequency::Yearly)
            .interval(interval(every)?)
            .by_month(&[month])
            .by_month_day(vec![day_of_month(day)?]),
        RecurrencePattern::YearlyEveryArbitraryWeekdayInMonth {
            arbitrator,
            day_of_week,
            month,
            interval: every,
        } => RRule::new(Frequency::Yearly)
            .interval(interval(every)?)
            .by_month(&[month])
            .by_weekday(nth_weekday(arbitrator, day_of_week)),
    })
}

/// ## Summary
/// Anchors a manifest at `series_start` in `tz` and adds its termination.
///
/// `stop_within` manifests carry their own start date, which takes precedence
/// over `series_start`. `no_stop_date` manifests end
/// `project_x_months_into_future` months after the series start.
///
/// ## Errors
/// Returns `ManifestError::Invalid` if the manifest fails validation and
/// `ManifestError::Rule` if the projection cannot be expressed.
pub fn project(
    manifest: &RecurrenceManifest,
    series_start: NaiveDate,
    tz: chrono_tz::Tz,
) -> ManifestResult<Projection> {
    manifest.validate()?;

    let tz = Tz::Tz(tz);
    let rule = pattern_rule(&manifest.pattern)?;

    let (start, rule) = match manifest.termination {
        RecurrenceTermination::StopWithin {
            start_date,
            stop_within,
        } => (start_date, rule.until(until_end_of_day(tz, stop_within)?)),
        RecurrenceTermination::StopAfterXInstances {
            stop_after_x_occurrences,
        } => (series_start, rule.count(stop_after_x_occurrences)),
        RecurrenceTermination::NoStopDate {
            project_x_months_into_future,
        } => {
            let horizon = series_start
                .checked_add_months(Months::new(project_x_months_into_future))
                .ok_or_else(|| {
                    ManifestError::Rule(format!(
                        "{series_start} + {project_x_months_into_future} months is out of range"
                    ))
                })?;
            (series_start, rule.until(until_end_of_day(tz, horizon)?))
        }
    };

    Ok(Projection {
        dt_start: local_midnight(tz, start)?,
        rule,
    })
}

/// ## Summary
/// Lists the local dates a manifest recurs on, at most `limit` of them.
///
/// Follows the rule engine's convention: the series start itself is only an
/// occurrence when it matches the pattern.
///
/// ## Errors
/// See [`project`].
pub fn expand(
    manifest: &RecurrenceManifest,
    series_start: NaiveDate,
    tz: chrono_tz::Tz,
    limit: u16,
) -> ManifestResult<Vec<NaiveDate>> {
    let rrule_set = project(manifest, series_start, tz)?.build()?;
    let result = rrule_set.all(limit);

    tracing::debug!(
        pattern = %manifest.pattern.strategy(),
        termination = %manifest.termination.strategy(),
        occurrences = result.dates.len(),
        limited = result.limited,
        "Expanded recurrence manifest"
    );

    Ok(result
        .dates
        .iter()
        .map(DateTime::date_naive)
        .collect())
}
