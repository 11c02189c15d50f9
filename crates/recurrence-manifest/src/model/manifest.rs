use chrono::{Month, NaiveDate};
use thiserror::Error;

use super::{PatternStrategy, RecurrencePattern, RecurrenceTermination};
use crate::error::{ManifestError, ManifestResult};

/// A recurring schedule: how often, and until when.
///
/// Both halves are independent. Nothing here cross-checks the pattern against
/// the termination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecurrenceManifest {
    pub pattern: RecurrencePattern,
    pub termination: RecurrenceTermination,
}

/// A business-rule violation found by [`RecurrenceManifest::validate`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    #[error("{strategy} interval must be at least 1, got {interval}")]
    IntervalTooSmall {
        strategy: PatternStrategy,
        interval: u32,
    },

    #[error("day of month must be within 1..=31, got {0}")]
    DayOfMonthOutOfRange(u8),

    #[error("day {day_of_month} never occurs in {}", .month.name())]
    DayNotInMonth { day_of_month: u8, month: Month },

    #[error("weekly recurrence selects no weekday")]
    NoWeekdaySelected,

    #[error("occurrence count must be at least 1")]
    NoOccurrences,

    #[error("stop date {stop_within} is before start date {start_date}")]
    InvertedRange {
        start_date: NaiveDate,
        stop_within: NaiveDate,
    },
}

/// Days in the longest occurrence of `month`, leap years included.
const fn longest_month(month: Month) -> u8 {
    match month {
        Month::February => 29,
        Month::April | Month::June | Month::September | Month::November => 30,
        _ => 31,
    }
}

impl RecurrenceManifest {
    #[must_use]
    pub const fn new(pattern: RecurrencePattern, termination: RecurrenceTermination) -> Self {
        Self {
            pattern,
            termination,
        }
    }

    /// ## Summary
    /// Collects every business-rule violation of the manifest.
    ///
    /// Describing a manifest never calls this; owners of a manifest decide
    /// whether to reject it before storing or expanding.
    #[must_use]
    pub fn issues(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        if let Some(interval) = self.pattern.interval()
            && interval == 0
        {
            issues.push(ValidationIssue::IntervalTooSmall {
                strategy: self.pattern.strategy(),
                interval,
            });
        }

        match self.pattern {
            RecurrencePattern::WeeklyStandard { days } if days.is_empty() => {
                issues.push(ValidationIssue::NoWeekdaySelected);
            }
            RecurrencePattern::MonthEveryXDayEveryYMonth { day_of_month, .. }
            | RecurrencePattern::YearlyEveryXOfMonth { day_of_month, .. }
                if !(1..=31).contains(&day_of_month) =>
            {
                issues.push(ValidationIssue::DayOfMonthOutOfRange(day_of_month));
            }
            RecurrencePattern::YearlyEveryXOfMonth {
                day_of_month, month, ..
            } if day_of_month > longest_month(month) => {
                issues.push(ValidationIssue::DayNotInMonth {
                    day_of_month,
                    month,
                });
            }
            _ => {}
        }

        match self.termination {
            RecurrenceTermination::StopWithin {
                start_date,
                stop_within,
            } if stop_within < start_date => {
                issues.push(ValidationIssue::InvertedRange {
                    start_date,
                    stop_within,
                });
            }
            RecurrenceTermination::StopAfterXInstances {
                stop_after_x_occurrences: 0,
            } => issues.push(ValidationIssue::NoOccurrences),
            _ => {}
        }

        issues
    }

    /// ## Summary
    /// Validates the manifest's field constraints.
    ///
    /// ## Errors
    /// Returns `ManifestError::Invalid` listing every violation.
    pub fn validate(&self) -> ManifestResult<()> {
        let issues = self.issues();
        if issues.is_empty() {
            Ok(())
        } else {
            tracing::debug!(count = issues.len(), "Manifest failed validation");
            Err(ManifestError::Invalid(issues))
        }
    }
}
