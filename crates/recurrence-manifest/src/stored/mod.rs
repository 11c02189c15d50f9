//! The flat manifest record as the booking feature stores it.
//!
//! Discriminants are free-form strings and every strategy field is optional,
//! so decoding into [`RecurrenceManifest`] is where unknown strategies and
//! missing fields surface. Range checks are left to
//! [`RecurrenceManifest::validate`].

use chrono::{Month, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{ManifestError, ManifestResult};
use crate::model::{
    Arbitrator, PatternStrategy, RecurrenceManifest, RecurrencePattern, RecurrenceTermination,
    TerminationStrategy, Weekday, WeekdaySet, weekday_from_index, weekday_index,
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredManifest {
    pub pattern_strategy: String,
    pub recurrence_strategy: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_of_month: Option<u8>,
    /// 0 = Monday .. 6 = Sunday
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_of_week: Option<u8>,
    /// 1 = January .. 12 = December
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arbitrator: Option<String>,

    #[serde(default)]
    pub monday: bool,
    #[serde(default)]
    pub tuesday: bool,
    #[serde(default)]
    pub wednesday: bool,
    #[serde(default)]
    pub thursday: bool,
    #[serde(default)]
    pub friday: bool,
    #[serde(default)]
    pub saturday: bool,
    #[serde(default)]
    pub sunday: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_within: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_after_x_occurrences: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_x_months_into_future: Option<u32>,
}

fn require<T>(value: Option<T>, strategy: &'static str, field: &'static str) -> ManifestResult<T> {
    value.ok_or(ManifestError::MissingField { strategy, field })
}

fn decode_weekday(index: u8) -> ManifestResult<Weekday> {
    weekday_from_index(index).ok_or_else(|| ManifestError::InvalidField {
        field: "day_of_week",
        value: index.to_string(),
    })
}

fn decode_month(number: u8) -> ManifestResult<Month> {
    Month::try_from(number).map_err(|_err| ManifestError::InvalidField {
        field: "month",
        value: number.to_string(),
    })
}

fn decode_arbitrator(word: &str) -> ManifestResult<Arbitrator> {
    Arbitrator::parse(word).ok_or_else(|| ManifestError::InvalidField {
        field: "arbitrator",
        value: word.to_string(),
    })
}

fn month_number(month: Month) -> u8 {
    // number_from_month is always 1..=12
    u8::try_from(month.number_from_month()).unwrap_or_default()
}

impl StoredManifest {
    /// ## Summary
    /// Parses a JSON document holding one stored manifest or an array of them.
    ///
    /// ## Errors
    /// Returns `ManifestError::Json` if the document matches neither shape.
    pub fn from_json(input: &str) -> ManifestResult<Vec<Self>> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum OneOrMany {
            Many(Vec<StoredManifest>),
            One(Box<StoredManifest>),
        }

        Ok(match serde_json::from_str::<OneOrMany>(input)? {
            OneOrMany::Many(records) => records,
            OneOrMany::One(record) => vec![*record],
        })
    }

    fn weekdays(&self) -> WeekdaySet {
        [
            (Weekday::Mon, self.monday),
            (Weekday::Tue, self.tuesday),
            (Weekday::Wed, self.wednesday),
            (Weekday::Thu, self.thursday),
            (Weekday::Fri, self.friday),
            (Weekday::Sat, self.saturday),
            (Weekday::Sun, self.sunday),
        ]
        .into_iter()
        .filter_map(|(day, selected)| selected.then_some(day))
        .collect()
    }

    fn set_weekdays(&mut self, days: WeekdaySet) {
        self.monday = days.contains(Weekday::Mon);
        self.tuesday = days.contains(Weekday::Tue);
        self.wednesday = days.contains(Weekday::Wed);
        self.thursday = days.contains(Weekday::Thu);
        self.friday = days.contains(Weekday::Fri);
        self.saturday = days.contains(Weekday::Sat);
        self.sunday = days.contains(Weekday::Sun);
    }

    /// ## Summary
    /// Decodes the pattern half of the record.
    ///
    /// ## Errors
    /// Returns `UnknownPatternStrategy` for an unrecognized discriminant,
    /// `MissingField` when a field the strategy needs is absent and
    /// `InvalidField` for out-of-domain weekday, month or arbitrator values.
    pub fn to_pattern(&self) -> ManifestResult<RecurrencePattern> {
        let strategy = PatternStrategy::parse(&self.pattern_strategy).ok_or_else(|| {
            ManifestError::UnknownPatternStrategy(self.pattern_strategy.clone())
        })?;
        let name = strategy.as_str();

        Ok(match strategy {
            PatternStrategy::DailyEveryXDay => RecurrencePattern::DailyEveryXDay {
                interval: require(self.interval, name, "interval")?,
            },
            PatternStrategy::DailyEveryWeekday => RecurrencePattern::DailyEveryWeekday,
            PatternStrategy::WeeklyStandard => RecurrencePattern::WeeklyStandard {
                days: self.weekdays(),
            },
            PatternStrategy::MonthEveryXDayEveryYMonth => {
                RecurrencePattern::MonthEveryXDayEveryYMonth {
                    day_of_month: require(self.day_of_month, name, "day_of_month")?,
                    interval: require(self.interval, name, "interval")?,
                }
            }
            PatternStrategy::MonthEveryArbitraryDateOfMonth => {
                RecurrencePattern::MonthEveryArbitraryDateOfMonth {
                    arbitrator: decode_arbitrator(require(
                        self.arbitrator.as_deref(),
                        name,
                        "arbitrator",
                    )?)?,
                    day_of_week: decode_weekday(require(self.day_of_week, name, "day_of_week")?)?,
                    interval: require(self.interval, name, "interval")?,
                }
            }
            PatternStrategy::YearlyEveryXOfMonth => RecurrencePattern::YearlyEveryXOfMonth {
                day_of_month: require(self.day_of_month, name, "day_of_month")?,
                month: decode_month(require(self.month, name, "month")?)?,
                interval: require(self.interval, name, "interval")?,
            },
            PatternStrategy::YearlyEveryArbitraryWeekdayInMonth => {
                RecurrencePattern::YearlyEveryArbitraryWeekdayInMonth {
                    arbitrator: decode_arbitrator(require(
                        self.arbitrator.as_deref(),
                        name,
                        "arbitrator",
                    )?)?,
                    day_of_week: decode_weekday(require(self.day_of_week, name, "day_of_week")?)?,
                    month: decode_month(require(self.month, name, "month")?)?,
                    interval: require(self.interval, name, "interval")?,
                }
            }
        })
    }

    /// ## Summary
    /// Decodes the termination half of the record.
    ///
    /// ## Errors
    /// Returns `UnknownTerminationStrategy` for an unrecognized discriminant
    /// and `MissingField` when a field the strategy needs is absent.
    pub fn to_termination(&self) -> ManifestResult<RecurrenceTermination> {
        let strategy = TerminationStrategy::parse(&self.recurrence_strategy).ok_or_else(|| {
            ManifestError::UnknownTerminationStrategy(self.recurrence_strategy.clone())
        })?;
        let name = strategy.as_str();

        Ok(match strategy {
            TerminationStrategy::StopWithin => RecurrenceTermination::StopWithin {
                start_date: require(self.start_date, name, "start_date")?,
                stop_within: require(self.stop_within, name, "stop_within")?,
            },
            TerminationStrategy::StopAfterXInstances => {
                RecurrenceTermination::StopAfterXInstances {
                    stop_after_x_occurrences: require(
                        self.stop_after_x_occurrences,
                        name,
                        "stop_after_x_occurrences",
                    )?,
                }
            }
            TerminationStrategy::NoStopDate => RecurrenceTermination::NoStopDate {
                project_x_months_into_future: require(
                    self.project_x_months_into_future,
                    name,
                    "project_x_months_into_future",
                )?,
            },
        })
    }

    /// ## Summary
    /// Decodes the record into a typed manifest.
    ///
    /// ## Errors
    /// See [`Self::to_pattern`] and [`Self::to_termination`]. The pattern is
    /// decoded first, so a record with two bad halves reports the pattern.
    pub fn to_manifest(&self) -> ManifestResult<RecurrenceManifest> {
        let manifest = RecurrenceManifest::new(self.to_pattern()?, self.to_termination()?);
        tracing::trace!(
            pattern = %manifest.pattern.strategy(),
            termination = %manifest.termination.strategy(),
            "Decoded stored manifest"
        );
        Ok(manifest)
    }
}

impl From<&RecurrenceManifest> for StoredManifest {
    fn from(manifest: &RecurrenceManifest) -> Self {
        let mut stored = Self {
            pattern_strategy: manifest.pattern.strategy().as_str().to_string(),
            recurrence_strategy: manifest.termination.strategy().as_str().to_string(),
            interval: manifest.pattern.interval(),
            ..Self::default()
        };

        match manifest.pattern {
            RecurrencePattern::DailyEveryXDay { .. } | RecurrencePattern::DailyEveryWeekday => {}
            RecurrencePattern::WeeklyStandard { days } => stored.set_weekdays(days),
            RecurrencePattern::MonthEveryXDayEveryYMonth { day_of_month, .. } => {
                stored.day_of_month = Some(day_of_month);
            }
            RecurrencePattern::MonthEveryArbitraryDateOfMonth {
                arbitrator,
                day_of_week,
                ..
            } => {
                stored.arbitrator = Some(arbitrator.as_str().to_string());
                stored.day_of_week = Some(weekday_index(day_of_week));
            }
            RecurrencePattern::YearlyEveryXOfMonth {
                day_of_month,
                month,
                ..
            } => {
                stored.day_of_month = Some(day_of_month);
                stored.month = Some(month_number(month));
            }
            RecurrencePattern::YearlyEveryArbitraryWeekdayInMonth {
                arbitrator,
                day_of_week,
                month,
                ..
            } => {
                stored.arbitrator = Some(arbitrator.as_str().to_string());
                stored.day_of_week = Some(weekday_index(day_of_week));
                stored.month = Some(month_number(month));
            }
        }

        match manifest.termination {
            RecurrenceTermination::StopWithin {
                start_date,
                stop_within,
            } => {
                stored.start_date = Some(start_date);
                stored.stop_within = Some(stop_within);
            }
            RecurrenceTermination::StopAfterXInstances {
                stop_after_x_occurrences,
            } => stored.stop_after_x_occurrences = Some(stop_after_x_occurrences),
            RecurrenceTermination::NoStopDate {
                project_x_months_into_future,
            } => stored.project_x_months_into_future = Some(project_x_months_into_future),
        }

        stored
    }
}
