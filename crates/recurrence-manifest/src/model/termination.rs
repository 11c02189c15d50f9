use std::fmt;

use chrono::NaiveDate;

/// Discriminant of a [`RecurrenceTermination`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TerminationStrategy {
    StopWithin,
    StopAfterXInstances,
    NoStopDate,
}

impl TerminationStrategy {
    /// Returns the stored representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::StopWithin => "stop_within",
            Self::StopAfterXInstances => "stop_after_x_instances",
            Self::NoStopDate => "no_stop_date",
        }
    }

    /// Parses a stored termination discriminant (exact match).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s {
            "stop_within" => Self::StopWithin,
            "stop_after_x_instances" => Self::StopAfterXInstances,
            "no_stop_date" => Self::NoStopDate,
            _ => return None,
        })
    }
}

impl fmt::Display for TerminationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// When a recurring series ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecurrenceTermination {
    /// Recur between two dates, both inclusive.
    StopWithin {
        start_date: NaiveDate,
        stop_within: NaiveDate,
    },
    /// Stop after a fixed number of occurrences.
    StopAfterXInstances { stop_after_x_occurrences: u32 },
    /// Never stop; occurrences are projected a number of months ahead.
    NoStopDate { project_x_months_into_future: u32 },
}

impl RecurrenceTermination {
    #[must_use]
    pub const fn strategy(&self) -> TerminationStrategy {
        match self {
            Self::StopWithin { .. } => TerminationStrategy::StopWithin,
            Self::StopAfterXInstances { .. } => TerminationStrategy::StopAfterXInstances,
            Self::NoStopDate { .. } => TerminationStrategy::NoStopDate,
        }
    }
}
