use std::fmt;

use chrono::{Month, Weekday};

use super::{Arbitrator, WeekdaySet};

/// Discriminant of a [`RecurrencePattern`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternStrategy {
    DailyEveryXDay,
    DailyEveryWeekday,
    WeeklyStandard,
    MonthEveryXDayEveryYMonth,
    MonthEveryArbitraryDateOfMonth,
    YearlyEveryXOfMonth,
    YearlyEveryArbitraryWeekdayInMonth,
}

impl PatternStrategy {
    /// Returns the stored representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DailyEveryXDay => "daily__every_x_day",
            Self::DailyEveryWeekday => "daily__every_weekday",
            Self::WeeklyStandard => "weekly__standard",
            Self::MonthEveryXDayEveryYMonth => "month__every_x_day_every_y_month",
            Self::MonthEveryArbitraryDateOfMonth => "month__every_arbitrary_date_of_month",
            Self::YearlyEveryXOfMonth => "yearly__every_x_of_month",
            Self::YearlyEveryArbitraryWeekdayInMonth => "yearly__every_arbitrary_weekday_in_month",
        }
    }

    /// Parses a stored pattern discriminant (exact match).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s {
            "daily__every_x_day" => Self::DailyEveryXDay,
            "daily__every_weekday" => Self::DailyEveryWeekday,
            "weekly__standard" => Self::WeeklyStandard,
            "month__every_x_day_every_y_month" => Self::MonthEveryXDayEveryYMonth,
            "month__every_arbitrary_date_of_month" => Self::MonthEveryArbitraryDateOfMonth,
            "yearly__every_x_of_month" => Self::YearlyEveryXOfMonth,
            "yearly__every_arbitrary_weekday_in_month" => Self::YearlyEveryArbitraryWeekdayInMonth,
            _ => return None,
        })
    }

    #[must_use]
    pub const fn all() -> [Self; 7] {
        [
            Self::DailyEveryXDay,
            Self::DailyEveryWeekday,
            Self::WeeklyStandard,
            Self::MonthEveryXDayEveryYMonth,
            Self::MonthEveryArbitraryDateOfMonth,
            Self::YearlyEveryXOfMonth,
            Self::YearlyEveryArbitraryWeekdayInMonth,
        ]
    }
}

impl fmt::Display for PatternStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// When within a cycle an arrangement recurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecurrencePattern {
    /// Every `interval` days.
    DailyEveryXDay { interval: u32 },
    /// Monday through Friday.
    DailyEveryWeekday,
    /// Every week on the selected days.
    WeeklyStandard { days: WeekdaySet },
    /// Day `day_of_month` of every `interval` months.
    MonthEveryXDayEveryYMonth { day_of_month: u8, interval: u32 },
    /// The `arbitrator` `day_of_week` of every `interval` months.
    MonthEveryArbitraryDateOfMonth {
        arbitrator: Arbitrator,
        day_of_week: Weekday,
        interval: u32,
    },
    /// `day_of_month` `month`, every `interval` years.
    YearlyEveryXOfMonth {
        day_of_month: u8,
        month: Month,
        interval: u32,
    },
    /// The `arbitrator` `day_of_week` in `month`, every `interval` years.
    YearlyEveryArbitraryWeekdayInMonth {
        arbitrator: Arbitrator,
        day_of_week: Weekday,
        month: Month,
        interval: u32,
    },
}

impl RecurrencePattern {
    #[must_use]
    pub const fn strategy(&self) -> PatternStrategy {
        match self {
            Self::DailyEveryXDay { .. } => PatternStrategy::DailyEveryXDay,
            Self::DailyEveryWeekday => PatternStrategy::DailyEveryWeekday,
            Self::WeeklyStandard { .. } => PatternStrategy::WeeklyStandard,
            Self::MonthEveryXDayEveryYMonth { .. } => PatternStrategy::MonthEveryXDayEveryYMonth,
            Self::MonthEveryArbitraryDateOfMonth { .. } => {
                PatternStrategy::MonthEveryArbitraryDateOfMonth
            }
            Self::YearlyEveryXOfMonth { .. } => PatternStrategy::YearlyEveryXOfMonth,
            Self::YearlyEveryArbitraryWeekdayInMonth { .. } => {
                PatternStrategy::YearlyEveryArbitraryWeekdayInMonth
            }
        }
    }

    /// Interval of the pattern in its own unit, `None` for patterns without one.
    #[must_use]
    pub const fn interval(&self) -> Option<u32> {
        match self {
            Self::DailyEveryXDay { interval }
            | Self::MonthEveryXDayEveryYMonth { interval, .. }
            | Self::MonthEveryArbitraryDateOfMonth { interval, .. }
            | Self::YearlyEveryXOfMonth { interval, .. }
            | Self::YearlyEveryArbitraryWeekdayInMonth { interval, .. } => Some(*interval),
            Self::DailyEveryWeekday | Self::WeeklyStandard { .. } => None,
        }
    }
}
