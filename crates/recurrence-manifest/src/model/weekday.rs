//! Weekday indexing and weekday selections.

use std::fmt;

use chrono::Weekday;

/// Returns the stored index of a weekday (0 = Monday .. 6 = Sunday).
#[must_use]
pub fn weekday_index(weekday: Weekday) -> u8 {
    // num_days_from_monday is always 0..=6
    u8::try_from(weekday.num_days_from_monday()).unwrap_or_default()
}

/// Parses a stored weekday index (0 = Monday .. 6 = Sunday).
#[must_use]
pub fn weekday_from_index(index: u8) -> Option<Weekday> {
    Weekday::try_from(index).ok()
}

const ALL_WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Set of selected weekdays for weekly recurrence.
///
/// Iteration order is always Monday through Sunday, independent of the order
/// days were inserted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WeekdaySet([bool; 7]);

impl WeekdaySet {
    #[must_use]
    pub const fn empty() -> Self {
        Self([false; 7])
    }

    /// Monday through Friday.
    #[must_use]
    pub const fn workdays() -> Self {
        Self([true, true, true, true, true, false, false])
    }

    #[must_use]
    pub fn from_days(days: impl IntoIterator<Item = Weekday>) -> Self {
        let mut set = Self::empty();
        for day in days {
            set.insert(day);
        }
        set
    }

    pub fn insert(&mut self, day: Weekday) {
        self.0[usize::from(weekday_index(day))] = true;
    }

    #[must_use]
    pub fn contains(&self, day: Weekday) -> bool {
        self.0[usize::from(weekday_index(day))]
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.0.iter().any(|selected| *selected)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.iter().filter(|selected| **selected).count()
    }

    /// Selected days in Monday..Sunday order.
    pub fn days(&self) -> impl Iterator<Item = Weekday> + '_ {
        ALL_WEEKDAYS
            .into_iter()
            .zip(self.0)
            .filter_map(|(day, selected)| selected.then_some(day))
    }
}

impl FromIterator<Weekday> for WeekdaySet {
    fn from_iter<T: IntoIterator<Item = Weekday>>(iter: T) -> Self {
        Self::from_days(iter)
    }
}

impl fmt::Display for WeekdaySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let days: Vec<_> = self.days().map(|day| day.to_string()).collect();
        write!(f, "{}", days.join(","))
    }
}
