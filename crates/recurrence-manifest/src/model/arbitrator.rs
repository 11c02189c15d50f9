use std::fmt;

/// Ordinal selector for "Nth weekday of the month" patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arbitrator {
    First,
    Second,
    Third,
    Fourth,
    Last,
}

impl Arbitrator {
    /// Returns the stored representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Second => "second",
            Self::Third => "third",
            Self::Fourth => "fourth",
            Self::Last => "last",
        }
    }

    /// Parses a stored arbitrator (case-insensitive).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s.to_ascii_lowercase().as_str() {
            "first" => Self::First,
            "second" => Self::Second,
            "third" => Self::Third,
            "fourth" => Self::Fourth,
            "last" => Self::Last,
            _ => return None,
        })
    }

    /// Occurrence number within the period, `-1` for the last one.
    #[must_use]
    pub const fn nth(self) -> i16 {
        match self {
            Self::First => 1,
            Self::Second => 2,
            Self::Third => 3,
            Self::Fourth => 4,
            Self::Last => -1,
        }
    }

    /// Returns all arbitrators in order.
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [
            Self::First,
            Self::Second,
            Self::Third,
            Self::Fourth,
            Self::Last,
        ]
    }
}

impl fmt::Display for Arbitrator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
