//! Recurrence manifest model.
//!
//! Discriminants are closed enums. Strings only appear at the storage boundary
//! (see [`crate::stored`]), so a manifest that exists as a value can always be
//! described.

mod arbitrator;
mod manifest;
mod pattern;
mod termination;
mod weekday;

pub use arbitrator::Arbitrator;
pub use manifest::{RecurrenceManifest, ValidationIssue};
pub use pattern::{PatternStrategy, RecurrencePattern};
pub use termination::{RecurrenceTermination, TerminationStrategy};
pub use weekday::{WeekdaySet, weekday_from_index, weekday_index};

pub use chrono::{Month, Weekday};
