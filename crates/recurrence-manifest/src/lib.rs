//! Recurrence manifests for scheduled arrangements.
//!
//! A manifest pairs a [`model::RecurrencePattern`] (how often) with a
//! [`model::RecurrenceTermination`] (until when). This crate renders manifests
//! as English or Norwegian sentences, decodes the flat record the booking
//! feature stores, and projects manifests onto RFC 5545 recurrence rules.
//!
//! ```rust
//! use recurrence_core::types::Locale;
//! use recurrence_manifest::describe::describe;
//! use recurrence_manifest::model::{
//!     RecurrenceManifest, RecurrencePattern, RecurrenceTermination, WeekdaySet,
//! };
//! use chrono::Weekday;
//!
//! let manifest = RecurrenceManifest::new(
//!     RecurrencePattern::WeeklyStandard {
//!         days: WeekdaySet::from_days([Weekday::Mon, Weekday::Fri]),
//!     },
//!     RecurrenceTermination::NoStopDate {
//!         project_x_months_into_future: 12,
//!     },
//! );
//!
//! assert_eq!(
//!     describe(&manifest, Locale::Default),
//!     "Weekly every monday and friday for eternity (project 12 months into the future)"
//! );
//! ```

pub mod describe;
pub mod error;
pub mod expand;
pub mod model;
pub mod stored;
