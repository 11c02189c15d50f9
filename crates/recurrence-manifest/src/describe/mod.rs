//! Human-readable recurrence descriptions.
//!
//! A description is the pattern phrase and the termination phrase joined by a
//! single space, e.g. `Weekly every monday and friday for eternity (project 12
//! months into the future)`. Rendering is pure and never validates the
//! manifest: degenerate manifests produce degenerate but well-formed text.

mod join;
mod names;
mod pattern;
mod termination;

use recurrence_core::types::Locale;

use crate::error::ManifestResult;
use crate::model::RecurrenceManifest;
use crate::stored::StoredManifest;

/// ## Summary
/// Renders `manifest` in `locale`.
#[must_use]
pub fn describe(manifest: &RecurrenceManifest, locale: Locale) -> String {
    tracing::trace!(
        pattern = %manifest.pattern.strategy(),
        termination = %manifest.termination.strategy(),
        %locale,
        "Describing recurrence manifest"
    );

    let pattern = pattern::pattern_phrase(&manifest.pattern, locale);
    let termination = termination::termination_phrase(&manifest.termination, locale);

    format!("{pattern} {termination}")
}

/// ## Summary
/// Renders `manifest` for a raw locale code. Unrecognized codes fall back to
/// the default locale.
#[must_use]
pub fn describe_for_code(manifest: &RecurrenceManifest, locale_code: &str) -> String {
    describe(manifest, Locale::from_code(locale_code))
}

/// ## Summary
/// Decodes a stored manifest record and renders it.
///
/// ## Errors
/// Returns `UnknownPatternStrategy` / `UnknownTerminationStrategy` when the
/// record carries a discriminant this build cannot render, and the decoding
/// errors of [`StoredManifest::to_manifest`] for missing or malformed fields.
pub fn describe_stored(stored: &StoredManifest, locale_code: &str) -> ManifestResult<String> {
    let manifest = stored.to_manifest()?;
    Ok(describe_for_code(&manifest, locale_code))
}
