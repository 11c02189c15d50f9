use icu::locale::Locale as IcuLocale;

use crate::constants::{DEFAULT_LOCALE_CODE, NB_LANGUAGE, NB_NO_LOCALE_CODE, NB_REGION};

/// Target language for rendered recurrence text.
///
/// Only two locales are recognized. Every other code, including codes that are
/// not valid BCP-47 at all, resolves to [`Locale::Default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// English
    #[default]
    Default,
    /// Norwegian bokmål
    NbNo,
}

impl Locale {
    /// ## Summary
    /// Resolves a locale code such as `nb-no`, `nb_NO` or `en-US`.
    ///
    /// Matching is case-insensitive and accepts `-` or `_` as the subtag
    /// separator. Resolution never fails.
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        let normalized = code.trim().replace('_', "-");
        let Ok(parsed) = IcuLocale::try_from_str(&normalized) else {
            tracing::trace!(code, "Unparsable locale code, using default");
            return Self::Default;
        };

        let is_nb = parsed.id.language.as_str() == NB_LANGUAGE;
        let is_no = parsed
            .id
            .region
            .is_some_and(|region| region.as_str() == NB_REGION);

        if is_nb && is_no {
            Self::NbNo
        } else {
            Self::Default
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => DEFAULT_LOCALE_CODE,
            Self::NbNo => NB_NO_LOCALE_CODE,
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nb_no_variants() {
        assert_eq!(Locale::from_code("nb-no"), Locale::NbNo);
        assert_eq!(Locale::from_code("nb-NO"), Locale::NbNo);
        assert_eq!(Locale::from_code("NB_no"), Locale::NbNo);
        assert_eq!(Locale::from_code(" nb-no "), Locale::NbNo);
    }

    #[test]
    fn test_fallback_to_default() {
        assert_eq!(Locale::from_code("en"), Locale::Default);
        assert_eq!(Locale::from_code("en-US"), Locale::Default);
        assert_eq!(Locale::from_code("nb"), Locale::Default);
        assert_eq!(Locale::from_code("nn-no"), Locale::Default);
        assert_eq!(Locale::from_code("sv-se"), Locale::Default);
        assert_eq!(Locale::from_code(""), Locale::Default);
        assert_eq!(Locale::from_code("!!not a locale"), Locale::Default);
    }

    #[test]
    fn test_round_trip_code() {
        for locale in [Locale::Default, Locale::NbNo] {
            assert_eq!(Locale::from_code(locale.as_str()), locale);
        }
    }
}
