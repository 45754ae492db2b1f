//! Locale identifier helpers and the advisory validator.
//!
//! An identifier is a language code, optionally followed by a country code,
//! joined by `_` (`"de"`, `"de_CH"`). Identifiers are never checked against
//! an external registry: validation is a syntactic courtesy that warns about
//! likely typos and nothing more.

/// Locale identifier string (`"en"`, `"de_CH"`).
pub type Locale = String;

/// Returns the language portion of a locale identifier.
///
/// For a two-part identifier (`de_CH`) the country code is dropped. Any
/// other shape, including malformed identifiers with several separators,
/// is returned unchanged.
#[must_use]
pub fn language_code(locale: &str) -> &str {
    match locale.split_once('_') {
        Some((language, country)) if !country.contains('_') => language,
        _ => locale,
    }
}

/// Returns `true` if the identifier carries both a language and a country
/// code, i.e. splits into exactly two parts.
#[must_use]
pub fn has_country_code(locale: &str) -> bool {
    let mut parts = locale.split('_');
    parts.next().is_some() && parts.next().is_some() && parts.next().is_none()
}

/// Advisory syntactic check for locale identifiers.
///
/// A failed check only produces a warning at indexing time; the identifier
/// is indexed and looked up regardless, since an unrecognized identifier
/// today may become valid tomorrow.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocaleValidator;

impl LocaleValidator {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Accepts `language` or `language_COUNTRY`: a 2-3 letter lowercase
    /// language code, and when present a two-letter uppercase country code.
    #[must_use]
    pub fn validate(&self, locale: &str) -> bool {
        let (language, country) = match locale.split_once('_') {
            Some((language, country)) => (language, Some(country)),
            None => (locale, None),
        };
        if !(2..=3).contains(&language.len()) || !language.bytes().all(|b| b.is_ascii_lowercase()) {
            return false;
        }
        match country {
            Some(country) => country.len() == 2 && country.bytes().all(|b| b.is_ascii_uppercase()),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_code_strips_country() {
        assert_eq!(language_code("de_CH"), "de");
        assert_eq!(language_code("en_US"), "en");
    }

    #[test]
    fn language_code_passes_through_other_shapes() {
        assert_eq!(language_code("de"), "de");
        assert_eq!(language_code("de_CH_extra"), "de_CH_extra");
        assert_eq!(language_code(""), "");
    }

    #[test]
    fn country_code_detection() {
        assert!(has_country_code("de_CH"));
        assert!(!has_country_code("de"));
        assert!(!has_country_code("de_CH_extra"));
        assert!(!has_country_code(""));
    }

    #[test]
    fn validator_accepts_well_formed_identifiers() {
        let validator = LocaleValidator::new();
        assert!(validator.validate("en"));
        assert!(validator.validate("deu"));
        assert!(validator.validate("de_CH"));
    }

    #[test]
    fn validator_rejects_malformed_identifiers() {
        let validator = LocaleValidator::new();
        assert!(!validator.validate(""));
        assert!(!validator.validate("e"));
        assert!(!validator.validate("EN"));
        assert!(!validator.validate("engl"));
        assert!(!validator.validate("en_ch"));
        assert!(!validator.validate("en_CHE"));
        assert!(!validator.validate("en_CH_x"));
        assert!(!validator.validate("en-CH"));
    }
}
