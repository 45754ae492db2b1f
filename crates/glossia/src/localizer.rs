//! Fallback orchestration over the localization model.
//!
//! The resolution order is deliberate: a same-language, different-country
//! table is a closer match than the global default, so language-code
//! fallback runs before default-locale fallback. A missing key in an
//! *existing* table stops fallback immediately — the locale is supported
//! and the key genuinely has no translation there, so a more generic table
//! would not help a well-formed data set. Every miss degrades to the raw
//! key: resolution never fails visibly.

use std::path::PathBuf;

use glossia_plural::{PluralCategory, PluralRule};

use crate::interpolate::Interpolations;
use crate::locale::{has_country_code, language_code};
use crate::model::{LocalizationModel, LookupResult};
use crate::source::{FileDataSource, LocalizationDataSource, SourceError};

/// Resolves localization keys to strings.
///
/// Immutable after construction; share it freely across threads.
#[derive(Debug)]
pub struct Localizer {
    default_locale: String,
    model: LocalizationModel,
}

impl Localizer {
    /// Builds the model from the data source and fixes the default locale.
    ///
    /// The default locale is the last fallback before the raw key.
    pub fn new(
        source: &dyn LocalizationDataSource,
        default_locale: impl Into<String>,
    ) -> Result<Self, SourceError> {
        Ok(Self {
            default_locale: default_locale.into(),
            model: LocalizationModel::from_source(source)?,
        })
    }

    /// Convenience constructor over a directory of `<locale>.json` files.
    pub fn with_root_path(
        root: impl Into<PathBuf>,
        default_locale: impl Into<String>,
    ) -> Result<Self, SourceError> {
        let source = FileDataSource::new(root);
        Self::new(&source, default_locale)
    }

    #[must_use]
    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    /// Resolves `key` for `locale` without interpolation values.
    #[must_use]
    pub fn localize(&self, key: &str, locale: &str) -> String {
        self.resolve(key, locale, None)
    }

    /// Resolves `key` for `locale`, substituting `%{name}` placeholders
    /// from `interpolations`.
    #[must_use]
    pub fn localize_with(
        &self,
        key: &str,
        locale: &str,
        interpolations: &Interpolations,
    ) -> String {
        self.resolve(key, locale, Some(interpolations))
    }

    fn resolve(&self, key: &str, locale: &str, interpolations: Option<&Interpolations>) -> String {
        match self.model.lookup(key, locale, interpolations) {
            LookupResult::Found(localized) => localized,
            LookupResult::MissingKey => {
                tracing::trace!(key, locale, "no translation for key, returning raw key");
                key.to_string()
            }
            LookupResult::MissingLocale => {
                if has_country_code(locale) {
                    let language = language_code(locale);
                    if let LookupResult::Found(localized) =
                        self.model.lookup(key, language, interpolations)
                    {
                        return localized;
                    }
                }
                if let LookupResult::Found(localized) =
                    self.model.lookup(key, &self.default_locale, interpolations)
                {
                    return localized;
                }
                tracing::trace!(key, locale, "no table satisfies lookup, returning raw key");
                key.to_string()
            }
        }
    }

    /// The ordered plural categories the locale's language family supports.
    #[must_use]
    pub fn available_plural_categories(locale: &str) -> &'static [PluralCategory] {
        PluralRule::for_locale(locale).categories()
    }
}
