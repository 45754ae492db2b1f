#![forbid(unsafe_code)]

//! Localization key resolution with locale fallback, plural selection, and
//! placeholder interpolation.
//!
//! # Role
//! `glossia` owns the read-only localization model and the resolution
//! pipeline: a caller hands in a key, a target locale, and optional
//! interpolation values; the resolver walks the locale fallback chain and
//! always comes back with a string. Missing data degrades to the raw key,
//! never to an error.
//!
//! # Primary types
//! - [`Localizer`]: fallback orchestration over the model.
//! - [`LocalizationModel`]: immutable per-locale string tables.
//! - [`LocalizationDataSource`]: collaborator supplying pre-parsed
//!   key/value data per locale; [`FileDataSource`] reads `<locale>.json`
//!   files from a directory.
//! - [`InterpolationValue`] / [`Interpolations`]: typed inputs for
//!   `%{name}` substitution.
//!
//! # Example
//! ```
//! use std::collections::HashMap;
//!
//! use glossia::{LocalizationDataSource, LocalizationEntry, Localizer, SourceError};
//!
//! struct StaticSource;
//!
//! impl LocalizationDataSource for StaticSource {
//!     fn available_locales(&self) -> Result<Vec<String>, SourceError> {
//!         Ok(vec!["en".to_string()])
//!     }
//!
//!     fn localizations(
//!         &self,
//!         _locale: &str,
//!     ) -> Result<HashMap<String, LocalizationEntry>, SourceError> {
//!         let mut entries = HashMap::new();
//!         entries.insert(
//!             "hello.world".to_string(),
//!             LocalizationEntry::Plain("Hello World!".to_string()),
//!         );
//!         Ok(entries)
//!     }
//! }
//!
//! let localizer = Localizer::new(&StaticSource, "en")?;
//! assert_eq!(localizer.localize("hello.world", "en"), "Hello World!");
//! // Unknown locales fall back to the default locale.
//! assert_eq!(localizer.localize("hello.world", "fr"), "Hello World!");
//! // Unknown keys degrade to the raw key.
//! assert_eq!(localizer.localize("missing.key", "en"), "missing.key");
//! # Ok::<(), SourceError>(())
//! ```

pub mod interpolate;
pub mod locale;
pub mod localizer;
pub mod model;
pub mod source;

pub use interpolate::{InterpolationValue, Interpolations, interpolate};
pub use locale::{Locale, LocaleValidator, has_country_code, language_code};
pub use localizer::Localizer;
pub use model::{LocalizationEntry, LocalizationModel, LookupResult, PLURAL_COUNT_KEY};
pub use source::{FileDataSource, LocalizationDataSource, SourceError};

pub use glossia_plural::{PluralCategory, PluralOperand, PluralRule};
