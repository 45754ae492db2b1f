//! In-memory localization model: per-locale tables and three-way lookup.
//!
//! # Invariants
//!
//! 1. **Immutable after construction**: tables are built once from the data
//!    source and never mutated, so the model is `Send + Sync` and concurrent
//!    lookups need no locking.
//! 2. **No partial index**: any data-source failure aborts construction.
//! 3. **Entry shape is source-defined**: a key is plain or pluralized
//!    according to the data alone, never inferred at lookup time.
//!
//! # Failure Modes
//!
//! | Condition | Behavior |
//! |-----------|----------|
//! | No table for the locale | [`LookupResult::MissingLocale`] |
//! | Table lacks the key | [`LookupResult::MissingKey`] |
//! | Selected plural form absent | Falls back to the `other` form |
//! | No usable plural form at all | [`LookupResult::MissingKey`] |
//! | No numeric interpolation value | Classifies as `other` |

use std::collections::HashMap;

use glossia_plural::{PluralCategory, PluralOperand, PluralRule};

use crate::interpolate::{Interpolations, interpolate};
use crate::locale::LocaleValidator;
use crate::source::{LocalizationDataSource, SourceError};

/// Conventional interpolation key that drives plural-category selection.
///
/// When present (and numeric) it wins; otherwise the first numeric value in
/// name order is used.
pub const PLURAL_COUNT_KEY: &str = "count";

/// A single localized value: either one string, or one string per plural
/// category.
#[derive(Debug, Clone, PartialEq)]
pub enum LocalizationEntry {
    Plain(String),
    Pluralized(HashMap<PluralCategory, String>),
}

/// Outcome of a model lookup.
///
/// Distinguishing a missing key from a missing locale is what lets the
/// resolver decide whether further fallback can help.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupResult {
    Found(String),
    MissingKey,
    MissingLocale,
}

/// Per-locale key/value tables, read-only after construction.
#[derive(Debug, Default)]
pub struct LocalizationModel {
    tables: HashMap<String, HashMap<String, LocalizationEntry>>,
}

impl LocalizationModel {
    /// Indexes every locale the data source reports.
    ///
    /// Identifiers that fail the advisory validation are still indexed; the
    /// failure is only logged. A data-source error aborts construction so
    /// the model never exists partially indexed.
    pub fn from_source(source: &dyn LocalizationDataSource) -> Result<Self, SourceError> {
        let validator = LocaleValidator::new();
        let mut tables = HashMap::new();
        for locale in source.available_locales()? {
            if !validator.validate(&locale) {
                tracing::warn!(locale = %locale, "invalid locale identifier");
            }
            let entries = source.localizations(&locale)?;
            tables.insert(locale, entries);
        }
        Ok(Self { tables })
    }

    /// Looks up `key` in the exact `locale` table and renders the entry.
    ///
    /// Pluralized entries select their form by classifying the driving
    /// numeric interpolation value with the locale's family rule, falling
    /// back to the `other` form when the exact category has no string.
    #[must_use]
    pub fn lookup(
        &self,
        key: &str,
        locale: &str,
        interpolations: Option<&Interpolations>,
    ) -> LookupResult {
        let Some(table) = self.tables.get(locale) else {
            return LookupResult::MissingLocale;
        };
        let Some(entry) = table.get(key) else {
            return LookupResult::MissingKey;
        };

        match entry {
            LocalizationEntry::Plain(template) => {
                LookupResult::Found(render(template, interpolations))
            }
            LocalizationEntry::Pluralized(forms) => {
                let category = match plural_operand(interpolations) {
                    Some(operand) => PluralRule::for_locale(locale).classify(operand),
                    None => PluralCategory::Other,
                };
                let template = forms.get(&category).or_else(|| {
                    if category != PluralCategory::Other {
                        tracing::trace!(
                            key,
                            locale,
                            category = %category,
                            "no string for plural category, using \"other\""
                        );
                    }
                    forms.get(&PluralCategory::Other)
                });
                match template {
                    Some(template) => LookupResult::Found(render(template, interpolations)),
                    None => {
                        tracing::trace!(key, locale, "pluralized entry has no usable form");
                        LookupResult::MissingKey
                    }
                }
            }
        }
    }

    /// Whether a table exists for the exact locale identifier.
    #[must_use]
    pub fn has_locale(&self, locale: &str) -> bool {
        self.tables.contains_key(locale)
    }

    /// All indexed locale identifiers, in no particular order.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }
}

fn render(template: &str, interpolations: Option<&Interpolations>) -> String {
    match interpolations {
        Some(values) => interpolate(template, values),
        None => template.to_string(),
    }
}

/// Extracts the numeric value that drives pluralization.
///
/// The conventional `count` key wins; otherwise the first numeric value in
/// ascending name order. String values never drive pluralization.
fn plural_operand(interpolations: Option<&Interpolations>) -> Option<PluralOperand> {
    let values = interpolations?;
    if let Some(operand) = values.get(PLURAL_COUNT_KEY).and_then(|v| v.numeric_operand()) {
        return Some(operand);
    }
    values.values().find_map(|v| v.numeric_operand())
}
