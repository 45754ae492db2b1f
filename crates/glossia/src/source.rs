//! Data-source collaborators supplying per-locale key/value data.
//!
//! The model asks a [`LocalizationDataSource`] which locales exist and for
//! each locale's entries, exactly once, at construction. Any failure here
//! is fatal to construction; nothing else in the crate produces errors.
//!
//! [`FileDataSource`] is the bundled implementation: a directory of
//! `<locale>.json` files, each a flat object mapping keys to either a
//! string or an object of CLDR category names to strings:
//!
//! ```json
//! {
//!     "hello.world": "Hello World!",
//!     "unread.messages": {
//!         "one": "You have an unread message.",
//!         "other": "You have %{count} unread messages."
//!     }
//! }
//! ```

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::fs;
use std::io;
use std::path::PathBuf;

use serde::Deserialize;

use glossia_plural::PluralCategory;

use crate::model::LocalizationEntry;

/// Supplies pre-parsed localization data, one call per locale.
pub trait LocalizationDataSource {
    /// The locales this source can provide data for.
    fn available_locales(&self) -> Result<Vec<String>, SourceError>;

    /// The key/entry data for one locale.
    fn localizations(
        &self,
        locale: &str,
    ) -> Result<HashMap<String, LocalizationEntry>, SourceError>;
}

/// Data-access failure while enumerating locales or loading entries.
#[derive(Debug)]
pub enum SourceError {
    /// Reading the backing storage failed.
    Io { path: PathBuf, source: io::Error },
    /// The data for a locale could not be parsed.
    Parse {
        locale: String,
        source: serde_json::Error,
    },
    /// A pluralized entry used a category name outside the CLDR set.
    InvalidCategory {
        locale: String,
        key: String,
        category: String,
    },
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(
                    f,
                    "localization data access failed for {}: {source}",
                    path.display()
                )
            }
            Self::Parse { locale, source } => {
                write!(f, "malformed localization data for locale '{locale}': {source}")
            }
            Self::InvalidCategory {
                locale,
                key,
                category,
            } => {
                write!(
                    f,
                    "unknown plural category '{category}' for key '{key}' in locale '{locale}'"
                )
            }
        }
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::InvalidCategory { .. } => None,
        }
    }
}

/// Raw JSON shape of one entry before category names are parsed.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawEntry {
    Plain(String),
    Pluralized(BTreeMap<String, String>),
}

/// Reads localization tables from `<root>/<locale>.json` files.
#[derive(Debug, Clone)]
pub struct FileDataSource {
    root: PathBuf,
}

impl FileDataSource {
    /// A source over the given directory. The directory is not touched
    /// until locales are enumerated.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl LocalizationDataSource for FileDataSource {
    /// Locales are the stems of the directory's `*.json` files, sorted for
    /// deterministic indexing.
    fn available_locales(&self) -> Result<Vec<String>, SourceError> {
        let entries = fs::read_dir(&self.root).map_err(|source| SourceError::Io {
            path: self.root.clone(),
            source,
        })?;

        let mut locales = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| SourceError::Io {
                path: self.root.clone(),
                source,
            })?;
            let path = entry.path();
            if !path.is_file() || path.extension().is_none_or(|ext| ext != "json") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                locales.push(stem.to_string());
            }
        }
        locales.sort_unstable();
        Ok(locales)
    }

    fn localizations(
        &self,
        locale: &str,
    ) -> Result<HashMap<String, LocalizationEntry>, SourceError> {
        let path = self.root.join(format!("{locale}.json"));
        let raw = fs::read_to_string(&path).map_err(|source| SourceError::Io {
            path: path.clone(),
            source,
        })?;
        let parsed: HashMap<String, RawEntry> =
            serde_json::from_str(&raw).map_err(|source| SourceError::Parse {
                locale: locale.to_string(),
                source,
            })?;

        let mut entries = HashMap::with_capacity(parsed.len());
        for (key, raw_entry) in parsed {
            let entry = match raw_entry {
                RawEntry::Plain(value) => LocalizationEntry::Plain(value),
                RawEntry::Pluralized(forms) => {
                    let mut by_category = HashMap::with_capacity(forms.len());
                    for (name, value) in forms {
                        match name.parse::<PluralCategory>() {
                            Ok(category) => {
                                by_category.insert(category, value);
                            }
                            Err(_) => {
                                return Err(SourceError::InvalidCategory {
                                    locale: locale.to_string(),
                                    key,
                                    category: name,
                                });
                            }
                        }
                    }
                    LocalizationEntry::Pluralized(by_category)
                }
            };
            entries.insert(key, entry);
        }
        Ok(entries)
    }
}
