#![forbid(unsafe_code)]

//! CLDR-style plural category classification.
//!
//! # Role in Glossia
//! `glossia-plural` is the grammatical-number leaf: a pure, dependency-free
//! mapping from (language family, numeric value) to a [`PluralCategory`].
//! The resolution engine (`glossia`) consults it whenever a localization
//! entry carries per-category strings.
//!
//! # Invariants
//! 1. Classification is total: every numeric value maps to exactly one
//!    category under every family rule.
//! 2. [`PluralCategory::Other`] is supported by every family and is the
//!    universal catch-all.
//! 3. Rules are pure: the same operand always yields the same category.

use core::fmt;
use core::str::FromStr;

pub mod rules;

pub use rules::PluralRule;

/// CLDR plural categories.
///
/// Which subset applies depends on the language family; see
/// [`PluralRule::categories`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluralCategory {
    Zero,
    One,
    Two,
    Few,
    Many,
    Other,
}

impl fmt::Display for PluralCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zero => write!(f, "zero"),
            Self::One => write!(f, "one"),
            Self::Two => write!(f, "two"),
            Self::Few => write!(f, "few"),
            Self::Many => write!(f, "many"),
            Self::Other => write!(f, "other"),
        }
    }
}

impl FromStr for PluralCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "zero" => Ok(Self::Zero),
            "one" => Ok(Self::One),
            "two" => Ok(Self::Two),
            "few" => Ok(Self::Few),
            "many" => Ok(Self::Many),
            "other" => Ok(Self::Other),
            _ => Err(UnknownCategory(s.to_string())),
        }
    }
}

/// Error returned when parsing a category name that is not one of the six
/// CLDR names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(String);

impl UnknownCategory {
    /// The offending category name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown plural category: {}", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

/// Numeric value under classification, reduced to the operands the family
/// rules actually inspect: the absolute integer part and whether a nonzero
/// fractional part is present.
///
/// Negative quantities classify by absolute value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PluralOperand {
    integer: u64,
    fractional: bool,
}

impl PluralOperand {
    /// Absolute integer part of the value.
    #[must_use]
    pub fn integer(self) -> u64 {
        self.integer
    }

    /// Whether the value carries a nonzero fractional part.
    #[must_use]
    pub fn has_fraction(self) -> bool {
        self.fractional
    }
}

impl From<i64> for PluralOperand {
    fn from(value: i64) -> Self {
        Self {
            integer: value.unsigned_abs(),
            fractional: false,
        }
    }
}

impl From<i32> for PluralOperand {
    fn from(value: i32) -> Self {
        i64::from(value).into()
    }
}

impl From<u32> for PluralOperand {
    fn from(value: u32) -> Self {
        Self {
            integer: u64::from(value),
            fractional: false,
        }
    }
}

impl From<u64> for PluralOperand {
    fn from(value: u64) -> Self {
        Self {
            integer: value,
            fractional: false,
        }
    }
}

impl From<f64> for PluralOperand {
    fn from(value: f64) -> Self {
        Self {
            integer: value.abs().trunc() as u64,
            fractional: value.fract() != 0.0,
        }
    }
}

impl From<f32> for PluralOperand {
    fn from(value: f32) -> Self {
        f64::from(value).into()
    }
}
