//! `%{name}` placeholder substitution.
//!
//! # Failure Modes
//!
//! | Condition | Behavior |
//! |-----------|----------|
//! | Placeholder with no value | Left in the output verbatim |
//! | Unterminated `%{` | Copied through unchanged |
//! | Empty value map | Template returned as-is |
//!
//! Substitution never fails: missing interpolation data must not abort
//! resolution.

use std::collections::BTreeMap;
use std::fmt;

use glossia_plural::PluralOperand;

/// A caller-supplied interpolation value.
///
/// A closed variant set with one canonical stringification per variant;
/// numeric variants render in standard decimal form.
#[derive(Debug, Clone, PartialEq)]
pub enum InterpolationValue {
    Int(i64),
    Float(f64),
    Str(String),
}

impl InterpolationValue {
    /// The value as a plural operand, when it is numeric.
    pub(crate) fn numeric_operand(&self) -> Option<PluralOperand> {
        match self {
            Self::Int(value) => Some(PluralOperand::from(*value)),
            Self::Float(value) => Some(PluralOperand::from(*value)),
            Self::Str(_) => None,
        }
    }
}

impl fmt::Display for InterpolationValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Str(value) => f.write_str(value),
        }
    }
}

impl From<i64> for InterpolationValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for InterpolationValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for InterpolationValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for InterpolationValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<f32> for InterpolationValue {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<&str> for InterpolationValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for InterpolationValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

/// Named interpolation values, ordered by name.
///
/// The ordering makes plural-count extraction deterministic when several
/// numeric values are supplied.
pub type Interpolations = BTreeMap<String, InterpolationValue>;

/// Single-pass `%{name}` substitution. Placeholders without a matching
/// value are left as-is.
#[must_use]
pub fn interpolate(template: &str, values: &Interpolations) -> String {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '%' && chars.peek() == Some(&'{') {
            chars.next();
            let mut name = String::new();
            let mut closed = false;
            for c in chars.by_ref() {
                if c == '}' {
                    closed = true;
                    break;
                }
                name.push(c);
            }

            if closed {
                if let Some(value) = values.get(&name) {
                    out.push_str(&value.to_string());
                } else {
                    tracing::trace!(placeholder = %name, "no value supplied for placeholder");
                    out.push_str("%{");
                    out.push_str(&name);
                    out.push('}');
                }
            } else {
                // Unterminated placeholder: emit what was consumed.
                out.push_str("%{");
                out.push_str(&name);
            }
        } else {
            out.push(ch);
        }
    }

    out
}
