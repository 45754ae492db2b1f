#![forbid(unsafe_code)]

//! Per-family classification rules.
//!
//! Each rule is a pure function over [`PluralOperand`] built from
//! CLDR-style divisibility and remainder conditions on the integer part.
//! Fractional values never reach the remainder arithmetic: families that
//! do not distinguish fractions route them to their catch-all first.

use crate::{PluralCategory, PluralOperand};

/// Language-family plural rule.
///
/// Dispatch is a finite match over a closed set, not runtime polymorphism.
/// [`PluralRule::for_locale`] maps languages without an explicit rule to
/// [`PluralRule::OneOther`], so classification degrades rather than fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluralRule {
    /// Germanic/Romance default: `one` for exactly 1, `other` otherwise.
    OneOther,
    /// French-like: integer part 0 or 1 is `one`.
    ZeroOne,
    /// Russian-like: `one`/`few`/`many` cycle on the last digits.
    EastSlavic,
    /// Polish: like [`PluralRule::EastSlavic`], but only 1 itself is `one`.
    WestSlavic,
    /// Czech/Slovak: `few` for 2-4, fractional quantities are `many`.
    CzechSlovak,
    /// Arabic: the full six-category rule.
    Semitic,
    /// No grammatical number distinction (CJK and several SE-Asian languages).
    NoPlural,
}

impl PluralRule {
    /// Selects the rule for a locale tag (`"en"`, `"de_CH"`, `"ru"`).
    ///
    /// Only the language portion matters; country codes are ignored.
    /// Unknown languages fall back to the two-category
    /// [`PluralRule::OneOther`] rule.
    #[must_use]
    pub fn for_locale(locale: &str) -> Self {
        let language = locale.split(['_', '-']).next().unwrap_or(locale);
        match language.to_ascii_lowercase().as_str() {
            "en" | "de" | "nl" | "sv" | "da" | "no" | "nb" | "nn" | "it" | "es" | "pt" | "el"
            | "hu" | "fi" | "et" | "he" | "tr" | "bg" => Self::OneOther,
            "fr" | "hi" | "bn" => Self::ZeroOne,
            "ru" | "uk" | "be" | "sr" | "hr" | "bs" => Self::EastSlavic,
            "pl" => Self::WestSlavic,
            "cs" | "sk" => Self::CzechSlovak,
            "ar" => Self::Semitic,
            "zh" | "ja" | "ko" | "th" | "vi" | "id" | "ms" => Self::NoPlural,
            _ => Self::OneOther,
        }
    }

    /// Classifies a numeric value into exactly one category.
    #[must_use]
    pub fn classify(self, value: impl Into<PluralOperand>) -> PluralCategory {
        let operand = value.into();
        match self {
            Self::OneOther => one_other(operand),
            Self::ZeroOne => zero_one(operand),
            Self::EastSlavic => east_slavic(operand),
            Self::WestSlavic => west_slavic(operand),
            Self::CzechSlovak => czech_slovak(operand),
            Self::Semitic => semitic(operand),
            Self::NoPlural => PluralCategory::Other,
        }
    }

    /// The ordered, closed set of categories this family distinguishes.
    ///
    /// `other` is always a member.
    #[must_use]
    pub fn categories(self) -> &'static [PluralCategory] {
        use PluralCategory::{Few, Many, One, Other, Two, Zero};
        match self {
            Self::OneOther | Self::ZeroOne => &[One, Other],
            Self::EastSlavic | Self::WestSlavic | Self::CzechSlovak => &[One, Few, Many, Other],
            Self::Semitic => &[Zero, One, Two, Few, Many, Other],
            Self::NoPlural => &[Other],
        }
    }
}

fn one_other(operand: PluralOperand) -> PluralCategory {
    if operand.integer() == 1 && !operand.has_fraction() {
        PluralCategory::One
    } else {
        PluralCategory::Other
    }
}

fn zero_one(operand: PluralOperand) -> PluralCategory {
    if operand.integer() <= 1 {
        PluralCategory::One
    } else {
        PluralCategory::Other
    }
}

fn east_slavic(operand: PluralOperand) -> PluralCategory {
    if operand.has_fraction() {
        return PluralCategory::Other;
    }
    let mod10 = operand.integer() % 10;
    let mod100 = operand.integer() % 100;

    if mod10 == 1 && mod100 != 11 {
        PluralCategory::One
    } else if (2..=4).contains(&mod10) && !(12..=14).contains(&mod100) {
        PluralCategory::Few
    } else if mod10 == 0 || (5..=9).contains(&mod10) || (11..=14).contains(&mod100) {
        PluralCategory::Many
    } else {
        PluralCategory::Other
    }
}

fn west_slavic(operand: PluralOperand) -> PluralCategory {
    if operand.has_fraction() {
        return PluralCategory::Other;
    }
    let n = operand.integer();
    let mod10 = n % 10;
    let mod100 = n % 100;

    if n == 1 {
        PluralCategory::One
    } else if (2..=4).contains(&mod10) && !(12..=14).contains(&mod100) {
        PluralCategory::Few
    } else {
        PluralCategory::Many
    }
}

fn czech_slovak(operand: PluralOperand) -> PluralCategory {
    if operand.has_fraction() {
        PluralCategory::Many
    } else if operand.integer() == 1 {
        PluralCategory::One
    } else if (2..=4).contains(&operand.integer()) {
        PluralCategory::Few
    } else {
        PluralCategory::Other
    }
}

fn semitic(operand: PluralOperand) -> PluralCategory {
    if operand.has_fraction() {
        return PluralCategory::Other;
    }
    let mod100 = operand.integer() % 100;
    match operand.integer() {
        0 => PluralCategory::Zero,
        1 => PluralCategory::One,
        2 => PluralCategory::Two,
        _ if (3..=10).contains(&mod100) => PluralCategory::Few,
        _ if (11..=99).contains(&mod100) => PluralCategory::Many,
        _ => PluralCategory::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_other_singular_plural() {
        let rule = PluralRule::OneOther;
        assert_eq!(rule.classify(0), PluralCategory::Other);
        assert_eq!(rule.classify(1), PluralCategory::One);
        assert_eq!(rule.classify(2), PluralCategory::Other);
        assert_eq!(rule.classify(100), PluralCategory::Other);
    }

    #[test]
    fn one_other_fraction_is_other() {
        assert_eq!(PluralRule::OneOther.classify(1.5), PluralCategory::Other);
        assert_eq!(PluralRule::OneOther.classify(0.5), PluralCategory::Other);
    }

    #[test]
    fn zero_one_treats_zero_as_singular() {
        let rule = PluralRule::ZeroOne;
        assert_eq!(rule.classify(0), PluralCategory::One);
        assert_eq!(rule.classify(1), PluralCategory::One);
        assert_eq!(rule.classify(1.5), PluralCategory::One);
        assert_eq!(rule.classify(2), PluralCategory::Other);
    }

    #[test]
    fn east_slavic_digit_cycles() {
        let rule = PluralRule::EastSlavic;
        assert_eq!(rule.classify(1), PluralCategory::One);
        assert_eq!(rule.classify(2), PluralCategory::Few);
        assert_eq!(rule.classify(4), PluralCategory::Few);
        assert_eq!(rule.classify(5), PluralCategory::Many);
        assert_eq!(rule.classify(11), PluralCategory::Many);
        assert_eq!(rule.classify(12), PluralCategory::Many);
        assert_eq!(rule.classify(21), PluralCategory::One);
        assert_eq!(rule.classify(22), PluralCategory::Few);
        assert_eq!(rule.classify(25), PluralCategory::Many);
        assert_eq!(rule.classify(100), PluralCategory::Many);
    }

    #[test]
    fn east_slavic_fraction_is_other() {
        assert_eq!(PluralRule::EastSlavic.classify(1.5), PluralCategory::Other);
    }

    #[test]
    fn west_slavic_cycles() {
        let rule = PluralRule::WestSlavic;
        assert_eq!(rule.classify(1), PluralCategory::One);
        assert_eq!(rule.classify(2), PluralCategory::Few);
        assert_eq!(rule.classify(4), PluralCategory::Few);
        assert_eq!(rule.classify(5), PluralCategory::Many);
        assert_eq!(rule.classify(12), PluralCategory::Many);
        assert_eq!(rule.classify(22), PluralCategory::Few);
        assert_eq!(rule.classify(112), PluralCategory::Many);
    }

    #[test]
    fn czech_slovak_small_range_few() {
        let rule = PluralRule::CzechSlovak;
        assert_eq!(rule.classify(1), PluralCategory::One);
        assert_eq!(rule.classify(2), PluralCategory::Few);
        assert_eq!(rule.classify(4), PluralCategory::Few);
        assert_eq!(rule.classify(5), PluralCategory::Other);
        assert_eq!(rule.classify(22), PluralCategory::Other);
        assert_eq!(rule.classify(1.5), PluralCategory::Many);
    }

    #[test]
    fn semitic_full_categories() {
        let rule = PluralRule::Semitic;
        assert_eq!(rule.classify(0), PluralCategory::Zero);
        assert_eq!(rule.classify(1), PluralCategory::One);
        assert_eq!(rule.classify(2), PluralCategory::Two);
        assert_eq!(rule.classify(5), PluralCategory::Few);
        assert_eq!(rule.classify(11), PluralCategory::Many);
        assert_eq!(rule.classify(100), PluralCategory::Other);
        assert_eq!(rule.classify(103), PluralCategory::Few);
    }

    #[test]
    fn no_plural_always_other() {
        for n in [0, 1, 2, 5, 100, 1000] {
            assert_eq!(PluralRule::NoPlural.classify(n), PluralCategory::Other);
        }
    }

    #[test]
    fn locale_detection_ignores_country_codes() {
        assert_eq!(PluralRule::for_locale("en"), PluralRule::OneOther);
        assert_eq!(PluralRule::for_locale("en_US"), PluralRule::OneOther);
        assert_eq!(PluralRule::for_locale("de_CH"), PluralRule::OneOther);
        assert_eq!(PluralRule::for_locale("ru"), PluralRule::EastSlavic);
        assert_eq!(PluralRule::for_locale("fr"), PluralRule::ZeroOne);
        assert_eq!(PluralRule::for_locale("cs"), PluralRule::CzechSlovak);
        assert_eq!(PluralRule::for_locale("ar_EG"), PluralRule::Semitic);
        assert_eq!(PluralRule::for_locale("ja"), PluralRule::NoPlural);
    }

    #[test]
    fn unknown_language_degrades_to_one_other() {
        assert_eq!(PluralRule::for_locale("xx"), PluralRule::OneOther);
        assert_eq!(PluralRule::for_locale("xx_YY"), PluralRule::OneOther);
        assert_eq!(PluralRule::for_locale(""), PluralRule::OneOther);
    }

    #[test]
    fn negative_counts_use_absolute_value() {
        assert_eq!(PluralRule::OneOther.classify(-1), PluralCategory::One);
        assert_eq!(PluralRule::EastSlavic.classify(-22), PluralCategory::Few);
    }

    #[test]
    fn ordered_category_sets_end_in_other() {
        for rule in [
            PluralRule::OneOther,
            PluralRule::ZeroOne,
            PluralRule::EastSlavic,
            PluralRule::WestSlavic,
            PluralRule::CzechSlovak,
            PluralRule::Semitic,
            PluralRule::NoPlural,
        ] {
            assert_eq!(rule.categories().last(), Some(&PluralCategory::Other));
        }
    }
}
