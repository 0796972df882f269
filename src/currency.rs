//! Currency codes and the words that name them.
//!
//! Amounts are never converted. A currency is only a display tag attached to
//! each transaction, resolved from whatever the note says next to the amount.

use std::fmt;

/// Code used when a line names no currency and no other default is configured.
pub const DEFAULT_CURRENCY_CODE: &str = "AED";

/// ISO 4217 codes recognised next to an amount.
const ISO_CODES: &[&str] = &[
    "AED", "USD", "EUR", "GBP", "SAR", "QAR", "KWD", "OMR", "BHD", "EGP", "JOD", "INR",
];

/// Words (already normalized and lowercased) that stand in for a code.
const ALIASES: &[(&str, &str)] = &[
    ("dh", "AED"),
    ("dhs", "AED"),
    ("dirham", "AED"),
    ("dirhams", "AED"),
    ("درهم", "AED"),
    ("درهما", "AED"),
    ("دراهم", "AED"),
    ("dollar", "USD"),
    ("dollars", "USD"),
    ("دولار", "USD"),
    ("euro", "EUR"),
    ("euros", "EUR"),
    ("يورو", "EUR"),
    ("riyal", "SAR"),
    ("riyals", "SAR"),
    ("ريال", "SAR"),
];

/// An upper-case currency code such as `AED`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Currency(String);

impl Currency {
    /// Parses a user-supplied code: exactly three ASCII letters, any case.
    pub fn parse_code(code: &str) -> Option<Self> {
        let code = code.trim();
        if code.len() == 3 && code.chars().all(|c| c.is_ascii_alphabetic()) {
            Some(Currency(code.to_ascii_uppercase()))
        } else {
            None
        }
    }

    /// The UAE dirham, the default display currency.
    pub fn aed() -> Self {
        Currency(DEFAULT_CURRENCY_CODE.to_string())
    }

    /// Label for a run whose transactions use more than one currency.
    pub fn mixed() -> Self {
        Currency("MIXED".to_string())
    }

    /// Recognises a known ISO code, case-insensitively.
    pub fn from_iso_code(word: &str) -> Option<Self> {
        ISO_CODES
            .iter()
            .find(|code| code.eq_ignore_ascii_case(word))
            .map(|code| Currency((*code).to_string()))
    }

    /// Recognises a currency symbol.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        let code = match symbol {
            '$' => "USD",
            '€' => "EUR",
            '£' => "GBP",
            _ => return None,
        };
        Some(Currency(code.to_string()))
    }

    /// Recognises a currency name such as `dirhams` or `درهم`.
    pub fn from_alias(key: &str) -> Option<Self> {
        ALIASES
            .iter()
            .find(|(alias, _)| *alias == key)
            .map(|(_, code)| Currency((*code).to_string()))
    }

    pub fn code(&self) -> &str {
        &self.0
    }

    /// Name used in Arabic reports; falls back to the code.
    pub fn arabic_name(&self) -> &str {
        match self.0.as_str() {
            "AED" => "درهم",
            "USD" => "دولار",
            "EUR" => "يورو",
            "SAR" => "ريال",
            "MIXED" => "عملات مختلطة",
            other => other,
        }
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency::aed()
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
