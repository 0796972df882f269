//! Word tokenizer for normalized lines.
//!
//! A line is split on spaces into [`Word`]s. Each word keeps its trimmed
//! original text (for error messages), a lowercase matching key, and, when the
//! word is an amount, the parsed [`NumberToken`].

use crate::currency::Currency;
use crate::error::ParseErrorReason;
use crate::money::Money;
use regex::Regex;
use std::str::FromStr;
use std::sync::LazyLock;

/// Sign, optional symbol, Latin digits with `,` grouping, optional fraction,
/// optional glued ISO code (`50AED`).
static NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<sign>-)?(?P<symbol>[$€£])?(?P<digits>[0-9][0-9,]*(?:\.[0-9]+)?)(?P<code>[A-Za-z]{3})?$")
        .expect("number pattern is valid")
});

/// One-letter and article prefixes that attach to Arabic words, longest first.
const ARABIC_PREFIXES: &[&str] = &["وال", "بال", "فال", "لل", "ال", "و", "ف", "ب", "ل"];

const LEADING_PUNCTUATION: &[char] = &['"', '\'', '(', '[', '{'];
const TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?', '"', '\'', '’', ')', ']', '}'];

/// Possessive endings, so `Jamie's` matches the member `Jamie`.
const POSSESSIVE_SUFFIXES: &[&str] = &["'s", "'S", "’s", "’S"];

/// An amount as it appeared in the line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberToken {
    /// Sign and digits with grouping commas removed.
    pub raw: String,
    /// Currency glued to the digits (`$20`, `50AED`).
    pub glued: Option<Currency>,
}

impl NumberToken {
    /// Parses the token as a strictly positive amount.
    pub fn positive_amount(&self) -> Result<Money, ParseErrorReason> {
        let amount = self.amount()?;
        if amount.is_positive() {
            Ok(amount)
        } else {
            Err(ParseErrorReason::NonPositiveAmount(self.raw.clone()))
        }
    }

    /// Parses the token as an amount of any sign, up to [`Money::MAX_AMOUNT`].
    pub fn amount(&self) -> Result<Money, ParseErrorReason> {
        match Money::from_str(&self.raw) {
            Ok(amount) if amount.abs() <= Money::MAX_AMOUNT => Ok(amount),
            _ => Err(ParseErrorReason::InvalidAmount(self.raw.clone())),
        }
    }
}

/// A single word of a normalized line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    /// Original text with surrounding punctuation trimmed.
    pub text: String,
    /// Lowercase form used for matching.
    pub key: String,
    pub number: Option<NumberToken>,
}

impl Word {
    pub fn is_number(&self) -> bool {
        self.number.is_some()
    }

    /// The key followed by every form left after stripping one Arabic prefix.
    pub fn stems(&self) -> Vec<&str> {
        stems(&self.key)
    }

    /// A capitalised, purely alphabetic word: the shape of a name in English.
    pub fn looks_like_name(&self) -> bool {
        !self.is_number()
            && self.text.chars().next().is_some_and(char::is_uppercase)
            && self.text.chars().all(char::is_alphabetic)
    }
}

/// `key`, then `key` without each matching Arabic prefix (never empty).
pub fn stems(key: &str) -> Vec<&str> {
    let mut out = vec![key];
    for prefix in ARABIC_PREFIXES {
        if let Some(rest) = key.strip_prefix(prefix) {
            if rest.chars().count() >= 2 && !out.contains(&rest) {
                out.push(rest);
            }
        }
    }
    out
}

/// Splits a normalized line into words.
pub fn tokenize(line: &str) -> Vec<Word> {
    line.split_whitespace().filter_map(word).collect()
}

fn word(raw: &str) -> Option<Word> {
    let text = raw
        .trim_start_matches(LEADING_PUNCTUATION)
        .trim_end_matches(TRAILING_PUNCTUATION);
    let text = POSSESSIVE_SUFFIXES
        .iter()
        .find_map(|suffix| text.strip_suffix(suffix))
        .filter(|stem| !stem.is_empty())
        .unwrap_or(text);
    if text.is_empty() {
        return None;
    }

    Some(Word {
        text: text.to_string(),
        key: text.to_lowercase(),
        number: number(text),
    })
}

fn number(text: &str) -> Option<NumberToken> {
    let caps = NUMBER.captures(text)?;

    let glued = match (caps.name("code"), caps.name("symbol")) {
        (Some(code), _) => Some(Currency::from_iso_code(code.as_str())?),
        (None, Some(symbol)) => symbol.as_str().chars().next().and_then(Currency::from_symbol),
        (None, None) => None,
    };

    let sign = caps.name("sign").map_or("", |m| m.as_str());
    let digits = caps.name("digits").map_or("", |m| m.as_str()).replace(',', "");

    Some(NumberToken {
        raw: format!("{sign}{digits}"),
        glued,
    })
}
