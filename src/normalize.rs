//! Lexical normalization of raw note lines.
//!
//! Folds the Arabic script and numeral system onto a canonical form so the
//! classifier and parser only ever see Latin digits, `.` as the decimal point,
//! bare alef, no diacritics and single spaces.

const TATWEEL: char = '\u{0640}';
const BARE_ALEF: char = '\u{0627}';

/// Normalizes a raw line.
///
/// - Arabic-Indic (`٠`-`٩`) and Extended Arabic-Indic (`۰`-`۹`) digits become
///   Latin digits.
/// - The Arabic decimal separator `٫` becomes `.`; the Arabic thousands
///   separator `٬` is dropped.
/// - Diacritics (tashkeel), tatweel, zero-width and bidi marks are dropped;
///   alef with hamza or madda becomes bare alef.
/// - Arabic comma, semicolon and question mark count as whitespace.
/// - Whitespace runs collapse to one space and the result is trimmed.
///
/// The function is pure and idempotent; Latin-only text passes through with
/// only whitespace changes.
///
/// # Examples
///
/// ```
/// use family_ledger::normalize;
///
/// assert_eq!(normalize("١٢٣"), "123");
/// assert_eq!(normalize("  Alex   paid ١٬٢٣٤٫٥ "), "Alex paid 1234.5");
/// ```
pub fn normalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_space = false;

    for ch in raw.chars() {
        let mapped = match ch {
            '\u{0660}'..='\u{0669}' => shift_digit(ch, 0x0660),
            '\u{06F0}'..='\u{06F9}' => shift_digit(ch, 0x06F0),
            '\u{066B}' => Some('.'),
            '\u{066C}' => None,
            '\u{0622}' | '\u{0623}' | '\u{0625}' | '\u{0671}' => Some(BARE_ALEF),
            '\u{060C}' | '\u{061B}' | '\u{061F}' => Some(' '),
            c if c == TATWEEL || is_diacritic(c) || is_invisible_mark(c) => None,
            c => Some(c),
        };

        match mapped {
            None => {}
            Some(c) if c.is_whitespace() => pending_space = !out.is_empty(),
            Some(c) => {
                if pending_space {
                    out.push(' ');
                    pending_space = false;
                }
                out.push(c);
            }
        }
    }

    out
}

fn shift_digit(ch: char, zero: u32) -> Option<char> {
    char::from_digit(ch as u32 - zero, 10)
}

/// Arabic tashkeel and related combining marks.
fn is_diacritic(ch: char) -> bool {
    matches!(ch,
        '\u{064B}'..='\u{065F}' |
        '\u{0670}' |
        '\u{0610}'..='\u{061A}'
    )
}

/// Zero-width joiners and bidi controls that show up in pasted chat text.
fn is_invisible_mark(ch: char) -> bool {
    matches!(ch,
        '\u{200B}'..='\u{200F}' |
        '\u{202A}'..='\u{202E}' |
        '\u{2066}'..='\u{2069}' |
        '\u{061C}' |
        '\u{FEFF}'
    )
}
