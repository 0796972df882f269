//! Line classification.
//!
//! A line's transaction kind is decided by an ordered table of keyword rules.
//! The first rule that matches wins, so reimbursement and loan rules come
//! before the debt and expense rules whose keywords they can contain
//! (`paid back` contains `paid`).

use crate::language::Language;
use crate::token::{tokenize, Word};

/// The four kinds of transaction a note line can describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Expense,
    Debt,
    Reimbursement,
    Loan,
}

/// A keyword to look for in a tokenized line.
#[derive(Debug, Clone, Copy)]
pub enum Marker {
    /// Consecutive words, compared by lowercase key.
    Phrase(&'static [&'static str]),
    /// A word starting with this stem, optionally behind an Arabic prefix
    /// (`دفع` matches `دفعت`, `ودفع`).
    Stem(&'static str),
    /// Two words with one or two others between them (`paid Alex back`).
    /// The span covers only the first word.
    Around(&'static str, &'static str),
}

/// Most words a [`Marker::Around`] pair may enclose.
const MAX_ENCLOSED: usize = 2;

/// Where a marker was found: first word index and word count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub at: usize,
    pub len: usize,
}

impl Span {
    pub fn end(&self) -> usize {
        self.at + self.len
    }
}

impl Marker {
    /// First occurrence of the marker.
    pub fn find(&self, words: &[Word]) -> Option<Span> {
        self.positions(words).into_iter().next()
    }

    /// Every occurrence of the marker, left to right.
    pub fn positions(&self, words: &[Word]) -> Vec<Span> {
        match *self {
            Marker::Phrase(phrase) => {
                if phrase.is_empty() || words.len() < phrase.len() {
                    return Vec::new();
                }
                words
                    .windows(phrase.len())
                    .enumerate()
                    .filter(|(_, window)| window.iter().zip(phrase).all(|(w, p)| w.key == *p))
                    .map(|(at, _)| Span {
                        at,
                        len: phrase.len(),
                    })
                    .collect()
            }
            Marker::Stem(stem) => words
                .iter()
                .enumerate()
                .filter(|(_, w)| w.stems().iter().any(|s| s.starts_with(stem)))
                .map(|(at, _)| Span { at, len: 1 })
                .collect(),
            Marker::Around(head, tail) => words
                .iter()
                .enumerate()
                .filter(|(at, w)| {
                    w.key == head
                        && words
                            .iter()
                            .skip(at + 2)
                            .take(MAX_ENCLOSED)
                            .any(|w| w.key == tail)
                })
                .map(|(at, _)| Span { at, len: 1 })
                .collect(),
        }
    }

    fn matches(&self, words: &[Word]) -> bool {
        self.find(words).is_some()
    }
}

/// One classification rule.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub kind: TransactionKind,
    pub language: Language,
    pub marker: Marker,
    /// At least one of these must also appear (empty: no requirement).
    pub requires: &'static [Marker],
    /// None of these may appear.
    pub unless: &'static [Marker],
}

impl Rule {
    const fn new(kind: TransactionKind, language: Language, marker: Marker) -> Self {
        Rule {
            kind,
            language,
            marker,
            requires: &[],
            unless: &[],
        }
    }

    const fn requires(mut self, markers: &'static [Marker]) -> Self {
        self.requires = markers;
        self
    }

    const fn unless(mut self, markers: &'static [Marker]) -> Self {
        self.unless = markers;
        self
    }

    /// The marker span if this rule applies to the line.
    pub fn apply(&self, words: &[Word]) -> Option<Span> {
        let span = self.marker.find(words)?;
        let required = self.requires.is_empty() || self.requires.iter().any(|m| m.matches(words));
        let excluded = self.unless.iter().any(|m| m.matches(words));
        (required && !excluded).then_some(span)
    }
}

/// Recurring-payment words; a loan's installment sits next to one of these.
pub const MONTHLY_MARKERS: &[Marker] = &[
    Marker::Phrase(&["monthly"]),
    Marker::Phrase(&["month"]),
    Marker::Phrase(&["installment"]),
    Marker::Phrase(&["installments"]),
    Marker::Stem("شهر"),
    Marker::Stem("قسط"),
];

use Language::{Arabic, English};
use TransactionKind::{Debt, Expense, Loan, Reimbursement};

/// Classification rules in priority order.
pub const RULES: &[Rule] = &[
    Rule::new(Reimbursement, English, Marker::Phrase(&["reimbursed"])),
    Rule::new(Reimbursement, English, Marker::Phrase(&["paid", "back"])),
    Rule::new(Reimbursement, English, Marker::Phrase(&["repaid"])),
    Rule::new(Reimbursement, English, Marker::Around("paid", "back")),
    Rule::new(Reimbursement, Arabic, Marker::Stem("ارجع")),
    Rule::new(Reimbursement, Arabic, Marker::Stem("رجع")),
    Rule::new(Reimbursement, Arabic, Marker::Stem("اعاد")),
    Rule::new(Loan, English, Marker::Phrase(&["loan"])),
    Rule::new(Loan, English, Marker::Phrase(&["installment"])),
    Rule::new(Loan, English, Marker::Phrase(&["installments"])),
    Rule::new(Loan, Arabic, Marker::Stem("قرض")).requires(MONTHLY_MARKERS),
    Rule::new(Loan, Arabic, Marker::Stem("قسط")),
    Rule::new(Debt, English, Marker::Phrase(&["owes"])),
    Rule::new(Debt, Arabic, Marker::Stem("مديون")),
    Rule::new(Debt, Arabic, Marker::Stem("مدين")),
    Rule::new(Debt, Arabic, Marker::Phrase(&["على"])).unless(&[Marker::Stem("دفع")]),
    Rule::new(Expense, English, Marker::Phrase(&["paid"])),
    Rule::new(Expense, Arabic, Marker::Stem("دفع")),
];

/// The outcome of classifying a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub kind: TransactionKind,
    pub language: Language,
    /// The keyword that decided the kind.
    pub marker: Span,
}

/// Classifies a tokenized line with the first matching rule.
pub fn classify_words(words: &[Word]) -> Option<Classification> {
    RULES.iter().find_map(|rule| {
        rule.apply(words).map(|marker| Classification {
            kind: rule.kind,
            language: rule.language,
            marker,
        })
    })
}

/// Finds the marker of the first rule of `kind` that applies.
pub fn find_marker(kind: TransactionKind, words: &[Word]) -> Option<Classification> {
    RULES
        .iter()
        .filter(|rule| rule.kind == kind)
        .find_map(|rule| {
            rule.apply(words).map(|marker| Classification {
                kind,
                language: rule.language,
                marker,
            })
        })
}

/// Classifies a normalized line; `None` means unrecognized.
///
/// # Examples
///
/// ```
/// use family_ledger::{classify, TransactionKind};
///
/// assert_eq!(classify("Sam paid back Alex 20"), Some(TransactionKind::Reimbursement));
/// assert_eq!(classify("The weather is nice today"), None);
/// ```
pub fn classify(normalized_line: &str) -> Option<TransactionKind> {
    classify_words(&tokenize(normalized_line)).map(|c| c.kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;

    fn kind(line: &str) -> Option<TransactionKind> {
        classify(&normalize(line))
    }

    #[test]
    fn test_english_kinds() {
        assert_eq!(kind("Alex paid 120 for groceries"), Some(Expense));
        assert_eq!(kind("Jamie owes Alex 40"), Some(Debt));
        assert_eq!(kind("Sam reimbursed Alex 20"), Some(Reimbursement));
        assert_eq!(kind("Omar took a car loan of 100,000 AED"), Some(Loan));
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(kind("ALEX PAID 10"), Some(Expense));
        assert_eq!(kind("Jamie OWES Alex 5"), Some(Debt));
    }

    #[test]
    fn test_reimbursement_wins_over_paid() {
        assert_eq!(kind("Sam paid back Alex 20"), Some(Reimbursement));
        assert_eq!(kind("Sam paid Alex back 20"), Some(Reimbursement));
        assert_eq!(kind("Sam paid Abu Omar back 20"), Some(Reimbursement));
    }

    #[test]
    fn test_paid_around_back_needs_a_gap_of_one_or_two() {
        assert_eq!(kind("Alex paid 50 for dinner and came back"), Some(Expense));
        let words = tokenize("sam paid alex back 20");
        assert_eq!(
            Marker::Around("paid", "back").find(&words),
            Some(Span { at: 1, len: 1 })
        );
    }

    #[test]
    fn test_loan_wins_over_paid_and_owes() {
        assert_eq!(kind("Omar paid the loan installment 500"), Some(Loan));
        assert_eq!(kind("Omar owes the bank a loan, 500 monthly"), Some(Loan));
    }

    #[test]
    fn test_keywords_are_whole_words_in_english() {
        assert_eq!(kind("Alex unpaid 10"), None);
        assert_eq!(kind("Alex prepaid 10"), None);
    }

    #[test]
    fn test_arabic_expense() {
        assert_eq!(kind("سارة دفعت فاتورة اتصالات 200 درهم"), Some(Expense));
        assert_eq!(kind("إيجار الشقة ٣٥٠٠ درهم دفعتها مريم"), Some(Expense));
    }

    #[test]
    fn test_arabic_loan_needs_recurring_marker() {
        assert_eq!(
            kind("أحمد أخذ قرض سيارة ١٠٠٬٠٠٠ درهم ويسدد ٥٬٠٠٠ شهرياً"),
            Some(Loan)
        );
        assert_eq!(kind("أحمد أخذ قرض سيارة ١٠٠٬٠٠٠ درهم"), None);
        assert_eq!(kind("أحمد عليه قسط ٥٠٠"), Some(Loan));
    }

    #[test]
    fn test_arabic_debt() {
        assert_eq!(kind("سارة مديونة لأحمد ١٠٠"), Some(Debt));
        assert_eq!(kind("على سارة ١٠٠ لأحمد"), Some(Debt));
    }

    #[test]
    fn test_arabic_ala_with_payment_is_expense() {
        assert_eq!(kind("دفع أحمد ٢٠٠ على البقالة"), Some(Expense));
    }

    #[test]
    fn test_arabic_reimbursement() {
        assert_eq!(kind("سارة أرجعت لأحمد ٥٠"), Some(Reimbursement));
    }

    #[test]
    fn test_unrecognized() {
        assert_eq!(kind("The weather is nice today"), None);
        assert_eq!(kind(""), None);
    }

    #[test]
    fn test_marker_span_for_phrase() {
        let words = tokenize("Sam paid back Alex 20");
        let c = classify_words(&words).unwrap();
        assert_eq!(c.marker, Span { at: 1, len: 2 });
        assert_eq!(c.language, Language::English);
    }

    #[test]
    fn test_find_marker_for_requested_kind() {
        let words = tokenize("Sam paid back Alex 20");
        let c = find_marker(Expense, &words).unwrap();
        assert_eq!(c.marker, Span { at: 1, len: 1 });
        assert!(find_marker(Debt, &words).is_none());
    }

    #[test]
    fn test_every_rule_matches_its_own_keyword() {
        for rule in RULES {
            let line = match rule.marker {
                Marker::Phrase(words) => words.join(" "),
                Marker::Stem(stem) => stem.to_string(),
                Marker::Around(head, tail) => format!("{} Alex {}", head, tail),
            };
            let line = match rule.requires.first() {
                Some(Marker::Phrase(words)) => format!("{} {}", line, words.join(" ")),
                Some(Marker::Stem(stem)) => format!("{} {}", line, stem),
                Some(Marker::Around(head, tail)) => format!("{} {} x {}", line, head, tail),
                None => line,
            };
            assert!(
                rule.apply(&tokenize(&line)).is_some(),
                "rule for {:?} does not match {:?}",
                rule.kind,
                line
            );
        }
    }
}
