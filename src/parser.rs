//! Transaction parsing.
//!
//! Each line is normalized, tokenized and classified, then handed to the
//! extractor for its kind. Extractors locate members, amounts and currencies
//! relative to the keyword that decided the kind.
//!
//! Member names must match a roster entry exactly (case-insensitive); there is
//! no fuzzy matching, and a name that matches nobody rejects the line.

use crate::classify::{classify_words, find_marker, Classification, Span, TransactionKind, MONTHLY_MARKERS};
use crate::config::ParserConfig;
use crate::currency::Currency;
use crate::error::{ParseError, ParseErrorReason, Role};
use crate::language::Language;
use crate::member::{Member, Mention, Roster};
use crate::money::Money;
use crate::normalize::normalize;
use crate::token::{tokenize, NumberToken, Word};
use crate::transaction::{Category, Debt, Expense, Loan, Reimbursement, Transaction};
use log::{debug, warn};
use std::ops::Range;

/// Words that open an explicit beneficiary clause.
const FOR_WORDS: &[&str] = &["for", "عن", "ل"];

/// Words meaning "the whole family" inside a beneficiary clause.
const EVERYONE_WORDS: &[&str] = &[
    "everyone", "everybody", "all", "family", "الجميع", "جميع", "الكل", "كل", "العائلة", "عائلة",
];

/// Transactions and rejected lines from a batch of input lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOutcome {
    pub transactions: Vec<Transaction>,
    pub errors: Vec<ParseError>,
}

/// Parses lines against one roster and configuration.
#[derive(Debug, Clone, Copy)]
pub struct LineParser<'a> {
    roster: &'a Roster,
    config: &'a ParserConfig,
}

impl<'a> LineParser<'a> {
    pub fn new(roster: &'a Roster, config: &'a ParserConfig) -> Self {
        LineParser { roster, config }
    }

    /// Parses one raw input line.
    ///
    /// Returns `None` for blank lines. Rejections are logged at warn level
    /// and carry the 1-based `line_no` and the trimmed original text.
    pub fn parse_line(&self, line_no: usize, raw: &str) -> Option<Result<Transaction, ParseError>> {
        let normalized = normalize(raw);
        if normalized.is_empty() {
            return None;
        }

        let result = self
            .parse_normalized(&normalized)
            .map_err(|reason| ParseError::new(line_no, raw.trim(), reason));

        match &result {
            Ok(tx) => debug!("Line {}: parsed {:?}", line_no, tx),
            Err(e) => warn!("{}", e),
        }

        Some(result)
    }

    /// Classifies and parses an already normalized line.
    pub fn parse_normalized(&self, normalized: &str) -> Result<Transaction, ParseErrorReason> {
        let words = tokenize(normalized);
        let classification = classify_words(&words).ok_or(ParseErrorReason::Unrecognized)?;
        debug!(
            "Classified {:?} as {:?} ({:?} keyword)",
            normalized, classification.kind, classification.language
        );
        self.extract(classification, &words)
    }

    /// Parses a normalized line as the given kind.
    ///
    /// Fails with [`ParseErrorReason::Unrecognized`] if no keyword for that
    /// kind is present.
    pub fn parse_as(&self, kind: TransactionKind, normalized: &str) -> Result<Transaction, ParseErrorReason> {
        let words = tokenize(normalized);
        let classification = find_marker(kind, &words).ok_or(ParseErrorReason::Unrecognized)?;
        self.extract(classification, &words)
    }

    fn extract(&self, classification: Classification, words: &[Word]) -> Result<Transaction, ParseErrorReason> {
        let line = Line {
            words,
            marker: classification.marker,
            language: classification.language,
            roster: self.roster,
            default_currency: &self.config.default_currency,
        };

        match classification.kind {
            TransactionKind::Expense => line.expense(),
            TransactionKind::Debt => line.debt(),
            TransactionKind::Reimbursement => line.reimbursement(),
            TransactionKind::Loan => line.loan(),
        }
    }
}

/// Parses a normalized line as `kind`.
pub fn parse(
    kind: TransactionKind,
    normalized_line: &str,
    roster: &Roster,
    config: &ParserConfig,
) -> Result<Transaction, ParseErrorReason> {
    LineParser::new(roster, config).parse_as(kind, normalized_line)
}

/// Parses every line, collecting transactions and rejected lines.
///
/// Blank lines are skipped; line numbers stay 1-based positions in `lines`.
///
/// # Examples
///
/// ```
/// use family_ledger::{parse_all, ParserConfig, Roster};
///
/// let roster = Roster::new(["Alex", "Jamie"]).unwrap();
/// let outcome = parse_all(
///     ["Alex paid 50 for Jamie", "", "nice weather"],
///     &roster,
///     &ParserConfig::default(),
/// );
/// assert_eq!(outcome.transactions.len(), 1);
/// assert_eq!(outcome.errors[0].line, 3);
/// ```
pub fn parse_all<I, S>(lines: I, roster: &Roster, config: &ParserConfig) -> ParseOutcome
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let parser = LineParser::new(roster, config);
    let mut outcome = ParseOutcome::default();

    for (idx, line) in lines.into_iter().enumerate() {
        match parser.parse_line(idx + 1, line.as_ref()) {
            Some(Ok(tx)) => outcome.transactions.push(tx),
            Some(Err(e)) => outcome.errors.push(e),
            None => {}
        }
    }

    outcome
}

/// A classified line being taken apart.
struct Line<'a> {
    words: &'a [Word],
    marker: Span,
    language: Language,
    roster: &'a Roster,
    default_currency: &'a Currency,
}

impl<'a> Line<'a> {
    fn expense(&self) -> Result<Transaction, ParseErrorReason> {
        let payer = self.actor(Role::Payer)?;
        let (at, amount) = self.amount(&[self.marker.end()])?;

        Ok(Transaction::Expense(Expense {
            payer: payer.member,
            amount,
            currency: self.currency_at(at),
            beneficiaries: self.beneficiaries(),
            category: Category::guess(self.words),
        }))
    }

    fn debt(&self) -> Result<Transaction, ParseErrorReason> {
        let debtor = self.actor(Role::Debtor)?;
        let creditor = self.counterparty(&debtor.member, Role::Creditor)?;
        let (at, amount) = self.amount(&[creditor.end(), self.marker.end()])?;

        Ok(Transaction::Debt(Debt {
            debtor: debtor.member,
            creditor: creditor.member,
            amount,
            currency: self.currency_at(at),
        }))
    }

    fn reimbursement(&self) -> Result<Transaction, ParseErrorReason> {
        let payee = self.actor(Role::Repayer)?;
        let payer = self.counterparty(&payee.member, Role::Repaid)?;
        let (at, amount) = self.amount(&[payer.end(), self.marker.end()])?;

        Ok(Transaction::Reimbursement(Reimbursement {
            payer: payer.member,
            payee: payee.member,
            amount,
            currency: self.currency_at(at),
        }))
    }

    /// With two or more amounts, the installment is the one closest to a
    /// recurring-payment word (the last amount if there is none) and the
    /// principal is the first other amount. A lone amount is the installment.
    fn loan(&self) -> Result<Transaction, ParseErrorReason> {
        let borrower = self.first_member(Role::Borrower)?;

        let numbers: Vec<(usize, &NumberToken)> = self
            .words
            .iter()
            .enumerate()
            .filter_map(|(i, w)| w.number.as_ref().map(|n| (i, n)))
            .collect();

        let monthly: Vec<usize> = MONTHLY_MARKERS
            .iter()
            .flat_map(|m| m.positions(self.words))
            .map(|span| span.at)
            .collect();

        let installment_pos = match numbers.len() {
            0 => return Err(ParseErrorReason::MissingAmount),
            1 => 0,
            n if monthly.is_empty() => n - 1,
            _ => numbers
                .iter()
                .enumerate()
                .min_by_key(|(_, (at, _))| {
                    monthly.iter().map(|&m| at.abs_diff(m)).min().unwrap_or(usize::MAX)
                })
                .map_or(0, |(pos, _)| pos),
        };

        let (installment_at, installment_token) = numbers[installment_pos];
        let installment = installment_token.positive_amount()?;

        let principal_entry = numbers
            .iter()
            .enumerate()
            .find(|(pos, _)| *pos != installment_pos)
            .map(|(_, entry)| *entry);

        let principal = match principal_entry {
            Some((_, token)) => {
                let principal = token.amount()?;
                if principal.is_negative() {
                    return Err(ParseErrorReason::InvalidAmount(token.raw.clone()));
                }
                principal
            }
            None => Money::ZERO,
        };

        let currency = principal_entry
            .and_then(|(at, _)| self.explicit_currency(at))
            .or_else(|| self.explicit_currency(installment_at))
            .unwrap_or_else(|| self.default_currency.clone());

        Ok(Transaction::Loan(Loan {
            borrower: borrower.member,
            principal,
            installment,
            currency,
        }))
    }

    fn mentions(&self, range: Range<usize>) -> Vec<Mention> {
        self.roster.mentions(self.words, range)
    }

    fn after_marker(&self) -> Range<usize> {
        self.marker.end()..self.words.len()
    }

    fn unknown_or_missing(&self, at: Option<usize>, role: Role) -> ParseErrorReason {
        match at.and_then(|i| self.words.get(i)).filter(|w| w.looks_like_name()) {
            Some(word) => ParseErrorReason::UnknownMember {
                name: word.text.clone(),
            },
            None => ParseErrorReason::MissingMember(role),
        }
    }

    /// The member named before the keyword. Arabic sentences may put the
    /// verb first, so there the first member after the keyword also counts.
    fn actor(&self, role: Role) -> Result<Mention, ParseErrorReason> {
        if let Some(mention) = self.mentions(0..self.marker.at).into_iter().next() {
            return Ok(mention);
        }

        let before = self.marker.at.checked_sub(1);
        if self.language == Language::Arabic {
            if let Some(mention) = self.mentions(self.after_marker()).into_iter().next() {
                return Ok(mention);
            }
        }

        Err(self.unknown_or_missing(before, role))
    }

    /// The first member after the keyword other than `actor`.
    fn counterparty(&self, actor: &Member, role: Role) -> Result<Mention, ParseErrorReason> {
        let next = self.marker.end();
        self.mentions(self.after_marker())
            .into_iter()
            .find(|m| &m.member != actor)
            .ok_or_else(|| match self.roster.match_at(self.words, next) {
                // The actor named twice (`Jamie owes Jamie`).
                Some(_) => ParseErrorReason::MissingMember(role),
                None => self.unknown_or_missing(Some(next), role),
            })
    }

    /// The first member anywhere in the line.
    fn first_member(&self, role: Role) -> Result<Mention, ParseErrorReason> {
        self.mentions(0..self.words.len())
            .into_iter()
            .next()
            .ok_or_else(|| self.unknown_or_missing(Some(0), role))
    }

    fn first_number(&self, from: usize) -> Option<(usize, &'a NumberToken)> {
        self.words
            .iter()
            .enumerate()
            .skip(from)
            .find_map(|(i, w)| w.number.as_ref().map(|n| (i, n)))
    }

    /// The first amount after the first start position that has one. Arabic
    /// lines fall back to the first amount anywhere.
    fn amount(&self, starts: &[usize]) -> Result<(usize, Money), ParseErrorReason> {
        let found = starts
            .iter()
            .find_map(|&from| self.first_number(from))
            .or_else(|| match self.language {
                Language::Arabic => self.first_number(0),
                Language::English => None,
            });

        let (at, token) = found.ok_or(ParseErrorReason::MissingAmount)?;
        Ok((at, token.positive_amount()?))
    }

    fn currency_at(&self, at: usize) -> Currency {
        self.explicit_currency(at)
            .unwrap_or_else(|| self.default_currency.clone())
    }

    /// Currency named on or next to the amount at `at`: glued to the digits,
    /// then an ISO code, a symbol, or a currency word in the next or
    /// previous word.
    fn explicit_currency(&self, at: usize) -> Option<Currency> {
        let number = self.words.get(at)?.number.as_ref()?;
        if let Some(glued) = &number.glued {
            return Some(glued.clone());
        }

        let neighbours: Vec<&Word> = [Some(at + 1), at.checked_sub(1)]
            .into_iter()
            .flatten()
            .filter_map(|i| self.words.get(i))
            .filter(|w| !w.is_number())
            .collect();

        neighbours
            .iter()
            .find_map(|w| Currency::from_iso_code(&w.key))
            .or_else(|| {
                neighbours.iter().find_map(|w| {
                    let mut chars = w.text.chars();
                    match (chars.next(), chars.next()) {
                        (Some(symbol), None) => Currency::from_symbol(symbol),
                        _ => None,
                    }
                })
            })
            .or_else(|| {
                neighbours
                    .iter()
                    .find_map(|w| w.stems().into_iter().find_map(Currency::from_alias))
            })
    }

    /// Members after the first beneficiary marker; the whole roster when
    /// there is no such clause, it says "everyone", or it names nobody.
    fn beneficiaries(&self) -> Vec<Member> {
        let everyone = || self.roster.members().cloned().collect();

        let Some(start) = self.clause_start() else {
            return everyone();
        };

        if self.words[start..].iter().any(is_everyone) {
            return everyone();
        }

        let named: Vec<Member> = self
            .mentions(start..self.words.len())
            .into_iter()
            .map(|m| m.member)
            .collect();
        if named.is_empty() {
            return everyone();
        }

        self.roster
            .members()
            .filter(|m| named.contains(m))
            .cloned()
            .collect()
    }

    fn clause_start(&self) -> Option<usize> {
        self.after_marker().find_map(|i| {
            let word = &self.words[i];
            if FOR_WORDS.contains(&word.key.as_str()) {
                Some(i + 1)
            } else if word.key.starts_with('ل')
                && (self.roster.is_dative_mention(word) || is_everyone(word))
            {
                Some(i)
            } else {
                None
            }
        })
    }
}

fn is_everyone(word: &Word) -> bool {
    word.stems().iter().any(|stem| EVERYONE_WORDS.contains(stem))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Roster {
        Roster::new(["Alex", "Jamie", "Sam"]).unwrap()
    }

    fn parse_one(roster: &Roster, line: &str) -> Result<Transaction, ParseErrorReason> {
        LineParser::new(roster, &ParserConfig::default()).parse_normalized(&normalize(line))
    }

    fn member(roster: &Roster, name: &str) -> Member {
        roster.members().find(|m| m.name() == name).unwrap().clone()
    }

    fn money(units: i64) -> Money {
        Money::from_units(units)
    }

    #[test]
    fn test_expense_for_possessive_name() {
        let roster = roster();
        let Transaction::Expense(e) = parse_one(&roster, "Alex paid 50 for Jamie's lunch").unwrap() else {
            panic!("Expected Expense");
        };
        assert_eq!(e.beneficiaries, vec![member(&roster, "Jamie")]);
        assert_eq!(e.amount, money(50));
    }

    #[test]
    fn test_amount_above_cap_is_rejected() {
        let roster = roster();
        assert_eq!(
            parse_one(&roster, "Jamie owes Alex 50000000000000000000000000000"),
            Err(ParseErrorReason::InvalidAmount("50000000000000000000000000000".to_string()))
        );
    }

    #[test]
    fn test_expense_with_explicit_beneficiaries() {
        let roster = roster();
        let tx = parse_one(&roster, "Alex paid 120 for groceries for Jamie and Sam").unwrap();
        match tx {
            Transaction::Expense(e) => {
                assert_eq!(e.payer, member(&roster, "Alex"));
                assert_eq!(e.amount, money(120));
                assert_eq!(e.currency, Currency::aed());
                assert_eq!(e.beneficiaries, vec![member(&roster, "Jamie"), member(&roster, "Sam")]);
                assert_eq!(e.category, Category::Groceries);
            }
            other => panic!("Expected Expense, got {:?}", other),
        }
    }

    #[test]
    fn test_expense_without_clause_covers_everyone() {
        let roster = roster();
        let Transaction::Expense(e) = parse_one(&roster, "Alex paid 200 for groceries").unwrap() else {
            panic!("Expected Expense");
        };
        assert_eq!(e.beneficiaries.len(), 3);
    }

    #[test]
    fn test_expense_for_everyone() {
        let roster = roster();
        let Transaction::Expense(e) = parse_one(&roster, "Jamie paid 90 for Sam and everyone").unwrap() else {
            panic!("Expected Expense");
        };
        assert_eq!(e.beneficiaries.len(), 3);
    }

    #[test]
    fn test_beneficiaries_follow_roster_order() {
        let roster = roster();
        let Transaction::Expense(e) = parse_one(&roster, "Alex paid 30 for Sam, Jamie and Sam").unwrap() else {
            panic!("Expected Expense");
        };
        assert_eq!(e.beneficiaries, vec![member(&roster, "Jamie"), member(&roster, "Sam")]);
    }

    #[test]
    fn test_currency_resolution() {
        let roster = roster();
        let currency = |line: &str| parse_one(&roster, line).unwrap().currency().code().to_string();

        assert_eq!(currency("Alex paid 200 usd for groceries"), "USD");
        assert_eq!(currency("Alex paid $200 for groceries"), "USD");
        assert_eq!(currency("Alex paid EUR 15 for Sam"), "EUR");
        assert_eq!(currency("Alex paid 15 dirhams for Sam"), "AED");
        assert_eq!(currency("Jamie owes Alex 40 GBP"), "GBP");
        assert_eq!(currency("Alex paid 200 for groceries"), "AED");
    }

    #[test]
    fn test_configured_default_currency() {
        let roster = roster();
        let config = ParserConfig::with_default_currency("SAR").unwrap();
        let tx = LineParser::new(&roster, &config)
            .parse_normalized("Alex paid 20")
            .unwrap();
        assert_eq!(tx.currency().code(), "SAR");
    }

    #[test]
    fn test_debt() {
        let roster = roster();
        let tx = parse_one(&roster, "Jamie owes Alex 40").unwrap();
        assert_eq!(
            tx,
            Transaction::Debt(Debt {
                debtor: member(&roster, "Jamie"),
                creditor: member(&roster, "Alex"),
                amount: money(40),
                currency: Currency::aed(),
            })
        );
    }

    #[test]
    fn test_debt_amount_before_creditor() {
        let roster = roster();
        let Transaction::Debt(d) = parse_one(&roster, "Jamie owes 40 to Alex").unwrap() else {
            panic!("Expected Debt");
        };
        assert_eq!(d.amount, money(40));
        assert_eq!(d.creditor, member(&roster, "Alex"));
    }

    #[test]
    fn test_reimbursement_roles() {
        let roster = roster();
        let tx = parse_one(&roster, "Sam reimbursed Alex 20").unwrap();
        assert_eq!(
            tx,
            Transaction::Reimbursement(Reimbursement {
                payer: member(&roster, "Alex"),
                payee: member(&roster, "Sam"),
                amount: money(20),
                currency: Currency::aed(),
            })
        );

        let Transaction::Reimbursement(r) = parse_one(&roster, "Jamie paid back Sam 15.5").unwrap() else {
            panic!("Expected Reimbursement");
        };
        assert_eq!(r.payee, member(&roster, "Jamie"));
        assert_eq!(r.payer, member(&roster, "Sam"));
        assert_eq!(r.amount.to_string(), "15.50");
    }

    #[test]
    fn test_reimbursement_with_member_inside_paid_back() {
        let roster = roster();
        let Transaction::Reimbursement(r) = parse_one(&roster, "Sam paid Alex back 20").unwrap() else {
            panic!("Expected Reimbursement");
        };
        assert_eq!(r.payee, member(&roster, "Sam"));
        assert_eq!(r.payer, member(&roster, "Alex"));
        assert_eq!(r.amount, money(20));
    }

    #[test]
    fn test_loan_with_principal_and_installment() {
        let roster = Roster::new(["Omar"]).unwrap();
        let tx = parse_one(
            &roster,
            "Omar took a car loan of 100,000 AED and will pay 5,000 AED monthly.",
        )
        .unwrap();
        assert_eq!(
            tx,
            Transaction::Loan(Loan {
                borrower: member(&roster, "Omar"),
                principal: money(100_000),
                installment: money(5_000),
                currency: Currency::aed(),
            })
        );
    }

    #[test]
    fn test_loan_single_amount_is_installment() {
        let roster = Roster::new(["Omar"]).unwrap();
        let Transaction::Loan(loan) = parse_one(&roster, "Omar pays 1500 monthly on his loan").unwrap() else {
            panic!("Expected Loan");
        };
        assert_eq!(loan.principal, Money::ZERO);
        assert_eq!(loan.installment, money(1500));
    }

    #[test]
    fn test_arabic_loan() {
        let roster = Roster::new(["أحمد"]).unwrap();
        let Transaction::Loan(loan) =
            parse_one(&roster, "أحمد أخذ قرض سيارة ١٠٠٬٠٠٠ درهم ويسدد ٥٬٠٠٠ شهرياً").unwrap()
        else {
            panic!("Expected Loan");
        };
        assert_eq!(loan.borrower.name(), "أحمد");
        assert_eq!(loan.principal, money(100_000));
        assert_eq!(loan.installment, money(5_000));
        assert_eq!(loan.currency, Currency::aed());
    }

    #[test]
    fn test_arabic_expense_payer_after_amount() {
        let roster = Roster::new(["مريم", "سارة"]).unwrap();
        let Transaction::Expense(e) = parse_one(&roster, "إيجار الشقة ٣٥٠٠ درهم دفعتها مريم").unwrap() else {
            panic!("Expected Expense");
        };
        assert_eq!(e.payer.name(), "مريم");
        assert_eq!(e.amount, money(3500));
        assert_eq!(e.category, Category::Rent);
        assert_eq!(e.beneficiaries.len(), 2);
    }

    #[test]
    fn test_arabic_expense_with_dative_beneficiary() {
        let roster = Roster::new(["أحمد", "سارة", "مريم"]).unwrap();
        let Transaction::Expense(e) = parse_one(&roster, "سارة دفعت ٢٠٠ درهم لأحمد").unwrap() else {
            panic!("Expected Expense");
        };
        assert_eq!(e.payer.name(), "سارة");
        let names: Vec<&str> = e.beneficiaries.iter().map(Member::name).collect();
        assert_eq!(names, vec!["أحمد"]);
    }

    #[test]
    fn test_arabic_expense_for_family() {
        let roster = Roster::new(["أحمد", "سارة"]).unwrap();
        let Transaction::Expense(e) = parse_one(&roster, "دفعت سارة ٢٠٠ درهم بقالة للعائلة").unwrap() else {
            panic!("Expected Expense");
        };
        assert_eq!(e.payer.name(), "سارة");
        assert_eq!(e.beneficiaries.len(), 2);
    }

    #[test]
    fn test_arabic_debt_with_ala() {
        let roster = Roster::new(["أحمد", "سارة"]).unwrap();
        let Transaction::Debt(d) = parse_one(&roster, "على سارة ١٠٠ لأحمد").unwrap() else {
            panic!("Expected Debt");
        };
        assert_eq!(d.debtor.name(), "سارة");
        assert_eq!(d.creditor.name(), "أحمد");
        assert_eq!(d.amount, money(100));
    }

    #[test]
    fn test_unrecognized_line() {
        assert_eq!(
            parse_one(&roster(), "The weather is nice today"),
            Err(ParseErrorReason::Unrecognized)
        );
    }

    #[test]
    fn test_unknown_member() {
        let roster = roster();
        assert_eq!(
            parse_one(&roster, "Bob paid 50 for Alex"),
            Err(ParseErrorReason::UnknownMember { name: "Bob".into() })
        );
        assert_eq!(
            parse_one(&roster, "Jamie owes Bob 40"),
            Err(ParseErrorReason::UnknownMember { name: "Bob".into() })
        );
    }

    #[test]
    fn test_missing_member() {
        assert_eq!(
            parse_one(&roster(), "paid 50 for groceries"),
            Err(ParseErrorReason::MissingMember(Role::Payer))
        );
    }

    #[test]
    fn test_missing_amount() {
        assert_eq!(
            parse_one(&roster(), "Alex paid for groceries"),
            Err(ParseErrorReason::MissingAmount)
        );
    }

    #[test]
    fn test_non_positive_amount() {
        assert_eq!(
            parse_one(&roster(), "Alex paid 0 for groceries"),
            Err(ParseErrorReason::NonPositiveAmount("0".into()))
        );
        assert_eq!(
            parse_one(&roster(), "Jamie owes Alex -5"),
            Err(ParseErrorReason::NonPositiveAmount("-5".into()))
        );
    }

    #[test]
    fn test_parse_with_explicit_kind() {
        let roster = roster();
        let config = ParserConfig::default();
        let line = normalize("Sam paid back Alex 20");

        let tx = parse(TransactionKind::Expense, &line, &roster, &config).unwrap();
        assert_eq!(tx.kind(), TransactionKind::Expense);

        assert_eq!(
            parse(TransactionKind::Loan, &line, &roster, &config),
            Err(ParseErrorReason::Unrecognized)
        );
    }

    #[test]
    fn test_parse_all_skips_blank_lines_and_keeps_going() {
        let roster = roster();
        let outcome = parse_all(
            [
                "Alex paid 120 for groceries for Jamie and Sam",
                "   ",
                "The weather is nice today",
                "Jamie owes Alex 40",
            ],
            &roster,
            &ParserConfig::default(),
        );
        assert_eq!(outcome.transactions.len(), 2);
        assert_eq!(outcome.errors.len(), 1);
        assert_eq!(outcome.errors[0].line, 3);
        assert_eq!(outcome.errors[0].text, "The weather is nice today");
        assert_eq!(outcome.errors[0].reason, ParseErrorReason::Unrecognized);
    }
}
