//! Human-readable summaries.
//!
//! [`Summary`] gathers everything a run produced. [`EnglishReport`] and
//! [`ArabicReport`] render it; the language only changes the wording, never
//! the numbers.

use crate::currency::Currency;
use crate::error::ParseError;
use crate::language::Language;
use crate::ledger::Balances;
use crate::money::Money;
use crate::settlement::{plan_settlements, Settlement};
use crate::transaction::{Category, Loan, Transaction};
use std::fmt;

/// The results of one run.
#[derive(Debug, Clone)]
pub struct Summary {
    pub balances: Balances,
    pub settlements: Vec<Settlement>,
    pub loans: Vec<Loan>,
    /// Expense totals per category in [`Category::ALL`] order, zero totals
    /// omitted.
    pub spending: Vec<(Category, Money)>,
    pub warnings: Vec<ParseError>,
}

impl Summary {
    pub fn new(balances: Balances, transactions: &[Transaction], errors: &[ParseError]) -> Self {
        let settlements = plan_settlements(&balances);

        let loans = transactions
            .iter()
            .filter_map(|tx| match tx {
                Transaction::Loan(loan) => Some(loan.clone()),
                _ => None,
            })
            .collect();

        let spending = Category::ALL
            .iter()
            .map(|&category| {
                let total: Money = transactions
                    .iter()
                    .filter_map(|tx| match tx {
                        Transaction::Expense(e) if e.category == category => Some(e.amount),
                        _ => None,
                    })
                    .sum();
                (category, total)
            })
            .filter(|(_, total)| !total.is_zero())
            .collect();

        Summary {
            balances,
            settlements,
            loans,
            spending,
            warnings: errors.to_vec(),
        }
    }

    /// Wraps the summary in the report for `language`.
    pub fn render(&self, language: Language) -> String {
        match language {
            Language::English => EnglishReport(self).to_string(),
            Language::Arabic => ArabicReport(self).to_string(),
        }
    }

    fn currency(&self) -> &Currency {
        self.balances.currency()
    }
}

/// The English summary.
pub struct EnglishReport<'a>(pub &'a Summary);

impl fmt::Display for EnglishReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = self.0;
        let currency = summary.currency();

        writeln!(f, "Family Finance Summary")?;
        writeln!(f, "----------------------")?;
        writeln!(f, "Currency: {}", currency)?;
        for entry in summary.balances.iter() {
            let b = &entry.balance;
            writeln!(
                f,
                "{}: owes {} {c}, due {} {c}, net {} {c}",
                entry.member,
                b.owes,
                b.due,
                b.net(),
                c = currency
            )?;
            writeln!(
                f,
                "{}: monthly obligations {} {}",
                entry.member, b.monthly, currency
            )?;
        }

        if !summary.settlements.is_empty() {
            writeln!(f, "\nSettlement Suggestions")?;
            for settlement in &summary.settlements {
                writeln!(f, "- {}", settlement)?;
            }
        }

        if !summary.loans.is_empty() {
            writeln!(f, "\nLoans")?;
            for loan in &summary.loans {
                write!(f, "- {} borrowed", loan.borrower)?;
                if !loan.principal.is_zero() {
                    write!(f, " {} {}", loan.principal, loan.currency)?;
                }
                writeln!(f, ", monthly {} {}", loan.installment, loan.currency)?;
            }
        }

        if !summary.spending.is_empty() {
            writeln!(f, "\nSpending by Category")?;
            for (category, total) in &summary.spending {
                writeln!(
                    f,
                    "- {}: {} {}",
                    category.label(Language::English),
                    total,
                    currency
                )?;
            }
        }

        if !summary.warnings.is_empty() {
            writeln!(f, "\nWarnings")?;
            for warning in &summary.warnings {
                writeln!(f, "- {}", warning)?;
            }
        }

        Ok(())
    }
}

/// The Arabic explanation.
pub struct ArabicReport<'a>(pub &'a Summary);

impl fmt::Display for ArabicReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = self.0;
        let currency = summary.currency().arabic_name();

        writeln!(f, "ملخص العائلة المالي:")?;
        for entry in summary.balances.iter() {
            let b = &entry.balance;
            writeln!(
                f,
                "- {}: مدفوع له {} {c}، مديون {} {c}، صافي {} {c}، الالتزامات الشهرية {} {c}.",
                entry.member,
                b.due,
                b.owes,
                b.net(),
                b.monthly,
                c = currency
            )?;
        }

        if !summary.settlements.is_empty() {
            writeln!(f, "التسويات المقترحة:")?;
            for s in &summary.settlements {
                writeln!(
                    f,
                    "- {} يدفع لـ {}: {} {}.",
                    s.payer,
                    s.payee,
                    s.amount,
                    s.currency.arabic_name()
                )?;
            }
        }

        if !summary.loans.is_empty() {
            writeln!(f, "القروض:")?;
            for loan in &summary.loans {
                let c = loan.currency.arabic_name();
                write!(f, "- {} اقترض", loan.borrower)?;
                if !loan.principal.is_zero() {
                    write!(f, " {} {}", loan.principal, c)?;
                }
                writeln!(f, "، القسط الشهري {} {}.", loan.installment, c)?;
            }
        }

        if !summary.spending.is_empty() {
            writeln!(f, "الإنفاق حسب الفئة:")?;
            for (category, total) in &summary.spending {
                writeln!(
                    f,
                    "- {}: {} {}.",
                    category.label(Language::Arabic),
                    total,
                    currency
                )?;
            }
        }

        if !summary.warnings.is_empty() {
            writeln!(f, "تحذيرات:")?;
            for w in &summary.warnings {
                writeln!(
                    f,
                    "- السطر {}: لم يتم احتساب \"{}\" ({}).",
                    w.line,
                    w.text,
                    w.reason.code()
                )?;
            }
        }

        Ok(())
    }
}
