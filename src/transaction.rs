//! Transaction models produced by the parser.

use crate::classify::TransactionKind;
use crate::currency::Currency;
use crate::language::Language;
use crate::member::Member;
use crate::money::Money;
use crate::token::Word;

/// A shared expense: `payer` paid `amount` on behalf of `beneficiaries`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expense {
    pub payer: Member,
    pub amount: Money,
    pub currency: Currency,
    /// Non-empty, in roster order, no duplicates.
    pub beneficiaries: Vec<Member>,
    pub category: Category,
}

/// A direct debt: `debtor` owes `creditor`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Debt {
    pub debtor: Member,
    pub creditor: Member,
    pub amount: Money,
    pub currency: Currency,
}

/// `payee` hands money back to `payer`, reducing what `payee` owes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reimbursement {
    /// The member being repaid.
    pub payer: Member,
    /// The member repaying.
    pub payee: Member,
    pub amount: Money,
    pub currency: Currency,
}

/// A loan with a recurring installment owed by `borrower` to an outside
/// lender. The principal is informational only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loan {
    pub borrower: Member,
    pub principal: Money,
    pub installment: Money,
    pub currency: Currency,
}

/// A parsed note line.
///
/// Amounts and installments are always strictly positive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transaction {
    Expense(Expense),
    Debt(Debt),
    Reimbursement(Reimbursement),
    Loan(Loan),
}

impl Transaction {
    pub fn kind(&self) -> TransactionKind {
        match self {
            Transaction::Expense(_) => TransactionKind::Expense,
            Transaction::Debt(_) => TransactionKind::Debt,
            Transaction::Reimbursement(_) => TransactionKind::Reimbursement,
            Transaction::Loan(_) => TransactionKind::Loan,
        }
    }

    pub fn currency(&self) -> &Currency {
        match self {
            Transaction::Expense(e) => &e.currency,
            Transaction::Debt(d) => &d.currency,
            Transaction::Reimbursement(r) => &r.currency,
            Transaction::Loan(l) => &l.currency,
        }
    }
}

/// Spending category of an expense, guessed from keywords in the note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Rent,
    Groceries,
    SchoolFees,
    Salik,
    Parking,
    Electricity,
    Water,
    Telecom,
    Uncategorized,
}

/// Keyword stems per category, checked in order. Stems of two characters or
/// fewer must match a whole word (`du`).
const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (Category::Rent, &["rent", "ايجار"]),
    (Category::Groceries, &["grocer", "supermarket", "بقالة", "سوبرماركت"]),
    (Category::SchoolFees, &["school", "tuition", "رسوم", "مدرسة"]),
    (Category::Salik, &["salik", "سالك"]),
    (Category::Parking, &["parking", "موقف", "مواقف"]),
    (Category::Electricity, &["electric", "كهرباء"]),
    (Category::Water, &["water", "ماء", "مياه"]),
    (Category::Telecom, &["etisalat", "du", "internet", "اتصالات", "انترنت"]),
];

impl Category {
    /// All categories in report order.
    pub const ALL: [Category; 9] = [
        Category::Rent,
        Category::Groceries,
        Category::SchoolFees,
        Category::Salik,
        Category::Parking,
        Category::Electricity,
        Category::Water,
        Category::Telecom,
        Category::Uncategorized,
    ];

    /// Guesses a category from the words of a line.
    pub fn guess(words: &[Word]) -> Category {
        CATEGORY_KEYWORDS
            .iter()
            .find(|(_, keywords)| {
                words.iter().any(|word| {
                    word.stems().iter().any(|stem| {
                        keywords.iter().any(|keyword| {
                            if keyword.chars().count() <= 2 {
                                stem == keyword
                            } else {
                                stem.starts_with(keyword)
                            }
                        })
                    })
                })
            })
            .map_or(Category::Uncategorized, |(category, _)| *category)
    }

    pub fn label(&self, language: Language) -> &'static str {
        match language {
            Language::English => match self {
                Category::Rent => "Rent",
                Category::Groceries => "Groceries",
                Category::SchoolFees => "School fees",
                Category::Salik => "Salik",
                Category::Parking => "Parking",
                Category::Electricity => "Electricity",
                Category::Water => "Water",
                Category::Telecom => "Telecom",
                Category::Uncategorized => "Uncategorized",
            },
            Language::Arabic => match self {
                Category::Rent => "إيجار",
                Category::Groceries => "بقالة",
                Category::SchoolFees => "رسوم مدرسة",
                Category::Salik => "سالك",
                Category::Parking => "مواقف",
                Category::Electricity => "كهرباء",
                Category::Water => "ماء",
                Category::Telecom => "اتصالات",
                Category::Uncategorized => "غير مصنف",
            },
        }
    }
}
