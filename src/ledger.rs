//! Ledger building: folding transactions into per-member balances.
//!
//! # Conservation
//!
//! For expenses, debts and reimbursements every amount added to someone's
//! `owes` is added to someone else's `due` (and likewise for reductions), so
//! `sum(due) == sum(owes)` holds exactly. Loan installments only touch
//! `monthly` and are outside this check.

use crate::config::ParserConfig;
use crate::currency::Currency;
use crate::member::{Member, Roster};
use crate::money::Money;
use crate::transaction::{Debt, Expense, Loan, Reimbursement, Transaction};
use log::{debug, warn};
use serde::Serialize;

/// A member's running totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Balance {
    /// What this member must pay others.
    pub owes: Money,
    /// What others must pay this member.
    pub due: Money,
    /// Recurring loan installments.
    pub monthly: Money,
}

impl Balance {
    /// `due - owes`; positive means others owe this member.
    pub fn net(&self) -> Money {
        self.due - self.owes
    }
}

/// A balance together with the member it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberBalance {
    pub member: Member,
    pub balance: Balance,
}

/// One CSV row of the balance table.
#[derive(Debug, Serialize)]
pub struct BalanceRow<'a> {
    pub member: &'a str,
    pub owes: Money,
    pub due: Money,
    pub net: Money,
    pub monthly: Money,
}

impl<'a> From<&'a MemberBalance> for BalanceRow<'a> {
    fn from(entry: &'a MemberBalance) -> Self {
        BalanceRow {
            member: entry.member.name(),
            owes: entry.balance.owes,
            due: entry.balance.due,
            net: entry.balance.net(),
            monthly: entry.balance.monthly,
        }
    }
}

/// Final balances for every roster member, in roster order, plus the
/// currency they are displayed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Balances {
    entries: Vec<MemberBalance>,
    currency: Currency,
}

impl Balances {
    pub fn iter(&self) -> impl Iterator<Item = &MemberBalance> {
        self.entries.iter()
    }

    pub fn get(&self, member: &Member) -> Option<&Balance> {
        self.entries
            .iter()
            .find(|e| &e.member == member)
            .map(|e| &e.balance)
    }

    /// Looks a member up by name, case-sensitively.
    pub fn by_name(&self, name: &str) -> Option<&Balance> {
        self.entries
            .iter()
            .find(|e| e.member.name() == name)
            .map(|e| &e.balance)
    }

    /// The display currency for this set of balances.
    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    pub fn total_owes(&self) -> Money {
        self.entries.iter().map(|e| e.balance.owes).sum()
    }

    pub fn total_due(&self) -> Money {
        self.entries.iter().map(|e| e.balance.due).sum()
    }

    /// Checks the conservation law within one minor unit.
    pub fn is_conserved(&self) -> bool {
        (self.total_due() - self.total_owes()).abs() < Money::MINOR_UNIT
    }
}

/// Accumulates transactions into roster-indexed balances.
///
/// Reimbursements are applied as-is; the ledger does not check that an
/// obligation exists first, so `owes` and `due` may go negative.
#[derive(Debug, Clone)]
pub struct Ledger<'a> {
    roster: &'a Roster,
    balances: Vec<Balance>,
}

impl<'a> Ledger<'a> {
    /// Creates a ledger with zero balances for every roster member.
    pub fn new(roster: &'a Roster) -> Self {
        Ledger {
            roster,
            balances: vec![Balance::default(); roster.len()],
        }
    }

    /// Applies one transaction.
    ///
    /// Returns `false` (and changes nothing) if the transaction names a
    /// member who is not on the roster.
    pub fn apply(&mut self, tx: &Transaction) -> bool {
        match tx {
            Transaction::Expense(expense) => self.record_expense(expense),
            Transaction::Debt(debt) => self.record_debt(debt),
            Transaction::Reimbursement(reimbursement) => self.record_reimbursement(reimbursement),
            Transaction::Loan(loan) => self.record_loan(loan),
        }
    }

    /// Splits an expense evenly across its beneficiaries.
    ///
    /// Shares follow roster order; the last beneficiary takes the rounding
    /// remainder. The payer's own share, if any, is not owed to anyone.
    pub fn record_expense(&mut self, expense: &Expense) -> bool {
        let Some(payer) = self.roster.position(&expense.payer) else {
            return false;
        };

        let mut positions: Vec<usize> = Vec::with_capacity(expense.beneficiaries.len());
        for member in &expense.beneficiaries {
            match self.roster.position(member) {
                Some(pos) if !positions.contains(&pos) => positions.push(pos),
                Some(_) => {}
                None => return false,
            }
        }
        if positions.is_empty() {
            return false;
        }
        positions.sort_unstable();

        let shares = expense.amount.split_evenly(positions.len());
        let mut payer_share = Money::ZERO;
        for (&pos, share) in positions.iter().zip(shares) {
            if pos == payer {
                payer_share = share;
            } else {
                self.balances[pos].owes += share;
            }
        }
        self.balances[payer].due += expense.amount - payer_share;

        debug!(
            "{} paid {} for {} member(s)",
            expense.payer,
            expense.amount,
            positions.len()
        );
        true
    }

    pub fn record_debt(&mut self, debt: &Debt) -> bool {
        let (Some(debtor), Some(creditor)) = (
            self.roster.position(&debt.debtor),
            self.roster.position(&debt.creditor),
        ) else {
            return false;
        };

        self.balances[debtor].owes += debt.amount;
        self.balances[creditor].due += debt.amount;
        debug!("{} owes {} {}", debt.debtor, debt.creditor, debt.amount);
        true
    }

    /// Reduces what the payee owes and what the payer is due.
    pub fn record_reimbursement(&mut self, reimbursement: &Reimbursement) -> bool {
        let (Some(payer), Some(payee)) = (
            self.roster.position(&reimbursement.payer),
            self.roster.position(&reimbursement.payee),
        ) else {
            return false;
        };

        self.balances[payee].owes -= reimbursement.amount;
        self.balances[payer].due -= reimbursement.amount;
        debug!(
            "{} paid back {} {}",
            reimbursement.payee, reimbursement.payer, reimbursement.amount
        );
        true
    }

    pub fn record_loan(&mut self, loan: &Loan) -> bool {
        let Some(borrower) = self.roster.position(&loan.borrower) else {
            return false;
        };

        self.balances[borrower].monthly += loan.installment;
        true
    }

    /// Finishes the ledger with the given display currency.
    pub fn finish(self, currency: Currency) -> Balances {
        let entries = self
            .roster
            .members()
            .cloned()
            .zip(self.balances)
            .map(|(member, balance)| MemberBalance { member, balance })
            .collect();

        Balances { entries, currency }
    }
}

/// The one currency every transaction uses; the configured default when
/// there are none; [`Currency::mixed`] when they disagree.
pub fn declared_currency(transactions: &[Transaction], config: &ParserConfig) -> Currency {
    let mut currencies: Vec<&Currency> = transactions.iter().map(Transaction::currency).collect();
    currencies.sort();
    currencies.dedup();

    match currencies.as_slice() {
        [] => config.default_currency.clone(),
        [single] => (*single).clone(),
        many => {
            warn!(
                "Transactions use {} currencies ({}); amounts are added without conversion",
                many.len(),
                many.iter().map(|c| c.code()).collect::<Vec<_>>().join(", ")
            );
            Currency::mixed()
        }
    }
}

/// Folds transactions into balances for every roster member.
///
/// # Examples
///
/// ```
/// use family_ledger::{compute_balances, parse_all, ParserConfig, Roster};
///
/// let roster = Roster::new(["Alex", "Jamie"]).unwrap();
/// let config = ParserConfig::default();
/// let outcome = parse_all(["Jamie owes Alex 40"], &roster, &config);
/// let balances = compute_balances(&outcome.transactions, &roster, &config);
/// assert_eq!(balances.by_name("Alex").unwrap().due.to_string(), "40.00");
/// ```
pub fn compute_balances(
    transactions: &[Transaction],
    roster: &Roster,
    config: &ParserConfig,
) -> Balances {
    let mut ledger = Ledger::new(roster);
    for tx in transactions {
        if !ledger.apply(tx) {
            warn!("Skipping transaction with a member outside the roster: {:?}", tx);
        }
    }

    let balances = ledger.finish(declared_currency(transactions, config));
    debug_assert!(balances.is_conserved());
    balances
}
