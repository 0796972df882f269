//! Settlement planning.
//!
//! Greedy matching of the largest remaining debtor against the largest
//! remaining creditor. Both sides are re-sorted after every transfer so a
//! partly settled party competes again with its reduced amount. For `n`
//! members with a non-negligible net this emits at most `n - 1` transfers,
//! since every transfer zeroes at least one party.

use crate::currency::Currency;
use crate::ledger::Balances;
use crate::member::Member;
use crate::money::Money;
use std::cmp::Ordering;
use std::fmt;

/// A suggested transfer from `payer` to `payee`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settlement {
    pub payer: Member,
    pub payee: Member,
    /// Always positive.
    pub amount: Money,
    pub currency: Currency,
}

impl fmt::Display for Settlement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} pays {}: {} {}",
            self.payer, self.payee, self.amount, self.currency
        )
    }
}

/// A member with an outstanding magnitude still to settle.
#[derive(Debug)]
struct Party {
    member: Member,
    remaining: Money,
}

/// Largest amount first, then alphabetical by name.
fn by_remaining_desc(a: &Party, b: &Party) -> Ordering {
    b.remaining
        .cmp(&a.remaining)
        .then_with(|| a.member.name().cmp(b.member.name()))
}

/// Plans the transfers that bring every net balance to zero.
///
/// Monthly obligations are not part of the net and play no role here.
pub fn plan_settlements(balances: &Balances) -> Vec<Settlement> {
    let mut debtors = Vec::new();
    let mut creditors = Vec::new();

    for entry in balances.iter() {
        let net = entry.balance.net();
        if net.is_negligible() {
            continue;
        }
        let party = Party {
            member: entry.member.clone(),
            remaining: net.abs(),
        };
        if net.is_negative() {
            debtors.push(party);
        } else {
            creditors.push(party);
        }
    }

    let mut settlements = Vec::new();
    while !debtors.is_empty() && !creditors.is_empty() {
        debtors.sort_by(by_remaining_desc);
        creditors.sort_by(by_remaining_desc);

        let amount = debtors[0].remaining.min(creditors[0].remaining);
        debtors[0].remaining -= amount;
        creditors[0].remaining -= amount;

        settlements.push(Settlement {
            payer: debtors[0].member.clone(),
            payee: creditors[0].member.clone(),
            amount,
            currency: balances.currency().clone(),
        });

        if debtors[0].remaining.is_negligible() {
            debtors.swap_remove(0);
        }
        if creditors[0].remaining.is_negligible() {
            creditors.swap_remove(0);
        }
    }

    settlements
}
