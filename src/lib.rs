//! # Family Ledger
//!
//! Turns free-text family money notes, in English or Arabic, into per-member
//! balances and a short list of settlement transfers.
//!
//! ## Design Principles
//!
//! - **Fixed-point arithmetic**: 2 decimal places via `rust_decimal`
//! - **Rule-table classification**: an ordered keyword table decides each
//!   line's kind before a per-kind extractor reads it
//! - **Local recovery**: a bad line becomes a [`ParseError`], never a failed run
//! - **Strict invariant**: `sum(due) == sum(owes)` for transfer-type transactions
//! - **Deterministic output**: roster order for balances, amount then name
//!   order for settlements
//!
//! ## Example
//!
//! ```
//! use family_ledger::{compute_balances, parse_all, plan_settlements, ParserConfig, Roster};
//!
//! let roster = Roster::new(["Alex", "Jamie", "Sam"]).unwrap();
//! let config = ParserConfig::default();
//! let outcome = parse_all(
//!     [
//!         "Alex paid 120 for groceries for Jamie and Sam",
//!         "Jamie owes Alex 40",
//!         "Sam reimbursed Alex 20",
//!     ],
//!     &roster,
//!     &config,
//! );
//! let balances = compute_balances(&outcome.transactions, &roster, &config);
//! let settlements = plan_settlements(&balances);
//!
//! assert_eq!(settlements[0].to_string(), "Jamie pays Alex: 100.00 AED");
//! assert_eq!(settlements[1].to_string(), "Sam pays Alex: 40.00 AED");
//! ```

pub mod classify;
pub mod cli;
pub mod config;
pub mod currency;
pub mod engine;
pub mod error;
pub mod language;
pub mod ledger;
pub mod member;
pub mod money;
pub mod normalize;
pub mod parser;
pub mod report;
pub mod settlement;
pub mod token;
pub mod transaction;

pub use classify::{classify, TransactionKind};
pub use cli::{Cli, OutputFormat};
pub use config::ParserConfig;
pub use currency::Currency;
pub use engine::LedgerEngine;
pub use error::{LedgerError, ParseError, ParseErrorReason, Result, Role};
pub use language::Language;
pub use ledger::{compute_balances, Balance, Balances, Ledger, MemberBalance};
pub use member::{Member, Roster};
pub use money::Money;
pub use normalize::normalize;
pub use parser::{parse, parse_all, LineParser, ParseOutcome};
pub use report::{ArabicReport, EnglishReport, Summary};
pub use settlement::{plan_settlements, Settlement};
pub use transaction::{Category, Debt, Expense, Loan, Reimbursement, Transaction};
