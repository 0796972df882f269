//! Error types for the family ledger.

use std::fmt;
use thiserror::Error;

/// Result type alias for ledger operations
pub type Result<T> = std::result::Result<T, LedgerError>;

/// Errors that abort a run.
///
/// Bad transaction lines never end up here; they are collected as
/// [`ParseError`]s and the run continues.
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Failed to open or read the input
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to write CSV output
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The roster has no usable member names
    #[error("Empty roster. Pass at least one name with --members")]
    EmptyRoster,

    /// Currency code that is not three ASCII letters
    #[error("Invalid currency code {0:?}: expected three letters such as AED")]
    InvalidCurrency(String),
}

/// The part a member plays in a transaction line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Payer,
    Debtor,
    Creditor,
    /// The member handing money back in a reimbursement.
    Repayer,
    /// The member being paid back in a reimbursement.
    Repaid,
    Borrower,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::Payer => "payer",
            Role::Debtor => "debtor",
            Role::Creditor => "creditor",
            Role::Repayer => "repaying member",
            Role::Repaid => "repaid member",
            Role::Borrower => "borrower",
        };
        f.write_str(name)
    }
}

/// Why a single line was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorReason {
    #[error("no recognizable transaction")]
    Unrecognized,

    #[error("no family member found for the {0}")]
    MissingMember(Role),

    #[error("{name:?} is not a family member")]
    UnknownMember { name: String },

    #[error("no amount found")]
    MissingAmount,

    #[error("amount {0:?} is not a valid number")]
    InvalidAmount(String),

    #[error("amount {0:?} must be greater than zero")]
    NonPositiveAmount(String),
}

impl ParseErrorReason {
    /// Stable reason code for machine-readable output.
    pub fn code(&self) -> &'static str {
        match self {
            ParseErrorReason::Unrecognized => "unrecognized",
            ParseErrorReason::MissingMember(_) => "missing_member",
            ParseErrorReason::UnknownMember { .. } => "unknown_member",
            ParseErrorReason::MissingAmount => "missing_amount",
            ParseErrorReason::InvalidAmount(_) => "invalid_amount",
            ParseErrorReason::NonPositiveAmount(_) => "non_positive_amount",
        }
    }
}

/// A rejected input line, with its 1-based line number and original text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Line {line}: {reason} in {text:?}")]
pub struct ParseError {
    pub line: usize,
    pub text: String,
    pub reason: ParseErrorReason,
}

impl ParseError {
    pub fn new(line: usize, text: impl Into<String>, reason: ParseErrorReason) -> Self {
        ParseError {
            line,
            text: text.into(),
            reason,
        }
    }
}
