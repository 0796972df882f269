//! Parser configuration.

use crate::currency::Currency;
use crate::error::{LedgerError, Result};

/// Settings threaded through every parse call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParserConfig {
    /// Currency for lines that do not name one.
    pub default_currency: Currency,
}

impl ParserConfig {
    /// Builds a configuration with the given default currency code.
    pub fn with_default_currency(code: &str) -> Result<Self> {
        let default_currency =
            Currency::parse_code(code).ok_or_else(|| LedgerError::InvalidCurrency(code.to_string()))?;
        Ok(ParserConfig { default_currency })
    }
}
