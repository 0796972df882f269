//! Core ledger engine.
//!
//! Reads note lines one at a time, parses each against the roster and keeps
//! the accepted transactions and the rejected lines. Balances, settlements
//! and reports are derived on demand from what has been read so far.

use crate::config::ParserConfig;
use crate::error::{ParseError, Result};
use crate::ledger::{compute_balances, BalanceRow, Balances};
use crate::member::Roster;
use crate::parser::LineParser;
use crate::report::Summary;
use crate::settlement::{plan_settlements, Settlement};
use crate::transaction::Transaction;
use log::debug;
use std::io::{BufRead, Write};

/// The family ledger engine.
///
/// Owns the roster and configuration for one run. Lines are processed in the
/// order they are received; a bad line is recorded and never stops the run.
///
/// # Output Ordering
///
/// Balances and CSV rows follow roster order, as given on the command line.
pub struct LedgerEngine {
    roster: Roster,
    config: ParserConfig,

    /// Accepted transactions in input order.
    transactions: Vec<Transaction>,

    /// Rejected lines in input order.
    errors: Vec<ParseError>,

    /// Lines consumed so far, blank ones included.
    lines_read: usize,
}

impl LedgerEngine {
    pub fn new(roster: Roster, config: ParserConfig) -> Self {
        LedgerEngine {
            roster,
            config,
            transactions: Vec::new(),
            errors: Vec::new(),
            lines_read: 0,
        }
    }

    /// Processes newline-delimited notes from a reader in streaming fashion.
    ///
    /// Line numbers continue across calls. Invalid UTF-8 is replaced rather
    /// than rejected, so only a failing reader aborts processing.
    pub fn process_lines<R: BufRead>(&mut self, reader: R) -> Result<()> {
        for chunk in reader.split(b'\n') {
            let bytes = chunk?;
            let line = String::from_utf8_lossy(&bytes);
            self.process_line(line.trim_end_matches('\r'));
        }

        debug!(
            "Processed {} line(s): {} transaction(s), {} rejected",
            self.lines_read,
            self.transactions.len(),
            self.errors.len()
        );
        Ok(())
    }

    /// Processes a single note line.
    pub fn process_line(&mut self, raw: &str) {
        self.lines_read += 1;
        let parser = LineParser::new(&self.roster, &self.config);

        match parser.parse_line(self.lines_read, raw) {
            Some(Ok(tx)) => self.transactions.push(tx),
            Some(Err(e)) => self.errors.push(e),
            None => {}
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    pub fn balances(&self) -> Balances {
        compute_balances(&self.transactions, &self.roster, &self.config)
    }

    pub fn settlements(&self) -> Vec<Settlement> {
        plan_settlements(&self.balances())
    }

    /// Everything a report needs.
    pub fn summary(&self) -> Summary {
        Summary::new(self.balances(), &self.transactions, &self.errors)
    }

    /// Writes final balances to CSV, one row per roster member.
    ///
    /// All monetary values are formatted with exactly 2 decimal places.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        let balances = self.balances();
        for entry in balances.iter() {
            csv_writer.serialize(BalanceRow::from(entry))?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}
