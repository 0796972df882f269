//! Command-line interface.

use crate::config::ParserConfig;
use crate::currency::DEFAULT_CURRENCY_CODE;
use crate::engine::LedgerEngine;
use crate::error::Result;
use crate::language::Language;
use crate::member::Roster;
use crate::report::{ArabicReport, EnglishReport};
use clap::{Parser, ValueEnum};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

/// Output format for the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report
    #[default]
    Text,
    /// One CSV row per member
    Csv,
}

#[derive(Debug, Parser)]
#[command(name = "family-ledger")]
#[command(version, about = "Turn free-text family money notes into balances and settlements")]
pub struct Cli {
    /// Family member names, space- or comma-separated
    #[arg(short, long, required = true, num_args = 1.., value_delimiter = ',')]
    pub members: Vec<String>,

    /// Text file with one transaction per line (reads stdin when omitted)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Report language
    #[arg(short, long, value_enum, default_value_t = Language::English)]
    pub lang: Language,

    /// Append an Arabic explanation after the English report
    #[arg(long)]
    pub explain_ar: bool,

    /// Currency for lines that do not name one
    #[arg(short, long, default_value = DEFAULT_CURRENCY_CODE)]
    pub currency: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Runs against the configured input and writes to `out`.
    pub fn run<W: Write>(&self, out: W) -> Result<()> {
        match &self.file {
            Some(path) => self.run_with_input(BufReader::new(File::open(path)?), out),
            None => self.run_with_input(io::stdin().lock(), out),
        }
    }

    /// Runs against an explicit reader.
    pub fn run_with_input<R: BufRead, W: Write>(&self, input: R, mut out: W) -> Result<()> {
        let roster = Roster::new(&self.members)?;
        let config = ParserConfig::with_default_currency(&self.currency)?;

        let mut engine = LedgerEngine::new(roster, config);
        engine.process_lines(input)?;

        match self.format {
            OutputFormat::Csv => engine.write_csv(out)?,
            OutputFormat::Text => {
                let summary = engine.summary();
                match self.lang {
                    Language::English => write!(out, "{}", EnglishReport(&summary))?,
                    Language::Arabic => write!(out, "{}", ArabicReport(&summary))?,
                }
                if self.explain_ar && self.lang != Language::Arabic {
                    write!(out, "\n{}", ArabicReport(&summary))?;
                }
                out.flush()?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(args: &[&str], input: &str) -> Result<String> {
        let cli = Cli::try_parse_from(std::iter::once("family-ledger").chain(args.iter().copied()))
            .unwrap();
        let mut out = Vec::new();
        cli.run_with_input(Cursor::new(input.to_string()), &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_members_accept_spaces_and_commas() {
        let cli = Cli::try_parse_from(["family-ledger", "--members", "Alex,Jamie", "Sam"]).unwrap();
        assert_eq!(cli.members, vec!["Alex", "Jamie", "Sam"]);
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["family-ledger", "--members", "Alex"]).unwrap();
        assert_eq!(cli.lang, Language::English);
        assert_eq!(cli.format, OutputFormat::Text);
        assert_eq!(cli.currency, "AED");
        assert!(cli.file.is_none());
    }

    #[test]
    fn test_members_required() {
        assert!(Cli::try_parse_from(["family-ledger"]).is_err());
    }

    #[test]
    fn test_lang_alias() {
        let cli = Cli::try_parse_from(["family-ledger", "-m", "Alex", "--lang", "arabic"]).unwrap();
        assert_eq!(cli.lang, Language::Arabic);
    }

    #[test]
    fn test_text_report() {
        let output = run(&["--members", "Alex", "Jamie"], "Jamie owes Alex 40\n").unwrap();
        assert!(output.contains("- Jamie pays Alex: 40.00 AED"));
        assert!(!output.contains("ملخص"));
    }

    #[test]
    fn test_explain_ar_appends_arabic() {
        let output = run(&["--members", "Alex", "Jamie", "--explain-ar"], "Jamie owes Alex 40\n").unwrap();
        let english = output.find("Family Finance Summary").unwrap();
        let arabic = output.find("ملخص العائلة المالي").unwrap();
        assert!(english < arabic);
    }

    #[test]
    fn test_custom_currency() {
        let output = run(&["--members", "Alex", "Jamie", "--currency", "usd"], "Jamie owes Alex 40\n").unwrap();
        assert!(output.contains("Currency: USD"));
    }

    #[test]
    fn test_invalid_currency() {
        let err = run(&["--members", "Alex", "--currency", "dollars"], "").unwrap_err();
        assert!(matches!(err, crate::error::LedgerError::InvalidCurrency(code) if code == "dollars"));
    }

    #[test]
    fn test_blank_members_rejected() {
        let err = run(&["--members", " "], "").unwrap_err();
        assert!(matches!(err, crate::error::LedgerError::EmptyRoster));
    }
}
