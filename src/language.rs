//! Languages understood in notes and used for reports.

use clap::ValueEnum;

/// English or Arabic.
///
/// Classifier rules are tagged with the language of their keyword, and the
/// report layer renders in one of them. Parsing never depends on the report
/// language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Language {
    #[default]
    #[value(name = "en", alias = "english")]
    English,
    #[value(name = "ar", alias = "arabic")]
    Arabic,
}
