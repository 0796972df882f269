//! Family Ledger CLI
//!
//! Reads free-text money notes and prints balances and settlement
//! suggestions for the given family members.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- --members Alex Jamie Sam --file notes.txt
//! cargo run -- --members Alex,Jamie --format csv < notes.txt > balances.csv
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use clap::Parser;
use family_ledger::Cli;
use std::io;
use std::process;

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "error" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let stdout = io::stdout();
    let handle = stdout.lock();
    if let Err(e) = cli.run(handle) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
