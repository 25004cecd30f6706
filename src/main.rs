//! Bank Ledger CLI
//!
//! Interactive, in-memory banking ledger driven by a text menu.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --withdrawal-limit 250.00 --max-withdrawals 5
//! cargo run -- --branch-code 0002
//! ```
//!
//! The program reads menu commands from stdin, applies them to the
//! in-memory registries through the transaction engine, and prints
//! rendered results to stdout. Nothing is persisted across runs.
//!
//! # Exit Codes
//!
//! - 0: Success (quit command or end of input)
//! - 1: I/O error on stdin/stdout

use bank_ledger::cli;
use std::io;
use std::process;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    // Parse command-line arguments using clap
    let args = cli::parse_args();
    let policy = args.to_policy();

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = cli::menu::run(stdin.lock(), stdout.lock(), &args.branch_code, policy) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
