//! Ledger engine CLI
//!
//! Command-line interface for invoking ledger operations against a
//! CSV-file-backed key-value store.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- --store ledger.csv init alice bob
//! cargo run -- --store ledger.csv transfer alice bob 300
//! cargo run -- --store ledger.csv earn alice -700
//! cargo run -- --store ledger.csv set carol 42
//! cargo run -- --store ledger.csv balance alice
//! ```
//!
//! `balance` prints the stored balance to stdout; mutations print nothing.
//! Logging goes to stderr and is controlled with `RUST_LOG`.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (unknown function, invalid arguments, insufficient funds, store failure, etc.)

use rust_ledger_engine::cli;
use rust_ledger_engine::core::Dispatcher;
use rust_ledger_engine::store::CsvStore;
use rust_ledger_engine::types::{LedgerError, Operation};
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = cli::parse_args();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Open the store, dispatch one invocation, and print any payload
fn run(args: &cli::CliArgs) -> Result<(), LedgerError> {
    let store = CsvStore::open(&args.store)?;
    let dispatcher = Dispatcher::new(store);

    // Route through invoke or query based on the operation kind, mirroring
    // the host's separate entry points; unknown names fail on either path
    let is_query = args
        .function
        .parse::<Operation>()
        .map(|op| !op.is_mutation())
        .unwrap_or(false);

    if is_query {
        let payload = dispatcher.query(&args.function, &args.args)?;
        println!("{}", String::from_utf8_lossy(&payload));
    } else {
        dispatcher.invoke(&args.function, &args.args)?;
    }

    Ok(())
}
