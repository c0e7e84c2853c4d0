use std::process;

use clap::Parser;
use commit_gate::Cli;

/// Exit status for usage, input and tagger errors; 1 is reserved for rule failures.
const ERROR_EXIT_CODE: i32 = 2;

fn main() {
    // Default to "warn" when RUST_LOG is unset; logs go to stderr so reports stay clean.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = cli.execute() {
        eprintln!("Error: {e}");

        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("  Caused by: {err}");
            source = err.source();
        }

        process::exit(ERROR_EXIT_CODE);
    }
}
