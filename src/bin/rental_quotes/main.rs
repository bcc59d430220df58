//! Quote report - prices booking rows from a CSV file and writes the report to stdout

use anyhow::{Context, Result};
use bike_rental_backend::report::{parse, write};
use std::env;
use std::io;
use std::path::PathBuf;
use tracing::info;

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays a clean CSV
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    dotenvy::dotenv().ok();

    let input: PathBuf = env::args_os()
        .nth(1)
        .or_else(|| env::var_os("QUOTE_INPUT"))
        .map(PathBuf::from)
        .context("usage: rental-quotes <bookings.csv> (or set QUOTE_INPUT)")?;

    info!("=== Quote Report ===");

    info!("Step 1/2: Reading bookings...");
    let parsed = parse::read_quote_file(&input)?;
    info!("✓ Read {} rows", parsed.inputs.len());

    info!("Step 2/2: Pricing...");
    let stdout = io::stdout();
    let stats = write::write_report(stdout.lock(), &parsed.inputs, parsed.errors)
        .context("failed to write quote report")?;

    info!("✓ {} rows priced", stats.quoted + stats.invalid);

    Ok(())
}
