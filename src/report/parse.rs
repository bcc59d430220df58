//! Parse booking rows from CSV

use crate::report::QuoteInput;
use anyhow::{Context, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;
use tracing::{info, warn};

/// Booking CSV row structure
#[derive(Debug, Deserialize)]
struct BookingCsvRow {
    booking_id: String,
    start_time: Option<String>,
    end_time: Option<String>,
    daily_price: String, // may carry thousands separators
    hourly_price: Option<String>,
}

/// Parsed rows plus the count of rows that had to be dropped
#[derive(Debug, Default)]
pub struct ParsedRows {
    pub inputs: Vec<QuoteInput>,
    pub errors: usize,
}

/// Read booking rows from a CSV file on disk
pub fn read_quote_file(path: &Path) -> Result<ParsedRows> {
    info!("Reading booking rows from {:?}", path);
    let file = std::fs::File::open(path).with_context(|| format!("cannot open {:?}", path))?;
    parse_quote_rows(file)
}

/// Parse booking rows; bad rows are counted, only the first 10 are logged
pub fn parse_quote_rows<R: Read>(source: R) -> Result<ParsedRows> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(source);

    let mut parsed = ParsedRows::default();

    for (idx, result) in reader.deserialize::<BookingCsvRow>().enumerate() {
        let outcome = result
            .context("malformed row")
            .and_then(parse_row);

        match outcome {
            Ok(input) => parsed.inputs.push(input),
            Err(e) => {
                parsed.errors += 1;
                if parsed.errors <= 10 {
                    warn!("Failed to parse row {}: {:#}", idx, e);
                }
            }
        }
    }

    info!(
        "Parsed {} booking rows ({} errors)",
        parsed.inputs.len(),
        parsed.errors
    );

    Ok(parsed)
}

fn parse_row(row: BookingCsvRow) -> Result<QuoteInput> {
    let daily_price = parse_amount(&row.daily_price)
        .with_context(|| format!("bad daily_price {:?}", row.daily_price))?;

    let hourly_price = match row.hourly_price.as_deref().map(str::trim) {
        Some(raw) if !raw.is_empty() => Some(
            parse_amount(raw).with_context(|| format!("bad hourly_price {:?}", raw))?,
        ),
        _ => None,
    };

    Ok(QuoteInput {
        booking_id: row.booking_id,
        start_time: row.start_time,
        end_time: row.end_time,
        daily_price,
        hourly_price,
    })
}

/// Parse "240000", "240,000", "1.200.000" or "240.000 VNĐ" style amounts
///
/// Dots are read as vi-VN thousands separators only when the value carries a
/// currency suffix or has more than one dot; "12500.125" stays fractional.
fn parse_amount(raw: &str) -> Result<Decimal> {
    let trimmed = raw.trim();
    let unsuffixed = trimmed
        .strip_suffix("VNĐ")
        .or_else(|| trimmed.strip_suffix("VND"));
    let has_suffix = unsuffixed.is_some();

    let digits: String = unsuffixed
        .unwrap_or(trimmed)
        .chars()
        .filter(|c| !matches!(c, ',' | ' '))
        .collect();

    let normalized = if has_suffix || digits.matches('.').count() > 1 {
        digits.replace('.', "")
    } else {
        digits
    };

    Ok(Decimal::from_str(&normalized)?)
}
