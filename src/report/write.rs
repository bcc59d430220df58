//! Write priced booking rows as CSV

use crate::pricing::quote_range;
use crate::report::{QuoteInput, ReportStats};
use anyhow::Result;
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;
use tracing::{debug, info};

#[derive(Debug, Serialize)]
struct ReportLine<'a> {
    booking_id: &'a str,
    days: u32,
    hours: u32,
    hourly: bool,
    total: Decimal,
    discount_rate: Decimal,
    discounted_total: Decimal,
    display: &'a str,
}

/// Price every input and write one report line per row
///
/// `parse_errors` counts rows dropped before pricing so the summary is complete.
pub fn write_report<W: Write>(
    sink: W,
    inputs: &[QuoteInput],
    parse_errors: usize,
) -> Result<ReportStats> {
    info!("Pricing {} booking rows", inputs.len());

    let mut writer = csv::Writer::from_writer(sink);
    let mut stats = ReportStats {
        errors: parse_errors,
        ..ReportStats::default()
    };

    for input in inputs {
        let quote = quote_range(
            input.start_time.as_deref(),
            input.end_time.as_deref(),
            input.daily_price,
            input.hourly_price,
        );

        if quote.is_bookable() {
            stats.quoted += 1;
        } else {
            debug!(
                "Booking {} not bookable: {}",
                input.booking_id, quote.period.display_text
            );
            stats.invalid += 1;
        }

        writer.serialize(ReportLine {
            booking_id: &input.booking_id,
            days: quote.period.days,
            hours: quote.period.hours,
            hourly: quote.period.is_hourly_rental,
            total: quote.total,
            discount_rate: quote.discount_rate,
            discounted_total: quote.discounted_total,
            display: &quote.period.display_text,
        })?;
    }

    writer.flush()?;
    info!("Report complete: {}", stats);

    Ok(stats)
}
