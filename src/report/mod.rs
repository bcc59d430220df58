//! Batch quote report - price booking rows from CSV in one pass

pub mod parse;
pub mod write;

use rust_decimal::Decimal;

/// One booking row to be priced
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteInput {
    pub booking_id: String,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub daily_price: Decimal,
    pub hourly_price: Option<Decimal>,
}

/// Report run statistics
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReportStats {
    /// Rows priced with a bookable period
    pub quoted: usize,
    /// Rows priced as the zero sentinel
    pub invalid: usize,
    /// Rows dropped before pricing
    pub errors: usize,
}

impl std::fmt::Display for ReportStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "quoted: {}, invalid: {}, errors: {}",
            self.quoted, self.invalid, self.errors
        )
    }
}
