//! Quote composition - runs period, price and discount in one pass

use crate::pricing::discount::{apply_discount, discount_rate};
use crate::pricing::period::calculate_period_from_input;
use crate::pricing::price::{calculate_price, unit_rate};
use crate::pricing::types::RentalPeriod;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

/// Priced rental, undiscounted and discounted
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RentalQuote {
    pub period: RentalPeriod,
    pub total: Decimal,
    pub unit_rate: Decimal,
    pub discount_rate: Decimal,
    pub discounted_total: Decimal,
}

impl RentalQuote {
    /// Zero periods must not be submitted as bookings
    pub fn is_bookable(&self) -> bool {
        !self.period.is_zero()
    }
}

/// Price an already calculated period
pub fn quote(period: RentalPeriod, daily_price: Decimal, hourly_rate: Option<Decimal>) -> RentalQuote {
    let total = calculate_price(&period, daily_price, hourly_rate);
    let rate = discount_rate(period.billed_days());

    debug!(
        "Quoted {}: total {} (discount {})",
        period.display_text, total, rate
    );

    RentalQuote {
        unit_rate: unit_rate(&period, total),
        discount_rate: rate,
        discounted_total: apply_discount(total, rate),
        total,
        period,
    }
}

/// Price raw start/end values straight from a form or record
pub fn quote_range(
    start: Option<&str>,
    end: Option<&str>,
    daily_price: Decimal,
    hourly_rate: Option<Decimal>,
) -> RentalQuote {
    quote(calculate_period_from_input(start, end), daily_price, hourly_rate)
}
