//! Ad-hoc quotes for the booking form

use crate::api::AppState;
use crate::pricing::format::{format_discount, format_money, format_unit_rate, DisplayConfig};
use crate::pricing::{quote_range, PeriodIssue, RentalQuote};
use axum::{extract::State, Json};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Deserialize)]
pub struct QuoteRequest {
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub daily_price: Decimal,
    pub hourly_price: Option<Decimal>,
}

/// Quote as rendered by booking and admin screens
#[derive(Debug, Serialize, Deserialize)]
pub struct QuoteResponse {
    pub days: u32,
    pub hours: u32,
    pub is_hourly_rental: bool,
    pub display_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue: Option<PeriodIssue>,
    pub total: Decimal,
    pub unit_rate: Decimal,
    pub discount_rate: Decimal,
    pub discounted_total: Decimal,
    pub formatted_total: String,
    pub formatted_unit_rate: String,
    pub formatted_discount: String,
    pub formatted_discounted_total: String,
    pub bookable: bool,
}

impl QuoteResponse {
    pub fn new(quote: &RentalQuote, display: &DisplayConfig) -> Self {
        QuoteResponse {
            days: quote.period.days,
            hours: quote.period.hours,
            is_hourly_rental: quote.period.is_hourly_rental,
            display_text: quote.period.display_text.clone(),
            issue: quote.period.issue,
            total: quote.total,
            unit_rate: quote.unit_rate,
            discount_rate: quote.discount_rate,
            discounted_total: quote.discounted_total,
            formatted_total: format_money(quote.total, display),
            formatted_unit_rate: format_unit_rate(quote, display),
            formatted_discount: format_discount(quote.discount_rate),
            formatted_discounted_total: format_money(quote.discounted_total, display),
            bookable: quote.is_bookable(),
        }
    }
}

/// Invalid periods still answer 200 with a zero, unbookable quote
pub async fn create_quote(
    State(state): State<AppState>,
    Json(request): Json<QuoteRequest>,
) -> Json<QuoteResponse> {
    let quote = quote_range(
        request.start_time.as_deref(),
        request.end_time.as_deref(),
        request.daily_price,
        request.hourly_price,
    );

    debug!(
        "Quote request {:?} -> {:?}: {}",
        request.start_time, request.end_time, quote.period.display_text
    );

    Json(QuoteResponse::new(&quote, &state.display))
}
