//! Booking and bike endpoints backed by Postgres

use crate::api::quotes::QuoteResponse;
use crate::api::records::{fetch_bike, fetch_booking, BikeRow};
use crate::api::AppState;
use crate::error::AppError;
use crate::pricing::format::format_money;
use crate::pricing::{calculate_period, quote};
use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct BikeResponse {
    #[serde(flatten)]
    pub bike: BikeRow,
    pub formatted_price: String,
}

#[derive(Debug, Serialize)]
pub struct BookingQuoteResponse {
    pub booking_id: Uuid,
    pub bike_id: i32,
    pub bike_name: String,
    pub status: String,
    #[serde(flatten)]
    pub quote: QuoteResponse,
}

pub async fn get_bike(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<BikeResponse>, AppError> {
    let db = state.db()?;
    let bike = fetch_bike(db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("bike {}", id)))?;

    Ok(Json(BikeResponse {
        formatted_price: format_money(bike.price, &state.display),
        bike,
    }))
}

/// Price a stored booking with its bike's current rates
pub async fn quote_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<BookingQuoteResponse>, AppError> {
    let db = state.db()?;

    let booking = fetch_booking(db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("booking {}", id)))?;

    let bike = fetch_bike(db, booking.bike_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("bike {}", booking.bike_id)))?;

    let period = calculate_period(booking.start_time, booking.end_time);
    let quote = quote(period, bike.price, bike.hourly_price);

    info!(
        "Quoted booking {} on bike {}: {} -> {}",
        booking.id, bike.id, quote.period.display_text, quote.total
    );

    Ok(Json(BookingQuoteResponse {
        booking_id: booking.id,
        bike_id: bike.id,
        bike_name: bike.name,
        status: booking.status,
        quote: QuoteResponse::new(&quote, &state.display),
    }))
}
