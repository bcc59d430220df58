//! HTTP surface - thin handlers around the pricing engine

pub mod bookings;
pub mod quotes;
pub mod records;

use crate::error::AppError;
use crate::pricing::format::DisplayConfig;
use axum::{
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

#[derive(Clone)]
pub struct AppState {
    pub db: Option<PgPool>,
    pub display: Arc<DisplayConfig>,
}

impl AppState {
    pub fn new(db: Option<PgPool>, display: DisplayConfig) -> Self {
        AppState {
            db,
            display: Arc::new(display),
        }
    }

    pub fn db(&self) -> Result<&PgPool, AppError> {
        self.db.as_ref().ok_or(AppError::DatabaseUnavailable)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse {
    pub message: String,
    pub status: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health_check))
        .route("/api/health", get(health_check))
        .route("/api/quotes", post(quotes::create_quote))
        .route("/api/bikes/:id", get(bookings::get_bike))
        .route("/api/bookings/:id/quote", get(bookings::quote_booking))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn health_check() -> Json<ApiResponse> {
    Json(ApiResponse {
        message: "Bike rental API is running!".to_string(),
        status: "ok".to_string(),
    })
}
