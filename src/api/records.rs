//! Read-only access to bike and booking rows
//! Schema is owned by the admin dashboard; only the columns pricing needs are read

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

/// Database row from bikes table
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct BikeRow {
    pub id: i32,
    pub name: String,
    /// Daily rate in VNĐ
    pub price: Decimal,
    pub hourly_price: Option<Decimal>,
    pub seats: Option<i32>,
    pub fuel_type: Option<String>,
}

/// Database row from bookings table
///
/// Times are wall-clock (TIMESTAMP WITHOUT TIME ZONE), which is what the
/// same-day comparison needs.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct BookingRow {
    pub id: Uuid,
    pub bike_id: i32,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub status: String,
}

pub async fn fetch_bike(db: &PgPool, id: i32) -> Result<Option<BikeRow>, sqlx::Error> {
    sqlx::query_as::<_, BikeRow>(
        r#"
        SELECT id, name, price, hourly_price, seats, fuel_type
        FROM bikes
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(db)
    .await
}

pub async fn fetch_booking(db: &PgPool, id: Uuid) -> Result<Option<BookingRow>, sqlx::Error> {
    sqlx::query_as::<_, BookingRow>(
        r#"
        SELECT id, bike_id, start_time, end_time, status
        FROM bookings
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(db)
    .await
}
