//! Rental pricing engine - pure functions shared by the admin and customer surfaces
//!
//! Period -> Price -> (caller applies) Discount. Nothing in here touches I/O.

pub mod discount;
pub mod format;
pub mod period;
pub mod price;
pub mod quote;
pub mod types;

pub use discount::{apply_discount, discount_rate};
pub use period::{
    calculate_period, calculate_period_between, calculate_period_from_input,
    calculate_same_day_period, parse_timestamp,
};
pub use price::{calculate_price, effective_hourly_rate, unit_rate};
pub use quote::{quote, quote_range, RentalQuote};
pub use types::*;
