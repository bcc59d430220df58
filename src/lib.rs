// Library module shared by the API server and the quote report binary

pub mod api;
pub mod config;
pub mod error;
pub mod pricing;
pub mod report;

pub use error::AppError;
pub use pricing::{
    calculate_period, calculate_period_from_input, calculate_price, discount_rate, quote,
    quote_range, RentalPeriod, RentalQuote,
};
