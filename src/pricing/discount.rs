//! Duration discounts - tiered by rental length, applied by the caller

use crate::pricing::price::saturating_mul;
use rust_decimal::Decimal;

/// Discount fraction for a rental of `days` days; highest tier wins, no stacking
pub fn discount_rate(days: u32) -> Decimal {
    match days {
        30.. => Decimal::new(20, 2),
        7..=29 => Decimal::new(10, 2),
        _ => Decimal::ZERO,
    }
}

/// Price after taking off a discount fraction
pub fn apply_discount(price: Decimal, rate: Decimal) -> Decimal {
    let rate = rate.clamp(Decimal::ZERO, Decimal::ONE);
    saturating_mul(price, Decimal::ONE - rate)
}
