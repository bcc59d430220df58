//! Price calculation - turn a billing period and a daily rate into a total

use crate::pricing::types::{RentalPeriod, WORKDAY_HOURS};
use rust_decimal::Decimal;

/// Total charge for a period at the given daily price
/// Pure function - no side effects
///
/// Negative rates are treated as zero. The total is not rounded and
/// saturates at `Decimal::MAX` instead of overflowing.
pub fn calculate_price(
    period: &RentalPeriod,
    daily_price: Decimal,
    hourly_rate: Option<Decimal>,
) -> Decimal {
    let daily_price = daily_price.max(Decimal::ZERO);

    if period.is_zero() {
        return Decimal::ZERO;
    }

    // Raw hour count is display only here
    if period.is_full_day_cutover() {
        return daily_price;
    }

    if period.is_hourly_rental {
        return saturating_mul(
            Decimal::from(period.hours),
            effective_hourly_rate(daily_price, hourly_rate),
        );
    }

    saturating_mul(Decimal::from(period.days), daily_price)
}

/// Multiply, pinning results that overflow to `Decimal::MAX`
pub(crate) fn saturating_mul(lhs: Decimal, rhs: Decimal) -> Decimal {
    lhs.checked_mul(rhs).unwrap_or(Decimal::MAX)
}

/// Explicit hourly rate if given, otherwise the daily price spread over a workday
pub fn effective_hourly_rate(daily_price: Decimal, hourly_rate: Option<Decimal>) -> Decimal {
    match hourly_rate {
        Some(rate) => rate.max(Decimal::ZERO),
        None => daily_price.max(Decimal::ZERO) / Decimal::from(WORKDAY_HOURS),
    }
}

/// Per-hour or per-day rate shown next to a total, rounded up to the whole unit
pub fn unit_rate(period: &RentalPeriod, total: Decimal) -> Decimal {
    let units = if period.is_hourly_rental {
        period.hours
    } else if period.is_full_day_cutover() {
        1
    } else {
        period.days
    };

    if units == 0 {
        return Decimal::ZERO;
    }

    total
        .checked_div(Decimal::from(units))
        .map_or(Decimal::MAX, |rate| rate.ceil())
}
