//! Display helpers - money, unit rates and labels for admin/customer screens
//! Locale is always passed in, never read from the environment here

use crate::error::AppError;
use crate::pricing::quote::RentalQuote;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Supported digit-grouping conventions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Locale {
    #[serde(rename = "vi-VN")]
    ViVn,
    #[serde(rename = "en-US")]
    EnUs,
}

impl Locale {
    pub fn group_separator(&self) -> char {
        match self {
            Locale::ViVn => '.',
            Locale::EnUs => ',',
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Locale::ViVn => write!(f, "vi-VN"),
            Locale::EnUs => write!(f, "en-US"),
        }
    }
}

impl FromStr for Locale {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "vi-vn" | "vi" => Ok(Locale::ViVn),
            "en-us" | "en" => Ok(Locale::EnUs),
            other => Err(AppError::Config(format!("unsupported locale: {}", other))),
        }
    }
}

/// Formatting settings shared by every display helper
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayConfig {
    pub locale: Locale,
    pub currency_suffix: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            locale: Locale::ViVn,
            currency_suffix: "VNĐ".to_string(),
        }
    }
}

/// "1 day" / "2 days"
pub fn pluralize(count: u32, unit: &str) -> String {
    if count == 1 {
        format!("{} {}", count, unit)
    } else {
        format!("{} {}s", count, unit)
    }
}

/// Whole currency units with locale grouping: 240000 -> "240.000 VNĐ"
pub fn format_money(amount: Decimal, config: &DisplayConfig) -> String {
    let whole = amount.max(Decimal::ZERO).ceil().normalize();
    let grouped = group_thousands(&whole.to_string(), config.locale.group_separator());

    if config.currency_suffix.is_empty() {
        grouped
    } else {
        format!("{} {}", grouped, config.currency_suffix)
    }
}

/// "30.000 VNĐ/hour" or "240.000 VNĐ/day"; empty for an unbookable quote
pub fn format_unit_rate(quote: &RentalQuote, config: &DisplayConfig) -> String {
    if quote.period.is_zero() {
        return String::new();
    }

    let unit = if quote.period.is_hourly_rental {
        "hour"
    } else {
        "day"
    };

    format!("{}/{}", format_money(quote.unit_rate, config), unit)
}

/// "10%" / "20%"; empty when there is no discount
pub fn format_discount(rate: Decimal) -> String {
    if rate <= Decimal::ZERO {
        return String::new();
    }

    format!("{}%", (rate * Decimal::ONE_HUNDRED).normalize())
}

fn group_thousands(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);

    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (len - idx) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }

    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::quote::quote;
    use crate::pricing::types::{PeriodIssue, RentalPeriod};
    use rust_decimal_macros::dec;

    fn en_us() -> DisplayConfig {
        DisplayConfig {
            locale: Locale::EnUs,
            currency_suffix: "VND".to_string(),
        }
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize(1, "day"), "1 day");
        assert_eq!(pluralize(2, "day"), "2 days");
        assert_eq!(pluralize(0, "hour"), "0 hours");
        assert_eq!(pluralize(1, "hour"), "1 hour");
    }

    #[test]
    fn test_format_money_vi_vn() {
        let config = DisplayConfig::default();

        assert_eq!(format_money(dec!(240000), &config), "240.000 VNĐ");
        assert_eq!(format_money(dec!(1234567), &config), "1.234.567 VNĐ");
        assert_eq!(format_money(dec!(999), &config), "999 VNĐ");
        assert_eq!(format_money(Decimal::ZERO, &config), "0 VNĐ");
    }

    #[test]
    fn test_format_money_en_us() {
        assert_eq!(format_money(dec!(2400000), &en_us()), "2,400,000 VND");
    }

    #[test]
    fn test_format_money_rounds_up_fractions() {
        let config = DisplayConfig::default();

        assert_eq!(format_money(dec!(12500.125), &config), "12.501 VNĐ");
        assert_eq!(format_money(dec!(240000.00), &config), "240.000 VNĐ");
    }

    #[test]
    fn test_format_money_without_suffix() {
        let config = DisplayConfig {
            currency_suffix: String::new(),
            ..DisplayConfig::default()
        };

        assert_eq!(format_money(dec!(60000), &config), "60.000");
    }

    #[test]
    fn test_format_unit_rate() {
        let config = DisplayConfig::default();

        let hourly = quote(RentalPeriod::hourly(2), dec!(240000), None);
        assert_eq!(format_unit_rate(&hourly, &config), "30.000 VNĐ/hour");

        let daily = quote(RentalPeriod::multi_day(3), dec!(150000), None);
        assert_eq!(format_unit_rate(&daily, &config), "150.000 VNĐ/day");

        let invalid = quote(RentalPeriod::invalid(PeriodIssue::InvalidRange), dec!(150000), None);
        assert_eq!(format_unit_rate(&invalid, &config), "");
    }

    #[test]
    fn test_format_discount() {
        assert_eq!(format_discount(dec!(0.10)), "10%");
        assert_eq!(format_discount(dec!(0.20)), "20%");
        assert_eq!(format_discount(Decimal::ZERO), "");
    }

    #[test]
    fn test_locale_from_str() {
        assert_eq!("vi-VN".parse::<Locale>().unwrap(), Locale::ViVn);
        assert_eq!("en_us".parse::<Locale>().unwrap(), Locale::EnUs);
        assert!("fr-FR".parse::<Locale>().is_err());
    }
}
