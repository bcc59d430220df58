//! Value types for the pricing engine
//! Immutable, recomputed from raw timestamps on every call

use crate::pricing::format::pluralize;
use serde::{Deserialize, Serialize};

/// Same-day rentals up to this many elapsed hours are billed per hour
pub const HOURLY_RENTAL_MAX_HOURS: u32 = 3;

/// Hours in the workday used to derive an hourly rate from the daily price
pub const WORKDAY_HOURS: u32 = 8;

pub const MS_PER_HOUR: i64 = 60 * 60 * 1000;
pub const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Why a calculation fell back to the zero period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodIssue {
    /// One or both endpoints absent
    MissingInput,
    /// Unparseable endpoint, or a span with no positive elapsed time
    InvalidRange,
}

impl std::fmt::Display for PeriodIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PeriodIssue::MissingInput => write!(f, "Missing rental dates"),
            PeriodIssue::InvalidRange => write!(f, "Invalid rental time range"),
        }
    }
}

/// Billing period derived from a start/end pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalPeriod {
    pub days: u32,
    /// Billed hours for hourly rentals; raw elapsed hours (display only) for full-day cutovers
    pub hours: u32,
    pub is_hourly_rental: bool,
    pub display_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue: Option<PeriodIssue>,
}

impl RentalPeriod {
    /// Zero sentinel carrying the reason it was produced
    pub fn invalid(issue: PeriodIssue) -> Self {
        RentalPeriod {
            days: 0,
            hours: 0,
            is_hourly_rental: false,
            display_text: issue.to_string(),
            issue: Some(issue),
        }
    }

    pub fn hourly(hours: u32) -> Self {
        RentalPeriod {
            days: 0,
            hours,
            is_hourly_rental: true,
            display_text: format!("{} (hourly rental)", pluralize(hours, "hour")),
            issue: None,
        }
    }

    /// Same-day rental over the hourly threshold, billed as one day
    pub fn full_day(elapsed_hours: u32) -> Self {
        RentalPeriod {
            days: 1,
            hours: elapsed_hours,
            is_hourly_rental: false,
            display_text: format!("{} (billed as 1 day)", pluralize(elapsed_hours, "hour")),
            issue: None,
        }
    }

    pub fn multi_day(days: u32) -> Self {
        RentalPeriod {
            days,
            hours: 0,
            is_hourly_rental: false,
            display_text: pluralize(days, "day"),
            issue: None,
        }
    }

    /// True for the sentinel; callers use this to block submission
    pub fn is_zero(&self) -> bool {
        self.days == 0 && self.hours == 0
    }

    pub fn is_full_day_cutover(&self) -> bool {
        !self.is_hourly_rental && self.days == 1 && self.hours > HOURLY_RENTAL_MAX_HOURS
    }

    /// Days that count towards duration discounts (hourly rentals count as none)
    pub fn billed_days(&self) -> u32 {
        if self.is_hourly_rental {
            0
        } else {
            self.days
        }
    }
}
