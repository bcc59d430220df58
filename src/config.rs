//! Configuration loaded from environment variables

use crate::pricing::format::{DisplayConfig, Locale};
use anyhow::{Context, Result};
use std::net::SocketAddr;

#[derive(Debug, Clone)]
pub struct Config {
    /// Bookings/bikes routes answer 503 when unset
    pub database_url: Option<String>,
    pub db_max_connections: u32,
    pub bind_addr: SocketAddr,
    pub display: DisplayConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup so tests don't touch the process environment
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = DisplayConfig::default();

        let locale = match lookup("DISPLAY_LOCALE") {
            Some(raw) => raw
                .parse::<Locale>()
                .context("DISPLAY_LOCALE must be vi-VN or en-US")?,
            None => defaults.locale,
        };

        Ok(Config {
            database_url: lookup("DATABASE_URL").filter(|url| !url.trim().is_empty()),

            db_max_connections: lookup("DB_MAX_CONNECTIONS")
                .unwrap_or_else(|| "5".to_string())
                .parse()
                .context("DB_MAX_CONNECTIONS must be a valid number")?,

            bind_addr: lookup("BIND_ADDR")
                .unwrap_or_else(|| "127.0.0.1:3001".to_string())
                .parse()
                .context("BIND_ADDR must be a socket address like 127.0.0.1:3001")?,

            display: DisplayConfig {
                locale,
                currency_suffix: lookup("CURRENCY_SUFFIX").unwrap_or(defaults.currency_suffix),
            },
        })
    }
}
