//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. CLI flags (applied by `lib.rs` on top of this)
//! 2. Environment variables (`SHOECART_*`)
//! 3. Defaults (this file)
//!
//! Configuration is read-only after initialization.

use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;

use shoecart_catalog::CatalogConfig;
use shoecart_core::{Money, CART_STORAGE_KEY};

use crate::error::{AppError, AppResult};
use crate::messages::{Locale, Messages};

/// Application configuration.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Base URL of the stock/product service.
    /// Default: http://localhost:3333
    pub api_url: String,

    /// Per-request timeout for the stock service.
    /// Default: 10 seconds
    pub timeout: Duration,

    /// SQLite file holding local storage. `None` means the platform data dir.
    pub db_path: Option<PathBuf>,

    /// Local storage key holding the cart.
    /// Default: "@RocketShoes:cart"
    pub storage_key: String,

    /// Toast and price locale.
    pub locale: Locale,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            api_url: shoecart_catalog::client::DEFAULT_BASE_URL.to_string(),
            timeout: shoecart_catalog::client::DEFAULT_TIMEOUT,
            db_path: None,
            storage_key: CART_STORAGE_KEY.to_string(),
            locale: Locale::default(),
        }
    }
}

impl AppConfig {
    /// Creates a new AppConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `SHOECART_API_URL`: stock service base URL
    /// - `SHOECART_TIMEOUT_SECS`: request timeout in whole seconds
    /// - `SHOECART_DB_PATH`: local storage database file
    /// - `SHOECART_STORAGE_KEY`: cart key inside local storage
    /// - `SHOECART_LOCALE`: `pt-BR` or `en`
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Like [`AppConfig::from_env`] with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = AppConfig::default();

        if let Some(url) = lookup("SHOECART_API_URL") {
            config.api_url = url;
        }

        if let Some(secs) = lookup("SHOECART_TIMEOUT_SECS") {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                AppError::Config(format!("SHOECART_TIMEOUT_SECS must be a number, got '{}'", secs))
            })?;
            if secs == 0 {
                return Err(AppError::Config(
                    "SHOECART_TIMEOUT_SECS must be positive".to_string(),
                ));
            }
            config.timeout = Duration::from_secs(secs);
        }

        if let Some(path) = lookup("SHOECART_DB_PATH") {
            config.db_path = Some(PathBuf::from(path));
        }

        if let Some(key) = lookup("SHOECART_STORAGE_KEY") {
            if key.is_empty() {
                return Err(AppError::Config(
                    "SHOECART_STORAGE_KEY must not be empty".to_string(),
                ));
            }
            config.storage_key = key;
        }

        if let Some(locale) = lookup("SHOECART_LOCALE") {
            config.locale = locale.parse().map_err(AppError::Config)?;
        }

        Ok(config)
    }

    /// Settings for the catalog client.
    pub fn catalog(&self) -> CatalogConfig {
        CatalogConfig::new(self.api_url.clone()).timeout(self.timeout)
    }

    /// Toast texts for the configured locale.
    pub fn messages(&self) -> Messages {
        Messages::for_locale(self.locale)
    }

    /// Formats an amount in reais for the configured locale.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let config = AppConfig::default();
    /// assert_eq!(config.format_currency(Money::from_cents(13990)), "R$ 139,90");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        let cents = amount.cents();
        let whole = (cents / 100).unsigned_abs();
        let frac = (cents % 100).unsigned_abs();
        let sign = if cents < 0 { "-" } else { "" };

        match self.locale {
            Locale::PtBr => format!("{}R$ {},{:02}", sign, group_thousands(whole, '.'), frac),
            Locale::En => format!("{}R${}.{:02}", sign, group_thousands(whole, ','), frac),
        }
    }
}

fn group_thousands(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }

    out
}
