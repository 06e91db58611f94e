//! # Storefront Configuration
//!
//! Configuration management for the storefront services.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     SHOPKIT_BASE_CURRENCY=EUR                                          │
//! │     SHOPKIT_OPEN_TIME=09:00:00                                         │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/shopkit/storefront.toml (Linux)                          │
//! │     ~/Library/Application Support/com.shopkit.shopkit/... (macOS)      │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     5-15 char usernames, 08:00-20:00, Dec 25 at 20%, USD               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # storefront.toml
//! [rules.username]
//! min_len = 5
//! max_len = 15
//!
//! [rules.hours]
//! open = "08:00:00"
//! close = "20:00:00"
//!
//! [rules.seasonal]
//! month = 12
//! day = 25
//! rate = 0.2
//!
//! [rules.driving]
//! US = 16
//! UK = 17
//!
//! [currency]
//! base = "USD"
//!
//! [analytics]
//! home_path = "/home"
//!
//! [email]
//! welcome_subject = "Welcome aboard!"
//! ```

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use shopkit_core::{BusinessHours, DrivingAgeTable, SeasonalDiscount, UsernamePolicy};
use std::path::PathBuf;
use tracing::{debug, info, warn};

use crate::error::{ServiceError, ServiceResult};

// =============================================================================
// Rule Settings
// =============================================================================

/// Business rule parameters handed to shopkit-core.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleSettings {
    /// Accepted username lengths.
    #[serde(default)]
    pub username: UsernamePolicy,

    /// Daily opening window.
    #[serde(default)]
    pub hours: BusinessHours,

    /// Yearly one-day discount.
    #[serde(default)]
    pub seasonal: SeasonalDiscount,

    /// Minimum driving age per country.
    #[serde(default)]
    pub driving: DrivingAgeTable,
}

// =============================================================================
// Currency Settings
// =============================================================================

/// Currency used for catalog prices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencySettings {
    /// ISO 4217 code prices are stored in.
    #[serde(default = "default_base_currency")]
    pub base: String,
}

fn default_base_currency() -> String {
    "USD".to_string()
}

impl Default for CurrencySettings {
    fn default() -> Self {
        CurrencySettings {
            base: default_base_currency(),
        }
    }
}

// =============================================================================
// Analytics Settings
// =============================================================================

/// Page identifiers reported to analytics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsSettings {
    /// Path reported when the home page renders.
    #[serde(default = "default_home_path")]
    pub home_path: String,
}

fn default_home_path() -> String {
    "/home".to_string()
}

impl Default for AnalyticsSettings {
    fn default() -> Self {
        AnalyticsSettings {
            home_path: default_home_path(),
        }
    }
}

// =============================================================================
// Email Settings
// =============================================================================

/// Subjects used for outgoing email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailSettings {
    /// Subject of the sign-up welcome email.
    #[serde(default = "default_welcome_subject")]
    pub welcome_subject: String,
}

fn default_welcome_subject() -> String {
    "Welcome aboard!".to_string()
}

impl Default for EmailSettings {
    fn default() -> Self {
        EmailSettings {
            welcome_subject: default_welcome_subject(),
        }
    }
}

// =============================================================================
// Main Storefront Configuration
// =============================================================================

/// Complete storefront configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Business rule parameters.
    #[serde(default)]
    pub rules: RuleSettings,

    /// Currency settings.
    #[serde(default)]
    pub currency: CurrencySettings,

    /// Analytics settings.
    #[serde(default)]
    pub analytics: AnalyticsSettings,

    /// Email settings.
    #[serde(default)]
    pub email: EmailSettings,
}

impl StorefrontConfig {
    /// Creates a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (storefront.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ServiceResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading storefront config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = Self::from_toml(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load storefront config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Parses a TOML document. Missing sections fall back to defaults.
    pub fn from_toml(contents: &str) -> ServiceResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> ServiceResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| ServiceError::ConfigSaveFailed("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ServiceError::ConfigSaveFailed(e.to_string()))?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents).map_err(|e| ServiceError::ConfigSaveFailed(e.to_string()))?;

        info!(?path, "Storefront config saved");
        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ServiceResult<()> {
        let username = &self.rules.username;
        if username.min_len > username.max_len {
            return Err(ServiceError::InvalidConfig(format!(
                "username min_len ({}) exceeds max_len ({})",
                username.min_len, username.max_len
            )));
        }

        let hours = &self.rules.hours;
        if hours.open > hours.close {
            return Err(ServiceError::InvalidConfig(format!(
                "opening time {} is after closing time {}",
                hours.open, hours.close
            )));
        }

        let seasonal = &self.rules.seasonal;
        if !(seasonal.rate > 0.0 && seasonal.rate < 1.0) {
            return Err(ServiceError::InvalidConfig(format!(
                "seasonal rate must be between 0 and 1, got {}",
                seasonal.rate
            )));
        }
        // 2000 is a leap year, so Feb 29 is accepted
        if NaiveDate::from_ymd_opt(2000, seasonal.month, seasonal.day).is_none() {
            return Err(ServiceError::InvalidConfig(format!(
                "seasonal day {}/{} is not a calendar day",
                seasonal.month, seasonal.day
            )));
        }

        if self.rules.driving.is_empty() {
            return Err(ServiceError::InvalidConfig(
                "driving age table must have at least one country".into(),
            ));
        }

        let base = &self.currency.base;
        if base.len() != 3 || !base.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(ServiceError::InvalidConfig(format!(
                "base currency must be a three-letter code, got '{}'",
                base
            )));
        }

        if !self.analytics.home_path.starts_with('/') {
            return Err(ServiceError::InvalidConfig(format!(
                "home_path must start with '/', got '{}'",
                self.analytics.home_path
            )));
        }

        Ok(())
    }

    /// Applies environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(base) = std::env::var("SHOPKIT_BASE_CURRENCY") {
            debug!(currency = %base, "Overriding base currency from environment");
            self.currency.base = base.to_ascii_uppercase();
        }

        if let Ok(path) = std::env::var("SHOPKIT_HOME_PATH") {
            self.analytics.home_path = path;
        }

        if let Ok(open) = std::env::var("SHOPKIT_OPEN_TIME") {
            match open.parse::<NaiveTime>() {
                Ok(t) => self.rules.hours.open = t,
                Err(_) => warn!(value = %open, "Ignoring unparseable SHOPKIT_OPEN_TIME"),
            }
        }

        if let Ok(close) = std::env::var("SHOPKIT_CLOSE_TIME") {
            match close.parse::<NaiveTime>() {
                Ok(t) => self.rules.hours.close = t,
                Err(_) => warn!(value = %close, "Ignoring unparseable SHOPKIT_CLOSE_TIME"),
            }
        }

        if let Ok(min) = std::env::var("SHOPKIT_USERNAME_MIN") {
            match min.parse::<usize>() {
                Ok(n) => self.rules.username.min_len = n,
                Err(_) => warn!(value = %min, "Ignoring unparseable SHOPKIT_USERNAME_MIN"),
            }
        }

        if let Ok(max) = std::env::var("SHOPKIT_USERNAME_MAX") {
            match max.parse::<usize>() {
                Ok(n) => self.rules.username.max_len = n,
                Err(_) => warn!(value = %max, "Ignoring unparseable SHOPKIT_USERNAME_MAX"),
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "shopkit", "shopkit")
            .map(|dirs| dirs.config_dir().join("storefront.toml"))
    }
}
