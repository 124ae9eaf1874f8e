//! Runtime configuration for the catalog front-end.
//!
//! # Design
//! - Defaults reproduce the stock deployment (local API, six cards per page).
//! - Overrides are baked in at build time; parsing goes through a lookup closure so it
//!   can be exercised without touching the compile environment.
//! - Validation is explicit and reports the offending field.

use thiserror::Error;

/// Default API root used when no override is supplied.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";
/// Default number of products revealed per page.
pub const DEFAULT_PAGE_SIZE: usize = 6;
/// Default quiet period before a search is dispatched, in milliseconds.
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u32 = 500;
/// Default sentinel visibility ratio that requests the next page.
pub const DEFAULT_SCROLL_THRESHOLD: f64 = 0.5;
/// Storage key under which the bearer token is persisted.
pub const DEFAULT_TOKEN_STORAGE_KEY: &str = "token";
/// Placeholder shown for products without (or with a broken) image.
pub const DEFAULT_FALLBACK_IMAGE_URL: &str = "https://via.placeholder.com/150";
/// Default log verbosity.
pub const DEFAULT_LOG_LEVEL: &str = "info";

const MAX_PAGE_SIZE: usize = 500;
const MAX_SEARCH_DEBOUNCE_MS: u32 = 10_000;
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Errors raised while reading or validating configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Field contained an unusable value.
    #[error("invalid value '{value}' for '{field}': {reason}")]
    InvalidField {
        /// Configuration key that failed.
        field: &'static str,
        /// Offending raw value.
        value: String,
        /// Machine-readable reason for the failure.
        reason: &'static str,
    },
}

/// Effective configuration for one app boot.
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogConfig {
    /// API root without a trailing slash.
    pub api_base_url: String,
    /// Products per client-side page.
    pub page_size: usize,
    /// Search debounce window in milliseconds.
    pub search_debounce_ms: u32,
    /// Sentinel visibility ratio (0, 1] that triggers the next page.
    pub scroll_threshold: f64,
    /// Key used for token persistence.
    pub token_storage_key: String,
    /// Image shown when a product has none or it fails to load.
    pub fallback_image_url: String,
    /// Log verbosity (`trace` through `error`).
    pub log_level: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
            scroll_threshold: DEFAULT_SCROLL_THRESHOLD,
            token_storage_key: DEFAULT_TOKEN_STORAGE_KEY.to_string(),
            fallback_image_url: DEFAULT_FALLBACK_IMAGE_URL.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl CatalogConfig {
    /// Resolve configuration from variables captured at compile time.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when an override is present but invalid.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| {
            let value = match key {
                "CATALOG_API_BASE_URL" => option_env!("CATALOG_API_BASE_URL"),
                "CATALOG_PAGE_SIZE" => option_env!("CATALOG_PAGE_SIZE"),
                "CATALOG_SEARCH_DEBOUNCE_MS" => option_env!("CATALOG_SEARCH_DEBOUNCE_MS"),
                "CATALOG_SCROLL_THRESHOLD" => option_env!("CATALOG_SCROLL_THRESHOLD"),
                "CATALOG_LOG_LEVEL" => option_env!("CATALOG_LOG_LEVEL"),
                _ => None,
            };
            value.map(str::to_string)
        })
    }

    /// Resolve configuration from an arbitrary key lookup, then validate it.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when a supplied value cannot be parsed or fails validation.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        if let Some(url) = read("CATALOG_API_BASE_URL") {
            config.api_base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(raw) = read("CATALOG_PAGE_SIZE") {
            config.page_size = raw.parse().map_err(|_| ConfigError::InvalidField {
                field: "CATALOG_PAGE_SIZE",
                value: raw.clone(),
                reason: "must be a positive integer",
            })?;
        }
        if let Some(raw) = read("CATALOG_SEARCH_DEBOUNCE_MS") {
            config.search_debounce_ms = raw.parse().map_err(|_| ConfigError::InvalidField {
                field: "CATALOG_SEARCH_DEBOUNCE_MS",
                value: raw.clone(),
                reason: "must be an integer number of milliseconds",
            })?;
        }
        if let Some(raw) = read("CATALOG_SCROLL_THRESHOLD") {
            config.scroll_threshold = raw.parse().map_err(|_| ConfigError::InvalidField {
                field: "CATALOG_SCROLL_THRESHOLD",
                value: raw.clone(),
                reason: "must be a number",
            })?;
        }
        if let Some(level) = read("CATALOG_LOG_LEVEL") {
            config.log_level = level.to_ascii_lowercase();
        }

        config.validate()?;
        Ok(config)
    }

    /// Check every field against its accepted range.
    ///
    /// # Errors
    /// Returns the first [`ConfigError`] encountered.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.api_base_url.as_str();
        if !(url.starts_with("http://") || url.starts_with("https://") || url.starts_with('/')) {
            return Err(ConfigError::InvalidField {
                field: "CATALOG_API_BASE_URL",
                value: url.to_string(),
                reason: "must be an absolute http(s) URL or a root-relative path",
            });
        }
        if self.page_size == 0 || self.page_size > MAX_PAGE_SIZE {
            return Err(ConfigError::InvalidField {
                field: "CATALOG_PAGE_SIZE",
                value: self.page_size.to_string(),
                reason: "must be between 1 and 500",
            });
        }
        if self.search_debounce_ms > MAX_SEARCH_DEBOUNCE_MS {
            return Err(ConfigError::InvalidField {
                field: "CATALOG_SEARCH_DEBOUNCE_MS",
                value: self.search_debounce_ms.to_string(),
                reason: "must not exceed 10000",
            });
        }
        if !self.scroll_threshold.is_finite()
            || self.scroll_threshold <= 0.0
            || self.scroll_threshold > 1.0
        {
            return Err(ConfigError::InvalidField {
                field: "CATALOG_SCROLL_THRESHOLD",
                value: self.scroll_threshold.to_string(),
                reason: "must be within (0, 1]",
            });
        }
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(ConfigError::InvalidField {
                field: "CATALOG_LOG_LEVEL",
                value: self.log_level.clone(),
                reason: "must be one of trace, debug, info, warn, error",
            });
        }
        Ok(())
    }
}
