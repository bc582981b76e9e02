//! Application configuration.
//!
//! The browser app has no runtime configuration surface; the API base URL
//! may be overridden at build time through the `COUNTRYDEX_API_BASE_URL`
//! environment variable.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Default countries API endpoint.
pub const DEFAULT_API_BASE_URL: &str = "https://restcountries.com/v3.1";

/// Rows shown per table page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Quiescence interval applied to the search value, in milliseconds.
pub const DEFAULT_SEARCH_DELAY_MS: u64 = 500;

/// `KeyboardEvent.code` that focuses the search input when pressed with Ctrl.
pub const DEFAULT_HOTKEY_CODE: &str = "KeyK";

/// Main configuration structure for the app.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Countries API base URL, without a trailing slash.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Rows per table page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Debounce interval for the search value, in milliseconds.
    #[serde(default = "default_search_delay_ms")]
    pub search_delay_ms: u64,

    /// Key code of the search-focus hotkey.
    #[serde(default = "default_hotkey_code")]
    pub hotkey_code: String,
}

// Default value functions
fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_search_delay_ms() -> u64 {
    DEFAULT_SEARCH_DELAY_MS
}

fn default_hotkey_code() -> String {
    DEFAULT_HOTKEY_CODE.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            page_size: default_page_size(),
            search_delay_ms: default_search_delay_ms(),
            hotkey_code: default_hotkey_code(),
        }
    }
}

impl AppConfig {
    /// Configuration with the build-time base URL override applied.
    #[must_use]
    pub fn from_build_env() -> Self {
        let mut config = Self::default();
        if let Some(base_url) = option_env!("COUNTRYDEX_API_BASE_URL") {
            config.api_base_url = base_url.trim_end_matches('/').to_string();
        }
        config
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.api_base_url.is_empty() {
            return Err(CoreError::config("api_base_url cannot be empty"));
        }

        if self.page_size == 0 {
            return Err(CoreError::config("page_size must be at least 1"));
        }

        if self.api_base_url.ends_with('/') {
            log::warn!("api_base_url should not have a trailing slash");
        }

        Ok(())
    }
}
