#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::adapters::http::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECONDS};
use crate::core::controller::{ERROR_DISMISS_DELAY, SUCCESS_DISMISS_DELAY};
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, validate_url, Validate};
use serde::{Deserialize, Serialize};
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

/// Resolved settings: defaults, then the TOML file, then explicit overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub base_url: String,
    pub timeout_seconds: u64,
    pub success_dismiss_ms: u64,
    pub error_dismiss_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            success_dismiss_ms: SUCCESS_DISMISS_DELAY.as_millis() as u64,
            error_dismiss_ms: ERROR_DISMISS_DELAY.as_millis() as u64,
        }
    }
}

impl Settings {
    pub fn merge_toml(mut self, file: &TomlConfig) -> Self {
        if let Some(url) = &file.endpoint.base_url {
            self.base_url = url.clone();
        }
        if let Some(timeout) = file.endpoint.timeout_seconds {
            self.timeout_seconds = timeout;
        }
        if let Some(ms) = file.dismiss.success_ms {
            self.success_dismiss_ms = ms;
        }
        if let Some(ms) = file.dismiss.error_ms {
            self.error_dismiss_ms = ms;
        }
        self
    }
}

impl ConfigProvider for Settings {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }

    fn success_dismiss_ms(&self) -> u64 {
        self.success_dismiss_ms
    }

    fn error_dismiss_ms(&self) -> u64 {
        self.error_dismiss_ms
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        validate_positive_number("timeout_seconds", self.timeout_seconds, 1)?;
        validate_positive_number("success_dismiss_ms", self.success_dismiss_ms, 1)?;
        validate_positive_number("error_dismiss_ms", self.error_dismiss_ms, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_backend() {
        let settings = Settings::default();
        assert_eq!(settings.base_url, "https://mail-smtp-backend.vercel.app");
        assert_eq!(settings.success_dismiss_ms, 3000);
        assert_eq!(settings.error_dismiss_ms, 5000);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_toml_overrides_only_given_keys() {
        let file = TomlConfig::from_toml_str("[dismiss]\nsuccess_ms = 100\n").unwrap();
        let settings = Settings::default().merge_toml(&file);

        assert_eq!(settings.success_dismiss_ms, 100);
        assert_eq!(settings.error_dismiss_ms, 5000);
        assert_eq!(settings.base_url, DEFAULT_BASE_URL);
    }
}
