//! Application configuration.
//!
//! Handles loading configuration from environment variables and .env files.

use dotenv::dotenv;
use std::env;

use crate::constants::{links, report};
use crate::error::Result;

/// Configuration for the application.
#[derive(Debug, Clone)]
pub struct Config {
    /// The application name
    app_name: String,
    /// The application version
    app_version: String,
    /// Scheduling page offered on the call-to-action slide
    pub scheduling_url: String,
    /// Simulated audit report generation delay, in milliseconds
    pub report_delay_ms: u64,
}

impl Config {
    /// Get the application name.
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Get the application version.
    #[must_use]
    pub fn app_version(&self) -> &str {
        &self.app_version
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: env!("CARGO_PKG_NAME").to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            scheduling_url: links::DEFAULT_SCHEDULING_URL.to_string(),
            report_delay_ms: report::DEFAULT_DELAY_MS,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    #[allow(clippy::unnecessary_wraps)] // Returns Result for forward-compatible API
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();

        let mut config = Self::default();

        if let Ok(url) = env::var("PITCHBOOK_SCHEDULING_URL") {
            if !url.trim().is_empty() {
                config.scheduling_url = url;
            }
        }

        if let Ok(delay) = env::var("PITCHBOOK_REPORT_DELAY_MS") {
            if let Ok(delay) = delay.parse::<u64>() {
                config.report_delay_ms = delay;
            }
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn defaults_match_constants() {
        let config = Config::default();
        assert_eq!(config.scheduling_url, links::DEFAULT_SCHEDULING_URL);
        assert_eq!(config.report_delay_ms, report::DEFAULT_DELAY_MS);
        assert_eq!(config.app_name(), "pitchbook");
    }
}
