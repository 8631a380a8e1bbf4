//! Application configuration.
//!
//! Handles loading configuration from environment variables and .env files.

use dotenv::dotenv;
use std::env;
use std::time::Duration;

use crate::constants::api;
use crate::error::{Error, Result};

/// Configuration for every script: credentials, endpoints and pacing.
///
/// Built once per run and handed to [`crate::planning_center::PlanningCenterClient`];
/// nothing here is global.
#[derive(Debug, Clone)]
pub struct Config {
    /// The application name
    app_name: String,
    /// The application version
    app_version: String,
    /// `Planning Center` Online application ID
    pub pco_app_id: String,
    /// `Planning Center` Online secret
    pub pco_secret: String,
    /// Base URL of the People API
    pub people_url: String,
    /// Base URL of the Publishing API
    pub publishing_url: String,
    /// Page size requested from collection endpoints
    pub per_page: u32,
    /// Pause after each paginated request and each mutation
    pub request_delay: Duration,
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
            pco_app_id: String::new(),
            pco_secret: String::new(),
            people_url: api::PEOPLE_BASE_URL.to_string(),
            publishing_url: api::PUBLISHING_BASE_URL.to_string(),
            per_page: api::MAX_PER_PAGE,
            request_delay: Duration::from_millis(api::REQUEST_DELAY_MS),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();

        let mut config = Self::default();

        // Missing credentials are left empty; the API rejects them with a 401
        if let Ok(app_id) = env::var("PCO_APPLICATION_ID") {
            config.pco_app_id = app_id;
        }

        if let Ok(secret) = env::var("PCO_SECRET") {
            config.pco_secret = secret;
        }

        if let Ok(url) = env::var("PCO_PEOPLE_URL") {
            config.people_url = url.trim_end_matches('/').to_string();
        }

        if let Ok(url) = env::var("PCO_PUBLISHING_URL") {
            config.publishing_url = url.trim_end_matches('/').to_string();
        }

        if let Ok(delay) = env::var("PCO_REQUEST_DELAY_MS") {
            let millis = delay.parse::<u64>().map_err(|_| {
                Error::config(
                    format!("PCO_REQUEST_DELAY_MS is not a number: {delay:?}"),
                    "Use a whole number of milliseconds, e.g. 200",
                )
            })?;
            config.request_delay = Duration::from_millis(millis);
        }

        if let Ok(per_page) = env::var("PCO_PER_PAGE") {
            let per_page = per_page.parse::<u32>().map_err(|_| {
                Error::config(
                    format!("PCO_PER_PAGE is not a number: {per_page:?}"),
                    "Use a page size between 1 and 100",
                )
            })?;
            config.per_page = per_page.clamp(1, api::MAX_PER_PAGE);
        }

        Ok(config)
    }

    /// Check if `Planning Center` is configured
    pub const fn has_planning_center_credentials(&self) -> bool {
        !self.pco_app_id.is_empty() && !self.pco_secret.is_empty()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn defaults_match_api_limits() {
        let config = Config::default();
        assert_eq!(config.per_page, 100);
        assert_eq!(config.request_delay, Duration::from_millis(200));
        assert!(config.people_url.ends_with("/people/v2"));
        assert!(!config.has_planning_center_credentials());
    }
}
