//! Build-time Configuration
//!
//! Values baked in by `trunk build` from the environment, with defaults for
//! local development.

/// API origin used when `CAREERS_API_URL` is not set at build time
const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// Storage key for the bearer token
pub const TOKEN_KEY: &str = "token";
/// Storage key for the signed-in user
pub const USER_KEY: &str = "user";

pub const LOGIN_ROUTE: &str = "/login";
pub const DASHBOARD_ROUTE: &str = "/dashboard";

/// How long a notice stays on screen
pub const NOTICE_TIMEOUT_MS: u32 = 4_000;

/// Rows per page for each admin list
pub mod page_size {
    pub const CATEGORIES: usize = 10;
    pub const COMPANIES: usize = 10;
    pub const JOBS: usize = 10;
    pub const MENTORS: usize = 5;
    pub const SKILLS: usize = 10;
    pub const TEAM: usize = 5;
}

/// Resolved configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Origin every endpoint path is appended to, without trailing slash
    pub api_url: String,
    pub log_level: log::Level,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_values(option_env!("CAREERS_API_URL"), option_env!("CAREERS_LOG_LEVEL"))
    }

    fn from_values(api_url: Option<&str>, log_level: Option<&str>) -> Self {
        let api_url = api_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_string();
        let log_level = log_level
            .and_then(|level| level.parse().ok())
            .unwrap_or(log::Level::Debug);
        Self { api_url, log_level }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_values(None, None);
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.log_level, log::Level::Debug);
    }

    #[test]
    fn test_overrides_are_normalised() {
        let config = AppConfig::from_values(Some(" https://api.example.com/v1/ "), Some("warn"));
        assert_eq!(config.api_url, "https://api.example.com/v1");
        assert_eq!(config.log_level, log::Level::Warn);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = AppConfig::from_values(Some(""), Some("loud"));
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.log_level, log::Level::Debug);
    }
}
