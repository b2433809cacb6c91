//! Client configuration

use std::path::PathBuf;

/// Production backend used when nothing else is configured
pub const DEFAULT_API_BASE: &str = "https://project-backend-qqbo.onrender.com";

/// Path prefix of every API route on the backend host
pub const API_PREFIX: &str = "/api";

/// Client configuration for connecting to the café backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend host (e.g., "http://localhost:5000"), without the `/api` prefix
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Storage file; `None` keeps everything in memory
    pub storage_path: Option<PathBuf>,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: 30,
            storage_path: None,
        }
    }

    /// Load from the environment (and `.env`, if present)
    ///
    /// * `CAFE_API_URL` - backend host
    /// * `CAFE_TIMEOUT_SECS` - request timeout
    /// * `CAFE_STORAGE_PATH` - storage file
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();

        let mut config = Self::new(
            std::env::var("CAFE_API_URL").unwrap_or_else(|_| DEFAULT_API_BASE.into()),
        );
        if let Some(timeout) = std::env::var("CAFE_TIMEOUT_SECS")
            .ok()
            .and_then(|t| t.parse().ok())
        {
            config.timeout = timeout;
        }
        config.storage_path = std::env::var("CAFE_STORAGE_PATH").ok().map(PathBuf::from);
        config
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Persist session and checkout state to this file
    pub fn with_storage_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.storage_path = Some(path.into());
        self
    }

    /// Root of the REST API (`<host>/api`)
    pub fn api_url(&self) -> String {
        format!("{}{}", self.base_url, API_PREFIX)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url() {
        let config = ClientConfig::new("http://localhost:5000/");
        assert_eq!(config.base_url, "http://localhost:5000");
        assert_eq!(config.api_url(), "http://localhost:5000/api");
    }

    #[test]
    fn test_builder() {
        let config = ClientConfig::default()
            .with_timeout(5)
            .with_storage_path("/tmp/cafe/storage.json");
        assert_eq!(config.timeout, 5);
        assert_eq!(config.base_url, DEFAULT_API_BASE);
        assert!(config.storage_path.is_some());
    }
}
