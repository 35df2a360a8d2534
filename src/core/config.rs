//! Application configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

use std::time::Duration;

/// Backend used when `API_URL` is not set
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the backend REST API, without trailing slash
    /// Example: https://api.universitas.gob.ve
    pub api_url: String,

    /// Upper bound for proxied backend calls, in seconds. `None` waits forever.
    pub backend_timeout_secs: Option<u64>,

    /// Mark auth cookies `Secure`
    pub secure_cookies: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (environment, test maps)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_url = lookup("API_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let backend_timeout_secs = lookup("BACKEND_TIMEOUT_SECS")
            .and_then(|secs| secs.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0);

        let production = lookup("LEPTOS_ENV").is_some_and(|env| env.eq_ignore_ascii_case("PROD"));
        let secure_cookies = lookup("SECURE_COOKIES")
            .and_then(|flag| parse_flag(&flag))
            .unwrap_or(production);

        Self {
            api_url,
            backend_timeout_secs,
            secure_cookies,
        }
    }

    pub fn backend_timeout(&self) -> Option<Duration> {
        self.backend_timeout_secs.map(Duration::from_secs)
    }

    /// Absolute backend URL for an API path such as `/entes`
    pub fn backend_url(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path.trim_start_matches('/'))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
