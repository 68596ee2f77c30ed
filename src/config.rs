//! Build-time Configuration
//!
//! Values come from environment variables read at compile time
//! (`PORTFOLIO_API_BASE_URL=... trunk build`), with local defaults.

use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "http://localhost:8080";
pub const REQUEST_TIMEOUT: Duration = Duration::from_millis(15_000);

/// Outbound contact links
#[derive(Clone, Debug, PartialEq)]
pub struct Links {
    pub mailto: String,
    pub linkedin: String,
    pub github: String,
    pub youtube: String,
}

impl Default for Links {
    fn default() -> Self {
        Self {
            mailto: env_or(option_env!("PORTFOLIO_MAILTO"), "mailto:hello@example.com"),
            linkedin: env_or(option_env!("PORTFOLIO_LINKEDIN"), "https://www.linkedin.com/"),
            github: env_or(option_env!("PORTFOLIO_GITHUB"), "https://github.com/"),
            youtube: env_or(option_env!("PORTFOLIO_YOUTUBE"), "https://www.youtube.com/"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Normalized REST base, always ending in `/api`
    pub api_base_url: String,
    pub request_timeout: Duration,
    pub links: Links,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            api_base_url: normalize_base_url(option_env!("PORTFOLIO_API_BASE_URL")),
            request_timeout: REQUEST_TIMEOUT,
            links: Links::default(),
        }
    }
}

fn env_or(value: Option<&str>, default: &str) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => default.to_string(),
    }
}

/// Accept `http://host` or `http://host/api` (any trailing slashes) and
/// always return the form ending in `/api`.
pub fn normalize_base_url(raw: Option<&str>) -> String {
    let raw = raw.map(str::trim).filter(|s| !s.is_empty()).unwrap_or(DEFAULT_API_BASE);
    let base = raw.trim_end_matches('/');
    if base.ends_with("/api") {
        base.to_string()
    } else {
        format!("{}/api", base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_adds_api_suffix_once() {
        assert_eq!(normalize_base_url(Some("http://x/api")), "http://x/api");
        assert_eq!(normalize_base_url(Some("http://x")), "http://x/api");
        assert_eq!(normalize_base_url(Some("http://x///")), "http://x/api");
        assert_eq!(normalize_base_url(Some("http://x/api/")), "http://x/api");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize_base_url(Some("https://portfolio.example.com"));
        assert_eq!(normalize_base_url(Some(&once)), once);
    }

    #[test]
    fn test_normalize_defaults_when_unset() {
        assert_eq!(normalize_base_url(None), "http://localhost:8080/api");
        assert_eq!(normalize_base_url(Some("  ")), "http://localhost:8080/api");
    }

    #[test]
    fn test_env_or_falls_back_on_blank() {
        assert_eq!(env_or(Some(""), "d"), "d");
        assert_eq!(env_or(Some(" v "), "d"), "v");
        assert_eq!(env_or(None, "d"), "d");
    }
}
