//! REST Data Service
//!
//! Read-only GETs against the portfolio backend. One attempt per call, no
//! caching, bounded by the configured timeout.

mod content;
mod error;

use std::time::Duration;

use futures_util::future::{select, Either};
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;

use crate::config::AppConfig;

pub use error::ApiError;

pub const SKILLS_PATH: &str = "/skills";
pub const PROJECTS_PATH: &str = "/projects";
pub const CERTIFICATIONS_PATH: &str = "/certifications";
pub const AWARDS_PATH: &str = "/awards";

#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    timeout: Duration,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            base_url: config.api_base_url.clone(),
            timeout: config.request_timeout,
            http: reqwest::Client::new(),
        }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET `path` and decode a JSON list, failing with `Timeout` if no
    /// response arrives in time.
    pub async fn get_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, ApiError> {
        let millis = self.timeout.as_millis() as u64;
        let request = Box::pin(self.get_text(path));
        let timer = Box::pin(TimeoutFuture::new(millis.min(u32::MAX as u64) as u32));

        let (status, body) = match select(request, timer).await {
            Either::Left((result, _)) => result?,
            Either::Right(_) => return Err(ApiError::Timeout { millis }),
        };
        decode_list(status, &body)
    }

    async fn get_text(&self, path: &str) -> Result<(u16, String), ApiError> {
        let url = self.endpoint(path);
        log::debug!("GET {}", url);

        let response = self.http.get(&url).send().await.map_err(|err| {
            log::debug!("GET {} failed: {}", url, err);
            ApiError::Unreachable
        })?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|err| ApiError::Decode(err.to_string()))?;
        Ok((status, body))
    }
}

/// Map a raw response to a list or the matching error.
pub fn decode_list<T: DeserializeOwned>(status: u16, body: &str) -> Result<Vec<T>, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::from_response(status, body));
    }
    serde_json::from_str(body).map_err(|err| ApiError::Decode(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Project, Skill};

    #[test]
    fn test_endpoint_joins_normalized_base() {
        let config = AppConfig {
            api_base_url: crate::config::normalize_base_url(Some("http://x/")),
            ..AppConfig::from_env()
        };
        let client = ApiClient::new(&config);
        assert_eq!(client.endpoint(SKILLS_PATH), "http://x/api/skills");
        assert_eq!(client.endpoint(AWARDS_PATH), "http://x/api/awards");
    }

    #[test]
    fn test_decode_success() {
        let skills: Vec<Skill> =
            decode_list(200, r#"[{"name": "Rust", "level": "Advanced", "category": "Languages"}]"#).unwrap();
        assert_eq!(skills.len(), 1);
        assert_eq!(skills[0].name, "Rust");
    }

    #[test]
    fn test_decode_empty_list_is_ok() {
        let projects: Vec<Project> = decode_list(200, "[]").unwrap();
        assert!(projects.is_empty());
    }

    #[test]
    fn test_decode_error_status() {
        let err = decode_list::<Skill>(500, r#"{"message": "boom"}"#).unwrap_err();
        assert_eq!(err, ApiError::Status { status: 500, message: "boom".into() });
    }

    #[test]
    fn test_decode_bad_body() {
        let err = decode_list::<Skill>(200, "<html>").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
        let err = decode_list::<Skill>(200, r#"{"name": "not a list"}"#).unwrap_err();
        assert!(err.to_string().starts_with("Invalid response body: "));
    }
}
