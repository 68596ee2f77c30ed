//! API Errors
//!
//! Every failure mode of a GET, with `Display` giving the normalized
//! developer-facing message.

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Non-2xx response
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// No response at all (offline, CORS, wrong host)
    #[error("Network Error: Backend not reachable (check backend is running + CORS + URL)")]
    Unreachable,

    #[error("Network Error: request timed out after {millis} ms")]
    Timeout { millis: u64 },

    /// 2xx response whose body is not the expected JSON
    #[error("Invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build a `Status` error, pulling the message out of the response body.
    pub fn from_response(status: u16, body: &str) -> Self {
        ApiError::Status {
            status,
            message: backend_message(body).unwrap_or_else(|| "Request failed".to_string()),
        }
    }
}

/// Plain string body, else JSON `message`, else JSON `error`. Numeric and
/// boolean messages are printed as-is.
fn backend_message(body: &str) -> Option<String> {
    let non_empty = |s: &str| {
        let s = s.trim();
        (!s.is_empty()).then(|| s.to_string())
    };
    match serde_json::from_str::<Value>(body) {
        Ok(Value::String(s)) => non_empty(&s),
        Ok(Value::Object(map)) => ["message", "error"]
            .iter()
            .find_map(|key| match map.get(*key)? {
                Value::String(s) => non_empty(s.as_str()),
                value @ (Value::Number(_) | Value::Bool(_)) => Some(value.to_string()),
                _ => None,
            }),
        Ok(_) => None,
        Err(_) => non_empty(body),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_uses_json_message() {
        let err = ApiError::from_response(500, r#"{"message": "db down", "error": "ignored"}"#);
        assert_eq!(err.to_string(), "HTTP 500: db down");
    }

    #[test]
    fn test_status_falls_back_to_error_field() {
        let err = ApiError::from_response(404, r#"{"error": "Not Found", "status": 404}"#);
        assert_eq!(err.to_string(), "HTTP 404: Not Found");
    }

    #[test]
    fn test_status_plain_text_body() {
        assert_eq!(ApiError::from_response(502, "Bad Gateway").to_string(), "HTTP 502: Bad Gateway");
        assert_eq!(ApiError::from_response(400, r#""nope""#).to_string(), "HTTP 400: nope");
    }

    #[test]
    fn test_status_scalar_message() {
        assert_eq!(ApiError::from_response(500, r#"{"message": 123}"#).to_string(), "HTTP 500: 123");
        assert_eq!(ApiError::from_response(500, r#"{"error": true}"#).to_string(), "HTTP 500: true");
        assert_eq!(
            ApiError::from_response(500, r#"{"message": null, "error": "fallback"}"#).to_string(),
            "HTTP 500: fallback"
        );
    }

    #[test]
    fn test_status_without_message() {
        assert_eq!(ApiError::from_response(503, "").to_string(), "HTTP 503: Request failed");
        assert_eq!(ApiError::from_response(500, "{}").to_string(), "HTTP 500: Request failed");
        assert_eq!(ApiError::from_response(500, "[1,2]").to_string(), "HTTP 500: Request failed");
    }

    #[test]
    fn test_network_messages() {
        assert_eq!(
            ApiError::Unreachable.to_string(),
            "Network Error: Backend not reachable (check backend is running + CORS + URL)"
        );
        assert_eq!(
            ApiError::Timeout { millis: 15_000 }.to_string(),
            "Network Error: request timed out after 15000 ms"
        );
        assert_eq!(
            ApiError::Decode("expected value".into()).to_string(),
            "Invalid response body: expected value"
        );
    }
}
