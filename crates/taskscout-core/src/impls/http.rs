//! Response handling for the marketplace client.
//!
//! Every endpoint goes status check → body text → JSON decode. Each step maps
//! to its own [`ScoutError`] variant so callers can tell a throttled request
//! from a broken payload.

use reqwest::StatusCode;
use reqwest::header::{HeaderMap, RETRY_AFTER};
use serde::de::DeserializeOwned;

use crate::error::ScoutError;

/// Used when a 429 carries no usable `Retry-After`.
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// Seconds from a `Retry-After` header. Only the delta-seconds form is understood.
fn retry_after_secs(headers: &HeaderMap) -> u64 {
    headers
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(DEFAULT_RETRY_AFTER_SECS)
}

/// Pass 2xx responses through; turn everything else into an error.
pub async fn ensure_success(resp: reqwest::Response) -> Result<reqwest::Response, ScoutError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(ScoutError::RateLimited {
            retry_after_secs: retry_after_secs(resp.headers()),
        });
    }
    Err(ScoutError::Api {
        status: status.as_u16(),
        message: resp.text().await.unwrap_or_default(),
    })
}

/// Decode a JSON body; `what` names the payload in the error.
pub fn decode<T: DeserializeOwned>(body: &str, what: &str) -> Result<T, ScoutError> {
    serde_json::from_str(body).map_err(|e| ScoutError::Parse(format!("{what}: {e}")))
}

/// [`ensure_success`], then read and [`decode`] the body.
pub async fn read_json<T: DeserializeOwned>(
    resp: reqwest::Response,
    what: &str,
) -> Result<T, ScoutError> {
    let body = ensure_success(resp).await?.text().await?;
    decode(&body, what)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;
    use rstest::rstest;

    fn response(status: u16, headers: &[(&str, &str)], body: &'static str) -> reqwest::Response {
        let mut builder = ::http::Response::builder().status(status);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        reqwest::Response::from(builder.body(body).unwrap())
    }

    #[rstest]
    #[case::seconds(Some("120"), 120)]
    #[case::padded(Some(" 15 "), 15)]
    #[case::http_date(Some("Wed, 21 Oct 2026 07:28:00 GMT"), 60)]
    #[case::missing(None, 60)]
    fn retry_after_header(#[case] value: Option<&str>, #[case] expected: u64) {
        let mut headers = HeaderMap::new();
        if let Some(v) = value {
            headers.insert(RETRY_AFTER, HeaderValue::from_str(v).unwrap());
        }
        assert_eq!(retry_after_secs(&headers), expected);
    }

    #[tokio::test]
    async fn throttled_request_is_rate_limited() {
        let err = ensure_success(response(429, &[("Retry-After", "30")], ""))
            .await
            .unwrap_err();
        assert!(matches!(err, ScoutError::RateLimited { retry_after_secs: 30 }));
    }

    #[tokio::test]
    async fn non_success_carries_status_and_body() {
        let err = ensure_success(response(404, &[], "no such task"))
            .await
            .unwrap_err();
        assert!(
            matches!(err, ScoutError::Api { status: 404, ref message } if message == "no such task")
        );
    }

    #[tokio::test]
    async fn read_json_decodes_success_body() {
        let value: serde_json::Value = read_json(response(200, &[], r#"{"rep": 3}"#), "profile")
            .await
            .unwrap();
        assert_eq!(value["rep"], 3);
    }

    #[tokio::test]
    async fn read_json_names_the_payload_on_bad_body() {
        let err = read_json::<serde_json::Value>(response(200, &[], "<html>"), "profile")
            .await
            .unwrap_err();
        assert!(matches!(err, ScoutError::Parse(ref m) if m.starts_with("profile: ")));
    }

    #[tokio::test]
    async fn read_json_checks_status_first() {
        let err = read_json::<serde_json::Value>(response(503, &[], "{}"), "task list")
            .await
            .unwrap_err();
        assert!(matches!(err, ScoutError::Api { status: 503, .. }));
    }
}
