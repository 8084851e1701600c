//! HTTP client for the scoring service.

use std::time::Instant;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{RequestError, Result, ValidationError};
use crate::types::AssessmentResult;

/// Default service location (the scoring service's development port).
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Path of the assessment endpoint.
pub const CHECK_PATH: &str = "/check";

/// Reject input that must never reach the scoring service.
pub fn validate_password(password: &str) -> std::result::Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::EmptyPassword);
    }
    Ok(())
}

/// Anything that can turn a password into an assessment.
///
/// Implementations issue at most one request per call and never retry.
#[async_trait]
pub trait Assessor: Send + Sync {
    async fn submit(&self, password: &SecretString) -> Result<AssessmentResult>;
}

#[derive(Serialize)]
struct CheckRequest<'a> {
    password: &'a str,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// Assessment client speaking JSON over HTTP.
///
/// Applies no timeout of its own; deadlines are the caller's policy.
#[derive(Debug, Clone)]
pub struct AssessmentClient {
    base_url: String,
    client: reqwest::Client,
}

impl AssessmentClient {
    /// Create a client for [`DEFAULT_BASE_URL`].
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client for a custom base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the assessment endpoint.
    pub fn check_url(&self) -> String {
        format!("{}{}", self.base_url, CHECK_PATH)
    }
}

impl Default for AssessmentClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Assessor for AssessmentClient {
    async fn submit(&self, password: &SecretString) -> Result<AssessmentResult> {
        validate_password(password.expose_secret())?;

        let url = self.check_url();
        let started = Instant::now();
        debug!(%url, "submitting password for assessment");

        let response = self
            .client
            .post(&url)
            .json(&CheckRequest {
                password: password.expose_secret(),
            })
            .send()
            .await
            .map_err(|e| RequestError::transport(e.without_url().to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| RequestError::transport(e.without_url().to_string()))?;

        let elapsed_ms = started.elapsed().as_millis() as u64;

        if !status.is_success() {
            let error = serde_json::from_slice::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.error);
            let err = RequestError::rejected(status.as_u16(), error);
            warn!(
                %url,
                status = status.as_u16(),
                elapsed_ms,
                error = %err,
                "scoring service rejected assessment"
            );
            return Err(err.into());
        }

        let result = AssessmentResult::from_json(&body).inspect_err(|e| {
            warn!(%url, elapsed_ms, error = %e, "scoring service sent an unusable body");
        })?;

        info!(
            status = status.as_u16(),
            elapsed_ms,
            risk_score = result.risk_score,
            checks = result.checks.len(),
            "assessment received"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn new_uses_default_url() {
        let client = AssessmentClient::new();
        assert_eq!(client.base_url(), "http://127.0.0.1:5000");
        assert_eq!(client.check_url(), "http://127.0.0.1:5000/check");
    }

    #[test]
    fn trailing_slashes_are_trimmed() {
        let client = AssessmentClient::with_base_url("http://scoring.local:8080//");
        assert_eq!(client.check_url(), "http://scoring.local:8080/check");
    }

    #[test]
    fn validate_rejects_only_empty_input() {
        assert_eq!(validate_password(""), Err(ValidationError::EmptyPassword));
        assert!(validate_password(" ").is_ok());
        assert!(validate_password("Tr0ub4dor&3").is_ok());
    }

    #[test]
    fn request_body_carries_only_password() {
        let body = serde_json::to_value(CheckRequest { password: "abc" }).unwrap();
        assert_eq!(body, serde_json::json!({ "password": "abc" }));
    }

    #[tokio::test]
    async fn empty_password_fails_before_any_request() {
        // Nothing listens on this port; a request would surface as a transport error.
        let client = AssessmentClient::with_base_url("http://127.0.0.1:9");
        let err = client
            .submit(&SecretString::from(String::new()))
            .await
            .unwrap_err();
        assert_eq!(err, Error::Validation(ValidationError::EmptyPassword));
    }
}
