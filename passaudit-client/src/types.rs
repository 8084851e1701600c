//! Wire types for the scoring service.

use serde::{Deserialize, Serialize};

use crate::error::RequestError;

/// Highest score the service may report.
pub const MAX_RISK_SCORE: u8 = 100;

/// A single named pass/fail criterion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Check {
    pub name: String,
    pub passed: bool,
    /// Optional explanation supplied alongside the verdict.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Check {
    pub fn new(name: impl Into<String>, passed: bool) -> Self {
        Self {
            name: name.into(),
            passed,
            message: None,
        }
    }
}

/// Assessment returned by `POST /check`.
///
/// Created fresh for every successful response and never merged with a
/// previous one. Extra fields sent by the service (including any echo of the
/// submitted password) are dropped during deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentResult {
    /// 0..=100.
    pub risk_score: u8,
    pub risk_level: String,
    /// Applied verbatim to every colored element of the report.
    pub risk_color: String,
    pub checks: Vec<Check>,
    pub issues: Vec<String>,
    pub recommendations: Vec<String>,
    /// Displayed as-is; the service may count differently than it lists.
    pub issue_count: u32,
}

impl AssessmentResult {
    /// Decode a success body, rejecting anything that is not a well-formed
    /// assessment.
    pub fn from_json(body: &[u8]) -> Result<Self, RequestError> {
        let result: Self = serde_json::from_slice(body).map_err(RequestError::malformed)?;
        if result.risk_score > MAX_RISK_SCORE {
            return Err(RequestError::malformed(format!(
                "risk_score {} is outside 0..={}",
                result.risk_score, MAX_RISK_SCORE
            )));
        }
        Ok(result)
    }
}
