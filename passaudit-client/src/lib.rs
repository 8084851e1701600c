//! Client side of the passaudit scoring contract.
//!
//! This crate provides:
//! - [`AssessmentResult`], the assessment returned by the scoring service
//! - [`Assessor`], the submission seam used by the terminal controller
//! - [`AssessmentClient`], the HTTP implementation talking to `POST /check`
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   {"password": ..}    ┌──────────────────┐
//! │  Assessment  │ ────────────────────▶ │  scoring service │
//! │    Client    │ ◀──────────────────── │   POST /check    │
//! └──────────────┘  AssessmentResult or  └──────────────────┘
//!                   {"error": ..}
//! ```
//!
//! The scoring logic itself lives entirely behind the service boundary.

mod client;
mod error;
mod types;

pub use client::{
    AssessmentClient, Assessor, CHECK_PATH, DEFAULT_BASE_URL, validate_password,
};
pub use error::{Error, RequestError, RequestErrorKind, Result, ValidationError};
pub use types::{AssessmentResult, Check, MAX_RISK_SCORE};

// Re-exported so callers can build submissions without naming secrecy themselves.
pub use secrecy::{ExposeSecret, SecretString};
