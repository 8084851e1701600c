use std::time::Duration;

use passaudit_client::DEFAULT_BASE_URL;
use passaudit_tui::{ControllerConfig, DEFAULT_ERROR_CUE, DEFAULT_REQUEST_TIMEOUT};
use serde::{Deserialize, Serialize};

/// Default request deadline, in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = DEFAULT_REQUEST_TIMEOUT.as_secs();

/// Default lifetime of the empty-input cue, in milliseconds
pub const DEFAULT_ERROR_CUE_MS: u64 = DEFAULT_ERROR_CUE.as_millis() as u64;

/// Configuration as stored in TOML files (with optional fields for merging)
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawPassauditConfig {
    #[serde(default)]
    pub server: RawServerConfig,

    #[serde(default)]
    pub ui: RawUiConfig,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawServerConfig {
    /// Base URL of the scoring service
    pub url: Option<String>,

    /// Seconds to wait for an assessment
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawUiConfig {
    /// How long the input stays red after an empty submit
    pub error_cue_ms: Option<u64>,
}

/// Final configuration with defaults applied
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PassauditConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub url: String,
    pub timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    pub error_cue_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            error_cue_ms: DEFAULT_ERROR_CUE_MS,
        }
    }
}

impl PassauditConfig {
    /// Apply a `--server` flag on top of the file layers.
    pub fn with_server_override(mut self, url: Option<String>) -> Self {
        if let Some(url) = url {
            self.server.url = url;
        }
        self
    }

    pub fn controller_config(&self) -> ControllerConfig {
        ControllerConfig {
            request_timeout: Duration::from_secs(self.server.timeout_secs),
            error_cue: Duration::from_millis(self.ui.error_cue_ms),
        }
    }
}
