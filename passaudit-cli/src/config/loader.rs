use super::types::{
    DEFAULT_ERROR_CUE_MS, DEFAULT_TIMEOUT_SECS, PassauditConfig, RawPassauditConfig,
    RawServerConfig, RawUiConfig, ServerConfig, UiConfig,
};
use anyhow::{Context, Result, bail};
use directories::ProjectDirs;
use passaudit_client::DEFAULT_BASE_URL;
use std::path::{Path, PathBuf};

/// Environment variable that relocates the project config directory
pub const PROJECT_CONFIG_DIR_ENV: &str = "PASSAUDIT_PROJECT_CONFIG_DIR";

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load merged configuration (user + project)
    pub fn load() -> Result<PassauditConfig> {
        Self::load_layers(
            Self::user_config_path().as_deref(),
            &Self::project_config_path(),
        )
    }

    /// Load and merge the given layers; later layers win, missing files are skipped.
    pub fn load_layers(user: Option<&Path>, project: &Path) -> Result<PassauditConfig> {
        let mut raw = RawPassauditConfig::default();

        // Layer 1: User config
        if let Some(user_path) = user
            && user_path.exists()
        {
            raw = Self::merge_raw(raw, Self::read_raw(user_path)?);
        }

        // Layer 2: Project config
        if project.exists() {
            raw = Self::merge_raw(raw, Self::read_raw(project)?);
        }

        Self::finalize(raw)
    }

    fn read_raw(path: &Path) -> Result<RawPassauditConfig> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&contents).with_context(|| format!("invalid config in {}", path.display()))
    }

    /// Get user config path (platform-specific)
    pub fn user_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "passaudit").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Get project config path
    /// Can be overridden with PASSAUDIT_PROJECT_CONFIG_DIR (useful for isolated tests)
    pub fn project_config_path() -> PathBuf {
        if let Ok(dir) = std::env::var(PROJECT_CONFIG_DIR_ENV) {
            PathBuf::from(dir).join("config.toml")
        } else {
            PathBuf::from(".passaudit/config.toml")
        }
    }

    /// Default TUI log file (platform data directory)
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "passaudit").map(|dirs| dirs.data_dir().join("passaudit.log"))
    }

    /// Merge two raw configs (overlay values override base only if explicitly set)
    fn merge_raw(base: RawPassauditConfig, overlay: RawPassauditConfig) -> RawPassauditConfig {
        RawPassauditConfig {
            server: RawServerConfig {
                url: overlay.server.url.or(base.server.url),
                timeout_secs: overlay.server.timeout_secs.or(base.server.timeout_secs),
            },
            ui: RawUiConfig {
                error_cue_ms: overlay.ui.error_cue_ms.or(base.ui.error_cue_ms),
            },
        }
    }

    /// Convert raw config to final config with defaults applied
    fn finalize(raw: RawPassauditConfig) -> Result<PassauditConfig> {
        let timeout_secs = raw.server.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);
        if timeout_secs == 0 {
            bail!("server.timeout_secs must be greater than zero");
        }

        Ok(PassauditConfig {
            server: ServerConfig {
                url: raw
                    .server
                    .url
                    .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
                timeout_secs,
            },
            ui: UiConfig {
                error_cue_ms: raw.ui.error_cue_ms.unwrap_or(DEFAULT_ERROR_CUE_MS),
            },
        })
    }
}
