//! Tracing subscriber setup.
//!
//! The TUI owns the terminal while it runs, so its logs go to a file.
//! Everything else logs to stderr.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result, anyhow};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

/// `RUST_LOG` wins when set; otherwise `debug` with `--verbose`, else `info`.
fn env_filter(verbose: bool) -> EnvFilter {
    let default = if verbose { "debug" } else { "info" };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

pub fn init(verbose: bool, target: LogTarget) -> Result<()> {
    let filter = env_filter(verbose);

    match target {
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| anyhow!("failed to install logger: {e}")),
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;

            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init()
                .map_err(|e| anyhow!("failed to install logger: {e}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn filter_defaults_follow_verbose_flag() {
        // SAFETY: serialized with the other env tests
        unsafe {
            std::env::remove_var("RUST_LOG");
        }

        assert_eq!(env_filter(false).to_string(), "info");
        assert_eq!(env_filter(true).to_string(), "debug");
    }

    #[test]
    #[serial]
    fn rust_log_overrides_verbose_flag() {
        // SAFETY: serialized with the other env tests
        unsafe {
            std::env::set_var("RUST_LOG", "passaudit_client=trace");
        }

        let filter = env_filter(false);

        unsafe {
            std::env::remove_var("RUST_LOG");
        }

        assert_eq!(filter.to_string(), "passaudit_client=trace");
    }
}
