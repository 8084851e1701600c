//! TUI command - launches the terminal user interface
//!
//! Runs the interactive password checker against the configured scoring
//! service.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use passaudit_client::AssessmentClient;
use tracing::info;

use crate::config::{ConfigLoader, PassauditConfig};
use crate::logging::LogTarget;

#[derive(Args, Debug, Default)]
#[command(after_long_help = "\
Examples:
  passaudit                                     Launch the TUI
  passaudit --server http://10.0.0.7:5000 tui   Use another scoring service
  passaudit tui --log-file ./passaudit.log      Log next to the project
")]
pub struct TuiArgs {
    /// Write logs to this file (the TUI owns the terminal)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl TuiArgs {
    pub fn log_target(&self) -> LogTarget {
        let path = self
            .log_file
            .clone()
            .or_else(ConfigLoader::default_log_path)
            .unwrap_or_else(|| std::env::temp_dir().join("passaudit.log"));
        LogTarget::File(path)
    }
}

pub async fn run(_args: TuiArgs, config: PassauditConfig) -> Result<()> {
    let client = AssessmentClient::with_base_url(config.server.url.clone());
    let server = client.base_url().to_string();

    info!(
        %server,
        timeout_secs = config.server.timeout_secs,
        "Starting TUI..."
    );

    passaudit_tui::install_panic_hook();

    let mut app =
        passaudit_tui::App::new(Arc::new(client), config.controller_config()).with_server(server);
    app.run().await?;

    info!("TUI exited");
    Ok(())
}
