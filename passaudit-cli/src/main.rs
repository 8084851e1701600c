use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod config;
mod logging;

use config::ConfigLoader;
use logging::LogTarget;

#[derive(Parser)]
#[command(name = "passaudit", about = "Check password strength against a scoring service")]
#[command(version, propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Scoring service base URL (overrides config files)
    #[arg(long, global = true, value_name = "URL")]
    server: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive password checker (default)
    Tui(commands::tui::TuiArgs),
    /// Check a single password and print the report
    Check(commands::check::CheckArgs),
    /// Manage configuration
    Config(commands::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let command = cli
        .command
        .unwrap_or_else(|| Commands::Tui(commands::tui::TuiArgs::default()));

    let log_target = match &command {
        Commands::Tui(args) => args.log_target(),
        Commands::Check(_) | Commands::Config(_) => LogTarget::Stderr,
    };
    logging::init(cli.verbose, log_target)?;

    let config = ConfigLoader::load()?.with_server_override(cli.server);

    match command {
        Commands::Tui(args) => commands::tui::run(args, config).await,
        Commands::Check(args) => commands::check::run(args, config).await,
        Commands::Config(args) => commands::config::run(args, &config),
    }
}
