//! One-shot check: prompt for a password, assess it once and print the
//! report as tables.

use std::io::BufRead;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::Args;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets::UTF8_FULL_CONDENSED};
use dialoguer::{Password, theme::ColorfulTheme};
use passaudit_client::{AssessmentClient, ExposeSecret, SecretString, ValidationError};
use passaudit_tui::{CheckClass, Command, InsightList, Report, RiskColor, UiController, ViewState};
use tracing::debug;

use crate::config::PassauditConfig;

#[derive(Args, Debug, Default)]
#[command(after_long_help = "\
Examples:
  passaudit check                          Prompt for a password
  printf 'hunter2\\n' | passaudit check --stdin
")]
pub struct CheckArgs {
    /// Read the password from the first line of stdin instead of prompting
    #[arg(long)]
    pub stdin: bool,
}

pub async fn run(args: CheckArgs, config: PassauditConfig) -> Result<()> {
    let password = if args.stdin {
        read_password_line(std::io::stdin().lock())?
    } else {
        prompt_password()?
    };

    let client = AssessmentClient::with_base_url(config.server.url.clone());
    debug!(server = client.base_url(), "running one-shot check");

    let mut controller = UiController::new(Arc::new(client), config.controller_config());
    controller.dispatch(Command::Submit, password.expose_secret());
    drop(password);
    controller.settle().await;

    match controller.view_state() {
        ViewState::ShowingResults => {
            println!("{}", render_report(controller.report()));
            Ok(())
        }
        ViewState::ShowingError => bail!(
            "check failed: {}",
            controller.error_message().unwrap_or("unknown error")
        ),
        ViewState::Idle | ViewState::Submitting => bail!("{}", ValidationError::EmptyPassword),
    }
}

fn prompt_password() -> Result<SecretString> {
    let password = Password::with_theme(&ColorfulTheme::default())
        .with_prompt("Password")
        .allow_empty_password(true)
        .interact()?;
    Ok(SecretString::from(password))
}

/// First line of `reader` without its line terminator. Other whitespace is
/// part of the password.
fn read_password_line(mut reader: impl BufRead) -> Result<SecretString> {
    let mut line = String::new();
    reader
        .read_line(&mut line)
        .context("failed to read password from stdin")?;
    let len = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(len);
    Ok(SecretString::from(line))
}

fn table_color(color: &RiskColor) -> Option<Color> {
    color.rgb().map(|(r, g, b)| Color::Rgb { r, g, b })
}

fn colored(cell: Cell, color: Option<Color>) -> Cell {
    match color {
        Some(color) => cell.fg(color),
        None => cell,
    }
}

/// Render the report model as plain-terminal tables.
pub fn render_report(report: &Report) -> String {
    let risk = table_color(&report.level.color);

    let mut summary = Table::new();
    summary.load_preset(UTF8_FULL_CONDENSED);
    summary.set_content_arrangement(ContentArrangement::Dynamic);
    summary.set_header(vec![
        Cell::new("Score").fg(Color::Cyan),
        Cell::new("Strength").fg(Color::Cyan),
        Cell::new("Issues").fg(Color::Cyan),
    ]);
    summary.add_row(vec![
        colored(Cell::new(format!("{}/100", report.ring.score_text())), risk),
        colored(Cell::new(&report.level.text), risk),
        Cell::new(&report.badge),
    ]);

    let mut checks = Table::new();
    checks.load_preset(UTF8_FULL_CONDENSED);
    checks.set_content_arrangement(ContentArrangement::Dynamic);
    checks.set_header(vec![
        Cell::new("").fg(Color::Cyan),
        Cell::new("Check").fg(Color::Cyan),
        Cell::new("Status").fg(Color::Cyan),
        Cell::new("Detail").fg(Color::Cyan),
    ]);
    for check in &report.checks {
        let status_color = match check.class {
            CheckClass::Passed => Color::Green,
            CheckClass::Failed => Color::Red,
        };
        checks.add_row(vec![
            Cell::new(check.icon.glyph()),
            Cell::new(&check.name),
            Cell::new(check.class.status_text()).fg(status_color),
            Cell::new(check.message.as_deref().unwrap_or("")),
        ]);
    }

    format!(
        "{summary}\n{checks}\n\n{}\n{}",
        render_list("Issues", &report.issues),
        render_list("Recommendations", &report.recommendations)
    )
}

fn render_list(title: &str, list: &InsightList) -> String {
    let mut out = format!("{title}:\n");
    for entry in &list.entries {
        let glyph = if entry.is_placeholder() {
            "✓"
        } else {
            list.kind.glyph()
        };
        out.push_str(&format!("  {} {}\n", glyph, entry.text()));
    }
    out
}
