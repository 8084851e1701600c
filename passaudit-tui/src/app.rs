//! Main application struct and event loop for the passaudit TUI.

use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use passaudit_client::Assessor;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::controller::{ControllerConfig, UiController};
use crate::keybindings::{Action, KeyBindings};
use crate::widgets::{
    ChecksGrid, InsightsPanel, PasswordField, ScoreRingWidget, StatusLine, StrengthBarWidget,
    help_line,
};
use crate::{PassauditTerminal, Theme, neon_default, restore_terminal, setup_terminal};

/// Width of the score ring column.
const RING_WIDTH: u16 = 26;

/// Minimum height of the ring and checks row.
const MIN_TOP_ROW: u16 = 11;

/// Main TUI application.
#[derive(Debug)]
pub struct App {
    pub controller: UiController,
    pub input: PasswordField,
    pub keybindings: KeyBindings,
    pub theme: Theme,
    pub running: bool,
    /// Scoring service address, shown in the title bar.
    pub server: Option<String>,
}

impl App {
    pub fn new(assessor: Arc<dyn Assessor>, config: ControllerConfig) -> Self {
        Self {
            controller: UiController::new(assessor, config),
            input: PasswordField::new(),
            keybindings: KeyBindings::default(),
            theme: neon_default(),
            running: true,
            server: None,
        }
    }

    pub fn with_server(mut self, server: impl Into<String>) -> Self {
        self.server = Some(server.into());
        self
    }

    /// Handles a key event.
    ///
    /// Bound keys run their action; unbound printable keys go to the
    /// password field. Ctrl-C always quits.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.running = false;
            return;
        }

        if let Some(action) = self.keybindings.resolve(key) {
            self.execute_action(action);
            return;
        }

        if let KeyCode::Char(c) = key.code
            && !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            self.input.insert(c);
        }
    }

    fn execute_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.running = false,
            Action::DeleteBackward => self.input.backspace(),
            Action::ClearInput => self.input.clear(),
            Action::Submit | Action::ToggleVisibility | Action::SelectTab(_) | Action::SwitchTab => {
                if let Some(command) = action.command(self.controller.tab()) {
                    self.controller.dispatch(command, self.input.value());
                }
            }
        }
    }

    /// Renders the application to the terminal frame.
    pub fn render(&self, frame: &mut Frame) {
        frame.render_widget(
            Block::default().style(Style::default().bg(self.theme.bg)),
            frame.area(),
        );

        let [title, input, status, results, help] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        frame.render_widget(self.title_line(), title);

        let now = Instant::now();
        frame.render_widget(
            self.input.to_paragraph(
                &self.theme,
                self.controller.visibility(),
                self.controller.input_cue_active(now),
                self.controller.submit_enabled(),
            ),
            input,
        );

        let status_line =
            StatusLine::new(self.controller.view_state(), self.controller.error_message());
        frame.render_widget(status_line.to_paragraph(&self.theme), status);

        if self.controller.results_visible() {
            self.render_results(frame, results);
        } else if let Some(banner) = status_line.error_banner(&self.theme) {
            frame.render_widget(banner, results);
        }

        frame.render_widget(help_line(&self.theme), help);
    }

    fn title_line(&self) -> Paragraph<'_> {
        let mut spans = vec![Span::styled(" passaudit ", self.theme.bold)];
        if let Some(server) = &self.server {
            spans.push(Span::styled(
                format!("· {}", server),
                Style::default().fg(self.theme.muted),
            ));
        }
        Paragraph::new(Line::from(spans))
    }

    fn render_results(&self, frame: &mut Frame, area: Rect) {
        let report = self.controller.report();
        let grid = ChecksGrid::new(&report.checks, &self.theme);
        let top_height = grid.height().max(MIN_TOP_ROW);

        let [top, bar, insights] = Layout::vertical([
            Constraint::Length(top_height),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .areas(area);

        let [ring, checks] =
            Layout::horizontal([Constraint::Length(RING_WIDTH), Constraint::Min(0)]).areas(top);

        frame.render_widget(
            ScoreRingWidget::new(&report.ring, &self.theme).to_canvas(),
            ring,
        );
        frame.render_widget(grid.to_list(), checks);
        frame.render_widget(
            StrengthBarWidget::new(&report.bar, &report.level, &self.theme).to_gauge(),
            bar,
        );

        let [tabs, list] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(insights);
        let panel = InsightsPanel::new(report, self.controller.tab(), &self.theme);
        frame.render_widget(panel.to_tabs(), tabs);
        frame.render_widget(panel.to_list(), list);
    }

    /// Expires the input cue and folds in a finished request.
    pub fn tick(&mut self) {
        self.controller.tick(Instant::now());
    }

    /// Runs the TUI until the user quits.
    pub async fn run(&mut self) -> io::Result<()> {
        let mut terminal = setup_terminal()?;

        let result = self.event_loop(&mut terminal).await;

        self.controller.abort();
        // Always restore terminal, even if event loop failed
        restore_terminal(&mut terminal)?;

        result
    }

    /// The core event loop. Separated from `run` for testability.
    async fn event_loop(&mut self, terminal: &mut PassauditTerminal) -> io::Result<()> {
        while self.running {
            terminal.draw(|f| self.render(f))?;

            if event::poll(Duration::from_millis(100))?
                && let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                self.handle_key(key);
            }

            // Let the request task make progress on a single-threaded runtime.
            tokio::task::yield_now().await;
            self.tick();
        }

        Ok(())
    }
}
