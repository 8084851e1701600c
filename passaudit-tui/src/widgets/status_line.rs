//! Status line and key help.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Wrap},
};

use crate::Theme;
use crate::state::ViewState;

/// One-line summary of the controller state.
pub struct StatusLine<'a> {
    state: ViewState,
    error: Option<&'a str>,
}

impl<'a> StatusLine<'a> {
    pub fn new(state: ViewState, error: Option<&'a str>) -> Self {
        Self { state, error }
    }

    pub fn text(&self) -> String {
        match self.state {
            ViewState::Idle => "Type a password and press Enter to check it".to_string(),
            ViewState::Submitting => "⟳ Checking password… (submit disabled)".to_string(),
            ViewState::ShowingResults => "✓ Assessment complete".to_string(),
            ViewState::ShowingError => {
                format!("✗ Check failed: {}", self.error.unwrap_or("unknown error"))
            }
        }
    }

    pub fn to_paragraph(&self, theme: &Theme) -> Paragraph<'a> {
        let style = match self.state {
            ViewState::Idle => Style::default().fg(theme.muted),
            ViewState::Submitting => Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::ITALIC),
            ViewState::ShowingResults => Style::default().fg(theme.passed),
            ViewState::ShowingError => Style::default()
                .fg(theme.error)
                .add_modifier(Modifier::BOLD),
        };

        Paragraph::new(Line::styled(self.text(), style))
    }

    /// The full failure message, wrapped to its area. `None` unless the
    /// check failed.
    pub fn error_banner(&self, theme: &Theme) -> Option<Paragraph<'a>> {
        if self.state != ViewState::ShowingError {
            return None;
        }

        let title = Style::default().fg(theme.error).add_modifier(Modifier::BOLD);
        let message = self.error.unwrap_or("unknown error");
        Some(
            Paragraph::new(Line::styled(message, Style::default().fg(theme.fg)))
                .wrap(Wrap { trim: true })
                .block(
                    Block::bordered()
                        .title(Line::styled(" Check failed ", title))
                        .border_style(Style::default().fg(theme.error)),
                ),
        )
    }
}

/// Key hints along the bottom edge.
pub fn help_line(theme: &Theme) -> Paragraph<'static> {
    let hints = [
        ("Enter", "check"),
        ("Ctrl-R", "show/hide"),
        ("Tab", "issues/recommendations"),
        ("Ctrl-U", "clear"),
        ("Esc", "quit"),
    ];

    let mut spans = Vec::with_capacity(hints.len() * 3);
    for (key, label) in hints {
        spans.push(Span::styled(
            key,
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(format!(" {}", label), Style::default().fg(theme.muted)));
        spans.push(Span::raw("  "));
    }

    Paragraph::new(Line::from(spans))
}
