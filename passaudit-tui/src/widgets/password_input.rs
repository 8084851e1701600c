//! Password input field.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::Theme;
use crate::state::Visibility;

/// Character shown in place of each hidden password character.
pub const MASK_CHAR: char = '•';

/// Editable password buffer. The value is only ever handed to the
/// controller on submit.
#[derive(Clone, Default)]
pub struct PasswordField {
    value: String,
}

impl std::fmt::Debug for PasswordField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordField")
            .field("len", &self.value.chars().count())
            .finish()
    }
}

impl PasswordField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn insert(&mut self, c: char) {
        self.value.push(c);
    }

    /// Remove the last character, if any.
    pub fn backspace(&mut self) {
        self.value.pop();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Text as it appears on screen.
    pub fn display_text(&self, visibility: Visibility) -> String {
        match visibility {
            Visibility::Shown => self.value.clone(),
            Visibility::Hidden => {
                std::iter::repeat_n(MASK_CHAR, self.value.chars().count()).collect()
            }
        }
    }

    /// Renders the field. `cue` paints the border red after an empty
    /// submit; `enabled` dims the field while a request is in flight.
    pub fn to_paragraph(
        &self,
        theme: &Theme,
        visibility: Visibility,
        cue: bool,
        enabled: bool,
    ) -> Paragraph<'_> {
        let border_color = if cue { theme.error } else { theme.accent };

        let toggle_label = match visibility {
            Visibility::Hidden => " ◉ show (Ctrl-R) ",
            Visibility::Shown => " ◌ hide (Ctrl-R) ",
        };

        let text_style = if enabled {
            Style::default().fg(theme.fg)
        } else {
            Style::default().fg(theme.muted).add_modifier(Modifier::DIM)
        };

        let mut spans = vec![Span::styled(self.display_text(visibility), text_style)];
        if enabled {
            spans.push(Span::styled("▏", Style::default().fg(theme.accent)));
        }

        let block = Block::bordered()
            .title(Line::styled(" Password ", theme.bold))
            .title(
                Line::styled(toggle_label, Style::default().fg(theme.muted)).right_aligned(),
            )
            .border_style(Style::default().fg(border_color));

        Paragraph::new(Line::from(spans)).block(block)
    }
}
