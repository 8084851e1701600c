//! Security checks grid.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, List, ListItem},
};

use crate::Theme;
use crate::report::{CheckClass, CheckEntry};

/// Width of the name column; longer names are not truncated.
const NAME_WIDTH: usize = 20;

pub struct ChecksGrid<'a> {
    checks: &'a [CheckEntry],
    theme: &'a Theme,
}

impl<'a> ChecksGrid<'a> {
    pub fn new(checks: &'a [CheckEntry], theme: &'a Theme) -> Self {
        Self { checks, theme }
    }

    /// Rows needed to show every check, borders included.
    pub fn height(&self) -> u16 {
        let lines: usize = self
            .checks
            .iter()
            .map(|check| 1 + usize::from(check.message.is_some()))
            .sum();
        u16::try_from(lines).unwrap_or(u16::MAX).saturating_add(2)
    }

    /// One item per check in service order; a check's message, if any,
    /// goes on a dimmed second line.
    pub fn to_list(&self) -> List<'a> {
        let items: Vec<ListItem> = self
            .checks
            .iter()
            .map(|check| {
                let color = match check.class {
                    CheckClass::Passed => self.theme.passed,
                    CheckClass::Failed => self.theme.failed,
                };

                let mut lines = vec![Line::from(vec![
                    Span::styled(
                        format!(" {} ", check.icon.glyph()),
                        Style::default().fg(self.theme.accent),
                    ),
                    Span::styled(
                        format!("{:<width$}", check.name, width = NAME_WIDTH),
                        Style::default().fg(self.theme.fg),
                    ),
                    Span::styled(
                        check.class.status_text(),
                        Style::default().fg(color).add_modifier(Modifier::BOLD),
                    ),
                ])];

                if let Some(message) = &check.message {
                    lines.push(Line::styled(format!("   {}", message), self.theme.dim));
                }

                ListItem::new(lines)
            })
            .collect();

        List::new(items).block(
            Block::bordered()
                .title(Line::styled(" Security Checks ", self.theme.bold))
                .border_style(Style::default().fg(self.theme.border)),
        )
    }
}
