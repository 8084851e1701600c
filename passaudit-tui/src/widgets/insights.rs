//! Issues and recommendations, one tab each.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Tabs},
};

use crate::Theme;
use crate::report::{InsightEntry, InsightKind, Report};
use crate::state::Tab;

fn kind_for(tab: Tab) -> InsightKind {
    match tab {
        Tab::Issues => InsightKind::Issue,
        Tab::Recommendations => InsightKind::Recommendation,
    }
}

pub struct InsightsPanel<'a> {
    report: &'a Report,
    tab: Tab,
    theme: &'a Theme,
}

impl<'a> InsightsPanel<'a> {
    pub fn new(report: &'a Report, tab: Tab, theme: &'a Theme) -> Self {
        Self { report, tab, theme }
    }

    /// Tab strip. The issues tab carries the badge.
    pub fn to_tabs(&self) -> Tabs<'a> {
        let titles: Vec<Line> = Tab::ALL
            .iter()
            .map(|tab| match tab {
                Tab::Issues => Line::from(vec![
                    Span::raw(tab.title()),
                    Span::raw(" "),
                    Span::styled(
                        format!("[{}]", self.report.badge),
                        Style::default().fg(self.theme.warning),
                    ),
                ]),
                Tab::Recommendations => Line::raw(tab.title()),
            })
            .collect();

        Tabs::new(titles)
            .select(self.tab.index())
            .style(Style::default().fg(self.theme.muted))
            .highlight_style(
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            )
            .divider("│")
    }

    /// Entries of the active tab.
    pub fn to_list(&self) -> List<'a> {
        let kind = kind_for(self.tab);
        let items: Vec<ListItem> = self
            .report
            .list(kind)
            .entries
            .iter()
            .map(|entry| match entry {
                InsightEntry::Item(text) => {
                    let glyph_color = match kind {
                        InsightKind::Issue => self.theme.warning,
                        InsightKind::Recommendation => self.theme.accent,
                    };
                    ListItem::new(Line::from(vec![
                        Span::styled(
                            format!(" {} ", kind.glyph()),
                            Style::default().fg(glyph_color),
                        ),
                        Span::styled(text.clone(), Style::default().fg(self.theme.fg)),
                    ]))
                }
                InsightEntry::Placeholder(text) => ListItem::new(Line::from(vec![
                    Span::styled(" ✓ ", Style::default().fg(self.theme.passed)),
                    Span::styled(text.clone(), Style::default().fg(self.theme.passed)),
                ])),
            })
            .collect();

        List::new(items).block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(self.theme.border)),
        )
    }
}
