//! Strength bar with the risk level as its title.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Gauge},
};

use crate::Theme;
use crate::report::{LevelText, StrengthBar};

pub struct StrengthBarWidget<'a> {
    bar: &'a StrengthBar,
    level: &'a LevelText,
    theme: &'a Theme,
}

impl<'a> StrengthBarWidget<'a> {
    pub fn new(bar: &'a StrengthBar, level: &'a LevelText, theme: &'a Theme) -> Self {
        Self { bar, level, theme }
    }

    pub fn to_gauge(&self) -> Gauge<'a> {
        let fill = self.bar.fill.to_color(self.theme.accent);
        let glow = self.bar.glow.to_color(self.theme.border);
        let level_color = self.level.color.to_color(self.theme.fg);

        let title = Line::from(vec![
            Span::styled(" Strength: ", Style::default().fg(self.theme.muted)),
            Span::styled(
                self.level.text.clone(),
                Style::default().fg(level_color).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
        ]);

        Gauge::default()
            .block(
                Block::bordered()
                    .title(title)
                    .border_style(Style::default().fg(glow)),
            )
            .gauge_style(Style::default().fg(fill).bg(self.theme.track))
            .percent(self.bar.width_percent.min(100))
            .label(format!("{}%", self.bar.width_percent))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Report;
    use passaudit_client::{AssessmentResult, Check};
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer, style::Color};

    fn report(score: u8, level: &str, color: &str) -> Report {
        Report::from_result(&AssessmentResult {
            risk_score: score,
            risk_level: level.into(),
            risk_color: color.into(),
            checks: vec![Check::new("Length", true)],
            issues: vec![],
            recommendations: vec![],
            issue_count: 0,
        })
    }

    fn draw(report: &Report) -> Buffer {
        let theme = crate::neon_default();
        let backend = TestBackend::new(40, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                let widget = StrengthBarWidget::new(&report.bar, &report.level, &theme);
                f.render_widget(widget.to_gauge(), area);
            })
            .unwrap();
        terminal.backend().buffer().clone()
    }

    #[test]
    fn shows_level_and_percentage() {
        let buffer = draw(&report(62, "Moderate", "#ffaa00"));
        let content: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(content.contains("Moderate"), "Expected 'Moderate' in: {}", content);
        assert!(content.contains("62%"), "Expected '62%' in: {}", content);
    }

    #[test]
    fn border_glows_in_risk_color() {
        let buffer = draw(&report(62, "Moderate", "#ffaa00"));
        let corner = &buffer.content()[0];
        assert_eq!(corner.fg, Color::Rgb(255, 170, 0));
    }

    #[test]
    fn level_text_uses_risk_color() {
        let buffer = draw(&report(95, "Very Strong", "#00d4ff"));
        let v = buffer
            .content()
            .iter()
            .find(|c| c.symbol() == "V")
            .unwrap();
        assert_eq!(v.fg, Color::Rgb(0, 212, 255));
    }

    #[test]
    fn filled_part_tracks_width() {
        let buffer = draw(&report(100, "Very Strong", "#00d4ff"));
        // Filled cells carry the fill as their background.
        let cell = &buffer[(1, 1)];
        assert_eq!(cell.bg, Color::Rgb(0, 212, 255));
    }
}
