//! Neon theme for the passaudit TUI.

use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the TUI.
///
/// Assessment-specific colors (ring, bar, level) come from the scoring
/// service; the theme covers everything else.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // Base colors
    pub bg: Color,
    pub fg: Color,
    pub accent: Color,
    pub warning: Color,
    pub error: Color,

    // Check colors
    pub passed: Color,
    pub failed: Color,

    // UI element colors
    pub border: Color,
    pub track: Color,
    pub muted: Color,

    // Text styles
    pub bold: Style,
    pub dim: Style,
}

/// Creates the default neon theme:
/// - Neon green (#00ff9d) for passed checks
/// - Neon red (#ff3860) for failures and the empty-input cue
/// - Cyan accent (#00d4ff) for focus and tabs
pub fn neon_default() -> Theme {
    let fg = Color::Rgb(224, 224, 255); // #e0e0ff

    Theme {
        name: "neon".into(),

        bg: Color::Rgb(10, 10, 18), // #0a0a12
        fg,
        accent: Color::Rgb(0, 212, 255),  // #00d4ff
        warning: Color::Rgb(255, 183, 0), // #ffb700
        error: Color::Rgb(255, 56, 96),   // #ff3860

        passed: Color::Rgb(0, 255, 157), // #00ff9d
        failed: Color::Rgb(255, 56, 96), // #ff3860

        border: Color::Rgb(42, 42, 58),  // #2a2a3a
        track: Color::Rgb(30, 30, 44),   // #1e1e2c
        muted: Color::Rgb(108, 108, 128), // #6c6c80

        bold: Style::default().fg(fg).add_modifier(Modifier::BOLD),
        dim: Style::default().fg(fg).add_modifier(Modifier::DIM),
    }
}
