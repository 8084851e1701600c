//! Widgets for the passaudit TUI.
//!
//! Each widget borrows its slice of the report model and converts it to a
//! ratatui widget; none of them hold state of their own.

mod checks_grid;
mod insights;
mod password_input;
mod score_ring;
mod status_line;
mod strength_bar;

pub use checks_grid::ChecksGrid;
pub use insights::InsightsPanel;
pub use password_input::{MASK_CHAR, PasswordField};
pub use score_ring::{RING_RADIUS, ScoreRingWidget};
pub use status_line::{StatusLine, help_line};
pub use strength_bar::StrengthBarWidget;
