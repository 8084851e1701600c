//! Terminal UI for passaudit.
//!
//! Presents a password field, sends the password to the scoring service on
//! Enter, and renders the returned assessment: a score ring, a strength bar,
//! the checks grid and tabbed issue and recommendation lists. Built on
//! ratatui and crossterm.

mod app;
mod controller;
mod keybindings;
mod report;
mod state;
mod terminal;
mod theme;
mod widgets;

pub use app::App;
pub use controller::{
    Command, ControllerConfig, DEFAULT_ERROR_CUE, DEFAULT_REQUEST_TIMEOUT, UiController,
};
pub use keybindings::{Action, KeyBindings};
pub use report::{
    CheckClass, CheckEntry, CheckIcon, InsightEntry, InsightKind, InsightList, LevelText,
    RING_CIRCUMFERENCE, Report, RiskColor, ScoreRing, StrengthBar, ring_offset,
};
pub use state::{InputCue, Tab, ViewState, Visibility};
pub use terminal::{PassauditTerminal, install_panic_hook, restore_terminal, setup_terminal};
pub use theme::{Theme, neon_default};
pub use widgets::{
    ChecksGrid, InsightsPanel, MASK_CHAR, PasswordField, RING_RADIUS, ScoreRingWidget,
    StatusLine, StrengthBarWidget, help_line,
};
