//! View state for the TUI.

use std::time::{Duration, Instant};

/// Which regions of the screen are live.
///
/// Owned by [`UiController`](crate::UiController) and changed only on its
/// transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Idle,
    /// A request is in flight; the loading indicator is shown.
    Submitting,
    ShowingResults,
    ShowingError,
}

impl ViewState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Submitting => "submitting",
            Self::ShowingResults => "showing-results",
            Self::ShowingError => "showing-error",
        }
    }
}

/// The insight list currently on display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Issues,
    Recommendations,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Issues, Tab::Recommendations];

    pub fn other(self) -> Self {
        match self {
            Self::Issues => Self::Recommendations,
            Self::Recommendations => Self::Issues,
        }
    }

    /// Position in the tab bar.
    pub fn index(self) -> usize {
        match self {
            Self::Issues => 0,
            Self::Recommendations => 1,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Issues => "Issues",
            Self::Recommendations => "Recommendations",
        }
    }
}

/// Whether the password field shows its characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Hidden,
    Shown,
}

impl Visibility {
    pub fn toggled(self) -> Self {
        match self {
            Self::Hidden => Self::Shown,
            Self::Shown => Self::Hidden,
        }
    }
}

/// Short-lived highlight on the input after an empty submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputCue {
    until: Option<Instant>,
}

impl InputCue {
    /// Light the cue for `duration` starting at `now`.
    pub fn trigger(&mut self, now: Instant, duration: Duration) {
        self.until = Some(now + duration);
    }

    pub fn is_active(&self, now: Instant) -> bool {
        self.until.is_some_and(|until| now < until)
    }

    /// Clear the cue once its deadline has passed.
    pub fn expire(&mut self, now: Instant) {
        if !self.is_active(now) {
            self.until = None;
        }
    }

    pub fn is_pending(&self) -> bool {
        self.until.is_some()
    }
}
