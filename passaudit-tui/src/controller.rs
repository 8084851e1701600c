//! UI state machine.
//!
//! [`UiController`] owns the [`ViewState`], the most recent assessment and
//! the presentation toggles. User gestures arrive as [`Command`]s; a finished
//! request is folded in by [`UiController::poll`] (non-blocking, called from
//! the event loop) or [`UiController::settle`] (awaits the request).
//!
//! ```text
//!             Submit (non-empty)              success
//!   Idle ───────────────────────▶ Submitting ─────────▶ ShowingResults
//!    ▲ │ Submit (empty):                │                     │
//!    └─┘ input cue only                 │ failure             │ Submit
//!                                       ▼                     ▼
//!                                 ShowingError ──Submit──▶ Submitting
//! ```
//!
//! Submit is ignored while a request is in flight, so at most one request
//! is outstanding at any time.

use std::sync::Arc;
use std::time::{Duration, Instant};

use passaudit_client::{
    AssessmentResult, Assessor, Error, RequestError, SecretString, validate_password,
};
use tokio::sync::oneshot::{self, error::TryRecvError};
use tokio::task::JoinHandle;
use tracing::{debug, info, trace, warn};

use crate::report::Report;
use crate::state::{InputCue, Tab, ViewState, Visibility};

/// Default deadline for a single assessment request.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Default lifetime of the empty-input cue.
pub const DEFAULT_ERROR_CUE: Duration = Duration::from_millis(500);

/// User gestures the controller understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Submit,
    ToggleVisibility,
    SelectTab(Tab),
}

/// Timing policy for the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerConfig {
    pub request_timeout: Duration,
    pub error_cue: Duration,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            error_cue: DEFAULT_ERROR_CUE,
        }
    }
}

type Outcome = passaudit_client::Result<AssessmentResult>;

struct PendingRequest {
    rx: oneshot::Receiver<Outcome>,
    task: JoinHandle<()>,
}

/// Explicit owner of all mutable UI state.
pub struct UiController {
    assessor: Arc<dyn Assessor>,
    config: ControllerConfig,
    view_state: ViewState,
    last_result: Option<AssessmentResult>,
    report: Report,
    error_message: Option<String>,
    input_cue: InputCue,
    visibility: Visibility,
    tab: Tab,
    pending: Option<PendingRequest>,
}

impl std::fmt::Debug for UiController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UiController")
            .field("view_state", &self.view_state)
            .field("visibility", &self.visibility)
            .field("tab", &self.tab)
            .field("pending", &self.pending.is_some())
            .finish_non_exhaustive()
    }
}

impl UiController {
    pub fn new(assessor: Arc<dyn Assessor>, config: ControllerConfig) -> Self {
        Self {
            assessor,
            config,
            view_state: ViewState::default(),
            last_result: None,
            report: Report::default(),
            error_message: None,
            input_cue: InputCue::default(),
            visibility: Visibility::default(),
            tab: Tab::default(),
            pending: None,
        }
    }

    /// Apply one user gesture. `input` is the current password field value.
    pub fn dispatch(&mut self, command: Command, input: &str) {
        match command {
            Command::Submit => self.on_submit(input),
            Command::ToggleVisibility => self.on_toggle_visibility(),
            Command::SelectTab(tab) => self.on_select_tab(tab),
        }
    }

    /// Start an assessment of `input`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn on_submit(&mut self, input: &str) {
        if self.view_state == ViewState::Submitting {
            debug!("submit ignored: assessment already in flight");
            return;
        }

        if let Err(e) = validate_password(input) {
            debug!(reason = %e, state = self.view_state.as_str(), "submit rejected locally");
            self.input_cue.trigger(Instant::now(), self.config.error_cue);
            return;
        }

        self.last_result = None;
        self.report = Report::default();
        self.error_message = None;
        self.transition(ViewState::Submitting);

        let assessor = Arc::clone(&self.assessor);
        let timeout = self.config.request_timeout;
        let password = SecretString::from(input.to_owned());
        let (tx, rx) = oneshot::channel();

        let task = tokio::spawn(async move {
            let outcome = match tokio::time::timeout(timeout, assessor.submit(&password)).await {
                Ok(outcome) => outcome,
                Err(_) => Err(RequestError::timed_out(timeout).into()),
            };
            // The controller may have been dropped meanwhile.
            let _ = tx.send(outcome);
        });

        self.pending = Some(PendingRequest { rx, task });
    }

    pub fn on_toggle_visibility(&mut self) {
        self.visibility = self.visibility.toggled();
    }

    pub fn on_select_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    /// Fold in a finished request without waiting. Returns true if the
    /// state changed.
    pub fn poll(&mut self) -> bool {
        let Some(pending) = self.pending.as_mut() else {
            return false;
        };

        let outcome = match pending.rx.try_recv() {
            Ok(outcome) => outcome,
            Err(TryRecvError::Empty) => return false,
            Err(TryRecvError::Closed) => Err(lost_task_error()),
        };

        self.pending = None;
        self.complete(outcome);
        true
    }

    /// Wait for the in-flight request, if any, and fold it in.
    pub async fn settle(&mut self) {
        let Some(pending) = self.pending.take() else {
            return;
        };

        let outcome = pending.rx.await.unwrap_or_else(|_| Err(lost_task_error()));
        self.complete(outcome);
    }

    /// Periodic housekeeping: expire the input cue and poll the request.
    pub fn tick(&mut self, now: Instant) {
        if self.input_cue.is_pending() {
            self.input_cue.expire(now);
            if !self.input_cue.is_pending() {
                trace!("input cue cleared");
            }
        }
        self.poll();
    }

    /// Abort the in-flight request, if any, and fall back to `Idle`.
    pub fn abort(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.task.abort();
            debug!("in-flight assessment aborted");
            self.transition(ViewState::Idle);
        }
    }

    fn complete(&mut self, outcome: Outcome) {
        match outcome {
            Ok(result) => {
                self.report.render(&result);
                info!(
                    risk_score = result.risk_score,
                    risk_level = %result.risk_level,
                    "assessment rendered"
                );
                self.last_result = Some(result);
                self.transition(ViewState::ShowingResults);
            }
            Err(Error::Validation(e)) => {
                debug!(reason = %e, "assessment rejected locally");
                self.input_cue.trigger(Instant::now(), self.config.error_cue);
                self.transition(ViewState::Idle);
            }
            Err(Error::Request(e)) => {
                warn!(kind = ?e.kind(), status = ?e.status(), error = %e, "assessment failed");
                self.error_message = Some(e.message().to_string());
                self.transition(ViewState::ShowingError);
            }
        }
    }

    fn transition(&mut self, next: ViewState) {
        debug!(
            from = self.view_state.as_str(),
            to = next.as_str(),
            "view state transition"
        );
        self.view_state = next;
    }

    pub fn view_state(&self) -> ViewState {
        self.view_state
    }

    /// The report model. Only meaningful while results are visible.
    pub fn report(&self) -> &Report {
        &self.report
    }

    pub fn last_result(&self) -> Option<&AssessmentResult> {
        self.last_result.as_ref()
    }

    /// Message of the last failure, while in `ShowingError`.
    pub fn error_message(&self) -> Option<&str> {
        match self.view_state {
            ViewState::ShowingError => self.error_message.as_deref(),
            _ => None,
        }
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn is_loading(&self) -> bool {
        self.view_state == ViewState::Submitting
    }

    pub fn results_visible(&self) -> bool {
        self.view_state == ViewState::ShowingResults
    }

    /// The submit control is disabled while a request is in flight.
    pub fn submit_enabled(&self) -> bool {
        !self.is_loading()
    }

    pub fn input_cue_active(&self, now: Instant) -> bool {
        self.input_cue.is_active(now)
    }
}

impl Drop for UiController {
    fn drop(&mut self) {
        self.abort();
    }
}

fn lost_task_error() -> Error {
    RequestError::transport("assessment task ended before responding").into()
}
