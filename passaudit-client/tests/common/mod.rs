//! Shared test utilities: a scripted stand-in for the scoring service.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::Value;
use tokio::net::TcpListener;

/// What the stub answers and what it has seen.
pub struct StubState {
    status: StatusCode,
    body: String,
    hits: AtomicUsize,
    last_request: Mutex<Option<Value>>,
}

/// Handle to a running stub service.
pub struct StubService {
    pub addr: SocketAddr,
    state: Arc<StubState>,
}

impl StubService {
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Number of requests the stub has answered.
    pub fn hits(&self) -> usize {
        self.state.hits.load(Ordering::SeqCst)
    }

    /// JSON body of the most recent request.
    #[allow(dead_code)]
    pub fn last_request(&self) -> Option<Value> {
        self.state.last_request.lock().unwrap().clone()
    }
}

async fn check(
    State(state): State<Arc<StubState>>,
    Json(request): Json<Value>,
) -> impl IntoResponse {
    state.hits.fetch_add(1, Ordering::SeqCst);
    *state.last_request.lock().unwrap() = Some(request);
    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.body.clone(),
    )
}

/// Spawns a stub answering every `POST /check` with `status` and `body`.
pub async fn spawn_stub(status: StatusCode, body: impl Into<String>) -> StubService {
    let state = Arc::new(StubState {
        status,
        body: body.into(),
        hits: AtomicUsize::new(0),
        last_request: Mutex::new(None),
    });

    let app = Router::new()
        .route("/check", post(check))
        .with_state(Arc::clone(&state));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    StubService { addr, state }
}

/// Address that refuses connections: bound once, then released.
#[allow(dead_code)]
pub async fn closed_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

/// The moderate-strength assessment used across tests.
#[allow(dead_code)]
pub const MODERATE_BODY: &str = r##"{
    "risk_score": 62,
    "risk_level": "Moderate",
    "risk_color": "#ffaa00",
    "checks": [
        {"name": "Length", "passed": true},
        {"name": "Digits", "passed": true},
        {"name": "Special Characters", "passed": true},
        {"name": "Common Password", "passed": false}
    ],
    "issues": ["Password found in common list"],
    "recommendations": ["Avoid dictionary-based passphrases"],
    "issue_count": 1
}"##;
