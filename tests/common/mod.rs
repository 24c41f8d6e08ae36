use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::{Context, Result};
use axum::extract::{Query, State};
use axum::http::{Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde_json::{Value, json};

use slack_connect::api::ApiClient;
use slack_connect::config::{ClientConfig, ConfigOverrides};

#[derive(Clone, Debug)]
pub struct Recorded {
    pub method: Method,
    pub path: String,
    pub query: HashMap<String, String>,
    pub body: Value,
}

/// Canned replies; each field is served as-is with its status code.
#[derive(Clone, Debug)]
pub struct Script {
    pub channels: (StatusCode, Value),
    pub send: (StatusCode, Value),
    pub schedule: (StatusCode, Value),
    pub scheduled: (StatusCode, Value),
    pub cancel: (StatusCode, Value),
    /// Applied to every handler before it answers.
    pub delay: Duration,
}

impl Default for Script {
    fn default() -> Self {
        Self {
            channels: (
                StatusCode::OK,
                json!({"ok": true, "channels": [{"id": "C1", "name": "general"}]}),
            ),
            send: (StatusCode::OK, json!({"ok": true})),
            schedule: (StatusCode::OK, json!({"ok": true})),
            scheduled: (StatusCode::OK, json!([])),
            cancel: (StatusCode::OK, json!({"ok": true})),
            delay: Duration::ZERO,
        }
    }
}

#[derive(Clone)]
struct FakeState {
    script: Arc<Mutex<Script>>,
    log: Arc<Mutex<Vec<Recorded>>>,
}

pub struct FakeBackend {
    pub base_url: String,
    script: Arc<Mutex<Script>>,
    log: Arc<Mutex<Vec<Recorded>>>,
    task: tokio::task::JoinHandle<()>,
}

impl Drop for FakeBackend {
    fn drop(&mut self) {
        self.task.abort();
    }
}

impl FakeBackend {
    pub async fn start(script: Script) -> Result<Self> {
        let script = Arc::new(Mutex::new(script));
        let log = Arc::new(Mutex::new(Vec::new()));
        let state = FakeState {
            script: script.clone(),
            log: log.clone(),
        };

        let app = Router::new()
            .route("/api/channels", get(channels))
            .route("/api/message/send", post(send))
            .route("/api/message/schedule", post(schedule))
            .route("/api/message/scheduled", get(scheduled))
            .route("/api/message/scheduled/:id", delete(cancel))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .context("bind fake backend")?;
        let addr = listener.local_addr().context("fake backend addr")?;
        let task = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Ok(Self {
            base_url: format!("http://{}", addr),
            script,
            log,
            task,
        })
    }

    pub fn set_script(&self, f: impl FnOnce(&mut Script)) {
        f(&mut self.script.lock().unwrap());
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.log.lock().unwrap().clone()
    }

    pub fn count(&self, method: Method, path: &str) -> usize {
        self.requests()
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .count()
    }

    pub fn config(&self, timeout_secs: u64) -> Result<ClientConfig> {
        ClientConfig::load(
            None,
            ConfigOverrides {
                backend_url: Some(self.base_url.clone()),
                request_timeout_secs: Some(timeout_secs),
                log_file: None,
            },
        )
    }

    pub fn client(&self) -> Result<ApiClient> {
        ApiClient::new(&self.config(5)?)
    }
}

async fn answer(
    state: &FakeState,
    recorded: Recorded,
    pick: impl FnOnce(&Script) -> (StatusCode, Value),
) -> Response {
    state.log.lock().unwrap().push(recorded);
    let (delay, (status, body)) = {
        let script = state.script.lock().unwrap();
        (script.delay, pick(&script))
    };
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
    (status, Json(body)).into_response()
}

async fn channels(
    State(state): State<FakeState>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    let rec = Recorded {
        method: Method::GET,
        path: "/api/channels".to_string(),
        query,
        body: Value::Null,
    };
    answer(&state, rec, |s| s.channels.clone()).await
}

async fn send(State(state): State<FakeState>, Json(body): Json<Value>) -> Response {
    let rec = Recorded {
        method: Method::POST,
        path: "/api/message/send".to_string(),
        query: HashMap::new(),
        body,
    };
    answer(&state, rec, |s| s.send.clone()).await
}

async fn schedule(State(state): State<FakeState>, Json(body): Json<Value>) -> Response {
    let rec = Recorded {
        method: Method::POST,
        path: "/api/message/schedule".to_string(),
        query: HashMap::new(),
        body,
    };
    answer(&state, rec, |s| s.schedule.clone()).await
}

async fn scheduled(
    State(state): State<FakeState>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    let rec = Recorded {
        method: Method::GET,
        path: "/api/message/scheduled".to_string(),
        query,
        body: Value::Null,
    };
    answer(&state, rec, |s| s.scheduled.clone()).await
}

async fn cancel(State(state): State<FakeState>, uri: Uri) -> Response {
    let rec = Recorded {
        method: Method::DELETE,
        path: uri.path().to_string(),
        query: HashMap::new(),
        body: Value::Null,
    };
    answer(&state, rec, |s| s.cancel.clone()).await
}
