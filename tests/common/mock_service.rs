//! Mock profile service for integration tests.
//!
//! Serves `/api/user?id={id}` and `/icons/{name}` from scripted
//! responses and records every hit so tests can assert on request
//! order and absence.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::extract::{Path, Query, State};
use axum::http::{Response, StatusCode};
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

use usercard::ServiceConfig;

/// A scripted response.
#[derive(Debug, Clone)]
pub struct Scripted {
    pub status: u16,
    pub content_type: String,
    pub body: Vec<u8>,
    pub delay_ms: u64,
}

impl Scripted {
    pub fn json(body: &str) -> Self {
        Self {
            status: 200,
            content_type: "application/json".to_string(),
            body: body.as_bytes().to_vec(),
            delay_ms: 0,
        }
    }

    pub fn bytes(content_type: &str, body: Vec<u8>) -> Self {
        Self {
            status: 200,
            content_type: content_type.to_string(),
            body,
            delay_ms: 0,
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            status,
            content_type: "text/plain".to_string(),
            body: Vec::new(),
            delay_ms: 0,
        }
    }

    pub fn with_delay(mut self, ms: u64) -> Self {
        self.delay_ms = ms;
        self
    }
}

#[derive(Clone)]
struct ServiceState {
    users: Arc<Mutex<HashMap<String, Scripted>>>,
    icons: Arc<Mutex<HashMap<String, Scripted>>>,
    hits: Arc<Mutex<Vec<String>>>,
}

/// In-process profile service.
pub struct MockProfileService {
    pub addr: SocketAddr,
    state: ServiceState,
    shutdown: tokio::sync::watch::Sender<bool>,
}

impl MockProfileService {
    /// Start a new mock service on a free local port.
    pub async fn start() -> Self {
        let state = ServiceState {
            users: Arc::new(Mutex::new(HashMap::new())),
            icons: Arc::new(Mutex::new(HashMap::new())),
            hits: Arc::new(Mutex::new(Vec::new())),
        };

        let (shutdown_tx, mut shutdown_rx) = tokio::sync::watch::channel(false);

        let app = Router::new()
            .route("/api/user", get(serve_user))
            .route("/icons/{name}", get(serve_icon))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock service");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.changed().await;
                })
                .await
                .ok();
        });

        // Wait for server to be ready
        tokio::time::sleep(Duration::from_millis(10)).await;

        Self {
            addr,
            state,
            shutdown: shutdown_tx,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Config pointing at this service.
    pub fn config(&self) -> ServiceConfig {
        ServiceConfig {
            base_url: self.base_url(),
            ..ServiceConfig::default()
        }
    }

    /// Serve a healthy user whose icon is the given PNG at
    /// `/icons/{id}.png`.
    pub async fn add_user(&self, id: u64, name: &str, png: Vec<u8>) {
        let icon_name = format!("{id}.png");
        let record = format!(
            r#"{{"name": "{name}", "iconURL": "{}/icons/{icon_name}"}}"#,
            self.base_url()
        );
        self.script_user(id, Scripted::json(&record)).await;
        self.script_icon(&icon_name, Scripted::bytes("image/png", png))
            .await;
    }

    /// Script the `/api/user` response for `id`. Without a script the
    /// service answers 404.
    pub async fn script_user(&self, id: u64, resp: Scripted) {
        self.state.users.lock().await.insert(id.to_string(), resp);
    }

    /// Script the `/icons/{name}` response.
    pub async fn script_icon(&self, name: &str, resp: Scripted) {
        self.state.icons.lock().await.insert(name.to_string(), resp);
    }

    /// Paths hit so far, in arrival order. A hit is recorded before any
    /// scripted delay, so slow responses still count immediately.
    pub async fn hits(&self) -> Vec<String> {
        self.state.hits.lock().await.clone()
    }
}

impl Drop for MockProfileService {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
    }
}

async fn serve_user(
    State(state): State<ServiceState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response<Body> {
    let id = params.get("id").cloned().unwrap_or_default();
    state.hits.lock().await.push(format!("/api/user?id={id}"));

    let scripted = state.users.lock().await.get(&id).cloned();
    respond(scripted).await
}

async fn serve_icon(
    State(state): State<ServiceState>,
    Path(name): Path<String>,
) -> Response<Body> {
    state.hits.lock().await.push(format!("/icons/{name}"));

    let scripted = state.icons.lock().await.get(&name).cloned();
    respond(scripted).await
}

async fn respond(scripted: Option<Scripted>) -> Response<Body> {
    let Some(resp) = scripted else {
        return Response::builder()
            .status(StatusCode::NOT_FOUND)
            .body(Body::empty())
            .unwrap();
    };

    if resp.delay_ms > 0 {
        tokio::time::sleep(Duration::from_millis(resp.delay_ms)).await;
    }

    Response::builder()
        .status(StatusCode::from_u16(resp.status).unwrap())
        .header("content-type", resp.content_type)
        .body(Body::from(resp.body))
        .unwrap()
}
