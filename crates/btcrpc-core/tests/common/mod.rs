//! In-process mock node for integration tests.
//!
//! Serves `POST /` on `127.0.0.1:0` with axum and records every request it
//! receives so tests can inspect headers and envelopes.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex, Once};

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::Router;
use btcrpc_core::ClientConfig;

static TRACING_INIT: Once = Once::new();

pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("btcrpc_core=debug")),
            )
            .with_test_writer()
            .try_init();
    });
}

/// How the mock node answers.
#[derive(Clone)]
pub enum Reply {
    /// Same status and body for every request.
    Fixed { status: u16, body: String },
    /// `{"result":null,"error":null,"id":<request id>}` with 200.
    EchoId,
    /// 401 with an empty body unless the `Authorization` header matches
    /// exactly, then 200 with `body`.
    RequireAuth { authorization: String, body: String },
}

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub headers: HeaderMap,
    pub body: String,
}

impl RecordedRequest {
    pub fn envelope(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("client must send valid JSON")
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

struct NodeState {
    reply: Reply,
    requests: Mutex<Vec<RecordedRequest>>,
}

pub struct MockNode {
    pub addr: SocketAddr,
    state: Arc<NodeState>,
}

impl MockNode {
    pub async fn start(reply: Reply) -> Self {
        init_tracing();

        let state = Arc::new(NodeState {
            reply,
            requests: Mutex::new(Vec::new()),
        });
        let router = Router::new()
            .route("/", post(handle))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("mock node must bind");
        let addr = listener.local_addr().expect("listener must have an address");
        tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });

        Self { addr, state }
    }

    pub fn fixed(status: u16, body: &str) -> Reply {
        Reply::Fixed {
            status,
            body: body.to_owned(),
        }
    }

    /// Client config pointed at this node, unauthenticated.
    pub fn config(&self) -> ClientConfig {
        ClientConfig::new(self.addr.ip().to_string(), self.addr.port().to_string())
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().expect("lock").clone()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests()
            .pop()
            .expect("mock node must have received a request")
    }
}

async fn handle(
    State(state): State<Arc<NodeState>>,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, String) {
    state.requests.lock().expect("lock").push(RecordedRequest {
        headers: headers.clone(),
        body: body.clone(),
    });

    match &state.reply {
        Reply::Fixed { status, body } => (
            StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            body.clone(),
        ),
        Reply::EchoId => {
            let id = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|req| req.get("id").cloned())
                .unwrap_or(serde_json::Value::Null);
            (
                StatusCode::OK,
                serde_json::json!({ "result": null, "error": null, "id": id }).to_string(),
            )
        }
        Reply::RequireAuth {
            authorization,
            body,
        } => {
            let presented = headers
                .get("authorization")
                .and_then(|v| v.to_str().ok());
            if presented == Some(authorization.as_str()) {
                (StatusCode::OK, body.clone())
            } else {
                (StatusCode::UNAUTHORIZED, String::new())
            }
        }
    }
}
