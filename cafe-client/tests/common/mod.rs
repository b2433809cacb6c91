// cafe-client/tests/common/mod.rs
// In-process mock of the café backend

#![allow(dead_code)]

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use cafe_client::{ClientConfig, HttpClient, LocalStorage, SessionStore, Storefront};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// A request as the backend saw it
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: Value,
}

#[derive(Clone)]
enum Reply {
    Json(Value),
    Text(String),
}

#[derive(Clone, Default)]
struct MockState {
    routes: Arc<Mutex<HashMap<(String, String), (StatusCode, Reply)>>>,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

pub struct MockBackend {
    pub url: String,
    state: MockState,
}

impl MockBackend {
    pub async fn start() -> Self {
        let state = MockState::default();
        let app = Router::new().fallback(record).with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            url: format!("http://{addr}"),
            state,
        }
    }

    /// Answer `method path` (path includes the `/api` prefix)
    pub fn respond(&self, method: &str, path: &str, status: u16, body: Value) {
        self.route(method, path, status, Reply::Json(body));
    }

    /// Answer with a plain text body
    pub fn respond_text(&self, method: &str, path: &str, status: u16, body: &str) {
        self.route(method, path, status, Reply::Text(body.to_string()));
    }

    fn route(&self, method: &str, path: &str, status: u16, reply: Reply) {
        self.state.routes.lock().unwrap().insert(
            (method.to_string(), path.to_string()),
            (StatusCode::from_u16(status).unwrap(), reply),
        );
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn requests_to(&self, method: &str, path: &str) -> Vec<Recorded> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == method && r.path == path)
            .collect()
    }

    pub fn config(&self) -> ClientConfig {
        ClientConfig::new(&self.url).with_timeout(5)
    }

    /// Storefront over in-memory storage
    pub fn storefront(&self) -> Storefront {
        self.storefront_with(SessionStore::new(LocalStorage::in_memory()))
    }

    pub fn storefront_with(&self, session: SessionStore) -> Storefront {
        Storefront::new(HttpClient::with_session(&self.config(), session).unwrap())
    }
}

async fn record(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let header_str = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    let body_value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&body).into_owned()))
    };

    state.requests.lock().unwrap().push(Recorded {
        method: method.to_string(),
        path: uri.path().to_string(),
        authorization: header_str(header::AUTHORIZATION),
        content_type: header_str(header::CONTENT_TYPE),
        body: body_value,
    });

    let route = state
        .routes
        .lock()
        .unwrap()
        .get(&(method.to_string(), uri.path().to_string()))
        .cloned();

    match route {
        Some((status, Reply::Json(body))) => (status, axum::Json(body)).into_response(),
        Some((status, Reply::Text(body))) => (status, body).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            axum::Json(serde_json::json!({ "message": "no such route" })),
        )
            .into_response(),
    }
}
