//! Mock Giphy server for testing the search client.

#![allow(dead_code)]

use axum::body::Body;
use axum::extract::{Query, State};
use axum::http::{Response, StatusCode, Uri};
use axum::routing::any;
use axum::Router;
use serde_json::json;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// A captured request for assertions.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub path: String,
    pub params: HashMap<String, String>,
}

/// A mock response to return.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub body: String,
    pub delay_ms: u64,
}

impl Default for MockResponse {
    fn default() -> Self {
        Self::gifs(&[])
    }
}

impl MockResponse {
    /// Successful search response with `(id, title)` entries.
    pub fn gifs(entries: &[(&str, &str)]) -> Self {
        Self::raw(200, &search_body(entries))
    }

    pub fn error(status: u16, message: &str) -> Self {
        Self::raw(
            status,
            &json!({ "meta": { "status": status, "msg": message } }).to_string(),
        )
    }

    pub fn raw(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            delay_ms: 0,
        }
    }

    pub fn delayed(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }
}

/// JSON body shaped like Giphy's search endpoint.
pub fn search_body(entries: &[(&str, &str)]) -> String {
    let data: Vec<_> = entries
        .iter()
        .map(|(id, title)| {
            json!({
                "type": "gif",
                "id": id,
                "title": title,
                "images": {
                    "original": { "url": format!("https://media.test/{id}/giphy.gif") },
                    "fixed_width": {
                        "url": fixed_width_url(id),
                        "width": "200",
                    },
                },
            })
        })
        .collect();
    json!({ "data": data, "pagination": { "count": entries.len() } }).to_string()
}

pub fn fixed_width_url(id: &str) -> String {
    format!("https://media.test/{id}/200w.gif")
}

#[derive(Clone, Default)]
struct MockState {
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
    by_query: Arc<Mutex<HashMap<String, MockResponse>>>,
    fallback: Arc<Mutex<MockResponse>>,
}

pub struct MockGiphy {
    addr: SocketAddr,
    state: MockState,
    shutdown: tokio::sync::watch::Sender<bool>,
}

impl MockGiphy {
    pub async fn start() -> Self {
        let state = MockState::default();
        let (shutdown_tx, mut shutdown_rx) = tokio::sync::watch::channel(false);

        let app = Router::new()
            .route("/{*path}", any(handle_request))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock server");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.changed().await;
                })
                .await
                .ok();
        });

        Self {
            addr,
            state,
            shutdown: shutdown_tx,
        }
    }

    /// Response for requests whose `q` parameter equals `query`.
    pub async fn respond_to(&self, query: &str, resp: MockResponse) {
        self.state
            .by_query
            .lock()
            .await
            .insert(query.to_string(), resp);
    }

    /// Response for every query without a specific one.
    pub async fn respond_to_all(&self, resp: MockResponse) {
        *self.state.fallback.lock().await = resp;
    }

    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.state.requests.lock().await.clone()
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for MockGiphy {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
    }
}

async fn handle_request(
    State(state): State<MockState>,
    uri: Uri,
    Query(params): Query<HashMap<String, String>>,
) -> Response<Body> {
    let query = params.get("q").cloned().unwrap_or_default();
    state.requests.lock().await.push(CapturedRequest {
        path: uri.path().to_string(),
        params,
    });

    let specific = state.by_query.lock().await.get(&query).cloned();
    let mock_resp = match specific {
        Some(resp) => resp,
        None => state.fallback.lock().await.clone(),
    };

    if mock_resp.delay_ms > 0 {
        tokio::time::sleep(tokio::time::Duration::from_millis(mock_resp.delay_ms)).await;
    }

    Response::builder()
        .status(StatusCode::from_u16(mock_resp.status).unwrap())
        .header("content-type", "application/json")
        .body(Body::from(mock_resp.body))
        .unwrap()
}
