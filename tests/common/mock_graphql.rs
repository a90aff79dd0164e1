//! Mock GraphQL server for testing the HTTP fetcher.

#![allow(dead_code)]

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::Value;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

#[derive(Clone)]
struct MockState {
    status: StatusCode,
    body: String,
    requests: Arc<Mutex<Vec<Value>>>,
}

/// A running mock server.
pub struct MockGraphql {
    pub url: String,
    requests: Arc<Mutex<Vec<Value>>>,
}

impl MockGraphql {
    /// Start a server answering every POST with `status` and the raw `body`.
    pub async fn start(status: u16, body: impl Into<String>) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            status: StatusCode::from_u16(status).expect("valid status code"),
            body: body.into(),
            requests: requests.clone(),
        };

        let app = Router::new().route("/", post(handle)).with_state(state);
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock server");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            url: format!("http://{}/", addr),
            requests,
        }
    }

    /// Start a server answering with `status` and a JSON body.
    pub async fn json(status: u16, body: Value) -> Self {
        Self::start(status, body.to_string()).await
    }

    /// Request bodies received so far.
    pub async fn requests(&self) -> Vec<Value> {
        self.requests.lock().await.clone()
    }
}

async fn handle(State(state): State<MockState>, Json(request): Json<Value>) -> (StatusCode, String) {
    state.requests.lock().await.push(request);
    (state.status, state.body.clone())
}
