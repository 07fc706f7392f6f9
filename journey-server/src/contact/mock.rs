//! Stand-in form service for tests.
//!
//! Listens on an ephemeral local port, records every JSON body posted to
//! `/submit` and answers with a fixed status and body.

use std::sync::Arc;

use axum::{Json, Router, http::StatusCode, routing::post};
use serde_json::Value;
use tokio::sync::Mutex;

use super::client::ContactClientConfig;

/// A running mock form service.
pub struct MockFormService {
    /// Submission URL to point a client at.
    pub endpoint: String,
    received: Arc<Mutex<Vec<Value>>>,
}

impl MockFormService {
    /// Start a service that answers every submission with `status` and `body`.
    pub async fn start(status: StatusCode, body: &'static str) -> Self {
        let received = Arc::new(Mutex::new(Vec::new()));
        let captured = Arc::clone(&received);

        let app = Router::new().route(
            "/submit",
            post(move |Json(payload): Json<Value>| {
                let captured = Arc::clone(&captured);
                async move {
                    captured.lock().await.push(payload);
                    (status, body)
                }
            }),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock form service");
        let addr = listener.local_addr().expect("mock form service address");
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self {
            endpoint: format!("http://{addr}/submit"),
            received,
        }
    }

    /// Start a service that accepts every submission.
    pub async fn accepting() -> Self {
        Self::start(
            StatusCode::OK,
            r#"{"success":true,"message":"Email sent successfully!"}"#,
        )
        .await
    }

    /// Client config pointed at this service.
    pub fn config(&self, access_key: &str) -> ContactClientConfig {
        ContactClientConfig::new(access_key)
            .with_endpoint(&self.endpoint)
            .with_timeout(5)
    }

    /// Bodies received so far, in arrival order.
    pub async fn received(&self) -> Vec<Value> {
        self.received.lock().await.clone()
    }
}
