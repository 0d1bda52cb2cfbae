//! HTTP server lifecycle for embedding and tests.
//!
//! `main` drives `axum::serve` directly with OS signal handling; this
//! module provides the bind → spawn background task → return handle
//! with shutdown channel pattern for callers that need to start and
//! stop the server programmatically.

use std::net::{IpAddr, SocketAddr};

use tokio::sync::oneshot;

use crate::api::router::app_router;
use crate::api::types::ApiContext;

/// Handle to a running server.
pub struct ServerHandle {
    pub addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl ServerHandle {
    /// Shut down the server gracefully. Safe to call more than once.
    pub fn shutdown(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
            tracing::info!("Server shutdown signal sent");
        }
    }
}

/// Bind to `ip` on an ephemeral port and serve the application router
/// in a background task.
pub async fn start_server_on(ctx: ApiContext, ip: IpAddr) -> Result<ServerHandle, String> {
    let listener = tokio::net::TcpListener::bind(SocketAddr::new(ip, 0))
        .await
        .map_err(|e| format!("Failed to bind server: {e}"))?;

    let addr = listener
        .local_addr()
        .map_err(|e| format!("Failed to get server address: {e}"))?;

    let app = app_router(ctx);
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    tokio::spawn(async move {
        let shutdown_signal = async move {
            let _ = shutdown_rx.await;
        };

        tracing::info!(%addr, "Server started");

        if let Err(e) = axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal)
            .await
        {
            tracing::error!("Server error: {e}");
        }

        tracing::info!("Server stopped");
    });

    Ok(ServerHandle {
        addr,
        shutdown_tx: Some(shutdown_tx),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn start_test_server() -> (ServerHandle, ApiContext, tempfile::TempDir) {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("medusa.db");
        crate::db::open_database(&path).unwrap();
        let ctx = ApiContext::new(path);

        let handle = start_server_on(
            ctx.clone(),
            IpAddr::V4(std::net::Ipv4Addr::LOCALHOST),
        )
        .await
        .expect("server should start");

        (handle, ctx, tmp)
    }

    #[tokio::test]
    async fn start_and_stop_server() {
        let (mut server, _ctx, _tmp) = start_test_server().await;
        assert!(server.addr.port() > 0);

        // Protected route without a token is rejected over real HTTP
        let url = format!("http://127.0.0.1:{}/home", server.addr.port());
        let resp = reqwest::get(&url).await.unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::UNAUTHORIZED);

        server.shutdown();
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
    }

    #[tokio::test]
    async fn shutdown_is_idempotent() {
        let (mut server, _ctx, _tmp) = start_test_server().await;
        server.shutdown();
        server.shutdown();
    }

    #[tokio::test]
    async fn full_flow_over_http() {
        let (mut server, _ctx, _tmp) = start_test_server().await;
        let base = format!("http://127.0.0.1:{}", server.addr.port());
        let client = reqwest::Client::new();

        // Register
        let resp = client
            .post(format!("{base}/register"))
            .json(&serde_json::json!({
                "username": "carol",
                "email": "carol@example.com",
                "password": "hunter2hunter2",
                "confirm_password": "hunter2hunter2",
            }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::CREATED);

        // Login
        let resp = client
            .post(format!("{base}/login"))
            .json(&serde_json::json!({
                "username": "carol",
                "password": "hunter2hunter2",
            }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::OK);
        let body: serde_json::Value = resp.json().await.unwrap();
        let token = body["token"].as_str().unwrap().to_string();

        // Search
        let resp = client
            .post(format!("{base}/search"))
            .bearer_auth(&token)
            .json(&serde_json::json!({"query": "headache"}))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::OK);
        let body: serde_json::Value = resp.json().await.unwrap();
        assert!(!body["medications"].as_array().unwrap().is_empty());

        // Profile shows the recorded search
        let resp = client
            .get(format!("{base}/profile"))
            .bearer_auth(&token)
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::OK);
        let body: serde_json::Value = resp.json().await.unwrap();
        assert_eq!(body["history"].as_array().unwrap().len(), 1);

        server.shutdown();
    }
}
