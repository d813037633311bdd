//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use axum::{http::StatusCode, routing::get, Json, Router};
use tokio::io::AsyncWriteExt;
use tokio::net::TcpListener;

use ares_frontend::config::FrontendConfig;
use ares_frontend::http::HttpServer;
use ares_frontend::lifecycle::Shutdown;

/// Start the front-end on an ephemeral port.
///
/// The listener is bound before the server task is spawned, so callers
/// can connect immediately without polling for readiness.
pub async fn start_frontend(mut config: FrontendConfig) -> (SocketAddr, Shutdown) {
    config.listener.bind_address = "127.0.0.1:0".to_string();
    let listener = TcpListener::bind(&config.listener.bind_address)
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(config).unwrap();

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    (addr, shutdown)
}

/// Start a mock upstream that answers `GET /api` with the given JSON and
/// counts hits.
#[allow(dead_code)]
pub async fn start_json_upstream(body: serde_json::Value) -> (SocketAddr, Arc<AtomicU32>) {
    let hits = Arc::new(AtomicU32::new(0));
    let counter = hits.clone();

    let app = Router::new().route(
        "/api",
        get(move || {
            let counter = counter.clone();
            let body = body.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Json(body)
            }
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    (addr, hits)
}

/// Start a mock upstream that answers `GET /api` with the given status
/// code and JSON body.
#[allow(dead_code)]
pub async fn start_status_json_upstream(status: u16, body: serde_json::Value) -> SocketAddr {
    let app = Router::new().route(
        "/api",
        get(move || {
            let body = body.clone();
            async move { (StatusCode::from_u16(status).unwrap(), Json(body)) }
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    addr
}

/// Start a mock upstream that returns a fixed non-JSON body for every
/// request.
#[allow(dead_code)]
pub async fn start_plain_upstream(body: &'static str) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    tokio::spawn(async move {
                        let response = format!(
                            "HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}

/// Reserve an address nothing listens on, for connection-refused cases.
#[allow(dead_code)]
pub async fn unreachable_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}
