//! Shared utilities for integration and load testing.

use std::net::SocketAddr;
use std::sync::Arc;

use livematch_api::config::AppConfig;
use livematch_api::lifecycle::Shutdown;
use livematch_api::matches::MatchStore;
use livematch_api::HttpServer;
use tokio::net::TcpListener;

/// A server running on an ephemeral port; stops when dropped.
pub struct TestServer {
    pub addr: SocketAddr,
    shutdown: Shutdown,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    #[allow(dead_code)]
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Loopback, no metrics exporter, calendar dates in IST.
pub fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.listener.bind_address = "127.0.0.1:0".to_string();
    config.observability.metrics_enabled = false;
    config.data.calendar_utc_offset = Some("+05:30".to_string());
    config
}

/// Start a server over the built-in data.
#[allow(dead_code)]
pub async fn start_server() -> TestServer {
    serve(HttpServer::new(test_config()).unwrap()).await
}

/// Start a server over a custom store.
#[allow(dead_code)]
pub async fn start_server_with_store(store: Arc<dyn MatchStore>) -> TestServer {
    serve(HttpServer::with_store(test_config(), store).unwrap()).await
}

async fn serve(server: HttpServer) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    TestServer { addr, shutdown }
}

/// GET `path` and return status and parsed JSON body.
#[allow(dead_code)]
pub async fn get_json(server: &TestServer, path: &str) -> (u16, serde_json::Value) {
    let res = reqwest::get(server.url(path)).await.unwrap();
    let status = res.status().as_u16();
    let body = res.json().await.unwrap();
    (status, body)
}
