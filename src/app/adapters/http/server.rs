//! HTTP server implementation
//!
//! Binds the listener, attaches the optional CORS and tracing layers and
//! serves until the shutdown signal resolves.

use super::routes::create_router;
use crate::app::services::lookup::LookupService;
use crate::app::services::student_catalog::StudentCatalog;
use crate::config::ServerConfig;
use crate::{Error, Result};
use axum::Router;
use axum::http::{Method, header};
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

// ============================================================================
// App State
// ============================================================================

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Lookup service over the loaded catalog
    pub lookup: LookupService,

    /// Server start time
    pub start_time: Instant,
}

impl AppState {
    pub fn new(catalog: Arc<StudentCatalog>) -> Self {
        Self {
            lookup: LookupService::new(catalog),
            start_time: Instant::now(),
        }
    }
}

// ============================================================================
// HTTP Server
// ============================================================================

/// Lookup API server
pub struct HttpServer {
    config: ServerConfig,
    state: AppState,
}

impl HttpServer {
    /// Create a server over an already loaded catalog
    pub fn new(config: ServerConfig, catalog: Arc<StudentCatalog>) -> Self {
        Self {
            config,
            state: AppState::new(catalog),
        }
    }

    /// Get the application state
    pub fn state(&self) -> AppState {
        self.state.clone()
    }

    /// Configured listen address
    pub fn bind_address(&self) -> SocketAddr {
        self.config.bind_address
    }

    /// Build the router with all routes and enabled layers
    pub fn build_router(&self) -> Router {
        let mut router = create_router(self.state.clone());

        if self.config.enable_cors {
            router = router.layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                    .allow_headers([header::CONTENT_TYPE]),
            );
        }

        if self.config.enable_request_logging {
            router = router.layer(TraceLayer::new_for_http());
        }

        router
    }

    /// Serve until `shutdown_signal` resolves
    ///
    /// # Errors
    /// * Returns `Error::Server` if the address cannot be bound or serving fails
    pub async fn run_with_shutdown(
        &self,
        shutdown_signal: impl Future<Output = ()> + Send + 'static,
    ) -> Result<()> {
        let router = self.build_router();
        let addr = self.config.bind_address;

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| Error::server(format!("Failed to bind {}", addr), e))?;

        info!(
            "Serving {} records on http://{}",
            self.state.lookup.record_count(),
            addr
        );

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal)
            .await
            .map_err(|e| Error::server("HTTP server terminated", e))?;

        info!(
            "Server shutdown complete after {:.1}s",
            self.state.start_time.elapsed().as_secs_f64()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::Student;

    fn create_test_catalog() -> Arc<StudentCatalog> {
        Arc::new(StudentCatalog::from_records(vec![
            Student::new("2025", "计算机学院", "计科2501", "202501010001", "张三", "计算机科学与技术")
                .unwrap(),
        ]))
    }

    #[test]
    fn test_state_shares_catalog() {
        let catalog = create_test_catalog();
        let server = HttpServer::new(ServerConfig::default(), Arc::clone(&catalog));

        assert_eq!(server.state().lookup.record_count(), 1);
        assert_eq!(Arc::strong_count(&catalog), 2);
        assert_eq!(server.bind_address().to_string(), "0.0.0.0:8080");
    }

    #[test]
    fn test_build_router_with_and_without_layers() {
        let catalog = create_test_catalog();
        let _ = HttpServer::new(ServerConfig::default(), Arc::clone(&catalog)).build_router();

        let config = ServerConfig {
            enable_cors: false,
            enable_request_logging: false,
            ..ServerConfig::default()
        };
        let _ = HttpServer::new(config, catalog).build_router();
    }

    #[tokio::test]
    async fn test_run_reports_bind_failure() {
        let occupied = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let config = ServerConfig {
            bind_address: occupied.local_addr().unwrap(),
            ..ServerConfig::default()
        };

        let server = HttpServer::new(config, create_test_catalog());
        let result = server.run_with_shutdown(async {}).await;
        assert!(matches!(result, Err(Error::Server { .. })));
    }

    #[tokio::test]
    async fn test_run_stops_on_shutdown_signal() {
        let config = ServerConfig {
            bind_address: "127.0.0.1:0".parse().unwrap(),
            ..ServerConfig::default()
        };

        let server = HttpServer::new(config, create_test_catalog());
        let result = server.run_with_shutdown(async {}).await;
        assert!(result.is_ok());
    }
}
