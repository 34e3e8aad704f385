//! Application builder: wires router, middleware, and state into an Axum
//! app, and runs it.

use std::future::IntoFuture;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::middleware as axum_middleware;
use tokio::sync::watch;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use explorer_core::config::{AppConfig, DatabaseConfig, StoreBackend};
use explorer_core::error::{AppError, ErrorKind};
use explorer_database::migration::run_migrations;
use explorer_database::store::{FileStore, FolderStore};
use explorer_database::{DatabasePool, FileRepository, FolderRepository, MemoryStore};

use crate::middleware::cors::build_cors_layer;
use crate::middleware::logging::request_logging;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.server.cors);

    build_router(state)
        .layer(axum_middleware::from_fn(request_logging))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Store handles for the configured backend.
#[derive(Debug, Clone)]
pub struct Stores {
    /// Folder rows.
    pub folders: Arc<dyn FolderStore>,
    /// File rows.
    pub files: Arc<dyn FileStore>,
    /// The PostgreSQL pool, when that backend is in use.
    pub pool: Option<DatabasePool>,
}

impl Stores {
    /// Both stores backed by one fresh [`MemoryStore`].
    pub fn memory() -> Self {
        let store = Arc::new(MemoryStore::new());
        Self {
            folders: store.clone(),
            files: store,
            pool: None,
        }
    }

    /// Open the configured backend, running migrations when enabled.
    pub async fn open(config: &DatabaseConfig) -> Result<Self, AppError> {
        match config.backend {
            StoreBackend::Memory => {
                warn!("Using the in-memory store; data is lost on exit");
                Ok(Self::memory())
            }
            StoreBackend::Postgres => {
                let pool = DatabasePool::connect(config).await?;
                if config.run_migrations {
                    run_migrations(pool.pool()).await?;
                }
                Ok(Self {
                    folders: Arc::new(FolderRepository::new(pool.pool().clone())),
                    files: Arc::new(FileRepository::new(pool.pool().clone())),
                    pool: Some(pool),
                })
            }
        }
    }

    /// Release the connection pool, if any.
    pub async fn close(&self) {
        if let Some(pool) = &self.pool {
            pool.close().await;
        }
    }
}

/// Runs the server until a shutdown signal arrives.
pub async fn run_server(config: AppConfig) -> Result<(), AppError> {
    info!(backend = ?config.database.backend, "Starting folder explorer server");

    let stores = Stores::open(&config.database).await?;
    let addr = config.bind_address();
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);

    let state = AppState::new(config, stores.folders.clone(), stores.files.clone());
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&addr).await.map_err(|e| {
        AppError::with_source(ErrorKind::Internal, format!("Failed to bind {addr}: {e}"), e)
    })?;
    info!(%addr, "Folder explorer listening");

    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            let _ = shutdown_tx.send(true);
        })
        .into_future();

    let grace_timer = async move {
        // A closed channel means the server already finished.
        if shutdown_rx.wait_for(|stopping| *stopping).await.is_ok() {
            tokio::time::sleep(grace).await;
        } else {
            std::future::pending::<()>().await;
        }
    };

    let result = tokio::select! {
        res = server => res.map_err(|e| {
            AppError::with_source(ErrorKind::Internal, format!("Server error: {e}"), e)
        }),
        () = grace_timer => {
            warn!(grace_seconds = grace.as_secs(), "Shutdown grace period elapsed, dropping open connections");
            Ok(())
        }
    };

    stores.close().await;
    info!("Server stopped");
    result
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received, draining connections");
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode, header};
    use tower::ServiceExt;

    fn app_with(config: AppConfig) -> Router {
        let stores = Stores::memory();
        build_app(AppState::new(config, stores.folders, stores.files))
    }

    #[tokio::test]
    async fn test_cors_preflight_allows_configured_origin() {
        let mut config = AppConfig::default();
        config.server.cors.allowed_origins = vec!["http://localhost:5173".to_string()];

        let resp = app_with(config)
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/api/folders")
                    .header(header::ORIGIN, "http://localhost:5173")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .and_then(|v| v.to_str().ok()),
            Some("http://localhost:5173")
        );
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let resp = app_with(AppConfig::default())
            .oneshot(
                Request::builder()
                    .uri("/api/nope")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
