//! Route definitions for the folder explorer HTTP API.
//!
//! All routes are mounted under `/api`. The router receives `AppState` and
//! passes it to every handler via Axum's `State` extractor.

use axum::Router;
use axum::routing::{get, post};

use crate::handlers;
use crate::state::AppState;

/// Build the API router with state attached, without middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(folder_routes())
        .merge(file_routes())
        .merge(health_routes());

    Router::new().nest("/api", api_routes).with_state(state)
}

/// Tree, single folder, subfolders, creation
fn folder_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/folders",
            get(handlers::folder::get_tree).post(handlers::folder::create_folder),
        )
        .route("/folders/{id}", get(handlers::folder::get_folder))
        .route(
            "/folders/{id}/subfolders",
            get(handlers::folder::list_subfolders),
        )
        .route("/folders/{id}/files", get(handlers::file::list_files))
}

/// File creation and lookup
fn file_routes() -> Router<AppState> {
    Router::new()
        .route("/files", post(handlers::file::create_file))
        .route("/files/{id}", get(handlers::file::get_file))
}

fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
