//! Folder tree and folder CRUD handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use explorer_entity::FolderNode;
use explorer_service::folder::CreateFolderRequest as SvcCreateFolder;

use crate::dto::request::CreateFolderRequest;
use crate::error::ApiResult;
use crate::extractors::{ValidatedJson, parse_id};
use crate::state::AppState;

const INVALID_FOLDER_ID: &str = "Invalid folder id";

/// GET /api/folders
pub async fn get_tree(State(state): State<AppState>) -> ApiResult<Json<Vec<FolderNode>>> {
    let tree = state.tree_service.get_tree().await?;
    Ok(Json(tree))
}

/// GET /api/folders/{id}
pub async fn get_folder(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<FolderNode>> {
    let id = parse_id(&id, INVALID_FOLDER_ID)?;
    let folder = state.folder_service.get_folder(id).await?;
    Ok(Json(folder))
}

/// GET /api/folders/{id}/subfolders
pub async fn list_subfolders(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Vec<FolderNode>>> {
    let id = parse_id(&id, INVALID_FOLDER_ID)?;
    let subfolders = state.folder_service.list_subfolders(id).await?;
    Ok(Json(subfolders))
}

/// POST /api/folders
pub async fn create_folder(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateFolderRequest>,
) -> ApiResult<(StatusCode, Json<FolderNode>)> {
    let folder = state
        .folder_service
        .create_folder(SvcCreateFolder {
            parent_id: req.parent_id,
            name: req.name,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(FolderNode::from(folder))))
}
