//! File listing and creation handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use explorer_entity::FileItem;
use explorer_service::file::CreateFileRequest as SvcCreateFile;

use crate::dto::request::CreateFileRequest;
use crate::error::ApiResult;
use crate::extractors::{ValidatedJson, parse_id};
use crate::state::AppState;

/// GET /api/folders/{id}/files
pub async fn list_files(
    State(state): State<AppState>,
    Path(folder_id): Path<String>,
) -> ApiResult<Json<Vec<FileItem>>> {
    let folder_id = parse_id(&folder_id, "Invalid folder id")?;
    let files = state.file_service.list_files(folder_id).await?;
    Ok(Json(files))
}

/// GET /api/files/{id}
pub async fn get_file(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<FileItem>> {
    let id = parse_id(&id, "Invalid file id")?;
    let file = state.file_service.get_file(id).await?;
    Ok(Json(file))
}

/// POST /api/files
pub async fn create_file(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateFileRequest>,
) -> ApiResult<(StatusCode, Json<FileItem>)> {
    let file = state
        .file_service
        .create_file(SvcCreateFile {
            folder_id: req.folder_id,
            name: req.name,
            file_type: req.file_type,
            file_size: req.file_size,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(file)))
}
