//! Routes handling audio clip storage.

use axum::{
    Json, Router,
    extract::{Multipart, Path, State},
    routing::{post, put},
};

use crate::{
    dto::{
        assets::{AssetDownload, AssetUploadForm},
        common::{CreatedResponse, MessageResponse},
    },
    error::AppError,
    routes::read_asset_upload,
    services::asset_service::{self, AUDIO_CLIPS},
    state::SharedState,
};

/// Configure the audio routes subtree.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/upload_audio", post(upload_audio))
        .route(
            "/upload_audio/{id}",
            put(update_audio).get(get_audio).delete(delete_audio),
        )
}

/// Store a new audio clip and return its assigned identifier.
#[utoipa::path(
    post,
    path = "/upload_audio",
    tag = "audio",
    request_body(content = AssetUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Audio file uploaded", body = CreatedResponse),
        (status = 400, description = "Malformed multipart payload"),
        (status = 503, description = "Storage unavailable")
    )
)]
pub async fn upload_audio(
    State(state): State<SharedState>,
    multipart: Multipart,
) -> Result<Json<CreatedResponse>, AppError> {
    let asset = read_asset_upload(multipart).await?;
    let response = asset_service::upload(&state, &AUDIO_CLIPS, asset).await?;
    Ok(Json(response))
}

/// Replace an existing audio clip with a newly uploaded file.
#[utoipa::path(
    put,
    path = "/upload_audio/{id}",
    tag = "audio",
    params(("id" = String, Path, description = "Identifier of the audio clip to replace")),
    request_body(content = AssetUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Audio file updated", body = MessageResponse),
        (status = 400, description = "Malformed identifier or payload"),
        (status = 404, description = "Audio file not found")
    )
)]
pub async fn update_audio(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    multipart: Multipart,
) -> Result<Json<MessageResponse>, AppError> {
    let asset = read_asset_upload(multipart).await?;
    let response = asset_service::update(&state, &AUDIO_CLIPS, &id, asset).await?;
    Ok(Json(response))
}

/// Fetch a stored audio clip.
#[utoipa::path(
    get,
    path = "/upload_audio/{id}",
    tag = "audio",
    params(("id" = String, Path, description = "Identifier of the audio clip to fetch")),
    responses(
        (status = 200, description = "Stored audio clip", body = AssetDownload),
        (status = 400, description = "Malformed identifier"),
        (status = 404, description = "Audio file not found")
    )
)]
pub async fn get_audio(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<AssetDownload>, AppError> {
    let response = asset_service::fetch(&state, &AUDIO_CLIPS, &id).await?;
    Ok(Json(response))
}

/// Delete a stored audio clip.
#[utoipa::path(
    delete,
    path = "/upload_audio/{id}",
    tag = "audio",
    params(("id" = String, Path, description = "Identifier of the audio clip to delete")),
    responses(
        (status = 200, description = "Audio file deleted", body = MessageResponse),
        (status = 400, description = "Malformed identifier"),
        (status = 404, description = "Audio file not found")
    )
)]
pub async fn delete_audio(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let response = asset_service::remove(&state, &AUDIO_CLIPS, &id).await?;
    Ok(Json(response))
}
