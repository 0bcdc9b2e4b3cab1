//! Routes handling sprite asset storage.

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
    services::asset_service::{self, SPRITES},
    state::SharedState,
};

/// Configure the sprite routes subtree.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/upload_sprite", post(upload_sprite))
        .route(
            "/upload_sprite/{id}",
            put(update_sprite).get(get_sprite).delete(delete_sprite),
        )
}

/// Store a new sprite and return its assigned identifier.
#[utoipa::path(
    post,
    path = "/upload_sprite",
    tag = "sprites",
    request_body(content = AssetUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Sprite uploaded", body = CreatedResponse),
        (status = 400, description = "Malformed multipart payload"),
        (status = 503, description = "Storage unavailable")
    )
)]
pub async fn upload_sprite(
    State(state): State<SharedState>,
    multipart: Multipart,
) -> Result<Json<CreatedResponse>, AppError> {
    let asset = read_asset_upload(multipart).await?;
    let response = asset_service::upload(&state, &SPRITES, asset).await?;
    Ok(Json(response))
}

/// Replace an existing sprite with a newly uploaded file.
#[utoipa::path(
    put,
    path = "/upload_sprite/{id}",
    tag = "sprites",
    params(("id" = String, Path, description = "Identifier of the sprite to replace")),
    request_body(content = AssetUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Sprite updated", body = MessageResponse),
        (status = 400, description = "Malformed identifier or payload"),
        (status = 404, description = "Sprite not found")
    )
)]
pub async fn update_sprite(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    multipart: Multipart,
) -> Result<Json<MessageResponse>, AppError> {
    let asset = read_asset_upload(multipart).await?;
    let response = asset_service::update(&state, &SPRITES, &id, asset).await?;
    Ok(Json(response))
}

/// Fetch a stored sprite.
#[utoipa::path(
    get,
    path = "/upload_sprite/{id}",
    tag = "sprites",
    params(("id" = String, Path, description = "Identifier of the sprite to fetch")),
    responses(
        (status = 200, description = "Stored sprite", body = AssetDownload),
        (status = 400, description = "Malformed identifier"),
        (status = 404, description = "Sprite not found")
    )
)]
pub async fn get_sprite(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<AssetDownload>, AppError> {
    let response = asset_service::fetch(&state, &SPRITES, &id).await?;
    Ok(Json(response))
}

/// Delete a stored sprite.
#[utoipa::path(
    delete,
    path = "/upload_sprite/{id}",
    tag = "sprites",
    params(("id" = String, Path, description = "Identifier of the sprite to delete")),
    responses(
        (status = 200, description = "Sprite deleted", body = MessageResponse),
        (status = 400, description = "Malformed identifier"),
        (status = 404, description = "Sprite not found")
    )
)]
pub async fn delete_sprite(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let response = asset_service::remove(&state, &SPRITES, &id).await?;
    Ok(Json(response))
}
