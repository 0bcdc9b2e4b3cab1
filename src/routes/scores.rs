//! Routes handling player score records.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{post, put},
};

use crate::{
    dto::{
        common::{CreatedResponse, MessageResponse},
        scores::{PlayerScoreInput, PlayerScoreView},
    },
    error::AppError,
    services::score_service,
    state::SharedState,
};

/// Configure the score routes subtree.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/player_score", post(add_score))
        .route(
            "/player_score/{id}",
            put(update_score).get(get_score).delete(delete_score),
        )
}

/// Record a new player score and return its assigned identifier.
#[utoipa::path(
    post,
    path = "/player_score",
    tag = "scores",
    request_body = PlayerScoreInput,
    responses(
        (status = 200, description = "Score recorded", body = CreatedResponse),
        (status = 503, description = "Storage unavailable")
    )
)]
pub async fn add_score(
    State(state): State<SharedState>,
    Json(payload): Json<PlayerScoreInput>,
) -> Result<Json<CreatedResponse>, AppError> {
    let response = score_service::record(&state, payload).await?;
    Ok(Json(response))
}

/// Replace an existing score record.
#[utoipa::path(
    put,
    path = "/player_score/{id}",
    tag = "scores",
    params(("id" = String, Path, description = "Identifier of the score to replace")),
    request_body = PlayerScoreInput,
    responses(
        (status = 200, description = "Score updated", body = MessageResponse),
        (status = 400, description = "Malformed identifier"),
        (status = 404, description = "Score not found")
    )
)]
pub async fn update_score(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Json(payload): Json<PlayerScoreInput>,
) -> Result<Json<MessageResponse>, AppError> {
    let response = score_service::update(&state, &id, payload).await?;
    Ok(Json(response))
}

/// Fetch a stored score record.
#[utoipa::path(
    get,
    path = "/player_score/{id}",
    tag = "scores",
    params(("id" = String, Path, description = "Identifier of the score to fetch")),
    responses(
        (status = 200, description = "Stored score", body = PlayerScoreView),
        (status = 400, description = "Malformed identifier"),
        (status = 404, description = "Score not found")
    )
)]
pub async fn get_score(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<PlayerScoreView>, AppError> {
    let response = score_service::fetch(&state, &id).await?;
    Ok(Json(response))
}

/// Delete a stored score record.
#[utoipa::path(
    delete,
    path = "/player_score/{id}",
    tag = "scores",
    params(("id" = String, Path, description = "Identifier of the score to delete")),
    responses(
        (status = 200, description = "Score deleted", body = MessageResponse),
        (status = 400, description = "Malformed identifier"),
        (status = 404, description = "Score not found")
    )
)]
pub async fn delete_score(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let response = score_service::remove(&state, &id).await?;
    Ok(Json(response))
}
