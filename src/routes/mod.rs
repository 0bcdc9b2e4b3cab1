//! HTTP route trees, one module per resource kind.

use axum::{Router, extract::Multipart};

use crate::{dao::models::BinaryAssetEntity, error::AppError, state::SharedState};

pub mod audio;
pub mod docs;
pub mod health;
pub mod scores;
pub mod sprites;

/// Compose all route trees, wiring in shared state and documentation routes.
pub fn router(state: SharedState) -> Router<()> {
    let api_router = health::router()
        .merge(sprites::router())
        .merge(audio::router())
        .merge(scores::router());

    let docs_router = docs::router(state.clone());

    api_router.merge(docs_router).with_state(state)
}

/// Pull the uploaded asset out of a multipart body.
///
/// The upload endpoints expect a single part named `file`; its filename and
/// bytes become the stored document. Anything else is a client error.
pub(crate) async fn read_asset_upload(
    mut multipart: Multipart,
) -> Result<BinaryAssetEntity, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| AppError::BadRequest(format!("invalid multipart payload: {err}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field
            .file_name()
            .map(ToOwned::to_owned)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| AppError::BadRequest("`file` part is missing a filename".into()))?;

        let content = field
            .bytes()
            .await
            .map_err(|err| AppError::BadRequest(format!("failed to read `file` part: {err}")))?
            .to_vec();

        return Ok(BinaryAssetEntity { filename, content });
    }

    Err(AppError::BadRequest(
        "missing `file` part in multipart payload".into(),
    ))
}
