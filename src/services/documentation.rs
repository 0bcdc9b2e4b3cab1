//! Aggregated OpenAPI specification.

use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for the multimedia vault API.
#[openapi(
    paths(
        crate::routes::health::healthcheck,
        crate::routes::sprites::upload_sprite,
        crate::routes::sprites::update_sprite,
        crate::routes::sprites::get_sprite,
        crate::routes::sprites::delete_sprite,
        crate::routes::audio::upload_audio,
        crate::routes::audio::update_audio,
        crate::routes::audio::get_audio,
        crate::routes::audio::delete_audio,
        crate::routes::scores::add_score,
        crate::routes::scores::update_score,
        crate::routes::scores::get_score,
        crate::routes::scores::delete_score,
    ),
    components(
        schemas(
            crate::dto::health::HealthResponse,
            crate::dto::common::MessageResponse,
            crate::dto::common::CreatedResponse,
            crate::dto::assets::AssetUploadForm,
            crate::dto::assets::AssetDownload,
            crate::dto::scores::PlayerScoreInput,
            crate::dto::scores::PlayerScoreView,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "sprites", description = "Binary sprite asset storage"),
        (name = "audio", description = "Binary audio clip storage"),
        (name = "scores", description = "Player score records"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_document_lists_every_resource_path() {
        let doc = ApiDoc::openapi();
        for path in [
            "/healthcheck",
            "/upload_sprite",
            "/upload_sprite/{id}",
            "/upload_audio",
            "/upload_audio/{id}",
            "/player_score",
            "/player_score/{id}",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing path {path}");
        }
    }
}
