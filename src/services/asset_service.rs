//! Create/replace/read/delete operations shared by the binary asset kinds.

use crate::{
    dao::{
        models::BinaryAssetEntity,
        mongodb::{models::BinaryAssetDocument, repository::DocumentRepository},
    },
    dto::{
        assets::AssetDownload,
        common::{CreatedResponse, MessageResponse},
    },
    error::ServiceError,
    services::parse_object_id,
    state::SharedState,
};

/// Descriptor binding one binary asset kind to its collection and wording.
///
/// Sprites and audio clips are behaviorally identical; this is the only
/// place where they differ.
pub struct AssetCatalog {
    collection: &'static str,
    label: &'static str,
}

/// Catalog for sprite assets.
pub const SPRITES: AssetCatalog = AssetCatalog {
    collection: "sprites",
    label: "Sprite",
};

/// Catalog for audio clip assets.
pub const AUDIO_CLIPS: AssetCatalog = AssetCatalog {
    collection: "audio",
    label: "Audio file",
};

impl AssetCatalog {
    fn uploaded(&self) -> String {
        format!("{} uploaded", self.label)
    }

    fn updated(&self) -> String {
        format!("{} updated", self.label)
    }

    fn deleted(&self) -> String {
        format!("{} deleted", self.label)
    }

    fn not_found(&self) -> String {
        format!("{} not found", self.label)
    }
}

async fn repository(
    state: &SharedState,
    catalog: &AssetCatalog,
) -> Result<DocumentRepository<BinaryAssetDocument>, ServiceError> {
    let mongo = state.require_mongo().await?;
    Ok(DocumentRepository::new(mongo, catalog.collection))
}

/// Store a new asset and return the identifier assigned by the store.
pub async fn upload(
    state: &SharedState,
    catalog: &AssetCatalog,
    asset: BinaryAssetEntity,
) -> Result<CreatedResponse, ServiceError> {
    let repository = repository(state, catalog).await?;
    let document: BinaryAssetDocument = asset.into();
    let id = repository.insert(&document).await?;
    Ok(CreatedResponse::new(catalog.uploaded(), id.to_hex()))
}

/// Replace every stored field of an existing asset.
pub async fn update(
    state: &SharedState,
    catalog: &AssetCatalog,
    raw_id: &str,
    asset: BinaryAssetEntity,
) -> Result<MessageResponse, ServiceError> {
    let id = parse_object_id(raw_id)?;
    let repository = repository(state, catalog).await?;
    let document: BinaryAssetDocument = asset.into();
    if !repository.replace(id, &document).await? {
        return Err(ServiceError::NotFound(catalog.not_found()));
    }
    Ok(MessageResponse::new(catalog.updated()))
}

/// Fetch a stored asset by identifier.
pub async fn fetch(
    state: &SharedState,
    catalog: &AssetCatalog,
    raw_id: &str,
) -> Result<AssetDownload, ServiceError> {
    let id = parse_object_id(raw_id)?;
    let repository = repository(state, catalog).await?;
    let Some(document) = repository.find(id).await? else {
        return Err(ServiceError::NotFound(catalog.not_found()));
    };
    let entity: BinaryAssetEntity = document.into();
    Ok(entity.into())
}

/// Delete a stored asset by identifier.
pub async fn remove(
    state: &SharedState,
    catalog: &AssetCatalog,
    raw_id: &str,
) -> Result<MessageResponse, ServiceError> {
    let id = parse_object_id(raw_id)?;
    let repository = repository(state, catalog).await?;
    if !repository.delete(id).await? {
        return Err(ServiceError::NotFound(catalog.not_found()));
    }
    Ok(MessageResponse::new(catalog.deleted()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sprite_wording_matches_the_api_contract() {
        assert_eq!(SPRITES.uploaded(), "Sprite uploaded");
        assert_eq!(SPRITES.updated(), "Sprite updated");
        assert_eq!(SPRITES.deleted(), "Sprite deleted");
        assert_eq!(SPRITES.not_found(), "Sprite not found");
    }

    #[test]
    fn audio_wording_matches_the_api_contract() {
        assert_eq!(AUDIO_CLIPS.uploaded(), "Audio file uploaded");
        assert_eq!(AUDIO_CLIPS.not_found(), "Audio file not found");
    }

    #[tokio::test]
    async fn operations_fail_while_degraded() {
        let state = crate::state::AppState::new();
        let err = fetch(&state, &SPRITES, &mongodb::bson::oid::ObjectId::new().to_hex())
            .await
            .expect_err("no storage installed");
        assert!(matches!(err, ServiceError::Degraded));
    }

    #[tokio::test]
    async fn malformed_identifier_is_reported_before_storage_access() {
        let state = crate::state::AppState::new();
        let err = remove(&state, &AUDIO_CLIPS, "zzz")
            .await
            .expect_err("identifier must not parse");
        assert!(matches!(err, ServiceError::InvalidIdentifier(_)));
    }
}
