//! BSON document shapes stored in MongoDB and their entity conversions.

use mongodb::bson::{Binary, Document, doc, oid::ObjectId, spec::BinarySubtype};
use serde::{Deserialize, Serialize};

use crate::dao::models::{BinaryAssetEntity, ScoreEntity};

/// Stored shape of a sprite or audio clip. The `_id` is assigned by the
/// server on insert and never serialized back out of this struct.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BinaryAssetDocument {
    filename: String,
    content: Binary,
}

impl From<BinaryAssetEntity> for BinaryAssetDocument {
    fn from(value: BinaryAssetEntity) -> Self {
        Self {
            filename: value.filename,
            content: Binary {
                subtype: BinarySubtype::Generic,
                bytes: value.content,
            },
        }
    }
}

impl From<BinaryAssetDocument> for BinaryAssetEntity {
    fn from(value: BinaryAssetDocument) -> Self {
        Self {
            filename: value.filename,
            content: value.content.bytes,
        }
    }
}

/// Stored shape of a player score record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreDocument {
    player_name: String,
    score: i64,
}

impl From<ScoreEntity> for ScoreDocument {
    fn from(value: ScoreEntity) -> Self {
        Self {
            player_name: value.player_name,
            score: value.score,
        }
    }
}

impl From<ScoreDocument> for ScoreEntity {
    fn from(value: ScoreDocument) -> Self {
        Self {
            player_name: value.player_name,
            score: value.score,
        }
    }
}

/// Filter matching a single document by its ObjectId.
pub fn doc_id(id: ObjectId) -> Document {
    doc! {"_id": id}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_entity_survives_document_conversion() {
        let entity = BinaryAssetEntity {
            filename: "a.png".into(),
            content: b"\x89PNG\r\n\x1a\n".to_vec(),
        };

        let document: BinaryAssetDocument = entity.clone().into();
        assert_eq!(document.content.subtype, BinarySubtype::Generic);

        let restored: BinaryAssetEntity = document.into();
        assert_eq!(restored, entity);
    }

    #[test]
    fn score_entity_survives_document_conversion() {
        let entity = ScoreEntity {
            player_name: "Ann".into(),
            score: 20,
        };

        let restored: ScoreEntity = ScoreDocument::from(entity.clone()).into();
        assert_eq!(restored, entity);
    }

    #[test]
    fn stored_document_tolerates_the_id_field() {
        // Deserializing a find result must ignore the `_id` the server added.
        let raw = doc! {
            "_id": ObjectId::new(),
            "filename": "clip.ogg",
            "content": Binary { subtype: BinarySubtype::Generic, bytes: vec![1, 2, 3] },
        };

        let document: BinaryAssetDocument =
            mongodb::bson::deserialize_from_document(raw).expect("document deserializes");
        let entity: BinaryAssetEntity = document.into();
        assert_eq!(entity.filename, "clip.ogg");
        assert_eq!(entity.content, vec![1, 2, 3]);
    }
}
