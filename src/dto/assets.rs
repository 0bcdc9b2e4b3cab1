//! DTOs for the binary asset collections (sprites and audio clips).

use serde::Serialize;
use serde_with::{base64::Base64, serde_as};
use utoipa::ToSchema;

use crate::dao::models::BinaryAssetEntity;

/// Multipart form accepted by the upload and update endpoints.
///
/// Only used to describe the request body in the OpenAPI document; handlers
/// read the stream through [`axum::extract::Multipart`].
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct AssetUploadForm {
    /// The uploaded file; its filename is stored alongside the bytes.
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
}

/// Stored asset returned by the read endpoint. Content travels as base64.
#[serde_as]
#[derive(Debug, Serialize, ToSchema)]
pub struct AssetDownload {
    /// Filename recorded at upload time.
    pub filename: String,
    /// Raw asset bytes, base64-encoded on the wire.
    #[serde_as(as = "Base64")]
    #[schema(value_type = String, format = Byte)]
    pub content: Vec<u8>,
}

impl From<BinaryAssetEntity> for AssetDownload {
    fn from(value: BinaryAssetEntity) -> Self {
        Self {
            filename: value.filename,
            content: value.content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_serializes_as_base64() {
        let download = AssetDownload {
            filename: "a.png".into(),
            content: vec![0x89, b'P', b'N', b'G'],
        };

        let value = serde_json::to_value(&download).expect("serializes");
        assert_eq!(value["filename"], "a.png");
        assert_eq!(value["content"], "iVBORw==");
    }
}
