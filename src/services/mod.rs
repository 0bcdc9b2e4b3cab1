//! Service layer translating requests into single document-store operations.

use mongodb::bson::oid::ObjectId;

use crate::error::ServiceError;

pub mod asset_service;
pub mod documentation;
pub mod health_service;
pub mod score_service;

/// Parse a path identifier into the store's native key format.
///
/// Malformed identifiers are a client error, not a panic; the raw string is
/// echoed back so callers can see what failed to parse.
pub fn parse_object_id(raw: &str) -> Result<ObjectId, ServiceError> {
    ObjectId::parse_str(raw).map_err(|_| ServiceError::InvalidIdentifier(raw.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_identifier_parses() {
        let id = ObjectId::new();
        assert_eq!(parse_object_id(&id.to_hex()).expect("parses"), id);
    }

    #[test]
    fn malformed_identifier_is_rejected() {
        let err = parse_object_id("nonexistent-id").expect_err("must not parse");
        assert!(matches!(err, ServiceError::InvalidIdentifier(raw) if raw == "nonexistent-id"));
    }

    #[test]
    fn truncated_hex_is_rejected() {
        assert!(parse_object_id("deadbeef").is_err());
    }
}
