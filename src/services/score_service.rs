//! Create/replace/read/delete operations for player score records.

use crate::{
    dao::{
        models::ScoreEntity,
        mongodb::{models::ScoreDocument, repository::DocumentRepository},
    },
    dto::{
        common::{CreatedResponse, MessageResponse},
        scores::{PlayerScoreInput, PlayerScoreView},
    },
    error::ServiceError,
    services::parse_object_id,
    state::SharedState,
};

const SCORE_COLLECTION: &str = "scores";
const NOT_FOUND: &str = "Score not found";

async fn repository(
    state: &SharedState,
) -> Result<DocumentRepository<ScoreDocument>, ServiceError> {
    let mongo = state.require_mongo().await?;
    Ok(DocumentRepository::new(mongo, SCORE_COLLECTION))
}

/// Record a new score and return the identifier assigned by the store.
pub async fn record(
    state: &SharedState,
    input: PlayerScoreInput,
) -> Result<CreatedResponse, ServiceError> {
    let repository = repository(state).await?;
    let entity: ScoreEntity = input.into();
    let document: ScoreDocument = entity.into();
    let id = repository.insert(&document).await?;
    Ok(CreatedResponse::new("Score recorded", id.to_hex()))
}

/// Replace every stored field of an existing score record.
pub async fn update(
    state: &SharedState,
    raw_id: &str,
    input: PlayerScoreInput,
) -> Result<MessageResponse, ServiceError> {
    let id = parse_object_id(raw_id)?;
    let repository = repository(state).await?;
    let entity: ScoreEntity = input.into();
    let document: ScoreDocument = entity.into();
    if !repository.replace(id, &document).await? {
        return Err(ServiceError::NotFound(NOT_FOUND.into()));
    }
    Ok(MessageResponse::new("Score updated"))
}

/// Fetch a stored score record by identifier.
pub async fn fetch(state: &SharedState, raw_id: &str) -> Result<PlayerScoreView, ServiceError> {
    let id = parse_object_id(raw_id)?;
    let repository = repository(state).await?;
    let Some(document) = repository.find(id).await? else {
        return Err(ServiceError::NotFound(NOT_FOUND.into()));
    };
    let entity: ScoreEntity = document.into();
    Ok(entity.into())
}

/// Delete a stored score record by identifier.
pub async fn remove(state: &SharedState, raw_id: &str) -> Result<MessageResponse, ServiceError> {
    let id = parse_object_id(raw_id)?;
    let repository = repository(state).await?;
    if !repository.delete(id).await? {
        return Err(ServiceError::NotFound(NOT_FOUND.into()));
    }
    Ok(MessageResponse::new("Score deleted"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn operations_fail_while_degraded() {
        let state = crate::state::AppState::new();
        let input = PlayerScoreInput {
            player_name: "Ann".into(),
            score: 10,
        };
        let err = record(&state, input).await.expect_err("no storage installed");
        assert!(matches!(err, ServiceError::Degraded));
    }

    #[tokio::test]
    async fn malformed_identifier_is_reported_before_storage_access() {
        let state = crate::state::AppState::new();
        let err = fetch(&state, "12345").await.expect_err("must not parse");
        assert!(matches!(err, ServiceError::InvalidIdentifier(_)));
    }
}
