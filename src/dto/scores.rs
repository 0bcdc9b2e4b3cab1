//! DTOs for player score records.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::dao::models::ScoreEntity;

/// Payload accepted when recording or replacing a score.
#[derive(Debug, Deserialize, ToSchema)]
pub struct PlayerScoreInput {
    /// Display name of the player.
    pub player_name: String,
    /// Score value.
    pub score: i64,
}

impl From<PlayerScoreInput> for ScoreEntity {
    fn from(value: PlayerScoreInput) -> Self {
        Self {
            player_name: value.player_name,
            score: value.score,
        }
    }
}

/// Stored score returned by the read endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct PlayerScoreView {
    /// Display name of the player.
    pub player_name: String,
    /// Score value.
    pub score: i64,
}

impl From<ScoreEntity> for PlayerScoreView {
    fn from(value: ScoreEntity) -> Self {
        Self {
            player_name: value.player_name,
            score: value.score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_deserializes_from_the_documented_shape() {
        let input: PlayerScoreInput =
            serde_json::from_str(r#"{"player_name":"Ann","score":10}"#).expect("deserializes");
        assert_eq!(input.player_name, "Ann");
        assert_eq!(input.score, 10);
    }

    #[test]
    fn view_serializes_to_the_documented_shape() {
        let view = PlayerScoreView {
            player_name: "Ann".into(),
            score: 20,
        };
        let value = serde_json::to_value(&view).expect("serializes");
        assert_eq!(value, serde_json::json!({"player_name": "Ann", "score": 20}));
    }
}
