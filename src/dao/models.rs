//! Domain entities persisted by the service, independent of the BSON wire shapes.

/// A stored binary asset: sprites and audio clips share this shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryAssetEntity {
    /// Original filename supplied at upload time.
    pub filename: String,
    /// Raw asset bytes, passed through unmodified.
    pub content: Vec<u8>,
}

/// A player score record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreEntity {
    /// Display name of the player.
    pub player_name: String,
    /// Score value; replaced wholesale on update.
    pub score: i64,
}
