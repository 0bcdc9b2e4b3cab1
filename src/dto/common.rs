//! Response envelopes shared by every resource kind.

use serde::Serialize;
use utoipa::ToSchema;

/// Acknowledgement carrying only a human-readable message.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    /// Outcome description, e.g. "Sprite updated".
    pub message: String,
}

impl MessageResponse {
    /// Wrap a message in the response envelope.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Acknowledgement returned after a create, carrying the assigned identifier.
#[derive(Debug, Serialize, ToSchema)]
pub struct CreatedResponse {
    /// Outcome description, e.g. "Sprite uploaded".
    pub message: String,
    /// Hex rendering of the identifier the store assigned.
    pub id: String,
}

impl CreatedResponse {
    /// Wrap a message and identifier in the response envelope.
    pub fn new(message: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            id: id.into(),
        }
    }
}
