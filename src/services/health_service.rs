//! Health reporting backed by a storage ping.

use tracing::warn;

use crate::{dto::health::HealthResponse, state::SharedState};

/// Respond with the current health status, logging connectivity issues.
pub async fn health_status(state: &SharedState) -> HealthResponse {
    match state.mongo().await {
        Some(mongo) => {
            if let Err(err) = mongo.ping().await {
                warn!(error = %err, "storage health check failed");
            }
        }
        None => warn!("storage unavailable (degraded mode)"),
    }

    if state.is_degraded().await {
        HealthResponse::degraded()
    } else {
        HealthResponse::ok()
    }
}
