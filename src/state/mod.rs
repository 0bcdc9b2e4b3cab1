//! Shared application state: the storage handle and the degraded-mode flag.

use std::sync::Arc;

use tokio::sync::{RwLock, watch};

use crate::{dao::mongodb::MongoManager, error::ServiceError};

/// Cheaply cloneable handle to the application state.
pub type SharedState = Arc<AppState>;

/// Central application state storing the database handle.
///
/// There is no other in-process state: every request is a single store
/// operation, so handlers only need a way to reach MongoDB.
pub struct AppState {
    mongo: RwLock<Option<MongoManager>>,
    degraded: watch::Sender<bool>,
}

impl AppState {
    /// Construct a new [`AppState`] wrapped in an [`Arc`] so it can be cloned cheaply.
    ///
    /// The application starts in degraded mode until a connection is installed.
    pub fn new() -> SharedState {
        let (degraded_tx, _rx) = watch::channel(true);
        Arc::new(Self {
            mongo: RwLock::new(None),
            degraded: degraded_tx,
        })
    }

    /// Obtain a handle to the current MongoDB connection, if one is installed.
    pub async fn mongo(&self) -> Option<MongoManager> {
        let guard = self.mongo.read().await;
        guard.clone()
    }

    /// Obtain the MongoDB connection or fail with a degraded-mode error.
    pub async fn require_mongo(&self) -> Result<MongoManager, ServiceError> {
        self.mongo().await.ok_or(ServiceError::Degraded)
    }

    /// Install a new connection and leave degraded mode.
    pub async fn install_mongo(&self, manager: MongoManager) {
        {
            let mut guard = self.mongo.write().await;
            *guard = Some(manager);
        }
        self.degraded.send_replace(false);
    }

    /// Remove the current connection and enter degraded mode.
    pub async fn clear_mongo(&self) {
        {
            let mut guard = self.mongo.write().await;
            guard.take();
        }
        self.degraded.send_replace(true);
    }

    /// Current degraded flag.
    pub async fn is_degraded(&self) -> bool {
        let guard = self.mongo.read().await;
        guard.is_none()
    }

    /// Subscribe to degraded mode updates.
    pub fn degraded_watcher(&self) -> watch::Receiver<bool> {
        self.degraded.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn starts_in_degraded_mode() {
        let state = AppState::new();
        assert!(state.is_degraded().await);
        assert!(matches!(
            state.require_mongo().await,
            Err(ServiceError::Degraded)
        ));
    }

    #[tokio::test]
    async fn degraded_watcher_reports_initial_state() {
        let state = AppState::new();
        let watcher = state.degraded_watcher();
        assert!(*watcher.borrow());
    }
}
