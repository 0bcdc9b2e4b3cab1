//! MongoDB access layer: connection lifecycle, document models, and repositories.

mod error;
mod manager;
pub mod models;
pub mod repository;

pub use error::{MongoDaoError, MongoResult};
pub use manager::{MongoManager, connect};
