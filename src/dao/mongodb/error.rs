//! Error variants raised by the MongoDB access layer.

use mongodb::bson::oid::ObjectId;
use mongodb::error::Error as MongoError;
use thiserror::Error;

/// Result alias for MongoDB access operations.
pub type MongoResult<T> = std::result::Result<T, MongoDaoError>;

/// Errors raised while talking to MongoDB, each carrying enough context to
/// name the failing collection or document.
#[derive(Debug, Error)]
pub enum MongoDaoError {
    /// The connection string could not be parsed.
    #[error("failed to parse MongoDB connection URI `{uri}`")]
    InvalidUri {
        /// The offending URI.
        uri: String,
        /// Driver-level parse failure.
        #[source]
        source: MongoError,
    },
    /// The client could not be constructed from parsed options.
    #[error("failed to build MongoDB client from options")]
    ClientConstruction {
        /// Driver-level construction failure.
        #[source]
        source: MongoError,
    },
    /// The initial connectivity ping never succeeded.
    #[error("MongoDB ping failed during initial connection after {attempts} attempt(s)")]
    InitialPing {
        /// Number of ping attempts made before giving up.
        attempts: u32,
        /// Last ping failure observed.
        #[source]
        source: MongoError,
    },
    /// A periodic health-check ping failed.
    #[error("MongoDB ping health check failed")]
    HealthPing {
        /// Driver-level ping failure.
        #[source]
        source: MongoError,
    },
    /// An insert into the named collection failed.
    #[error("failed to insert document into `{collection}`")]
    Insert {
        /// Target collection.
        collection: &'static str,
        /// Driver-level write failure.
        #[source]
        source: MongoError,
    },
    /// The driver returned an inserted id that is not an ObjectId.
    #[error("insert into `{collection}` returned a non-ObjectId identifier")]
    InsertedIdType {
        /// Target collection.
        collection: &'static str,
    },
    /// A full-document replace failed.
    #[error("failed to replace document `{id}` in `{collection}`")]
    Replace {
        /// Target collection.
        collection: &'static str,
        /// Identifier of the document being replaced.
        id: ObjectId,
        /// Driver-level write failure.
        #[source]
        source: MongoError,
    },
    /// A lookup by identifier failed.
    #[error("failed to load document `{id}` from `{collection}`")]
    Load {
        /// Target collection.
        collection: &'static str,
        /// Identifier of the document being loaded.
        id: ObjectId,
        /// Driver-level read failure.
        #[source]
        source: MongoError,
    },
    /// A delete by identifier failed.
    #[error("failed to delete document `{id}` from `{collection}`")]
    Delete {
        /// Target collection.
        collection: &'static str,
        /// Identifier of the document being deleted.
        id: ObjectId,
        /// Driver-level write failure.
        #[source]
        source: MongoError,
    },
}
