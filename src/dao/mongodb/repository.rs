//! Generic single-document repository over one MongoDB collection.

use std::marker::PhantomData;

use mongodb::{Collection, bson::oid::ObjectId};
use serde::{Serialize, de::DeserializeOwned};

use super::{
    error::{MongoDaoError, MongoResult},
    manager::MongoManager,
    models::doc_id,
};

/// Repository performing identifier-keyed operations on one collection.
///
/// All three resource kinds share this access pattern; only the collection
/// name and the document type differ.
#[derive(Clone)]
pub struct DocumentRepository<T> {
    mongo: MongoManager,
    collection_name: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T> DocumentRepository<T>
where
    T: Serialize + DeserializeOwned + Send + Sync,
{
    /// Bind a repository to a collection on the managed connection.
    pub fn new(mongo: MongoManager, collection_name: &'static str) -> Self {
        Self {
            mongo,
            collection_name,
            _marker: PhantomData,
        }
    }

    async fn collection(&self) -> Collection<T> {
        let database = self.mongo.database().await;
        database.collection::<T>(self.collection_name)
    }

    /// Insert a new document and return the identifier the store assigned.
    pub async fn insert(&self, document: &T) -> MongoResult<ObjectId> {
        let collection = self.collection().await;
        let result = collection
            .insert_one(document)
            .await
            .map_err(|source| MongoDaoError::Insert {
                collection: self.collection_name,
                source,
            })?;

        result
            .inserted_id
            .as_object_id()
            .ok_or(MongoDaoError::InsertedIdType {
                collection: self.collection_name,
            })
    }

    /// Replace the document matching `id` with `document`, overwriting every
    /// field. Returns whether a document matched; never upserts.
    pub async fn replace(&self, id: ObjectId, document: &T) -> MongoResult<bool> {
        let collection = self.collection().await;
        let result = collection
            .replace_one(doc_id(id), document)
            .await
            .map_err(|source| MongoDaoError::Replace {
                collection: self.collection_name,
                id,
                source,
            })?;

        Ok(result.matched_count > 0)
    }

    /// Look up a document by identifier.
    pub async fn find(&self, id: ObjectId) -> MongoResult<Option<T>> {
        let collection = self.collection().await;
        collection
            .find_one(doc_id(id))
            .await
            .map_err(|source| MongoDaoError::Load {
                collection: self.collection_name,
                id,
                source,
            })
    }

    /// Delete a document by identifier. Returns whether anything was removed.
    pub async fn delete(&self, id: ObjectId) -> MongoResult<bool> {
        let collection = self.collection().await;
        let result = collection
            .delete_one(doc_id(id))
            .await
            .map_err(|source| MongoDaoError::Delete {
                collection: self.collection_name,
                id,
                source,
            })?;

        Ok(result.deleted_count > 0)
    }
}
