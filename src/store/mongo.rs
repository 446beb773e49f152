//! MongoDB campsite store
//!
//! Saves are a single `update_one` filtered on `{_id, version}`, so the
//! version check and the write are one atomic operation on the server.

use bson::{doc, oid::ObjectId};
use tracing::debug;

use super::{CampsiteStore, StoreError};
use crate::db::{CampsiteDoc, MongoClient, MongoCollection, CAMPSITE_COLLECTION};
use crate::gear::Campsite;
use crate::types::{CampsiteId, TrailheadError};

/// Campsite store over the `campsites` collection
#[derive(Clone)]
pub struct MongoCampsiteStore {
    collection: MongoCollection<CampsiteDoc>,
}

impl MongoCampsiteStore {
    pub async fn new(mongo: &MongoClient) -> Result<Self, TrailheadError> {
        let collection = mongo.collection::<CampsiteDoc>(CAMPSITE_COLLECTION).await?;
        Ok(Self { collection })
    }

    /// Store a new campsite as-is
    pub async fn insert(&self, campsite: &Campsite) -> Result<(), StoreError> {
        let doc = CampsiteDoc::try_from(campsite)?;
        self.collection
            .insert_one(doc)
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        Ok(())
    }

    async fn find(&self, id: ObjectId) -> Result<Option<CampsiteDoc>, StoreError> {
        self.collection
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))
    }
}

#[async_trait::async_trait]
impl CampsiteStore for MongoCampsiteStore {
    async fn load(&self, id: &CampsiteId) -> Result<Option<Campsite>, StoreError> {
        // Ids from other stores are never valid here
        let Ok(oid) = ObjectId::parse_str(id.as_str()) else {
            debug!(campsite_id = %id, "Not an ObjectId, treating campsite as absent");
            return Ok(None);
        };

        self.find(oid).await?.map(Campsite::try_from).transpose()
    }

    async fn save(&self, campsite: &Campsite) -> Result<u64, StoreError> {
        let oid = ObjectId::parse_str(campsite.id.as_str())
            .map_err(|_| StoreError::Missing(campsite.id.clone()))?;

        let update = CampsiteDoc::update_from(campsite)?;
        let result = self
            .collection
            .update_one(CampsiteDoc::versioned_filter(oid, campsite.version), update)
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))?;

        if result.matched_count == 0 {
            return match self.find(oid).await? {
                Some(_) => Err(StoreError::Conflict {
                    campsite_id: campsite.id.clone(),
                    expected_version: campsite.version,
                }),
                None => Err(StoreError::Missing(campsite.id.clone())),
            };
        }

        Ok(campsite.version + 1)
    }
}
