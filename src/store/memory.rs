//! In-memory campsite store
//!
//! Backs dev mode and the test suite. The version check and the write both
//! happen while holding the DashMap shard lock for that campsite.

use dashmap::DashMap;
use tracing::debug;

use super::{CampsiteStore, StoreError};
use crate::gear::Campsite;
use crate::types::CampsiteId;

/// DashMap-backed aggregate store
#[derive(Default)]
pub struct MemoryCampsiteStore {
    campsites: DashMap<CampsiteId, Campsite>,
}

impl MemoryCampsiteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a campsite as-is, replacing any existing one with the same id
    pub fn insert(&self, campsite: Campsite) {
        debug!(campsite_id = %campsite.id, version = campsite.version, "Seeding campsite");
        self.campsites.insert(campsite.id.clone(), campsite);
    }

    pub fn remove(&self, id: &CampsiteId) -> Option<Campsite> {
        self.campsites.remove(id).map(|(_, c)| c)
    }

    pub fn len(&self) -> usize {
        self.campsites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.campsites.is_empty()
    }
}

#[async_trait::async_trait]
impl CampsiteStore for MemoryCampsiteStore {
    async fn load(&self, id: &CampsiteId) -> Result<Option<Campsite>, StoreError> {
        Ok(self.campsites.get(id).map(|c| c.value().clone()))
    }

    async fn save(&self, campsite: &Campsite) -> Result<u64, StoreError> {
        let mut stored = self
            .campsites
            .get_mut(&campsite.id)
            .ok_or_else(|| StoreError::Missing(campsite.id.clone()))?;

        if stored.version != campsite.version {
            return Err(StoreError::Conflict {
                campsite_id: campsite.id.clone(),
                expected_version: campsite.version,
            });
        }

        let mut next = campsite.clone();
        next.version = campsite.version + 1;
        *stored = next;

        Ok(stored.version)
    }
}
