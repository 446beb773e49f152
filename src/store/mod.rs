//! Campsite aggregate store
//!
//! Loads and saves whole campsites. Saves are optimistic: a save only
//! lands if nobody else saved the same campsite since it was loaded. The
//! caller retries the full load → check → mutate → save cycle on conflict.

mod memory;
mod mongo;

pub use memory::MemoryCampsiteStore;
pub use mongo::MongoCampsiteStore;

use crate::gear::Campsite;
use crate::types::CampsiteId;

/// Failure modes of the aggregate store
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("campsite {campsite_id} changed since version {expected_version}")]
    Conflict {
        campsite_id: CampsiteId,
        expected_version: u64,
    },

    #[error("campsite {0} no longer exists")]
    Missing(CampsiteId),

    #[error("store backend error: {0}")]
    Backend(String),
}

/// Atomic load/save of campsite aggregates
#[async_trait::async_trait]
pub trait CampsiteStore: Send + Sync {
    /// Load a campsite with all nested categories, gear and ledgers
    async fn load(&self, id: &CampsiteId) -> Result<Option<Campsite>, StoreError>;

    /// Persist `campsite` if the stored version still equals `campsite.version`.
    /// Returns the new version.
    async fn save(&self, campsite: &Campsite) -> Result<u64, StoreError>;
}
