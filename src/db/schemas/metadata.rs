//! Bookkeeping fields shared by stored documents
//!
//! Campsites are never hard-deleted; `is_deleted` hides them from every
//! read and write the collection wrapper issues.

use bson::{doc, DateTime, Document};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Metadata {
    #[serde(default)]
    pub is_deleted: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime>,
}

impl Metadata {
    /// Fresh metadata for a document about to be inserted
    pub fn new() -> Self {
        let now = DateTime::now();
        Self {
            is_deleted: false,
            deleted_at: None,
            updated_at: Some(now),
            created_at: Some(now),
        }
    }

    /// Narrow `filter` to documents that are not soft-deleted
    pub fn live(mut filter: Document) -> Document {
        filter.insert("metadata.is_deleted", doc! { "$ne": true });
        filter
    }
}
