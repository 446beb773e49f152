//! Database layer for Trailhead
//!
//! Provides MongoDB storage for campsite aggregates.

pub mod mongo;
pub mod schemas;

pub use mongo::{MongoClient, MongoCollection};
pub use schemas::{CampsiteDoc, Metadata, CAMPSITE_COLLECTION};
