//! Database schemas for Trailhead
//!
//! Defines MongoDB document structures for campsites.

mod campsite;
mod metadata;

pub use campsite::{
    CampsiteDoc, GearCategoryDoc, GearDoc, GearVolunteerDoc, MemberRef, CAMPSITE_COLLECTION,
};
pub use metadata::Metadata;
