//! Shared types for Trailhead

mod error;
mod ids;

pub use error::{Resource, Result, TrailheadError};
pub use ids::{CampsiteId, GearCategoryId, GearId, UserId};
