//! Services layer for Trailhead
//!
//! Business logic that sits between the HTTP routes and the campsite store.
//!
//! ## Services
//!
//! - **Gear**: gear management and the volunteer commitment protocol

pub mod gear_service;

pub use gear_service::{
    AddGearInput, DeleteGearInput, GearResponse, GearService, GearServiceConfig,
    UndoVolunteerGearInput, VolunteerGearInput,
};
