//! Trailhead - camp logistics backend
//!
//! Campsites carry gear categories, each category lists gear with a target
//! quantity, and campsite members volunteer to bring some of it. Trailhead
//! keeps the volunteer ledgers honest: one commitment per user per gear
//! item, and never more committed than the quantity needed.
//!
//! ## Layers
//!
//! - **gear**: the campsite aggregate and the volunteer commitment rules
//! - **store**: versioned load/save of whole campsites (memory or MongoDB)
//! - **services**: load → mutate → save with conflict retries and timeouts
//! - **routes** / **server**: JSON over HTTP/1

pub mod auth;
pub mod config;
pub mod db;
pub mod gear;
pub mod logging;
pub mod routes;
pub mod server;
pub mod services;
pub mod store;
pub mod types;

pub use config::Args;
pub use server::{run, AppState};
pub use services::{GearService, GearServiceConfig};
pub use types::{Result, TrailheadError};
