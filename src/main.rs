//! Trailhead - camp logistics backend

use chrono::{Duration, Utc};
use clap::Parser;
use std::sync::Arc;
use tracing::{error, info, warn};

use trailhead::{
    config::{Args, StoreBackend},
    db::MongoClient,
    gear::{Campsite, GearCategory, GearRecord},
    logging, server,
    store::{CampsiteStore, MemoryCampsiteStore, MongoCampsiteStore},
    types::UserId,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let args = Args::parse();

    logging::init(&args.log_level, args.log_format);

    if let Err(e) = args.validate() {
        error!("Configuration error: {}", e);
        std::process::exit(1);
    }

    info!("======================================");
    info!("  Trailhead - camp logistics backend");
    info!("======================================");
    info!("Node ID: {}", args.node_id);
    info!("Listen: {}", args.listen);
    info!("Mode: {}", if args.dev_mode { "DEVELOPMENT" } else { "PRODUCTION" });
    info!("Store: {:?}", args.store);
    info!(
        "Store timeout: {}ms, conflict retries: {}",
        args.store_timeout_ms, args.max_conflict_retries
    );
    info!("======================================");

    let store: Arc<dyn CampsiteStore> = match args.store {
        StoreBackend::Mongo => {
            let mongo = match MongoClient::new(&args.mongodb_uri, &args.mongodb_db).await {
                Ok(client) => client,
                Err(e) => {
                    error!("MongoDB connection failed: {}", e);
                    std::process::exit(1);
                }
            };
            info!("MongoDB connected successfully (db: {})", mongo.db_name());
            Arc::new(MongoCampsiteStore::new(&mongo).await?)
        }
        StoreBackend::Memory => {
            warn!("Using in-memory campsite store - data is lost on restart");
            let store = MemoryCampsiteStore::new();
            seed_demo_campsite(&store);
            Arc::new(store)
        }
    };

    let state = Arc::new(server::AppState::new(args, store)?);

    if let Err(e) = server::run(state).await {
        error!("Server error: {:?}", e);
        std::process::exit(1);
    }

    Ok(())
}

/// Give the memory store something to volunteer for
fn seed_demo_campsite(store: &MemoryCampsiteStore) {
    let start = Utc::now() + Duration::days(14);
    let mut campsite = Campsite::new(
        "Demo Lake Trip",
        start,
        start + Duration::days(3),
        UserId::new("demo-manager"),
    );

    let mut shelter = GearCategory::new("Shelter");
    shelter.gear.push(GearRecord::new("Tent", 4));
    shelter.gear.push(GearRecord::new("Tarp", 2));

    let mut kitchen = GearCategory::new("Kitchen");
    kitchen.gear.push(GearRecord::new("Camp stove", 2));
    kitchen.gear.push(GearRecord::new("Water jug", 6));

    campsite.gear_categories.push(shelter);
    campsite.gear_categories.push(kitchen);

    info!("Seeded demo campsite {}", campsite.id);
    for category in &campsite.gear_categories {
        for gear in &category.gear {
            info!(
                "  {} / {}: category {} gear {}",
                category.category, gear.name, category.id, gear.id
            );
        }
    }

    store.insert(campsite);
}
