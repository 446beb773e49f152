//! Configuration for Trailhead
//!
//! CLI arguments and environment variable handling using clap.

use clap::{Parser, ValueEnum};
use std::net::SocketAddr;
use std::time::Duration;
use uuid::Uuid;

use crate::services::GearServiceConfig;

/// Where campsite aggregates live
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StoreBackend {
    /// Process memory, lost on restart (dev mode only)
    Memory,
    /// MongoDB `campsites` collection
    Mongo,
}

/// Log line format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Trailhead - camp logistics backend
///
/// Gear categories, gear and volunteer signups for campsites.
#[derive(Parser, Debug, Clone)]
#[command(name = "trailhead")]
#[command(about = "Camp logistics backend for gear and volunteer signups")]
pub struct Args {
    /// Unique node identifier for this instance
    #[arg(long, env = "NODE_ID", default_value_t = Uuid::new_v4())]
    pub node_id: Uuid,

    /// Address to listen on
    #[arg(long, env = "LISTEN", default_value = "0.0.0.0:8080")]
    pub listen: SocketAddr,

    /// Campsite store backend
    #[arg(long, env = "STORE", value_enum, default_value = "mongo")]
    pub store: StoreBackend,

    /// MongoDB connection URI
    #[arg(long, env = "MONGODB_URI", default_value = "mongodb://localhost:27017")]
    pub mongodb_uri: String,

    /// MongoDB database name
    #[arg(long, env = "MONGODB_DB", default_value = "trailhead")]
    pub mongodb_db: String,

    /// JWT secret for verifying caller tokens (required in production)
    #[arg(long, env = "JWT_SECRET")]
    pub jwt_secret: Option<String>,

    /// JWT token expiry in seconds
    #[arg(long, env = "JWT_EXPIRY_SECONDS", default_value = "3600")]
    pub jwt_expiry_seconds: u64,

    /// Enable development mode (X-User-Id identity, memory store allowed)
    #[arg(long, env = "DEV_MODE", default_value = "false")]
    pub dev_mode: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Log line format
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value = "text")]
    pub log_format: LogFormat,

    /// Upper bound on a single campsite load or save, in milliseconds
    #[arg(long, env = "STORE_TIMEOUT_MS", default_value = "5000")]
    pub store_timeout_ms: u64,

    /// Extra attempts after a concurrent update conflict
    #[arg(long, env = "MAX_CONFLICT_RETRIES", default_value = "8")]
    pub max_conflict_retries: u32,
}

impl Args {
    /// Gear service settings derived from the arguments
    pub fn gear_service_config(&self) -> GearServiceConfig {
        GearServiceConfig {
            max_conflict_retries: self.max_conflict_retries,
            store_timeout: Duration::from_millis(self.store_timeout_ms),
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if !self.dev_mode {
            if self.jwt_secret.is_none() {
                return Err("JWT_SECRET is required in production mode".to_string());
            }

            if self.store == StoreBackend::Memory {
                return Err("STORE=memory is only allowed in development mode".to_string());
            }
        }

        if self.store_timeout_ms == 0 {
            return Err("STORE_TIMEOUT_MS must be greater than zero".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(extra: &[&str]) -> Args {
        let mut argv = vec!["trailhead"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    /// Production-mode args whatever `DEV_MODE`/`JWT_SECRET` say in the environment
    fn production(extra: &[&str], jwt_secret: Option<&str>) -> Args {
        let mut args = parse(extra);
        args.dev_mode = false;
        args.jwt_secret = jwt_secret.map(str::to_string);
        args
    }

    const SECRET: &str = "this-secret-is-at-least-32-chars-long";

    #[test]
    fn test_production_requires_secret() {
        let args = production(&["--store", "mongo"], None);
        assert_eq!(
            args.validate().unwrap_err(),
            "JWT_SECRET is required in production mode"
        );

        let args = production(&["--store", "mongo"], Some(SECRET));
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_memory_store_only_in_dev_mode() {
        let prod = production(&["--store", "memory"], Some(SECRET));
        assert!(prod.validate().is_err());

        let dev = parse(&["--store", "memory", "--dev-mode"]);
        assert!(dev.validate().is_ok());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let args = parse(&["--dev-mode", "--store-timeout-ms", "0"]);
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_gear_service_config() {
        let args = parse(&[
            "--dev-mode",
            "--store-timeout-ms",
            "250",
            "--max-conflict-retries",
            "3",
        ]);
        let config = args.gear_service_config();
        assert_eq!(config.store_timeout, Duration::from_millis(250));
        assert_eq!(config.max_conflict_retries, 3);
    }
}
