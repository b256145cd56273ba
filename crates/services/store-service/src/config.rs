//! Store service configuration.

use std::env;
use std::path::PathBuf;

use common::{SeedPolicy, StorageBackend};

/// Default directory of the file backend
pub const DEFAULT_DATA_DIR: &str = "./portal-data";

/// Default Redis URL (for development)
pub const DEFAULT_REDIS_URL: &str = "redis://127.0.0.1:6379";

/// Default namespace for portal keys in Redis
pub const DEFAULT_REDIS_PREFIX: &str = "portal:";

/// Persistent store configuration.
#[derive(Debug, Clone)]
pub struct StoreServiceConfig {
    /// Storage port implementation
    pub backend: StorageBackend,
    /// Directory holding one JSON file per key (file backend)
    pub data_dir: PathBuf,
    /// Redis connection URL (redis backend)
    pub redis_url: String,
    /// Prefix prepended to every key (redis backend)
    pub redis_prefix: String,
    /// Behaviour of `initialize()` towards existing collections
    pub seed_policy: SeedPolicy,
}

impl StoreServiceConfig {
    /// Load configuration from environment variables.
    ///
    /// Unparseable values fall back to the defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            backend: env::var("PORTAL_STORAGE_BACKEND")
                .ok()
                .and_then(|b| b.parse().ok())
                .unwrap_or(defaults.backend),
            data_dir: env::var("PORTAL_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            redis_url: env::var("PORTAL_REDIS_URL")
                .or_else(|_| env::var("REDIS_URL"))
                .unwrap_or(defaults.redis_url),
            redis_prefix: env::var("PORTAL_REDIS_PREFIX").unwrap_or(defaults.redis_prefix),
            seed_policy: env::var("PORTAL_SEED_POLICY")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.seed_policy),
        }
    }
}

impl Default for StoreServiceConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::File,
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            redis_url: DEFAULT_REDIS_URL.to_string(),
            redis_prefix: DEFAULT_REDIS_PREFIX.to_string(),
            seed_policy: SeedPolicy::Overwrite,
        }
    }
}
