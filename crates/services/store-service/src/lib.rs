//! Store Service Library
//!
//! This crate provides the persistent store behind the investor portal:
//! a key-value storage port, its backends, the demo seed data and the typed
//! collection accessors the session and data providers build on.

pub mod config;
pub mod seed;
pub mod storage;
mod store;

use std::sync::Arc;

use tracing::info;

use common::{AppResult, StorageBackend};

use crate::config::StoreServiceConfig;
use crate::storage::{FileStorage, MemoryStorage, StoragePort};

pub use seed::SeedData;
pub use store::PersistentStore;

/// Build the persistent store described by `config`.
///
/// The store is not initialized; callers decide when a load happens.
pub async fn open_store(config: &StoreServiceConfig) -> AppResult<PersistentStore> {
    let storage = open_storage(config).await?;
    Ok(PersistentStore::new(storage).with_policy(config.seed_policy))
}

async fn open_storage(config: &StoreServiceConfig) -> AppResult<Arc<dyn StoragePort>> {
    match config.backend {
        StorageBackend::Memory => {
            info!("Using in-memory storage");
            Ok(Arc::new(MemoryStorage::new()))
        }
        StorageBackend::File => {
            info!(dir = %config.data_dir.display(), "Using file storage");
            Ok(Arc::new(FileStorage::open(&config.data_dir).await?))
        }
        #[cfg(feature = "redis")]
        StorageBackend::Redis => {
            let storage =
                storage::RedisStorage::connect(&config.redis_url, config.redis_prefix.clone())
                    .await?;
            Ok(Arc::new(storage))
        }
        #[cfg(not(feature = "redis"))]
        StorageBackend::Redis => Err(common::AppError::validation(
            "The redis backend requires the `redis` feature",
        )),
    }
}
