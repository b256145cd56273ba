//! Storage port and its backends.
//!
//! The port only moves whole values: a collection is read, replaced or
//! removed as one blob.

mod file;
mod memory;
#[cfg(feature = "redis")]
mod redis_storage;

use async_trait::async_trait;

use common::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

pub use file::FileStorage;
pub use memory::MemoryStorage;
#[cfg(feature = "redis")]
pub use redis_storage::RedisStorage;

/// Key-value persistence port.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait StoragePort: Send + Sync {
    /// Read the raw bytes stored under `key`
    async fn get(&self, key: &str) -> AppResult<Option<Vec<u8>>>;

    /// Replace the value stored under `key`
    async fn set(&self, key: &str, value: Vec<u8>) -> AppResult<()>;

    /// Delete `key`; deleting an absent key succeeds
    async fn remove(&self, key: &str) -> AppResult<()>;
}
