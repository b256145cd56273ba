//! Redis storage backend.

use async_trait::async_trait;
use redis::{aio::ConnectionManager, AsyncCommands, Client, RedisError};

use super::StoragePort;
use common::{AppError, AppResult};

/// Redis-backed storage with connection pooling.
#[derive(Clone)]
pub struct RedisStorage {
    connection: ConnectionManager,
    prefix: String,
}

impl RedisStorage {
    /// Connect to Redis, namespacing every key with `prefix`.
    pub async fn connect(url: &str, prefix: impl Into<String>) -> AppResult<Self> {
        let client = Client::open(url).map_err(cache_error)?;
        let connection = ConnectionManager::new(client).await.map_err(cache_error)?;

        tracing::info!("Redis storage connected");

        Ok(Self {
            connection,
            prefix: prefix.into(),
        })
    }

    fn key(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }
}

#[async_trait]
impl StoragePort for RedisStorage {
    async fn get(&self, key: &str) -> AppResult<Option<Vec<u8>>> {
        let mut conn = self.connection.clone();
        let value: Option<Vec<u8>> = conn.get(self.key(key)).await.map_err(cache_error)?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: Vec<u8>) -> AppResult<()> {
        let mut conn = self.connection.clone();
        conn.set::<_, _, ()>(self.key(key), value)
            .await
            .map_err(cache_error)?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        let mut conn = self.connection.clone();
        let _: () = conn.del(self.key(key)).await.map_err(cache_error)?;
        Ok(())
    }
}

/// Convert Redis error to AppError.
fn cache_error(e: RedisError) -> AppError {
    tracing::error!("Redis error: {}", e);
    AppError::from(e)
}
