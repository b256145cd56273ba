//! Persistent store: typed whole-collection access over a storage port.

use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, info};

use common::{AppResult, SeedPolicy};
use domain::{
    Company, Document, Investor, Message, Notification, PerformancePoint, KEY_COMPANIES,
    KEY_CURRENT_USER, KEY_DOCUMENTS, KEY_INVESTORS, KEY_MESSAGES, KEY_NOTIFICATIONS,
    KEY_PERFORMANCE,
};

use crate::seed::SeedData;
use crate::storage::StoragePort;

/// Named collections persisted as JSON through a [`StoragePort`].
///
/// Every write replaces the whole value under its key. Cloning is cheap and
/// clones share the same port.
#[derive(Clone)]
pub struct PersistentStore {
    storage: Arc<dyn StoragePort>,
    seed: Arc<SeedData>,
    policy: SeedPolicy,
}

impl PersistentStore {
    /// Store over `storage` with the demo seed and the overwrite policy
    pub fn new(storage: Arc<dyn StoragePort>) -> Self {
        Self {
            storage,
            seed: Arc::new(SeedData::demo()),
            policy: SeedPolicy::default(),
        }
    }

    pub fn with_seed(mut self, seed: SeedData) -> Self {
        self.seed = Arc::new(seed);
        self
    }

    pub fn with_policy(mut self, policy: SeedPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> SeedPolicy {
        self.policy
    }

    pub fn seed(&self) -> &SeedData {
        &self.seed
    }

    /// Write the seed collections.
    ///
    /// With [`SeedPolicy::Overwrite`] every collection is replaced, discarding
    /// anything written since the last load. [`SeedPolicy::IfMissing`] only
    /// fills absent keys. The current-user key is left alone either way.
    pub async fn initialize(&self) -> AppResult<()> {
        info!(policy = %self.policy, "Initializing portal store");

        self.seed_key(KEY_INVESTORS, &self.seed.investors).await?;
        self.seed_key(KEY_COMPANIES, &self.seed.companies).await?;
        self.seed_key(KEY_DOCUMENTS, &self.seed.documents).await?;
        self.seed_key(KEY_NOTIFICATIONS, &self.seed.notifications).await?;
        self.seed_key(KEY_PERFORMANCE, &self.seed.performance).await?;
        self.seed_key(KEY_MESSAGES, &self.seed.messages).await?;

        Ok(())
    }

    async fn seed_key<T>(&self, key: &str, value: &T) -> AppResult<()>
    where
        T: Serialize + Sync + ?Sized,
    {
        if self.policy == SeedPolicy::IfMissing && self.storage.get(key).await?.is_some() {
            debug!(key, "Keeping stored collection");
            return Ok(());
        }
        self.set(key, value).await
    }

    // =========================================================================
    // Generic Operations
    // =========================================================================

    /// Read and deserialize the value under `key`.
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> AppResult<Option<T>> {
        match self.storage.get(key).await? {
            Some(bytes) => {
                debug!(key, bytes = bytes.len(), "Store read");
                Ok(Some(serde_json::from_slice(&bytes)?))
            }
            None => Ok(None),
        }
    }

    /// Serialize `value` and replace whatever is stored under `key`.
    pub async fn set<T>(&self, key: &str, value: &T) -> AppResult<()>
    where
        T: Serialize + Sync + ?Sized,
    {
        let bytes = serde_json::to_vec(value)?;
        debug!(key, bytes = bytes.len(), "Store write");
        self.storage.set(key, bytes).await
    }

    pub async fn remove(&self, key: &str) -> AppResult<()> {
        debug!(key, "Store remove");
        self.storage.remove(key).await
    }

    async fn get_or_seed<T>(&self, key: &str, seed: &[T]) -> AppResult<Vec<T>>
    where
        T: DeserializeOwned + Clone,
    {
        Ok(self.get(key).await?.unwrap_or_else(|| seed.to_vec()))
    }

    // =========================================================================
    // Collections
    // =========================================================================

    pub async fn get_investors(&self) -> AppResult<Vec<Investor>> {
        self.get_or_seed(KEY_INVESTORS, &self.seed.investors).await
    }

    pub async fn set_investors(&self, investors: &[Investor]) -> AppResult<()> {
        self.set(KEY_INVESTORS, investors).await
    }

    pub async fn get_companies(&self) -> AppResult<Vec<Company>> {
        self.get_or_seed(KEY_COMPANIES, &self.seed.companies).await
    }

    pub async fn set_companies(&self, companies: &[Company]) -> AppResult<()> {
        self.set(KEY_COMPANIES, companies).await
    }

    pub async fn get_documents(&self) -> AppResult<Vec<Document>> {
        self.get_or_seed(KEY_DOCUMENTS, &self.seed.documents).await
    }

    pub async fn set_documents(&self, documents: &[Document]) -> AppResult<()> {
        self.set(KEY_DOCUMENTS, documents).await
    }

    pub async fn get_notifications(&self) -> AppResult<Vec<Notification>> {
        self.get_or_seed(KEY_NOTIFICATIONS, &self.seed.notifications)
            .await
    }

    pub async fn set_notifications(&self, notifications: &[Notification]) -> AppResult<()> {
        self.set(KEY_NOTIFICATIONS, notifications).await
    }

    pub async fn get_performance(&self) -> AppResult<Vec<PerformancePoint>> {
        self.get_or_seed(KEY_PERFORMANCE, &self.seed.performance).await
    }

    pub async fn set_performance(&self, performance: &[PerformancePoint]) -> AppResult<()> {
        self.set(KEY_PERFORMANCE, performance).await
    }

    pub async fn get_messages(&self) -> AppResult<Vec<Message>> {
        self.get_or_seed(KEY_MESSAGES, &self.seed.messages).await
    }

    pub async fn set_messages(&self, messages: &[Message]) -> AppResult<()> {
        self.set(KEY_MESSAGES, messages).await
    }

    // =========================================================================
    // Current User
    // =========================================================================

    pub async fn get_current_user(&self) -> AppResult<Option<Investor>> {
        self.get(KEY_CURRENT_USER).await
    }

    pub async fn set_current_user(&self, investor: &Investor) -> AppResult<()> {
        self.set(KEY_CURRENT_USER, investor).await
    }

    /// Remove the pointer entirely rather than storing `null`
    pub async fn clear_current_user(&self) -> AppResult<()> {
        self.remove(KEY_CURRENT_USER).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStorage, MockStoragePort};
    use common::AppError;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn test_getters_fall_back_to_seed() {
        let store = PersistentStore::new(Arc::new(MemoryStorage::new()));

        let companies = store.get_companies().await.unwrap();
        assert_eq!(companies, store.seed().companies);
        assert!(store.get_current_user().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_malformed_value_is_an_error() {
        let storage = MemoryStorage::new();
        storage
            .set(KEY_MESSAGES, b"{not json".to_vec())
            .await
            .unwrap();
        let store = PersistentStore::new(Arc::new(storage));

        let err = store.get_messages().await.unwrap_err();
        assert!(matches!(err, AppError::Serialization(_)));
    }

    #[tokio::test]
    async fn test_backend_failure_is_not_a_seed_fallback() {
        let mut storage = MockStoragePort::new();
        storage
            .expect_get()
            .with(eq(KEY_DOCUMENTS))
            .returning(|_| Err(AppError::storage("quota exceeded")));
        let store = PersistentStore::new(Arc::new(storage));

        let err = store.get_documents().await.unwrap_err();
        assert!(matches!(err, AppError::Storage(_)));
    }

    #[tokio::test]
    async fn test_clear_current_user_removes_key() {
        let mut storage = MockStoragePort::new();
        storage
            .expect_remove()
            .with(eq(KEY_CURRENT_USER))
            .times(1)
            .returning(|_| Ok(()));
        storage.expect_set().never();
        let store = PersistentStore::new(Arc::new(storage));

        store.clear_current_user().await.unwrap();
    }
}
