//! Persistent store integration tests.

use std::sync::Arc;

use chrono::Utc;
use tokio_test::assert_ok;

use common::{SeedPolicy, StorageBackend};
use domain::{Investor, NotificationType, COLLECTION_KEYS, KEY_CURRENT_USER};
use store_service_lib::config::StoreServiceConfig;
use store_service_lib::storage::{FileStorage, MemoryStorage, StoragePort};
use store_service_lib::{open_store, PersistentStore, SeedData};

fn memory_store() -> (MemoryStorage, PersistentStore) {
    let storage = MemoryStorage::new();
    let store = PersistentStore::new(Arc::new(storage.clone()));
    (storage, store)
}

#[tokio::test]
async fn test_collection_round_trip() {
    let (_, store) = memory_store();

    let mut notifications = store.seed().notifications.clone();
    notifications[0].read = true;
    notifications[1].kind = NotificationType::Error;
    notifications.truncate(2);

    assert_ok!(store.set_notifications(&notifications).await);
    assert_eq!(store.get_notifications().await.unwrap(), notifications);

    let investors = vec![Investor::from_email("new.person@x.com", Utc::now())];
    assert_ok!(store.set_investors(&investors).await);
    assert_eq!(store.get_investors().await.unwrap(), investors);
}

#[tokio::test]
async fn test_initialize_writes_every_collection() {
    let (storage, store) = memory_store();

    assert_ok!(store.initialize().await);

    for key in COLLECTION_KEYS {
        assert!(storage.contains_key(key), "missing {}", key);
    }
    assert!(!storage.contains_key(KEY_CURRENT_USER));
}

#[tokio::test]
async fn test_initialize_overwrites_prior_state() {
    let (_, store) = memory_store();
    store.initialize().await.unwrap();

    // Mutate every collection away from the seed
    store.set_investors(&[]).await.unwrap();
    store.set_companies(&[]).await.unwrap();
    store.set_documents(&[]).await.unwrap();
    let mut notifications = store.get_notifications().await.unwrap();
    notifications.iter_mut().for_each(|n| n.read = true);
    store.set_notifications(&notifications).await.unwrap();
    store.set_performance(&[]).await.unwrap();
    store.set_messages(&[]).await.unwrap();

    store.initialize().await.unwrap();

    let seed = SeedData::demo();
    assert_eq!(store.get_investors().await.unwrap(), seed.investors);
    assert_eq!(store.get_companies().await.unwrap(), seed.companies);
    assert_eq!(store.get_documents().await.unwrap(), seed.documents);
    assert_eq!(store.get_notifications().await.unwrap(), seed.notifications);
    assert_eq!(store.get_performance().await.unwrap(), seed.performance);
    assert_eq!(store.get_messages().await.unwrap(), seed.messages);
}

#[tokio::test]
async fn test_initialize_if_missing_keeps_prior_state() {
    let storage = MemoryStorage::new();
    let store = PersistentStore::new(Arc::new(storage.clone())).with_policy(SeedPolicy::IfMissing);

    store.set_messages(&[]).await.unwrap();
    store.initialize().await.unwrap();

    assert!(store.get_messages().await.unwrap().is_empty());
    assert_eq!(
        store.get_companies().await.unwrap(),
        store.seed().companies
    );
    for key in COLLECTION_KEYS {
        assert!(storage.contains_key(key));
    }
}

#[tokio::test]
async fn test_initialize_leaves_current_user() {
    let (_, store) = memory_store();
    let investor = Investor::from_email("kept@x.com", Utc::now());

    store.set_current_user(&investor).await.unwrap();
    store.initialize().await.unwrap();

    assert_eq!(store.get_current_user().await.unwrap(), Some(investor));
}

#[tokio::test]
async fn test_custom_seed() {
    let (_, store) = memory_store();
    let store = store.with_seed(SeedData::empty());

    store.initialize().await.unwrap();
    assert!(store.get_investors().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_current_user_set_and_clear() {
    let (storage, store) = memory_store();
    let investor = Investor::from_email("ada.lovelace@x.com", Utc::now());

    store.set_current_user(&investor).await.unwrap();
    assert_eq!(store.get_current_user().await.unwrap(), Some(investor));

    store.clear_current_user().await.unwrap();
    assert!(store.get_current_user().await.unwrap().is_none());
    assert!(assert_ok!(storage.get(KEY_CURRENT_USER).await).is_none());
}

#[tokio::test]
async fn test_file_backend_persists_across_stores() {
    let dir = tempfile::tempdir().unwrap();

    let first = PersistentStore::new(Arc::new(FileStorage::open(dir.path()).await.unwrap()));
    first.initialize().await.unwrap();
    first.set_messages(&[]).await.unwrap();

    let second = PersistentStore::new(Arc::new(FileStorage::open(dir.path()).await.unwrap()));
    assert!(second.get_messages().await.unwrap().is_empty());
    assert_eq!(second.get_companies().await.unwrap(), second.seed().companies);
}

#[tokio::test]
async fn test_open_store_from_config() {
    let dir = tempfile::tempdir().unwrap();
    let config = StoreServiceConfig {
        backend: StorageBackend::File,
        data_dir: dir.path().join("portal"),
        seed_policy: SeedPolicy::IfMissing,
        ..Default::default()
    };

    let store = open_store(&config).await.unwrap();
    assert_eq!(store.policy(), SeedPolicy::IfMissing);
    store.initialize().await.unwrap();
    assert!(dir.path().join("portal").join("portal_investors.json").exists());

    let memory = StoreServiceConfig {
        backend: StorageBackend::Memory,
        ..Default::default()
    };
    assert_eq!(open_store(&memory).await.unwrap().policy(), SeedPolicy::Overwrite);
}

#[cfg(not(feature = "redis"))]
#[tokio::test]
async fn test_redis_backend_requires_feature() {
    let config = StoreServiceConfig {
        backend: StorageBackend::Redis,
        ..Default::default()
    };
    assert!(open_store(&config).await.is_err());
}
