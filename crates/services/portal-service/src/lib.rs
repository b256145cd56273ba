//! Portal data: collections, notification and message mutations, derived views.

pub mod service;
pub mod views;

pub use service::{DataProvider, PortalDataService};
pub use views::PerformanceSummary;

use common::AppResult;
use store_service_lib::PersistentStore;

/// Load the portal collections from an initialized store
pub async fn load_portal(store: PersistentStore) -> AppResult<DataProvider> {
    DataProvider::load(store).await
}
