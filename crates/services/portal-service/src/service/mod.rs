//! Portal data business logic.

mod data_service;

pub use data_service::{DataProvider, PortalDataService};
