//! Registration Form
//!
//! Client-side core of a user registration form:
//! - Eleven-field form snapshot persisted after every edit
//! - Country selection deriving the phone code and city options
//! - Pure per-field validation (email, phone, PAN, Aadhar)
//! - Submission flow that clears saved state and hands off the final data

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use domain::ReferenceData;
use infrastructure::reference::CountryTable;
use infrastructure::services::{FormStateStore, SubmissionController};
use infrastructure::storage::StorageFactory;
use tracing::info;

/// Create a submission controller with default configuration
pub fn create_controller() -> SubmissionController {
    create_controller_with_config(&AppConfig::default())
}

/// Create a submission controller, restoring any saved form from storage
pub fn create_controller_with_config(config: &AppConfig) -> SubmissionController {
    let storage_config = config.storage.to_storage_config();
    info!("Storage backend: {:?}", storage_config.storage_type());
    let storage = StorageFactory::create(&storage_config);

    let reference_path = config.reference_data.path();
    let reference: Arc<dyn ReferenceData> =
        Arc::new(CountryTable::load_or_builtin(reference_path.as_deref()));

    SubmissionController::new(FormStateStore::load(storage, reference))
}
