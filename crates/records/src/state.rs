//! Application state shared by the record handlers.

use std::sync::Arc;

use stash_core::storage::RecordRepository;

use crate::{
    config::Config,
    storage::{DynamoDbRepository, InMemoryRepository},
};

/// Shared application state.
///
/// Cloned for each request. The repository is read-only configuration plus
/// a client handle; there is no per-request coordination.
#[derive(Clone)]
pub struct AppState {
    /// Record repository (DynamoDB in production).
    pub record_repo: Arc<dyn RecordRepository>,
}

impl AppState {
    /// Creates a new AppState with the given repository.
    pub fn new(record_repo: Arc<dyn RecordRepository>) -> Self {
        Self { record_repo }
    }

    /// Creates an AppState backed by the configured DynamoDB table.
    pub async fn from_config(config: &Config) -> Self {
        let repo = DynamoDbRepository::from_config(config).await;
        tracing::info!(
            table = repo.table_name(),
            endpoint = config.endpoint_url.as_deref().unwrap_or("default"),
            "Using DynamoDB record storage"
        );
        Self::new(Arc::new(repo))
    }

    /// Creates an AppState backed by an empty in-memory repository.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryRepository::new()))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::in_memory()
    }
}
