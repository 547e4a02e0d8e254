//! Application state shared by the file handlers.

use std::sync::Arc;

use stash_core::objects::ObjectStore;

use crate::{
    config::Config,
    storage::{InMemoryObjectStore, S3ObjectStore},
};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Object store (S3 in production).
    pub object_store: Arc<dyn ObjectStore>,
}

impl AppState {
    /// Creates a new AppState with the given object store.
    pub fn new(object_store: Arc<dyn ObjectStore>) -> Self {
        Self { object_store }
    }

    /// Creates an AppState backed by the configured S3 bucket.
    pub async fn from_config(config: &Config) -> Self {
        let store = S3ObjectStore::from_config(config).await;
        tracing::info!(
            bucket = store.bucket(),
            expected_owner = store.expected_owner().unwrap_or("unset"),
            endpoint = config.endpoint_url.as_deref().unwrap_or("default"),
            "Using S3 object storage"
        );
        Self::new(Arc::new(store))
    }

    /// Creates an AppState backed by the given in-memory store.
    pub fn in_memory(store: InMemoryObjectStore) -> Self {
        Self::new(Arc::new(store))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::in_memory(InMemoryObjectStore::new())
    }
}
