//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use stash_core::record::{Record, KEY_FIELD};
use stash_core::storage::{RecordRepository, RepositoryError, Result};

/// In-memory storage backend for testing and local runs.
///
/// Mirrors the DynamoDB table's semantics: puts overwrite, updates upsert,
/// keys must be non-empty strings and the key attribute cannot be updated.
/// Data is not persisted and will be lost when the repository is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    records: Arc<RwLock<HashMap<String, Record>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordRepository for InMemoryRepository {
    async fn get_record(&self, key: &str) -> Result<Option<Record>> {
        let records = self.records.read().await;
        Ok(records.get(key).cloned())
    }

    async fn put_record(&self, record: &Record) -> Result<()> {
        let key = match record.get(KEY_FIELD) {
            Some(Value::String(key)) if key.is_empty() => {
                return Err(RepositoryError::InvalidData(format!(
                    "The key {KEY_FIELD} must not be an empty string"
                )))
            }
            Some(Value::String(key)) => key.clone(),
            Some(_) => {
                return Err(RepositoryError::InvalidData(format!(
                    "Type mismatch for key {KEY_FIELD}: expected a string"
                )))
            }
            None => {
                return Err(RepositoryError::InvalidData(format!(
                    "Missing the key {KEY_FIELD} in the item"
                )))
            }
        };

        let mut records = self.records.write().await;
        records.insert(key, record.clone());
        Ok(())
    }

    async fn update_record(&self, key: &str, attributes: &Record) -> Result<()> {
        if attributes.contains_key(KEY_FIELD) {
            return Err(RepositoryError::InvalidData(format!(
                "Cannot update attribute {KEY_FIELD}. This attribute is part of the key"
            )));
        }

        let mut records = self.records.write().await;
        let record = records.entry(key.to_string()).or_insert_with(|| {
            let mut record = Record::new();
            record.insert(KEY_FIELD.to_string(), Value::String(key.to_string()));
            record
        });
        for (name, value) in attributes {
            record.insert(name.clone(), value.clone());
        }
        Ok(())
    }
}
