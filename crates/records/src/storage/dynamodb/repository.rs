//! DynamoDB repository implementation.
//!
//! Implements [`RecordRepository`] from `stash_core::storage` using DynamoDB.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::{AttributeAction, AttributeValue, AttributeValueUpdate};
use aws_sdk_dynamodb::Client;

use stash_core::record::{Record, KEY_FIELD};
use stash_core::storage::{RecordRepository, Result};

use super::client::create_client;
use super::conversions::{item_to_record, json_to_attribute, record_to_item};
use super::error::{map_get_item_error, map_put_item_error, map_update_item_error};
use crate::config::Config;

/// DynamoDB-based repository implementation.
///
/// The table's partition key is the string attribute `id`.
pub struct DynamoDbRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Creates a new repository from the application configuration.
    ///
    /// Uses the AWS SDK default credential chain.
    pub async fn from_config(config: &Config) -> Self {
        let client = create_client(config.endpoint_url.as_deref()).await;
        Self::new(client, config.table_name.clone())
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

#[async_trait]
impl RecordRepository for DynamoDbRepository {
    async fn get_record(&self, key: &str) -> Result<Option<Record>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(KEY_FIELD, AttributeValue::S(key.to_string()))
            .send()
            .await
            .map_err(map_get_item_error)?;

        match result.item {
            Some(item) => Ok(Some(item_to_record(&item)?)),
            None => Ok(None),
        }
    }

    async fn put_record(&self, record: &Record) -> Result<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(record_to_item(record)))
            .send()
            .await
            .map_err(map_put_item_error)?;

        Ok(())
    }

    async fn update_record(&self, key: &str, attributes: &Record) -> Result<()> {
        let mut request = self
            .client
            .update_item()
            .table_name(&self.table_name)
            .key(KEY_FIELD, AttributeValue::S(key.to_string()));

        for (name, value) in attributes {
            request = request.attribute_updates(
                name,
                AttributeValueUpdate::builder()
                    .value(json_to_attribute(value))
                    .action(AttributeAction::Put)
                    .build(),
            );
        }

        request.send().await.map_err(map_update_item_error)?;

        Ok(())
    }
}
