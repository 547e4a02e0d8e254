//! S3 object store.

use async_trait::async_trait;
use aws_sdk_s3::Client;
use bytes::Bytes;

use stash_core::objects::{ObjectStore, ObjectStoreError, Result};

use super::client::create_client;
use super::error::{is_missing_object, map_get_object_error};
use crate::config::Config;

/// Reads objects from a single S3 bucket.
///
/// When an expected owner is set, every request carries it and S3 rejects
/// the call if the bucket belongs to another account.
pub struct S3ObjectStore {
    client: Client,
    bucket: String,
    expected_owner: Option<String>,
}

impl S3ObjectStore {
    /// Creates a new store with the given S3 client and bucket.
    pub fn new(client: Client, bucket: impl Into<String>, expected_owner: Option<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
            expected_owner,
        }
    }

    /// Creates a new store from the application configuration.
    pub async fn from_config(config: &Config) -> Self {
        let client = create_client(config.endpoint_url.as_deref()).await;
        Self::new(client, config.bucket_name.clone(), config.bucket_owner.clone())
    }

    /// Get the bucket name.
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Get the expected bucket owner, if any.
    pub fn expected_owner(&self) -> Option<&str> {
        self.expected_owner.as_deref()
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn get_object(&self, key: &str) -> Result<Option<Bytes>> {
        let result = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .set_expected_bucket_owner(self.expected_owner.clone())
            .send()
            .await;

        let output = match result {
            Ok(output) => output,
            Err(err) if is_missing_object(&err) => return Ok(None),
            Err(err) => return Err(map_get_object_error(err)),
        };

        let body = output
            .body
            .collect()
            .await
            .map_err(|e| ObjectStoreError::Body(e.to_string()))?;

        Ok(Some(body.into_bytes()))
    }
}
