use std::env;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bucket objects are read from (default: "my-demo-bucket")
    pub bucket_name: String,
    /// Account ID the bucket must belong to (default: unset)
    pub bucket_owner: Option<String>,
    /// Custom endpoint URL, for a local S3 emulator (default: unset)
    pub endpoint_url: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `BUCKET_NAME` - S3 bucket name (default: "my-demo-bucket")
    /// - `BUCKET_OWNER` - Expected bucket owner account ID; empty means unset
    /// - `AWS_ENDPOINT_URL` - Endpoint override, e.g. `http://localhost:9000`
    ///
    /// Region and credentials come from the AWS default provider chain.
    pub fn from_env() -> Self {
        Self {
            bucket_name: env::var("BUCKET_NAME").unwrap_or_else(|_| "my-demo-bucket".to_string()),
            bucket_owner: env::var("BUCKET_OWNER").ok().filter(|owner| !owner.is_empty()),
            endpoint_url: env::var("AWS_ENDPOINT_URL").ok(),
        }
    }
}
