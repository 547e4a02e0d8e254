use std::env;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// DynamoDB table holding the items (default: "ItemsTable")
    pub table_name: String,
    /// Custom endpoint URL, for local DynamoDB (default: unset)
    pub endpoint_url: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `TABLE_NAME` - DynamoDB table name (default: "ItemsTable")
    /// - `AWS_ENDPOINT_URL` - Endpoint override, e.g. `http://localhost:8000`
    ///
    /// Region and credentials come from the AWS default provider chain.
    pub fn from_env() -> Self {
        Self {
            table_name: env::var("TABLE_NAME").unwrap_or_else(|_| "ItemsTable".to_string()),
            endpoint_url: env::var("AWS_ENDPOINT_URL").ok(),
        }
    }
}
