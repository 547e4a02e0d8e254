//! AWS SDK client setup.

use aws_sdk_dynamodb::Client;

/// Creates a DynamoDB client from the ambient AWS configuration.
///
/// Region and credentials come from the default provider chain. When
/// `endpoint_url` is given the client targets it instead of AWS, which is how
/// a local DynamoDB is used.
pub async fn create_client(endpoint_url: Option<&str>) -> Client {
    let mut sdk_config_loader = aws_config::defaults(aws_config::BehaviorVersion::latest());

    if let Some(endpoint) = endpoint_url {
        sdk_config_loader = sdk_config_loader.endpoint_url(endpoint);
    }

    let sdk_config = sdk_config_loader.load().await;
    Client::new(&sdk_config)
}
