//! AWS SDK client setup.

use aws_sdk_s3::Client;

/// Creates an S3 client from the ambient AWS configuration.
///
/// When `endpoint_url` is given the client targets it with path-style
/// addressing, which is what local S3 emulators expect.
pub async fn create_client(endpoint_url: Option<&str>) -> Client {
    let mut sdk_config_loader = aws_config::defaults(aws_config::BehaviorVersion::latest());

    if let Some(endpoint) = endpoint_url {
        sdk_config_loader = sdk_config_loader.endpoint_url(endpoint);
    }

    let sdk_config = sdk_config_loader.load().await;
    let s3_config = aws_sdk_s3::config::Builder::from(&sdk_config)
        .force_path_style(endpoint_url.is_some())
        .build();

    Client::from_conf(s3_config)
}
