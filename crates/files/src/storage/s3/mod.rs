//! S3 object store implementation using `aws-sdk-s3`.

mod client;
mod error;
mod store;
#[cfg(test)]
mod test_client;

pub use store::S3ObjectStore;
