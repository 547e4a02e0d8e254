//! DynamoDB storage backend implementation.
//!
//! This module provides a DynamoDB-based implementation of the repository trait
//! using `aws-sdk-dynamodb`.

mod client;
mod conversions;
mod error;
mod repository;
#[cfg(test)]
mod test_client;

pub use repository::DynamoDbRepository;
