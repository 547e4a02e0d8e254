//! Storage backend implementations.
//!
//! This module provides concrete implementations of
//! [`stash_core::storage::RecordRepository`]:
//!
//! - [`DynamoDbRepository`]: the production backend, one SDK call per operation.
//! - [`InMemoryRepository`]: a `HashMap` backend for tests and local runs.

pub mod dynamodb;
pub mod inmemory;

pub use dynamodb::DynamoDbRepository;
pub use inmemory::InMemoryRepository;
