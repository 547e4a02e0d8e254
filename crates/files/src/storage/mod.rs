//! Object store implementations.
//!
//! - [`S3ObjectStore`]: the production backend, one `GetObject` per fetch.
//! - [`InMemoryObjectStore`]: a `HashMap` backend for tests and local runs.

pub mod inmemory;
pub mod s3;

pub use inmemory::InMemoryObjectStore;
pub use s3::S3ObjectStore;
