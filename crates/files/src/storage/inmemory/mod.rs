//! In-memory object store implementation.

mod store;

pub use store::InMemoryObjectStore;
