//! Functional core shared by the record and file services.
//!
//! Everything here is pure: domain types, validation, backend-agnostic
//! storage traits, and the mapping from storage errors to HTTP status codes.
//! The services provide the I/O-bound implementations.

pub mod objects;
pub mod record;
pub mod storage;
