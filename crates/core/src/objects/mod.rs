mod error;
mod http_mapping;
mod traits;

pub use error::{ObjectStoreError, Result};
pub use http_mapping::object_store_error_to_status_code;
pub use traits::ObjectStore;

/// Content type sent with every fetched object, whatever it actually holds.
pub const OBJECT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";
