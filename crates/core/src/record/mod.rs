mod error;
mod operations;
mod types;

pub use error::RecordError;
pub use operations::{created_message, key_to_string, updated_message, validate_new_record};
pub use types::{Record, KEY_FIELD, VALUE_FIELD};
