use serde_json::Value;

use super::{Record, RecordError, KEY_FIELD, VALUE_FIELD};

/// Checks that a record about to be created carries both the key and the
/// value attribute, and returns the key. Any other attributes are accepted as-is.
pub fn validate_new_record(record: &Record) -> Result<&Value, RecordError> {
    let key = record
        .get(KEY_FIELD)
        .ok_or(RecordError::MissingField(KEY_FIELD))?;
    if !record.contains_key(VALUE_FIELD) {
        return Err(RecordError::MissingField(VALUE_FIELD));
    }
    Ok(key)
}

/// Renders a key value for messages and log fields.
///
/// Strings are rendered without quotes; anything else uses its JSON form.
pub fn key_to_string(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Confirmation message returned after a create.
pub fn created_message(key: &str) -> String {
    format!("Item {key} created.")
}

/// Confirmation message returned after an update.
pub fn updated_message(key: &str) -> String {
    format!("Item {key} updated.")
}
