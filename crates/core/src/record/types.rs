use serde_json::{Map, Value};

/// A record: a map from attribute name to an arbitrary JSON value.
///
/// There is no schema beyond the key attribute. Every other attribute is
/// stored and returned as given.
pub type Record = Map<String, Value>;

/// Partition key attribute of the backing table.
pub const KEY_FIELD: &str = "id";

/// Attribute that must be present, alongside the key, when a record is created.
pub const VALUE_FIELD: &str = "value";
