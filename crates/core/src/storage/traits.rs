use async_trait::async_trait;

use crate::record::Record;

use super::Result;

/// Repository for records in a single key-value table.
///
/// Every method maps to exactly one backend call. Implementations must not
/// add existence checks, retries or conditional writes.
#[async_trait]
pub trait RecordRepository: Send + Sync {
    /// Gets a record by its key. Returns `None` when no record has that key.
    async fn get_record(&self, key: &str) -> Result<Option<Record>>;

    /// Writes the full record, replacing any existing record with the same key.
    async fn put_record(&self, record: &Record) -> Result<()>;

    /// Overwrites each given attribute on the record identified by `key`.
    ///
    /// Attributes not present in `attributes` are left untouched. A missing
    /// record is created with just the key and the given attributes.
    async fn update_record(&self, key: &str, attributes: &Record) -> Result<()>;
}
