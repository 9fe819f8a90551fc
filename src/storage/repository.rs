use crate::error::Result;

/// Key-value storage for named snapshot records
///
/// This trait defines the interface the ticket store persists through,
/// allowing for different storage implementations. A value is always
/// written whole; there are no partial updates.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore: Send + Sync {
    /// Reads the value stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the value stored under `key`
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

use super::file::FileStorage;
use super::memory::MemoryStorage;

impl KeyValueStore for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.read_value(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.write_value(key, value)
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
