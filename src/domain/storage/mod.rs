//! Storage domain - durable key-value slots

use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Synchronous string key-value store
///
/// Every call completes before returning; writers never batch.
#[cfg_attr(test, automock)]
pub trait KeyValueStore: Send + Sync {
    /// Reads the value stored under `key`
    fn get(&self, key: &str) -> Result<Option<String>, DomainError>;

    /// Stores `value` under `key`, overwriting any previous value
    fn set(&self, key: &str, value: &str) -> Result<(), DomainError>;

    /// Removes the value under `key`, returns true if one was present
    fn remove(&self, key: &str) -> Result<bool, DomainError>;

    /// Checks whether a value is stored under `key`
    fn contains(&self, key: &str) -> Result<bool, DomainError> {
        Ok(self.get(key)?.is_some())
    }
}
