//! Trait definitions with mockall annotations for testing
//!
//! The durable medium is abstracted here so the store and engine can be
//! exercised against in-memory, file-backed or failing implementations.

use crate::error::StoreResult;

/// Durable key-value string medium
///
/// Calls are synchronous and may fail, but must not hang.
#[mockall::automock]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, `None` when absent
    fn get_item(&self, key: &str) -> StoreResult<Option<String>>;

    /// Replace the value stored under `key`
    fn set_item(&self, key: &str, value: &str) -> StoreResult<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for std::sync::Arc<T> {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set_item(key, value)
    }
}
