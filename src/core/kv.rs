//! Key-value persistence abstraction the ledger is written against

use anyhow::Result;
use async_trait::async_trait;

/// An asynchronous, fallible string key-value store.
///
/// A `set` replaces the whole value for a key in one step; readers observe
/// either the previous value or the new one, never a partial write.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;
    async fn set(&self, key: &str, value: String) -> Result<()>;
}
