use crate::core::kv::KeyValueStore;
use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

/// In-memory key-value store backed by a HashMap. Contents live as long as
/// the process.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let map = self.inner.lock().await;
        let value = map.get(key).cloned();
        if value.is_some() {
            debug!("Store HIT for key: {}", key);
        } else {
            debug!("Store MISS for key: {}", key);
        }
        Ok(value)
    }

    async fn set(&self, key: &str, value: String) -> Result<()> {
        let mut map = self.inner.lock().await;
        debug!("Store SET for key: {} ({} bytes)", key, value.len());
        map.insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_store_get_set() {
        let store = MemoryStore::new();

        // Initially, store is empty
        assert!(store.get("gastos").await.unwrap().is_none());

        store.set("gastos", "[]".to_string()).await.unwrap();
        assert_eq!(store.get("gastos").await.unwrap().as_deref(), Some("[]"));

        // Overwrite replaces the whole value
        store.set("gastos", "[1]".to_string()).await.unwrap();
        assert_eq!(store.get("gastos").await.unwrap().as_deref(), Some("[1]"));

        assert!(store.get("ingresos").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_memory_store_clones_share_state() {
        let store = MemoryStore::new();
        let other = store.clone();

        store.set("ingresos", "[]".to_string()).await.unwrap();
        assert!(other.get("ingresos").await.unwrap().is_some());
    }
}
