use crate::core::kv::KeyValueStore;
use anyhow::{Context, Result};
use async_trait::async_trait;
use fjall::{Keyspace, PartitionCreateOptions, PartitionHandle, PersistMode};
use std::path::Path;
use tracing::debug;

const PARTITION: &str = "ledger";

/// Durable key-value store on a fjall keyspace. All keys live in a single
/// partition; every `set` is journaled and synced before it returns.
pub struct DiskStore {
    keyspace: Keyspace,
    partition: PartitionHandle,
}

impl DiskStore {
    pub fn open(path: &Path) -> Result<Self> {
        std::fs::create_dir_all(path)
            .with_context(|| format!("Failed to create data directory: {}", path.display()))?;

        let keyspace = fjall::Config::new(path.join("keyspace"))
            .open()
            .with_context(|| format!("Failed to open keyspace at {}", path.display()))?;
        let partition = keyspace
            .open_partition(PARTITION, PartitionCreateOptions::default())
            .context("Failed to open ledger partition")?;
        debug!("Opened disk store at {}", path.display());

        Ok(Self {
            keyspace,
            partition,
        })
    }
}

#[async_trait]
impl KeyValueStore for DiskStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let Some(bytes) = self.partition.get(key)? else {
            debug!("Store MISS for key: {}", key);
            return Ok(None);
        };
        debug!("Store HIT for key: {}", key);
        let value = String::from_utf8(bytes.to_vec())
            .with_context(|| format!("Value for key '{key}' is not valid UTF-8"))?;
        Ok(Some(value))
    }

    async fn set(&self, key: &str, value: String) -> Result<()> {
        self.partition.insert(key, value.as_bytes())?;
        self.keyspace.persist(PersistMode::SyncAll)?;
        debug!("Store SET for key: {} ({} bytes)", key, value.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_disk_store_get_set() {
        let dir = tempdir().unwrap();
        let store = DiskStore::open(dir.path()).unwrap();

        // Initially, store is empty
        assert!(store.get("gastos").await.unwrap().is_none());

        store.set("gastos", "[]".to_string()).await.unwrap();
        assert_eq!(store.get("gastos").await.unwrap().as_deref(), Some("[]"));

        store
            .set("gastos", r#"[{"id":"1"}]"#.to_string())
            .await
            .unwrap();
        assert_eq!(
            store.get("gastos").await.unwrap().as_deref(),
            Some(r#"[{"id":"1"}]"#)
        );

        assert!(store.get("ingresos").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_disk_store_keeps_unicode() {
        let dir = tempdir().unwrap();
        let store = DiskStore::open(dir.path()).unwrap();

        store.set("ingresos", "💼 Salario".to_string()).await.unwrap();
        assert_eq!(
            store.get("ingresos").await.unwrap().as_deref(),
            Some("💼 Salario")
        );
    }
}
