pub mod disk;
pub mod memory;

use crate::core::config::{AppConfig, StorageBackend};
use crate::core::kv::KeyValueStore;
use anyhow::Result;
use disk::DiskStore;
use memory::MemoryStore;
use std::sync::Arc;
use tracing::debug;

/// Opens the key-value backend selected by the configuration.
pub fn open(config: &AppConfig) -> Result<Arc<dyn KeyValueStore>> {
    match config.backend {
        StorageBackend::Memory => {
            debug!("Using in-memory store");
            Ok(Arc::new(MemoryStore::new()))
        }
        StorageBackend::Disk => {
            let path = config.default_data_path()?;
            Ok(Arc::new(DiskStore::open(&path)?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_open_disk_backend_from_config() {
        let dir = tempdir().unwrap();
        let config = AppConfig {
            data_path: Some(dir.path().to_string_lossy().into_owned()),
            ..AppConfig::default()
        };

        let store = open(&config).unwrap();
        store.set("gastos", "[]".to_string()).await.unwrap();
        assert_eq!(store.get("gastos").await.unwrap().as_deref(), Some("[]"));
        assert!(dir.path().join("keyspace").exists());
    }

    #[tokio::test]
    async fn test_open_memory_backend_from_config() {
        let config = AppConfig {
            backend: StorageBackend::Memory,
            ..AppConfig::default()
        };

        let store = open(&config).unwrap();
        assert!(store.get("ingresos").await.unwrap().is_none());
    }
}
