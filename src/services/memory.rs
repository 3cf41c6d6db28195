use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::services::store::{validate_key, KeyValueStore, StoreError};

/// Process-local store. Contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        validate_key(key)?;
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        validate_key(key)?;
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        tracing::trace!("Memory store set: {}", key);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        validate_key(key)?;
        self.entries.write().await.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_set_get() {
        let store = MemoryStore::new();
        assert!(store.is_empty().await);

        store.set("userProfile", "{}").await.unwrap();
        assert_eq!(store.get("userProfile").await.unwrap().as_deref(), Some("{}"));
        assert_eq!(store.len().await, 1);

        store.set("userProfile", "{\"id\":\"1\"}").await.unwrap();
        assert_eq!(store.len().await, 1);

        store.remove("userProfile").await.unwrap();
        assert_eq!(store.get("userProfile").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_memory_rejects_bad_key() {
        let store = MemoryStore::new();
        assert!(matches!(store.set("a/b", "x").await, Err(StoreError::InvalidKey(_))));
    }
}
