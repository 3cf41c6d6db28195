//! Key-value storage port for the profile store.
//!
//! Values are opaque strings (JSON blobs in practice). Backends must be
//! `Send + Sync` so a single instance can be shared by every request.

use std::future::Future;
use thiserror::Error;

use crate::services::{FileStore, MemoryStore, RedisStore};

/// Errors that can occur with storage operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Redis error: {0}")]
    RedisError(#[from] redis::RedisError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Minimal key-value contract: get, set, remove
pub trait KeyValueStore: Send + Sync {
    /// Read a value. A missing key is `Ok(None)`.
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<String>, StoreError>> + Send;

    /// Write a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Delete a value. Deleting a missing key is not an error.
    fn remove(&self, key: &str) -> impl Future<Output = Result<(), StoreError>> + Send;
}

/// The backend selected by configuration
pub enum Backend {
    Memory(MemoryStore),
    File(FileStore),
    Redis(RedisStore),
}

impl Backend {
    pub fn name(&self) -> &'static str {
        match self {
            Backend::Memory(_) => "memory",
            Backend::File(_) => "file",
            Backend::Redis(_) => "redis",
        }
    }
}

impl KeyValueStore for Backend {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match self {
            Backend::Memory(store) => store.get(key).await,
            Backend::File(store) => store.get(key).await,
            Backend::Redis(store) => store.get(key).await,
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        match self {
            Backend::Memory(store) => store.set(key, value).await,
            Backend::File(store) => store.set(key, value).await,
            Backend::Redis(store) => store.set(key, value).await,
        }
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        match self {
            Backend::Memory(store) => store.remove(key).await,
            Backend::File(store) => store.remove(key).await,
            Backend::Redis(store) => store.remove(key).await,
        }
    }
}

/// Keys are restricted so they map safely onto file names and Redis keys
pub fn validate_key(key: &str) -> Result<(), StoreError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidKey(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_key() {
        assert!(validate_key("likedProfiles").is_ok());
        assert!(validate_key("user_data-2").is_ok());
        assert!(validate_key("").is_err());
        assert!(validate_key("../etc/passwd").is_err());
        assert!(validate_key("a b").is_err());
    }

    #[tokio::test]
    async fn test_backend_dispatch() {
        let backend = Backend::Memory(MemoryStore::new());
        assert_eq!(backend.name(), "memory");

        backend.set("isLoggedIn", "true").await.unwrap();
        assert_eq!(backend.get("isLoggedIn").await.unwrap().as_deref(), Some("true"));
        backend.remove("isLoggedIn").await.unwrap();
        assert_eq!(backend.get("isLoggedIn").await.unwrap(), None);
    }
}
