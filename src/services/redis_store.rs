use redis::aio::ConnectionManager;
use std::sync::Arc;

use crate::services::store::{validate_key, KeyValueStore, StoreError};

/// Two-tier store: in-memory L1 in front of Redis
///
/// L1 is bounded by entry count and never expires entries on its own; L2
/// keys are written without a TTL since the store is the source of truth.
/// Every write goes to both tiers.
pub struct RedisStore {
    redis: Arc<tokio::sync::Mutex<ConnectionManager>>,
    l1_cache: moka::future::Cache<String, String>,
    namespace: String,
}

impl RedisStore {
    /// Connect to Redis. Keys are stored as `{namespace}:{key}`.
    pub async fn new(redis_url: &str, l1_size: u64, namespace: &str) -> Result<Self, StoreError> {
        let client = redis::Client::open(redis_url)?;
        let redis = ConnectionManager::new(client).await?;

        let l1_cache = moka::future::CacheBuilder::new(l1_size).build();

        Ok(Self {
            redis: Arc::new(tokio::sync::Mutex::new(redis)),
            l1_cache,
            namespace: namespace.to_string(),
        })
    }

    fn redis_key(&self, key: &str) -> String {
        format!("{}:{}", self.namespace, key)
    }

    /// Number of entries currently held in L1
    pub fn l1_entries(&self) -> u64 {
        self.l1_cache.entry_count()
    }
}

impl KeyValueStore for RedisStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        validate_key(key)?;

        if let Some(value) = self.l1_cache.get(key).await {
            tracing::trace!("L1 hit: {}", key);
            return Ok(Some(value));
        }

        let mut conn = self.redis.lock().await;
        let value: Option<String> = redis::cmd("GET")
            .arg(self.redis_key(key))
            .query_async(&mut *conn)
            .await?;
        drop(conn);

        match value {
            Some(value) => {
                tracing::trace!("L2 hit: {}", key);
                self.l1_cache.insert(key.to_string(), value.clone()).await;
                Ok(Some(value))
            }
            None => {
                tracing::trace!("Miss: {}", key);
                Ok(None)
            }
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        validate_key(key)?;

        let mut conn = self.redis.lock().await;
        let _: () = redis::cmd("SET")
            .arg(self.redis_key(key))
            .arg(value)
            .query_async(&mut *conn)
            .await?;
        drop(conn);

        // L1 only after L2 accepted the write
        self.l1_cache.insert(key.to_string(), value.to_string()).await;

        tracing::trace!("Redis store set: {}", key);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        validate_key(key)?;
        self.l1_cache.invalidate(key).await;

        let mut conn = self.redis.lock().await;
        let _: () = redis::cmd("DEL")
            .arg(self.redis_key(key))
            .query_async(&mut *conn)
            .await?;
        Ok(())
    }
}
