use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::path::Path;

use crate::models::{
    seed::default_pool, AuthRecord, CandidateProfile, InteractionRecord, ViewerProfile,
};
use crate::services::store::{KeyValueStore, StoreError};

/// Storage keys
pub struct StoreKey;

impl StoreKey {
    pub const USER_DATA: &'static str = "userData";
    pub const IS_LOGGED_IN: &'static str = "isLoggedIn";
    pub const USER_PROFILE: &'static str = "userProfile";
    pub const CANDIDATE_POOL: &'static str = "candidatePool";
    pub const LIKED_PROFILES: &'static str = "likedProfiles";
    pub const REJECTED_PROFILES: &'static str = "rejectedProfiles";
}

const LOGGED_IN_SENTINEL: &str = "true";

/// Typed accessors over the key-value store
///
/// The only place that knows the key names and blob shapes. There is no
/// schema versioning: a value that no longer parses is logged and treated
/// as absent.
pub struct ProfileStore<S> {
    backend: S,
    seed_pool: Vec<CandidateProfile>,
}

impl<S: KeyValueStore> ProfileStore<S> {
    /// Store seeded with the built-in candidate pool
    pub fn new(backend: S) -> Self {
        Self::with_seed_pool(backend, default_pool())
    }

    pub fn with_seed_pool(backend: S, seed_pool: Vec<CandidateProfile>) -> Self {
        Self { backend, seed_pool }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    async fn read_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let Some(raw) = self.backend.get(key).await? else {
            return Ok(None);
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                tracing::warn!("Ignoring unreadable value under {}: {}", key, e);
                Ok(None)
            }
        }
    }

    async fn write_json<T: Serialize + ?Sized>(
        &self,
        key: &str,
        value: &T,
    ) -> Result<(), StoreError> {
        let json = serde_json::to_string(value)?;
        self.backend.set(key, &json).await
    }

    pub async fn auth_record(&self) -> Result<Option<AuthRecord>, StoreError> {
        self.read_json(StoreKey::USER_DATA).await
    }

    /// Replace the single credential record
    pub async fn save_auth_record(&self, record: &AuthRecord) -> Result<(), StoreError> {
        self.write_json(StoreKey::USER_DATA, record).await
    }

    pub async fn is_logged_in(&self) -> Result<bool, StoreError> {
        let flag = self.backend.get(StoreKey::IS_LOGGED_IN).await?;
        Ok(flag.as_deref() == Some(LOGGED_IN_SENTINEL))
    }

    pub async fn set_logged_in(&self, logged_in: bool) -> Result<(), StoreError> {
        let value = if logged_in { LOGGED_IN_SENTINEL } else { "false" };
        self.backend.set(StoreKey::IS_LOGGED_IN, value).await
    }

    pub async fn viewer_profile(&self) -> Result<Option<ViewerProfile>, StoreError> {
        self.read_json(StoreKey::USER_PROFILE).await
    }

    pub async fn has_viewer_profile(&self) -> Result<bool, StoreError> {
        Ok(self.viewer_profile().await?.is_some())
    }

    pub async fn save_viewer_profile(&self, profile: &ViewerProfile) -> Result<(), StoreError> {
        self.write_json(StoreKey::USER_PROFILE, profile).await
    }

    /// The candidate pool, seeded on first read
    pub async fn candidate_pool(&self) -> Result<Vec<CandidateProfile>, StoreError> {
        if let Some(pool) = self.read_json(StoreKey::CANDIDATE_POOL).await? {
            return Ok(pool);
        }

        tracing::info!("Seeding candidate pool with {} profiles", self.seed_pool.len());
        self.write_json(StoreKey::CANDIDATE_POOL, &self.seed_pool).await?;
        Ok(self.seed_pool.clone())
    }

    pub async fn liked_profiles(&self) -> Result<Vec<CandidateProfile>, StoreError> {
        Ok(self.read_json(StoreKey::LIKED_PROFILES).await?.unwrap_or_default())
    }

    pub async fn save_liked_profiles(&self, liked: &[CandidateProfile]) -> Result<(), StoreError> {
        self.write_json(StoreKey::LIKED_PROFILES, liked).await
    }

    pub async fn rejected_ids(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.read_json(StoreKey::REJECTED_PROFILES).await?.unwrap_or_default())
    }

    pub async fn save_rejected_ids(&self, rejected: &[String]) -> Result<(), StoreError> {
        self.write_json(StoreKey::REJECTED_PROFILES, rejected).await
    }

    pub async fn interactions(&self) -> Result<InteractionRecord, StoreError> {
        Ok(InteractionRecord {
            liked: self.liked_profiles().await?,
            rejected: self.rejected_ids().await?,
        })
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PoolFile {
    List(Vec<CandidateProfile>),
    Table { profiles: Vec<CandidateProfile> },
}

impl PoolFile {
    fn into_profiles(self) -> Vec<CandidateProfile> {
        match self {
            PoolFile::List(profiles) | PoolFile::Table { profiles } => profiles,
        }
    }
}

/// Load a candidate pool from a JSON or TOML file
///
/// JSON may be a bare array or `{"profiles": [...]}`; TOML must use a
/// `[[profiles]]` array of tables.
pub async fn load_pool_file<P: AsRef<Path>>(path: P) -> Result<Vec<CandidateProfile>, StoreError> {
    let path = path.as_ref();
    let raw = tokio::fs::read_to_string(path).await?;

    let file: PoolFile = match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => toml::from_str(&raw)?,
        _ => serde_json::from_str(&raw)?,
    };

    let profiles = file.into_profiles();
    tracing::info!("Loaded {} candidate profiles from {}", profiles.len(), path.display());
    Ok(profiles)
}
