use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::core::swipe::DEFAULT_COMMIT_DURATION_MS;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub storage: StorageSettings,
    #[serde(default)]
    pub swipe: SwipeConfig,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 8080 }

/// Which key-value backend holds the profile store
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    Memory,
    #[default]
    File,
    Redis,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    #[serde(default)]
    pub backend: BackendKind,
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default = "default_redis_url")]
    pub redis_url: String,
    #[serde(default = "default_l1_cache_size")]
    pub l1_cache_size: u64,
    /// JSON or TOML file with the candidate pool; the built-in pool otherwise
    pub seed_pool_path: Option<PathBuf>,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            backend: BackendKind::default(),
            data_dir: default_data_dir(),
            redis_url: default_redis_url(),
            l1_cache_size: default_l1_cache_size(),
            seed_pool_path: None,
        }
    }
}

fn default_data_dir() -> PathBuf { PathBuf::from("data") }
fn default_redis_url() -> String { "redis://127.0.0.1:6379".to_string() }
fn default_l1_cache_size() -> u64 { 1000 }

#[derive(Debug, Clone, Deserialize)]
pub struct SwipeConfig {
    #[serde(default = "default_screen_width")]
    pub screen_width: f64,
    #[serde(default = "default_commit_duration_ms")]
    pub commit_duration_ms: u64,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            screen_width: default_screen_width(),
            commit_duration_ms: default_commit_duration_ms(),
        }
    }
}

fn default_screen_width() -> f64 { 390.0 }
fn default_commit_duration_ms() -> u64 { DEFAULT_COMMIT_DURATION_MS }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "pretty".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration files (config/default.toml, config/local.toml)
    /// 3. Environment variables (prefixed with MATRIMONY__)
    /// 4. REDIS_URL and MATRIMONY_DATA_DIR
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., MATRIMONY__SERVER__PORT -> server.port
            .add_source(environment())
            .build()?;

        apply_env_overrides(settings)?.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?;

        apply_env_overrides(settings)?.try_deserialize()
    }
}

fn environment() -> Environment {
    Environment::with_prefix("MATRIMONY")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

/// Storage location overrides from plain environment variables
fn apply_env_overrides(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let mut builder = Config::builder().add_source(settings);

    if let Ok(redis_url) = env::var("REDIS_URL") {
        builder = builder.set_override("storage.redis_url", redis_url)?;
    }
    if let Ok(data_dir) = env::var("MATRIMONY_DATA_DIR") {
        builder = builder.set_override("storage.data_dir", data_dir)?;
    }

    builder.build()
}
