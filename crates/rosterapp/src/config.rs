//! # Configuration
//!
//! Settings are derived with [`confique`] and resolved in priority order:
//! 1. **Environment variables**: `ROSTER_KEY_PREFIX`, `ROSTER_SUBMIT_LATENCY_MS`, ...
//! 2. **Data directory file**: `<data dir>/roster.toml`, when present.
//! 3. **Compiled defaults**: `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Env | Default | Description |
//! |-----|-----|---------|-------------|
//! | `key_prefix` | `ROSTER_KEY_PREFIX` | `aksamedia` | Prefix of every storage key |
//! | `submit_latency_ms` | `ROSTER_SUBMIT_LATENCY_MS` | `500` | Simulated form round trip |
//! | `username` | `ROSTER_USERNAME` | `admin` | Demo login name |
//! | `password` | `ROSTER_PASSWORD` | `password123` | Demo login password |

use crate::auth::Credentials;
use crate::error::{Result, RosterError};
use crate::store::{StorageKeys, DEFAULT_KEY_PREFIX};
use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const CONFIG_FILE_NAME: &str = "roster.toml";

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RosterConfig {
    /// Prefix for the `_auth`, `_user`, `_theme` and `_data` keys.
    #[config(env = "ROSTER_KEY_PREFIX", default = "aksamedia")]
    pub key_prefix: String,

    /// Delay applied to create and edit submissions, in milliseconds.
    #[config(env = "ROSTER_SUBMIT_LATENCY_MS", default = 500)]
    pub submit_latency_ms: u64,

    #[config(env = "ROSTER_USERNAME", default = "admin")]
    pub username: String,

    #[config(env = "ROSTER_PASSWORD", default = "password123")]
    pub password: String,
}

impl Default for RosterConfig {
    fn default() -> Self {
        let credentials = Credentials::default();
        Self {
            key_prefix: DEFAULT_KEY_PREFIX.to_string(),
            submit_latency_ms: 500,
            username: credentials.username,
            password: credentials.password,
        }
    }
}

impl RosterConfig {
    /// Loads from the environment, then `roster.toml` in `data_dir`.
    pub fn load(data_dir: &Path) -> Result<Self> {
        RosterConfig::builder()
            .env()
            .file(data_dir.join(CONFIG_FILE_NAME))
            .load()
            .map_err(|e| RosterError::Config(e.to_string()))
    }

    /// Loads from `roster.toml` in `data_dir` only, ignoring the environment.
    pub fn load_file(data_dir: &Path) -> Result<Self> {
        RosterConfig::builder()
            .file(data_dir.join(CONFIG_FILE_NAME))
            .load()
            .map_err(|e| RosterError::Config(e.to_string()))
    }

    pub fn storage_keys(&self) -> StorageKeys {
        StorageKeys::with_prefix(&self.key_prefix)
    }

    pub fn submit_latency(&self) -> Duration {
        Duration::from_millis(self.submit_latency_ms)
    }

    pub fn credentials(&self) -> Credentials {
        Credentials {
            username: self.username.clone(),
            password: self.password.clone(),
        }
    }
}
