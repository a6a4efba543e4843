//! # Data Directory and Context
//!
//! Everything roster persists lives in one data directory: the four storage
//! keys as files, plus an optional `roster.toml`.
//!
//! ## Resolution Order
//!
//! 1. `data_override` (the client's `--data-dir` flag).
//! 2. `ROSTER_DATA_DIR` environment variable, mainly to isolate tests.
//! 3. The OS data directory for the app, via the `directories` crate
//!    (e.g. `~/.local/share/roster` on Linux).
//!
//! [`initialize`] resolves the directory, loads [`RosterConfig`] from it and
//! opens a [`RosterApi`] over an [`FsBackend`]. Opening hydrates the record
//! collection, the session and the theme.

use crate::api::RosterApi;
use crate::config::RosterConfig;
use crate::error::{Result, RosterError};
use crate::store::fs_backend::FsBackend;
use directories::ProjectDirs;
use std::path::PathBuf;
use std::rc::Rc;
use tracing::debug;

pub const DATA_DIR_ENV: &str = "ROSTER_DATA_DIR";

pub struct RosterContext {
    pub api: RosterApi<FsBackend>,
    pub config: RosterConfig,
    pub data_dir: PathBuf,
}

/// Picks the data directory without touching the filesystem.
pub fn resolve_data_dir(data_override: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = data_override {
        return Ok(path);
    }
    if let Some(path) = std::env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    ProjectDirs::from("com", "aksamedia", "roster")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| RosterError::Config("Could not determine a data directory".to_string()))
}

pub fn initialize(data_override: Option<PathBuf>) -> Result<RosterContext> {
    let data_dir = resolve_data_dir(data_override)?;
    let config = RosterConfig::load(&data_dir)?;
    debug!(data_dir = %data_dir.display(), prefix = %config.key_prefix, "initializing roster");

    let backend = Rc::new(FsBackend::new(data_dir.clone()));
    let api = RosterApi::new(backend, &config);
    Ok(RosterContext {
        api,
        config,
        data_dir,
    })
}
