//! # Storage Layer
//!
//! Roster keeps all of its state in a small key-value mirror. The
//! [`backend::StorageBackend`] trait abstracts where that mirror lives, so the
//! rest of the library works the same against a directory on disk or an
//! in-memory map.
//!
//! ## Source of Truth
//!
//! In-memory state is authoritative. The mirror is written synchronously
//! after every mutation and read back only when a component is opened
//! (hydration). A write that fails leaves the in-memory change in place and
//! is reported through [`record_store::MirrorStatus`].
//!
//! ## Keys
//!
//! Four independent keys, all sharing a configurable prefix:
//!
//! | Key | Value |
//! |-----|-------|
//! | `<prefix>_auth`  | `true` or absent |
//! | `<prefix>_user`  | JSON `{id, username, fullName}` |
//! | `<prefix>_theme` | `light`, `dark` or `system` |
//! | `<prefix>_data`  | JSON array of records |
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: one file per key in a data directory.
//! - [`mem_backend::MemBackend`]: for testing logic without filesystem I/O,
//!   including simulated write failures.

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;
pub mod record_store;

pub const DEFAULT_KEY_PREFIX: &str = "aksamedia";

/// The full key names for one key prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    pub auth: String,
    pub user: String,
    pub theme: String,
    pub data: String,
}

impl StorageKeys {
    pub fn with_prefix(prefix: &str) -> Self {
        Self {
            auth: format!("{}_auth", prefix),
            user: format!("{}_user", prefix),
            theme: format!("{}_theme", prefix),
            data: format!("{}_data", prefix),
        }
    }
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self::with_prefix(DEFAULT_KEY_PREFIX)
    }
}
