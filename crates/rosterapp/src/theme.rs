//! # Theme Preference
//!
//! The user picks `light`, `dark` or `system`. `system` defers to whatever
//! the host reports; the caller passes that in when resolving, so this module
//! never probes the environment itself.
//!
//! The preference is stored as raw text (not JSON) under the theme key.
//! Anything unrecognised there reads as `system`.

use crate::store::backend::StorageBackend;
use serde::Serialize;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemePreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
            ThemePreference::System => "system",
        }
    }

    /// light → dark → system → light
    pub fn cycle(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::System,
            ThemePreference::System => ThemePreference::Light,
        }
    }

    pub fn resolve(self, system_prefers_dark: bool) -> ResolvedTheme {
        match self {
            ThemePreference::Light => ResolvedTheme::Light,
            ThemePreference::Dark => ResolvedTheme::Dark,
            ThemePreference::System if system_prefers_dark => ResolvedTheme::Dark,
            ThemePreference::System => ResolvedTheme::Light,
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemePreference::Light),
            "dark" => Ok(ThemePreference::Dark),
            "system" => Ok(ThemePreference::System),
            other => Err(format!("Unknown theme: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolvedTheme {
    Light,
    Dark,
}

pub struct ThemeStore<B: StorageBackend> {
    backend: Rc<B>,
    key: String,
    preference: ThemePreference,
}

impl<B: StorageBackend> ThemeStore<B> {
    /// Reads the stored preference. When it is absent or invalid, `system`
    /// is used and written back.
    pub fn load(backend: Rc<B>, key: impl Into<String>) -> Self {
        let key = key.into();
        let stored = backend.read(&key).ok().flatten();
        let parsed = stored.as_deref().map(str::parse::<ThemePreference>);

        let mut store = Self {
            backend,
            key,
            preference: ThemePreference::System,
        };
        match parsed {
            Some(Ok(preference)) => store.preference = preference,
            Some(Err(e)) => {
                warn!(key = %store.key, error = %e, "ignoring stored theme");
                store.persist();
            }
            None => store.persist(),
        }
        store
    }

    pub fn preference(&self) -> ThemePreference {
        self.preference
    }

    pub fn set(&mut self, preference: ThemePreference) {
        self.preference = preference;
        debug!(theme = %preference, "theme changed");
        self.persist();
    }

    pub fn toggle(&mut self) -> ThemePreference {
        self.set(self.preference.cycle());
        self.preference
    }

    pub fn resolve(&self, system_prefers_dark: bool) -> ResolvedTheme {
        self.preference.resolve(system_prefers_dark)
    }

    fn persist(&self) {
        if let Err(e) = self.backend.write(&self.key, self.preference.as_str()) {
            warn!(key = %self.key, error = %e, "theme not persisted");
        }
    }
}
