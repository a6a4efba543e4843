//! # Session
//!
//! Demo authentication against a single static credential pair. There is
//! no real security here: the session is a flag in the key-value mirror
//! plus the stored [`UserProfile`].
//!
//! - Login succeeds only for the configured username and password. It
//!   writes the flag and the profile, keeping a full name the user set in an
//!   earlier session.
//! - Logout removes the flag but keeps the profile.
//! - On start the session is restored when the flag is `true` and the
//!   profile parses. A profile that does not parse clears both keys.

use crate::error::{Result, RosterError};
use crate::model::UserProfile;
use crate::store::backend::StorageBackend;
use crate::validation::{Field, ValidationErrors};
use serde::Serialize;
use std::rc::Rc;
use tracing::{debug, warn};

const AUTH_FLAG: &str = "true";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Default for Credentials {
    fn default() -> Self {
        Self {
            username: "admin".to_string(),
            password: "password123".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginOutcome {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LoginOutcome {
    fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    fn rejected() -> Self {
        Self {
            success: false,
            error: Some("Invalid username or password".to_string()),
        }
    }
}

pub struct AuthSession<B: StorageBackend> {
    backend: Rc<B>,
    auth_key: String,
    user_key: String,
    credentials: Credentials,
    user: Option<UserProfile>,
}

impl<B: StorageBackend> AuthSession<B> {
    /// Restores the session from the mirror.
    pub fn restore(
        backend: Rc<B>,
        auth_key: impl Into<String>,
        user_key: impl Into<String>,
        credentials: Credentials,
    ) -> Self {
        let mut session = Self {
            backend,
            auth_key: auth_key.into(),
            user_key: user_key.into(),
            credentials,
            user: None,
        };
        session.user = session.load_session();
        session
    }

    fn load_session(&self) -> Option<UserProfile> {
        let flag = self.backend.read(&self.auth_key).ok().flatten();
        let raw_user = self.backend.read(&self.user_key).ok().flatten();

        if flag.as_deref() != Some(AUTH_FLAG) {
            return None;
        }
        let raw_user = raw_user?;
        match serde_json::from_str::<UserProfile>(&raw_user) {
            Ok(user) => {
                debug!(username = %user.username, "restored session");
                Some(user)
            }
            Err(e) => {
                warn!(error = %e, "stored user profile is malformed, clearing session");
                let _ = self.backend.remove(&self.auth_key);
                let _ = self.backend.remove(&self.user_key);
                None
            }
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    pub fn login(&mut self, username: &str, password: &str) -> LoginOutcome {
        if username != self.credentials.username || password != self.credentials.password {
            debug!(%username, "login rejected");
            return LoginOutcome::rejected();
        }

        let mut user = UserProfile {
            username: self.credentials.username.clone(),
            ..UserProfile::default()
        };
        if let Some(previous) = self.stored_profile() {
            if !previous.full_name.is_empty() {
                user.full_name = previous.full_name;
            }
        }

        self.write_or_warn(&self.auth_key, AUTH_FLAG);
        self.save_profile(&user);
        self.user = Some(user);
        LoginOutcome::ok()
    }

    pub fn logout(&mut self) {
        self.user = None;
        if let Err(e) = self.backend.remove(&self.auth_key) {
            warn!(error = %e, "could not clear auth flag");
        }
    }

    /// Changes the display name of the signed-in user.
    pub fn update_profile(&mut self, full_name: &str) -> Result<UserProfile> {
        let full_name = full_name.trim();
        if full_name.is_empty() {
            return Err(RosterError::Validation(ValidationErrors::single(
                Field::Name,
                "Full name is required",
            )));
        }
        let mut user = self.user.clone().ok_or(RosterError::NotAuthenticated)?;
        user.full_name = full_name.to_string();
        self.save_profile(&user);
        self.user = Some(user.clone());
        Ok(user)
    }

    fn stored_profile(&self) -> Option<UserProfile> {
        let raw = self.backend.read(&self.user_key).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }

    fn save_profile(&self, user: &UserProfile) {
        match serde_json::to_string(user) {
            Ok(json) => self.write_or_warn(&self.user_key, &json),
            Err(e) => warn!(error = %e, "could not encode user profile"),
        }
    }

    fn write_or_warn(&self, key: &str, value: &str) {
        if let Err(e) = self.backend.write(key, value) {
            warn!(%key, error = %e, "session state not persisted");
        }
    }
}
