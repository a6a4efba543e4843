//! # API Facade
//!
//! [`RosterApi`] is the single entry point for every client. It owns the
//! three pieces of application state (record store, session, theme) and the
//! submission gate, and passes them explicitly to the command layer. There
//! are no globals: one `RosterApi` per application root.
//!
//! ## Role and Responsibilities
//!
//! - **Session gating**: record operations require a signed-in user and fail
//!   with [`RosterError::NotAuthenticated`] otherwise
//! - **Validation**: raw form input is validated before anything is submitted
//! - **Latency**: create and edit go through the [`SubmitGate`]. Both take
//!   `&self`, so a client can poll [`RosterApi::is_submitting`] and is
//!   refused with [`RosterError::SubmissionPending`] while one is in flight
//! - **Dispatch** to `commands/*` and return their [`CmdResult`]
//!
//! Business rules stay in the commands; the API does not print or format.
//!
//! ## Generic Over StorageBackend
//!
//! - Production: `RosterApi<FsBackend>`
//! - Testing: `RosterApi<MemBackend>`

use crate::auth::{AuthSession, LoginOutcome};
use crate::commands::{self, CmdResult};
use crate::config::RosterConfig;
use crate::error::{Result, RosterError};
use crate::model::{RecordId, UserProfile};
use crate::store::backend::StorageBackend;
use crate::store::record_store::{MirrorStatus, RecordStore, StoreEvent};
use crate::submit::SubmitGate;
use crate::theme::{ResolvedTheme, ThemePreference, ThemeStore};
use crate::validation::{RecordEdit, RecordForm};
use crate::view_state::ViewState;
use std::cell::RefCell;
use std::rc::Rc;

pub struct RosterApi<B: StorageBackend> {
    records: RefCell<RecordStore<B>>,
    session: AuthSession<B>,
    theme: ThemeStore<B>,
    gate: SubmitGate,
}

impl<B: StorageBackend> RosterApi<B> {
    /// Opens every component against the same backend. Hydration happens
    /// here, once.
    pub fn new(backend: Rc<B>, config: &RosterConfig) -> Self {
        let keys = config.storage_keys();
        Self {
            records: RefCell::new(RecordStore::open(Rc::clone(&backend), keys.data)),
            session: AuthSession::restore(
                Rc::clone(&backend),
                keys.auth,
                keys.user,
                config.credentials(),
            ),
            theme: ThemeStore::load(backend, keys.theme),
            gate: SubmitGate::new(config.submit_latency()),
        }
    }

    // Session

    pub fn login(&mut self, username: &str, password: &str) -> LoginOutcome {
        self.session.login(username, password)
    }

    pub fn logout(&mut self) {
        self.session.logout();
    }

    pub fn whoami(&self) -> Option<&UserProfile> {
        self.session.user()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn update_profile(&mut self, full_name: &str) -> Result<UserProfile> {
        self.session.update_profile(full_name)
    }

    // Theme

    pub fn theme(&self) -> ThemePreference {
        self.theme.preference()
    }

    pub fn set_theme(&mut self, preference: ThemePreference) {
        self.theme.set(preference);
    }

    pub fn toggle_theme(&mut self) -> ThemePreference {
        self.theme.toggle()
    }

    pub fn resolve_theme(&self, system_prefers_dark: bool) -> ResolvedTheme {
        self.theme.resolve(system_prefers_dark)
    }

    // Records

    pub fn list(&self, state: ViewState) -> Result<CmdResult> {
        self.require_session()?;
        commands::list::run(&self.records.borrow(), state)
    }

    /// Lists using a URL query string such as `?search=dev&page=2`.
    pub fn list_query(&self, query: &str) -> Result<CmdResult> {
        self.list(ViewState::from_query(query))
    }

    pub fn get_record(&self, raw_id: &str) -> Result<CmdResult> {
        self.require_session()?;
        commands::get::run(&self.records.borrow(), raw_id)
    }

    /// The store is borrowed only once the latency has elapsed.
    pub async fn create_record(&self, form: &RecordForm) -> Result<CmdResult> {
        self.require_session()?;
        let fields = form.validate().map_err(RosterError::Validation)?;
        let records = &self.records;
        self.gate
            .submit(move || commands::create::run(&mut records.borrow_mut(), fields))
            .await?
    }

    pub async fn update_record(&self, raw_id: &str, edit: &RecordEdit) -> Result<CmdResult> {
        self.require_session()?;
        let patch = edit.validate().map_err(RosterError::Validation)?;
        let exists = RecordId::coerce(raw_id)
            .is_some_and(|id| self.records.borrow().get(id).is_some());
        if !exists {
            return Err(RosterError::RecordNotFound(raw_id.trim().to_string()));
        }
        let records = &self.records;
        self.gate
            .submit(move || commands::update::run(&mut records.borrow_mut(), raw_id, patch))
            .await?
    }

    pub fn delete_record(&mut self, raw_id: &str) -> Result<CmdResult> {
        self.require_session()?;
        commands::delete::run(self.records.get_mut(), raw_id)
    }

    pub fn reset(&mut self) -> Result<CmdResult> {
        self.require_session()?;
        commands::reset::run(self.records.get_mut())
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&StoreEvent) + 'static) {
        self.records.get_mut().subscribe(listener);
    }

    pub fn mirror_status(&self) -> MirrorStatus {
        self.records.borrow().mirror_status().clone()
    }

    pub fn is_submitting(&self) -> bool {
        self.gate.is_pending()
    }

    fn require_session(&self) -> Result<()> {
        if self.session.is_authenticated() {
            Ok(())
        } else {
            Err(RosterError::NotAuthenticated)
        }
    }
}
