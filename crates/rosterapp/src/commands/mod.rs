//! # Command Layer
//!
//! Each user-facing record operation lives in its own submodule as a plain
//! function over a [`RecordStore`]. Commands hold the business rules and
//! nothing else.
//!
//! ## What Commands Do NOT Do
//!
//! - **Any I/O** beyond the store itself: no stdout, no terminal concerns
//! - **Argument parsing or validation** of raw input: the API validates forms
//!   before calling in, so commands only see typed values
//! - **Session checks**: gating on login is the API's job
//!
//! ## Structured Returns
//!
//! Commands return [`CmdResult`], not strings:
//! - `affected_records`: records created, changed or removed
//! - `listed_records`: records to display
//! - `listing`: page metadata and the canonical query string (for `list`)
//! - `messages`: leveled messages (info, success, warning, error)
//!
//! When the store could not write its mirror, every mutating command adds a
//! warning so the client can tell the user the change is not saved.
//!
//! ## Testing Strategy
//!
//! **Most of the library's tests live here.** They run against
//! [`crate::store::mem_backend::MemBackend`] so no filesystem is needed.
//!
//! ## Command Modules
//!
//! - [`create`]: Add a record
//! - [`get`]: Look one record up by id
//! - [`list`]: Search and paginate
//! - [`update`]: Change fields of a record
//! - [`delete`]: Remove a record
//! - [`reset`]: Restore the seed collection

use crate::model::Record;
use crate::query::QueryView;
use crate::store::backend::StorageBackend;
use crate::store::record_store::{MirrorStatus, RecordStore};
use crate::view_state::ViewState;
use serde::Serialize;

pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod reset;
pub mod update;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// A converged page of results together with the state that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Listing {
    pub state: ViewState,
    pub view: QueryView,
    /// Canonical query string for `state`, without a leading `?`.
    pub query: String,
}

#[derive(Debug, Default, Serialize)]
pub struct CmdResult {
    pub affected_records: Vec<Record>,
    pub listed_records: Vec<Record>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listing: Option<Listing>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_records(mut self, records: Vec<Record>) -> Self {
        self.affected_records = records;
        self
    }

    pub fn with_listed_records(mut self, records: Vec<Record>) -> Self {
        self.listed_records = records;
        self
    }

    pub fn has_level(&self, level: MessageLevel) -> bool {
        self.messages.iter().any(|m| m.level == level)
    }
}

/// Adds a warning when the last write to the mirror failed.
pub(crate) fn note_mirror<B: StorageBackend>(store: &RecordStore<B>, result: &mut CmdResult) {
    if let MirrorStatus::Unavailable(reason) = store.mirror_status() {
        result.add_message(CmdMessage::warning(format!(
            "Changes are kept for this session only, storage is unavailable: {}",
            reason
        )));
    }
}
