//! # Roster Architecture
//!
//! Roster is a **UI-agnostic record roster library**: a local-first CRUD
//! store with search, pagination and a shareable view state, plus a demo
//! session and theme preference. The `roster` terminal client is one client
//! of it; a browser shell or any other front end would call the same API.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Client (the `roster` binary, or any other UI)              │
//! │  - Parses input, renders output, owns the terminal          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Session gating, form validation, submit latency          │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business rules per operation, returns CmdResult          │
//! └─────────────────────────────────────────────────────────────┘
//!              │                                  │
//!              ▼                                  ▼
//! ┌──────────────────────────────┐  ┌──────────────────────────┐
//! │  RecordStore (store/)        │  │  query, view_state       │
//! │  - Authoritative collection  │  │  - Pure filter/paginate  │
//! │  - Mirrors to a backend      │  │  - URL <-> view state    │
//! └──────────────────────────────┘  └──────────────────────────┘
//! ```
//!
//! `RecordStore` knows nothing of queries or view state. The query engine
//! works on a collection snapshot. View state depends on both and mutates
//! neither.
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout or stderr and never
//! exits the process. Diagnostics go through `tracing`; the client decides
//! whether and where to show them.
//!
//! ## Testing Strategy
//!
//! 1. **Commands**: thorough unit tests against `MemBackend`.
//! 2. **API**: session gating, validation and dispatch.
//! 3. **Integration** (`tests/`): the filesystem backend, universal query
//!    properties, and end-to-end scenarios.
//!
//! ## Module Overview
//!
//! - [`api`]: The facade, entry point for all operations
//! - [`commands`]: Business logic for each record operation
//! - [`store`]: Backends and the record store
//! - [`query`]: Filtering and pagination
//! - [`view_state`]: Search/page/page-size state and its URL form
//! - [`model`]: `Record`, `Role`, `Status`, `UserProfile`, seed data
//! - [`validation`]: Form input to typed fields
//! - [`auth`]: Demo session
//! - [`theme`]: Theme preference
//! - [`submit`]: Simulated submission latency
//! - [`config`]: Configuration
//! - [`init`]: Data directory resolution and context setup
//! - [`error`]: Error types

pub mod api;
pub mod auth;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod model;
pub mod query;
pub mod store;
pub mod submit;
pub mod theme;
pub mod validation;
pub mod view_state;

#[cfg(test)]
pub(crate) mod test_utils;
