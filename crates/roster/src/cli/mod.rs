//! # CLI Behavior
//!
//! This is **one possible UI client** for roster, not the application
//! itself. It is the only place that knows about terminal I/O, exit codes
//! and output formatting.
//!
//! ## Sessions
//!
//! Record commands need a session: run `roster login admin --password
//! password123` once. The session is stored in the data directory and
//! survives between invocations until `roster logout`.
//!
//! ## Naked Execution
//!
//! `roster` with no arguments is `roster list`.
//!
//! ## Shareable Views
//!
//! `roster list` prints the query string of the view it shows
//! (`?search=dev&page=2`). Passing it back with `--query` reproduces the
//! same page. Bad numbers in either form fall back to defaults.
//!
//! ## Module Structure
//!
//! - `commands`: dispatch, one API call per command
//! - `render`: output formatting (tables, messages)
//! - `setup`: argument parsing via clap
//! - `styles`: palettes for light and dark terminals
//! - `logging`: `tracing` subscriber on stderr

mod commands;
mod logging;
mod render;
pub mod setup;
mod styles;

pub use commands::run;
