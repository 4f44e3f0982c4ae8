//! TUI Torus (workspace facade crate).
//!
//! Re-exports the member crates as `tui_torus::{core,term,types}` and adds the
//! binary's [`config`] so integration tests can reach everything from one place.

pub mod config;

pub use tui_torus_core as core;
pub use tui_torus_term as term;
pub use tui_torus_types as types;
