//! Terminal raycaster (workspace facade crate).
//!
//! Re-exports the member crates under `tui_raycaster::{core,engine,input,term,types}`
//! and owns the pieces only the binary needs: configuration and logging setup.

pub mod config;
pub mod logging;

pub use tui_raycaster_core as core;
pub use tui_raycaster_engine as engine;
pub use tui_raycaster_input as input;
pub use tui_raycaster_term as term;
pub use tui_raycaster_types as types;
