//! blocktris (workspace facade crate).
//!
//! Re-exports the member crates as `blocktris::{core,input,term,types}` and
//! holds the binary's configuration and logging setup.

pub mod config;
pub mod logging;

pub use blocktris_core as core;
pub use blocktris_input as input;
pub use blocktris_term as term;
pub use blocktris_types as types;
