//! Terminal input module (engine-facing).
//!
//! This module is independent of any UI framework. It maps `crossterm` key
//! events into [`crate::types::GameAction`]. Key repeat comes from the
//! terminal itself: press and repeat events both produce an action, release
//! events never do.

pub mod map;

pub use blocktris_types as types;

pub use map::{accepts_kind, handle_key_event, should_quit};
