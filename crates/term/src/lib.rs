//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. It renders
//! into a plain framebuffer that is diffed and flushed to the terminal
//! through crossterm, with no widget or layout toolkit in between.
//!
//! - [`game_view`]: snapshot to framebuffer (pure, testable)
//! - [`renderer`]: framebuffer to terminal (diffing, raw mode handling)
//! - [`render_throttle`]: skip frames while nothing visible changes

pub mod fb;
pub mod game_view;
pub mod render_throttle;
pub mod renderer;

pub use blocktris_core as core;
pub use blocktris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{piece_color, AnchorY, GameView, Viewport};
pub use render_throttle::RenderThrottle;
pub use renderer::{changed_runs, encode_diff_into, encode_full_into, TerminalRenderer};
