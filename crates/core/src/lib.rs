//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the game rules, state management, and the gravity
//! loop. It has **zero dependencies** on UI or I/O, so the same session can
//! be driven by the terminal frontend, a test, or a benchmark.
//!
//! # Module Structure
//!
//! - [`board`]: width x height grid with collision, merge and line sweeping
//! - [`pieces`]: the seven shape grids, rotation, and the active piece
//! - [`rng`]: seeded uniform piece selection
//! - [`scoring`]: points policy for cleared lines
//! - [`session`]: the rules engine (move, rotate with wall kick, drop, reset, gravity)
//! - [`snapshot`]: copyable render view of a session
//!
//! # Game Rules
//!
//! - **Uniform randomizer**: every spawn picks one of 7 kinds with equal odds
//! - **Fixed-offset wall kick**: a blocked rotation shifts by 1, -2, 3, ... until
//!   it fits or the next shift would exceed the piece width
//! - **No lock delay**: a piece that cannot fall locks on the next drop
//! - **Game over wipes the board**: a blocked spawn clears everything and zeroes the score
//!
//! # Example
//!
//! ```
//! use blocktris_core::{Session, SessionConfig};
//! use blocktris_types::{GameAction, Phase};
//!
//! let mut session = Session::new(SessionConfig::default());
//! session.start();
//!
//! session.apply_action(GameAction::MoveRight);
//! session.apply_action(GameAction::Rotate);
//! session.apply_action(GameAction::SoftDrop);
//!
//! assert_eq!(session.phase(), Phase::Falling);
//! assert_eq!(session.score(), 0);
//! ```
//!
//! # Timing
//!
//! Call [`Session::tick`](session::Session::tick) every frame with the elapsed
//! milliseconds. A forced drop happens once the accumulator exceeds the drop
//! interval (1000ms by default); any drop, forced or manual, resets it.

pub mod board;
pub mod error;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod snapshot;

pub use blocktris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use error::GridError;
pub use pieces::{get_shape, Piece, ShapeGrid};
pub use rng::{PieceGenerator, SimpleRng};
pub use scoring::ScoringPolicy;
pub use session::{DropOutcome, Session, SessionConfig};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
