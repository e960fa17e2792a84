//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (rules engine, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 16 | Target frame interval (~60 FPS) |
//! | `DROP_INTERVAL_MS` | 1000 | Gravity: one forced drop per interval |
//!
//! # Examples
//!
//! ```
//! use blocktris_types::{PieceKind, GameAction, BOARD_WIDTH, BOARD_HEIGHT};
//!
//! let piece = PieceKind::from_str("t").unwrap();
//! assert_eq!(piece, PieceKind::T);
//! assert_eq!(piece.color_index(), 1);
//!
//! let action = GameAction::from_str("rotate").unwrap();
//! assert_eq!(action, GameAction::Rotate);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Target frame interval in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Gravity interval: a forced drop happens once the accumulator exceeds this
pub const DROP_INTERVAL_MS: u32 = 1000;

/// The seven tetromino piece kinds
///
/// Each kind carries a fixed color index in `1..=7`, which is the value a
/// locked cell of that kind holds on the board:
///
/// | Kind | Color index |
/// |------|-------------|
/// | T | 1 |
/// | Z | 2 |
/// | S | 3 |
/// | I | 4 |
/// | O | 5 |
/// | L | 6 |
/// | J | 7 |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds in catalog letter order (`IJLOSTZ`).
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blocktris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "o" => Some(PieceKind::O),
            "s" => Some(PieceKind::S),
            "t" => Some(PieceKind::T),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }


    /// Board cell value for this kind (always in `1..=7`)
    pub fn color_index(&self) -> u8 {
        match self {
            PieceKind::T => 1,
            PieceKind::Z => 2,
            PieceKind::S => 3,
            PieceKind::I => 4,
            PieceKind::O => 5,
            PieceKind::L => 6,
            PieceKind::J => 7,
        }
    }

    /// Inverse of [`PieceKind::color_index`]; `0` and anything above 7 map to `None`.
    ///
    /// ```
    /// use blocktris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_color_index(4), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_color_index(0), None);
    /// ```
    pub fn from_color_index(v: u8) -> Option<Self> {
        match v {
            1 => Some(PieceKind::T),
            2 => Some(PieceKind::Z),
            3 => Some(PieceKind::S),
            4 => Some(PieceKind::I),
            5 => Some(PieceKind::O),
            6 => Some(PieceKind::L),
            7 => Some(PieceKind::J),
            _ => None,
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell filled with the specified piece kind
pub type Cell = Option<PieceKind>;

/// Game actions that can be applied to a session
///
/// These are the only inputs the rules engine understands; the terminal
/// input layer maps key codes onto them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Drop piece one cell down (locks it if it cannot move)
    SoftDrop,
    /// Rotate piece with the fixed-offset wall kick
    Rotate,
    /// Clear the board and start over
    Restart,
}

impl GameAction {
    /// Parse action from string (case-insensitive, camelCase accepted)
    ///
    /// ```
    /// use blocktris_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("softdrop"), Some(GameAction::SoftDrop));
    /// assert_eq!(GameAction::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "rotate" => Some(GameAction::Rotate),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::Rotate => "rotate",
            GameAction::Restart => "restart",
        }
    }
}

/// Outcome of a piece locking, emitted after every lock.
///
/// `score` is the session score right after the lock. When `game_over` is set
/// it is the final score of the game that just ended; the session itself has
/// already been wiped back to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub lines_cleared: u32,
    pub points: u32,
    pub score: u32,
    pub game_over: bool,
}

/// Session lifecycle
///
/// Locking and respawning happen inside a single drop, so they never show up
/// as a resting phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    /// Created but not started
    #[default]
    Idle,
    /// A piece is falling and input is accepted
    Falling,
    /// A freshly spawned piece collided; only restart is accepted
    GameOver,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Falling => "falling",
            Phase::GameOver => "gameOver",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_indices_cover_one_through_seven() {
        let mut seen: Vec<u8> = PieceKind::ALL.iter().map(|k| k.color_index()).collect();
        seen.sort_unstable();
        assert_eq!(seen, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn color_index_roundtrips_for_every_kind() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_color_index(kind.color_index()), Some(kind));
        }
        assert_eq!(PieceKind::from_color_index(8), None);
    }

    #[test]
    fn action_strings_parse_back() {
        for action in [
            GameAction::MoveLeft,
            GameAction::MoveRight,
            GameAction::SoftDrop,
            GameAction::Rotate,
            GameAction::Restart,
        ] {
            assert_eq!(GameAction::from_str(action.as_str()), Some(action));
        }
    }

    #[test]
    fn phase_names() {
        assert_eq!(Phase::default().as_str(), "idle");
        assert_eq!(Phase::Falling.as_str(), "falling");
        assert_eq!(Phase::GameOver.as_str(), "gameOver");
    }

    #[test]
    fn default_timing() {
        assert_eq!(DROP_INTERVAL_MS, 1000);
        assert_eq!(FRAME_MS, 16);
    }
}
