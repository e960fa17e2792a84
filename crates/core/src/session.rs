//! Session module - the rules engine
//!
//! A [`Session`] owns the board, the active piece, the score and the gravity
//! accumulator. Every operation takes `&mut self`; there is no shared state,
//! so any number of sessions can run side by side.
//!
//! Player operations never fail. A move or rotation that would collide is
//! rejected and reported as `false`, leaving the piece where it was.
//!
//! The only way out of `Falling` is a spawn that collides: the board is wiped,
//! score and lines go back to zero, and the session enters `GameOver` until
//! [`Session::restart`] is called.

use tracing::{debug, info};

use crate::board::Board;
use crate::pieces::Piece;
use crate::rng::PieceGenerator;
use crate::scoring::ScoringPolicy;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{GameAction, LockEvent, Phase, PieceKind, DROP_INTERVAL_MS};

/// Tunables for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Seed for piece selection
    pub seed: u32,
    /// A forced drop happens once the accumulator exceeds this many ms
    pub drop_interval_ms: u32,
    pub scoring: ScoringPolicy,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            drop_interval_ms: DROP_INTERVAL_MS,
            scoring: ScoringPolicy::default(),
        }
    }
}

/// Result of a single downward step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The session is not falling; nothing happened
    Ignored,
    /// The piece moved down one row
    Fell,
    /// The piece could not move, was merged, and a new piece was spawned
    Locked(LockEvent),
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    active: Option<Piece>,
    generator: PieceGenerator,
    config: SessionConfig,
    phase: Phase,
    score: u32,
    lines: u32,
    drop_counter_ms: u32,
    /// Monotonic episode id (increments on restart)
    episode_id: u32,
    /// Monotonic id for spawned pieces
    piece_id: u32,
    last_event: Option<LockEvent>,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            board: Board::new(),
            active: None,
            generator: PieceGenerator::new(config.seed),
            config,
            phase: Phase::Idle,
            score: 0,
            lines: 0,
            drop_counter_ms: 0,
            episode_id: 0,
            piece_id: 0,
            last_event: None,
        }
    }

    /// Spawn the first piece and begin falling. Does nothing once started.
    pub fn start(&mut self) {
        if self.phase != Phase::Idle {
            return;
        }
        self.phase = Phase::Falling;
        self.drop_counter_ms = 0;
        self.reset();
    }

    /// Clear the board, score and timers, then start again.
    ///
    /// Works from any phase. The piece sequence continues from the current
    /// RNG state rather than replaying the first game.
    pub fn restart(&mut self) {
        self.board.clear();
        self.active = None;
        self.score = 0;
        self.lines = 0;
        self.drop_counter_ms = 0;
        self.last_event = None;
        self.phase = Phase::Idle;
        self.episode_id = self.episode_id.wrapping_add(1);
        info!(episode = self.episode_id, "session restarted");
        self.start();
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn piece_id(&self) -> u32 {
        self.piece_id
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Milliseconds accumulated toward the next forced drop
    pub fn drop_counter_ms(&self) -> u32 {
        self.drop_counter_ms
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Spawn a uniformly random piece at the top center.
    ///
    /// Returns `false` when the new piece collides immediately. That is the
    /// game-over transition: the board is cleared, score and lines drop to
    /// zero, and the phase becomes [`Phase::GameOver`].
    pub fn reset(&mut self) -> bool {
        let kind = self.generator.next_kind();
        self.spawn(kind)
    }

    fn spawn(&mut self, kind: PieceKind) -> bool {
        let piece = Piece::spawn(kind, self.board.width());
        self.active = Some(piece);
        self.piece_id = self.piece_id.wrapping_add(1);

        if !self.board.collides(&piece) {
            return true;
        }

        let final_score = self.score;
        self.board.clear();
        self.score = 0;
        self.lines = 0;
        self.drop_counter_ms = 0;
        self.phase = Phase::GameOver;
        self.last_event = Some(LockEvent {
            lines_cleared: 0,
            points: 0,
            score: final_score,
            game_over: true,
        });
        info!(
            episode = self.episode_id,
            final_score,
            kind = ?kind,
            "spawn blocked, game over"
        );
        false
    }

    /// Shift the active piece horizontally by `dir` (normally ±1).
    pub fn move_piece(&mut self, dir: i8) -> bool {
        if self.phase != Phase::Falling {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let moved = active.shifted(dir, 0);
        if self.board.collides(&moved) {
            return false;
        }
        self.active = Some(moved);
        true
    }

    /// Rotate the active piece, kicking it sideways if needed.
    ///
    /// Kicks shift the rotated piece by 1, -2, 3, -4, ... until it fits. The
    /// search stops as soon as the next shift would exceed the grid width, so
    /// a width-3 grid only reaches x offsets +1, -1 and +2. A rotation that
    /// runs out of shifts leaves the piece exactly as it was.
    pub fn rotate(&mut self) -> bool {
        if self.phase != Phase::Falling {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let mut rotated = active;
        rotated.grid.rotate();

        let width = rotated.width() as i8;
        let mut offset: i8 = 1;
        while self.board.collides(&rotated) {
            rotated.x += offset;
            offset = -(offset + offset.signum());
            if offset > width {
                return false;
            }
        }

        self.active = Some(rotated);
        true
    }

    /// Move the active piece down one row, locking it if it cannot move.
    ///
    /// Locking merges the piece, sweeps full rows, awards points, and spawns
    /// the next piece. The gravity accumulator is reset either way.
    pub fn drop_piece(&mut self) -> DropOutcome {
        if self.phase != Phase::Falling {
            return DropOutcome::Ignored;
        }
        let Some(active) = self.active else {
            return DropOutcome::Ignored;
        };
        self.drop_counter_ms = 0;

        let fallen = active.shifted(0, 1);
        if !self.board.collides(&fallen) {
            self.active = Some(fallen);
            return DropOutcome::Fell;
        }

        DropOutcome::Locked(self.lock_piece(active))
    }

    fn lock_piece(&mut self, piece: Piece) -> LockEvent {
        let merged = self.board.merge(&piece);
        debug_assert!(merged, "active piece overlapped the board at lock time");
        self.active = None;

        let lines_cleared = self.board.sweep_lines();
        let points = self.config.scoring.points(lines_cleared);
        self.score = self.score.saturating_add(points);
        self.lines = self.lines.saturating_add(lines_cleared);
        let score = self.score;

        debug!(
            kind = ?piece.kind,
            x = piece.x,
            y = piece.y,
            lines_cleared,
            points,
            score,
            "piece locked"
        );

        let spawned = self.reset();
        let event = LockEvent {
            lines_cleared,
            points,
            score,
            game_over: !spawned,
        };
        self.last_event = Some(event);
        event
    }

    /// Advance the gravity accumulator by `elapsed_ms`.
    ///
    /// Returns `true` when a forced drop happened this tick.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.phase != Phase::Falling {
            return false;
        }
        self.drop_counter_ms = self.drop_counter_ms.saturating_add(elapsed_ms);
        if self.drop_counter_ms > self.config.drop_interval_ms {
            self.drop_piece();
            return true;
        }
        false
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_piece(-1),
            GameAction::MoveRight => self.move_piece(1),
            GameAction::SoftDrop => !matches!(self.drop_piece(), DropOutcome::Ignored),
            GameAction::Rotate => self.rotate(),
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.active = self.active.map(ActiveSnapshot::from);
        out.phase = self.phase;
        out.score = self.score;
        out.lines = self.lines;
        out.episode_id = self.episode_id;
        out.piece_id = self.piece_id;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
