//! Game session - the engine state machine
//!
//! A [`GameSession`] owns the board, the falling piece, the pending next piece
//! and the score. Every mutation goes through one of its commands, and each
//! command runs to completion (including any lock, line clear and respawn)
//! before returning, so callers never observe a half-applied step.
//!
//! A landing locks the piece, spawns the next one (the game-over check) and
//! then clears full rows.

use arrayvec::ArrayVec;
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::pieces::{get_shape, Shape, MAX_SHAPE_DIM};
use crate::rng::PieceSource;
use crate::snapshot::GameSnapshot;
use crate::types::{GameAction, Phase, PieceKind, POINTS_PER_ROW};
use crate::Board;

/// Board coordinates covered by a piece.
pub type BoardCells = ArrayVec<(i16, i16), { MAX_SHAPE_DIM * MAX_SHAPE_DIM }>;

/// The falling piece: a (possibly rotated) shape and the board offset of its
/// top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i16,
    pub y: i16,
}

impl ActivePiece {
    /// A catalog piece in spawn orientation at `(x, y)`.
    pub fn new(kind: PieceKind, x: i16, y: i16) -> Self {
        Self {
            kind,
            shape: get_shape(kind),
            x,
            y,
        }
    }

    /// Board coordinates of every occupied cell.
    pub fn board_cells(&self) -> BoardCells {
        self.shape
            .cells()
            .iter()
            .map(|&(cx, cy)| (self.x + cx as i16, self.y + cy as i16))
            .collect()
    }
}

/// Result of a translation command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The piece moved.
    Moved,
    /// Blocked sideways, or the session is over. Nothing changed.
    Rejected,
    /// Blocked downwards: the piece locked, the next piece spawned (possibly
    /// ending the game) and full rows were cleared.
    Locked { rows_cleared: usize },
}

/// One game from first spawn to game over
#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    board: Board,
    active: ActivePiece,
    next: PieceKind,
    source: PieceSource,
    phase: Phase,
    score: u32,
    lines: u32,
}

impl GameSession {
    /// Start a session: empty board, first piece spawned.
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let mut source = PieceSource::new(seed);
        let next = source.draw();
        let (x, y) = config.spawn_position();

        let mut session = Self {
            config,
            board: Board::new(config.width, config.height),
            // Placeholder until the first spawn below.
            active: ActivePiece::new(next, x, y),
            next,
            source,
            phase: Phase::Spawning,
            score: 0,
            lines: 0,
        };
        session.spawn();
        session
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> &ActivePiece {
        &self.active
    }

    pub fn next(&self) -> PieceKind {
        self.next
    }

    pub fn next_shape(&self) -> Shape {
        get_shape(self.next)
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Total rows cleared this session.
    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn seed(&self) -> u64 {
        self.source.seed()
    }

    /// Promote the next piece to active and draw a new next piece.
    ///
    /// Ends the game if the new piece overlaps locked cells at the spawn
    /// position. Returns whether the piece is now falling. Does nothing once
    /// the game is over.
    pub fn spawn(&mut self) -> bool {
        if self.is_game_over() {
            return false;
        }
        self.phase = Phase::Spawning;

        let kind = self.next;
        self.next = self.source.draw();
        let (x, y) = self.config.spawn_position();
        self.active = ActivePiece::new(kind, x, y);

        if self.collides(0, 0) {
            self.phase = Phase::GameOver;
            info!(
                score = self.score,
                lines = self.lines,
                piece = kind.as_str(),
                "spawn blocked, game over"
            );
            return false;
        }

        debug!(piece = kind.as_str(), next = self.next.as_str(), "spawned");
        self.phase = Phase::Falling;
        true
    }

    /// Would the active piece collide after shifting by `(dx, dy)`?
    pub fn collides(&self, dx: i16, dy: i16) -> bool {
        self.collides_with(dx, dy, &self.active.shape)
    }

    /// Would `shape` collide if placed at the active position shifted by
    /// `(dx, dy)`?
    ///
    /// Side walls and the floor always collide. Rows above the top never
    /// collide with the board, so pieces may poke out over the top.
    pub fn collides_with(&self, dx: i16, dy: i16, shape: &Shape) -> bool {
        let width = self.board.width() as i16;
        let height = self.board.height() as i16;
        shape.cells().iter().any(|&(cx, cy)| {
            let x = self.active.x + cx as i16 + dx;
            let y = self.active.y + cy as i16 + dy;
            x < 0 || x >= width || y >= height || (y >= 0 && self.board.is_occupied(x, y))
        })
    }

    /// Translate the active piece.
    ///
    /// A blocked move with `dy > 0` is a landing: the piece locks, the next
    /// piece spawns and full rows clear. A blocked horizontal move is simply
    /// rejected. Upward moves (`dy < 0`) are always rejected.
    pub fn move_by(&mut self, dx: i16, dy: i16) -> MoveOutcome {
        if self.is_game_over() || dy < 0 {
            return MoveOutcome::Rejected;
        }

        if !self.collides(dx, dy) {
            self.active.x += dx;
            self.active.y += dy;
            return MoveOutcome::Moved;
        }

        if dy == 0 {
            return MoveOutcome::Rejected;
        }

        let rows_cleared = self.land();
        MoveOutcome::Locked { rows_cleared }
    }

    /// Rotate the active piece a quarter turn clockwise in place.
    ///
    /// No kicks: if the rotated shape collides, nothing changes and this
    /// returns false.
    pub fn rotate(&mut self) -> bool {
        if self.is_game_over() {
            return false;
        }

        let candidate = self.active.shape.rotated();
        if self.collides_with(0, 0, &candidate) {
            return false;
        }

        self.active.shape = candidate;
        true
    }

    /// Gravity step. Returns `None` when the interval has not elapsed.
    pub fn tick(&mut self, gravity_elapsed: bool) -> Option<MoveOutcome> {
        gravity_elapsed.then(|| self.move_by(0, 1))
    }

    /// Clear full rows and award `POINTS_PER_ROW` for each. Returns rows
    /// removed; calling it with no full rows is a no-op.
    pub fn line_clear_pass(&mut self) -> usize {
        let rows = self.board.clear_full_rows();
        if rows > 0 {
            self.lines = self.lines.saturating_add(rows as u32);
            self.score = self
                .score
                .saturating_add(rows as u32 * POINTS_PER_ROW);
            debug!(rows, score = self.score, "rows cleared");
        }
        rows
    }

    /// Apply an input command. Returns whether the session changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_by(-1, 0) != MoveOutcome::Rejected,
            GameAction::MoveRight => self.move_by(1, 0) != MoveOutcome::Rejected,
            GameAction::SoftDrop => self.move_by(0, 1) != MoveOutcome::Rejected,
            GameAction::Rotate => self.rotate(),
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.board.copy_from(&self.board);
        out.active = self.active;
        out.next = self.next;
        out.next_shape = self.next_shape();
        out.score = self.score;
        out.lines = self.lines;
        out.game_over = self.is_game_over();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::new(&self.config);
        self.snapshot_into(&mut s);
        s
    }

    /// Lock, respawn, clear.
    ///
    /// The spawn check sees the board before the clear, so a lock that fills
    /// the spawn area ends the game even if those rows would clear.
    fn land(&mut self) -> usize {
        self.phase = Phase::Locking;
        let cells = self.active.board_cells();
        self.board.lock_cells(cells.iter().copied());
        debug!(
            piece = self.active.kind.as_str(),
            x = self.active.x,
            y = self.active.y,
            "locked"
        );

        let spawned = self.spawn();
        if !spawned {
            return self.line_clear_pass();
        }

        self.phase = Phase::Clearing;
        let rows = self.line_clear_pass();
        // Rows shifting down can drop locked cells onto the new piece.
        if rows > 0 && self.collides(0, 0) {
            self.phase = Phase::GameOver;
            info!(
                score = self.score,
                lines = self.lines,
                piece = self.active.kind.as_str(),
                "cleared rows covered the new piece, game over"
            );
        } else {
            self.phase = Phase::Falling;
        }
        rows
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(GameConfig::default(), 1)
    }
}
