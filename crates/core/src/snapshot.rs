//! Snapshot - the read-only state copy handed to renderers

use crate::config::GameConfig;
use crate::pieces::{get_shape, Shape};
use crate::session::ActivePiece;
use crate::types::PieceKind;
use crate::Board;

/// Read-only copy of everything a renderer needs.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSnapshot {
    pub board: Board,
    pub active: ActivePiece,
    pub next: PieceKind,
    pub next_shape: Shape,
    pub score: u32,
    pub lines: u32,
    pub game_over: bool,
}

impl GameSnapshot {
    /// Empty snapshot sized for `config`, ready for `snapshot_into`.
    pub fn new(config: &GameConfig) -> Self {
        let (x, y) = config.spawn_position();
        Self {
            board: Board::new(config.width, config.height),
            active: ActivePiece::new(PieceKind::I, x, y),
            next: PieceKind::I,
            next_shape: get_shape(PieceKind::I),
            score: 0,
            lines: 0,
            game_over: false,
        }
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}
