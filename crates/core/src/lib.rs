//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the game rules and state with no dependencies on
//! terminals, input devices or wall-clock time:
//!
//! - **Deterministic**: the same seed produces the same piece sequence
//! - **Testable**: every rule is a plain method on plain data
//! - **Portable**: a host only needs to feed commands and gravity ticks
//!
//! # Module Structure
//!
//! - [`pieces`]: shape masks, the seven-piece catalog and quarter-turn rotation
//! - [`board`]: grid of locked cells with line clearing
//! - [`session`]: the engine state machine (spawn, move, rotate, lock, clear)
//! - [`rng`]: seeded uniform piece source
//! - [`clock`]: gravity clock for hosts
//! - [`config`]: board size and gravity cadence
//! - [`snapshot`]: read-only state copy for renderers
//!
//! # Rules
//!
//! - Pieces spawn centred on the top row; a blocked spawn ends the game.
//! - Left, right and down move one cell; a blocked downward move locks the
//!   piece, spawns the next piece and then clears full rows (100 points each).
//! - Rotation is a clockwise quarter turn with no wall kicks.
//!
//! # Example
//!
//! ```
//! use blockfall_core::{GameConfig, GameSession, MoveOutcome};
//! use blockfall_types::GameAction;
//!
//! let mut game = GameSession::new(GameConfig::default(), 12345);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//!
//! // Gravity until the piece lands.
//! while game.tick(true) == Some(MoveOutcome::Moved) {}
//!
//! assert!(game.board().occupied_count() > 0);
//! assert!(!game.is_game_over());
//! ```

pub mod board;
pub mod clock;
pub mod config;
pub mod pieces;
pub mod rng;
pub mod session;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use clock::GravityClock;
pub use config::GameConfig;
pub use pieces::{get_shape, Shape, CATALOG};
pub use rng::PieceSource;
pub use session::{ActivePiece, GameSession, MoveOutcome};
pub use snapshot::GameSnapshot;
