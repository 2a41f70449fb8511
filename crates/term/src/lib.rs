//! Terminal renderer for the game.
//!
//! Renders a [`GameSnapshot`](crate::core::GameSnapshot) into a character
//! framebuffer and flushes only the changed cells to the terminal.
//!
//! - [`fb`]: framebuffer and per-cell style
//! - [`game_view`]: pure snapshot-to-framebuffer mapping (unit-testable)
//! - [`renderer`]: crossterm backend with diff flushing

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
