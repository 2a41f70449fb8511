//! Session configuration.

use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, DROP_INTERVAL_MS};

/// Board size and gravity cadence for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    pub width: u8,
    pub height: u8,
    /// Milliseconds per gravity step, consumed by the host's clock.
    pub drop_interval_ms: u32,
}

impl GameConfig {
    /// Spawn origin: horizontally centred on the top row.
    ///
    /// For the canonical 10-wide board this is `(4, 0)`.
    pub fn spawn_position(&self) -> (i16, i16) {
        ((self.width as i16 / 2 - 1).max(0), 0)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            drop_interval_ms: DROP_INTERVAL_MS,
        }
    }
}
