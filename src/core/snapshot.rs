//! Render-facing copies of engine state.
//!
//! A snapshot is everything a presentation layer needs for one frame. Hosts
//! keep one instance and refill it via `Game::snapshot_into` to avoid
//! per-frame allocation.

use crate::core::game::ActivePiece;
use crate::core::pieces::Shape;
use crate::types::{GameStatus, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Copy of the active piece for rendering
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            kind: value.kind,
            shape: value.shape,
            x: value.x,
            y: value.y,
        }
    }
}

/// One frame's worth of engine state.
///
/// Board cells are 1-based color indices (0 = empty), matching the palette
/// contract renderers key off.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameSnapshot {
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    /// Hard-drop landing row of the active piece (ghost rendering)
    pub ghost_y: Option<i8>,
    pub status: GameStatus,
    pub score: u32,
    pub lines: u32,
    pub drop_interval_ms: u32,
    pub seed: u32,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        self.status == GameStatus::Running
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            ghost_y: None,
            status: GameStatus::Ready,
            score: 0,
            lines: 0,
            drop_interval_ms: 0,
            seed: 0,
        }
    }
}
