//! blockfall - a falling-block game engine with a terminal host.
//!
//! The [`core`] module is the engine: board, piece catalog, collision,
//! line clearing, scoring, and the tick-driven state machine. It is pure and
//! deterministic. [`term`] and [`input`] are the bundled terminal host;
//! [`service`] is the score-submission collaborator contract the host calls
//! after game over.

pub mod core;
pub mod input;
pub mod service;
pub mod term;
pub mod types;

pub use crate::core::{Game, GameSnapshot};
pub use crate::types::{GameAction, GameEvent, GameStatus, PieceKind};
