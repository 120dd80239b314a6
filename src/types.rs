//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Board dimensions
pub const BOARD_WIDTH: u8 = 10;
pub const BOARD_HEIGHT: u8 = 20;

/// Host loop cadence (milliseconds per frame at ~60Hz)
pub const TICK_MS: u32 = 16;

/// Gravity curve: interval starts at 1000ms and loses 10ms per cleared line,
/// floored at 100ms.
pub const BASE_DROP_MS: u32 = 1000;
pub const DROP_MS_PER_LINE: u32 = 10;
pub const DROP_MS_FLOOR: u32 = 100;

/// Drop rewards (points per cell)
pub const SOFT_DROP_POINTS: u32 = 1;
pub const HARD_DROP_POINTS_PER_CELL: u32 = 2;

/// Base multiplier for the quadratic line-clear score (100 * n * n)
pub const LINE_CLEAR_BASE_POINTS: u32 = 100;

/// Tetromino piece kinds
///
/// The declaration order fixes the 0-6 color index exported in snapshots;
/// renderers key their palettes off it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
    J,
    S,
    Z,
}

impl PieceKind {
    /// All seven kinds in color-index order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Color/type index (0-6)
    pub fn index(&self) -> u8 {
        match self {
            PieceKind::I => 0,
            PieceKind::O => 1,
            PieceKind::T => 2,
            PieceKind::L => 3,
            PieceKind::J => 4,
            PieceKind::S => 5,
            PieceKind::Z => 6,
        }
    }

    /// Look up a kind by its color/type index.
    ///
    /// Indices only ever originate from the engine's own catalog, so an
    /// out-of-range value is a programmer error.
    pub fn from_index(index: u8) -> Self {
        assert!(index < 7, "piece index out of range: {}", index);
        Self::ALL[index as usize]
    }

    /// Convert to uppercase letter
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::L => "L",
            PieceKind::J => "J",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
        }
    }
}

/// Cell on the board (None = empty, Some = filled with piece kind)
pub type Cell = Option<PieceKind>;

/// Game lifecycle states
///
/// `Ready -> Running <-> Paused`, `Running -> Over`. `Over` is terminal until
/// an explicit restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Ready,
    Running,
    Paused,
    Over,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Ready => "ready",
            GameStatus::Running => "running",
            GameStatus::Paused => "paused",
            GameStatus::Over => "over",
        }
    }
}

/// Game commands accepted from the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    SoftDrop,
    HardDrop,
    Rotate,
    Pause,
    Restart,
}

impl GameAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::HardDrop => "hardDrop",
            GameAction::Rotate => "rotate",
            GameAction::Pause => "pause",
            GameAction::Restart => "restart",
        }
    }
}

/// Classification of a single lock's line clears (1-4 rows)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearKind {
    Single,
    Double,
    Triple,
    Tetris,
}

impl ClearKind {
    /// Classify a cleared-row count; `None` for zero.
    pub fn from_lines(lines: usize) -> Option<Self> {
        match lines {
            1 => Some(ClearKind::Single),
            2 => Some(ClearKind::Double),
            3 => Some(ClearKind::Triple),
            4 => Some(ClearKind::Tetris),
            _ => None,
        }
    }

    /// Effect name for the presentation layer (sound/visual cue)
    pub fn effect_name(&self) -> &'static str {
        match self {
            ClearKind::Single => "single",
            ClearKind::Double => "double",
            ClearKind::Triple => "triple",
            ClearKind::Tetris => "tetris",
        }
    }
}

/// State-change notifications emitted by the engine
///
/// The engine pushes these into an internal queue; the host drains the queue
/// once per frame and maps them onto rendering/sound. Events report state, they
/// never carry it: the board and piece themselves are read through snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    ScoreChanged(u32),
    LinesChanged(u32),
    BoardChanged,
    PieceChanged,
    /// Successful horizontal move (sound hook)
    PieceMoved,
    LinesCleared(ClearKind),
    GameOver { final_score: u32 },
}
