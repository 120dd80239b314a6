//! Game module - the engine that ties board, pieces, and scoring together
//!
//! Owns all mutable game state. The host drives it with commands
//! (move/rotate/drop/pause) and a per-frame `tick(elapsed_ms)`; state changes
//! come back as `GameEvent`s plus read access to the board and active piece.
//! Illegal commands are rejected with `false`, never an error.

use crate::core::{
    pieces::{spawn_shape, spawn_x, Shape},
    scoring::{drop_interval_ms, drop_score, line_clear_score},
    snapshot::{ActiveSnapshot, GameSnapshot},
    Board, PiecePicker,
};
use crate::types::*;

/// Active falling piece: a shape matrix anchored at the top-left of its
/// bounding box, in board coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// Create a piece at its spawn position: horizontally centered, top row.
    pub fn at_spawn(kind: PieceKind) -> Self {
        let shape = spawn_shape(kind);
        let x = spawn_x(&shape);
        Self { kind, shape, x, y: 0 }
    }

    /// Whether every occupied cell lands on a free board cell.
    pub fn fits(&self, board: &Board) -> bool {
        self.shape
            .offsets()
            .iter()
            .all(|&(dx, dy)| board.is_free(self.x + dx, self.y + dy))
    }
}

/// Complete engine state for one game session.
///
/// Exactly one engine instance per session; the board and active piece are
/// owned exclusively and only mutated through the command API.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    active: Option<ActivePiece>,
    picker: PiecePicker,
    status: GameStatus,
    score: u32,
    lines: u32,
    /// Milliseconds between automatic downward steps; a pure function of
    /// `lines`, recomputed after every lock.
    drop_interval_ms: u32,
    /// Elapsed milliseconds since the last automatic drop
    drop_timer_ms: u32,
    events: Vec<GameEvent>,
}

impl Game {
    /// Create a new game in the `Ready` state
    pub fn new(seed: u32) -> Self {
        Self {
            board: Board::new(),
            active: None,
            picker: PiecePicker::new(seed),
            status: GameStatus::Ready,
            score: 0,
            lines: 0,
            drop_interval_ms: drop_interval_ms(0),
            drop_timer_ms: 0,
            events: Vec::new(),
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn drop_interval(&self) -> u32 {
        self.drop_interval_ms
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub fn drop_timer(&self) -> u32 {
        self.drop_timer_ms
    }

    /// Drain the pending event queue.
    ///
    /// The host calls this once per frame; events are in emission order.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Start the game: `Ready -> Running`, spawning the first piece.
    pub fn start(&mut self) -> bool {
        if self.status != GameStatus::Ready {
            return false;
        }
        self.status = GameStatus::Running;
        self.spawn_next();
        true
    }

    /// `Running -> Paused`; no-op in any other state. Gravity freezes while
    /// paused.
    pub fn pause(&mut self) -> bool {
        if self.status != GameStatus::Running {
            return false;
        }
        self.status = GameStatus::Paused;
        true
    }

    /// `Paused -> Running`; no-op in any other state.
    pub fn resume(&mut self) -> bool {
        if self.status != GameStatus::Paused {
            return false;
        }
        self.status = GameStatus::Running;
        true
    }

    fn toggle_pause(&mut self) -> bool {
        match self.status {
            GameStatus::Running => self.pause(),
            GameStatus::Paused => self.resume(),
            _ => false,
        }
    }

    /// Discard all session state and start a fresh game.
    ///
    /// The piece sequence continues from the picker's current state rather
    /// than replaying the previous game.
    pub fn restart(&mut self) {
        let seed = self.picker.seed();
        *self = Self::new(seed);
        self.start();
    }

    /// Spawn a specific piece kind, replacing any active piece.
    ///
    /// Public so hosts and tests can drive scripted scenarios; normal play
    /// draws uniformly via the internal picker. If the spawn position
    /// already collides the game transitions to `Over` and the final score
    /// is reported.
    pub fn spawn(&mut self, kind: PieceKind) -> bool {
        if self.status != GameStatus::Running {
            return false;
        }

        let piece = ActivePiece::at_spawn(kind);
        if !piece.fits(&self.board) {
            self.active = None;
            self.status = GameStatus::Over;
            self.emit(GameEvent::GameOver {
                final_score: self.score,
            });
            return false;
        }

        self.active = Some(piece);
        self.emit(GameEvent::PieceChanged);
        true
    }

    fn spawn_next(&mut self) -> bool {
        let kind = self.picker.draw();
        self.spawn(kind)
    }

    /// Move the candidate position without emitting events.
    fn shift(&mut self, dx: i8, dy: i8) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let fits = active
            .shape
            .offsets()
            .iter()
            .all(|&(mx, my)| self.board.is_free(active.x + mx + dx, active.y + my + dy));

        if fits {
            self.active = Some(ActivePiece {
                x: active.x + dx,
                y: active.y + dy,
                ..active
            });
        }

        fits
    }

    /// Try to move the active piece by one cell.
    ///
    /// Legal only while `Running`; a rejected move leaves the piece in place.
    /// Manual moves never reset the drop timer.
    pub fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        debug_assert!((-1..=1).contains(&dx) && (-1..=1).contains(&dy));

        if self.status != GameStatus::Running {
            return false;
        }

        if !self.shift(dx, dy) {
            return false;
        }

        self.emit(GameEvent::PieceChanged);
        if dx != 0 {
            self.emit(GameEvent::PieceMoved);
        }
        true
    }

    /// Rotate the active piece 90 degrees clockwise in place.
    ///
    /// The rotated matrix is tried at the current anchor only; if it
    /// collides, the piece keeps its pre-rotation shape. No wall kicks.
    pub fn try_rotate(&mut self) -> bool {
        if self.status != GameStatus::Running {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let candidate = ActivePiece {
            shape: active.shape.rotated(),
            ..active
        };

        if !candidate.fits(&self.board) {
            return false;
        }

        self.active = Some(candidate);
        self.emit(GameEvent::PieceChanged);
        true
    }

    /// Player-controlled single-cell drop: +1 point on success, lock on
    /// failure.
    pub fn soft_drop(&mut self) -> bool {
        if self.status != GameStatus::Running || self.active.is_none() {
            return false;
        }

        if self.shift(0, 1) {
            self.emit(GameEvent::PieceChanged);
            self.add_score(drop_score(1, false));
            true
        } else {
            self.lock_active();
            false
        }
    }

    /// Drop the active piece to its lowest legal position and lock it.
    ///
    /// Returns the number of cells dropped; each awards +2 points.
    pub fn hard_drop(&mut self) -> u32 {
        if self.status != GameStatus::Running || self.active.is_none() {
            return 0;
        }

        let mut cells: u32 = 0;
        while self.shift(0, 1) {
            cells += 1;
        }

        if cells > 0 {
            self.emit(GameEvent::PieceChanged);
            self.add_score(drop_score(cells, true));
        }

        self.lock_active();
        cells
    }

    /// Advance timers by one host frame.
    ///
    /// The sole source of automatic gravity: once the accumulated time
    /// crosses the drop interval the piece steps down, locking when it
    /// cannot. Returns true when a gravity step or lock happened.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.status != GameStatus::Running || self.active.is_none() {
            return false;
        }

        self.drop_timer_ms += elapsed_ms;
        if self.drop_timer_ms < self.drop_interval_ms {
            return false;
        }

        if self.shift(0, 1) {
            // Carry the remainder so a slow frame doesn't stall gravity.
            self.drop_timer_ms -= self.drop_interval_ms;
            self.emit(GameEvent::PieceChanged);
        } else {
            self.lock_active();
        }
        true
    }

    fn add_score(&mut self, points: u32) {
        if points == 0 {
            return;
        }
        self.score += points;
        self.emit(GameEvent::ScoreChanged(self.score));
    }

    /// Merge the active piece into the board, resolve line clears, update the
    /// gravity curve, and spawn the next piece (or end the game).
    fn lock_active(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        let merged =
            self.board
                .merge_piece(&active.shape.offsets(), active.x, active.y, active.kind);
        // The piece sat at a validated position, so the merge cannot fail.
        debug_assert!(merged, "active piece occupied an invalid position");

        let cleared = self.board.clear_full_rows();
        let count = cleared.len();
        self.emit(GameEvent::BoardChanged);

        if count > 0 {
            self.lines += count as u32;
            self.emit(GameEvent::LinesChanged(self.lines));
            self.add_score(line_clear_score(count));
            if let Some(kind) = ClearKind::from_lines(count) {
                self.emit(GameEvent::LinesCleared(kind));
            }
        }

        // Recomputed on every lock, even for zero clears, so the interval
        // stays a pure function of cumulative lines.
        self.drop_interval_ms = drop_interval_ms(self.lines);
        self.drop_timer_ms = 0;

        self.spawn_next();
    }

    /// Row where the active piece would land on a hard drop (rendering aid).
    pub fn ghost_y(&self) -> Option<i8> {
        let active = self.active?;
        let offsets = active.shape.offsets();

        let mut distance: i8 = 0;
        loop {
            let can_drop = offsets
                .iter()
                .all(|&(dx, dy)| self.board.is_free(active.x + dx, active.y + dy + distance + 1));
            if can_drop {
                distance += 1;
            } else {
                break;
            }
        }

        Some(active.y + distance)
    }

    /// Write the render-facing state into a reusable snapshot.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.active = self.active.map(ActiveSnapshot::from);
        out.ghost_y = self.ghost_y();
        out.status = self.status;
        out.score = self.score;
        out.lines = self.lines;
        out.drop_interval_ms = self.drop_interval_ms;
        out.seed = self.picker.seed();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Dispatch a host command. Returns whether the command was accepted.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.try_move(-1, 0),
            GameAction::MoveRight => self.try_move(1, 0),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::HardDrop => {
                if self.status != GameStatus::Running || self.active.is_none() {
                    return false;
                }
                self.hard_drop();
                true
            }
            GameAction::Rotate => self.try_rotate(),
            GameAction::Pause => self.toggle_pause(),
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(1)
    }
}
