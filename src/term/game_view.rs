//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::term::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::term::theme::{Palette, CLASSIC};
use crate::types::{GameStatus, BOARD_HEIGHT, BOARD_WIDTH};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// A lightweight terminal view for the falling-block board.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    palette: Palette,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            palette: CLASSIC,
        }
    }
}

impl GameView {
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            ..Self::default()
        }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
    }

    /// Render a snapshot into a fresh framebuffer.
    ///
    /// `status_line` is free text shown under the board (last effect name,
    /// submission receipt, hints).
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport, status_line: &str) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let board_px_w = (BOARD_WIDTH as u16) * self.cell_w;
        let board_px_h = (BOARD_HEIGHT as u16) * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let bg = CellStyle {
            fg: Rgb::new(80, 80, 90),
            bg: Rgb::new(30, 30, 40),
            bold: false,
            dim: false,
        };
        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        fb.fill_rect(start_x + 1, start_y + 1, board_px_w, board_px_h, ' ', bg);
        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h, border);

        // Locked board cells (1-based color indices, 0 = empty).
        for y in 0..BOARD_HEIGHT as u16 {
            for x in 0..BOARD_WIDTH as u16 {
                let cell = snap.board[y as usize][x as usize];
                if cell > 0 {
                    let fg = self.palette.color_for_cell(cell);
                    self.fill_cell(&mut fb, start_x, start_y, x, y, '█', block_style(fg, true));
                } else {
                    self.fill_cell(
                        &mut fb,
                        start_x,
                        start_y,
                        x,
                        y,
                        '·',
                        CellStyle {
                            fg: Rgb::new(90, 90, 100),
                            bg: Rgb::new(30, 30, 40),
                            bold: false,
                            dim: true,
                        },
                    );
                }
            }
        }

        // Ghost piece under the active piece.
        if let (Some(active), Some(ghost_y)) = (snap.active, snap.ghost_y) {
            let ghost = CellStyle {
                fg: Rgb::new(140, 140, 140),
                bg: Rgb::new(30, 30, 40),
                bold: false,
                dim: true,
            };
            for (dx, dy) in active.shape.offsets() {
                self.draw_piece_cell(&mut fb, start_x, start_y, active.x + dx, ghost_y + dy, '░', ghost);
            }
        }

        // Active piece.
        if let Some(active) = snap.active {
            let fg = self.palette.color(active.kind);
            for (dx, dy) in active.shape.offsets() {
                self.draw_piece_cell(
                    &mut fb,
                    start_x,
                    start_y,
                    active.x + dx,
                    active.y + dy,
                    '█',
                    block_style(fg, true),
                );
            }
        }

        self.draw_side_panel(&mut fb, snap, viewport, start_x, start_y, frame_w);

        // Status line under the board frame.
        if !status_line.is_empty() {
            let y = start_y.saturating_add(frame_h);
            if y < viewport.height {
                fb.put_str(start_x, y, status_line, CellStyle::default());
            }
        }

        match snap.status {
            GameStatus::Ready => {
                self.draw_overlay(&mut fb, start_x, start_y, frame_w, frame_h, "READY")
            }
            GameStatus::Paused => {
                self.draw_overlay(&mut fb, start_x, start_y, frame_w, frame_h, "PAUSED")
            }
            GameStatus::Over => {
                self.draw_overlay(&mut fb, start_x, start_y, frame_w, frame_h, "GAME OVER")
            }
            GameStatus::Running => {}
        }

        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    /// Paint one board cell as a cell_w x cell_h glyph block.
    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + cell_x * self.cell_w;
        let py = start_y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    /// Paint a piece cell given signed board coordinates, clipping off-board
    /// positions.
    fn draw_piece_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: i8,
        y: i8,
        ch: char,
        style: CellStyle,
    ) {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return;
        }
        self.fill_cell(fb, start_x, start_y, x as u16, y as u16, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let value = CellStyle::default();

        let mut y = start_y;
        for (name, text) in [
            ("SCORE", snap.score.to_string()),
            ("LINES", snap.lines.to_string()),
            ("SPEED", format!("{}ms", snap.drop_interval_ms)),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_str(panel_x, y.saturating_add(1), &text, value);
            y = y.saturating_add(3);
        }
    }

    fn draw_overlay(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        fb.put_str(x, mid_y, text, style);
    }
}

fn block_style(fg: Rgb, bold: bool) -> CellStyle {
    CellStyle {
        fg,
        bg: Rgb::new(30, 30, 40),
        bold,
        dim: false,
    }
}
