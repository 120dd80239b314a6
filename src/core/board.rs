//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell is empty or holds the kind of the
//! piece that locked there. Stored as a flat array for cache locality.
//! Coordinates: (x, y) with x in 0..9 left to right and y in 0..19 top to
//! bottom.

use arrayvec::ArrayVec;

use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH * BOARD_HEIGHT) as usize;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y); `None` if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y); returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and empty
    pub fn is_free(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// Check if position is within bounds and filled
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Remove every full row and compact the rest downward.
    ///
    /// Two-pointer pass from the bottom: surviving rows slide down by the
    /// number of full rows beneath them, preserving relative order, and the
    /// vacated rows at the top are cleared. Returns the cleared row indices
    /// in ascending order. A single lock can clear at most 4 rows.
    pub fn clear_full_rows(&mut self) -> ArrayVec<usize, 4> {
        let mut cleared_rows = ArrayVec::new();
        let width = BOARD_WIDTH as usize;
        let mut write_y = BOARD_HEIGHT as usize;

        for read_y in (0..BOARD_HEIGHT as usize).rev() {
            if self.is_row_full(read_y) {
                cleared_rows.push(read_y);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    let dst_start = write_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        // Fresh empty rows at the top, one per cleared row.
        for y in 0..write_y {
            let start = y * width;
            for cell in &mut self.cells[start..start + width] {
                *cell = None;
            }
        }

        cleared_rows.reverse();
        cleared_rows
    }

    /// Merge a piece's occupied cells into the board.
    ///
    /// `offsets` are relative to `(x, y)`. Returns false without mutating if
    /// any target cell is out of bounds or already filled.
    pub fn merge_piece(&mut self, offsets: &[(i8, i8)], x: i8, y: i8, kind: PieceKind) -> bool {
        for &(dx, dy) in offsets {
            if !self.is_free(x + dx, y + dy) {
                return false;
            }
        }

        for &(dx, dy) in offsets {
            self.set(x + dx, y + dy, Some(kind));
        }

        true
    }

    /// Count of filled cells (test/diagnostic aid)
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Export the grid as 1-based color indices (0 = empty).
    pub fn write_u8_grid(&self, out: &mut [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]) {
        for y in 0..BOARD_HEIGHT as usize {
            for x in 0..BOARD_WIDTH as usize {
                out[y][x] = match self.cells[y * BOARD_WIDTH as usize + x] {
                    Some(kind) => kind.index() + 1,
                    None => 0,
                };
            }
        }
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn u8_grid_uses_one_based_indices() {
        let mut board = Board::new();
        board.set(0, 0, Some(PieceKind::I));
        board.set(9, 19, Some(PieceKind::Z));

        let mut grid = [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        board.write_u8_grid(&mut grid);

        assert_eq!(grid[0][0], 1); // I has index 0
        assert_eq!(grid[19][9], 7); // Z has index 6
        assert_eq!(grid[10][5], 0);
    }
}
