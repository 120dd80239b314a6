//! Pieces module - tetromino shape catalog and rotation
//!
//! Shapes are small boolean matrices in their spawn orientation. Rotation is
//! the simplest legal policy: transpose + row-reverse (90 degrees clockwise),
//! accepted or rejected wholesale by the engine. There are no wall kicks.

use arrayvec::ArrayVec;

use crate::types::{PieceKind, BOARD_WIDTH};

/// Maximum edge length of a shape matrix (the I piece spans 4 cells)
pub const MAX_SHAPE_DIM: usize = 4;

/// Boolean matrix holding one rotation of a tetromino.
///
/// Backed by a fixed 4x4 grid; `width`/`height` give the live extent so the
/// matrix can change aspect under rotation without reallocating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    width: u8,
    height: u8,
    cells: [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
}

impl Shape {
    /// Build a shape from row slices (1 = filled).
    ///
    /// Malformed matrices are a programmer error: the catalog below is the
    /// only intended caller.
    fn from_rows(rows: &[&[u8]]) -> Self {
        let height = rows.len();
        assert!(height >= 1 && height <= MAX_SHAPE_DIM, "bad shape height");
        let width = rows[0].len();
        assert!(width >= 1 && width <= MAX_SHAPE_DIM, "bad shape width");

        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        let mut filled = 0;
        for (y, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), width, "ragged shape matrix");
            for (x, &v) in row.iter().enumerate() {
                if v != 0 {
                    cells[y][x] = true;
                    filled += 1;
                }
            }
        }
        assert_eq!(filled, 4, "a tetromino has exactly 4 cells");

        Self {
            width: width as u8,
            height: height as u8,
            cells,
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Whether the matrix cell at (x, y) is filled.
    ///
    /// Out-of-extent coordinates read as empty.
    pub fn filled(&self, x: u8, y: u8) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.cells[y as usize][x as usize]
    }

    /// Occupied offsets relative to the shape's top-left corner.
    pub fn offsets(&self) -> ArrayVec<(i8, i8), 4> {
        let mut out = ArrayVec::new();
        for y in 0..self.height {
            for x in 0..self.width {
                if self.cells[y as usize][x as usize] {
                    out.push((x as i8, y as i8));
                }
            }
        }
        out
    }

    /// Rotate 90 degrees clockwise: transpose, then reverse each row.
    pub fn rotated(&self) -> Self {
        let w = self.width as usize;
        let h = self.height as usize;

        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for y in 0..w {
            for x in 0..h {
                cells[y][x] = self.cells[h - 1 - x][y];
            }
        }

        Self {
            width: self.height,
            height: self.width,
            cells,
        }
    }
}

/// Spawn-orientation shape for a piece kind.
pub fn spawn_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => Shape::from_rows(&[&[1, 1, 1, 1]]),
        PieceKind::O => Shape::from_rows(&[&[1, 1], &[1, 1]]),
        PieceKind::T => Shape::from_rows(&[&[0, 1, 0], &[1, 1, 1]]),
        PieceKind::L => Shape::from_rows(&[&[1, 0], &[1, 0], &[1, 1]]),
        PieceKind::J => Shape::from_rows(&[&[0, 1], &[0, 1], &[1, 1]]),
        PieceKind::S => Shape::from_rows(&[&[0, 1, 1], &[1, 1, 0]]),
        PieceKind::Z => Shape::from_rows(&[&[1, 1, 0], &[0, 1, 1]]),
    }
}

/// Horizontally centered spawn column for a shape.
pub fn spawn_x(shape: &Shape) -> i8 {
    ((BOARD_WIDTH - shape.width()) / 2) as i8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_shape_has_four_cells() {
        for kind in PieceKind::ALL {
            assert_eq!(spawn_shape(kind).offsets().len(), 4, "{:?}", kind);
        }
    }

    #[test]
    fn i_piece_spawns_flat() {
        let shape = spawn_shape(PieceKind::I);
        assert_eq!(shape.width(), 4);
        assert_eq!(shape.height(), 1);
        assert_eq!(spawn_x(&shape), 3);
    }

    #[test]
    fn rotation_swaps_extent() {
        let shape = spawn_shape(PieceKind::I);
        let rotated = shape.rotated();
        assert_eq!(rotated.width(), 1);
        assert_eq!(rotated.height(), 4);
    }

    #[test]
    fn o_piece_rotation_is_identity() {
        let shape = spawn_shape(PieceKind::O);
        assert_eq!(shape.rotated(), shape);
    }

    #[test]
    fn four_rotations_restore_every_shape() {
        for kind in PieceKind::ALL {
            let shape = spawn_shape(kind);
            let back = shape.rotated().rotated().rotated().rotated();
            assert_eq!(back, shape, "{:?}", kind);
        }
    }

    #[test]
    fn t_piece_clockwise_rotation() {
        // T spawns pointing up; one CW rotation points it right.
        let rotated = spawn_shape(PieceKind::T).rotated();
        assert_eq!(rotated.width(), 2);
        assert_eq!(rotated.height(), 3);
        assert_eq!(
            rotated.offsets().as_slice(),
            &[(0, 0), (0, 1), (1, 1), (0, 2)]
        );
    }
}
