//! Board tests - grid operations and line-clear compaction

use blockfall::core::Board;
use blockfall::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

#[test]
fn new_board_is_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);

    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert!(board.is_free(x, y), "cell ({}, {}) should be free", x, y);
            assert_eq!(board.get(x, y), Some(None));
        }
    }
    assert_eq!(board.filled_count(), 0);
}

#[test]
fn get_out_of_bounds_returns_none() {
    let board = Board::new();

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_WIDTH as i8, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i8), None);
}

#[test]
fn set_and_get_roundtrip() {
    let mut board = Board::new();

    assert!(board.set(5, 10, Some(PieceKind::T)));
    assert_eq!(board.get(5, 10), Some(Some(PieceKind::T)));

    assert!(board.set(5, 10, None));
    assert_eq!(board.get(5, 10), Some(None));

    assert!(!board.set(-1, 0, Some(PieceKind::T)));
    assert!(!board.set(0, BOARD_HEIGHT as i8, Some(PieceKind::T)));
}

#[test]
fn occupancy_checks() {
    let mut board = Board::new();

    assert!(board.is_free(5, 10));
    assert!(!board.is_occupied(5, 10));

    board.set(5, 10, Some(PieceKind::S));
    assert!(!board.is_free(5, 10));
    assert!(board.is_occupied(5, 10));

    // Out of bounds is neither free nor occupied.
    assert!(!board.is_free(-1, 0));
    assert!(!board.is_occupied(-1, 0));
}

#[test]
fn clear_resets_the_grid() {
    let mut board = Board::new();
    board.set(1, 1, Some(PieceKind::O));
    board.set(8, 19, Some(PieceKind::S));

    board.clear();
    assert_eq!(board.filled_count(), 0);
    assert!(board.cells().iter().all(|c| c.is_none()));
}

#[test]
fn merge_piece_rejects_collision_without_mutation() {
    let mut board = Board::new();
    board.set(4, 5, Some(PieceKind::T));

    let offsets = [(0, 0), (1, 0), (0, 1), (1, 1)];
    assert!(!board.merge_piece(&offsets, 3, 5, PieceKind::O));

    // The failed merge must not leave partial cells behind.
    assert_eq!(board.filled_count(), 1);

    assert!(board.merge_piece(&offsets, 0, 0, PieceKind::O));
    assert_eq!(board.filled_count(), 5);
}

#[test]
fn row_fullness_detection() {
    let mut board = Board::new();

    for x in 0..BOARD_WIDTH as i8 {
        board.set(x, 19, Some(PieceKind::I));
    }
    assert!(board.is_row_full(19));
    assert!(!board.is_row_full(18));

    board.set(0, 19, None);
    assert!(!board.is_row_full(19));

    // Out-of-range rows are never "full".
    assert!(!board.is_row_full(BOARD_HEIGHT as usize));
}

#[test]
fn clearing_no_full_rows_is_a_no_op() {
    let mut board = Board::new();
    board.set(3, 19, Some(PieceKind::L));

    let cleared = board.clear_full_rows();
    assert!(cleared.is_empty());
    assert_eq!(board.get(3, 19), Some(Some(PieceKind::L)));
}

#[test]
fn clearing_bottom_row_shifts_everything_down() {
    let mut board = Board::new();
    for x in 0..BOARD_WIDTH as i8 {
        board.set(x, 19, Some(PieceKind::I));
    }
    board.set(4, 18, Some(PieceKind::T));

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.as_slice(), &[19]);

    // The partial row above landed on the floor.
    assert_eq!(board.get(4, 19), Some(Some(PieceKind::T)));
    assert_eq!(board.filled_count(), 1);
}

/// Rows 5 and 10 full, every other row carrying a marker cell whose column
/// encodes its original row. Clearing must drop exactly those two rows, shift
/// rows above 5 down by 2, rows between 5 and 10 down by 1, leave rows below
/// 10 in place, and insert 2 empty rows at the top.
#[test]
fn clearing_two_separated_rows_preserves_order() {
    let mut board = Board::new();

    for y in 0..BOARD_HEIGHT as i8 {
        if y == 5 || y == 10 {
            for x in 0..BOARD_WIDTH as i8 {
                board.set(x, y, Some(PieceKind::J));
            }
        } else {
            board.set(y % 10, y, Some(PieceKind::T));
        }
    }
    let marker_count = board.filled_count() - 2 * BOARD_WIDTH as usize;

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.as_slice(), &[5, 10]);

    // Two fresh empty rows at the top.
    for y in 0..2 {
        for x in 0..BOARD_WIDTH as i8 {
            assert!(board.is_free(x, y), "row {} should be empty", y);
        }
    }

    // Every surviving marker moved to its expected row, same column.
    for orig_y in 0..BOARD_HEIGHT as i8 {
        if orig_y == 5 || orig_y == 10 {
            continue;
        }
        let new_y = if orig_y < 5 {
            orig_y + 2
        } else if orig_y < 10 {
            orig_y + 1
        } else {
            orig_y
        };
        assert_eq!(
            board.get(orig_y % 10, new_y),
            Some(Some(PieceKind::T)),
            "marker from row {} should be at row {}",
            orig_y,
            new_y
        );
    }

    // Filled cells outside the cleared rows are preserved exactly.
    assert_eq!(board.filled_count(), marker_count);
}

#[test]
fn clearing_four_contiguous_rows() {
    let mut board = Board::new();
    for y in 16..20 {
        for x in 0..BOARD_WIDTH as i8 {
            board.set(x, y, Some(PieceKind::I));
        }
    }
    board.set(7, 15, Some(PieceKind::Z));

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.as_slice(), &[16, 17, 18, 19]);
    assert_eq!(board.get(7, 19), Some(Some(PieceKind::Z)));
    assert_eq!(board.filled_count(), 1);
}
