//! Piece catalog and rotation tests

use blockfall::core::{spawn_shape, spawn_x, Game};
use blockfall::types::{GameStatus, PieceKind, BOARD_WIDTH};

#[test]
fn catalog_has_seven_distinct_shapes() {
    let shapes: Vec<_> = PieceKind::ALL.iter().map(|&k| spawn_shape(k)).collect();
    for (i, a) in shapes.iter().enumerate() {
        for b in shapes.iter().skip(i + 1) {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn every_shape_fits_the_board_at_spawn() {
    for kind in PieceKind::ALL {
        let shape = spawn_shape(kind);
        let x = spawn_x(&shape);
        assert!(x >= 0);
        assert!(x as u8 + shape.width() <= BOARD_WIDTH, "{:?}", kind);
    }
}

#[test]
fn spawn_is_horizontally_centered() {
    // width 4 -> column 3, width 3 -> column 3, width 2 -> column 4.
    assert_eq!(spawn_x(&spawn_shape(PieceKind::I)), 3);
    assert_eq!(spawn_x(&spawn_shape(PieceKind::T)), 3);
    assert_eq!(spawn_x(&spawn_shape(PieceKind::S)), 3);
    assert_eq!(spawn_x(&spawn_shape(PieceKind::O)), 4);
    assert_eq!(spawn_x(&spawn_shape(PieceKind::L)), 4);
}

#[test]
fn four_rotations_are_identity() {
    for kind in PieceKind::ALL {
        let shape = spawn_shape(kind);
        let mut rotated = shape;
        for _ in 0..4 {
            rotated = rotated.rotated();
        }
        assert_eq!(rotated, shape, "{:?}", kind);
    }
}

#[test]
fn rotation_preserves_cell_count() {
    for kind in PieceKind::ALL {
        let mut shape = spawn_shape(kind);
        for _ in 0..4 {
            shape = shape.rotated();
            assert_eq!(shape.offsets().len(), 4, "{:?}", kind);
        }
    }
}

/// In an open area, rotating the active piece four times through the engine
/// returns it to its original shape.
#[test]
fn in_game_rotation_round_trip() {
    for kind in PieceKind::ALL {
        let mut game = Game::new(1);
        game.start();
        assert_eq!(game.status(), GameStatus::Running);
        game.spawn(kind);

        // Center of the board, far from walls and floor.
        for _ in 0..8 {
            game.try_move(0, 1);
        }

        let before = game.active().unwrap().shape;
        for _ in 0..4 {
            assert!(game.try_rotate(), "{:?} rotation blocked in open area", kind);
        }
        assert_eq!(game.active().unwrap().shape, before, "{:?}", kind);
    }
}
