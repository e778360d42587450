//! Piece tests - shapes, kick tables and kicked rotation against a board

use falltris::core::{base_shape, kick_tests, rotate, rotated_shape, ActivePiece, Board};
use falltris::types::{PieceKind, Rotation};

fn board_with(cells: &[(i8, i8)]) -> Board {
    let mut board = Board::new();
    for &(row, col) in cells {
        board.set(row, col, Some(PieceKind::Z));
    }
    board
}

fn t_at(row: i8, col: i8) -> ActivePiece {
    ActivePiece {
        row,
        col,
        ..ActivePiece::spawn(PieceKind::T)
    }
}

#[test]
fn test_four_quarter_turns_is_identity() {
    for kind in PieceKind::ALL {
        let shape = base_shape(kind);
        assert_eq!(rotate(&shape, 4), shape, "{kind:?}");
        assert_eq!(rotated_shape(kind, Rotation::Spawn), shape);
    }
}

#[test]
fn test_t_rotations() {
    let right = rotated_shape(PieceKind::T, Rotation::Right);
    let expected: Vec<(i8, i8)> = vec![(0, 1), (1, 1), (1, 2), (2, 1)];
    assert_eq!(right.blocks().to_vec(), expected);

    let reverse = rotated_shape(PieceKind::T, Rotation::Reverse);
    let expected: Vec<(i8, i8)> = vec![(1, 0), (1, 1), (1, 2), (2, 1)];
    assert_eq!(reverse.blocks().to_vec(), expected);
}

#[test]
fn test_i_vertical_uses_column_two() {
    let right = rotated_shape(PieceKind::I, Rotation::Right);
    assert!(right.blocks().iter().all(|&(_, c)| c == 2));
}

#[test]
fn test_kick_tables() {
    assert_eq!(
        kick_tests(PieceKind::T, Rotation::Spawn, Rotation::Right),
        &[(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)]
    );
    assert_eq!(
        kick_tests(PieceKind::I, Rotation::Spawn, Rotation::Right),
        &[(0, 0), (-2, 0), (1, 0), (-2, -1), (1, 2)]
    );
    assert_eq!(
        kick_tests(PieceKind::O, Rotation::Left, Rotation::Spawn),
        &[(0, 0); 5]
    );
}

#[test]
fn test_half_turn_has_only_zero_tests() {
    for kind in PieceKind::ALL {
        assert_eq!(
            kick_tests(kind, Rotation::Spawn, Rotation::Reverse),
            &[(0, 0); 5]
        );
        assert_eq!(kick_tests(kind, Rotation::Left, Rotation::Right), &[(0, 0); 5]);
    }
}

#[test]
fn test_unobstructed_rotation_keeps_anchor() {
    let board = Board::new();
    let mut piece = t_at(10, 4);
    assert!(piece.rotate(&board, 1));
    assert_eq!((piece.rotation, piece.row, piece.col), (Rotation::Right, 10, 4));

    assert!(piece.rotate(&board, -1));
    assert_eq!(piece.rotation, Rotation::Spawn);
}

#[test]
fn test_first_kick_applies_when_naive_rotation_blocked() {
    let board = board_with(&[(12, 5)]);
    let mut piece = t_at(10, 4);

    assert!(piece.rotate(&board, 1));
    assert_eq!(piece.rotation, Rotation::Right);
    assert_eq!((piece.row, piece.col), (10, 3));
}

#[test]
fn test_kicks_accumulate() {
    // Naive and first kick both blocked; the second kick (-1, +1) is applied
    // on top of the first one
    let board = board_with(&[(12, 5), (12, 4)]);
    let mut piece = t_at(10, 4);

    assert!(piece.rotate(&board, 1));
    assert_eq!(piece.rotation, Rotation::Right);
    assert_eq!((piece.row, piece.col), (9, 2));
}

#[test]
fn test_rotation_fails_when_every_test_collides() {
    // Fill everything except the T's own cells
    let piece = t_at(10, 4);
    let own = piece.blocks();
    let mut board = Board::new();
    for row in 0..20 {
        for col in 0..10 {
            if !own.contains(&(row, col)) {
                board.set(row, col, Some(PieceKind::Z));
            }
        }
    }

    let mut rotated = piece;
    assert!(!rotated.rotate(&board, 1));
    assert_eq!(rotated, piece);
}

#[test]
fn test_o_rotation_is_stationary() {
    let board = Board::new();
    let mut piece = ActivePiece::spawn(PieceKind::O);
    let before = piece.blocks();
    assert!(piece.rotate(&board, 1));
    assert_eq!(piece.blocks(), before);
    assert_eq!((piece.row, piece.col), (-1, 3));
}

#[test]
fn test_wall_kick_off_right_wall() {
    let board = Board::new();
    // Vertical T against the right wall, stem pointing left
    let mut piece = ActivePiece {
        kind: PieceKind::T,
        rotation: Rotation::Left,
        row: 10,
        col: 8,
    };
    assert!(!piece.overlaps(&board));

    // Left -> Spawn: naive spawn shape would poke into column 10, the first
    // kick (-1, 0) pulls it back inside
    assert!(piece.rotate(&board, 1));
    assert_eq!(piece.rotation, Rotation::Spawn);
    assert_eq!(piece.col, 7);
}

#[test]
fn test_spawn_blocks() {
    let blocks = ActivePiece::spawn(PieceKind::I).blocks();
    assert_eq!(blocks.to_vec(), vec![(0, 3), (0, 4), (0, 5), (0, 6)]);
}

#[test]
fn test_ghost_matches_hard_drop() {
    let board = Board::from_rows(&["####..####"]);
    let piece = ActivePiece::spawn(PieceKind::O);
    let mut dropped = piece;
    let rows = dropped.drop_to_floor(&board);

    assert_eq!(piece.ghost(&board), dropped);
    assert_eq!(dropped.row, 17);
    assert_eq!(rows, 18);
    assert!(dropped.is_grounded(&board));
}
