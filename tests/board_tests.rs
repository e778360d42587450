//! Board tests - collision bounds, placement and line clearing

use falltris::core::Board;
use falltris::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);
    assert_eq!(board.filled_count(), 0);

    for row in 0..BOARD_HEIGHT as i8 {
        for col in 0..BOARD_WIDTH as i8 {
            assert_eq!(board.get(row, col), Some(None));
        }
    }
}

#[test]
fn test_board_out_of_range_access_is_ignored() {
    let mut board = Board::new();

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_HEIGHT as i8, 0), None);
    assert_eq!(board.get(0, BOARD_WIDTH as i8), None);

    assert!(!board.set(-1, 4, Some(PieceKind::T)));
    assert!(!board.set(3, 10, Some(PieceKind::T)));
    assert_eq!(board.filled_count(), 0);
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new();

    assert!(board.set(10, 5, Some(PieceKind::T)));
    assert_eq!(board.get(10, 5), Some(Some(PieceKind::T)));
    assert!(board.is_occupied(10, 5));

    assert!(board.set(10, 5, None));
    assert_eq!(board.get(10, 5), Some(None));
}

#[test]
fn test_blocks_at_bounds() {
    let board = Board::new();

    // Walls, floor, and the ceiling two rows above the board
    assert!(board.blocks_at((0, -1)));
    assert!(board.blocks_at((0, 10)));
    assert!(board.blocks_at((20, 0)));
    assert!(board.blocks_at((-3, 4)));

    // The two hidden rows and the visible board are open
    assert!(!board.blocks_at((-2, 0)));
    assert!(!board.blocks_at((-1, 9)));
    assert!(!board.blocks_at((0, 0)));
    assert!(!board.blocks_at((19, 9)));
}

#[test]
fn test_blocks_at_occupied_cell() {
    let mut board = Board::new();
    board.set(19, 0, Some(PieceKind::L));
    assert!(board.blocks_at((19, 0)));
    assert!(board.overlaps(&[(18, 0), (19, 0)]));
    assert!(!board.overlaps(&[(18, 0), (18, 1)]));
}

#[test]
fn test_clear_single_row_shifts_rows_above() {
    let mut board = Board::new();
    // Rows 0-4 each get one marker in a distinct column
    for row in 0..5 {
        board.set(row, row, Some(PieceKind::S));
    }
    for col in 0..10 {
        board.set(5, col, Some(PieceKind::I));
    }
    for row in 6..20 {
        board.set(row, 0, Some(PieceKind::J));
    }

    assert_eq!(board.clear_filled_lines(), 1);

    for col in 0..10 {
        assert_eq!(board.get(0, col), Some(None), "row 0 must be empty");
    }
    for row in 0..5i8 {
        assert_eq!(board.get(row + 1, row), Some(Some(PieceKind::S)));
    }
    for row in 6..20 {
        assert_eq!(board.get(row, 0), Some(Some(PieceKind::J)));
    }
    assert_eq!(board.filled_count(), 5 + 14);
}

#[test]
fn test_clear_non_adjacent_rows() {
    let mut board = Board::from_rows(&[
        "##########",
        "Z.........",
        "##########",
    ]);

    assert_eq!(board.clear_filled_lines(), 2);
    assert_eq!(board.get(19, 0), Some(Some(PieceKind::Z)));
    assert_eq!(board.filled_count(), 1);
}

#[test]
fn test_clear_nothing_when_no_row_full() {
    let mut board = Board::from_rows(&["#########.", ".#########"]);
    let before = board.clone();
    assert_eq!(board.clear_filled_lines(), 0);
    assert_eq!(board, before);
}

#[test]
fn test_clear_four_rows() {
    let row = "##########";
    let mut board = Board::from_rows(&["T.........", row, row, row, row]);
    assert_eq!(board.clear_filled_lines(), 4);
    assert_eq!(board.get(19, 0), Some(Some(PieceKind::T)));
    assert_eq!(board.filled_count(), 1);
}

#[test]
fn test_place_drops_blocks_above_board() {
    let mut board = Board::new();
    board.place(&[(-1, 4), (0, 3), (0, 4), (0, 5)], PieceKind::T);
    assert_eq!(board.filled_count(), 3);
    assert_eq!(board.get(0, 4), Some(Some(PieceKind::T)));
}

#[test]
fn test_from_rows_is_floor_aligned() {
    let board = Board::from_rows(&["O.........", "..L......."]);
    assert_eq!(board.get(18, 0), Some(Some(PieceKind::O)));
    assert_eq!(board.get(19, 2), Some(Some(PieceKind::L)));
    assert_eq!(board.filled_count(), 2);
}
