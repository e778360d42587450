//! Board module - the 20×10 playfield
//!
//! The board is a flat row-major array of cells for cache locality and
//! zero-allocation updates. Coordinates are `(row, col)` with row 0 at the top.
//! Rows -2 and -1 exist only for collision purposes: pieces may hang there at
//! spawn, but nothing above row 0 is ever stored.

use crate::types::{BlockPos, Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH, MIN_ROW};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Row-major grid view handed to renderers
pub type Grid = [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];

/// The game board - 20 rows x 10 columns using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (row * WIDTH + col)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Flat index of an in-bounds `(row, col)`
    #[inline(always)]
    fn index(row: i8, col: i8) -> Option<usize> {
        if row < 0 || row >= BOARD_HEIGHT as i8 || col < 0 || col >= BOARD_WIDTH as i8 {
            return None;
        }
        Some((row as usize) * (BOARD_WIDTH as usize) + (col as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Cell at `(row, col)`, or `None` when out of bounds
    pub fn get(&self, row: i8, col: i8) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Set the cell at `(row, col)`. Out-of-bounds writes are ignored and return false.
    pub fn set(&mut self, row: i8, col: i8, cell: Cell) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Whether `(row, col)` is on the board and filled
    pub fn is_occupied(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(Some(_)))
    }

    /// Whether a single block position is illegal for a piece.
    ///
    /// Columns outside 0..10, rows at or below the floor and rows above -2 are
    /// always blocked; on-board rows are blocked when occupied.
    #[inline]
    pub fn blocks_at(&self, (row, col): BlockPos) -> bool {
        if col < 0 || col >= BOARD_WIDTH as i8 || row < MIN_ROW || row >= BOARD_HEIGHT as i8 {
            return true;
        }
        row >= 0 && self.is_occupied(row, col)
    }

    /// True if ANY coordinate in `blocks` is out of bounds or on an occupied cell
    pub fn overlaps(&self, blocks: &[BlockPos]) -> bool {
        blocks.iter().any(|&pos| self.blocks_at(pos))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = row * BOARD_WIDTH as usize;
        self.cells[start..start + BOARD_WIDTH as usize]
            .iter()
            .all(|cell| cell.is_some())
    }

    /// Discard `row`, shift every row above it down by one and empty row 0
    pub fn clear_row(&mut self, row: usize) {
        if row >= BOARD_HEIGHT as usize {
            return;
        }
        let width = BOARD_WIDTH as usize;

        // copy_within handles the overlapping ranges
        for r in (1..=row).rev() {
            let src = (r - 1) * width;
            self.cells.copy_within(src..src + width, r * width);
        }
        self.cells[..width].fill(None);
    }

    /// Clear every full row and return how many were removed.
    ///
    /// Rows are scanned top to bottom once; each full row compacts the board
    /// immediately, so later rows are read from the already-shifted board.
    pub fn clear_filled_lines(&mut self) -> usize {
        let mut cleared = 0;
        for row in 0..BOARD_HEIGHT as usize {
            if self.is_row_full(row) {
                self.clear_row(row);
                cleared += 1;
            }
        }
        cleared
    }

    /// Write `kind` into every block that lands on the board.
    ///
    /// Blocks above row 0 (or otherwise off the board) are dropped silently.
    pub fn place(&mut self, blocks: &[BlockPos], kind: PieceKind) {
        for &(row, col) in blocks {
            self.set(row, col, Some(kind));
        }
    }

    /// Number of occupied cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Copy the board into a row-major grid without allocating
    pub fn write_grid(&self, out: &mut Grid) {
        let width = BOARD_WIDTH as usize;
        for (row, dst) in out.iter_mut().enumerate() {
            dst.copy_from_slice(&self.cells[row * width..(row + 1) * width]);
        }
    }

    /// Build a board from text rows aligned to the floor.
    ///
    /// Each string is one row of exactly 10 characters: `.` is empty, a piece
    /// letter (`IOTSZJL`) fills the cell with that kind and any other character
    /// fills it with `I`. The last string becomes row 19.
    pub fn from_rows(rows: &[&str]) -> Self {
        assert!(rows.len() <= BOARD_HEIGHT as usize, "too many rows");
        let mut board = Self::new();
        let top = BOARD_HEIGHT as usize - rows.len();
        for (i, line) in rows.iter().enumerate() {
            assert_eq!(line.chars().count(), BOARD_WIDTH as usize, "row {i} width");
            for (col, ch) in line.chars().enumerate() {
                if ch == '.' {
                    continue;
                }
                let kind = PieceKind::from_str(&ch.to_string()).unwrap_or(PieceKind::I);
                board.set((top + i) as i8, col as i8, Some(kind));
            }
        }
        board
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
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(0, 9), Some(9));
        assert_eq!(Board::index(1, 0), Some(10));
        assert_eq!(Board::index(19, 9), Some(199));
        assert_eq!(Board::index(0, -1), None);
        assert_eq!(Board::index(0, 10), None);
        assert_eq!(Board::index(20, 0), None);
        assert_eq!(Board::index(-1, 0), None);
    }

    #[test]
    fn hidden_rows_are_free_but_not_above() {
        let board = Board::new();
        assert!(!board.blocks_at((-1, 4)));
        assert!(!board.blocks_at((-2, 4)));
        assert!(board.blocks_at((-3, 4)));
    }

    #[test]
    fn place_drops_blocks_above_the_board() {
        let mut board = Board::new();
        board.place(&[(-1, 3), (0, 3), (0, 4), (-2, 4)], PieceKind::T);
        assert_eq!(board.filled_count(), 2);
        assert!(board.is_occupied(0, 3));
        assert!(board.is_occupied(0, 4));
    }

    #[test]
    fn clear_row_shifts_and_empties_top() {
        let mut board = Board::new();
        board.set(0, 0, Some(PieceKind::L));
        board.set(3, 2, Some(PieceKind::J));
        for col in 0..10 {
            board.set(4, col, Some(PieceKind::I));
        }
        board.clear_row(4);
        assert_eq!(board.get(0, 0), Some(None));
        assert_eq!(board.get(1, 0), Some(Some(PieceKind::L)));
        assert_eq!(board.get(4, 2), Some(Some(PieceKind::J)));
        assert!(!board.is_row_full(4));
    }

    #[test]
    fn from_rows_aligns_to_floor() {
        let board = Board::from_rows(&["T.........", "##########"]);
        assert_eq!(board.get(18, 0), Some(Some(PieceKind::T)));
        assert!(board.is_row_full(19));
        assert_eq!(board.filled_count(), 11);
    }

    #[test]
    fn write_grid_matches_cells() {
        let mut board = Board::new();
        board.set(7, 3, Some(PieceKind::S));
        let mut grid: Grid = [[None; 10]; 20];
        board.write_grid(&mut grid);
        assert_eq!(grid[7][3], Some(PieceKind::S));
        assert_eq!(grid.iter().flatten().filter(|c| c.is_some()).count(), 1);
    }
}
