//! Piece controller - moving and rotating the active piece against a board
//!
//! A piece is only `{kind, rotation, anchor}`. The board is borrowed for every
//! collision query; a piece never keeps its own copy.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::pieces::{kick_tests, rotated_shape};
use crate::types::{BlockPos, PieceKind, Rotation, SPAWN_COL, SPAWN_ROW};

/// Absolute board coordinates covered by a piece
pub type PieceBlocks = ArrayVec<BlockPos, 16>;

/// The falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    /// Anchor row of the shape's top-left corner; negative above the board
    pub row: i8,
    /// Anchor column of the shape's top-left corner
    pub col: i8,
}

impl ActivePiece {
    /// A piece of `kind` at the spawn anchor in spawn orientation
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: Rotation::Spawn,
            row: SPAWN_ROW,
            col: SPAWN_COL,
        }
    }

    /// Absolute coordinates of every occupied cell at the current rotation.
    ///
    /// Coordinates saturate, so an anchor near the `i8` limits still lands out of bounds.
    pub fn blocks(&self) -> PieceBlocks {
        rotated_shape(self.kind, self.rotation)
            .blocks()
            .iter()
            .map(|&(r, c)| (self.row.saturating_add(r), self.col.saturating_add(c)))
            .collect()
    }

    /// Whether the piece in its current state collides with `board`
    pub fn overlaps(&self, board: &Board) -> bool {
        board.overlaps(&self.blocks())
    }

    /// Shift by `offset` columns. Returns false (and leaves the piece alone) when blocked.
    ///
    /// An offset that overflows the anchor is treated as blocked.
    pub fn move_horizontal(&mut self, board: &Board, offset: i8) -> bool {
        let Some(col) = self.col.checked_add(offset) else {
            return false;
        };
        let moved = Self { col, ..*self };
        if moved.overlaps(board) {
            return false;
        }
        *self = moved;
        true
    }

    /// Shift by `offset` rows (positive is down). Returns false when blocked.
    pub fn move_vertical(&mut self, board: &Board, offset: i8) -> bool {
        let Some(row) = self.row.checked_add(offset) else {
            return false;
        };
        let moved = Self { row, ..*self };
        if moved.overlaps(board) {
            return false;
        }
        *self = moved;
        true
    }

    /// Rotate by `delta` clockwise quarter turns with wall kicks.
    ///
    /// Kick tests are accumulated: each test offsets the position left by the
    /// previous failed test, not the pre-rotation anchor. A test `(dx, dy)`
    /// moves the piece `dx` columns right and `dy` rows up. Returns false and
    /// leaves the piece untouched when all five tests collide.
    pub fn rotate(&mut self, board: &Board, delta: i8) -> bool {
        let target = self.rotation.rotate_by(delta);
        let mut candidate = Self {
            rotation: target,
            ..*self
        };

        for &(dx, dy) in kick_tests(self.kind, self.rotation, target) {
            candidate.col += dx;
            candidate.row -= dy;
            if !candidate.overlaps(board) {
                *self = candidate;
                return true;
            }
        }
        false
    }

    /// Whether the piece rests on the floor or stack (cannot fall one more row)
    pub fn is_grounded(&self, board: &Board) -> bool {
        let mut probe = *self;
        !probe.move_vertical(board, 1)
    }

    /// Move down until blocked; returns the number of rows travelled
    pub fn drop_to_floor(&mut self, board: &Board) -> u32 {
        let mut rows = 0;
        while self.move_vertical(board, 1) {
            rows += 1;
        }
        rows
    }

    /// Where the piece would land on an immediate hard drop
    pub fn ghost(&self, board: &Board) -> Self {
        let mut ghost = *self;
        ghost.drop_to_floor(board);
        ghost
    }
}
