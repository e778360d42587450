//! Pieces module - the static piece catalog and wall kick data
//!
//! Every kind has one base shape (its spawn orientation) and one kick table.
//! Kick tests use guideline notation: `(dx, dy)` with x to the right and y up.
//! Reference: https://tetris.wiki/SRS

use crate::shape::Shape;
use crate::types::{PieceKind, Rotation};

/// Five ordered kick tests for one rotation transition
pub type KickTests = [(i8, i8); 5];

/// Kick tests for the eight quarter-turn transitions of one kind
pub type KickTable = [KickTests; 8];

const I_SHAPE: Shape = Shape::from_ascii(4, [b"....", b"####", b"....", b"...."]);
const O_SHAPE: Shape = Shape::from_ascii(4, [b"....", b".##.", b".##.", b"...."]);
const T_SHAPE: Shape = Shape::from_ascii(3, [b".#..", b"###.", b"....", b"...."]);
const S_SHAPE: Shape = Shape::from_ascii(3, [b".##.", b"##..", b"....", b"...."]);
const Z_SHAPE: Shape = Shape::from_ascii(3, [b"##..", b".##.", b"....", b"...."]);
const J_SHAPE: Shape = Shape::from_ascii(3, [b"#...", b"###.", b"....", b"...."]);
const L_SHAPE: Shape = Shape::from_ascii(3, [b"..#.", b"###.", b"....", b"...."]);

/// Spawn-orientation shape for a piece kind
pub fn base_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => I_SHAPE,
        PieceKind::O => O_SHAPE,
        PieceKind::T => T_SHAPE,
        PieceKind::S => S_SHAPE,
        PieceKind::Z => Z_SHAPE,
        PieceKind::J => J_SHAPE,
        PieceKind::L => L_SHAPE,
    }
}

/// Shape of `kind` after `rotation` clockwise quarter turns from spawn
pub fn rotated_shape(kind: PieceKind, rotation: Rotation) -> Shape {
    crate::shape::rotate(&base_shape(kind), rotation.index())
}

/// Get the kick table for a piece kind
pub fn kick_table(kind: PieceKind) -> &'static KickTable {
    match kind {
        PieceKind::O => &O_KICKS,
        PieceKind::I => &I_KICKS,
        _ => &JLSTZ_KICKS,
    }
}

/// Tests tried when rotating `kind` from `from` to `to`.
///
/// Half turns have no entry and resolve to five zero tests (rotate in place).
pub fn kick_tests(kind: PieceKind, from: Rotation, to: Rotation) -> &'static KickTests {
    match kick_index(from, to) {
        Some(i) => &kick_table(kind)[i],
        None => &NO_KICKS,
    }
}

/// Row in a [`KickTable`] for a quarter-turn transition
fn kick_index(from: Rotation, to: Rotation) -> Option<usize> {
    use Rotation::*;
    match (from, to) {
        (Spawn, Right) => Some(0),
        (Right, Spawn) => Some(1),
        (Right, Reverse) => Some(2),
        (Reverse, Right) => Some(3),
        (Reverse, Left) => Some(4),
        (Left, Reverse) => Some(5),
        (Left, Spawn) => Some(6),
        (Spawn, Left) => Some(7),
        _ => None,
    }
}

const NO_KICKS: KickTests = [(0, 0); 5];

/// O piece never moves when rotating
const O_KICKS: KickTable = [NO_KICKS; 8];

/// Shared by J, L, S, T, Z
const JLSTZ_KICKS: KickTable = [
    // 0 -> R
    [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)],
    // R -> 0
    [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],
    // R -> 2
    [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],
    // 2 -> R
    [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)],
    // 2 -> L
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
    // L -> 2
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
    // L -> 0
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
    // 0 -> L
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
];

const I_KICKS: KickTable = [
    // 0 -> R
    [(0, 0), (-2, 0), (1, 0), (-2, -1), (1, 2)],
    // R -> 0
    [(0, 0), (2, 0), (-1, 0), (2, 1), (-1, -2)],
    // R -> 2
    [(0, 0), (-1, 0), (2, 0), (-1, 2), (2, -1)],
    // 2 -> R
    [(0, 0), (1, 0), (-2, 0), (1, -2), (-2, 1)],
    // 2 -> L
    [(0, 0), (2, 0), (-1, 0), (2, 1), (-1, -2)],
    // L -> 2
    [(0, 0), (-2, 0), (1, 0), (-2, -1), (1, 2)],
    // L -> 0
    [(0, 0), (1, 0), (-2, 0), (1, -2), (-2, 1)],
    // 0 -> L
    [(0, 0), (-1, 0), (2, 0), (-1, 2), (2, -1)],
];
