//! Read-only view of a game handed to renderers once per frame.

use crate::board::Grid;
use crate::game_state::Phase;
use crate::piece::PieceBlocks;
use crate::pieces::base_shape;
use crate::shape::Shape;
use crate::types::{PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH, LOCK_DELAY_FRAMES, PREVIEW_LEN, START_LEVEL};

/// A piece shown outside the board: preview queue entries and the held piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceView {
    pub kind: PieceKind,
    /// Spawn-orientation shape
    pub shape: Shape,
}

impl From<PieceKind> for PieceView {
    fn from(kind: PieceKind) -> Self {
        Self {
            kind,
            shape: base_shape(kind),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: Rotation,
    /// Absolute `(row, col)` of every block, including rows above the board
    pub blocks: PieceBlocks,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub board: Grid,
    pub active: Option<ActiveSnapshot>,
    /// Blocks of the active piece after an immediate hard drop
    pub ghost: PieceBlocks,
    pub preview: [PieceView; PREVIEW_LEN],
    pub hold: Option<PieceView>,
    pub can_hold: bool,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub lock_delay: [i32; 3],
    pub phase: Phase,
    pub frame: u64,
}

impl GameSnapshot {
    pub fn is_lost(&self) -> bool {
        self.phase == Phase::Lost
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            ghost: PieceBlocks::new(),
            preview: [PieceView::from(PieceKind::I); PREVIEW_LEN],
            hold: None,
            can_hold: true,
            score: 0,
            level: START_LEVEL,
            lines: 0,
            lock_delay: LOCK_DELAY_FRAMES,
            phase: Phase::Falling,
            frame: 0,
        }
    }
}
