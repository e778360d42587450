//! Shared types module - data structures and rule constants
//!
//! Everything here is plain data with no external dependencies, usable from the
//! rules engine, the frame loop, the terminal view and the input mapper alike.
//!
//! # Coordinates
//!
//! Board positions are `(row, col)` pairs. Row 0 is the top visible row and rows
//! grow downward; column 0 is the leftmost column.
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Spawn anchor**: row -1, col 3 (pieces may poke up to two rows above the board)
//!
//! # Frame Timing
//!
//! All rule timing is counted in frames of a fixed 60 FPS clock:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAMES_PER_SECOND` | 60 | Nominal simulation rate |
//! | `LOCK_DELAY_FRAMES` | 30 / 120 / 1200 | Floor, move-reset and hard-cap lock timers |
//! | `GRAVITY_FRAMES` | 48 ... 2 | Frames per gravity row for levels 0-19 |
//! | `MIN_GRAVITY_FRAMES` | 1 | Level 20 and above |
//!
//! # Examples
//!
//! ```
//! use falltris_types::{InputEvent, PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::from_str("t"), Some(PieceKind::T));
//! assert_eq!(Rotation::Spawn.rotate_by(-1), Rotation::Left);
//! assert_eq!(InputEvent::from_str("hardDrop"), Some(InputEvent::HardDrop));
//! assert_eq!((BOARD_WIDTH, BOARD_HEIGHT), (10, 20));
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Highest row a piece block may occupy. Rows -2 and -1 sit above the visible board.
pub const MIN_ROW: i8 = -2;

/// Anchor row of a freshly spawned piece
pub const SPAWN_ROW: i8 = -1;

/// Anchor column of a freshly spawned piece
pub const SPAWN_COL: i8 = 3;

/// Nominal frame rate of the simulation clock
pub const FRAMES_PER_SECOND: u32 = 60;

/// Lock delay defaults in frames: floor timer, move-reset timer, absolute cap.
pub const LOCK_DELAY_FRAMES: [i32; 3] = [30, 120, 1200];

/// Frames per gravity row, indexed by level (0-19).
pub const GRAVITY_FRAMES: [u32; 20] = [
    48, 43, 38, 33, 28, 23, 18, 13, 8, 6, 5, 5, 5, 4, 4, 4, 3, 3, 3, 2,
];

/// Gravity interval once the level passes the end of [`GRAVITY_FRAMES`].
pub const MIN_GRAVITY_FRAMES: u32 = 1;

/// Line clear base points by rows cleared (index 0 awards nothing).
///
/// The awarded score is `level * LINE_SCORES[rows]`.
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Cleared lines needed to advance one level.
pub const LINES_PER_LEVEL: u32 = 10;

/// Level at the start of a game.
pub const START_LEVEL: u32 = 1;

/// Length of the upcoming-piece preview queue.
pub const PREVIEW_LEN: usize = 7;

/// Number of distinct piece kinds (and the size of one bag).
pub const KIND_COUNT: usize = 7;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_constants_match_classic_tables() {
        assert_eq!(LOCK_DELAY_FRAMES, [30, 120, 1200]);
        assert_eq!(GRAVITY_FRAMES[0], 48);
        assert_eq!(GRAVITY_FRAMES[19], 2);
        assert_eq!(LINE_SCORES[4], 800);
        assert_eq!(PREVIEW_LEN, KIND_COUNT);
        assert!(MIN_ROW < SPAWN_ROW);
    }

    #[test]
    fn rotation_arithmetic_wraps_both_ways() {
        assert_eq!(Rotation::Spawn.rotate_by(1), Rotation::Right);
        assert_eq!(Rotation::Spawn.rotate_by(3), Rotation::Left);
        assert_eq!(Rotation::Spawn.rotate_by(-1), Rotation::Left);
        assert_eq!(Rotation::Left.rotate_by(1), Rotation::Spawn);
        assert_eq!(Rotation::Right.rotate_by(-6), Rotation::Left);
        assert_eq!(Rotation::from_index(8), Rotation::Spawn);
    }

    #[test]
    fn input_event_names_round_trip() {
        for ev in InputEvent::ALL {
            assert_eq!(InputEvent::from_str(ev.as_str()), Some(ev));
        }
    }
}

/// The seven piece kinds
///
/// The kind doubles as the cell tag stored on the board once a piece locks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// Every kind, in bag refill order.
    pub const ALL: [PieceKind; KIND_COUNT] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// ```
    /// use falltris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("x"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Upper-case letter used in logs and side panels
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::J => "J",
            PieceKind::L => "L",
        }
    }
}

/// Rotation state, counted in clockwise quarter turns from spawn
///
/// The cycle is Spawn (0) → Right (R) → Reverse (2) → Left (L) → Spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    Spawn,
    Right,
    Reverse,
    Left,
}

impl Rotation {
    /// Build a rotation from any integer, normalized modulo 4 to a non-negative state.
    pub fn from_index(index: i8) -> Self {
        match index.rem_euclid(4) {
            0 => Rotation::Spawn,
            1 => Rotation::Right,
            2 => Rotation::Reverse,
            _ => Rotation::Left,
        }
    }

    /// Quarter turns from spawn (0-3)
    pub fn index(&self) -> u8 {
        match self {
            Rotation::Spawn => 0,
            Rotation::Right => 1,
            Rotation::Reverse => 2,
            Rotation::Left => 3,
        }
    }

    /// Apply a signed number of clockwise quarter turns
    pub fn rotate_by(&self, delta: i8) -> Self {
        Self::from_index((self.index() as i8).wrapping_add(delta.rem_euclid(4)))
    }

    pub fn rotate_cw(&self) -> Self {
        self.rotate_by(1)
    }

    pub fn rotate_ccw(&self) -> Self {
        self.rotate_by(-1)
    }

    /// Guideline notation: "0", "R", "2", "L"
    pub fn as_str(&self) -> &'static str {
        match self {
            Rotation::Spawn => "0",
            Rotation::Right => "R",
            Rotation::Reverse => "2",
            Rotation::Left => "L",
        }
    }
}

/// Discrete player input, at most one consumed per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    /// End the session
    Quit,
    /// Rotate 90° clockwise
    RotateCw,
    /// Rotate 90° counter-clockwise
    RotateCcw,
    /// Shift one column left
    MoveLeft,
    /// Shift one column right
    MoveRight,
    /// Move one row down without locking
    SoftDrop,
    /// Drop to the floor and lock in the same frame
    HardDrop,
    /// Bench the active piece (once per piece life)
    Hold,
}

impl InputEvent {
    pub const ALL: [InputEvent; 8] = [
        InputEvent::Quit,
        InputEvent::RotateCw,
        InputEvent::RotateCcw,
        InputEvent::MoveLeft,
        InputEvent::MoveRight,
        InputEvent::SoftDrop,
        InputEvent::HardDrop,
        InputEvent::Hold,
    ];

    /// Parse an event name (case-insensitive camelCase)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "quit" => Some(InputEvent::Quit),
            "rotatecw" => Some(InputEvent::RotateCw),
            "rotateccw" => Some(InputEvent::RotateCcw),
            "moveleft" => Some(InputEvent::MoveLeft),
            "moveright" => Some(InputEvent::MoveRight),
            "softdrop" => Some(InputEvent::SoftDrop),
            "harddrop" => Some(InputEvent::HardDrop),
            "hold" => Some(InputEvent::Hold),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InputEvent::Quit => "quit",
            InputEvent::RotateCw => "rotateCw",
            InputEvent::RotateCcw => "rotateCcw",
            InputEvent::MoveLeft => "moveLeft",
            InputEvent::MoveRight => "moveRight",
            InputEvent::SoftDrop => "softDrop",
            InputEvent::HardDrop => "hardDrop",
            InputEvent::Hold => "hold",
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Occupied, tagged with the kind that locked there
pub type Cell = Option<PieceKind>;

/// Absolute board coordinate `(row, col)`; row may be negative above the board.
pub type BlockPos = (i8, i8);
