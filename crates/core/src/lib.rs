//! Core game logic - pure, deterministic, and testable
//!
//! All rules of the falling-block game live here, with no terminal or clock
//! dependency. A game advances only through [`GameState::step`], one frame per
//! call, so the same seed and the same input script always produce the same game.
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 well with collision queries and line clearing
//! - [`shape`]: square occupancy grids and clockwise rotation
//! - [`pieces`]: the seven base shapes and their wall kick tables
//! - [`piece`]: the active piece with shift, drop and kicked rotation
//! - [`rng`]: 7-bag randomizer and the preview queue
//! - [`lock_delay`]: the three lock counters
//! - [`scoring`]: line clear points, levels and gravity intervals
//! - [`game_state`]: the per-frame state machine
//! - [`snapshot`]: read-only view for renderers
//!
//! # Example
//!
//! ```
//! use falltris_core::GameState;
//! use falltris_core::types::InputEvent;
//!
//! let mut game = GameState::new(12345);
//! game.step(Some(InputEvent::MoveRight));
//! let event = game.step(Some(InputEvent::HardDrop)).expect("hard drop locks");
//! assert_eq!(event.rows_cleared, 0);
//! assert_eq!(game.board().filled_count(), 4);
//! ```

pub use falltris_types as types;

pub mod board;
pub mod game_state;
pub mod lock_delay;
pub mod piece;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod shape;
pub mod snapshot;

pub use board::{Board, Grid};
pub use game_state::{GameState, LockEvent, Phase};
pub use lock_delay::LockDelay;
pub use piece::{ActivePiece, PieceBlocks};
pub use pieces::{base_shape, kick_tests, rotated_shape};
pub use rng::{Bag, PieceQueue};
pub use shape::{rotate, Shape};
pub use snapshot::{ActiveSnapshot, GameSnapshot, PieceView};
