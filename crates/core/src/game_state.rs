//! Game state module - the per-frame state machine
//!
//! Ties together the board, the active piece, the piece queue, lock delay and
//! scoring. One call to [`GameState::step`] is one frame: apply at most one
//! input, run gravity, account lock delay, and on lock place the piece, clear
//! lines, score, and spawn the next piece.

use tracing::{debug, info};

use crate::board::Board;
use crate::lock_delay::LockDelay;
use crate::piece::ActivePiece;
use crate::rng::PieceQueue;
use crate::scoring::{gravity_interval, level_for_lines, line_clear_score};
use crate::snapshot::{ActiveSnapshot, GameSnapshot, PieceView};
use crate::types::*;

/// Observable phase between frames.
///
/// Spawning and locking happen inside a single `step` and are never observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// The active piece can still fall
    Falling,
    /// The active piece is grounded and lock delay is counting down
    Locking,
    /// A spawn overlapped the stack; the game no longer changes
    Lost,
}

/// What happened when a piece locked during a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub kind: PieceKind,
    pub rows_cleared: usize,
    pub points: u32,
    /// Level after the clear was counted
    pub level: u32,
    /// The piece spawned after this lock overlapped the stack
    pub lost: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: ActivePiece,
    hold: Option<PieceKind>,
    /// Hold already used during the current piece life
    has_held: bool,
    queue: PieceQueue,
    lock_delay: LockDelay,
    phase: Phase,
    frame: u64,
    score: u32,
    level: u32,
    lines: u32,
}

impl GameState {
    /// New game on an empty board
    pub fn new(seed: u64) -> Self {
        Self::with_board(seed, Board::new())
    }

    /// New game on a pre-filled board. The first spawn may already be lost.
    pub fn with_board(seed: u64, board: Board) -> Self {
        let mut queue = PieceQueue::new(seed);
        let first = queue.peek();
        let mut state = Self {
            board,
            active: ActivePiece::spawn(first),
            hold: None,
            has_held: false,
            queue,
            lock_delay: LockDelay::new(),
            phase: Phase::Falling,
            frame: 0,
            score: 0,
            level: START_LEVEL,
            lines: 0,
        };
        state.spawn_next();
        state
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> ActivePiece {
        self.active
    }

    pub fn hold_piece(&self) -> Option<PieceKind> {
        self.hold
    }

    pub fn can_hold(&self) -> bool {
        !self.has_held && self.phase != Phase::Lost
    }

    pub fn preview(&self) -> &[PieceKind; PREVIEW_LEN] {
        self.queue.preview()
    }

    pub fn lock_delay(&self) -> &LockDelay {
        &self.lock_delay
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_lost(&self) -> bool {
        self.phase == Phase::Lost
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn seed(&self) -> u64 {
        self.queue.seed()
    }

    /// Where the active piece would land on an immediate hard drop
    pub fn ghost(&self) -> ActivePiece {
        self.active.ghost(&self.board)
    }

    /// Advance one frame with at most one input event.
    ///
    /// `Quit` is not a rule input and is ignored here; the frame loop handles it.
    /// Returns the lock that happened this frame, if any. Once lost, nothing changes.
    pub fn step(&mut self, input: Option<InputEvent>) -> Option<LockEvent> {
        if self.phase == Phase::Lost {
            return None;
        }
        self.frame += 1;

        let mut shifted = false;
        let mut rotated = false;
        let mut instant_lock = false;

        match input {
            Some(InputEvent::MoveLeft) => shifted = self.active.move_horizontal(&self.board, -1),
            Some(InputEvent::MoveRight) => shifted = self.active.move_horizontal(&self.board, 1),
            Some(InputEvent::RotateCw) => rotated = self.active.rotate(&self.board, 1),
            Some(InputEvent::RotateCcw) => rotated = self.active.rotate(&self.board, -1),
            Some(InputEvent::SoftDrop) => {
                self.active.move_vertical(&self.board, 1);
            }
            Some(InputEvent::HardDrop) => {
                self.active.drop_to_floor(&self.board);
                instant_lock = true;
            }
            Some(InputEvent::Hold) => {
                self.hold();
                if self.phase == Phase::Lost {
                    return None;
                }
            }
            Some(InputEvent::Quit) | None => {}
        }

        if !instant_lock {
            if self.frame % u64::from(gravity_interval(self.level)) == 0 {
                self.active.move_vertical(&self.board, 1);
            }

            if self.active.is_grounded(&self.board) {
                instant_lock = self.lock_delay.grounded_frame(shifted, rotated);
                self.phase = Phase::Locking;
            } else {
                self.phase = Phase::Falling;
            }
        }

        if instant_lock {
            Some(self.lock_active())
        } else {
            None
        }
    }

    /// Bench the active piece. Returns false when hold was already used this piece life.
    ///
    /// An empty slot takes the active piece and a new piece comes from the queue;
    /// otherwise the held piece swaps in at the spawn position without touching the queue.
    pub fn hold(&mut self) -> bool {
        if !self.can_hold() {
            return false;
        }

        let current = self.active.kind;
        match self.hold.replace(current) {
            Some(held) => {
                debug!(held = held.as_str(), benched = current.as_str(), "hold swap");
                self.active = ActivePiece::spawn(held);
                self.lock_delay.reset();
                self.phase = Phase::Falling;
                if self.active.overlaps(&self.board) {
                    info!(kind = held.as_str(), "held piece blocked at spawn, game lost");
                    self.phase = Phase::Lost;
                }
            }
            None => {
                debug!(benched = current.as_str(), "hold into empty slot");
                self.spawn_next();
            }
        }

        self.has_held = true;
        true
    }

    /// Fix the active piece to the board, clear lines, score and spawn the next piece
    fn lock_active(&mut self) -> LockEvent {
        let piece = self.active;
        self.board.place(&piece.blocks(), piece.kind);

        let rows_cleared = self.board.clear_filled_lines();
        let points = line_clear_score(rows_cleared, self.level);
        self.score = self.score.saturating_add(points);
        self.lines += rows_cleared as u32;

        let previous_level = self.level;
        self.level = level_for_lines(self.lines);

        debug!(
            kind = piece.kind.as_str(),
            row = piece.row,
            col = piece.col,
            rotation = piece.rotation.as_str(),
            rows_cleared,
            points,
            "piece locked"
        );
        if self.level != previous_level {
            info!(level = self.level, lines = self.lines, "level up");
        }

        self.spawn_next();

        LockEvent {
            kind: piece.kind,
            rows_cleared,
            points,
            level: self.level,
            lost: self.phase == Phase::Lost,
        }
    }

    /// Draw the next piece from the queue and start a new piece life
    fn spawn_next(&mut self) {
        self.lock_delay.reset();
        self.has_held = false;
        self.active = ActivePiece::spawn(self.queue.next());

        if self.active.overlaps(&self.board) {
            info!(
                kind = self.active.kind.as_str(),
                score = self.score,
                lines = self.lines,
                "spawn blocked, game lost"
            );
            self.phase = Phase::Lost;
        } else {
            self.phase = Phase::Falling;
        }
    }

    /// Fill `out` without allocating
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.board);

        out.active = Some(ActiveSnapshot {
            kind: self.active.kind,
            rotation: self.active.rotation,
            blocks: self.active.blocks(),
        });
        out.ghost = self.ghost().blocks();
        for (dst, &kind) in out.preview.iter_mut().zip(self.queue.preview()) {
            *dst = PieceView::from(kind);
        }
        out.hold = self.hold.map(PieceView::from);
        out.can_hold = self.can_hold();
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.lock_delay = self.lock_delay.counters();
        out.phase = self.phase;
        out.frame = self.frame;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
