//! Lock delay - three frame counters that decide when a grounded piece locks
//!
//! - `[0]` floor timer: locks a piece that was never shifted or rotated on ground
//! - `[1]` move-reset timer: takes over once the piece moved on ground; a
//!   successful rotation on ground refills it
//! - `[2]` hard cap: locks regardless of movement history

use crate::types::LOCK_DELAY_FRAMES;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockDelay {
    counters: [i32; 3],
    moved: bool,
}

impl LockDelay {
    pub fn new() -> Self {
        Self {
            counters: LOCK_DELAY_FRAMES,
            moved: false,
        }
    }

    /// Restore all counters and forget movement; called on every spawn
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Account one frame spent on the ground and report whether to lock now.
    ///
    /// `shifted` / `rotated` say whether this frame's input moved the piece.
    pub fn grounded_frame(&mut self, shifted: bool, rotated: bool) -> bool {
        if shifted {
            self.moved = true;
        }
        if rotated {
            self.moved = true;
            self.counters[1] = LOCK_DELAY_FRAMES[1];
        }

        for counter in &mut self.counters {
            *counter -= 1;
        }

        let [floor, move_reset, cap] = self.counters;
        (!self.moved && floor <= 0) || (self.moved && move_reset <= 0) || cap <= 0
    }

    /// Current counter values, for diagnostics
    pub fn counters(&self) -> [i32; 3] {
        self.counters
    }

    /// Whether a shift or rotation happened on ground since the last reset
    pub fn moved(&self) -> bool {
        self.moved
    }
}

impl Default for LockDelay {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frames_until_lock(delay: &mut LockDelay, mut input: impl FnMut(u32) -> (bool, bool)) -> u32 {
        for frame in 1..=10_000 {
            let (shifted, rotated) = input(frame);
            if delay.grounded_frame(shifted, rotated) {
                return frame;
            }
        }
        panic!("never locked");
    }

    #[test]
    fn idle_piece_locks_on_floor_timer() {
        let mut delay = LockDelay::new();
        assert_eq!(frames_until_lock(&mut delay, |_| (false, false)), 30);
    }

    #[test]
    fn shift_switches_to_move_reset_timer() {
        let mut delay = LockDelay::new();
        let frames = frames_until_lock(&mut delay, |f| (f == 1, false));
        assert_eq!(frames, 120);
        assert!(delay.moved());
    }

    #[test]
    fn rotation_refills_move_reset_timer() {
        let mut delay = LockDelay::new();
        // Shift on frame 1, rotate on frame 100: timer [1] is refilled to 120
        // and ticks to 119 on that same frame
        let frames = frames_until_lock(&mut delay, |f| (f == 1, f == 100));
        assert_eq!(frames, 219);
    }

    #[test]
    fn hard_cap_fires_despite_constant_rotation() {
        let mut delay = LockDelay::new();
        let frames = frames_until_lock(&mut delay, |_| (false, true));
        assert_eq!(frames, 1200);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut delay = LockDelay::new();
        delay.grounded_frame(true, false);
        delay.reset();
        assert_eq!(delay.counters(), LOCK_DELAY_FRAMES);
        assert!(!delay.moved());
    }
}
