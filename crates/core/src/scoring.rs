//! Scoring module - line clear points, leveling and gravity speed
//!
//! Points for a lock are `level * LINE_SCORES[rows]` using the level in effect
//! before the clear is counted. Level is derived from cumulative lines only.

use crate::types::{
    GRAVITY_FRAMES, LINES_PER_LEVEL, LINE_SCORES, MIN_GRAVITY_FRAMES, START_LEVEL,
};

/// Points awarded for clearing `lines` rows in one lock at `level`.
/// 0 or more than 4 rows award nothing.
pub fn line_clear_score(lines: usize, level: u32) -> u32 {
    match LINE_SCORES.get(lines) {
        Some(&base) => base.saturating_mul(level),
        None => 0,
    }
}

/// Level for a cumulative cleared-line count
pub fn level_for_lines(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + START_LEVEL
}

/// Frames between gravity steps at `level`
pub fn gravity_interval(level: u32) -> u32 {
    GRAVITY_FRAMES
        .get(level as usize)
        .copied()
        .unwrap_or(MIN_GRAVITY_FRAMES)
}
