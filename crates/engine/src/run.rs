//! The frame loop: poll one input, step once, present one snapshot, pad the frame.

use std::collections::VecDeque;

use anyhow::Result;
use tracing::{debug, info};

use crate::clock::FrameClock;
use crate::config::Config;
use crate::core::{GameSnapshot, GameState};
use crate::types::{InputEvent, FRAMES_PER_SECOND};

/// Where per-frame input comes from. Must not block.
pub trait InputSource {
    fn poll(&mut self) -> Result<Option<InputEvent>>;
}

/// Where per-frame snapshots go
pub trait FrameSink {
    fn present(&mut self, snapshot: &GameSnapshot) -> Result<()>;
}

/// Input replayed from a fixed script, one entry per frame, then nothing
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: VecDeque<Option<InputEvent>>,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = Option<InputEvent>>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> Result<Option<InputEvent>> {
        Ok(self.frames.pop_front().flatten())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    pub fps: u32,
    /// Sleep out the rest of each frame; off for headless runs
    pub paced: bool,
    pub max_frames: Option<u64>,
    /// End the loop on loss instead of showing the final state until quit
    pub exit_on_loss: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            fps: FRAMES_PER_SECOND,
            paced: true,
            max_frames: None,
            exit_on_loss: false,
        }
    }
}

impl RunOptions {
    /// Unpaced run for replays and tests
    pub fn headless(max_frames: u64) -> Self {
        Self {
            paced: false,
            max_frames: Some(max_frames),
            ..Self::default()
        }
    }
}

impl From<&Config> for RunOptions {
    fn from(config: &Config) -> Self {
        Self {
            fps: config.fps,
            exit_on_loss: config.exit_on_loss,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    Quit,
    Lost,
    FrameLimit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Frames presented
    pub frames: u64,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub pieces_locked: u64,
    pub reason: ExitReason,
}

/// Drive `game` until quit, loss (when configured) or the frame limit.
///
/// Quit is handled before the step, so the frame that reads it neither steps nor presents.
/// Input and sink errors end the loop and are returned.
pub fn run<I, S>(
    game: &mut GameState,
    input: &mut I,
    sink: &mut S,
    options: &RunOptions,
) -> Result<RunSummary>
where
    I: InputSource + ?Sized,
    S: FrameSink + ?Sized,
{
    info!(
        seed = game.seed(),
        fps = options.fps,
        paced = options.paced,
        max_frames = ?options.max_frames,
        "run started"
    );

    let mut clock = FrameClock::new(options.fps);
    let mut snapshot = GameSnapshot::default();
    let mut frames: u64 = 0;
    let mut pieces_locked: u64 = 0;

    let reason = loop {
        if options.max_frames.is_some_and(|max| frames >= max) {
            break ExitReason::FrameLimit;
        }
        clock.start_frame();

        let event = input.poll()?;
        if event == Some(InputEvent::Quit) {
            break ExitReason::Quit;
        }

        let was_lost = game.is_lost();
        if let Some(lock) = game.step(event) {
            pieces_locked += 1;
            if lock.rows_cleared > 0 {
                debug!(
                    rows = lock.rows_cleared,
                    points = lock.points,
                    score = game.score(),
                    "lines cleared"
                );
            }
        }

        game.snapshot_into(&mut snapshot);
        sink.present(&snapshot)?;
        frames += 1;

        if game.is_lost() {
            if !was_lost {
                info!(
                    frame = game.frame(),
                    score = game.score(),
                    lines = game.lines(),
                    "game over"
                );
            }
            if options.exit_on_loss {
                break ExitReason::Lost;
            }
        }

        if options.paced {
            clock.sleep_remaining();
        }
    };

    let summary = RunSummary {
        frames,
        score: game.score(),
        level: game.level(),
        lines: game.lines(),
        pieces_locked,
        reason,
    };
    info!(
        frames = summary.frames,
        score = summary.score,
        level = summary.level,
        lines = summary.lines,
        reason = ?summary.reason,
        "run finished"
    );
    Ok(summary)
}
