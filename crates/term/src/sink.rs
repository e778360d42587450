//! Terminal frame sink: draws each snapshot and flushes only what changed.

use anyhow::Result;
use crossterm::terminal;

use crate::core::GameSnapshot;
use crate::engine::FrameSink;
use crate::fb::FrameBuffer;
use crate::game_view::{GameView, Viewport};
use crate::renderer::Screen;

/// Frame sink drawing each snapshot to the real terminal
pub struct TerminalSink {
    screen: Screen,
    view: GameView,
    fb: FrameBuffer,
}

impl TerminalSink {
    pub fn new() -> Self {
        Self {
            screen: Screen::stdout(),
            view: GameView::new(),
            fb: FrameBuffer::new(0, 0),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        self.screen.enter()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.screen.exit()
    }
}

impl Default for TerminalSink {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameSink for TerminalSink {
    fn present(&mut self, snapshot: &GameSnapshot) -> Result<()> {
        let (w, h) = terminal::size()?;
        self.view.render_into(snapshot, Viewport::new(w, h), &mut self.fb);
        self.screen.present(&mut self.fb)
    }
}
