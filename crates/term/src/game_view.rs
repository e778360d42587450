//! GameView: draws a `GameSnapshot` into a framebuffer.
//!
//! Pure, no I/O. Layout, left to right: HOLD pane with the stats under it, the
//! framed board, then the PREVIEW pane with the lock counters under it.

use crate::core::{GameSnapshot, PieceView};
use crate::fb::{FrameBuffer, Rgb, Style};
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Terminal columns per board cell
pub const CELL_W: u16 = 2;
/// Preview entries drawn
pub const PREVIEW_SHOWN: usize = 5;
/// Rows between two preview entries
const PREVIEW_STRIDE: u16 = 3;

const PANE_W: u16 = 12;
const HOLD_H: u16 = 6;
const PREVIEW_H: u16 = PREVIEW_SHOWN as u16 * PREVIEW_STRIDE + 2;
const GAP: u16 = 1;

const BOARD_FRAME_W: u16 = BOARD_WIDTH as u16 * CELL_W + 2;
const BOARD_FRAME_H: u16 = BOARD_HEIGHT as u16 + 2;

/// Total size of the drawn layout
pub const LAYOUT_W: u16 = PANE_W + GAP + BOARD_FRAME_W + GAP + PANE_W;
pub const LAYOUT_H: u16 = BOARD_FRAME_H;

pub const BLOCK_GLYPHS: [char; 2] = ['█', '█'];
pub const EMPTY_GLYPHS: [char; 2] = [' ', '.'];
pub const GHOST_GLYPHS: [char; 2] = ['[', ']'];

const FRAME: Style = Style::fg(Rgb::new(200, 200, 200));
const LABEL: Style = Style::fg(Rgb::new(220, 220, 220)).bold();
const VALUE: Style = Style::fg(Rgb::new(200, 200, 200));
const EMPTY: Style = Style::fg(Rgb::new(90, 90, 100)).dim();

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Display color of a piece kind
pub fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(129, 200, 190),
        PieceKind::O => Rgb::new(229, 200, 144),
        PieceKind::T => Rgb::new(202, 158, 230),
        PieceKind::S => Rgb::new(166, 209, 137),
        PieceKind::Z => Rgb::new(231, 130, 132),
        PieceKind::J => Rgb::new(140, 170, 238),
        PieceKind::L => Rgb::new(239, 159, 118),
    }
}

/// Screen positions of the layout parts for one viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub hold: (u16, u16),
    pub stats: (u16, u16),
    pub board: (u16, u16),
    pub preview: (u16, u16),
    pub lock: (u16, u16),
}

impl Layout {
    /// Center the layout; a too small viewport clips on the right and bottom
    pub fn for_viewport(viewport: Viewport) -> Self {
        let x = viewport.width.saturating_sub(LAYOUT_W) / 2;
        let y = viewport.height.saturating_sub(LAYOUT_H) / 2;
        let board_x = x + PANE_W + GAP;
        let preview_x = board_x + BOARD_FRAME_W + GAP;
        Self {
            hold: (x, y),
            stats: (x + 1, y + HOLD_H + 1),
            board: (board_x, y),
            preview: (preview_x, y),
            lock: (preview_x + 1, y + PREVIEW_H + 1),
        }
    }

    /// Top-left terminal position of board cell `(row, col)`
    pub fn cell_origin(&self, row: u16, col: u16) -> (u16, u16) {
        (self.board.0 + 1 + col * CELL_W, self.board.1 + 1 + row)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GameView;

impl GameView {
    pub fn new() -> Self {
        Self
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();

        let layout = Layout::for_viewport(viewport);
        self.draw_board(fb, &layout, snap);
        self.draw_hold(fb, &layout, snap);
        self.draw_stats(fb, &layout, snap);
        self.draw_preview(fb, &layout, snap);
        self.draw_lock_line(fb, &layout, snap);

        if snap.is_lost() {
            self.draw_overlay(fb, &layout, "GAME OVER");
        }
    }

    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_board(&self, fb: &mut FrameBuffer, layout: &Layout, snap: &GameSnapshot) {
        let (bx, by) = layout.board;
        fb.draw_box(bx, by, BOARD_FRAME_W, BOARD_FRAME_H, FRAME);

        for (row, cells) in snap.board.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                let (glyphs, style) = match cell {
                    Some(kind) => (BLOCK_GLYPHS, Style::fg(piece_color(*kind))),
                    None => (EMPTY_GLYPHS, EMPTY),
                };
                self.paint_cell(fb, layout, row as i8, col as i8, glyphs, style);
            }
        }

        if let Some(active) = &snap.active {
            let style = Style::fg(piece_color(active.kind));
            for &(row, col) in &snap.ghost {
                self.paint_cell(fb, layout, row, col, GHOST_GLYPHS, style);
            }
            for &(row, col) in &active.blocks {
                self.paint_cell(fb, layout, row, col, BLOCK_GLYPHS, style);
            }
        }
    }

    /// Paint one board cell; rows above the board and columns outside it are skipped
    fn paint_cell(
        &self,
        fb: &mut FrameBuffer,
        layout: &Layout,
        row: i8,
        col: i8,
        glyphs: [char; 2],
        style: Style,
    ) {
        if !(0..BOARD_HEIGHT as i8).contains(&row) || !(0..BOARD_WIDTH as i8).contains(&col) {
            return;
        }
        let (x, y) = layout.cell_origin(row as u16, col as u16);
        fb.put_char(x, y, glyphs[0], style);
        fb.put_char(x + 1, y, glyphs[1], style);
    }

    fn draw_piece_view(&self, fb: &mut FrameBuffer, x: u16, y: u16, view: &PieceView) {
        let style = Style::fg(piece_color(view.kind));
        for (row, col) in view.shape.blocks() {
            let px = x + col as u16 * CELL_W;
            let py = y + row as u16;
            fb.put_char(px, py, BLOCK_GLYPHS[0], style);
            fb.put_char(px + 1, py, BLOCK_GLYPHS[1], style);
        }
    }

    fn draw_hold(&self, fb: &mut FrameBuffer, layout: &Layout, snap: &GameSnapshot) {
        let (x, y) = layout.hold;
        fb.draw_box(x, y, PANE_W, HOLD_H, FRAME);
        let title = if snap.can_hold { LABEL } else { VALUE.dim() };
        fb.put_str(x + 1, y, "HOLD", title);

        if let Some(held) = &snap.hold {
            self.draw_piece_view(fb, x + 2, y + 1, held);
        }
    }

    fn draw_stats(&self, fb: &mut FrameBuffer, layout: &Layout, snap: &GameSnapshot) {
        let (x, mut y) = layout.stats;
        for (label, value) in [
            ("LEVEL", snap.level),
            ("SCORE", snap.score),
            ("LINES", snap.lines),
        ] {
            fb.put_str(x, y, label, LABEL);
            fb.put_u32(x, y + 1, value, VALUE);
            y += 3;
        }
    }

    fn draw_preview(&self, fb: &mut FrameBuffer, layout: &Layout, snap: &GameSnapshot) {
        let (x, y) = layout.preview;
        fb.draw_box(x, y, PANE_W, PREVIEW_H, FRAME);
        fb.put_str(x + 1, y, "PREVIEW", LABEL);

        for (i, view) in snap.preview.iter().take(PREVIEW_SHOWN).enumerate() {
            self.draw_piece_view(fb, x + 2, y + 1 + i as u16 * PREVIEW_STRIDE, view);
        }
    }

    fn draw_lock_line(&self, fb: &mut FrameBuffer, layout: &Layout, snap: &GameSnapshot) {
        let (x, y) = layout.lock;
        let dim = VALUE.dim();
        let mut cx = fb.put_str(x, y, "LOCK", LABEL);
        for counter in snap.lock_delay {
            cx = fb.put_i64(cx + 1, y, i64::from(counter), dim);
        }
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, layout: &Layout, text: &str) {
        let (bx, by) = layout.board;
        let text_w = text.chars().count() as u16;
        let x = bx + BOARD_FRAME_W.saturating_sub(text_w) / 2;
        let y = by + BOARD_FRAME_H / 2;
        let style = Style {
            bg: Some(Rgb::new(0, 0, 0)),
            ..Style::fg(Rgb::new(255, 255, 255)).bold()
        };
        fb.put_str(x, y, text, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameState;

    #[test]
    fn test_layout_fits_eighty_by_twenty_four() {
        assert!(LAYOUT_W <= 80);
        assert!(LAYOUT_H <= 24);
        let layout = Layout::for_viewport(Viewport::new(80, 24));
        assert!(layout.preview.0 + PANE_W <= 80);
    }

    #[test]
    fn test_tiny_viewport_does_not_panic() {
        let snap = GameState::new(1).snapshot();
        let fb = GameView::new().render(&snap, Viewport::new(5, 3));
        assert_eq!(fb.width(), 5);
    }

    #[test]
    fn test_piece_colors_are_distinct() {
        for (i, a) in PieceKind::ALL.iter().enumerate() {
            for b in &PieceKind::ALL[i + 1..] {
                assert_ne!(piece_color(*a), piece_color(*b));
            }
        }
    }
}
