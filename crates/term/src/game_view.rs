//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Outcome, Pos};

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

/// Side panel information that lives outside the session itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HudInfo {
    /// 1-based number of the session being shown.
    pub game: u64,
}

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const HEAD_FG: Rgb = Rgb::new(220, 80, 80);
const TAIL_FG: Rgb = Rgb::new(100, 220, 120);
const FOOD_FG: Rgb = Rgb::new(80, 120, 220);

/// A lightweight terminal renderer for the snake board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self { cell_w: 2, cell_h: 1 }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Derive the cell footprint from a pixel cell size.
    ///
    /// A terminal glyph is treated as 10 pixels wide and 20 pixels tall, so the
    /// default cell size of 20 maps to 2x1.
    pub fn for_cell_size(cell_size: u32) -> Self {
        let w = (cell_size / 10).clamp(1, u16::MAX as u32) as u16;
        let h = (cell_size / 20).clamp(1, u16::MAX as u32) as u16;
        Self::new(w, h)
    }

    pub fn cell_w(&self) -> u16 {
        self.cell_w
    }

    pub fn cell_h(&self) -> u16 {
        self.cell_h
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// The framebuffer is resized to the viewport and fully redrawn, so callers
    /// can reuse one buffer across frames.
    pub fn render_into(&self, snap: &GameSnapshot, hud: HudInfo, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let board_w = to_u16(snap.dims.width).saturating_mul(self.cell_w);
        let board_h = to_u16(snap.dims.height).saturating_mul(self.cell_h);
        let frame_w = board_w.saturating_add(2);
        let frame_h = board_h.saturating_add(2);

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        let empty = CellStyle::new(Rgb::new(90, 90, 100), BOARD_BG).dim();
        for row in 0..snap.dims.height {
            for col in 0..snap.dims.width {
                self.fill_cell(fb, start_x, start_y, Pos::new(row, col), '·', empty);
            }
        }

        let tail = CellStyle::new(TAIL_FG, BOARD_BG);
        for &seg in &snap.tail {
            self.fill_cell(fb, start_x, start_y, seg, '█', tail);
        }

        if let Some(food) = snap.food {
            self.fill_cell(fb, start_x, start_y, food, '█', CellStyle::new(FOOD_FG, BOARD_BG));
        }

        // Head last so it stays visible on top of anything else.
        let head = CellStyle::new(HEAD_FG, BOARD_BG).bold();
        self.fill_cell(fb, start_x, start_y, snap.head, '█', head);

        self.draw_side_panel(fb, snap, hud, viewport, start_x, start_y, frame_w);

        if let Some(outcome) = snap.outcome {
            let text = match outcome {
                Outcome::Crashed => " GAME OVER ",
                Outcome::Won => " BOARD FULL ",
            };
            let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(120, 30, 30)).bold();
            let x = start_x.saturating_add(frame_w.saturating_sub(text.len() as u16) / 2);
            let y = start_y.saturating_add(frame_h / 2);
            fb.put_str(x, y, text, style);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, hud: HudInfo, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, hud, viewport, &mut fb);
        fb
    }

    /// Top-left terminal coordinate of a board cell for a board drawn at
    /// `(start_x, start_y)`.
    pub fn cell_origin(&self, start_x: u16, start_y: u16, pos: Pos) -> (u16, u16) {
        let px = start_x
            .saturating_add(1)
            .saturating_add(to_u16(pos.col).saturating_mul(self.cell_w));
        let py = start_y
            .saturating_add(1)
            .saturating_add(to_u16(pos.row).saturating_mul(self.cell_h));
        (px, py)
    }

    fn fill_cell(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, pos: Pos, ch: char, style: CellStyle) {
        let (px, py) = self.cell_origin(start_x, start_y, pos);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        hud: HudInfo,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 10 {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let hint = value.dim();

        let mut y = start_y;
        fb.put_str(panel_x, y, "GAME", label);
        y = y.saturating_add(1);
        fb.put_u64(panel_x, y, hud.game, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "LENGTH", label);
        y = y.saturating_add(1);
        fb.put_u64(panel_x, y, snap.length() as u64, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "STEPS", label);
        y = y.saturating_add(1);
        fb.put_u64(panel_x, y, snap.steps, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "BOARD", label);
        y = y.saturating_add(1);
        fb.put_u64(panel_x, y, snap.dims.width as u64, value);
        let x_at = panel_x.saturating_add(digits(snap.dims.width as u64));
        fb.put_char(x_at, y, 'x', value);
        fb.put_u64(x_at.saturating_add(1), y, snap.dims.height as u64, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "arrows steer", hint);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, "q quits", hint);
    }
}

fn to_u16(v: u32) -> u16 {
    v.min(u16::MAX as u32) as u16
}

fn digits(mut v: u64) -> u16 {
    let mut n = 1;
    while v >= 10 {
        v /= 10;
        n += 1;
    }
    n
}
