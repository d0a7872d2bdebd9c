//! TerminalRenderer: flushes a framebuffer to a terminal.
//!
//! The renderer remembers the last frame it presented and writes only the runs
//! of cells that changed since. The first present, a size change, or
//! [`TerminalRenderer::invalidate`] triggers a full repaint. Styles are emitted
//! as deltas: colors only when they change, attributes reset only when bold or
//! dim flip.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};
use log::debug;

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
    full_repaints: u64,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl<W: Write> TerminalRenderer<W> {
    /// Renderer writing to an arbitrary sink instead of stdout.
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            last: None,
            buf: Vec::with_capacity(64 * 1024),
            full_repaints: 0,
        }
    }

    /// Switch to raw mode on the alternate screen.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next present to repaint everything (after a resize, say).
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    pub fn full_repaints(&self) -> u64 {
        self.full_repaints
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    pub fn present(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.buf.clear();
        match self.last.as_mut() {
            Some(prev) if same_size(prev, fb) => {
                encode_diff_into(prev, fb, &mut self.buf)?;
                prev.clone_from(fb);
            }
            _ => {
                self.full_repaints += 1;
                debug!(
                    target: "term",
                    "full repaint {} at {}x{}",
                    self.full_repaints,
                    fb.width(),
                    fb.height()
                );
                encode_full_into(fb, &mut self.buf)?;
                self.last = Some(fb.clone());
            }
        }
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

fn same_size(a: &FrameBuffer, b: &FrameBuffer) -> bool {
    a.width() == b.width() && a.height() == b.height()
}

/// Queues cells into a byte buffer, tracking the active style.
struct Encoder<'a> {
    out: &'a mut Vec<u8>,
    style: Option<CellStyle>,
}

impl<'a> Encoder<'a> {
    fn new(out: &'a mut Vec<u8>) -> Self {
        Self { out, style: None }
    }

    fn move_to(&mut self, x: u16, y: u16) -> Result<()> {
        self.out.queue(cursor::MoveTo(x, y))?;
        Ok(())
    }

    fn cells(&mut self, cells: &[Cell]) -> Result<()> {
        for cell in cells {
            self.restyle(cell.style)?;
            self.out.queue(Print(cell.ch))?;
        }
        Ok(())
    }

    fn restyle(&mut self, next: CellStyle) -> Result<()> {
        let attrs_changed = match self.style {
            Some(cur) if cur == next => return Ok(()),
            Some(cur) => cur.bold != next.bold || cur.dim != next.dim,
            None => true,
        };

        if attrs_changed {
            // Attribute::Reset also drops colors, so both are re-sent below.
            self.out.queue(SetAttribute(Attribute::Reset))?;
            if next.bold {
                self.out.queue(SetAttribute(Attribute::Bold))?;
            }
            if next.dim {
                self.out.queue(SetAttribute(Attribute::Dim))?;
            }
        }
        if attrs_changed || self.style.map(|s| s.fg) != Some(next.fg) {
            self.out.queue(SetForegroundColor(color(next.fg)))?;
        }
        if attrs_changed || self.style.map(|s| s.bg) != Some(next.bg) {
            self.out.queue(SetBackgroundColor(color(next.bg)))?;
        }
        self.style = Some(next);
        Ok(())
    }

    fn finish(self) -> Result<()> {
        self.out.queue(ResetColor)?;
        self.out.queue(SetAttribute(Attribute::Reset))?;
        Ok(())
    }
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Encode a full repaint of `fb` into `out` without touching the terminal.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut enc = Encoder::new(out);
    for y in 0..fb.height() {
        enc.move_to(0, y)?;
        enc.cells(fb.row(y))?;
    }
    enc.finish()
}

/// Encode only the cells of `next` that differ from `prev`.
///
/// Frames of different sizes are treated as entirely changed.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut enc = Encoder::new(out);
    for run in changed_runs(prev, next) {
        enc.move_to(run.x, run.y)?;
        let start = run.x as usize;
        enc.cells(&next.row(run.y)[start..start + run.len as usize])?;
    }
    enc.finish()
}

/// A horizontal stretch of changed cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Run {
    x: u16,
    y: u16,
    len: u16,
}

fn changed_runs<'a>(prev: &'a FrameBuffer, next: &'a FrameBuffer) -> impl Iterator<Item = Run> + 'a {
    let resized = !same_size(prev, next);
    (0..next.height()).flat_map(move |y| {
        let after = next.row(y);
        let before = if resized { &[][..] } else { prev.row(y) };
        row_runs(before, after).map(move |(x, len)| Run { x, y, len })
    })
}

/// Runs of `after` that differ from `before`; a missing `before` cell counts as
/// changed.
fn row_runs<'a>(before: &'a [Cell], after: &'a [Cell]) -> impl Iterator<Item = (u16, u16)> + 'a {
    let differs = move |i: usize| before.get(i) != Some(&after[i]);
    let mut i = 0usize;
    std::iter::from_fn(move || {
        while i < after.len() && !differs(i) {
            i += 1;
        }
        if i >= after.len() {
            return None;
        }
        let start = i;
        while i < after.len() && differs(i) {
            i += 1;
        }
        Some((start as u16, (i - start) as u16))
    })
}
