//! TerminalRenderer: draws the grid to a real terminal through crossterm.
//!
//! Frames are laid out by [`GridView`] into a [`FrameBuffer`], then diffed
//! against the previous frame so only changed runs are written.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor,
        SetForegroundColor,
    },
    terminal, QueueableCommand,
};
use tracing::debug;

use crate::core::Grid;
use crate::engine::Renderer;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::grid_view::{GridView, Viewport};

/// Fallback size when the terminal cannot report one
const FALLBACK_SIZE: (u16, u16) = (80, 24);

pub struct TerminalRenderer {
    stdout: io::Stdout,
    view: GridView,
    frame: FrameBuffer,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self::with_view(GridView::default())
    }

    pub fn with_view(view: GridView) -> Self {
        Self {
            stdout: io::stdout(),
            view,
            frame: FrameBuffer::new(0, 0),
            last: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    /// Enter raw mode and the alternate screen.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        self.last = None;
        debug!("terminal entered");
        Ok(())
    }

    /// Restore the terminal to its state before [`enter`](Self::enter).
    ///
    /// Raw mode is disabled even when writing the restore sequence fails.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        let flushed = self.flush_buf();
        terminal::disable_raw_mode()?;
        debug!("terminal restored");
        flushed
    }

    /// Flush `self.frame`, diffing against the previous frame, then swap the
    /// two buffers so the next frame reuses the old allocation.
    fn present(&mut self) -> Result<()> {
        self.buf.clear();
        match self.last.take() {
            Some(prev)
                if prev.width() == self.frame.width() && prev.height() == self.frame.height() =>
            {
                encode_diff_into(&prev, &self.frame, &mut self.buf)?;
                self.last = Some(prev);
            }
            _ => {
                encode_full_into(&self.frame, &mut self.buf)?;
                self.last = Some(FrameBuffer::new(self.frame.width(), self.frame.height()));
            }
        }
        self.flush_buf()?;

        if let Some(prev) = self.last.as_mut() {
            std::mem::swap(prev, &mut self.frame);
        }
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for TerminalRenderer {
    fn start(&mut self) -> Result<()> {
        self.enter()
    }

    fn stop(&mut self) -> Result<()> {
        self.exit()
    }

    fn draw(&mut self, grid: &Grid) -> Result<()> {
        let (w, h) = terminal::size().unwrap_or(FALLBACK_SIZE);
        self.view.render_into(grid, Viewport::new(w, h), &mut self.frame);
        self.present()
    }
}

/// Encode a full-frame redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut enc = Encoder::new(out);
    for y in 0..fb.height() {
        enc.run(fb, 0, y, fb.width())?;
    }
    enc.finish()
}

/// Encode only the cells of `next` that differ from `prev` into `out`.
pub fn encode_diff_into(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    out: &mut Vec<u8>,
) -> Result<()> {
    let mut enc = Encoder::new(out);
    for (x, y, len) in ChangedRuns::new(prev, next) {
        enc.run(next, x, y, len)?;
    }
    enc.finish()
}

/// Queues cursor moves and glyphs, emitting style changes only when the
/// style differs from the last cell written.
struct Encoder<'a> {
    out: &'a mut Vec<u8>,
    style: Option<CellStyle>,
}

impl<'a> Encoder<'a> {
    fn new(out: &'a mut Vec<u8>) -> Self {
        Self { out, style: None }
    }

    fn run(&mut self, fb: &FrameBuffer, x: u16, y: u16, len: u16) -> Result<()> {
        self.out.queue(cursor::MoveTo(x, y))?;
        for cx in x..x.saturating_add(len) {
            let cell = fb.get(cx, y).unwrap_or_default();
            if self.style != Some(cell.style) {
                self.set_style(cell.style)?;
            }
            self.out.queue(Print(cell.ch))?;
        }
        Ok(())
    }

    fn set_style(&mut self, style: CellStyle) -> Result<()> {
        self.out.queue(SetAttribute(Attribute::Reset))?;
        self.out.queue(SetForegroundColor(to_color(style.fg)))?;
        self.out.queue(SetBackgroundColor(to_color(style.bg)))?;
        if style.bold {
            self.out.queue(SetAttribute(Attribute::Bold))?;
        }
        self.style = Some(style);
        Ok(())
    }

    fn finish(self) -> Result<()> {
        self.out.queue(ResetColor)?;
        self.out.queue(SetAttribute(Attribute::Reset))?;
        Ok(())
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Horizontal runs `(x, y, len)` of cells that differ between two frames.
///
/// Frames of different sizes yield every row of `next` as one run.
struct ChangedRuns<'a> {
    prev: &'a FrameBuffer,
    next: &'a FrameBuffer,
    resized: bool,
    x: u16,
    y: u16,
}

impl<'a> ChangedRuns<'a> {
    fn new(prev: &'a FrameBuffer, next: &'a FrameBuffer) -> Self {
        let resized = prev.width() != next.width() || prev.height() != next.height();
        Self {
            prev,
            next,
            resized,
            x: 0,
            y: 0,
        }
    }

    fn differs(&self, x: u16) -> bool {
        self.prev.get(x, self.y) != self.next.get(x, self.y)
    }
}

impl Iterator for ChangedRuns<'_> {
    type Item = (u16, u16, u16);

    fn next(&mut self) -> Option<Self::Item> {
        let width = self.next.width();
        while self.y < self.next.height() {
            if self.resized {
                let y = self.y;
                self.y += 1;
                return Some((0, y, width));
            }

            while self.x < width && !self.differs(self.x) {
                self.x += 1;
            }
            if self.x < width {
                let start = self.x;
                while self.x < width && self.differs(self.x) {
                    self.x += 1;
                }
                return Some((start, self.y, self.x - start));
            }

            self.x = 0;
            self.y += 1;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fb::TermCell;

    #[test]
    fn adjacent_changes_form_one_run() {
        let style = CellStyle::default();
        let a = FrameBuffer::new(5, 1);
        let mut b = FrameBuffer::new(5, 1);

        for x in 1..=3 {
            b.set(x, 0, TermCell { ch: 'X', style });
        }

        let runs: Vec<_> = ChangedRuns::new(&a, &b).collect();
        assert_eq!(runs, vec![(1, 0, 3)]);
    }

    #[test]
    fn identical_frames_produce_no_runs() {
        let a = FrameBuffer::new(4, 3);
        let b = a.clone();
        assert_eq!(ChangedRuns::new(&a, &b).count(), 0);
    }

    #[test]
    fn runs_restart_on_each_row() {
        let style = CellStyle::default();
        let a = FrameBuffer::new(4, 3);
        let mut b = a.clone();
        b.set(3, 0, TermCell { ch: 'a', style });
        b.set(0, 2, TermCell { ch: 'b', style });
        b.set(2, 2, TermCell { ch: 'c', style });

        let runs: Vec<_> = ChangedRuns::new(&a, &b).collect();
        assert_eq!(runs, vec![(3, 0, 1), (0, 2, 1), (2, 2, 1)]);
    }

    #[test]
    fn resized_frames_redraw_every_row() {
        let a = FrameBuffer::new(4, 3);
        let b = FrameBuffer::new(6, 2);
        let runs: Vec<_> = ChangedRuns::new(&a, &b).collect();
        assert_eq!(runs, vec![(0, 0, 6), (0, 1, 6)]);
    }

    #[test]
    fn diff_encoding_is_smaller_than_full() {
        let style = CellStyle::default();
        let prev = FrameBuffer::new(30, 10);
        let mut next = prev.clone();
        next.set(3, 4, TermCell { ch: 'T', style });

        let mut full = Vec::new();
        let mut diff = Vec::new();
        encode_full_into(&next, &mut full).unwrap();
        encode_diff_into(&prev, &next, &mut diff).unwrap();

        assert!(!diff.is_empty());
        assert!(diff.len() < full.len());
    }
}
