//! TerminalRenderer: owns the terminal and writes queued output in one go.
//!
//! Drawing happens in two steps. `queue_*` calls encode crossterm commands into
//! an internal byte buffer without touching the terminal; [`TerminalRenderer::present`]
//! then writes the whole buffer with a single `write_all` and flushes.

use std::io::{self, Write};
use std::ops::Range;

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor},
    terminal, QueueableCommand,
};

use crate::fb::FrameBuffer;
use crate::types::Rgb;

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    buf: Vec<u8>,
}

impl TerminalRenderer<io::Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for TerminalRenderer<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
        self.present()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.present()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Bytes queued since the last [`Self::present`].
    pub fn pending(&self) -> &[u8] {
        &self.buf
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    /// Queue a text frame (monochrome path).
    pub fn queue_text(&mut self, fb: &FrameBuffer) -> Result<()> {
        encode_text_into(fb, &mut self.buf)
    }

    /// Queue a full-width row in one background color.
    pub fn queue_band(&mut self, row: u16, width: u16, glyph: char, bg: Rgb) -> Result<()> {
        encode_band_into(&mut self.buf, row, width, glyph, bg)
    }

    /// Queue a vertical span in one background color.
    pub fn queue_span(&mut self, column: u16, rows: Range<u16>, glyph: char, bg: Rgb) -> Result<()> {
        encode_span_into(&mut self.buf, column, rows, glyph, bg)
    }

    /// Queue a plain text line starting at column 0 of `row`.
    pub fn queue_line(&mut self, row: u16, text: &str) -> Result<()> {
        self.buf.queue(cursor::MoveTo(0, row))?;
        self.buf.queue(ResetColor)?;
        self.buf.queue(terminal::Clear(terminal::ClearType::UntilNewLine))?;
        self.buf.queue(Print(text))?;
        Ok(())
    }

    /// Write everything queued in one call and flush.
    pub fn present(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        self.buf.clear();
        Ok(())
    }
}

/// Encode a text frame into `out`.
///
/// `'\n'` cells become `"\r\n"`: in raw mode a bare line feed does not return
/// the cursor to column 0.
pub fn encode_text_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(cursor::MoveTo(0, 0))?;
    out.queue(ResetColor)?;
    for cell in fb.cells() {
        if cell.ch == '\n' {
            out.queue(Print("\r\n"))?;
        } else {
            out.queue(Print(cell.ch))?;
        }
    }
    Ok(())
}

/// Encode a full-width, single-color row into `out`.
pub fn encode_band_into(out: &mut Vec<u8>, row: u16, width: u16, glyph: char, bg: Rgb) -> Result<()> {
    out.queue(cursor::MoveTo(0, row))?;
    out.queue(SetBackgroundColor(rgb_to_color(bg)))?;
    for _ in 0..width {
        out.queue(Print(glyph))?;
    }
    Ok(())
}

/// Encode a single-color vertical span into `out`.
pub fn encode_span_into(
    out: &mut Vec<u8>,
    column: u16,
    rows: Range<u16>,
    glyph: char,
    bg: Rgb,
) -> Result<()> {
    if rows.is_empty() {
        return Ok(());
    }
    out.queue(SetBackgroundColor(rgb_to_color(bg)))?;
    for row in rows {
        out.queue(cursor::MoveTo(column, row))?;
        out.queue(Print(glyph))?;
    }
    Ok(())
}

pub(crate) fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fb::Cell;

    fn contains(haystack: &[u8], needle: &[u8]) -> bool {
        haystack.windows(needle.len()).any(|w| w == needle)
    }

    #[test]
    fn text_frame_uses_carriage_return_line_feeds() {
        let mut fb = FrameBuffer::new(3, 2);
        fb.clear(Cell::plain('@'));
        fb.terminate_rows();

        let mut out = Vec::new();
        encode_text_into(&fb, &mut out).unwrap();
        assert!(contains(&out, b"@@\r\n@@\r\n"));
    }

    #[test]
    fn present_writes_once_and_drains_queue() {
        let mut term = TerminalRenderer::with_writer(Vec::new());
        term.queue_line(3, "hello").unwrap();
        assert!(!term.pending().is_empty());
        term.present().unwrap();
        assert!(term.pending().is_empty());
        assert!(contains(term.writer(), b"hello"));
    }

    #[test]
    fn empty_span_emits_nothing() {
        let mut out = Vec::new();
        encode_span_into(&mut out, 4, 7..7, ' ', Rgb::new(1, 2, 3)).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn band_sets_background_color() {
        let mut out = Vec::new();
        encode_band_into(&mut out, 0, 2, ' ', Rgb::new(10, 20, 30)).unwrap();

        let mut expected = Vec::new();
        expected
            .queue(SetBackgroundColor(Color::Rgb {
                r: 10,
                g: 20,
                b: 30,
            }))
            .unwrap();
        assert!(contains(&out, &expected));
    }
}
