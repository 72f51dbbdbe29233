//! Terminal backends for the compositor.
//!
//! - [`AsciiSink`]: paints glyphs into a [`FrameBuffer`] and hands the whole
//!   buffer over as one text write on flush.
//! - [`ColorSink`]: encodes every band and span as terminal commands the
//!   moment it is painted; flush just writes what was queued.

use std::io::Write;
use std::ops::Range;

use anyhow::Result;

use crate::engine::{FrameSink, ShadeToken};
use crate::fb::{Cell, FrameBuffer};
use crate::renderer::TerminalRenderer;
use crate::types::Rgb;

/// Background used when a token carries no color.
const DEFAULT_BACKGROUND: Rgb = Rgb::new(0, 0, 0);

pub struct AsciiSink<'a, W: Write> {
    fb: &'a mut FrameBuffer,
    term: &'a mut TerminalRenderer<W>,
}

impl<'a, W: Write> AsciiSink<'a, W> {
    pub fn new(fb: &'a mut FrameBuffer, term: &'a mut TerminalRenderer<W>) -> Self {
        Self { fb, term }
    }
}

impl<W: Write> FrameSink for AsciiSink<'_, W> {
    fn begin_frame(&mut self, width: u16, height: u16) {
        self.fb.resize(width, height);
        self.fb.clear(Cell::default());
    }

    fn paint_ceiling_floor_band(&mut self, row: u16, shade: ShadeToken) {
        self.fb.fill_row(row, Cell::plain(shade.glyph));
    }

    fn paint_wall_span(&mut self, column: u16, rows: Range<u16>, shade: ShadeToken) {
        self.fb.fill_column(column, rows, Cell::plain(shade.glyph));
    }

    fn flush(&mut self) -> Result<()> {
        self.fb.terminate_rows();
        self.term.queue_text(self.fb)?;
        self.term.present()
    }
}

pub struct ColorSink<'a, W: Write> {
    term: &'a mut TerminalRenderer<W>,
    width: u16,
    error: Option<anyhow::Error>,
}

impl<'a, W: Write> ColorSink<'a, W> {
    pub fn new(term: &'a mut TerminalRenderer<W>) -> Self {
        Self {
            term,
            width: 0,
            error: None,
        }
    }

    fn record(&mut self, result: Result<()>) {
        if let Err(e) = result {
            self.error.get_or_insert(e);
        }
    }
}

impl<W: Write> FrameSink for ColorSink<'_, W> {
    fn begin_frame(&mut self, width: u16, _height: u16) {
        self.width = width;
        self.error = None;
    }

    fn paint_ceiling_floor_band(&mut self, row: u16, shade: ShadeToken) {
        let bg = shade.background.unwrap_or(DEFAULT_BACKGROUND);
        let result = self.term.queue_band(row, self.width, shade.glyph, bg);
        self.record(result);
    }

    fn paint_wall_span(&mut self, column: u16, rows: Range<u16>, shade: ShadeToken) {
        let bg = shade.background.unwrap_or(DEFAULT_BACKGROUND);
        let result = self.term.queue_span(column, rows, shade.glyph, bg);
        self.record(result);
    }

    fn flush(&mut self) -> Result<()> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        self.term.present()
    }
}
