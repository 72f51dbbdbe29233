//! Output sink interface shared by all render backends.
//!
//! The compositor only ever talks to a [`FrameSink`]; whether the frame ends
//! up as one text buffer or as a stream of colored spans is the sink's
//! business.

use std::ops::Range;

use anyhow::Result;

use crate::shade::ShadeToken;

pub trait FrameSink {
    /// Called once before any painting.
    fn begin_frame(&mut self, width: u16, height: u16);

    /// Fill an entire row with a ceiling/floor shade.
    fn paint_ceiling_floor_band(&mut self, row: u16, shade: ShadeToken);

    /// Paint a vertical wall span in `column`. `rows` may be empty.
    fn paint_wall_span(&mut self, column: u16, rows: Range<u16>, shade: ShadeToken);

    /// Hand the finished frame to the output.
    fn flush(&mut self) -> Result<()>;
}

/// One recorded sink call.
#[derive(Debug, Clone, PartialEq)]
pub enum Directive {
    Begin { width: u16, height: u16 },
    Band { row: u16, shade: ShadeToken },
    Span { column: u16, rows: Range<u16>, shade: ShadeToken },
    Flush,
}

/// Sink that records every call. Handy for inspecting draw order.
#[derive(Debug, Default, Clone)]
pub struct DirectiveLog {
    pub directives: Vec<Directive>,
}

impl DirectiveLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wall spans of the last frame, in issue order.
    pub fn spans(&self) -> impl Iterator<Item = (u16, &Range<u16>, &ShadeToken)> {
        self.directives.iter().filter_map(|d| match d {
            Directive::Span {
                column,
                rows,
                shade,
            } => Some((*column, rows, shade)),
            _ => None,
        })
    }
}

impl FrameSink for DirectiveLog {
    fn begin_frame(&mut self, width: u16, height: u16) {
        self.directives.clear();
        self.directives.push(Directive::Begin { width, height });
    }

    fn paint_ceiling_floor_band(&mut self, row: u16, shade: ShadeToken) {
        self.directives.push(Directive::Band { row, shade });
    }

    fn paint_wall_span(&mut self, column: u16, rows: Range<u16>, shade: ShadeToken) {
        self.directives.push(Directive::Span {
            column,
            rows,
            shade,
        });
    }

    fn flush(&mut self) -> Result<()> {
        self.directives.push(Directive::Flush);
        Ok(())
    }
}
