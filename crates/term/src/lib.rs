//! Terminal front-end for the raycaster.
//!
//! Two [`tui_raycaster_engine::FrameSink`] backends share one
//! [`TerminalRenderer`]:
//!
//! - [`AsciiSink`] builds a monochrome text frame and writes it in one go
//! - [`ColorSink`] streams colored bands and wall spans as they are painted
//!
//! The renderer is generic over its writer so frames can be captured in tests.

pub mod fb;
pub mod renderer;
pub mod sinks;
pub mod stats;

pub use tui_raycaster_engine as engine;
pub use tui_raycaster_types as types;

pub use fb::{Cell, FrameBuffer};
pub use renderer::{encode_band_into, encode_span_into, encode_text_into, TerminalRenderer};
pub use sinks::{AsciiSink, ColorSink};
pub use stats::FrameStats;
