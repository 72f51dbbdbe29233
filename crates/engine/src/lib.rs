//! Rendering engine: shading strategies, output sinks and the frame compositor.
//!
//! This crate is still free of terminal I/O. Backends implement
//! [`FrameSink`]; the compositor drives them with one band per row and one
//! wall span per column.
//!
//! # Example
//!
//! ```
//! use tui_raycaster_engine::{DirectiveLog, Session, SessionSettings};
//! use tui_raycaster_core::GridMap;
//! use tui_raycaster_types::{Command, Pose};
//!
//! let mut session =
//!     Session::new(GridMap::default_arena(), Pose::default(), SessionSettings::default())
//!         .unwrap();
//! session.step(Some(Command::RotateRight));
//!
//! let mut log = DirectiveLog::new();
//! session.render(&mut log).unwrap();
//! assert_eq!(log.spans().count(), 83);
//! ```

pub mod compositor;
pub mod session;
pub mod shade;
pub mod sink;

pub use tui_raycaster_core as core;
pub use tui_raycaster_types as types;

pub use compositor::{ray_angle, sample_column, ColumnSample, Compositor};
pub use session::{Session, SessionError, SessionSettings, StepOutcome};
pub use shade::{AsciiRamp, ColorBands, ShadeSample, ShadeToken, ShadingStrategy};
pub use sink::{Directive, DirectiveLog, FrameSink};
