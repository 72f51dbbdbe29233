//! Frame timing statistics shown under the view.

use std::fmt::Write as _;

use crate::types::{Command, Pose, ShadeMode};

#[derive(Debug, Clone)]
pub struct FrameStats {
    window_ms: u64,
    window_start_ms: u64,
    window_frames: u32,
    last_frame_ms: u64,
    frame_time_ms: u64,
    total_frames: u64,
    fps: f32,
    started: bool,
}

impl FrameStats {
    /// `window_ms` is how often the FPS figure is refreshed.
    pub fn new(window_ms: u64) -> Self {
        Self {
            window_ms: window_ms.max(1),
            window_start_ms: 0,
            window_frames: 0,
            last_frame_ms: 0,
            frame_time_ms: 0,
            total_frames: 0,
            fps: 0.0,
            started: false,
        }
    }

    /// Record a frame finishing at `now_ms`.
    pub fn record_frame(&mut self, now_ms: u64) {
        self.total_frames += 1;

        if !self.started {
            self.started = true;
            self.window_start_ms = now_ms;
            self.last_frame_ms = now_ms;
            return;
        }

        self.frame_time_ms = now_ms.saturating_sub(self.last_frame_ms);
        self.last_frame_ms = now_ms;
        self.window_frames += 1;

        let elapsed = now_ms.saturating_sub(self.window_start_ms);
        if elapsed >= self.window_ms {
            self.fps = self.window_frames as f32 * 1000.0 / elapsed as f32;
            self.window_frames = 0;
            self.window_start_ms = now_ms;
        }
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }

    pub fn total_frames(&self) -> u64 {
        self.total_frames
    }

    pub fn frame_time_ms(&self) -> u64 {
        self.frame_time_ms
    }

    /// Write the status line into `out` (cleared first). `last` is the most
    /// recent command applied, `-` before the first one.
    pub fn write_status(
        &self,
        out: &mut String,
        pose: &Pose,
        mode: ShadeMode,
        last: Option<Command>,
    ) {
        out.clear();
        let _ = write!(
            out,
            "FPS = {:.0}  frame = {}  dt = {} ms  pos = ({:.2}, {:.2})  heading = {:.2}  mode = {}  last = {}",
            self.fps,
            self.total_frames,
            self.frame_time_ms,
            pose.x,
            pose.y,
            pose.heading,
            mode.as_str(),
            last.map_or("-", |cmd| cmd.as_str())
        );
    }
}

impl Default for FrameStats {
    fn default() -> Self {
        Self::new(1000)
    }
}
