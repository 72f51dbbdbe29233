//! Session: everything the frame loop owns between frames.
//!
//! The session holds the map, the player and the active shading mode. The
//! frame loop feeds it at most one command per frame via [`Session::step`] and
//! then asks it to [`Session::render`] into whichever sink matches the mode.

use anyhow::Result;
use thiserror::Error;
use tracing::{debug, info};

use crate::compositor::Compositor;
use crate::core::{GridMap, MoveOutcome, Player};
use crate::shade::{AsciiRamp, ColorBands, ShadingStrategy};
use crate::sink::FrameSink;
use crate::types::{Command, MoveSettings, Pose, RaySettings, ShadeMode, ViewSettings};

#[derive(Debug, Error, PartialEq)]
pub enum SessionError {
    #[error("spawn point ({x}, {y}) is inside a wall or outside the map")]
    SpawnBlocked { x: f32, y: f32 },
}

/// Tuning for a new session.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SessionSettings {
    pub view: ViewSettings,
    pub ray: RaySettings,
    pub movement: MoveSettings,
    pub mode: ShadeMode,
    pub parallel: bool,
}

/// What a single frame's input did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// No input this frame
    Idle,
    Player(MoveOutcome),
    ShadingToggled(ShadeMode),
}

pub struct Session {
    map: GridMap,
    player: Player,
    mode: ShadeMode,
    compositor: Compositor,
    frame: u64,
}

impl Session {
    pub fn new(map: GridMap, spawn: Pose, settings: SessionSettings) -> Result<Self, SessionError> {
        if map.is_blocking(spawn.x, spawn.y) {
            return Err(SessionError::SpawnBlocked {
                x: spawn.x,
                y: spawn.y,
            });
        }

        info!(
            map_width = map.width(),
            map_height = map.height(),
            view_width = settings.view.width,
            view_height = settings.view.height,
            mode = settings.mode.as_str(),
            parallel = settings.parallel,
            "session created"
        );

        Ok(Self {
            map,
            player: Player::new(spawn, settings.movement),
            mode: settings.mode,
            compositor: Compositor::new(settings.view, settings.ray)
                .with_parallel(settings.parallel),
            frame: 0,
        })
    }

    pub fn map(&self) -> &GridMap {
        &self.map
    }

    pub fn pose(&self) -> Pose {
        self.player.pose()
    }

    pub fn mode(&self) -> ShadeMode {
        self.mode
    }

    pub fn compositor(&self) -> &Compositor {
        &self.compositor
    }

    /// Frames rendered so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Strategy for the active mode.
    pub fn strategy(&self) -> &'static dyn ShadingStrategy {
        match self.mode {
            ShadeMode::Ascii => &AsciiRamp,
            ShadeMode::Color => &ColorBands,
        }
    }

    /// Consume at most one command.
    pub fn step(&mut self, command: Option<Command>) -> StepOutcome {
        let Some(command) = command else {
            return StepOutcome::Idle;
        };

        match command {
            Command::ToggleShading => {
                self.mode = self.mode.toggled();
                debug!(mode = self.mode.as_str(), "shading toggled");
                StepOutcome::ShadingToggled(self.mode)
            }
            _ => StepOutcome::Player(self.player.apply(command, &self.map)),
        }
    }

    /// Render the current pose with the active strategy.
    pub fn render(&mut self, sink: &mut dyn FrameSink) -> Result<()> {
        let pose = self.player.pose();
        let strategy = self.strategy();
        self.compositor.render(&self.map, &pose, strategy, sink)?;
        self.frame += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::DirectiveLog;

    #[test]
    fn spawn_in_wall_is_rejected() {
        let err = Session::new(
            GridMap::default_arena(),
            Pose::new(0.5, 0.5, 0.0),
            SessionSettings::default(),
        )
        .err();
        assert_eq!(err, Some(SessionError::SpawnBlocked { x: 0.5, y: 0.5 }));
    }

    #[test]
    fn idle_frame_keeps_pose() {
        let mut s =
            Session::new(GridMap::default_arena(), Pose::default(), SessionSettings::default())
                .unwrap();
        let before = s.pose();
        assert_eq!(s.step(None), StepOutcome::Idle);
        assert_eq!(s.pose(), before);
    }

    #[test]
    fn toggle_switches_strategy_only() {
        let mut s =
            Session::new(GridMap::default_arena(), Pose::default(), SessionSettings::default())
                .unwrap();
        assert_eq!(s.strategy().mode(), ShadeMode::Ascii);
        assert_eq!(
            s.step(Some(Command::ToggleShading)),
            StepOutcome::ShadingToggled(ShadeMode::Color)
        );
        assert_eq!(s.strategy().mode(), ShadeMode::Color);
        assert_eq!(s.pose(), Pose::default());
    }

    #[test]
    fn render_counts_frames() {
        let mut s =
            Session::new(GridMap::default_arena(), Pose::default(), SessionSettings::default())
                .unwrap();
        let mut log = DirectiveLog::new();
        s.render(&mut log).unwrap();
        s.render(&mut log).unwrap();
        assert_eq!(s.frame(), 2);
    }
}
