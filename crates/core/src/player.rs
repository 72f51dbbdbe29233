//! Player / movement controller
//!
//! Owns the pose and applies one discrete command at a time. Translations are
//! applied speculatively and rolled back by subtracting the same delta when
//! they land in a wall. In `f32` the add-then-subtract can round, so a rejected
//! move restores the pose only up to that rounding; positions on coarse binary
//! fractions come back exactly.

use std::f32::consts::FRAC_PI_2;

use tracing::{debug, trace};

use crate::map::GridMap;
use crate::types::{Command, MoveSettings, Pose};

/// What a command did to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Heading changed
    Rotated,
    /// Position changed
    Moved,
    /// Position change rejected by collision; pose unchanged
    Blocked,
    /// Not a pose command
    Ignored,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pose: Pose,
    settings: MoveSettings,
}

impl Player {
    pub fn new(pose: Pose, settings: MoveSettings) -> Self {
        Self { pose, settings }
    }

    pub fn pose(&self) -> Pose {
        self.pose
    }

    pub fn settings(&self) -> &MoveSettings {
        &self.settings
    }

    /// Apply a single command, checking translations against `map`.
    pub fn apply(&mut self, command: Command, map: &GridMap) -> MoveOutcome {
        let heading = self.pose.heading;
        match command {
            Command::RotateLeft => {
                self.pose.heading -= self.settings.rotate_step;
                MoveOutcome::Rotated
            }
            Command::RotateRight => {
                self.pose.heading += self.settings.rotate_step;
                MoveOutcome::Rotated
            }
            Command::MoveForward => self.translate(heading, 1.0, map),
            Command::MoveBackward => self.translate(heading, -1.0, map),
            Command::StrafeLeft => self.translate(heading - FRAC_PI_2, 1.0, map),
            Command::StrafeRight => self.translate(heading + FRAC_PI_2, 1.0, map),
            Command::ToggleShading => MoveOutcome::Ignored,
        }
    }

    fn translate(&mut self, angle: f32, sign: f32, map: &GridMap) -> MoveOutcome {
        let (sin, cos) = angle.sin_cos();
        let dx = sign * sin * self.settings.move_step;
        let dy = sign * cos * self.settings.move_step;

        self.pose.x += dx;
        self.pose.y += dy;

        if map.is_blocking(self.pose.x, self.pose.y) {
            debug!(
                x = self.pose.x,
                y = self.pose.y,
                "move rejected: destination tile is blocked"
            );
            self.pose.x -= dx;
            self.pose.y -= dy;
            return MoveOutcome::Blocked;
        }

        trace!(x = self.pose.x, y = self.pose.y, "player moved");
        MoveOutcome::Moved
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new(Pose::default(), MoveSettings::default())
    }
}
