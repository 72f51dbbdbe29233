//! Shared types and constants for the raycaster.
//!
//! Everything here is plain data with no external dependencies, so the same
//! definitions can be used by the core (map, rays, movement), the engine
//! (shading, compositing) and the terminal front-end.
//!
//! # Default Tuning
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SCREEN_WIDTH` | 83 | Output columns (the last one carries line breaks in ASCII mode) |
//! | `SCREEN_HEIGHT` | 40 | Output rows (leaves two rows for the status line on a 42-row terminal) |
//! | `FOV` | π/4 | Horizontal field of view in radians |
//! | `MAX_DEPTH` | 20.0 | Furthest visible distance, in tiles |
//! | `MARCH_STEP` | 0.05 | Ray march resolution, in tiles |
//! | `MAX_MARCH_STEPS` | 1 000 000 | Most samples a single ray may take |
//! | `ROTATE_STEP` | 0.04 | Heading change per rotate command, in radians |
//! | `MOVE_STEP` | 1.0 | Distance per move/strafe command, in tiles |
//!
//! # Heading Convention
//!
//! Heading `0.0` looks along `+y`. A unit step along heading `a` is
//! `(sin a, cos a)`, so `sin` drives `x` and `cos` drives `y`.
//!
//! # Examples
//!
//! ```
//! use tui_raycaster_types::{Command, ShadeMode, SCREEN_HEIGHT, SCREEN_WIDTH};
//!
//! assert_eq!(Command::StrafeLeft.as_str(), "strafeLeft");
//!
//! assert_eq!(ShadeMode::Ascii.toggled(), ShadeMode::Color);
//!
//! assert_eq!(SCREEN_WIDTH, 83);
//! assert_eq!(SCREEN_HEIGHT, 40);
//! ```

/// Output width in character columns.
pub const SCREEN_WIDTH: u16 = 83;

/// Output height in character rows.
pub const SCREEN_HEIGHT: u16 = 40;

/// Horizontal field of view (45°).
pub const FOV: f32 = std::f32::consts::FRAC_PI_4;

/// Maximum visible distance in tiles.
pub const MAX_DEPTH: f32 = 20.0;

/// Ray march increment in tiles.
pub const MARCH_STEP: f32 = 0.05;

/// Upper bound on samples per ray (`max_depth / step`).
pub const MAX_MARCH_STEPS: u32 = 1_000_000;

/// Heading change per rotate command (radians).
pub const ROTATE_STEP: f32 = 0.04;

/// Distance covered by one move or strafe command (tiles).
pub const MOVE_STEP: f32 = 1.0;

/// Spawn position of the player.
pub const SPAWN_X: f32 = 6.0;
pub const SPAWN_Y: f32 = 6.0;
pub const SPAWN_HEADING: f32 = 0.0;

/// Map glyph for a wall tile.
pub const WALL_GLYPH: char = '#';

/// Map glyph for an open tile.
pub const OPEN_GLYPH: char = '.';

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_tuning_defaults() {
        assert_eq!(SCREEN_WIDTH, 83);
        assert_eq!(SCREEN_HEIGHT, 40);
        assert_eq!(MAX_DEPTH, 20.0);
        assert_eq!(MARCH_STEP, 0.05);
        assert_eq!(ROTATE_STEP, 0.04);
        assert!((FOV - std::f32::consts::PI / 4.0).abs() < f32::EPSILON);
        assert_eq!((SPAWN_X, SPAWN_Y, SPAWN_HEADING), (6.0, 6.0, 0.0));
    }

    #[test]
    fn command_names() {
        assert_eq!(Command::RotateLeft.as_str(), "rotateLeft");
        assert_eq!(Command::MoveBackward.as_str(), "moveBackward");
        assert_eq!(Command::ToggleShading.as_str(), "toggleShading");
    }

    #[test]
    fn tile_kind_blocking() {
        assert!(!TileKind::Open.is_blocking());
        assert!(TileKind::Wall.is_blocking());
        assert!(TileKind::OutOfBounds.is_blocking());
    }

    #[test]
    fn shade_mode_parse() {
        assert_eq!(ShadeMode::from_str("ASCII"), Some(ShadeMode::Ascii));
        assert_eq!(ShadeMode::from_str("colour"), Some(ShadeMode::Color));
        assert_eq!(ShadeMode::from_str("sepia"), None);
        assert_eq!(ShadeMode::Color.toggled().toggled(), ShadeMode::Color);
    }
}

/// A stored map tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tile {
    #[default]
    Open,
    Wall,
}

impl Tile {
    /// Parse a layout glyph. A space is accepted as open floor.
    pub fn from_glyph(ch: char) -> Option<Self> {
        match ch {
            WALL_GLYPH => Some(Tile::Wall),
            OPEN_GLYPH | ' ' => Some(Tile::Open),
            _ => None,
        }
    }
}

/// Result of a bounds-checked map query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileKind {
    Open,
    Wall,
    OutOfBounds,
}

impl TileKind {
    /// Walls and anything off the map stop both rays and players.
    pub fn is_blocking(self) -> bool {
        !matches!(self, TileKind::Open)
    }
}

impl From<Tile> for TileKind {
    fn from(tile: Tile) -> Self {
        match tile {
            Tile::Open => TileKind::Open,
            Tile::Wall => TileKind::Wall,
        }
    }
}

/// Player position and heading in grid space.
///
/// `x`/`y` are tile coordinates; the fractional part is the position inside
/// the tile. `heading` is in radians and is never normalized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub x: f32,
    pub y: f32,
    pub heading: f32,
}

impl Pose {
    pub const fn new(x: f32, y: f32, heading: f32) -> Self {
        Self { x, y, heading }
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::new(SPAWN_X, SPAWN_Y, SPAWN_HEADING)
    }
}

/// Discrete player commands, at most one per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Turn counter-clockwise (heading decreases)
    RotateLeft,
    /// Turn clockwise (heading increases)
    RotateRight,
    MoveForward,
    MoveBackward,
    StrafeLeft,
    StrafeRight,
    /// Switch between monochrome and colored shading
    ToggleShading,
}

impl Command {
    /// Name shown on the status line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::RotateLeft => "rotateLeft",
            Command::RotateRight => "rotateRight",
            Command::MoveForward => "moveForward",
            Command::MoveBackward => "moveBackward",
            Command::StrafeLeft => "strafeLeft",
            Command::StrafeRight => "strafeRight",
            Command::ToggleShading => "toggleShading",
        }
    }
}

/// Active shading strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ShadeMode {
    /// Monochrome glyph ramp
    #[default]
    Ascii,
    /// Background-color distance bands
    Color,
}

impl ShadeMode {
    pub fn toggled(self) -> Self {
        match self {
            ShadeMode::Ascii => ShadeMode::Color,
            ShadeMode::Color => ShadeMode::Ascii,
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "ascii" | "mono" | "monochrome" => Some(ShadeMode::Ascii),
            "color" | "colour" | "colored" => Some(ShadeMode::Color),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShadeMode::Ascii => "ascii",
            ShadeMode::Color => "color",
        }
    }
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Ray march tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaySettings {
    /// Furthest distance a ray travels (also the shading normalizer)
    pub max_depth: f32,
    /// Fixed march increment
    pub step: f32,
}

impl Default for RaySettings {
    fn default() -> Self {
        Self {
            max_depth: MAX_DEPTH,
            step: MARCH_STEP,
        }
    }
}

/// Movement tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveSettings {
    pub rotate_step: f32,
    pub move_step: f32,
}

impl Default for MoveSettings {
    fn default() -> Self {
        Self {
            rotate_step: ROTATE_STEP,
            move_step: MOVE_STEP,
        }
    }
}

/// Output geometry and camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewSettings {
    pub width: u16,
    pub height: u16,
    pub fov: f32,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            fov: FOV,
        }
    }
}
