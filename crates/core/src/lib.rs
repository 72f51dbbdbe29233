//! Core raycasting logic - pure, deterministic, and testable
//!
//! Nothing in here touches the terminal. Given the same map, pose and
//! settings every function returns the same answer, which keeps rendering
//! and movement easy to unit test.
//!
//! # Module Structure
//!
//! - [`map`]: immutable tile grid with bounds-checked queries
//! - [`ray`]: fixed-step ray marcher
//! - [`projection`]: wall distance to on-screen ceiling/floor rows
//! - [`player`]: pose ownership and collision-checked movement
//!
//! # Example
//!
//! ```
//! use tui_raycaster_core::{march, project, GridMap, MoveOutcome, Player};
//! use tui_raycaster_types::{Command, RaySettings};
//!
//! let map = GridMap::default_arena();
//! let mut player = Player::default();
//! assert_eq!(player.apply(Command::MoveForward, &map), MoveOutcome::Moved);
//!
//! let pose = player.pose();
//! let hit = march(&map, pose.x, pose.y, pose.heading, &RaySettings::default());
//! assert!(hit.hit);
//!
//! let column = project(hit.distance, 40);
//! assert!(column.ceiling <= 20);
//! ```

pub mod map;
pub mod player;
pub mod projection;
pub mod ray;

pub use tui_raycaster_types as types;

pub use map::{GridMap, MapError};
pub use player::{MoveOutcome, Player};
pub use projection::{project, Projection, MIN_DISTANCE};
pub use ray::{march, sight_fraction, RayHit};
