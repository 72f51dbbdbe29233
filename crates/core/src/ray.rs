//! Ray marcher - fixed-step walk from the eye until something is hit
//!
//! Not a grid DDA: the sample point advances by a fixed
//! `step` and the tile under it is checked each time. Reported distances are
//! therefore whole multiples of `step` and overshoot the true wall boundary by
//! up to one step.

use crate::map::GridMap;
use crate::types::{RaySettings, TileKind, MAX_MARCH_STEPS};

/// Outcome of one ray march.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Distance travelled, never above `max_depth`
    pub distance: f32,
    /// A wall (or the map edge) was reached within `max_depth`
    pub hit: bool,
}

impl RayHit {
    /// Distance as a fraction of the view depth, clamped to `[0, 1]`.
    #[inline]
    pub fn sight_fraction(&self, max_depth: f32) -> f32 {
        sight_fraction(self.distance, max_depth)
    }
}

/// Normalize a distance by the view depth into `[0, 1]`.
#[inline]
pub fn sight_fraction(distance: f32, max_depth: f32) -> f32 {
    if !(max_depth > 0.0) || distance.is_nan() {
        return 1.0;
    }
    (distance / max_depth).clamp(0.0, 1.0)
}

/// March a ray from `(origin_x, origin_y)` along `angle`.
///
/// The sample point is `origin + (sin angle, cos angle) * distance`, truncated
/// to tile coordinates. Leaving the map counts as a hit at `max_depth`.
///
/// A step that is not positive, or so small that reaching `max_depth` would
/// take more than [`MAX_MARCH_STEPS`] samples, yields a miss at `max_depth`
/// without sampling.
pub fn march(
    map: &GridMap,
    origin_x: f32,
    origin_y: f32,
    angle: f32,
    settings: &RaySettings,
) -> RayHit {
    let max_depth = settings.max_depth.max(0.0);
    let step = settings.step;
    if !(step > 0.0) || !step.is_finite() || max_depth / step > MAX_MARCH_STEPS as f32 {
        return RayHit {
            distance: max_depth,
            hit: false,
        };
    }

    let (eye_x, eye_y) = angle.sin_cos();

    let mut steps: u32 = 0;
    let mut distance = 0.0_f32;
    while distance < max_depth {
        steps += 1;
        distance = steps as f32 * step;

        let col = (origin_x + eye_x * distance) as i32;
        let row = (origin_y + eye_y * distance) as i32;

        match map.tile_kind(col, row) {
            TileKind::Open => {}
            TileKind::Wall => {
                return RayHit {
                    distance: distance.min(max_depth),
                    hit: true,
                };
            }
            TileKind::OutOfBounds => {
                return RayHit {
                    distance: max_depth,
                    hit: true,
                };
            }
        }
    }

    RayHit {
        distance: max_depth,
        hit: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Tile;

    fn settings(max_depth: f32, step: f32) -> RaySettings {
        RaySettings { max_depth, step }
    }

    #[test]
    fn straight_ahead_hits_far_wall() {
        let map = GridMap::default_arena();
        let hit = march(&map, 2.5, 2.5, 0.0, &settings(20.0, 0.05));
        assert!(hit.hit);
        // Wall row 19 starts at y = 19.0, i.e. 16.5 tiles ahead.
        assert!(hit.distance >= 16.5);
        assert!(hit.distance - 16.5 <= 0.05 + 1e-4);
    }

    #[test]
    fn distance_is_a_multiple_of_step() {
        let map = GridMap::default_arena();
        let step = 0.25;
        let hit = march(&map, 3.3, 4.1, 0.7, &settings(20.0, step));
        let steps = hit.distance / step;
        assert!((steps - steps.round()).abs() < 1e-3, "{}", hit.distance);
    }

    #[test]
    fn open_field_runs_out_of_depth() {
        let map = GridMap::new(64, 64, vec![Tile::Open; 64 * 64]).unwrap();
        let hit = march(&map, 32.0, 32.0, 0.0, &settings(10.0, 0.05));
        assert!(!hit.hit);
        assert_eq!(hit.distance, 10.0);
    }

    #[test]
    fn leaving_the_map_reports_max_depth() {
        // No perimeter walls: the ray exits the map after ~2.5 tiles.
        let map = GridMap::new(5, 5, vec![Tile::Open; 25]).unwrap();
        let hit = march(&map, 2.5, 2.5, 0.0, &settings(14.0, 0.05));
        assert!(hit.hit);
        assert_eq!(hit.distance, 14.0);
    }

    #[test]
    fn invalid_step_never_loops() {
        let map = GridMap::default_arena();
        let hit = march(&map, 2.5, 2.5, 0.0, &settings(20.0, 0.0));
        assert_eq!(
            hit,
            RayHit {
                distance: 20.0,
                hit: false
            }
        );
    }

    #[test]
    fn tiny_step_returns_instead_of_spinning() {
        let map = GridMap::default_arena();
        let hit = march(&map, 9.5, 9.5, 0.0, &settings(20.0, 1e-9));
        assert_eq!(
            hit,
            RayHit {
                distance: 20.0,
                hit: false
            }
        );
    }

    #[test]
    fn step_at_the_sample_limit_still_marches() {
        let map = GridMap::default_arena();
        // 1.0 / 1e-6 samples sits exactly on the limit.
        let hit = march(&map, 9.5, 9.5, 0.0, &settings(1.0, 1.0 / MAX_MARCH_STEPS as f32));
        assert!(!hit.hit);
        let hit = march(&map, 9.5, 18.5, 0.0, &settings(1.0, 1.0 / MAX_MARCH_STEPS as f32));
        assert!(hit.hit);
        assert!(hit.distance <= 0.5 + 1e-3);
    }

    #[test]
    fn sight_fraction_is_clamped() {
        assert_eq!(sight_fraction(0.0, 20.0), 0.0);
        assert_eq!(sight_fraction(10.0, 20.0), 0.5);
        assert_eq!(sight_fraction(25.0, 20.0), 1.0);
        assert_eq!(sight_fraction(-1.0, 20.0), 0.0);
        assert_eq!(sight_fraction(f32::NAN, 20.0), 1.0);
    }
}
