//! Ray marcher tests

use tui_raycaster::core::{march, GridMap};
use tui_raycaster::types::RaySettings;

fn settings() -> RaySettings {
    RaySettings {
        max_depth: 20.0,
        step: 0.05,
    }
}

#[test]
fn test_march_is_deterministic() {
    let map = GridMap::default_arena();
    let first = march(&map, 6.3, 7.1, 0.7, &settings());
    for _ in 0..10 {
        assert_eq!(march(&map, 6.3, 7.1, 0.7, &settings()), first);
    }
}

#[test]
fn test_distance_is_multiple_of_step() {
    let map = GridMap::default_arena();
    for i in 0..32 {
        let angle = i as f32 * 0.2;
        let hit = march(&map, 9.5, 9.5, angle, &settings());
        assert!(hit.hit);
        let steps = (hit.distance / 0.05).round();
        assert!(
            (hit.distance - steps * 0.05).abs() < 1e-3,
            "distance {} at angle {} is not on the step grid",
            hit.distance,
            angle
        );
    }
}

#[test]
fn test_heading_zero_walks_positive_y() {
    let map = GridMap::default_arena();
    let hit = march(&map, 5.5, 2.0, 0.0, &settings());
    assert!(hit.hit);
    // Wall row 19 starts 17 tiles ahead.
    assert!((hit.distance - 17.0).abs() <= 0.05 + 1e-3);
}

#[test]
fn test_quarter_turn_walks_positive_x() {
    let map = GridMap::default_arena();
    let hit = march(&map, 2.0, 5.5, std::f32::consts::FRAC_PI_2, &settings());
    assert!(hit.hit);
    assert!((hit.distance - 17.0).abs() <= 0.05 + 1e-3);
}

#[test]
fn test_leaving_the_map_reports_max_depth() {
    // No perimeter along +y: the ray walks off the bottom edge.
    let map = GridMap::from_rows(&["...", "...", "..."]).unwrap();
    let hit = march(&map, 1.5, 1.5, 0.0, &settings());
    assert!(hit.hit);
    assert_eq!(hit.distance, 20.0);
}

#[test]
fn test_nothing_within_depth_is_a_miss() {
    let map = GridMap::default_arena();
    let short = RaySettings {
        max_depth: 3.0,
        step: 0.05,
    };
    let hit = march(&map, 9.5, 9.5, 0.0, &short);
    assert!(!hit.hit);
    assert_eq!(hit.distance, 3.0);
}

#[test]
fn test_too_fine_step_returns_a_miss() {
    let map = GridMap::default_arena();
    let tiny = RaySettings {
        max_depth: 20.0,
        step: 1e-9,
    };
    let hit = march(&map, 9.5, 9.5, 0.0, &tiny);
    assert!(!hit.hit);
    assert_eq!(hit.distance, 20.0);
}
