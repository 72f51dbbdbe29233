//! Shading strategy tests

use tui_raycaster::core::sight_fraction;
use tui_raycaster::engine::shade::{
    ASCII_RAMP, SURFACE_BAND_COLORS, WALL_BAND_COLORS, WALL_BAND_LIMITS,
};
use tui_raycaster::engine::{AsciiRamp, ColorBands, ShadeSample, ShadingStrategy};
use tui_raycaster::types::{Rgb, ShadeMode, MAX_DEPTH};

fn wall(strategy: &dyn ShadingStrategy, distance: f32) -> u8 {
    let sight = sight_fraction(distance, MAX_DEPTH);
    strategy.classify(ShadeSample::Wall { sight }).level
}

#[test]
fn test_max_depth_and_beyond_use_darkest_glyph() {
    let darkest = *ASCII_RAMP.last().unwrap();
    for distance in [MAX_DEPTH, MAX_DEPTH + 0.01, MAX_DEPTH * 2.0, f32::INFINITY] {
        let sight = sight_fraction(distance, MAX_DEPTH);
        let token = AsciiRamp.classify(ShadeSample::Wall { sight });
        assert_eq!(token.glyph, darkest, "distance {}", distance);
        assert_eq!(token.level as usize, ASCII_RAMP.len() - 1);
    }
}

#[test]
fn test_max_depth_uses_last_color_band() {
    let last = WALL_BAND_COLORS.len() - 1;
    assert_eq!(wall(&ColorBands, MAX_DEPTH) as usize, last);
    assert_eq!(wall(&ColorBands, MAX_DEPTH * 3.0) as usize, last);
}

#[test]
fn test_farther_is_never_brighter() {
    let strategies: [&dyn ShadingStrategy; 2] = [&AsciiRamp, &ColorBands];
    for strategy in strategies {
        let mut previous = 0u8;
        for i in 0..=500 {
            let distance = i as f32 * 0.05;
            let level = wall(strategy, distance);
            assert!(
                level >= previous,
                "{:?}: level dropped from {} to {} at distance {}",
                strategy.mode(),
                previous,
                level,
                distance
            );
            previous = level;
        }
    }
}

#[test]
fn test_ramp_covers_every_glyph() {
    let mut seen = [false; 7];
    for i in 0..=1000 {
        let sight = i as f32 / 1000.0;
        seen[AsciiRamp::ramp_index(sight)] = true;
    }
    assert!(seen.iter().all(|&s| s));
}

#[test]
fn test_color_bands_are_ordered_and_distinct() {
    assert!(WALL_BAND_COLORS.len() >= 10);
    assert_eq!(WALL_BAND_LIMITS.len() + 1, WALL_BAND_COLORS.len());
    assert!(WALL_BAND_LIMITS.windows(2).all(|w| w[0] < w[1]));

    // Light gray near, near-black far.
    let darker = |a: &Rgb, b: &Rgb| b.r < a.r && b.g < a.g && b.b < a.b;
    assert!(WALL_BAND_COLORS.windows(2).all(|w| darker(&w[0], &w[1])));
    assert!(SURFACE_BAND_COLORS
        .windows(2)
        .all(|w| darker(&w[0], &w[1])));
}

#[test]
fn test_ascii_bands_split_at_horizon() {
    let height = 40;
    for row in 0..20 {
        let token = AsciiRamp.classify(ShadeSample::Band { row, height });
        assert_eq!(token.glyph, ' ', "ceiling row {}", row);
    }

    let glyph = |row| AsciiRamp.classify(ShadeSample::Band { row, height }).glyph;
    assert_eq!(glyph(20), '.');
    assert_eq!(glyph(39), '+');
    // b = 1 - (row - 20) / 20 crosses 0.4 at row 32.
    assert_eq!(glyph(31), '.');
    assert_eq!(glyph(33), '+');
}

#[test]
fn test_surface_bands_darken_toward_edges() {
    let height = 40;
    let level = |row| ColorBands.classify(ShadeSample::Band { row, height }).level;

    assert_eq!(level(20), 0);
    assert_eq!(level(0) as usize, SURFACE_BAND_COLORS.len() - 1);
    assert_eq!(level(39) as usize, SURFACE_BAND_COLORS.len() - 1);

    for row in 1..20 {
        assert!(level(row) <= level(row - 1));
    }
    for row in 21..40 {
        assert!(level(row) >= level(row - 1));
    }
}

#[test]
fn test_tokens_match_mode() {
    assert_eq!(AsciiRamp.mode(), ShadeMode::Ascii);
    assert_eq!(ColorBands.mode(), ShadeMode::Color);

    let mono = AsciiRamp.classify(ShadeSample::Wall { sight: 0.3 });
    assert!(mono.background.is_none());
    let color = ColorBands.classify(ShadeSample::Wall { sight: 0.3 });
    assert!(color.background.is_some());
}
