//! Shading strategies: distance (or row position) to a visual token.
//!
//! Two strategies share one [`ShadingStrategy::classify`] entry point:
//!
//! - [`AsciiRamp`]: monochrome glyph ramp `"@%#*=- "`, nearest to furthest
//! - [`ColorBands`]: background-color bands, light gray (near) to near-black (far)
//!
//! Both are monotonic in sight fraction: a farther wall never gets a lower
//! `level` than a nearer one.

use crate::types::{Rgb, ShadeMode};

/// Wall glyphs from nearest/brightest to furthest/darkest.
pub const ASCII_RAMP: [char; 7] = ['@', '%', '#', '*', '=', '-', ' '];

/// Floor glyph close to the viewer.
pub const FLOOR_NEAR_GLYPH: char = '+';
/// Floor glyph toward the horizon.
pub const FLOOR_FAR_GLYPH: char = '.';
/// Floor rows whose horizon closeness is below this use [`FLOOR_NEAR_GLYPH`].
pub const FLOOR_NEAR_LIMIT: f32 = 0.4;

/// Lower bounds (sight fraction) of wall bands 1..; band 0 starts at 0.0.
pub const WALL_BAND_LIMITS: [f32; 11] = [
    0.05, 0.10, 0.15, 0.20, 0.25, 0.30, 0.40, 0.50, 0.60, 0.70, 0.85,
];

/// Wall background per band, light gray to near-black.
pub const WALL_BAND_COLORS: [Rgb; 12] = [
    Rgb::new(214, 214, 214),
    Rgb::new(196, 196, 196),
    Rgb::new(178, 178, 178),
    Rgb::new(160, 160, 160),
    Rgb::new(142, 142, 142),
    Rgb::new(124, 124, 124),
    Rgb::new(104, 104, 104),
    Rgb::new(86, 86, 86),
    Rgb::new(68, 68, 68),
    Rgb::new(50, 50, 50),
    Rgb::new(32, 32, 32),
    Rgb::new(16, 16, 16),
];

/// Ceiling/floor background per band, horizon (light) to screen edge (dark).
pub const SURFACE_BAND_COLORS: [Rgb; 8] = [
    Rgb::new(176, 148, 112),
    Rgb::new(158, 132, 99),
    Rgb::new(140, 116, 86),
    Rgb::new(122, 100, 73),
    Rgb::new(104, 85, 61),
    Rgb::new(86, 70, 50),
    Rgb::new(68, 55, 39),
    Rgb::new(50, 40, 28),
];

/// Input to a shading strategy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShadeSample {
    /// Wall cell; `sight` is distance / max depth
    Wall { sight: f32 },
    /// Ceiling/floor row of a `height`-row screen
    Band { row: u16, height: u16 },
}

/// What to put in a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShadeToken {
    /// Ramp or band index (0 = nearest/brightest)
    pub level: u8,
    pub glyph: char,
    /// Background color, `None` in monochrome mode
    pub background: Option<Rgb>,
}

impl ShadeToken {
    pub const fn glyph(level: u8, glyph: char) -> Self {
        Self {
            level,
            glyph,
            background: None,
        }
    }

    pub const fn color(level: u8, background: Rgb) -> Self {
        Self {
            level,
            glyph: ' ',
            background: Some(background),
        }
    }
}

pub trait ShadingStrategy: Send + Sync {
    fn mode(&self) -> ShadeMode;

    fn classify(&self, sample: ShadeSample) -> ShadeToken;
}

#[inline]
fn clamp_unit(v: f32) -> f32 {
    if v.is_nan() {
        1.0
    } else {
        v.clamp(0.0, 1.0)
    }
}

/// Is `row` in the upper (ceiling) half of the screen?
#[inline]
pub fn is_ceiling_row(row: u16, height: u16) -> bool {
    (row as f32) < height as f32 / 2.0
}

/// Monochrome glyph ramp.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsciiRamp;

impl AsciiRamp {
    /// Ramp index for a sight fraction.
    pub fn ramp_index(sight: f32) -> usize {
        let last = ASCII_RAMP.len() - 1;
        let index = (clamp_unit(sight) * last as f32) as usize;
        index.min(last)
    }

    /// Horizon closeness of a floor row: 1 at the middle row, 0 at the bottom edge.
    pub fn floor_closeness(row: u16, height: u16) -> f32 {
        let half = height as f32 / 2.0;
        if half <= 0.0 {
            return 0.0;
        }
        1.0 - (row as f32 - half) / half
    }
}

impl ShadingStrategy for AsciiRamp {
    fn mode(&self) -> ShadeMode {
        ShadeMode::Ascii
    }

    fn classify(&self, sample: ShadeSample) -> ShadeToken {
        match sample {
            ShadeSample::Wall { sight } => {
                let index = Self::ramp_index(sight);
                ShadeToken::glyph(index as u8, ASCII_RAMP[index])
            }
            ShadeSample::Band { row, height } => {
                if is_ceiling_row(row, height) {
                    ShadeToken::glyph(0, ' ')
                } else if Self::floor_closeness(row, height) < FLOOR_NEAR_LIMIT {
                    ShadeToken::glyph(2, FLOOR_NEAR_GLYPH)
                } else {
                    ShadeToken::glyph(1, FLOOR_FAR_GLYPH)
                }
            }
        }
    }
}

/// Background-color distance bands.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorBands;

impl ColorBands {
    /// Wall band for a sight fraction. Bands are half-open `[limit_i, limit_i+1)`;
    /// the last one catches everything from its limit up to (and past) 1.0.
    pub fn wall_band(sight: f32) -> usize {
        let sight = clamp_unit(sight);
        WALL_BAND_LIMITS.iter().take_while(|&&limit| sight >= limit).count()
    }

    /// Ceiling/floor band from the distance to the horizon row, scaled to `[0, 1]`.
    pub fn surface_band(row: u16, height: u16) -> usize {
        if height == 0 {
            return SURFACE_BAND_COLORS.len() - 1;
        }
        let edge = clamp_unit((row as f32 / height as f32 - 0.5).abs() * 2.0);
        let last = SURFACE_BAND_COLORS.len() - 1;
        ((edge * SURFACE_BAND_COLORS.len() as f32) as usize).min(last)
    }
}

impl ShadingStrategy for ColorBands {
    fn mode(&self) -> ShadeMode {
        ShadeMode::Color
    }

    fn classify(&self, sample: ShadeSample) -> ShadeToken {
        match sample {
            ShadeSample::Wall { sight } => {
                let band = Self::wall_band(sight);
                ShadeToken::color(band as u8, WALL_BAND_COLORS[band])
            }
            ShadeSample::Band { row, height } => {
                let band = Self::surface_band(row, height);
                ShadeToken::color(band as u8, SURFACE_BAND_COLORS[band])
            }
        }
    }
}
