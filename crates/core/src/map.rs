//! Grid map - the static tile layout the player walks in
//!
//! Tiles are stored in a flat, row-major vector (`row * width + col`).
//! Coordinates: `col` grows left to right, `row` grows along `+y`.
//! The map is immutable once built.

use thiserror::Error;

use crate::types::{Tile, TileKind};

/// The 20x20 arena: a wall ring around an open floor.
const DEFAULT_ARENA: [&str; 20] = [
    "####################",
    "#..................#",
    "#..................#",
    "#..................#",
    "#..................#",
    "#..................#",
    "#..................#",
    "#..................#",
    "#..................#",
    "#..................#",
    "#..................#",
    "#..................#",
    "#..................#",
    "#..................#",
    "#..................#",
    "#..................#",
    "#..................#",
    "#..................#",
    "#..................#",
    "####################",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MapError {
    #[error("map must have a non-zero size, got {width}x{height}")]
    Empty { width: usize, height: usize },
    #[error("map declares {width}x{height} = {expected} tiles but {actual} were given")]
    LengthMismatch {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },
    #[error("map row {row} has {actual} tiles, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[error("unknown map glyph {glyph:?} at row {row}, column {col}")]
    UnknownGlyph { glyph: char, row: usize, col: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridMap {
    width: usize,
    height: usize,
    cells: Vec<Tile>,
}

impl GridMap {
    /// Build a map from row-major tiles.
    pub fn new(width: usize, height: usize, cells: Vec<Tile>) -> Result<Self, MapError> {
        if width == 0 || height == 0 {
            return Err(MapError::Empty { width, height });
        }
        let expected = width * height;
        if cells.len() != expected {
            return Err(MapError::LengthMismatch {
                width,
                height,
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Parse a textual layout, one string per row (`#` wall, `.` open).
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, MapError> {
        let height = rows.len();
        let width = rows.first().map(|r| r.as_ref().chars().count()).unwrap_or(0);
        if width == 0 || height == 0 {
            return Err(MapError::Empty { width, height });
        }

        let mut cells = Vec::with_capacity(width * height);
        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            let len = line.chars().count();
            if len != width {
                return Err(MapError::RaggedRow {
                    row,
                    expected: width,
                    actual: len,
                });
            }
            for (col, glyph) in line.chars().enumerate() {
                let tile =
                    Tile::from_glyph(glyph).ok_or(MapError::UnknownGlyph { glyph, row, col })?;
                cells.push(tile);
            }
        }

        Self::new(width, height, cells)
    }

    /// The built-in 20x20 walled arena.
    pub fn default_arena() -> Self {
        let cells = DEFAULT_ARENA
            .iter()
            .flat_map(|row| row.chars())
            .map(|glyph| Tile::from_glyph(glyph).unwrap_or(Tile::Wall))
            .collect();
        Self {
            width: DEFAULT_ARENA[0].len(),
            height: DEFAULT_ARENA.len(),
            cells,
        }
    }

    /// Rows of the built-in arena, for configuration defaults.
    pub fn default_arena_rows() -> Vec<String> {
        DEFAULT_ARENA.iter().map(|r| r.to_string()).collect()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cells(&self) -> &[Tile] {
        &self.cells
    }

    #[inline(always)]
    fn index(&self, col: i32, row: i32) -> Option<usize> {
        if col < 0 || row < 0 || col as usize >= self.width || row as usize >= self.height {
            return None;
        }
        Some(row as usize * self.width + col as usize)
    }

    /// Bounds-checked tile query. Never panics.
    #[inline]
    pub fn tile_kind(&self, col: i32, row: i32) -> TileKind {
        match self.index(col, row) {
            Some(i) => self.cells[i].into(),
            None => TileKind::OutOfBounds,
        }
    }

    /// Is the tile containing the real-valued point `(x, y)` a wall or off the map?
    pub fn is_blocking(&self, x: f32, y: f32) -> bool {
        if !x.is_finite() || !y.is_finite() {
            return true;
        }
        self.tile_kind(x.floor() as i32, y.floor() as i32)
            .is_blocking()
    }
}

impl Default for GridMap {
    fn default() -> Self {
        Self::default_arena()
    }
}
