//! Projector - turns a wall distance into the rows a wall occupies
//!
//! The eye sits at the horizon, so a wall shrinks symmetrically toward the
//! middle row as it gets further away.

use std::ops::Range;

/// Distances are floored to this before dividing.
pub const MIN_DISTANCE: f32 = 1e-3;

/// Vertical split of one output column.
///
/// Rows `< ceiling` show ceiling, rows in `(ceiling, floor]` show wall and rows
/// `> floor` show floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Projection {
    pub ceiling: u16,
    pub floor: u16,
}

impl Projection {
    /// Rows covered by wall, clipped to the screen.
    pub fn wall_rows(&self, height: u16) -> Range<u16> {
        let start = self.ceiling.saturating_add(1).min(height);
        let end = self.floor.saturating_add(1).min(height);
        start..end.max(start)
    }
}

/// Project `distance` onto a column `height` rows tall.
pub fn project(distance: f32, height: u16) -> Projection {
    let distance = if distance.is_nan() {
        MIN_DISTANCE
    } else {
        distance.max(MIN_DISTANCE)
    };

    let h = height as f32;
    let ceiling = (h / 2.0 - h / distance).max(0.0) as u16;
    Projection {
        ceiling,
        floor: height - ceiling,
    }
}
