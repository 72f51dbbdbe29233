//! Frame compositor: one ray per column, projected and shaded into a sink.
//!
//! Per frame:
//! 1. ceiling/floor band for every row (so walls can overwrite them)
//! 2. for each column: ray angle -> march -> project -> classify -> wall span
//! 3. flush
//!
//! Columns are independent of one another, so sampling can optionally be
//! spread over the rayon thread pool.

use anyhow::Result;
use rayon::prelude::*;

use crate::core::{march, project, GridMap, Projection, RayHit};
use crate::shade::{ShadeSample, ShadingStrategy};
use crate::sink::FrameSink;
use crate::types::{Pose, RaySettings, ViewSettings};

/// Everything computed for one output column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnSample {
    pub column: u16,
    pub angle: f32,
    pub hit: RayHit,
    pub projection: Projection,
}

/// Angle of the ray through `column`: left edge of the view at column 0.
#[inline]
pub fn ray_angle(view: &ViewSettings, heading: f32, column: u16) -> f32 {
    let width = view.width.max(1) as f32;
    heading - view.fov / 2.0 + (column as f32 / width) * view.fov
}

/// Sample a single column.
pub fn sample_column(
    map: &GridMap,
    pose: &Pose,
    view: &ViewSettings,
    ray: &RaySettings,
    column: u16,
) -> ColumnSample {
    let angle = ray_angle(view, pose.heading, column);
    let hit = march(map, pose.x, pose.y, angle, ray);
    ColumnSample {
        column,
        angle,
        hit,
        projection: project(hit.distance, view.height),
    }
}

#[derive(Debug, Clone)]
pub struct Compositor {
    view: ViewSettings,
    ray: RaySettings,
    parallel: bool,
    scratch: Vec<ColumnSample>,
}

impl Compositor {
    pub fn new(view: ViewSettings, ray: RaySettings) -> Self {
        Self {
            view,
            ray,
            parallel: false,
            scratch: Vec::new(),
        }
    }

    /// Sample columns on the rayon pool instead of inline.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// All columns, left to right.
    pub fn sample_columns(&self, map: &GridMap, pose: &Pose) -> Vec<ColumnSample> {
        (0..self.view.width)
            .map(|column| sample_column(map, pose, &self.view, &self.ray, column))
            .collect()
    }

    /// Same as [`Self::sample_columns`], computed in parallel.
    pub fn sample_columns_par(&self, map: &GridMap, pose: &Pose) -> Vec<ColumnSample> {
        let mut out = Vec::with_capacity(self.view.width as usize);
        par_sample_into(map, pose, &self.view, &self.ray, &mut out);
        out
    }

    /// Render one frame into `sink` and flush it.
    pub fn render(
        &mut self,
        map: &GridMap,
        pose: &Pose,
        strategy: &dyn ShadingStrategy,
        sink: &mut dyn FrameSink,
    ) -> Result<()> {
        let (width, height) = (self.view.width, self.view.height);
        sink.begin_frame(width, height);

        for row in 0..height {
            sink.paint_ceiling_floor_band(row, strategy.classify(ShadeSample::Band { row, height }));
        }

        if self.parallel {
            par_sample_into(map, pose, &self.view, &self.ray, &mut self.scratch);
            for sample in &self.scratch {
                paint_column(sample, &self.view, &self.ray, strategy, sink);
            }
        } else {
            for column in 0..width {
                let sample = sample_column(map, pose, &self.view, &self.ray, column);
                paint_column(&sample, &self.view, &self.ray, strategy, sink);
            }
        }

        sink.flush()
    }
}

fn par_sample_into(
    map: &GridMap,
    pose: &Pose,
    view: &ViewSettings,
    ray: &RaySettings,
    out: &mut Vec<ColumnSample>,
) {
    (0..view.width)
        .into_par_iter()
        .map(|column| sample_column(map, pose, view, ray, column))
        .collect_into_vec(out);
}

fn paint_column(
    sample: &ColumnSample,
    view: &ViewSettings,
    ray: &RaySettings,
    strategy: &dyn ShadingStrategy,
    sink: &mut dyn FrameSink,
) {
    let sight = sample.hit.sight_fraction(ray.max_depth);
    let shade = strategy.classify(ShadeSample::Wall { sight });
    sink.paint_wall_span(sample.column, sample.projection.wall_rows(view.height), shade);
}
