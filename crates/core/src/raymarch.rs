//! Sphere-tracing raymarcher.
//!
//! Every screen cell gets a ray from the camera. The ray directions are not
//! computed per cell: each frame derives a starting direction plus per-column
//! and per-row increments from the [`RotationState`], and the iterator walks
//! them with additions only.
//!
//! Along a ray the marcher evaluates the torus distance field and steps by the
//! returned distance until the surface is within [`HIT_THRESHOLD`] or the ray
//! has travelled past [`MARCH_LIMIT`]. There is no separate iteration cap.

use crate::cordic::{Cordic, LengthEstimator};
use crate::fixed::{shift, three_over};
use crate::frame::Frame;
use crate::rotation::RotationState;
use crate::shade::glyph_for_light;
use crate::torus::Torus;
use crate::types::{
    Fixed, Vec3, BLANK, FRAME_CELLS, HIT_THRESHOLD, MARCH_LIMIT, MARCH_START, SCREEN_COLS,
    SCREEN_ROWS, UNIT_SHIFT,
};

/// Shift from [`crate::types::UNIT`] direction scale to the camera origin offset.
const ORIGIN_SHIFT: u32 = 6;

/// Shift from direction scale to the per-cell near-plane offset.
const NEAR_SHIFT: u32 = 5;

/// Shift from [`crate::types::UNIT`] scale to the light vector scale.
const LIGHT_SHIFT: u32 = 2;

/// Result of tracing one ray.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RayOutcome {
    Miss,
    /// `light` is the light direction projected on the surface normal.
    Hit { light: Fixed },
}

impl RayOutcome {
    pub fn is_hit(&self) -> bool {
        matches!(self, RayOutcome::Hit { .. })
    }

    pub fn glyph(&self) -> u8 {
        match *self {
            RayOutcome::Miss => BLANK,
            RayOutcome::Hit { light } => glyph_for_light(light),
        }
    }
}

/// Per-frame camera quantities derived from the rotation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSetup {
    /// Camera position.
    pub origin: Vec3,
    /// Light direction (already rotated into the object frame).
    pub light: Vec3,
    /// Added to the ray direction for every column (`y` is subtracted).
    pub col_step: Vec3,
    /// Added to the row's (y, z) base for every row.
    pub row_step: (Fixed, Fixed),
    /// Row base for the top row.
    pub row_base: (Fixed, Fixed),
    /// Column-independent part of the leftmost ray direction.
    pub left_edge: Vec3,
}

impl FrameSetup {
    pub fn new(state: &RotationState, view_distance: Fixed) -> Self {
        let s = state;
        let origin = Vec3::new(
            shift(view_distance * s.sin_b, ORIGIN_SHIFT),
            shift(view_distance * s.sin_a_cos_b, ORIGIN_SHIFT),
            shift(-view_distance * s.cos_a_cos_b, ORIGIN_SHIFT),
        );
        let light = Vec3::new(
            shift(s.sin_b, LIGHT_SHIFT),
            shift(s.sin_a_cos_b - s.cos_a, LIGHT_SHIFT),
            shift(-s.cos_a_cos_b - s.sin_a, LIGHT_SHIFT),
        );

        // Screen spans ~3/128 per column and ~3/64 per row (terminal cells are
        // about twice as tall as wide), starting half a screen up and left.
        let col_step = Vec3::new(
            three_over(s.cos_b, 7),
            three_over(s.sin_a_sin_b, 7),
            three_over(s.cos_a_sin_b, 7),
        );
        let row_step = (three_over(s.cos_a, 6), three_over(s.sin_a, 6));
        let row_base = (
            -(shift(s.cos_a, 1) + shift(s.cos_a, 4)),
            -(shift(s.sin_a, 1) + shift(s.sin_a, 4)),
        );
        let left_edge = Vec3::new(
            shift(s.cos_b, 4) - s.cos_b - s.sin_b,
            -(shift(s.sin_a_sin_b, 4) - s.sin_a_sin_b) - s.sin_a_cos_b,
            shift(s.cos_a_sin_b, 4) - s.cos_a_sin_b + s.cos_a_cos_b,
        );

        Self {
            origin,
            light,
            col_step,
            row_step,
            row_base,
            left_edge,
        }
    }

    /// Direction of the leftmost ray of a row with base `(y, z)`.
    fn row_start(&self, (y, z): (Fixed, Fixed)) -> Vec3 {
        Vec3::new(self.left_edge.x, y + self.left_edge.y, z + self.left_edge.z)
    }

    fn next_column(&self, dir: Vec3) -> Vec3 {
        Vec3::new(
            dir.x + self.col_step.x,
            dir.y - self.col_step.y,
            dir.z + self.col_step.z,
        )
    }
}

/// Sphere tracer over a torus distance field.
#[derive(Debug, Clone, Copy, Default)]
pub struct Raymarcher<E = Cordic> {
    torus: Torus,
    engine: E,
}

impl<E: LengthEstimator> Raymarcher<E> {
    pub fn new(torus: Torus, engine: E) -> Self {
        Self { torus, engine }
    }

    pub fn torus(&self) -> &Torus {
        &self.torus
    }

    /// March one ray.
    ///
    /// `origin` is at distance scale, `direction` at [`crate::types::UNIT`]
    /// scale, `light` at the scale its glyph is read at.
    pub fn trace(&self, origin: Vec3, direction: Vec3, light: Vec3) -> RayOutcome {
        let mut p = origin;
        let mut t = MARCH_START;
        loop {
            let sample = self.torus.sample(&self.engine, p, light);
            let d = sample.distance;
            t += d;

            if t > MARCH_LIMIT {
                return RayOutcome::Miss;
            }
            if d < HIT_THRESHOLD {
                return RayOutcome::Hit {
                    light: sample.light,
                };
            }

            p.x += shift(d * direction.x, UNIT_SHIFT);
            p.y += shift(d * direction.y, UNIT_SHIFT);
            p.z += shift(d * direction.z, UNIT_SHIFT);
        }
    }

    /// Lazily trace every cell of a frame, row-major.
    ///
    /// The iterator yields exactly [`FRAME_CELLS`] glyphs; call again for a
    /// fresh pass.
    pub fn glyphs(&self, state: &RotationState) -> Glyphs<'_, E> {
        let setup = FrameSetup::new(state, self.torus.view_distance);
        Glyphs {
            marcher: self,
            dir: setup.row_start(setup.row_base),
            row_base: setup.row_base,
            setup,
            row: 0,
            col: 0,
        }
    }

    /// Render a full frame into `frame`.
    pub fn render_into(&self, state: &RotationState, frame: &mut Frame) {
        frame.fill_from(self.glyphs(state));
    }
}

/// Row-major glyph stream for one frame. See [`Raymarcher::glyphs`].
pub struct Glyphs<'a, E> {
    marcher: &'a Raymarcher<E>,
    setup: FrameSetup,
    row: usize,
    col: usize,
    row_base: (Fixed, Fixed),
    dir: Vec3,
}

impl<E: LengthEstimator> Glyphs<'_, E> {
    fn remaining(&self) -> usize {
        FRAME_CELLS - (self.row * SCREEN_COLS + self.col).min(FRAME_CELLS)
    }
}

impl<E: LengthEstimator> Iterator for Glyphs<'_, E> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.row >= SCREEN_ROWS {
            return None;
        }

        let dir = self.dir;
        let origin = Vec3::new(
            self.setup.origin.x + shift(dir.x, NEAR_SHIFT),
            self.setup.origin.y + shift(dir.y, NEAR_SHIFT),
            self.setup.origin.z + shift(dir.z, NEAR_SHIFT),
        );
        let glyph = self.marcher.trace(origin, dir, self.setup.light).glyph();

        self.col += 1;
        if self.col == SCREEN_COLS {
            self.col = 0;
            self.row += 1;
            self.row_base.0 += self.setup.row_step.0;
            self.row_base.1 += self.setup.row_step.1;
            self.dir = self.setup.row_start(self.row_base);
        } else {
            self.dir = self.setup.next_column(dir);
        }

        Some(glyph)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl<E: LengthEstimator> ExactSizeIterator for Glyphs<'_, E> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::UNIT;

    #[test]
    fn seed_setup_places_camera_behind_the_torus() {
        let setup = FrameSetup::new(&RotationState::seed(), 6);
        assert_eq!(setup.origin.x, 0);
        assert_eq!(setup.origin.y, (6 * 11583) >> 6);
        assert_eq!(setup.origin.z, (-6 * 11583) >> 6);
    }

    #[test]
    fn glyph_stream_is_exactly_one_frame() {
        let marcher = Raymarcher::<Cordic>::default();
        let state = RotationState::seed();
        let mut glyphs = marcher.glyphs(&state);
        assert_eq!(glyphs.len(), FRAME_CELLS);
        glyphs.next();
        assert_eq!(glyphs.len(), FRAME_CELLS - 1);
        assert_eq!(glyphs.count(), FRAME_CELLS - 1);
    }

    #[test]
    fn escaping_ray_misses() {
        let marcher = Raymarcher::<Cordic>::default();
        let out = marcher.trace(
            Vec3::new(-1536, 0, 0),
            Vec3::new(-UNIT, 0, 0),
            Vec3::new(0, 0, -4096),
        );
        assert_eq!(out, RayOutcome::Miss);
        assert_eq!(out.glyph(), BLANK);
    }
}
