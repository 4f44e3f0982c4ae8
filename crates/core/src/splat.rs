//! Parametric point-splat renderer.
//!
//! A second take on the same torus: instead of marching rays it walks the
//! surface parametrically (tube angle outer, revolve angle inner), projects
//! every sample onto the screen and keeps the nearest one per cell in a depth
//! buffer. Everything runs at 6-bit precision ([`SPLAT_UNIT`]).
//!
//! Unlike [`crate::rotation`], every (cos, sin) pair here is advanced with a
//! plain forward step and then pulled back toward the unit circle with one
//! Newton step of `1/sqrt(c^2 + s^2)`. Without it the forward steps would
//! spiral outward within a few hundred updates.

use crate::fixed::shift;
use crate::frame::Frame;
use crate::shade::glyph_for_level;
use crate::types::{Fixed, FRAME_CELLS, SCREEN_COLS, SPLAT_SHIFT, SPLAT_UNIT};

const P: u32 = SPLAT_SHIFT;

/// Tube radius (R1), unscaled.
const R1: Fixed = 1;
/// Revolve radius (R2) at splat scale.
const R2: Fixed = 2 << P;
/// Viewer distance (K2) at squared splat scale.
const K2: Fixed = 5 << (2 * P);

/// Samples around the tube cross-section.
pub const TUBE_STEPS: usize = 90;
/// Samples around the revolve circle.
pub const RING_STEPS: usize = 324;

/// Depth for an empty cell; any projected sample is nearer.
const FAR: Fixed = 127;

/// Projected screen centre.
const CENTER_X: Fixed = 40;
const CENTER_Y: Fixed = 12;

/// Forward rotation by `step * 2^-shift` radians followed by renormalisation.
pub fn rotate_renormalized(
    cos: Fixed,
    sin: Fixed,
    step: Fixed,
    shift_amount: u32,
) -> (Fixed, Fixed) {
    let c = cos - shift(step * sin, shift_amount);
    let s = sin + shift(step * cos, shift_amount);
    let f = shift((3 << (2 * P)) - c * c - s * s, P + 1);
    (shift(c * f, P), shift(s * f, P))
}

/// Animation angles of the splat renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplatRotation {
    pub sin_a: Fixed,
    pub cos_a: Fixed,
    pub sin_b: Fixed,
    pub cos_b: Fixed,
}

impl Default for SplatRotation {
    fn default() -> Self {
        Self::seed()
    }
}

impl SplatRotation {
    /// A = B = 90°.
    pub const fn seed() -> Self {
        Self {
            sin_a: SPLAT_UNIT,
            cos_a: 0,
            sin_b: SPLAT_UNIT,
            cos_b: 0,
        }
    }

    pub fn advance(&mut self) {
        (self.cos_a, self.sin_a) = rotate_renormalized(self.cos_a, self.sin_a, 5, P - 3);
        (self.cos_b, self.sin_b) = rotate_renormalized(self.cos_b, self.sin_b, 5, P - 2);
    }
}

/// One surface sample after projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Splat {
    x: Fixed,
    y: Fixed,
    depth: Fixed,
    level: Fixed,
}

/// Point-splat torus renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct SplatRenderer;

impl SplatRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render a full frame into `frame`.
    pub fn render_into(&self, rot: &SplatRotation, frame: &mut Frame) {
        let mut depth = [FAR; FRAME_CELLS];
        frame.clear();

        let (mut sin_j, mut cos_j) = (0, SPLAT_UNIT);
        for _ in 0..TUBE_STEPS {
            let (mut sin_i, mut cos_i) = (0, SPLAT_UNIT);
            for _ in 0..RING_STEPS {
                if let Some(s) = project(rot, cos_i, sin_i, cos_j, sin_j) {
                    if s.y > 0 && s.y < 22 && s.x > 0 && s.x <= SCREEN_COLS as Fixed {
                        let (row, col) = (s.y as usize, (s.x - 1) as usize);
                        let o = row * SCREEN_COLS + col;
                        if s.depth < depth[o] {
                            depth[o] = s.depth;
                            frame.set(row, col, glyph_for_level(s.level));
                        }
                    }
                }
                (cos_i, sin_i) = rotate_renormalized(cos_i, sin_i, 5, P - 2);
            }
            (cos_j, sin_j) = rotate_renormalized(cos_j, sin_j, 9, P - 3);
        }
    }
}

/// Project the surface point at revolve angle `i` and tube angle `j`.
///
/// `None` if the point would land behind the viewer.
fn project(
    rot: &SplatRotation,
    cos_i: Fixed,
    sin_i: Fixed,
    cos_j: Fixed,
    sin_j: Fixed,
) -> Option<Splat> {
    let SplatRotation {
        sin_a,
        cos_a,
        sin_b,
        cos_b,
    } = *rot;

    let circle = R1 * cos_j + R2;
    let x1 = shift(cos_i * circle, P);
    let x2 = shift(cos_a * sin_j, P);
    let x3 = shift(sin_i * circle, P);
    let x4 = R1 * x2 - shift(sin_a * x3, P);
    let x5 = shift(sin_a * sin_j, P);
    let depth = ((R1 * x5) << P) + cos_a * x3;

    let ooz = (K2 + depth) / 15;
    if ooz <= 0 {
        return None;
    }
    let x = CENTER_X + 2 * (cos_b * x1 - sin_b * x4) / ooz;
    let y = CENTER_Y + (cos_b * x4 + sin_b * x1) / ooz;

    let x7 = shift(cos_j * sin_i, P);
    let lum =
        -cos_a * x7 - cos_b * (shift(-sin_a * x7, P) + x2) - cos_i * shift(cos_j * sin_b, P);
    let level = shift(shift(lum, P) - x5, P - 3);

    Some(Splat {
        x,
        y,
        depth: shift(depth, P + 5),
        level,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renormalisation_holds_the_unit_circle() {
        let (mut c, mut s) = (SPLAT_UNIT, 0);
        for _ in 0..10_000 {
            (c, s) = rotate_renormalized(c, s, 5, P - 3);
            let r2 = c * c + s * s;
            assert!(r2 > 52 * 52 && r2 < 74 * 74, "({c}, {s})");
        }
    }

    #[test]
    fn seed_frame_draws_a_centred_torus() {
        let mut frame = Frame::new();
        SplatRenderer::new().render_into(&SplatRotation::seed(), &mut frame);
        assert!(frame.lit_cells() > 300);
        assert!(frame.row(0).iter().all(|&c| c == b' '));
        assert!(frame.row(22).iter().all(|&c| c == b' '));
        assert_ne!(frame.get(12, 30), Some(b' '));
    }
}
