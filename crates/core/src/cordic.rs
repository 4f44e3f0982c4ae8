//! CORDIC vector length engine.
//!
//! Rotates a 2-D vector onto the positive x axis using only shifts and adds.
//! After the last micro-rotation `x` holds the vector length times the CORDIC
//! gain (~1.647) and `y` is close to zero. The gain is corrected with a 5/8
//! multiply instead of the exact 0.607, so lengths come out ~3% long.
//!
//! A companion vector rides along: it receives exactly the same sequence of
//! micro-rotations, decided from the primary vector alone. The raymarcher uses
//! this to carry the light direction into the surface-normal frame without
//! ever computing an angle.

use crate::fixed::{five_eighths, shift};
use crate::types::Fixed;

/// Micro-rotations per length estimate. Corrections halve every step, so the
/// estimate has plateaued well within the raymarcher's hit threshold by then.
pub const CORDIC_ITERATIONS: u32 = 8;

/// Estimates the length of a 2-D vector while transporting a companion vector.
pub trait LengthEstimator {
    /// Approximate `|(x, y)|`.
    ///
    /// `companion_x` is replaced with the gain-corrected x component of the
    /// companion vector `(companion_x, companion_y)` after it has been rotated
    /// by the same angle that aligned `(x, y)` with the x axis.
    fn approx_length(
        &self,
        x: Fixed,
        y: Fixed,
        companion_x: &mut Fixed,
        companion_y: Fixed,
    ) -> Fixed;
}

/// Full result of a vectoring pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vectoring {
    /// Gain-corrected length estimate.
    pub length: Fixed,
    /// What is left of the primary y component (ideally zero).
    pub residual: Fixed,
    /// Gain-corrected companion x.
    pub companion_x: Fixed,
    /// Raw companion y after rotation.
    pub companion_y: Fixed,
}

/// Shift-and-add CORDIC in vectoring mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cordic {
    iterations: u32,
}

impl Default for Cordic {
    fn default() -> Self {
        Self::new(CORDIC_ITERATIONS)
    }
}

impl Cordic {
    pub const fn new(iterations: u32) -> Self {
        Self { iterations }
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Rotate `(x, y)` onto the x axis, dragging `(x2, y2)` along.
    pub fn vectorize(
        &self,
        mut x: Fixed,
        mut y: Fixed,
        mut x2: Fixed,
        mut y2: Fixed,
    ) -> Vectoring {
        // Vectoring only converges from the right half-plane.
        if x < 0 {
            x = -x;
            x2 = -x2;
        }

        for i in 0..self.iterations {
            let (px, px2) = (x, x2);
            if y < 0 {
                x -= shift(y, i);
                y += shift(px, i);
                x2 -= shift(y2, i);
                y2 += shift(px2, i);
            } else {
                x += shift(y, i);
                y -= shift(px, i);
                x2 += shift(y2, i);
                y2 -= shift(px2, i);
            }
        }

        Vectoring {
            length: five_eighths(x),
            residual: y,
            companion_x: five_eighths(x2),
            companion_y: y2,
        }
    }
}

impl LengthEstimator for Cordic {
    #[inline]
    fn approx_length(
        &self,
        x: Fixed,
        y: Fixed,
        companion_x: &mut Fixed,
        companion_y: Fixed,
    ) -> Fixed {
        let v = self.vectorize(x, y, *companion_x, companion_y);
        *companion_x = v.companion_x;
        v.length
    }
}

/// [`LengthEstimator::approx_length`] with the default 8-step engine.
#[inline]
pub fn approx_length(x: Fixed, y: Fixed, companion_x: &mut Fixed, companion_y: Fixed) -> Fixed {
    Cordic::default().approx_length(x, y, companion_x, companion_y)
}
