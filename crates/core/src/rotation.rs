//! Rotation state and the incremental small-angle updater.
//!
//! Orientation is two angles: "A" tilts the torus toward the viewer, "B" spins
//! it. Both are kept as (sine, cosine) pairs at [`UNIT`] scale together with
//! the four products of the two pairs. After seeding, nothing here calls a
//! trigonometric function or multiplies two state values: every frame each
//! pair is nudged by a first-order rotation.
//!
//! There is no renormalisation. The updater is a pair of integer shears, so
//! `sin^2 + cos^2` wobbles around the unit circle instead of spiralling away;
//! that wobble is part of the animation.

use crate::fixed::shift;
use crate::types::{Fixed, DIAGONAL, UNIT};

/// Per-frame step for the "A" axis and the products it drives (~1/32 rad).
pub const A_STEP_SHIFT: u32 = 5;

/// Per-frame step for the "B" axis and the products it drives (~1/64 rad).
pub const B_STEP_SHIFT: u32 = 6;

/// Advance `(cos, sin)` by roughly `2^-shift` radians.
///
/// The sine update uses the already updated cosine.
#[inline(always)]
pub fn rotate_small_angle(shift_amount: u32, cos: Fixed, sin: Fixed) -> (Fixed, Fixed) {
    let cos = cos - shift(sin, shift_amount);
    let sin = sin + shift(cos, shift_amount);
    (cos, sin)
}

/// Orientation carried from frame to frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationState {
    pub sin_a: Fixed,
    pub cos_a: Fixed,
    pub sin_b: Fixed,
    pub cos_b: Fixed,
    /// sin(A)·sin(B)
    pub sin_a_sin_b: Fixed,
    /// cos(A)·sin(B)
    pub cos_a_sin_b: Fixed,
    /// sin(A)·cos(B)
    pub sin_a_cos_b: Fixed,
    /// cos(A)·cos(B)
    pub cos_a_cos_b: Fixed,
}

impl Default for RotationState {
    fn default() -> Self {
        Self::seed()
    }
}

impl RotationState {
    /// A = 45°, B = 0.
    pub const fn seed() -> Self {
        Self {
            sin_a: DIAGONAL,
            cos_a: DIAGONAL,
            sin_b: 0,
            cos_b: UNIT,
            sin_a_sin_b: 0,
            cos_a_sin_b: 0,
            sin_a_cos_b: DIAGONAL,
            cos_a_cos_b: DIAGONAL,
        }
    }

    /// Advance one frame.
    ///
    /// Order matters: the B-driven steps on the products see the values the
    /// A-driven steps just wrote.
    pub fn advance(&mut self) {
        (self.cos_a, self.sin_a) = rotate_small_angle(A_STEP_SHIFT, self.cos_a, self.sin_a);
        (self.cos_a_sin_b, self.sin_a_sin_b) =
            rotate_small_angle(A_STEP_SHIFT, self.cos_a_sin_b, self.sin_a_sin_b);
        (self.cos_a_cos_b, self.sin_a_cos_b) =
            rotate_small_angle(A_STEP_SHIFT, self.cos_a_cos_b, self.sin_a_cos_b);

        (self.cos_b, self.sin_b) = rotate_small_angle(B_STEP_SHIFT, self.cos_b, self.sin_b);
        (self.cos_a_cos_b, self.cos_a_sin_b) =
            rotate_small_angle(B_STEP_SHIFT, self.cos_a_cos_b, self.cos_a_sin_b);
        (self.sin_a_cos_b, self.sin_a_sin_b) =
            rotate_small_angle(B_STEP_SHIFT, self.sin_a_cos_b, self.sin_a_sin_b);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_angle_step_uses_updated_cosine() {
        let (c, s) = rotate_small_angle(5, UNIT, 0);
        assert_eq!(c, UNIT);
        assert_eq!(s, UNIT >> 5);

        let (c, s) = rotate_small_angle(5, 0, UNIT);
        assert_eq!(c, -(UNIT >> 5));
        assert_eq!(s, UNIT - 16);
    }

    #[test]
    fn seed_matches_documented_values() {
        let s = RotationState::seed();
        assert_eq!((s.sin_b, s.cos_b), (0, 16384));
        assert_eq!((s.sin_a, s.cos_a), (11583, 11583));
        assert_eq!((s.sin_a_cos_b, s.cos_a_cos_b), (11583, 11583));
        assert_eq!((s.sin_a_sin_b, s.cos_a_sin_b), (0, 0));
    }

    #[test]
    fn advance_moves_every_angle() {
        let seed = RotationState::seed();
        let mut s = seed;
        s.advance();
        assert_ne!(s.sin_a, seed.sin_a);
        assert_ne!(s.sin_b, seed.sin_b);
        assert!(s.sin_b > 0);
    }
}
