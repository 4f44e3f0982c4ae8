//! Brightness ramp lookup.

use crate::fixed::shift;
use crate::types::{Fixed, BRIGHTNESS_RAMP};

/// Shift that turns a transported light value into a ramp level.
pub const LIGHT_LEVEL_SHIFT: u32 = 9;

/// Ramp glyph for `level`, clamped into `0..=11`.
#[inline]
pub fn glyph_for_level(level: Fixed) -> u8 {
    let last = BRIGHTNESS_RAMP.len() as Fixed - 1;
    BRIGHTNESS_RAMP[level.clamp(0, last) as usize]
}

/// Ramp glyph for the light component returned by a raymarch hit.
#[inline]
pub fn glyph_for_light(light: Fixed) -> u8 {
    glyph_for_level(shift(light, LIGHT_LEVEL_SHIFT))
}
