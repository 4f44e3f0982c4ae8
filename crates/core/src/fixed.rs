//! Fixed-point primitives.
//!
//! All scaling is done with arithmetic shifts. `>>` on a signed integer rounds
//! toward negative infinity, which every caller relies on: the rendered
//! output is defined in terms of that rounding.
//!
//! No overflow checking happens here. The scales in [`crate::types`] keep every
//! intermediate product of the renderer well inside `i32`.

use crate::types::Fixed;

/// Divide by `2^n`, rounding toward negative infinity.
#[inline(always)]
pub fn shift(value: Fixed, n: u32) -> Fixed {
    value >> n
}

/// `value * 5/8`, the cheap stand-in for the CORDIC gain correction (1/1.647).
#[inline(always)]
pub fn five_eighths(value: Fixed) -> Fixed {
    shift(value, 1) + shift(value, 3)
}

/// `value * 3/2^n` as the sum of two shifts (`value>>(n-1) + value>>n`).
///
/// `n` must be at least 1.
#[inline(always)]
pub fn three_over(value: Fixed, n: u32) -> Fixed {
    shift(value, n) + shift(value, n - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_rounds_toward_negative_infinity() {
        assert_eq!(shift(7, 1), 3);
        assert_eq!(shift(-7, 1), -4);
        assert_eq!(shift(-1, 5), -1);
        assert_eq!(shift(0, 9), 0);
    }

    #[test]
    fn five_eighths_matches_rational() {
        assert_eq!(five_eighths(800), 500);
        assert_eq!(five_eighths(16384), 10240);
        // Each shift floors independently.
        assert_eq!(five_eighths(-9), -5 + -2);
    }

    #[test]
    fn three_over_sums_adjacent_shifts() {
        assert_eq!(three_over(16384, 6), 768);
        assert_eq!(three_over(16384, 7), 384);
        assert_eq!(three_over(-64, 5), -6);
    }
}
