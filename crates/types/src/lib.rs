//! Core types module - shared constants and plain data
//!
//! This module defines the numeric conventions used throughout the renderer.
//! Everything here is plain data with no external dependencies, so it can be
//! used from the fixed-point engine, the terminal sink and the binary alike.
//!
//! # Fixed-point scales
//!
//! Values are signed integers carrying an implicit power-of-two scale. The
//! scale is a convention of the computation, never stored in the value:
//!
//! | Quantity | Scale | Constant |
//! |----------|-------|----------|
//! | Sines, cosines, ray directions | 2^14 | [`UNIT`] |
//! | Positions, distances, radii | 2^8 | [`DISTANCE_UNIT`] |
//! | Point-splat renderer (all values) | 2^6 | [`SPLAT_UNIT`] |
//!
//! # Screen
//!
//! A frame is always [`SCREEN_ROWS`] x [`SCREEN_COLS`] glyph bytes. On the wire
//! every row is followed by a line feed and the frame by `ESC [ 23 A`.
//!
//! # Examples
//!
//! ```
//! use tui_torus_types::{RenderMode, Vec3, FRAME_CELLS, UNIT};
//!
//! assert_eq!(FRAME_CELLS, 79 * 23);
//! assert_eq!(RenderMode::from_str("Splat"), Some(RenderMode::Splat));
//!
//! let forward = Vec3::new(0, 0, UNIT);
//! assert_eq!(forward.z, 16384);
//! ```

/// Signed fixed-point scalar. The scale is implicit (see module docs).
pub type Fixed = i32;

/// Screen dimensions (glyph cells)
pub const SCREEN_COLS: usize = 79;
pub const SCREEN_ROWS: usize = 23;
pub const FRAME_CELLS: usize = SCREEN_COLS * SCREEN_ROWS;

/// Bytes per encoded frame: glyphs, one line feed per row, `ESC [ 2 3 A`.
pub const FRAME_BYTES: usize = FRAME_CELLS + SCREEN_ROWS + 5;

/// Rotation/direction scale (2^14)
pub const UNIT_SHIFT: u32 = 14;
pub const UNIT: Fixed = 1 << UNIT_SHIFT;

/// Distance scale (2^8)
pub const DISTANCE_SHIFT: u32 = 8;
pub const DISTANCE_UNIT: Fixed = 1 << DISTANCE_SHIFT;

/// sin(45°) and cos(45°) at [`UNIT`] scale, used to seed the "A" axis.
pub const DIAGONAL: Fixed = 11583;

/// Torus tube radius (r1), in whole distance units
pub const TUBE_RADIUS: Fixed = 1;

/// Torus revolve radius (r2), in whole distance units
pub const REVOLVE_RADIUS: Fixed = 2;

/// Camera distance from the torus centre, in whole distance units
pub const VIEW_DISTANCE: Fixed = 6;

/// Initial marched distance; keeps the first sample off the camera origin.
pub const MARCH_START: Fixed = 512;

/// Marched distance past which a ray is a miss (8 distance units).
pub const MARCH_LIMIT: Fixed = 8 * DISTANCE_UNIT;

/// Signed distance below which a ray is a hit.
pub const HIT_THRESHOLD: Fixed = 2;

/// Brightness ramp, sparsest to densest
pub const BRIGHTNESS_RAMP: &[u8; 12] = b".,-~:;!*=#$@";

/// Glyph for a ray that hits nothing
pub const BLANK: u8 = b' ';

/// Point-splat renderer precision (2^6)
pub const SPLAT_SHIFT: u32 = 6;
pub const SPLAT_UNIT: Fixed = 1 << SPLAT_SHIFT;

/// Default delay between frames (milliseconds)
pub const DEFAULT_FRAME_MS: u64 = 33;

/// A position or direction in fixed point.
///
/// Components share one scale; which one depends on the quantity
/// (positions at [`DISTANCE_UNIT`], directions and light at [`UNIT`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Vec3 {
    pub x: Fixed,
    pub y: Fixed,
    pub z: Fixed,
}

impl Vec3 {
    pub const fn new(x: Fixed, y: Fixed, z: Fixed) -> Self {
        Self { x, y, z }
    }
}

/// Which animation the binary drives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RenderMode {
    /// Sphere-traced torus driven by the CORDIC length engine.
    #[default]
    Raymarch,
    /// Parametric surface samples projected through a z-buffer.
    Splat,
}

impl RenderMode {
    /// Parse render mode from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "raymarch" => Some(RenderMode::Raymarch),
            "splat" => Some(RenderMode::Splat),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            RenderMode::Raymarch => "raymarch",
            RenderMode::Splat => "splat",
        }
    }
}
