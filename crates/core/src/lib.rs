//! Core rendering engine - pure, deterministic, integer-only
//!
//! This crate renders a rotating torus as ASCII art using nothing but
//! small-integer fixed-point arithmetic. It has **zero dependencies** on
//! terminals or I/O:
//!
//! - **Deterministic**: the same rotation state always yields the same frame
//! - **No floating point**: shifts and adds, a handful of multiplies
//! - **Allocation-free**: frames are fixed-size and refilled in place
//!
//! # Module Structure
//!
//! - [`fixed`]: shift-based scaling primitives
//! - [`cordic`]: CORDIC length engine with a transported companion vector
//! - [`rotation`]: rotation state and the small-angle updater
//! - [`torus`]: approximate signed distance field of the torus
//! - [`raymarch`]: sphere tracer and the lazy per-frame glyph stream
//! - [`shade`]: brightness ramp lookup
//! - [`frame`]: fixed-size glyph framebuffer
//! - [`splat`]: parametric point-splat renderer (alternate animation)
//! - [`scene`]: the render/advance surface driven by the frame loop
//!
//! # Example
//!
//! ```
//! use tui_torus_core::{Frame, RaymarchScene, Scene};
//!
//! let mut scene: RaymarchScene = RaymarchScene::default();
//! let mut frame = Frame::new();
//!
//! scene.render_into(&mut frame);
//! assert!(frame.lit_cells() > 0);
//!
//! scene.advance();
//! ```

pub mod cordic;
pub mod fixed;
pub mod frame;
pub mod raymarch;
pub mod rotation;
pub mod scene;
pub mod shade;
pub mod splat;
pub mod torus;

pub use tui_torus_types as types;

// Re-export commonly used types for convenience
pub use cordic::{approx_length, Cordic, LengthEstimator, Vectoring};
pub use frame::Frame;
pub use raymarch::{FrameSetup, Glyphs, RayOutcome, Raymarcher};
pub use rotation::{rotate_small_angle, RotationState};
pub use scene::{RaymarchScene, Scene, SplatScene};
pub use shade::{glyph_for_level, glyph_for_light};
pub use splat::{SplatRenderer, SplatRotation};
pub use torus::{DistanceSample, Torus};
