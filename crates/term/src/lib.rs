//! Terminal output for the torus renderer.
//!
//! The core produces glyph frames; this crate turns them into the byte stream
//! the terminal expects and writes it out. Each frame is 23 rows of 79
//! glyphs, every row terminated by a line feed, followed by `ESC [ 23 A` so
//! the next frame overwrites this one in place.
//!
//! - [`renderer`]: byte encoding and the stdout sink
//! - [`pacer`]: frame timing

pub mod pacer;
pub mod renderer;

pub use tui_torus_core as core;
pub use tui_torus_types as types;

pub use pacer::FramePacer;
pub use renderer::{encode_frame_into, encode_glyphs_into, FrameBytes, TerminalRenderer};
