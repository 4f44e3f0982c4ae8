//! TerminalRenderer: flushes glyph frames to a real terminal.
//!
//! Frames are encoded into a fixed-capacity buffer and written in one call,
//! so steady-state drawing does not allocate.

use std::io::{self, Write};

use anyhow::Result;
use arrayvec::ArrayVec;
use crossterm::{cursor, QueueableCommand};
use tracing::{debug, info};

use crate::core::Frame;
use crate::types::{FRAME_BYTES, SCREEN_COLS, SCREEN_ROWS};

/// Exactly one encoded frame.
pub type FrameBytes = ArrayVec<u8, FRAME_BYTES>;

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    buf: FrameBytes,
    frames: u64,
}

impl TerminalRenderer<io::Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for TerminalRenderer<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            buf: ArrayVec::new(),
            frames: 0,
        }
    }

    /// Frames written so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    /// Write one frame and leave the cursor at its top-left corner.
    pub fn draw(&mut self, frame: &Frame) -> Result<()> {
        self.buf.clear();
        encode_frame_into(frame, &mut self.buf)?;
        self.flush_buf()?;
        self.frames += 1;
        if self.frames == 1 {
            debug!(bytes = self.buf.len(), "first frame written");
        }
        Ok(())
    }

    /// Move the cursor below the last frame so the shell prompt does not
    /// land on top of it.
    pub fn finish(&mut self) -> Result<()> {
        if self.frames > 0 {
            self.out.queue(cursor::MoveDown(SCREEN_ROWS as u16))?;
            self.out.write_all(b"\n")?;
            self.out.flush()?;
        }
        info!(frames = self.frames, "terminal output finished");
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Encode a frame into `out`: rows separated by line feeds, then cursor-up.
pub fn encode_frame_into<W: Write>(frame: &Frame, out: &mut W) -> Result<()> {
    encode_glyphs_into(frame.cells().iter().copied(), out)
}

/// Encode a row-major glyph stream into `out`.
///
/// A line feed follows every [`SCREEN_COLS`] glyphs; after the stream ends the
/// cursor is moved up [`SCREEN_ROWS`] lines.
pub fn encode_glyphs_into<I, W>(glyphs: I, out: &mut W) -> Result<()>
where
    I: IntoIterator<Item = u8>,
    W: Write,
{
    let mut col = 0;
    for glyph in glyphs {
        out.write_all(&[glyph])?;
        col += 1;
        if col == SCREEN_COLS {
            out.write_all(b"\n")?;
            col = 0;
        }
    }
    out.queue(cursor::MoveUp(SCREEN_ROWS as u16))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BLANK, FRAME_CELLS};

    #[test]
    fn encoded_frame_fills_the_buffer_exactly() {
        let mut frame = Frame::new();
        frame.set(0, 0, b'@');
        let mut buf = FrameBytes::new();
        encode_frame_into(&frame, &mut buf).unwrap();
        assert!(buf.is_full());
        assert_eq!(buf[0], b'@');
        assert_eq!(buf[SCREEN_COLS], b'\n');
        assert_eq!(&buf[FRAME_BYTES - 5..], b"\x1b[23A");
    }

    #[test]
    fn glyph_stream_wraps_rows() {
        let mut out = Vec::new();
        encode_glyphs_into(std::iter::repeat(BLANK).take(FRAME_CELLS), &mut out).unwrap();
        let newlines = out.iter().filter(|&&b| b == b'\n').count();
        assert_eq!(newlines, SCREEN_ROWS);
        assert_eq!(out.len(), FRAME_BYTES);
    }

    #[test]
    fn finish_moves_below_the_frame() {
        let mut term = TerminalRenderer::with_writer(Vec::new());
        term.finish().unwrap();
        assert!(term.writer().is_empty());

        term.draw(&Frame::new()).unwrap();
        term.finish().unwrap();
        assert!(term.writer().ends_with(b"\x1b[23B\n"));
        assert_eq!(term.frames(), 1);
    }
}
