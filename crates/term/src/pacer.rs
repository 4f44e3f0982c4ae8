/// Decides when the next frame is due.
///
/// Frames are spaced at least `frame_ms` apart, measured from the start of the
/// previous frame. A late frame is drawn immediately; missed frames are not
/// made up.
#[derive(Debug, Clone)]
pub struct FramePacer {
    frame_ms: u64,
    last_render_ms: u64,
    has_rendered: bool,
}

impl FramePacer {
    pub fn new(frame_ms: u64) -> Self {
        Self {
            frame_ms,
            last_render_ms: 0,
            has_rendered: false,
        }
    }

    pub fn frame_ms(&self) -> u64 {
        self.frame_ms
    }

    /// Decide whether to render a frame at `now_ms`, recording it if so.
    ///
    /// - The first call always renders.
    /// - With `frame_ms == 0` every call renders.
    pub fn should_render(&mut self, now_ms: u64) -> bool {
        if !self.has_rendered || now_ms.saturating_sub(self.last_render_ms) >= self.frame_ms {
            self.has_rendered = true;
            self.last_render_ms = now_ms;
            return true;
        }
        false
    }

    /// Milliseconds until the next frame is due (0 if it already is).
    pub fn until_due_ms(&self, now_ms: u64) -> u64 {
        if !self.has_rendered {
            return 0;
        }
        (self.last_render_ms + self.frame_ms).saturating_sub(now_ms)
    }
}
