use crate::foundation::error::{SetaliaError, SetaliaResult};
use crate::page::session::{FrameReport, PageSession};

/// Scripted scroll: a linear ramp between two offsets, then idle frames while the smoothing
/// loop settles.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ScrollScript {
    /// Starting scroll offset.
    pub from: f64,
    /// Final scroll offset.
    pub to: f64,
    /// Frames spent ramping from `from` to `to`.
    pub ramp_frames: u32,
    /// Idle frames after the ramp.
    pub settle_frames: u32,
    /// Simulated frame duration.
    pub frame_ms: f64,
}

impl Default for ScrollScript {
    fn default() -> Self {
        Self {
            from: 0.0,
            to: 0.0,
            ramp_frames: 60,
            settle_frames: 60,
            frame_ms: 1000.0 / 60.0,
        }
    }
}

impl ScrollScript {
    /// Ramp from `from` to `to` over `ramp_frames`, then settle.
    pub fn ramp(from: f64, to: f64, ramp_frames: u32, settle_frames: u32) -> Self {
        Self {
            from,
            to,
            ramp_frames,
            settle_frames,
            ..Self::default()
        }
    }

    /// Check offsets and frame duration are usable.
    pub fn validate(&self) -> SetaliaResult<()> {
        if !(self.from.is_finite() && self.to.is_finite()) {
            return Err(SetaliaError::validation("scroll offsets must be finite"));
        }
        if !(self.frame_ms.is_finite() && self.frame_ms > 0.0) {
            return Err(SetaliaError::validation("frame_ms must be > 0"));
        }
        Ok(())
    }

    /// Total frames produced.
    pub fn total_frames(&self) -> u64 {
        u64::from(self.ramp_frames) + u64::from(self.settle_frames)
    }

    /// Scroll offset for ramp frame `i` (1-based; the last ramp frame lands on `to`).
    fn position_at(&self, i: u32) -> f64 {
        if self.ramp_frames == 0 {
            return self.to;
        }
        let t = f64::from(i) / f64::from(self.ramp_frames);
        self.from + (self.to - self.from) * t
    }

    /// Drive `session` through the script, one report per frame.
    #[tracing::instrument(skip(self, session), fields(frames = self.total_frames()))]
    pub fn run(&self, session: &mut PageSession) -> SetaliaResult<Vec<FrameReport>> {
        self.validate()?;
        let mut out = Vec::with_capacity(self.total_frames() as usize);
        session.scroll_to(self.from);
        for i in 1..=self.ramp_frames {
            session.scroll_to(self.position_at(i));
            out.push(session.advance_frame(self.frame_ms));
        }
        if self.ramp_frames == 0 {
            session.scroll_to(self.to);
        }
        for _ in 0..self.settle_frames {
            out.push(session.advance_frame(self.frame_ms));
        }
        Ok(out)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/script.rs"]
mod tests;
