use crate::foundation::core::ScrollSample;

/// How a [`ScrollSample`] is turned into a progress scalar.
///
/// Both models read `0.5` when the panel center sits on the viewport center.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressModel {
    /// `(vh - top) / (vh + h)`: `0` entering at the bottom edge, `1` fully exited upward.
    #[default]
    Transit,
    /// `1 - (top + h/2) / vh`.
    ///
    /// Measures the panel center against the viewport center, normalized by the viewport
    /// height only, so tall panels travel faster than under [`ProgressModel::Transit`].
    CenterDistance,
}

impl ProgressModel {
    /// Compute progress, or `None` when the geometry cannot produce a finite value.
    pub fn progress(self, s: ScrollSample) -> Option<f64> {
        let p = match self {
            Self::Transit => {
                let denom = s.viewport_height + s.rect_height;
                if denom <= 0.0 {
                    return None;
                }
                (s.viewport_height - s.rect_top) / denom
            }
            Self::CenterDistance => {
                if s.viewport_height <= 0.0 {
                    return None;
                }
                let center = s.rect_top + s.rect_height / 2.0;
                1.0 - center / s.viewport_height
            }
        };
        p.is_finite().then_some(p)
    }
}

/// Coalesces scroll notifications into at most one measurement per animation frame.
#[derive(Clone, Debug, Default)]
pub struct ScrollTracker {
    model: ProgressModel,
    frame_pending: bool,
    last_progress: Option<f64>,
    measurements: u64,
}

impl ScrollTracker {
    /// Create an idle tracker using `model`.
    pub fn new(model: ProgressModel) -> Self {
        Self {
            model,
            ..Self::default()
        }
    }

    /// Note a scroll event. Returns `true` when the caller must schedule a measurement frame;
    /// `false` while one is already pending.
    pub fn schedule(&mut self) -> bool {
        if self.frame_pending {
            return false;
        }
        self.frame_pending = true;
        true
    }

    /// `true` while a measurement frame is outstanding.
    pub fn is_pending(&self) -> bool {
        self.frame_pending
    }

    /// Run the deferred measurement. `None` geometry (panel not attached) skips the tick.
    pub fn on_frame(&mut self, sample: Option<ScrollSample>) -> Option<f64> {
        self.frame_pending = false;
        let Some(sample) = sample else {
            tracing::trace!("panel geometry unavailable, skipping measurement");
            return None;
        };
        let p = self.model.progress(sample)?;
        self.measurements += 1;
        self.last_progress = Some(p);
        Some(p)
    }

    /// Drop any pending measurement.
    pub fn cancel(&mut self) {
        self.frame_pending = false;
    }

    /// Most recent measured progress.
    pub fn last_progress(&self) -> Option<f64> {
        self.last_progress
    }

    /// Number of completed measurements.
    pub fn measurements(&self) -> u64 {
        self.measurements
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tracker/progress.rs"]
mod tests;
