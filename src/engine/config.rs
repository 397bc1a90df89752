use crate::animation::ease::Ease;
use crate::animation::smooth::Smoothing;
use crate::foundation::error::{SetaliaError, SetaliaResult};
use crate::tracker::progress::ProgressModel;
use crate::viewport::classify::{NARROW_BREAKPOINT_PX, ViewportClass};

/// What happens to progress values outside the active window.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProgressWindow {
    /// Outside `[lo, hi]` the previous target is kept unchanged.
    Freeze {
        /// Lower bound (inclusive).
        lo: f64,
        /// Upper bound (inclusive).
        hi: f64,
    },
    /// Progress is clamped into `[lo, hi]` before mapping.
    Clamp {
        /// Lower bound.
        lo: f64,
        /// Upper bound.
        hi: f64,
    },
}

impl Default for ProgressWindow {
    fn default() -> Self {
        Self::Clamp { lo: -0.2, hi: 1.2 }
    }
}

impl ProgressWindow {
    /// Apply the window. `None` means "freeze at the last value".
    pub fn apply(self, p: f64) -> Option<f64> {
        match self {
            Self::Freeze { lo, hi } => (lo..=hi).contains(&p).then_some(p),
            Self::Clamp { lo, hi } => Some(p.clamp(lo, hi)),
        }
    }

    fn bounds(self) -> (f64, f64) {
        match self {
            Self::Freeze { lo, hi } | Self::Clamp { lo, hi } => (lo, hi),
        }
    }
}

/// Per-layer speed multipliers applied to the base offset.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LayerFactors {
    /// Background drift.
    pub background: f64,
    /// Foreground on narrow viewports, where it dominates the frame.
    pub foreground_narrow: f64,
    /// Foreground on wide viewports, where it is a side decoration.
    pub foreground_wide: f64,
    /// Text counter-motion; applied on wide viewports only.
    pub text: f64,
}

impl LayerFactors {
    /// Foreground factor for the given viewport class.
    pub fn foreground(&self, class: ViewportClass) -> f64 {
        match class {
            ViewportClass::Narrow => self.foreground_narrow,
            ViewportClass::Wide => self.foreground_wide,
        }
    }
}

/// Optional scale/rotation coupled to the foreground translation.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PremiumMotion {
    /// Extra scale per pixel of absolute translation.
    pub scale_per_px: f64,
    /// Rotation in degrees per pixel of signed translation.
    pub rotation_deg_per_px: f64,
}

/// Parameters for one panel's parallax engine.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Progress formulation.
    pub model: ProgressModel,
    /// Out-of-window policy.
    pub window: ProgressWindow,
    /// Pixels of base offset per unit of progress away from center.
    pub amplitude: f64,
    /// Hard limit on the magnitude of every layer offset, in pixels.
    pub max_offset: f64,
    /// Layer speed multipliers.
    pub layers: LayerFactors,
    /// Curve applied symmetrically around progress `0.5`; `None` maps linearly.
    pub easing: Option<Ease>,
    /// Per-frame smoothing.
    pub smoothing: Smoothing,
    /// Width below which the viewport counts as narrow.
    pub narrow_breakpoint: f64,
    /// Fraction of panel area that must be visible to fire the entrance.
    pub entrance_threshold: f64,
    /// Optional scale/rotation coupling for the foreground layer.
    pub premium: Option<PremiumMotion>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::hero()
    }
}

impl EngineConfig {
    /// Accepted entrance threshold range.
    pub const ENTRANCE_THRESHOLD_RANGE: std::ops::RangeInclusive<f64> = 0.2..=0.3;

    /// Full-viewport image panel: background drifts at full base speed, the foreground image
    /// trails it, and the text block counter-moves slightly.
    pub fn hero() -> Self {
        Self {
            model: ProgressModel::Transit,
            window: ProgressWindow::default(),
            amplitude: 100.0,
            max_offset: 120.0,
            layers: LayerFactors {
                background: 1.0,
                foreground_narrow: 0.5,
                foreground_wide: 0.3,
                text: -0.1,
            },
            easing: Some(Ease::OutCubic),
            smoothing: Smoothing::default(),
            narrow_breakpoint: NARROW_BREAKPOINT_PX,
            entrance_threshold: 0.3,
            premium: None,
        }
    }

    /// Split form section: slow background and gently trailing heading text.
    pub fn form_section() -> Self {
        Self {
            model: ProgressModel::CenterDistance,
            layers: LayerFactors {
                background: 0.3,
                foreground_narrow: 0.0,
                foreground_wide: 0.0,
                text: 0.1,
            },
            entrance_threshold: 0.2,
            ..Self::hero()
        }
    }

    /// Hero variant with slight foreground scale and rotation.
    pub fn premium() -> Self {
        Self {
            premium: Some(PremiumMotion {
                scale_per_px: 0.0008,
                rotation_deg_per_px: 0.02,
            }),
            ..Self::hero()
        }
    }

    /// Check every parameter is finite and inside its accepted range.
    pub fn validate(&self) -> SetaliaResult<()> {
        let (lo, hi) = self.window.bounds();
        if !(lo.is_finite() && hi.is_finite() && lo < hi) {
            return Err(SetaliaError::validation(
                "progress window must satisfy lo < hi",
            ));
        }
        if !(self.amplitude.is_finite() && self.amplitude >= 0.0) {
            return Err(SetaliaError::validation("amplitude must be >= 0"));
        }
        if !(self.max_offset.is_finite() && self.max_offset > 0.0) {
            return Err(SetaliaError::validation("max_offset must be > 0"));
        }
        let l = &self.layers;
        for (name, v) in [
            ("background", l.background),
            ("foreground_narrow", l.foreground_narrow),
            ("foreground_wide", l.foreground_wide),
            ("text", l.text),
        ] {
            if !v.is_finite() {
                return Err(SetaliaError::validation(format!(
                    "layer factor '{name}' must be finite"
                )));
            }
        }
        self.smoothing.validate()?;
        if !(self.narrow_breakpoint.is_finite() && self.narrow_breakpoint > 0.0) {
            return Err(SetaliaError::validation("narrow_breakpoint must be > 0"));
        }
        if !Self::ENTRANCE_THRESHOLD_RANGE.contains(&self.entrance_threshold) {
            return Err(SetaliaError::validation(format!(
                "entrance_threshold {} outside [0.2, 0.3]",
                self.entrance_threshold
            )));
        }
        if let Some(pm) = self.premium
            && !(pm.scale_per_px.is_finite() && pm.rotation_deg_per_px.is_finite())
        {
            return Err(SetaliaError::validation("premium motion must be finite"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/config.rs"]
mod tests;
