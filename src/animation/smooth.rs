use crate::foundation::error::{SetaliaError, SetaliaResult};

/// Linear interpolation between two values.
pub trait Lerp: Sized {
    /// Interpolate from `a` toward `b` by `t`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

/// Per-frame exponential smoothing parameters.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Smoothing {
    /// Fraction of the remaining distance covered each frame.
    pub factor: f64,
    /// Distance below which `current` snaps onto `target`.
    pub epsilon: f64,
}

impl Default for Smoothing {
    fn default() -> Self {
        Self {
            factor: 0.12,
            epsilon: 0.01,
        }
    }
}

impl Smoothing {
    /// Smallest accepted `factor`.
    pub const MIN_FACTOR: f64 = 0.08;
    /// Largest accepted `factor`.
    pub const MAX_FACTOR: f64 = 0.18;

    /// Create validated smoothing parameters.
    pub fn new(factor: f64, epsilon: f64) -> SetaliaResult<Self> {
        let s = Self { factor, epsilon };
        s.validate()?;
        Ok(s)
    }

    /// Check `factor` lies in `[MIN_FACTOR, MAX_FACTOR]` and `epsilon` is positive.
    pub fn validate(&self) -> SetaliaResult<()> {
        if !(Self::MIN_FACTOR..=Self::MAX_FACTOR).contains(&self.factor) {
            return Err(SetaliaError::validation(format!(
                "smoothing factor {} outside [{}, {}]",
                self.factor,
                Self::MIN_FACTOR,
                Self::MAX_FACTOR
            )));
        }
        if !(self.epsilon.is_finite() && self.epsilon > 0.0) {
            return Err(SetaliaError::validation("smoothing epsilon must be > 0"));
        }
        Ok(())
    }

    /// Upper bound on frames needed to converge from a gap of `distance`.
    pub fn frames_to_converge(&self, distance: f64) -> u32 {
        let distance = distance.abs();
        if distance < self.epsilon {
            return 0;
        }
        // gap_n = distance * (1 - factor)^n < epsilon
        let n = (self.epsilon / distance).ln() / (1.0 - self.factor).ln();
        n.ceil().max(0.0) as u32 + 2
    }
}

/// Target/current pair for one animated layer.
///
/// Starts at zero on mount. `target` is rewritten on each measurement; `current` chases it
/// once per frame and is never reset while the panel lives.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MotionState {
    /// Value `current` converges toward.
    pub target: f64,
    /// Value handed to the rendering layer.
    pub current: f64,
}

impl MotionState {
    /// Advance `current` one frame toward `target`. Returns `true` if `current` changed.
    pub fn step(&mut self, smoothing: Smoothing) -> bool {
        if self.current == self.target {
            return false;
        }
        if (self.target - self.current).abs() < smoothing.epsilon {
            self.current = self.target;
            return true;
        }
        self.current = f64::lerp(&self.current, &self.target, smoothing.factor);
        true
    }

    /// `true` once `current` sits exactly on `target`.
    pub fn is_settled(&self) -> bool {
        self.current == self.target
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/smooth.rs"]
mod tests;
