/// One intersection observation delivered by the host.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct IntersectionEntry {
    /// Whether the observed area crossed the threshold.
    pub is_intersecting: bool,
    /// Visible fraction of the panel area in `[0, 1]`.
    pub ratio: f64,
}

impl IntersectionEntry {
    /// Build an entry from a visible ratio against `threshold`.
    pub fn from_ratio(ratio: f64, threshold: f64) -> Self {
        let ratio = ratio.clamp(0.0, 1.0);
        Self {
            is_intersecting: ratio > 0.0 && ratio >= threshold,
            ratio,
        }
    }
}

/// One-shot entrance flag. Flips to `true` the first time the panel is sufficiently visible
/// and never reverts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EntranceTrigger {
    threshold: f64,
    entered: bool,
}

impl EntranceTrigger {
    /// New trigger for `threshold` (fraction of panel area).
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            entered: false,
        }
    }

    /// Visible-area fraction required to fire.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Feed an observation. Returns `true` only on the call that flips the flag.
    pub fn observe(&mut self, entry: IntersectionEntry) -> bool {
        if self.entered || !entry.is_intersecting {
            return false;
        }
        self.entered = true;
        true
    }

    /// Whether the entrance has fired.
    pub fn entered(&self) -> bool {
        self.entered
    }
}

#[cfg(test)]
#[path = "../../tests/unit/visibility/entrance.rs"]
mod tests;
