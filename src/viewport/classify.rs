/// Width below which a viewport counts as narrow.
pub const NARROW_BREAKPOINT_PX: f64 = 768.0;

/// Coarse viewport class selecting layer speed constants and layout anchors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewportClass {
    /// Below the breakpoint.
    Narrow,
    /// At or above the breakpoint.
    #[default]
    Wide,
}

impl ViewportClass {
    /// Classify `width` against `breakpoint`. No hysteresis.
    pub fn classify(width: f64, breakpoint: f64) -> Self {
        if width < breakpoint {
            Self::Narrow
        } else {
            Self::Wide
        }
    }

    /// `true` for [`ViewportClass::Narrow`].
    pub fn is_narrow(self) -> bool {
        matches!(self, Self::Narrow)
    }
}

/// `true` when `width` is below the canonical 768px breakpoint.
pub fn is_narrow(width: f64) -> bool {
    ViewportClass::classify(width, NARROW_BREAKPOINT_PX).is_narrow()
}

#[cfg(test)]
#[path = "../../tests/unit/viewport/classify.rs"]
mod tests;
