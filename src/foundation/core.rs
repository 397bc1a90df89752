use crate::foundation::error::{SetaliaError, SetaliaResult};

pub use kurbo::{Affine, Vec2};

/// Stable identifier of a mounted panel within one page.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct PanelId(pub u32);

/// Viewport dimensions in logical pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Width in logical pixels.
    pub width: f64,
    /// Height in logical pixels.
    pub height: f64,
}

impl Viewport {
    /// Create a validated viewport with finite, positive dimensions.
    pub fn new(width: f64, height: f64) -> SetaliaResult<Self> {
        if !(width.is_finite() && width > 0.0) {
            return Err(SetaliaError::validation("Viewport width must be > 0"));
        }
        if !(height.is_finite() && height > 0.0) {
            return Err(SetaliaError::validation("Viewport height must be > 0"));
        }
        Ok(Self { width, height })
    }
}

/// Panel bounding box relative to the viewport top, as reported by layout.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PanelRect {
    /// Distance from the viewport top to the panel top (negative once scrolled past).
    pub top: f64,
    /// Panel height.
    pub height: f64,
}

/// Geometry captured synchronously at measurement time. Never persisted.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollSample {
    /// Panel top relative to the viewport top.
    pub rect_top: f64,
    /// Panel height.
    pub rect_height: f64,
    /// Viewport height.
    pub viewport_height: f64,
}

impl ScrollSample {
    /// Combine a layout rect with the current viewport height.
    pub fn capture(rect: PanelRect, viewport_height: f64) -> Self {
        Self {
            rect_top: rect.top,
            rect_height: rect.height,
            viewport_height,
        }
    }
}

/// Straight-alpha RGBA8 color used for fallback fills.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha.
    pub a: u8,
}

impl Rgba8 {
    /// Opaque color from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Fill used when a background image fails to load.
    pub const BLACK_SILK: Self = Self::rgb(12, 12, 14);
}

/// Per-layer transform handed to the rendering layer.
///
/// Translation is vertical only; scale and rotation stay at identity unless the premium
/// coupling is configured.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LayerTransform {
    /// Vertical translation in pixels.
    pub translate_y: f64,
    /// Uniform scale, `1.0` for none.
    pub scale: f64,
    /// Rotation in degrees.
    pub rotation_deg: f64,
}

impl Default for LayerTransform {
    fn default() -> Self {
        Self {
            translate_y: 0.0,
            scale: 1.0,
            rotation_deg: 0.0,
        }
    }
}

impl LayerTransform {
    /// Pure vertical translation.
    pub fn translate(translate_y: f64) -> Self {
        Self {
            translate_y,
            ..Self::default()
        }
    }

    /// Convert to an affine matrix pivoting around `anchor` (layer-local).
    pub fn to_affine(self, anchor: Vec2) -> Affine {
        let t_translate = Affine::translate(Vec2::new(0.0, self.translate_y));
        let t_anchor = Affine::translate(anchor);
        let t_unanchor = Affine::translate(-anchor);
        let t_rotate = Affine::rotate(self.rotation_deg.to_radians());
        let t_scale = Affine::scale(self.scale);

        // T(translate) * T(anchor) * R(rot) * S(scale) * T(-anchor)
        t_translate * t_anchor * t_rotate * t_scale * t_unanchor
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
