use crate::animation::smooth::MotionState;
use crate::engine::config::EngineConfig;
use crate::foundation::core::LayerTransform;
use crate::viewport::classify::ViewportClass;

/// Target offsets for each layer, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LayerTargets {
    /// Background layer.
    pub background: f64,
    /// Foreground/decorative layer.
    pub foreground: f64,
    /// Text block.
    pub text: f64,
}

/// Transforms handed to the rendering layer for one panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LayerTransforms {
    /// Background layer.
    pub background: LayerTransform,
    /// Foreground/decorative layer.
    pub foreground: LayerTransform,
    /// Text block.
    pub text: LayerTransform,
}

/// Map progress to the signed base offset, or `None` to freeze at the previous value.
pub fn base_offset(cfg: &EngineConfig, progress: f64) -> Option<f64> {
    let p = cfg.window.apply(progress)?;
    let shaped = match cfg.easing {
        Some(ease) => ease.centered(p),
        None => p - 0.5,
    };
    Some(clamp_offset(shaped * cfg.amplitude, cfg.max_offset))
}

/// Spread a base offset over the layers.
///
/// Reduced motion forces every target to zero.
pub fn layer_targets(
    cfg: &EngineConfig,
    base: f64,
    class: ViewportClass,
    reduced_motion: bool,
) -> LayerTargets {
    if reduced_motion {
        return LayerTargets::default();
    }
    let l = &cfg.layers;
    let text = match class {
        ViewportClass::Wide => base * l.text,
        ViewportClass::Narrow => 0.0,
    };
    LayerTargets {
        background: clamp_offset(base * l.background, cfg.max_offset),
        foreground: clamp_offset(base * l.foreground(class), cfg.max_offset),
        text: clamp_offset(text, cfg.max_offset),
    }
}

fn clamp_offset(v: f64, max: f64) -> f64 {
    v.clamp(-max, max)
}

/// Parallax state for one panel: last base offset plus a smoothed motion state per layer.
#[derive(Clone, Debug)]
pub struct ParallaxEngine {
    config: EngineConfig,
    class: ViewportClass,
    reduced_motion: bool,
    base: f64,
    background: MotionState,
    foreground: MotionState,
    text: MotionState,
}

impl ParallaxEngine {
    /// Fresh engine with every layer at rest on zero.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            class: ViewportClass::default(),
            reduced_motion: false,
            base: 0.0,
            background: MotionState::default(),
            foreground: MotionState::default(),
            text: MotionState::default(),
        }
    }

    /// Engine parameters.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Feed a new progress measurement. Returns `false` when the window froze the targets.
    pub fn retarget(&mut self, progress: f64) -> bool {
        let Some(base) = base_offset(&self.config, progress) else {
            return false;
        };
        self.base = base;
        self.apply_targets();
        true
    }

    /// Switch speed constants for a new viewport class.
    pub fn set_viewport_class(&mut self, class: ViewportClass) {
        self.class = class;
        self.apply_targets();
    }

    /// Toggle the reduced-motion preference.
    pub fn set_reduced_motion(&mut self, reduced: bool) {
        self.reduced_motion = reduced;
        self.apply_targets();
    }

    fn apply_targets(&mut self) {
        let t = layer_targets(&self.config, self.base, self.class, self.reduced_motion);
        self.background.target = t.background;
        self.foreground.target = t.foreground;
        self.text.target = t.text;
    }

    /// Advance every layer one smoothing frame. Returns `true` if anything moved.
    pub fn tick(&mut self) -> bool {
        let s = self.config.smoothing;
        let a = self.background.step(s);
        let b = self.foreground.step(s);
        let c = self.text.step(s);
        a || b || c
    }

    /// `true` when every layer has converged.
    pub fn is_settled(&self) -> bool {
        self.background.is_settled() && self.foreground.is_settled() && self.text.is_settled()
    }

    /// Current viewport class.
    pub fn viewport_class(&self) -> ViewportClass {
        self.class
    }

    /// Whether reduced motion is active.
    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    /// Last unfrozen base offset.
    pub fn base(&self) -> f64 {
        self.base
    }

    /// Current layer targets.
    pub fn targets(&self) -> LayerTargets {
        LayerTargets {
            background: self.background.target,
            foreground: self.foreground.target,
            text: self.text.target,
        }
    }

    /// Current (smoothed) layer values.
    pub fn current(&self) -> LayerTargets {
        LayerTargets {
            background: self.background.current,
            foreground: self.foreground.current,
            text: self.text.current,
        }
    }

    /// Smoothed offsets as render transforms.
    pub fn transforms(&self) -> LayerTransforms {
        let fg = self.foreground.current;
        let foreground = match self.config.premium {
            Some(pm) => LayerTransform {
                translate_y: fg,
                scale: 1.0 + fg.abs() * pm.scale_per_px,
                rotation_deg: fg * pm.rotation_deg_per_px,
            },
            None => LayerTransform::translate(fg),
        };
        LayerTransforms {
            background: LayerTransform::translate(self.background.current),
            foreground,
            text: LayerTransform::translate(self.text.current),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/offsets.rs"]
mod tests;
