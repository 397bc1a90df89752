use crate::foundation::core::Rgba8;

/// Image-bearing layers of a panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageLayer {
    /// Full-bleed background.
    Background,
    /// Decorative foreground image.
    Foreground,
}

/// Load state of one image slot. Failed slots are never retried.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageState {
    /// Requested, no outcome yet.
    #[default]
    Pending,
    /// Decoded and displayed.
    Loaded,
    /// Failed; a fallback is shown instead.
    Failed,
}

/// Visual substitute for a failed image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ImageFallback {
    /// Paint the layer with a solid color.
    Fill {
        /// Fill color.
        color: Rgba8,
    },
    /// Hide the element entirely.
    Hidden,
}

/// One image reference plus its load state.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ImageSlot {
    /// Source path or URL.
    pub source: String,
    /// Current state.
    pub state: ImageState,
}

impl ImageSlot {
    fn new(source: &str) -> Self {
        Self {
            source: source.to_owned(),
            state: ImageState::Pending,
        }
    }
}

/// Background and optional foreground images of a panel.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PanelImagery {
    /// Background image.
    pub background: ImageSlot,
    /// Foreground image, if the panel has one.
    pub foreground: Option<ImageSlot>,
}

impl PanelImagery {
    /// Slots for the given sources, all pending.
    pub fn new(background: &str, foreground: Option<&str>) -> Self {
        Self {
            background: ImageSlot::new(background),
            foreground: foreground.map(ImageSlot::new),
        }
    }

    fn slot_mut(&mut self, layer: ImageLayer) -> Option<&mut ImageSlot> {
        match layer {
            ImageLayer::Background => Some(&mut self.background),
            ImageLayer::Foreground => self.foreground.as_mut(),
        }
    }

    /// Record a successful load. A failed slot stays failed.
    pub fn mark_loaded(&mut self, layer: ImageLayer) {
        if let Some(slot) = self.slot_mut(layer)
            && slot.state == ImageState::Pending
        {
            slot.state = ImageState::Loaded;
        }
    }

    /// Record a load failure and return the fallback to show. Logged, never fatal.
    pub fn mark_failed(&mut self, layer: ImageLayer) -> Option<ImageFallback> {
        let slot = self.slot_mut(layer)?;
        if slot.state != ImageState::Failed {
            tracing::warn!(source = %slot.source, ?layer, "failed to load panel image");
            slot.state = ImageState::Failed;
        }
        Self::fallback_for(layer)
    }

    /// Fallback currently in effect for `layer`, if its image failed.
    pub fn fallback(&self, layer: ImageLayer) -> Option<ImageFallback> {
        let slot = match layer {
            ImageLayer::Background => Some(&self.background),
            ImageLayer::Foreground => self.foreground.as_ref(),
        }?;
        (slot.state == ImageState::Failed)
            .then(|| Self::fallback_for(layer))
            .flatten()
    }

    fn fallback_for(layer: ImageLayer) -> Option<ImageFallback> {
        Some(match layer {
            ImageLayer::Background => ImageFallback::Fill {
                color: Rgba8::BLACK_SILK,
            },
            ImageLayer::Foreground => ImageFallback::Hidden,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/panel/imagery.rs"]
mod tests;
