use crate::engine::config::EngineConfig;
use crate::foundation::error::{SetaliaError, SetaliaResult};

/// Which engine preset a panel uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelKind {
    /// Full-viewport image panel with a title block and enquiry button.
    #[default]
    Image,
    /// Split section holding the newsletter form.
    Form,
}

/// Content and imagery of one panel.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PanelSpec {
    /// Headline.
    pub title: String,
    /// Line under the headline.
    pub subtitle: String,
    /// Background image source.
    pub background_image: String,
    /// Optional decorative foreground image.
    #[serde(default)]
    pub foreground_image: Option<String>,
    /// Accessible description of the background.
    #[serde(default)]
    pub alt_text: String,
    /// Engine preset.
    #[serde(default)]
    pub kind: PanelKind,
    /// Per-panel override of the preset.
    #[serde(default)]
    pub engine: Option<EngineConfig>,
}

impl PanelSpec {
    /// Image panel without a foreground image.
    pub fn image(title: &str, subtitle: &str, background: &str, alt: &str) -> Self {
        Self {
            title: title.to_owned(),
            subtitle: subtitle.to_owned(),
            background_image: background.to_owned(),
            foreground_image: None,
            alt_text: alt.to_owned(),
            kind: PanelKind::Image,
            engine: None,
        }
    }

    /// Attach a foreground image.
    pub fn with_foreground(mut self, source: &str) -> Self {
        self.foreground_image = Some(source.to_owned());
        self
    }

    /// Switch the engine preset.
    pub fn with_kind(mut self, kind: PanelKind) -> Self {
        self.kind = kind;
        self
    }
}

/// Ordered panels plus the engine preset for each panel kind.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PageSpec {
    /// Panels from top to bottom.
    pub panels: Vec<PanelSpec>,
    /// Preset for [`PanelKind::Image`].
    #[serde(default = "EngineConfig::hero")]
    pub image_engine: EngineConfig,
    /// Preset for [`PanelKind::Form`].
    #[serde(default = "EngineConfig::form_section")]
    pub form_engine: EngineConfig,
}

impl PageSpec {
    /// The five-panel landing page.
    pub fn setalia() -> Self {
        Self {
            panels: vec![
                PanelSpec::image(
                    "SETALIA",
                    "LUXURY ITALIAN FABRIC",
                    "hero-background.png",
                    "Black silk background with luxury fabric textures",
                )
                .with_foreground("hero-foreground.png"),
                PanelSpec::image(
                    "CRAFTING EXCELLENCE",
                    "MADE FOR THE ELITE",
                    "panel2-background.png",
                    "Gold silk fabric with intricate weaving patterns",
                ),
                PanelSpec::image(
                    "EVOLVING CLIENTCARE",
                    "TAILORED FOR YOU",
                    "panel3-background.png",
                    "Italian couture teal dress showcasing premium craftsmanship",
                ),
                PanelSpec::image(
                    "ITALIAN TEXTILE HERITAGE",
                    "TAILORED FOR YOU",
                    "panel4-background.png",
                    "Italian textile studio with traditional weaving equipment",
                ),
                PanelSpec::image(
                    "COMING SOON",
                    "MADE FOR THE ELITE",
                    "hero-background.png",
                    "Black silk background with anticipation of luxury launch",
                ),
            ],
            image_engine: EngineConfig::hero(),
            form_engine: EngineConfig::form_section(),
        }
    }

    /// Effective engine config for `panel`.
    pub fn engine_for(&self, panel: &PanelSpec) -> EngineConfig {
        match (&panel.engine, panel.kind) {
            (Some(cfg), _) => cfg.clone(),
            (None, PanelKind::Image) => self.image_engine.clone(),
            (None, PanelKind::Form) => self.form_engine.clone(),
        }
    }

    /// Check the page has panels and every effective engine config is valid.
    pub fn validate(&self) -> SetaliaResult<()> {
        if self.panels.is_empty() {
            return Err(SetaliaError::validation("page must contain at least one panel"));
        }
        for (i, p) in self.panels.iter().enumerate() {
            if p.background_image.trim().is_empty() {
                return Err(SetaliaError::validation(format!(
                    "panel {i} ('{}') has no background image",
                    p.title
                )));
            }
            self.engine_for(p).validate().map_err(|e| {
                SetaliaError::validation(format!("panel {i} ('{}'): {e}", p.title))
            })?;
        }
        Ok(())
    }

    /// Parse and validate a JSON page description.
    pub fn from_json(s: &str) -> SetaliaResult<Self> {
        let spec: Self = serde_json::from_str(s)?;
        spec.validate()?;
        Ok(spec)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/spec.rs"]
mod tests;
