use crate::viewport::classify::ViewportClass;

/// Horizontal placement of the content block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentAnchor {
    /// Centered in the panel.
    Center,
    /// Pushed to the trailing edge, leaving room for the foreground image.
    End,
}

/// Text alignment inside the content block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    /// Left aligned.
    Left,
    /// Centered.
    Center,
}

/// Where the foreground image sits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForegroundPlacement {
    /// Vertically centered strip on the leading edge (wide viewports).
    Side,
    /// Full-width layer behind the content (narrow viewports).
    Backdrop,
}

/// Layout branch derived from the viewport class and the panel's imagery.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PanelLayout {
    /// Content block anchor.
    pub anchor: ContentAnchor,
    /// Text alignment.
    pub text_align: TextAlign,
    /// Foreground placement, `None` when the panel has no foreground image.
    pub foreground: Option<ForegroundPlacement>,
}

impl PanelLayout {
    /// Pick the layout. A side foreground pushes the content to the trailing edge; everywhere
    /// else the content is centered.
    pub fn resolve(class: ViewportClass, has_foreground: bool) -> Self {
        match (has_foreground, class) {
            (true, ViewportClass::Wide) => Self {
                anchor: ContentAnchor::End,
                text_align: TextAlign::Left,
                foreground: Some(ForegroundPlacement::Side),
            },
            (true, ViewportClass::Narrow) => Self {
                anchor: ContentAnchor::Center,
                text_align: TextAlign::Center,
                foreground: Some(ForegroundPlacement::Backdrop),
            },
            (false, _) => Self {
                anchor: ContentAnchor::Center,
                text_align: TextAlign::Center,
                foreground: None,
            },
        }
    }
}
