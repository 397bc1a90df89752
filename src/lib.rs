//! Setalia is the scroll-driven parallax engine behind a single-page landing site made of
//! full-viewport panels.
//!
//! Each [`Panel`] owns its own state and is driven entirely by callbacks from a [`Host`]
//! (the rendering surface):
//!
//! 1. **Track**: scroll events are coalesced into one geometry measurement per animation
//!    frame, producing a progress scalar (`0` entering, `0.5` centered, `1` exited).
//! 2. **Map**: progress is clamped, eased around its midpoint, scaled to a pixel offset, and
//!    spread over background / foreground / text layers with per-layer speed factors.
//! 3. **Smooth**: a continuous per-frame loop eases each layer toward its target and snaps
//!    once within epsilon.
//! 4. **Enter**: a one-shot intersection trigger flips the entrance flag.
//!
//! Nothing is shared between panels. [`HeadlessHost`] and [`PageSession`] provide a fully
//! deterministic rendering surface for tests and for the `setalia` CLI.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod engine;
mod enquiry;
mod foundation;
pub mod host;
mod page;
mod panel;
mod tracker;
mod viewport;
mod visibility;

pub use animation::ease::Ease;
pub use animation::smooth::{Lerp, MotionState, Smoothing};
pub use engine::config::{EngineConfig, LayerFactors, PremiumMotion, ProgressWindow};
pub use engine::offsets::{
    LayerTargets, LayerTransforms, ParallaxEngine, base_offset, layer_targets,
};
pub use enquiry::form::{
    EnquiryDialog, EnquiryField, EnquiryFields, EnquiryForm, Notification, SUBMIT_DELAY_MS,
};
pub use foundation::core::{
    Affine, LayerTransform, PanelId, PanelRect, Rgba8, ScrollSample, Vec2, Viewport,
};
pub use foundation::error::{SetaliaError, SetaliaResult};
pub use host::headless::HeadlessHost;
pub use host::{FrameHandle, FramePurpose, Host, HostEvent, ListenerId, ObserverId};
pub use page::script::ScrollScript;
pub use page::session::{FrameReport, PageSession};
pub use page::spec::{PageSpec, PanelKind, PanelSpec};
pub use panel::imagery::{ImageFallback, ImageLayer, ImageSlot, ImageState, PanelImagery};
pub use panel::layout::{ContentAnchor, ForegroundPlacement, PanelLayout, TextAlign};
pub use panel::{Lifecycle, Panel, PanelFrame};
pub use tracker::progress::{ProgressModel, ScrollTracker};
pub use viewport::classify::{NARROW_BREAKPOINT_PX, ViewportClass, is_narrow};
pub use visibility::entrance::{EntranceTrigger, IntersectionEntry};
