//! Capabilities a panel needs from its rendering surface.
//!
//! The browser's `window` listeners, `requestAnimationFrame`, and `IntersectionObserver` are
//! modelled as handle-returning calls. The surface owns dispatch: it calls back into the panel
//! (`Panel::on_scroll`, `Panel::on_frame`, ...) for every live handle, and stops as soon as a
//! handle is released.

pub(crate) mod headless;

use crate::foundation::core::{PanelId, PanelRect, Viewport};

/// Global events a panel can subscribe to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HostEvent {
    /// Document scroll position changed.
    Scroll,
    /// Viewport resized.
    Resize,
    /// Reduced-motion media query flipped.
    ReducedMotionChange,
}

/// Why a frame callback was requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FramePurpose {
    /// Deferred geometry measurement after scroll/resize.
    Measure,
    /// Continuous smoothing loop.
    Smooth,
}

/// Handle for an event subscription.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(pub u64);

/// Handle for a pending frame callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameHandle(pub u64);

/// Handle for an intersection observer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObserverId(pub u64);

/// Rendering-surface capabilities consumed by a panel.
pub trait Host {
    /// Monotonic clock in milliseconds.
    fn now_ms(&self) -> f64;
    /// Current viewport dimensions.
    fn viewport(&self) -> Viewport;
    /// Panel bounding box relative to the viewport, `None` while the panel is not attached.
    fn panel_rect(&self, panel: PanelId) -> Option<PanelRect>;
    /// Platform reduced-motion preference.
    fn prefers_reduced_motion(&self) -> bool;

    /// Subscribe `panel` to `event`. Subscribing twice returns the existing handle.
    fn subscribe(&mut self, panel: PanelId, event: HostEvent) -> ListenerId;
    /// Drop a subscription. Unknown handles are ignored.
    fn unsubscribe(&mut self, id: ListenerId);

    /// Request one callback on the next animation frame.
    fn request_frame(&mut self, panel: PanelId, purpose: FramePurpose) -> FrameHandle;
    /// Cancel a pending frame callback. Unknown handles are ignored.
    fn cancel_frame(&mut self, handle: FrameHandle);

    /// Start observing `panel` with a visible-area `threshold`.
    fn observe_intersection(&mut self, panel: PanelId, threshold: f64) -> ObserverId;
    /// Stop an observer. Unknown handles are ignored.
    fn disconnect(&mut self, id: ObserverId);
}
