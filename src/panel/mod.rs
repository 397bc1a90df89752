//! One mounted panel: scroll tracking, parallax offsets, entrance trigger, and viewport class,
//! all owned per instance and driven by host callbacks.

pub(crate) mod imagery;
pub(crate) mod layout;

use crate::engine::config::EngineConfig;
use crate::engine::offsets::{LayerTransforms, ParallaxEngine};
use crate::foundation::core::{PanelId, ScrollSample};
use crate::foundation::error::{SetaliaError, SetaliaResult};
use crate::host::{FrameHandle, FramePurpose, Host, HostEvent, ListenerId, ObserverId};
use crate::page::spec::PanelSpec;
use crate::panel::imagery::{ImageFallback, ImageLayer, ImageState, PanelImagery};
use crate::panel::layout::PanelLayout;
use crate::tracker::progress::ScrollTracker;
use crate::viewport::classify::ViewportClass;
use crate::visibility::entrance::{EntranceTrigger, IntersectionEntry};

/// Lifecycle of a panel instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lifecycle {
    /// Constructed, not yet attached to a host.
    Created,
    /// Receiving host callbacks.
    Mounted,
    /// Torn down; every callback is ignored.
    Unmounted,
}

/// Everything the rendering layer reads from a panel for one frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PanelFrame {
    /// Panel identifier.
    pub id: PanelId,
    /// Smoothed layer transforms.
    pub layers: LayerTransforms,
    /// Entrance animation has fired.
    pub entered: bool,
    /// Viewport is below the breakpoint.
    pub is_narrow: bool,
    /// Layout branch.
    pub layout: PanelLayout,
    /// Last measured progress, if any.
    pub progress: Option<f64>,
    /// Fill to use behind a failed background image.
    pub background_fallback: Option<ImageFallback>,
}

#[derive(Clone, Copy, Debug, Default)]
struct Subscriptions {
    scroll: Option<ListenerId>,
    resize: Option<ListenerId>,
    reduced_motion: Option<ListenerId>,
}

impl Subscriptions {
    fn handles(&self) -> impl Iterator<Item = ListenerId> {
        [self.scroll, self.resize, self.reduced_motion]
            .into_iter()
            .flatten()
    }
}

/// Per-instance parallax panel.
#[derive(Debug)]
pub struct Panel {
    id: PanelId,
    spec: PanelSpec,
    lifecycle: Lifecycle,
    tracker: ScrollTracker,
    engine: ParallaxEngine,
    entrance: EntranceTrigger,
    imagery: PanelImagery,
    subs: Subscriptions,
    measure_frame: Option<FrameHandle>,
    smooth_frame: Option<FrameHandle>,
    observer: Option<ObserverId>,
}

impl Panel {
    /// Build an unmounted panel. Fails if `config` is invalid.
    pub fn new(id: PanelId, spec: PanelSpec, config: EngineConfig) -> SetaliaResult<Self> {
        config.validate()?;
        let imagery = PanelImagery::new(&spec.background_image, spec.foreground_image.as_deref());
        Ok(Self {
            id,
            lifecycle: Lifecycle::Created,
            tracker: ScrollTracker::new(config.model),
            entrance: EntranceTrigger::new(config.entrance_threshold),
            engine: ParallaxEngine::new(config),
            imagery,
            spec,
            subs: Subscriptions::default(),
            measure_frame: None,
            smooth_frame: None,
            observer: None,
        })
    }

    /// Panel identifier.
    pub fn id(&self) -> PanelId {
        self.id
    }

    /// Content description.
    pub fn spec(&self) -> &PanelSpec {
        &self.spec
    }

    /// Current lifecycle stage.
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// `true` between [`Panel::mount`] and [`Panel::unmount`].
    pub fn is_mounted(&self) -> bool {
        self.lifecycle == Lifecycle::Mounted
    }

    /// Parallax engine state.
    pub fn engine(&self) -> &ParallaxEngine {
        &self.engine
    }

    /// Scroll tracker state.
    pub fn tracker(&self) -> &ScrollTracker {
        &self.tracker
    }

    /// Image slots.
    pub fn imagery(&self) -> &PanelImagery {
        &self.imagery
    }

    /// Whether the entrance animation has fired.
    pub fn entered(&self) -> bool {
        self.entrance.entered()
    }

    /// Attach to `host`: subscribe to scroll/resize/reduced-motion, start observing
    /// visibility, schedule the initial measurement, and start the smoothing loop.
    pub fn mount(&mut self, host: &mut dyn Host) -> SetaliaResult<()> {
        match self.lifecycle {
            Lifecycle::Created => {}
            Lifecycle::Mounted => {
                return Err(SetaliaError::host(format!(
                    "panel {} is already mounted",
                    self.id.0
                )));
            }
            Lifecycle::Unmounted => {
                return Err(SetaliaError::host(format!(
                    "panel {} was unmounted and cannot be remounted",
                    self.id.0
                )));
            }
        }
        self.lifecycle = Lifecycle::Mounted;

        self.subs = Subscriptions {
            scroll: Some(host.subscribe(self.id, HostEvent::Scroll)),
            resize: Some(host.subscribe(self.id, HostEvent::Resize)),
            reduced_motion: Some(host.subscribe(self.id, HostEvent::ReducedMotionChange)),
        };

        self.engine.set_viewport_class(self.classify(host));
        self.engine.set_reduced_motion(host.prefers_reduced_motion());
        self.observer = Some(host.observe_intersection(self.id, self.entrance.threshold()));

        self.schedule_measure(host);
        self.smooth_frame = Some(host.request_frame(self.id, FramePurpose::Smooth));

        tracing::debug!(
            panel = self.id.0,
            title = %self.spec.title,
            class = ?self.engine.viewport_class(),
            "panel mounted"
        );
        Ok(())
    }

    fn classify(&self, host: &dyn Host) -> ViewportClass {
        ViewportClass::classify(host.viewport().width, self.engine.config().narrow_breakpoint)
    }

    fn schedule_measure(&mut self, host: &mut dyn Host) {
        if self.tracker.schedule() {
            self.measure_frame = Some(host.request_frame(self.id, FramePurpose::Measure));
        }
    }

    /// Scroll notification. Defers measurement to the next frame, once per frame.
    pub fn on_scroll(&mut self, host: &mut dyn Host) {
        if !self.is_mounted() {
            return;
        }
        self.schedule_measure(host);
    }

    /// Resize notification. Reclassifies the viewport and remeasures.
    pub fn on_resize(&mut self, host: &mut dyn Host) {
        if !self.is_mounted() {
            return;
        }
        let class = self.classify(host);
        if class != self.engine.viewport_class() {
            tracing::debug!(panel = self.id.0, ?class, "viewport class changed");
        }
        self.engine.set_viewport_class(class);
        self.schedule_measure(host);
    }

    /// Reduced-motion preference flipped.
    pub fn on_reduced_motion_change(&mut self, host: &mut dyn Host) {
        if !self.is_mounted() {
            return;
        }
        let reduced = host.prefers_reduced_motion();
        tracing::debug!(panel = self.id.0, reduced, "reduced motion preference changed");
        self.engine.set_reduced_motion(reduced);
    }

    /// Frame callback for `handle`. Stale or foreign handles are ignored.
    pub fn on_frame(&mut self, host: &mut dyn Host, handle: FrameHandle, purpose: FramePurpose) {
        if !self.is_mounted() {
            return;
        }
        match purpose {
            FramePurpose::Measure => {
                if self.measure_frame != Some(handle) {
                    return;
                }
                self.measure_frame = None;
                let viewport_height = host.viewport().height;
                let sample = host
                    .panel_rect(self.id)
                    .map(|rect| ScrollSample::capture(rect, viewport_height));
                if let Some(p) = self.tracker.on_frame(sample) {
                    let moved = self.engine.retarget(p);
                    tracing::trace!(panel = self.id.0, progress = p, moved, "measured");
                }
            }
            FramePurpose::Smooth => {
                if self.smooth_frame != Some(handle) {
                    return;
                }
                self.engine.tick();
                self.smooth_frame = Some(host.request_frame(self.id, FramePurpose::Smooth));
            }
        }
    }

    /// Intersection callback from `observer`. Only the panel's own observer counts.
    pub fn on_intersection(&mut self, observer: ObserverId, entry: IntersectionEntry) {
        if !self.is_mounted() || self.observer != Some(observer) {
            return;
        }
        if self.entrance.observe(entry) {
            tracing::debug!(panel = self.id.0, ratio = entry.ratio, "entrance fired");
        }
    }

    /// Image finished loading.
    pub fn on_image_load(&mut self, layer: ImageLayer) {
        self.imagery.mark_loaded(layer);
    }

    /// Image failed to load. Returns the visual fallback; never fatal.
    pub fn on_image_error(&mut self, layer: ImageLayer) -> Option<ImageFallback> {
        self.imagery.mark_failed(layer)
    }

    /// Tear down: cancel both frame loops, drop every listener, and disconnect the observer.
    /// Idempotent.
    pub fn unmount(&mut self, host: &mut dyn Host) {
        if self.lifecycle == Lifecycle::Unmounted {
            return;
        }
        for id in self.subs.handles() {
            host.unsubscribe(id);
        }
        self.subs = Subscriptions::default();
        if let Some(h) = self.measure_frame.take() {
            host.cancel_frame(h);
        }
        if let Some(h) = self.smooth_frame.take() {
            host.cancel_frame(h);
        }
        if let Some(o) = self.observer.take() {
            host.disconnect(o);
        }
        self.tracker.cancel();
        self.lifecycle = Lifecycle::Unmounted;
        tracing::debug!(panel = self.id.0, "panel unmounted");
    }

    /// Render-facing snapshot.
    pub fn frame(&self) -> PanelFrame {
        let class = self.engine.viewport_class();
        let fg_visible = self
            .imagery
            .foreground
            .as_ref()
            .is_some_and(|s| s.state != ImageState::Failed);
        PanelFrame {
            id: self.id,
            layers: self.engine.transforms(),
            entered: self.entrance.entered(),
            is_narrow: class.is_narrow(),
            layout: PanelLayout::resolve(class, fg_visible),
            progress: self.tracker.last_progress(),
            background_fallback: self.imagery.fallback(ImageLayer::Background),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/panel/panel.rs"]
mod tests;
