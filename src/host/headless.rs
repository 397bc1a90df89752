use std::collections::BTreeMap;

use crate::foundation::core::{PanelId, PanelRect, Viewport};
use crate::host::{FrameHandle, FramePurpose, Host, HostEvent, ListenerId, ObserverId};
use crate::visibility::entrance::IntersectionEntry;

/// Document-space box of one panel.
#[derive(Clone, Copy, Debug, PartialEq)]
struct PanelBox {
    doc_top: f64,
    height: f64,
    attached: bool,
}

#[derive(Clone, Copy, Debug)]
struct Observer {
    panel: PanelId,
    threshold: f64,
    // `None` until the initial report.
    last: Option<bool>,
}

/// In-memory rendering surface with a simulated document, clock, and frame queue.
///
/// Frame callbacks requested while frames are being dispatched land in the next frame, as with
/// `requestAnimationFrame`.
#[derive(Debug)]
pub struct HeadlessHost {
    clock_ms: f64,
    viewport: Viewport,
    scroll_y: f64,
    reduced_motion: bool,
    layout: BTreeMap<PanelId, PanelBox>,
    next_id: u64,
    listeners: BTreeMap<ListenerId, (PanelId, HostEvent)>,
    frames: BTreeMap<FrameHandle, (PanelId, FramePurpose)>,
    observers: BTreeMap<ObserverId, Observer>,
}

impl HeadlessHost {
    /// Empty document at scroll position zero.
    pub fn new(viewport: Viewport) -> Self {
        Self {
            clock_ms: 0.0,
            viewport,
            scroll_y: 0.0,
            reduced_motion: false,
            layout: BTreeMap::new(),
            next_id: 1,
            listeners: BTreeMap::new(),
            frames: BTreeMap::new(),
            observers: BTreeMap::new(),
        }
    }

    fn next(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Place `panel` at `doc_top` with `height` and mark it attached.
    pub fn set_panel_box(&mut self, panel: PanelId, doc_top: f64, height: f64) {
        self.layout.insert(
            panel,
            PanelBox {
                doc_top,
                height,
                attached: true,
            },
        );
    }

    /// Detach a panel so geometry queries return `None`.
    pub fn detach_panel(&mut self, panel: PanelId) {
        if let Some(b) = self.layout.get_mut(&panel) {
            b.attached = false;
        }
    }

    /// Reattach a previously detached panel.
    pub fn attach_panel(&mut self, panel: PanelId) {
        if let Some(b) = self.layout.get_mut(&panel) {
            b.attached = true;
        }
    }

    /// Total document height.
    pub fn document_height(&self) -> f64 {
        self.layout
            .values()
            .map(|b| b.doc_top + b.height)
            .fold(0.0, f64::max)
    }

    /// Largest reachable scroll offset.
    pub fn max_scroll(&self) -> f64 {
        (self.document_height() - self.viewport.height).max(0.0)
    }

    /// Current scroll offset.
    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    /// Move the scroll position, clamped to the document.
    pub fn set_scroll_y(&mut self, y: f64) {
        self.scroll_y = y.clamp(0.0, self.max_scroll());
    }

    /// Replace the viewport.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.scroll_y = self.scroll_y.clamp(0.0, self.max_scroll());
    }

    /// Change the reduced-motion preference.
    pub fn set_reduced_motion(&mut self, reduced: bool) {
        self.reduced_motion = reduced;
    }

    /// Advance the simulated clock.
    pub fn advance_clock(&mut self, dt_ms: f64) {
        self.clock_ms += dt_ms.max(0.0);
    }

    /// Live subscriptions for `event`, in subscription order.
    pub fn listeners_for(&self, event: HostEvent) -> Vec<(ListenerId, PanelId)> {
        self.listeners
            .iter()
            .filter(|(_, (_, e))| *e == event)
            .map(|(id, (panel, _))| (*id, *panel))
            .collect()
    }

    /// `true` while `id` is still subscribed.
    pub fn is_listening(&self, id: ListenerId) -> bool {
        self.listeners.contains_key(&id)
    }

    /// Drain every pending frame callback in request order.
    pub fn take_frames(&mut self) -> Vec<(FrameHandle, PanelId, FramePurpose)> {
        std::mem::take(&mut self.frames)
            .into_iter()
            .map(|(h, (panel, purpose))| (h, panel, purpose))
            .collect()
    }

    /// `true` while `handle` has not yet run or been cancelled.
    pub fn is_frame_pending(&self, handle: FrameHandle) -> bool {
        self.frames.contains_key(&handle)
    }

    /// Fraction of `panel` currently inside the viewport.
    pub fn visible_ratio(&self, panel: PanelId) -> f64 {
        let Some(rect) = self.panel_rect(panel) else {
            return 0.0;
        };
        if rect.height <= 0.0 {
            return 0.0;
        }
        let top = rect.top.max(0.0);
        let bottom = (rect.top + rect.height).min(self.viewport.height);
        ((bottom - top).max(0.0) / rect.height).clamp(0.0, 1.0)
    }

    /// Intersection entries due for delivery: the first report of each observer, then only
    /// threshold crossings.
    pub fn take_intersections(&mut self) -> Vec<(ObserverId, PanelId, IntersectionEntry)> {
        let ratios: Vec<(ObserverId, f64)> = self
            .observers
            .iter()
            .map(|(id, o)| (*id, self.visible_ratio(o.panel)))
            .collect();

        let mut out = Vec::new();
        for (id, ratio) in ratios {
            let Some(o) = self.observers.get_mut(&id) else {
                continue;
            };
            let entry = IntersectionEntry::from_ratio(ratio, o.threshold);
            if o.last != Some(entry.is_intersecting) {
                o.last = Some(entry.is_intersecting);
                out.push((id, o.panel, entry));
            }
        }
        out
    }

    /// Number of live subscriptions.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Number of pending frame callbacks.
    pub fn pending_frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Number of live intersection observers.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

impl Host for HeadlessHost {
    fn now_ms(&self) -> f64 {
        self.clock_ms
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn panel_rect(&self, panel: PanelId) -> Option<PanelRect> {
        let b = self.layout.get(&panel).filter(|b| b.attached)?;
        Some(PanelRect {
            top: b.doc_top - self.scroll_y,
            height: b.height,
        })
    }

    fn prefers_reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    fn subscribe(&mut self, panel: PanelId, event: HostEvent) -> ListenerId {
        if let Some((id, _)) = self
            .listeners
            .iter()
            .find(|(_, (p, e))| *p == panel && *e == event)
        {
            return *id;
        }
        let id = ListenerId(self.next());
        self.listeners.insert(id, (panel, event));
        id
    }

    fn unsubscribe(&mut self, id: ListenerId) {
        self.listeners.remove(&id);
    }

    fn request_frame(&mut self, panel: PanelId, purpose: FramePurpose) -> FrameHandle {
        let h = FrameHandle(self.next());
        self.frames.insert(h, (panel, purpose));
        h
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.frames.remove(&handle);
    }

    fn observe_intersection(&mut self, panel: PanelId, threshold: f64) -> ObserverId {
        let id = ObserverId(self.next());
        self.observers.insert(
            id,
            Observer {
                panel,
                threshold,
                last: None,
            },
        );
        id
    }

    fn disconnect(&mut self, id: ObserverId) {
        self.observers.remove(&id);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/host/headless.rs"]
mod tests;
