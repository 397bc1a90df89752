use crate::enquiry::form::{EnquiryDialog, Notification};
use crate::foundation::core::{PanelId, Viewport};
use crate::foundation::error::{SetaliaError, SetaliaResult};
use crate::host::headless::HeadlessHost;
use crate::host::{Host, HostEvent};
use crate::page::spec::PageSpec;
use crate::panel::imagery::{ImageFallback, ImageLayer};
use crate::panel::{Panel, PanelFrame};

/// Outputs of one simulated animation frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FrameReport {
    /// 0-based frame counter.
    pub frame: u64,
    /// Simulated clock after the frame.
    pub time_ms: f64,
    /// Document scroll offset.
    pub scroll_y: f64,
    /// Per-panel render state.
    pub panels: Vec<PanelFrame>,
    /// Enquiry confirmation completed during this frame.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification: Option<Notification>,
}

/// A page of panels mounted on a [`HeadlessHost`].
///
/// Panels are stacked one viewport tall each. The session routes host events to the panels
/// that subscribed to them; unmounted panels stop receiving anything.
#[derive(Debug)]
pub struct PageSession {
    host: HeadlessHost,
    panels: Vec<Panel>,
    dialog: EnquiryDialog,
    frame: u64,
}

impl PageSession {
    /// Validate `spec`, lay out the panels for `viewport`, and mount them all.
    #[tracing::instrument(skip(spec), fields(panels = spec.panels.len()))]
    pub fn new(spec: &PageSpec, viewport: Viewport) -> SetaliaResult<Self> {
        spec.validate()?;
        let panels = spec
            .panels
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let id = u32::try_from(i)
                    .map_err(|_| SetaliaError::validation("too many panels"))?;
                Panel::new(PanelId(id), p.clone(), spec.engine_for(p))
            })
            .collect::<SetaliaResult<Vec<_>>>()?;

        let mut session = Self {
            host: HeadlessHost::new(viewport),
            panels,
            dialog: EnquiryDialog::new(),
            frame: 0,
        };
        session.layout();
        for panel in &mut session.panels {
            panel.mount(&mut session.host)?;
        }
        Ok(session)
    }

    fn layout(&mut self) {
        let h = self.host.viewport().height;
        for (i, panel) in self.panels.iter().enumerate() {
            self.host.set_panel_box(panel.id(), i as f64 * h, h);
        }
    }

    /// Simulated host.
    pub fn host(&self) -> &HeadlessHost {
        &self.host
    }

    /// Mutable simulated host, for fault injection (detaching panels, etc.).
    pub fn host_mut(&mut self) -> &mut HeadlessHost {
        &mut self.host
    }

    /// Panels in page order.
    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    /// Look up a panel.
    pub fn panel(&self, id: PanelId) -> Option<&Panel> {
        self.panels.get(id.0 as usize)
    }

    /// Enquiry dialog.
    pub fn dialog(&self) -> &EnquiryDialog {
        &self.dialog
    }

    /// Mutable enquiry dialog.
    pub fn dialog_mut(&mut self) -> &mut EnquiryDialog {
        &mut self.dialog
    }

    /// Frames advanced so far.
    pub fn frame_index(&self) -> u64 {
        self.frame
    }

    fn dispatch(&mut self, event: HostEvent) {
        for (_, panel_id) in self.host.listeners_for(event) {
            let Some(panel) = self.panels.get_mut(panel_id.0 as usize) else {
                continue;
            };
            match event {
                HostEvent::Scroll => panel.on_scroll(&mut self.host),
                HostEvent::Resize => panel.on_resize(&mut self.host),
                HostEvent::ReducedMotionChange => {
                    panel.on_reduced_motion_change(&mut self.host)
                }
            }
        }
    }

    /// Scroll to an absolute offset (clamped to the document) and notify listeners.
    pub fn scroll_to(&mut self, y: f64) {
        self.host.set_scroll_y(y);
        self.dispatch(HostEvent::Scroll);
    }

    /// Scroll relative to the current offset.
    pub fn scroll_by(&mut self, dy: f64) {
        let y = self.host.scroll_y() + dy;
        self.scroll_to(y);
    }

    /// Resize the viewport, relayout the panels, and notify listeners.
    pub fn resize(&mut self, viewport: Viewport) {
        self.host.set_viewport(viewport);
        self.layout();
        // Document height follows the viewport; re-clamp against the new layout.
        let y = self.host.scroll_y();
        self.host.set_scroll_y(y);
        self.dispatch(HostEvent::Resize);
    }

    /// Flip the platform reduced-motion preference.
    pub fn set_reduced_motion(&mut self, reduced: bool) {
        if self.host.prefers_reduced_motion() == reduced {
            return;
        }
        self.host.set_reduced_motion(reduced);
        self.dispatch(HostEvent::ReducedMotionChange);
    }

    /// Report an image failure for `id`. Unknown panels yield `None`.
    pub fn image_error(&mut self, id: PanelId, layer: ImageLayer) -> Option<ImageFallback> {
        self.panels.get_mut(id.0 as usize)?.on_image_error(layer)
    }

    /// Advance the clock by `dt_ms`, run every due frame callback, deliver intersection
    /// changes, and poll the enquiry dialog.
    pub fn advance_frame(&mut self, dt_ms: f64) -> FrameReport {
        self.host.advance_clock(dt_ms);
        for (handle, panel_id, purpose) in self.host.take_frames() {
            if let Some(panel) = self.panels.get_mut(panel_id.0 as usize) {
                panel.on_frame(&mut self.host, handle, purpose);
            }
        }
        for (observer, panel_id, entry) in self.host.take_intersections() {
            if let Some(panel) = self.panels.get_mut(panel_id.0 as usize) {
                panel.on_intersection(observer, entry);
            }
        }
        let notification = self.dialog.poll(self.host.now_ms());
        let report = FrameReport {
            frame: self.frame,
            time_ms: self.host.now_ms(),
            scroll_y: self.host.scroll_y(),
            panels: self.snapshot(),
            notification,
        };
        self.frame += 1;
        report
    }

    /// Render state of every panel.
    pub fn snapshot(&self) -> Vec<PanelFrame> {
        self.panels.iter().map(Panel::frame).collect()
    }

    /// Tear down one panel.
    pub fn unmount(&mut self, id: PanelId) -> SetaliaResult<()> {
        let panel = self
            .panels
            .get_mut(id.0 as usize)
            .ok_or_else(|| SetaliaError::host(format!("unknown panel {}", id.0)))?;
        panel.unmount(&mut self.host);
        Ok(())
    }

    /// Tear down every panel.
    pub fn unmount_all(&mut self) {
        for panel in &mut self.panels {
            panel.unmount(&mut self.host);
        }
    }
}

impl Drop for PageSession {
    fn drop(&mut self) {
        self.unmount_all();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/session.rs"]
mod tests;
