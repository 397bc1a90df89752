use super::*;
use crate::enquiry::form::{EnquiryField, SUBMIT_DELAY_MS};
use crate::page::spec::PanelSpec;

fn session(width: f64) -> PageSession {
    PageSession::new(&PageSpec::setalia(), Viewport::new(width, 800.0).unwrap()).unwrap()
}

#[test]
fn panels_are_stacked_one_viewport_each() {
    let s = session(1280.0);
    assert_eq!(s.panels().len(), 5);
    assert_eq!(s.host().document_height(), 4000.0);
    assert_eq!(s.host().max_scroll(), 3200.0);
    assert!(s.panels().iter().all(Panel::is_mounted));
}

#[test]
fn first_frame_measures_every_panel_and_enters_the_hero() {
    let mut s = session(1280.0);
    let r = s.advance_frame(16.0);
    assert_eq!(r.frame, 0);
    assert_eq!(r.panels.len(), 5);
    assert_eq!(r.panels[0].progress, Some(0.5));
    assert!(r.panels[0].entered);
    assert!(!r.panels[2].entered);
}

#[test]
fn scrolling_enters_panels_in_turn() {
    let mut s = session(1280.0);
    s.advance_frame(16.0);
    s.scroll_to(800.0);
    let r = s.advance_frame(16.0);
    assert!(r.panels[1].entered);
    assert!(!r.panels[3].entered);

    s.scroll_to(0.0);
    let r = s.advance_frame(16.0);
    assert!(r.panels[1].entered);
}

#[test]
fn resize_relays_out_and_reclassifies() {
    let mut s = session(1280.0);
    s.scroll_to(3200.0);
    s.resize(Viewport::new(390.0, 600.0).unwrap());
    assert_eq!(s.host().document_height(), 3000.0);
    assert_eq!(s.host().scroll_y(), 2400.0);
    let r = s.advance_frame(16.0);
    assert!(r.panels.iter().all(|p| p.is_narrow));
}

#[test]
fn reduced_motion_flip_reaches_every_panel() {
    let mut s = session(1280.0);
    s.scroll_to(400.0);
    s.advance_frame(16.0);
    s.set_reduced_motion(true);
    assert!(s.panels().iter().all(|p| p.engine().reduced_motion()));
    for _ in 0..300 {
        s.advance_frame(16.0);
    }
    for p in s.snapshot() {
        assert_eq!(p.layers.background.translate_y, 0.0);
    }
}

#[test]
fn unmounted_panel_stops_receiving_events() {
    let mut s = session(1280.0);
    s.advance_frame(16.0);
    s.unmount(PanelId(2)).unwrap();
    let before = s.panel(PanelId(2)).unwrap().frame();
    s.scroll_to(1600.0);
    for _ in 0..10 {
        s.advance_frame(16.0);
    }
    assert_eq!(s.panel(PanelId(2)).unwrap().frame(), before);
    assert!(s.unmount(PanelId(42)).is_err());

    s.unmount_all();
    assert_eq!(s.host().listener_count(), 0);
    assert_eq!(s.host().pending_frame_count(), 0);
    assert_eq!(s.host().observer_count(), 0);
}

#[test]
fn enquiry_notification_arrives_after_delay() {
    let mut s = session(1280.0);
    s.dialog_mut().open();
    let form = s.dialog_mut().form_mut();
    form.set(EnquiryField::Name, "Marco");
    form.set(EnquiryField::Email, "marco@example.com");
    form.set(EnquiryField::Message, "Catalogue please.");
    let now = s.host().now_ms();
    s.dialog_mut().submit(now).unwrap();

    let mut note = None;
    let mut elapsed = 0.0;
    while note.is_none() {
        let r = s.advance_frame(100.0);
        elapsed += 100.0;
        note = r.notification;
        assert!(elapsed <= SUBMIT_DELAY_MS);
    }
    assert!(!s.dialog().is_open());
}

#[test]
fn invalid_page_is_rejected() {
    let mut spec = PageSpec::setalia();
    spec.panels.clear();
    assert!(PageSession::new(&spec, Viewport::new(1280.0, 800.0).unwrap()).is_err());

    let mut spec = PageSpec::setalia();
    spec.panels.push(PanelSpec::image("X", "Y", "", ""));
    assert!(PageSession::new(&spec, Viewport::new(1280.0, 800.0).unwrap()).is_err());
}
