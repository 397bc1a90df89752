use super::*;

fn sample(top: f64, height: f64, vh: f64) -> ScrollSample {
    ScrollSample {
        rect_top: top,
        rect_height: height,
        viewport_height: vh,
    }
}

#[test]
fn transit_centered_panel_is_exactly_half() {
    for h in [1.0, 600.0, 800.0, 1234.5] {
        assert_eq!(ProgressModel::Transit.progress(sample(0.0, h, h)), Some(0.5));
    }
}

#[test]
fn transit_entering_and_exiting_edges() {
    let vh = 800.0;
    let h = 1000.0;
    assert_eq!(ProgressModel::Transit.progress(sample(vh, h, vh)), Some(0.0));
    assert_eq!(ProgressModel::Transit.progress(sample(-h, h, vh)), Some(1.0));

    let p = ProgressModel::Transit
        .progress(sample(-200.0, h, vh))
        .unwrap();
    assert!((p - 1000.0 / 1800.0).abs() < 1e-12);
}

#[test]
fn center_distance_reads_half_when_centered() {
    let vh = 800.0;
    // Panel center at viewport center.
    assert_eq!(
        ProgressModel::CenterDistance.progress(sample(100.0, 600.0, vh)),
        Some(0.5)
    );
    // Center at the bottom edge.
    assert_eq!(
        ProgressModel::CenterDistance.progress(sample(500.0, 600.0, vh)),
        Some(0.0)
    );
}

#[test]
fn degenerate_geometry_yields_none() {
    assert_eq!(ProgressModel::Transit.progress(sample(0.0, 0.0, 0.0)), None);
    assert_eq!(
        ProgressModel::CenterDistance.progress(sample(0.0, 100.0, 0.0)),
        None
    );
    assert_eq!(
        ProgressModel::Transit.progress(sample(f64::NAN, 100.0, 800.0)),
        None
    );
}

#[test]
fn schedule_coalesces_until_frame_runs() {
    let mut t = ScrollTracker::new(ProgressModel::Transit);
    assert!(t.schedule());
    assert!(!t.schedule());
    assert!(!t.schedule());
    assert!(t.is_pending());

    assert_eq!(t.on_frame(Some(sample(0.0, 800.0, 800.0))), Some(0.5));
    assert!(!t.is_pending());
    assert_eq!(t.measurements(), 1);
    assert!(t.schedule());
}

#[test]
fn missing_geometry_skips_tick_and_keeps_last_progress() {
    let mut t = ScrollTracker::new(ProgressModel::Transit);
    t.schedule();
    t.on_frame(Some(sample(0.0, 800.0, 800.0)));
    t.schedule();
    assert_eq!(t.on_frame(None), None);
    assert!(!t.is_pending());
    assert_eq!(t.last_progress(), Some(0.5));
    assert_eq!(t.measurements(), 1);
}
