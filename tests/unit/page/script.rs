use super::*;
use crate::foundation::core::Viewport;
use crate::page::spec::PageSpec;

fn session() -> PageSession {
    PageSession::new(&PageSpec::setalia(), Viewport::new(1440.0, 900.0).unwrap()).unwrap()
}

#[test]
fn ramp_produces_one_report_per_frame() {
    let mut s = session();
    let script = ScrollScript::ramp(0.0, 1800.0, 30, 10);
    let reports = script.run(&mut s).unwrap();
    assert_eq!(reports.len() as u64, script.total_frames());
    assert_eq!(reports[29].scroll_y, 1800.0);
    assert!(reports.windows(2).all(|w| w[0].frame + 1 == w[1].frame));
    assert!(reports.windows(2).all(|w| w[0].time_ms < w[1].time_ms));
}

#[test]
fn zero_ramp_jumps_then_settles() {
    let mut s = session();
    let reports = ScrollScript::ramp(0.0, 900.0, 0, 5).run(&mut s).unwrap();
    assert_eq!(reports.len(), 5);
    assert!(reports.iter().all(|r| r.scroll_y == 900.0));
}

#[test]
fn invalid_script_is_rejected() {
    let mut s = session();
    let script = ScrollScript {
        frame_ms: 0.0,
        ..ScrollScript::default()
    };
    assert!(script.run(&mut s).is_err());
    let script = ScrollScript {
        to: f64::NAN,
        ..ScrollScript::default()
    };
    assert!(script.run(&mut s).is_err());
}

#[test]
fn partial_json_uses_defaults() {
    let s: ScrollScript = serde_json::from_str(r#"{ "to": 2000.0 }"#).unwrap();
    assert_eq!(s.to, 2000.0);
    assert_eq!(s.ramp_frames, 60);
}
