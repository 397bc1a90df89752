use super::*;

#[test]
fn breakpoint_is_exclusive() {
    assert!(is_narrow(767.0));
    assert!(!is_narrow(768.0));
    assert!(is_narrow(767.999));
    assert!(!is_narrow(1920.0));
}

#[test]
fn classify_honors_custom_breakpoint() {
    assert_eq!(ViewportClass::classify(1000.0, 1024.0), ViewportClass::Narrow);
    assert_eq!(ViewportClass::classify(1024.0, 1024.0), ViewportClass::Wide);
}

#[test]
fn classify_is_pure() {
    for w in [320.0, 767.0, 768.0, 1440.0] {
        assert_eq!(
            ViewportClass::classify(w, NARROW_BREAKPOINT_PX),
            ViewportClass::classify(w, NARROW_BREAKPOINT_PX)
        );
    }
}
