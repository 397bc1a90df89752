use super::*;

#[test]
fn entry_from_ratio_uses_threshold() {
    assert!(IntersectionEntry::from_ratio(0.3, 0.3).is_intersecting);
    assert!(!IntersectionEntry::from_ratio(0.29, 0.3).is_intersecting);
    assert!(!IntersectionEntry::from_ratio(0.0, 0.0).is_intersecting);
    assert_eq!(IntersectionEntry::from_ratio(1.7, 0.3).ratio, 1.0);
}

#[test]
fn fires_once_on_first_intersection() {
    let mut t = EntranceTrigger::new(0.3);
    assert!(!t.observe(IntersectionEntry::from_ratio(0.1, 0.3)));
    assert!(!t.entered());
    assert!(t.observe(IntersectionEntry::from_ratio(0.5, 0.3)));
    assert!(t.entered());
    assert!(!t.observe(IntersectionEntry::from_ratio(0.9, 0.3)));
}

#[test]
fn flag_is_monotone() {
    let mut t = EntranceTrigger::new(0.2);
    t.observe(IntersectionEntry::from_ratio(0.4, 0.2));
    for ratio in [0.0, 0.1, 0.0, 0.05] {
        t.observe(IntersectionEntry::from_ratio(ratio, 0.2));
        assert!(t.entered());
    }
}
