use super::*;

const ALL: [Ease; 5] = [
    Ease::Linear,
    Ease::OutQuad,
    Ease::InCubic,
    Ease::OutCubic,
    Ease::InOutCubic,
];

#[test]
fn endpoints_are_stable() {
    for ease in ALL {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in ALL {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b);
        assert!(b < c);
    }
}

#[test]
fn centered_is_odd_around_midpoint() {
    for p in [0.0, 0.1, 0.3, 0.45] {
        let lo = Ease::OutCubic.centered(p);
        let hi = Ease::OutCubic.centered(1.0 - p);
        assert!((lo + hi).abs() < 1e-12);
    }
    assert_eq!(Ease::OutCubic.centered(0.5), 0.0);
}

#[test]
fn centered_saturates_outside_unit_range() {
    assert_eq!(Ease::OutCubic.centered(1.2), 0.5);
    assert_eq!(Ease::OutCubic.centered(-0.2), -0.5);
    assert_eq!(Ease::OutCubic.centered(1.0), 0.5);
}

#[test]
fn out_cubic_front_loads_motion_near_center() {
    // Same distance from center moves further than linear.
    let eased = Ease::OutCubic.centered(0.6);
    let linear = Ease::Linear.centered(0.6);
    assert!((linear - 0.1).abs() < 1e-12);
    assert!(eased > linear);
}
