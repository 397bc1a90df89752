use super::*;
use crate::engine::config::ProgressWindow;

fn linear_hero() -> EngineConfig {
    EngineConfig {
        easing: None,
        ..EngineConfig::hero()
    }
}

#[test]
fn offsets_stay_within_clamp_over_window() {
    for cfg in [
        EngineConfig::hero(),
        linear_hero(),
        EngineConfig::form_section(),
        EngineConfig {
            amplitude: 1000.0,
            ..EngineConfig::hero()
        },
    ] {
        for i in 0..=140 {
            let p = -0.2 + f64::from(i) * 0.01;
            let base = base_offset(&cfg, p).unwrap();
            assert!(base.abs() <= cfg.max_offset);
            for class in [ViewportClass::Narrow, ViewportClass::Wide] {
                let t = layer_targets(&cfg, base, class, false);
                assert!(t.background.abs() <= cfg.max_offset);
                assert!(t.foreground.abs() <= cfg.max_offset);
                assert!(t.text.abs() <= cfg.max_offset);
            }
        }
    }
}

#[test]
fn centered_progress_has_zero_offset() {
    assert_eq!(base_offset(&EngineConfig::hero(), 0.5), Some(0.0));
    assert_eq!(base_offset(&linear_hero(), 0.5), Some(0.0));
}

#[test]
fn linear_mapping_matches_hundred_px_range() {
    let cfg = linear_hero();
    assert_eq!(base_offset(&cfg, 0.0), Some(-50.0));
    assert_eq!(base_offset(&cfg, 1.0), Some(50.0));
}

#[test]
fn freeze_window_returns_none_outside() {
    let cfg = EngineConfig {
        window: ProgressWindow::Freeze { lo: -0.1, hi: 1.1 },
        ..linear_hero()
    };
    assert_eq!(base_offset(&cfg, 1.5), None);

    let mut engine = ParallaxEngine::new(cfg);
    assert!(engine.retarget(0.7));
    let before = engine.targets();
    assert!(!engine.retarget(1.5));
    assert_eq!(engine.targets(), before);
}

#[test]
fn layers_scale_by_class() {
    let cfg = EngineConfig::hero();
    let wide = layer_targets(&cfg, 40.0, ViewportClass::Wide, false);
    assert_eq!(wide.background, 40.0);
    assert!((wide.foreground - 12.0).abs() < 1e-12);
    assert!((wide.text + 4.0).abs() < 1e-12);

    let narrow = layer_targets(&cfg, 40.0, ViewportClass::Narrow, false);
    assert_eq!(narrow.foreground, 20.0);
    assert_eq!(narrow.text, 0.0);
}

#[test]
fn reduced_motion_zeroes_every_target() {
    let mut engine = ParallaxEngine::new(EngineConfig::hero());
    engine.retarget(0.9);
    assert!(engine.targets().background != 0.0);

    engine.set_reduced_motion(true);
    assert_eq!(engine.targets(), LayerTargets::default());

    engine.retarget(0.1);
    assert_eq!(engine.targets(), LayerTargets::default());

    engine.set_reduced_motion(false);
    assert!(engine.targets().background < 0.0);
}

#[test]
fn tick_eases_toward_targets_and_settles() {
    let mut engine = ParallaxEngine::new(EngineConfig::hero());
    engine.retarget(0.8);
    let target = engine.targets();
    assert!(engine.tick());
    let first = engine.current().background;
    assert!(first > 0.0 && first < target.background);

    let mut frames = 0;
    while engine.tick() {
        frames += 1;
        assert!(frames < 500);
    }
    assert!(engine.is_settled());
    assert_eq!(engine.current(), target);
}

#[test]
fn premium_couples_scale_and_rotation_to_foreground() {
    let mut engine = ParallaxEngine::new(EngineConfig::premium());
    engine.retarget(1.0);
    while engine.tick() {}
    let t = engine.transforms();
    assert!(t.foreground.scale > 1.0);
    assert!(t.foreground.rotation_deg > 0.0);
    assert_eq!(t.background.scale, 1.0);
}
