use super::*;

#[test]
fn background_failure_falls_back_to_fill() {
    let mut imgs = PanelImagery::new("hero-background.png", None);
    assert_eq!(imgs.fallback(ImageLayer::Background), None);
    let fb = imgs.mark_failed(ImageLayer::Background);
    assert_eq!(
        fb,
        Some(ImageFallback::Fill {
            color: Rgba8::BLACK_SILK
        })
    );
    assert_eq!(imgs.background.state, ImageState::Failed);
    assert_eq!(imgs.fallback(ImageLayer::Background), fb);
}

#[test]
fn foreground_failure_hides_element() {
    let mut imgs = PanelImagery::new("bg.png", Some("fg.png"));
    assert_eq!(
        imgs.mark_failed(ImageLayer::Foreground),
        Some(ImageFallback::Hidden)
    );
}

#[test]
fn missing_foreground_slot_is_ignored() {
    let mut imgs = PanelImagery::new("bg.png", None);
    assert_eq!(imgs.mark_failed(ImageLayer::Foreground), None);
    imgs.mark_loaded(ImageLayer::Foreground);
    assert!(imgs.foreground.is_none());
}

#[test]
fn failure_is_sticky_without_retry() {
    let mut imgs = PanelImagery::new("bg.png", None);
    imgs.mark_failed(ImageLayer::Background);
    imgs.mark_failed(ImageLayer::Background);
    imgs.mark_loaded(ImageLayer::Background);
    assert_eq!(imgs.background.state, ImageState::Failed);
}

#[test]
fn load_marks_pending_slot() {
    let mut imgs = PanelImagery::new("bg.png", Some("fg.png"));
    imgs.mark_loaded(ImageLayer::Foreground);
    assert_eq!(imgs.foreground.unwrap().state, ImageState::Loaded);
}
