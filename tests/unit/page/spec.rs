use super::*;
use crate::tracker::progress::ProgressModel;

#[test]
fn builtin_page_is_valid() {
    let page = PageSpec::setalia();
    page.validate().unwrap();
    assert_eq!(page.panels.len(), 5);
    assert!(page.panels[0].foreground_image.is_some());
    assert!(page.panels[1..].iter().all(|p| p.foreground_image.is_none()));
}

#[test]
fn engine_for_prefers_override_then_kind() {
    let page = PageSpec::setalia();
    let image = PanelSpec::image("A", "B", "bg.png", "");
    assert_eq!(page.engine_for(&image), EngineConfig::hero());

    let form = image.clone().with_kind(PanelKind::Form);
    assert_eq!(page.engine_for(&form).model, ProgressModel::CenterDistance);

    let mut custom = image;
    custom.engine = Some(EngineConfig::premium());
    assert!(page.engine_for(&custom).premium.is_some());
}

#[test]
fn minimal_json_uses_presets() {
    let page = PageSpec::from_json(
        r#"{ "panels": [ { "title": "T", "subtitle": "S", "background_image": "bg.png" } ] }"#,
    )
    .unwrap();
    assert_eq!(page.image_engine, EngineConfig::hero());
    assert_eq!(page.panels[0].kind, PanelKind::Image);
}

#[test]
fn invalid_pages_are_rejected() {
    assert!(PageSpec::from_json(r#"{ "panels": [] }"#).is_err());
    assert!(PageSpec::from_json("not json").is_err());

    let mut page = PageSpec::setalia();
    page.panels[2].engine = Some(EngineConfig {
        entrance_threshold: 0.9,
        ..EngineConfig::hero()
    });
    let err = page.validate().unwrap_err().to_string();
    assert!(err.contains("panel 2"));

    let mut page = PageSpec::setalia();
    page.panels[0].background_image = " ".to_owned();
    assert!(page.validate().is_err());
}

#[test]
fn builtin_page_roundtrips_through_json() {
    let page = PageSpec::setalia();
    let s = serde_json::to_string_pretty(&page).unwrap();
    assert_eq!(PageSpec::from_json(&s).unwrap(), page);
}
