use super::*;

#[test]
fn presets_validate() {
    SceneConfig::diorama().validate().unwrap();
    SceneConfig::night_sea().validate().unwrap();
    assert_eq!(SceneConfig::default(), SceneConfig::diorama());
}

#[test]
fn json_roundtrip_preserves_config() {
    for cfg in [SceneConfig::diorama(), SceneConfig::night_sea()] {
        let s = cfg.to_json_pretty().unwrap();
        let back = SceneConfig::from_json_str(&s).unwrap();
        assert_eq!(back.timestep, cfg.timestep);
        assert_eq!(back.stop_motion, cfg.stop_motion);
        assert_eq!(back.camera, cfg.camera);
        assert_eq!(back.water.field.bands.len(), cfg.water.field.bands.len());
        assert!((back.water.field.wind - cfg.water.field.wind).hypot() < 1e-12);
    }
}

#[test]
fn loading_normalizes_wind() {
    let mut cfg = SceneConfig::night_sea();
    cfg.water.field.wind = Vec2::new(3.0, 4.0);
    let s = serde_json::to_string(&cfg).unwrap();

    let back = SceneConfig::from_json_str(&s).unwrap();
    assert!((back.water.field.wind.x - 0.6).abs() < 1e-12);
    assert!((back.water.field.wind.y - 0.8).abs() < 1e-12);
}

#[test]
fn missing_sections_fall_back_to_diorama() {
    let cfg = SceneConfig::from_json_str(r#"{ "star_opacity": 0.25 }"#).unwrap();
    assert_eq!(cfg.star_opacity, 0.25);
    assert_eq!(cfg.camera, SceneConfig::diorama().camera);
    assert_eq!(cfg.timestep, Timestep::Variable);
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = SceneConfig::from_json_str("{ not json").unwrap_err();
    assert!(matches!(err, SwellError::Serde(_)));
}

#[test]
fn out_of_range_values_are_rejected() {
    let mut cfg = SceneConfig::diorama();
    cfg.star_opacity = 1.5;
    assert!(cfg.validate().is_err());

    let mut cfg = SceneConfig::diorama();
    cfg.raft.probe_offset = 0.0;
    assert!(cfg.validate().is_err());

    let mut cfg = SceneConfig::diorama();
    cfg.raft.smoothing = Smoothing::PerFrame { factor: 1.5 };
    assert!(cfg.validate().is_err());

    let mut cfg = SceneConfig::diorama();
    cfg.camera.fov_deg = 0.0;
    assert!(cfg.validate().is_err());

    let mut cfg = SceneConfig::diorama();
    cfg.lighting.sun_intensity = -1.0;
    assert!(cfg.validate().is_err());

    let mut cfg = SceneConfig::night_sea();
    cfg.timestep = Timestep::Fixed {
        fps: Fps { num: 60, den: 0 },
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn load_reports_missing_file() {
    let err = SceneConfig::load(Path::new("does/not/exist.json")).unwrap_err();
    assert!(matches!(err, SwellError::Other(_)));
    assert!(format!("{err:#}").contains("exist.json"));
}
