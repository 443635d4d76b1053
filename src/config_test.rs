#![allow(clippy::float_cmp)]

use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + use<> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_defaults() {
    let cfg = AppConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg.session_key, DEFAULT_SESSION_KEY);
    assert_eq!(cfg.engine, EngineSettings::default());
    assert_eq!(cfg.engine.snap_threshold, 50.0);
    assert_eq!(cfg.engine.zoom_limits, ZoomLimits { min: 0.1, max: 3.0 });
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = AppConfig::from_lookup(lookup_from(&[
        ("HEXBOARD_SESSION_KEY", " scenario-61 "),
        ("HEXBOARD_SNAP_THRESHOLD", "25.5"),
        ("HEXBOARD_MIN_ZOOM", "0.5"),
        ("HEXBOARD_MAX_ZOOM", "4"),
    ]))
    .unwrap();
    assert_eq!(cfg.session_key, "scenario-61");
    assert_eq!(cfg.engine.snap_threshold, 25.5);
    assert_eq!(cfg.engine.zoom_limits, ZoomLimits { min: 0.5, max: 4.0 });
}

#[test]
fn from_lookup_rejects_garbage_number() {
    let err = AppConfig::from_lookup(lookup_from(&[("HEXBOARD_SNAP_THRESHOLD", "fifty")])).unwrap_err();
    assert!(matches!(err, ConfigError::NotANumber { var: "HEXBOARD_SNAP_THRESHOLD", ref value } if value == "fifty"));
}

#[test]
fn from_lookup_rejects_non_positive_threshold() {
    let err = AppConfig::from_lookup(lookup_from(&[("HEXBOARD_SNAP_THRESHOLD", "0")])).unwrap_err();
    assert!(matches!(err, ConfigError::NonPositiveThreshold(t) if t == 0.0));
}

#[test]
fn from_lookup_rejects_inverted_zoom_range() {
    let err =
        AppConfig::from_lookup(lookup_from(&[("HEXBOARD_MIN_ZOOM", "2"), ("HEXBOARD_MAX_ZOOM", "1")])).unwrap_err();
    assert!(matches!(err, ConfigError::ZoomRange { .. }));
    assert!(err.to_string().contains("min 2"));
}

#[test]
fn from_lookup_rejects_blank_session_key() {
    let err = AppConfig::from_lookup(lookup_from(&[("HEXBOARD_SESSION_KEY", "   ")])).unwrap_err();
    assert!(matches!(err, ConfigError::EmptySessionKey));
}
