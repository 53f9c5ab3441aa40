use super::*;

#[test]
fn empty_object_yields_defaults() {
    let cfg = EngineConfig::from_json_str("{}").unwrap();
    assert_eq!(cfg, EngineConfig::default());
    assert_eq!(cfg.max_depth, 4);
    assert_eq!(cfg.degeneracy, DegeneracyCheck::Strict);
    assert_eq!(cfg.color_mode, ColorMode::Clamp);
}

#[test]
fn fields_parse_in_snake_case() {
    let cfg = EngineConfig::from_json_str(
        r#"{
            "seed": 9,
            "max_depth": 6,
            "max_attempts": 10,
            "degeneracy": "chained",
            "on_exhausted": "keep_last_attempt",
            "color_mode": "wrap",
            "canvas": { "width": 32, "height": 24 },
            "reset_region": 0.1
        }"#,
    )
    .unwrap();
    assert_eq!(cfg.seed, Some(9));
    assert_eq!(cfg.degeneracy, DegeneracyCheck::Chained);
    assert_eq!(cfg.on_exhausted, ExhaustedPolicy::KeepLastAttempt);
    assert_eq!(cfg.color_mode, ColorMode::Wrap);
    assert_eq!(cfg.canvas, Canvas { width: 32, height: 24 });

    let policy = cfg.retry_policy();
    assert_eq!(policy.max_attempts, 10);
    assert_eq!(policy.check, DegeneracyCheck::Chained);
    assert_eq!(cfg.mutator().max_depth(), 6);
}

#[test]
fn unknown_fields_are_rejected() {
    let err = EngineConfig::from_json_str(r#"{ "max_dept": 3 }"#).unwrap_err();
    assert!(err.to_string().contains("config error:"));
}

#[test]
fn out_of_range_values_fail_validation() {
    for json in [
        r#"{ "max_depth": 17 }"#,
        r#"{ "max_attempts": 0 }"#,
        r#"{ "reset_region": 1.0 }"#,
        r#"{ "reset_region": 0.0 }"#,
        r#"{ "canvas": { "width": 0, "height": 4 } }"#,
    ] {
        let err = EngineConfig::from_json_str(json).unwrap_err();
        assert!(
            err.to_string().contains("validation error:"),
            "{json} -> {err}"
        );
    }
}

#[test]
fn from_path_reports_missing_file() {
    let err = EngineConfig::from_path(Path::new("target/does-not-exist/eruption.json")).unwrap_err();
    assert!(err.to_string().contains("config error:"));
}
