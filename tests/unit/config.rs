use super::*;

fn params() -> VisParams {
    VisParams {
        min_time: 0,
        max_time: 1000,
        period_start: 0,
        ..VisParams::default()
    }
}

#[test]
fn defaults_match_the_command_line() {
    let p = VisParams::default();
    assert_eq!((p.width, p.height, p.background), (256, 128, 32));
    assert_eq!(p.min_time, 0);
    assert!(p.max_time > 1_600_000_000);
    assert_eq!(p.run_time_scale, 16.0);
    assert_eq!(p.color_steps, 1.0);
    assert_eq!(p.resonance, 0.85);
    assert_eq!(p.period_length, None);
    assert_eq!(p.seed, None);
}

#[test]
fn json_fills_missing_fields_with_defaults() {
    let p = VisParams::from_json_str(r#"{"width": 64, "max_time": 500, "seed": 3}"#).unwrap();
    assert_eq!(p.width, 64);
    assert_eq!(p.height, 128);
    assert_eq!(p.max_time, 500);
    assert_eq!(p.seed, Some(3));
}

#[test]
fn unknown_json_fields_are_rejected() {
    let err = VisParams::from_json_str(r#"{"widht": 64}"#).unwrap_err();
    assert!(matches!(err, PerspectiveError::Serde(_)), "{err}");
}

#[test]
fn missing_file_reports_the_path() {
    let err = VisParams::from_json_path("/definitely/not/here.json").unwrap_err();
    assert!(err.to_string().contains("/definitely/not/here.json"), "{err}");
}

#[test]
fn geometry_must_be_non_degenerate() {
    let p = VisParams { width: 0, ..params() };
    assert!(matches!(p.validate_for(VisKind::Scatter), Err(PerspectiveError::Validation(_))));
    let p = VisParams { max_time: 0, ..params() };
    assert!(p.validate_for(VisKind::Ribbon).is_err());
}

#[test]
fn color_steps_and_scale_must_be_positive() {
    let p = VisParams { color_steps: 0.0, ..params() };
    assert!(p.validate_for(VisKind::Starfield).is_err());
    let p = VisParams { run_time_scale: f64::NAN, ..params() };
    assert!(p.validate_for(VisKind::Histogram).is_err());
}

#[test]
fn resonance_is_checked_only_where_it_matters() {
    let p = VisParams { resonance: 1.0, ..params() };
    assert!(p.validate_for(VisKind::CountLines).is_err());
    assert!(p.validate_for(VisKind::MedianLines).is_err());
    assert!(p.validate_for(VisKind::Scatter).is_ok());
}

#[test]
fn polar_periods_must_be_positive_when_given() {
    let p = VisParams { period_length: Some(0), ..params() };
    assert!(p.validate_for(VisKind::PolarScatter).is_err());
    assert!(p.validate_for(VisKind::Sweep).is_ok());
    let p = VisParams { period_length: Some(60), ..params() };
    assert!(p.validate_for(VisKind::PolarStarfield).is_ok());
}

#[test]
fn params_round_trip_through_json() {
    let p = VisParams { seed: Some(9), period_length: Some(86_400), ..params() };
    let s = serde_json::to_string(&p).unwrap();
    assert_eq!(VisParams::from_json_str(&s).unwrap(), p);
}
