use super::*;

fn dial(phase_point: i64, period: Option<i64>) -> PolarProjection {
    PolarProjection::new(
        100,
        100,
        TimeRange::new(0, 1000).unwrap(),
        phase_point,
        period,
        LogScale::new(16.0),
    )
}

#[test]
fn phase_point_sits_at_twelve_oclock() {
    let p = dial(0, None);
    assert!((p.angle(0.0) - FRAC_PI_2).abs() < 1e-12);
    assert_eq!(p.point(0.0, 16.0, (0.0, 0.0)), (50, 34));
}

#[test]
fn revolution_runs_clockwise() {
    let p = dial(0, None);
    assert_eq!(p.point(250.0, 16.0, (0.0, 0.0)), (66, 50));
    assert_eq!(p.point(500.0, 16.0, (0.0, 0.0)), (50, 66));
    assert_eq!(p.point(750.0, 16.0, (0.0, 0.0)), (34, 50));
}

#[test]
fn period_defaults_to_range_span() {
    assert_eq!(dial(0, None).period(), 1000.0);
    assert_eq!(dial(0, Some(-1)).period(), 1000.0);
    assert_eq!(dial(0, Some(0)).period(), 1000.0);
    assert_eq!(dial(0, Some(60)).period(), 60.0);
}

#[test]
fn angles_repeat_every_period() {
    let p = dial(1030, Some(100));
    assert!((p.angle(30.0) - FRAC_PI_2).abs() < 1e-12);
    assert!((p.angle(130.0) - p.angle(930.0)).abs() < 1e-12);
}

#[test]
fn radius_follows_log_scale() {
    let p = dial(0, None);
    assert_eq!(p.radius(1.0), 0.0);
    assert_eq!(p.radius(4.0), 32.0);
    assert_eq!(p.center(), (50, 50));
}
