use super::*;

#[test]
fn outcome_follows_status_sign() {
    assert_eq!(Event::new(0, 1, 0).outcome(), Outcome::Success);
    assert_eq!(Event::new(0, 1, 3).outcome(), Outcome::Failure(3));
    assert_eq!(Event::new(0, 1, -1).outcome(), Outcome::Active);
}

#[test]
fn run_floored_clamps_skewed_run_times() {
    assert_eq!(Event::new(0, -5, 0).run_floored(), 1.0);
    assert_eq!(Event::new(0, 0, 0).run_floored(), 1.0);
    assert_eq!(Event::new(0, 8, 0).run_floored(), 8.0);
}

#[test]
fn end_does_not_overflow_i32() {
    let e = Event::new(i32::MAX, i32::MAX, 0);
    assert_eq!(e.end(), 2 * i64::from(i32::MAX));
}

#[test]
fn time_range_rejects_empty_and_inverted() {
    assert!(TimeRange::new(10, 10).is_err());
    assert!(TimeRange::new(10, 5).is_err());
    let r = TimeRange::new(10, 20).unwrap();
    assert_eq!(r.span(), 10);
}

