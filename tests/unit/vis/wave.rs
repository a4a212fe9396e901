use super::*;
use crate::foundation::core::TimeRange;

fn wave(sorted: bool) -> Wave {
    let g = Geometry::new(10, 20, 0, TimeRange::new(0, 10).unwrap()).unwrap();
    Wave::new(g, sorted)
}

#[test]
fn expired_events_are_pruned_before_drawing() {
    let mut v = wave(false);
    v.record(&Event::new(0, 10, 0));
    v.record(&Event::new(1, 10, 4));
    v.record(&Event::new(2, 1, 0));
    assert_eq!(v.open_counts(), (2, 1));
    v.record(&Event::new(3, 0, -1));
    assert_eq!(v.open_counts(), (1, 1));

    let img = v.render();
    // success(0, 10) at age 3: 255 * 3 / 11
    let s = img.get_pixel(3, 9);
    assert_eq!([s[0], s[1], s[2]], [18, 18, 70]);
    // failure(1, 10) at age 2: 255 * 2 / 11
    let f = img.get_pixel(3, 10);
    assert_eq!([f[0], f[1], f[2]], [47, 12, 12]);
    assert_eq!(img.get_pixel(3, 8)[2], 0);
    assert_eq!(img.get_pixel(3, 11)[0], 0);
}

#[test]
fn strips_stack_most_recent_first() {
    let mut v = wave(false);
    v.record(&Event::new(0, 100, 0));
    v.record(&Event::new(1, 2, 0));
    v.record(&Event::new(2, 0, -1));
    let img = v.render();
    assert_eq!(img.get_pixel(2, 9)[2], 85);
    assert_eq!(img.get_pixel(2, 8)[2], 6);
}

#[test]
fn sorted_strips_stack_dimmest_first() {
    let mut v = wave(true);
    v.record(&Event::new(0, 100, 0));
    v.record(&Event::new(1, 2, 0));
    v.record(&Event::new(2, 0, -1));
    let img = v.render();
    assert_eq!(img.get_pixel(2, 9)[2], 6);
    assert_eq!(img.get_pixel(2, 8)[2], 85);
}

#[test]
fn skipped_columns_are_all_drawn() {
    let mut v = wave(false);
    v.record(&Event::new(0, 100, 0));
    v.record(&Event::new(5, 0, -1));
    let img = v.render();
    for x in 1..=5 {
        assert_eq!(img.get_pixel(x, 9)[2], 13, "column {x}");
    }
    assert_eq!(img.get_pixel(6, 9)[2], 0);
}

#[test]
fn late_events_never_redraw_columns() {
    let mut v = wave(false);
    v.record(&Event::new(0, 100, 0));
    v.record(&Event::new(5, 0, -1));
    let before = v.render();
    v.record(&Event::new(2, 100, 3));
    assert_eq!(v.render(), before);
    assert_eq!(v.open_counts(), (1, 1));
}

#[test]
fn first_event_claims_column_zero() {
    let mut v = wave(false);
    v.record(&Event::new(0, 100, 0));
    assert_eq!(v.column, 0);
    // Events are only ever drawn at age 0 there, so column 0 stays at the background.
    let img = v.render();
    assert_eq!(img.get_pixel(0, 9)[2], 0);
    v.record(&Event::new(1, 0, -1));
    assert_eq!(v.column, 1);
}
