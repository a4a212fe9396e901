use super::*;
use crate::raster::color::{gray, rgb};

#[test]
fn new_canvas_is_uniform_background() {
    let c = Canvas::new(4, 3, 32);
    assert_eq!((c.width(), c.height()), (4, 3));
    assert!(c.image().pixels().all(|px| *px == gray(32)));
}

#[test]
fn out_of_bounds_access_is_ignored() {
    let mut c = Canvas::new(4, 3, 0);
    c.set(-1, 0, rgb(255, 0, 0));
    c.set(4, 0, rgb(255, 0, 0));
    c.set(0, 3, rgb(255, 0, 0));
    c.update(0, -1, |px| px[0] = 255);
    assert!(c.pixel(-1, 0).is_none());
    assert!(c.pixel_mut(0, 3).is_none());
    assert!(c.image().pixels().all(|px| *px == gray(0)));
}

#[test]
fn grid_lines_span_the_canvas() {
    let mut c = Canvas::new(8, 4, 0);
    c.grid_column(2);
    c.grid_row(1);
    for y in 0..4 {
        assert_eq!(c.pixel(2, y), Some(gray(GRID_LEVEL)));
    }
    for x in 0..8 {
        assert_eq!(c.pixel(x, 1), Some(gray(GRID_LEVEL)));
    }
    assert_eq!(c.pixel(3, 2), Some(gray(0)));
}

#[test]
fn grid_divisions_draws_interior_lines_only() {
    let mut c = Canvas::new(8, 2, 0);
    c.grid_divisions(4);
    let lined: Vec<i64> = (0..8)
        .filter(|&x| c.pixel(x, 0) == Some(gray(GRID_LEVEL)))
        .collect();
    assert_eq!(lined, vec![2, 4, 6]);
}

#[test]
fn grid_doublings_walks_up_from_bottom() {
    let mut c = Canvas::new(2, 10, 0);
    c.grid_doublings(4.0);
    let lined: Vec<i64> = (0..10)
        .filter(|&y| c.pixel(0, y) == Some(gray(GRID_LEVEL)))
        .collect();
    assert_eq!(lined, vec![2, 6]);
}
