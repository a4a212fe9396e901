use super::*;
use crate::foundation::core::TimeRange;
use crate::raster::bloom::BLOOM_KERNEL;

fn geometry() -> Geometry {
    Geometry::new(64, 64, 0, TimeRange::new(0, 64).unwrap()).unwrap()
}

#[test]
fn isolated_success_blooms_over_its_footprint() {
    let mut v = Starfield::new(geometry(), LogScale::new(16.0), 1.0, 0);
    let blank = v.render();
    // run 3 -> row 64 - 25 = 39, column 20
    v.record(&Event::new(20, 3, 0));
    let img = v.render();
    let lit = img
        .pixels()
        .zip(blank.pixels())
        .filter(|(a, b)| a != b)
        .count();
    assert_eq!(lit, 25);
    assert_eq!(img.get_pixel(20, 39)[2], 255);
    let edge = 255.0 * BLOOM_KERNEL[2][3];
    assert_eq!(f64::from(img.get_pixel(21, 39)[2]), edge.ceil());
    assert_eq!(img.get_pixel(23, 39)[2], 0);
}

#[test]
fn repeated_hits_accumulate_and_saturate() {
    let mut v = Starfield::new(geometry(), LogScale::new(16.0), 4.0, 0);
    let e = Event::new(20, 3, 0);
    let mut last = 0;
    for _ in 0..4 {
        v.record(&e);
        let b = v.render().get_pixel(20, 39)[2];
        assert!(b >= last);
        last = b;
    }
    assert_eq!(last, 255);
}

#[test]
fn status_layers_composite_to_their_channels() {
    let mut v = Starfield::new(geometry(), LogScale::new(16.0), 1.0, 0);
    v.record(&Event::new(10, 3, 1));
    v.record(&Event::new(40, 3, -1));
    let img = v.render();
    let f = img.get_pixel(10, 39);
    assert_eq!([f[0], f[1], f[2]], [255, 0, 0]);
    let a = img.get_pixel(40, 39);
    assert_eq!([a[0], a[1], a[2]], [0, 255, 0]);
}

#[test]
fn events_off_the_canvas_leave_no_trace() {
    let mut v = Starfield::new(geometry(), LogScale::new(16.0), 1.0, 0);
    let blank = v.render();
    v.record(&Event::new(64, 3, 0));
    v.record(&Event::new(-3, 3, 0));
    v.record(&Event::new(20, 1, 0));
    assert_eq!(v.render(), blank);
}

#[test]
fn polar_starfield_draws_crosshairs_and_one_blob() {
    let g = geometry();
    let projection = PolarProjection::new(64, 64, g.range, 0, None, LogScale::new(7.0));
    let mut v = PolarStarfield::new(g, projection, 1.0, Jitter::new(Some(9)));
    v.record(&Event::new(16, 16, 0));
    let img = v.render();
    assert_eq!(img.get_pixel(32, 5)[0], crate::raster::canvas::GRID_LEVEL);
    assert_eq!(img.get_pixel(5, 32)[0], crate::raster::canvas::GRID_LEVEL);
    // a quarter period in: angle 0, radius ~28
    let brightest = img
        .enumerate_pixels()
        .max_by_key(|(_, _, px)| px[2])
        .map(|(x, y, _)| (x, y))
        .unwrap();
    assert!((58..=62).contains(&brightest.0), "{brightest:?}");
    assert_eq!(brightest.1, 32);
}
