use super::*;
use crate::foundation::core::TimeRange;

fn geometry(width: u32, height: u32) -> Geometry {
    Geometry::new(width, height, 0, TimeRange::new(0, 100).unwrap()).unwrap()
}

#[test]
fn success_hits_brighten_blue_until_saturated() {
    let mut v = Scatter::new(geometry(100, 64), LogScale::new(16.0), 4.0, 0);
    let e = Event::new(50, 3, 0);
    let mut last = 0;
    for hit in 1..=4 {
        v.record(&e);
        let px = *v.render().get_pixel(50, 64 - 25);
        assert!(px[2] >= last);
        assert!(px[0] < px[2] && px[1] < px[2]);
        last = px[2];
        if hit < 4 {
            assert!(px[2] < 255);
        }
    }
    assert_eq!(last, 255);
}

#[test]
fn failures_stay_red_and_active_caps_at_gray() {
    let mut v = Scatter::new(geometry(100, 64), LogScale::new(16.0), 1.0, 0);
    v.record(&Event::new(10, 3, 2));
    for _ in 0..5 {
        v.record(&Event::new(20, 3, -1));
    }
    let img = v.render();
    let failed = img.get_pixel(10, 39);
    assert_eq!([failed[0], failed[1], failed[2]], [255, 0, 0]);
    let active = img.get_pixel(20, 39);
    assert_eq!([active[0], active[1], active[2]], [196, 196, 196]);
}

#[test]
fn off_canvas_events_are_dropped() {
    let mut v = Scatter::new(geometry(100, 64), LogScale::new(16.0), 1.0, 0);
    let before = v.render();
    v.record(&Event::new(100, 3, 0));
    v.record(&Event::new(-1, 3, 0));
    v.record(&Event::new(50, 1, 0));
    v.record(&Event::new(50, -20, 0));
    v.record(&Event::new(50, i32::MAX, 0));
    assert_eq!(v.render(), before);
}

#[test]
fn grid_marks_doublings_and_edges() {
    let v = Scatter::new(geometry(100, 64), LogScale::new(16.0), 1.0, 4);
    let img = v.render();
    for (x, y) in [(0, 10), (25, 10), (75, 10), (10, 0), (10, 63), (10, 48), (10, 16)] {
        assert_eq!(img.get_pixel(x, y)[0], crate::raster::canvas::GRID_LEVEL, "({x}, {y})");
    }
    assert_eq!(img.get_pixel(10, 10)[0], 0);
}

#[test]
fn render_is_repeatable() {
    let mut v = Scatter::new(geometry(100, 64), LogScale::new(16.0), 1.0, 0);
    v.record(&Event::new(50, 3, 0));
    assert_eq!(v.render(), v.render());
}

#[test]
fn polar_points_land_near_their_projection() {
    let g = geometry(100, 100);
    let projection = PolarProjection::new(100, 100, g.range, 0, None, LogScale::new(16.0));
    let mut v = PolarScatter::new(g, projection, 1.0, Jitter::new(Some(11)));
    v.record(&Event::new(0, 4, 0));
    let img = v.render();
    let lit: Vec<(u32, u32)> = img
        .enumerate_pixels()
        .filter(|(_, _, px)| px[2] == 255)
        .map(|(x, y, _)| (x, y))
        .collect();
    assert_eq!(lit.len(), 1);
    let (x, y) = lit[0];
    assert!((48..=52).contains(&x), "x = {x}");
    assert!((17..=20).contains(&y), "y = {y}");
}

#[test]
fn polar_active_events_are_green() {
    let g = geometry(100, 100);
    let projection = PolarProjection::new(100, 100, g.range, 0, None, LogScale::new(16.0));
    let mut v = PolarScatter::new(g, projection, 1.0, Jitter::new(Some(5)));
    v.record(&Event::new(25, 4, -1));
    let greens = v
        .render()
        .pixels()
        .filter(|px| px[1] == 255 && px[0] < 255)
        .count();
    assert_eq!(greens, 1);
}
