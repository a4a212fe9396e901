use super::*;
use crate::foundation::core::TimeRange;
use crate::raster::canvas::GRID_LEVEL;

fn line() -> RunTimeLine {
    let g = Geometry::new(32, 96, 0, TimeRange::new(0, 32).unwrap()).unwrap();
    RunTimeLine::new(g, LogScale::new(8.0), 0)
}

fn rgb(img: &RgbaImage, x: u32, y: u32) -> [u8; 3] {
    let px = img.get_pixel(x, y);
    [px[0], px[1], px[2]]
}

#[test]
fn no_data_renders_grid_only() {
    let img = line().render();
    assert!(img.pixels().all(|px| px[0] == 0 || px[0] == GRID_LEVEL));
    assert_eq!(img.get_pixel(3, 88)[0], GRID_LEVEL);
}

#[test]
fn single_column_gets_dotted_lead_in_and_tail() {
    let mut v = line();
    v.record(&Event::new(10, 16, 0));
    let img = v.render();
    // mean 16 s -> 32 px above the bottom, stroke 2 px thick
    for x in [0, 4, 8, 10, 14, 30] {
        assert_eq!(rgb(&img, x, 63), [32, 32, 160], "column {x}");
        assert_eq!(rgb(&img, x, 62), [32, 32, 160], "column {x}");
    }
    for x in [1, 5, 9, 11, 12] {
        assert_eq!(rgb(&img, x, 63), [0, 0, 0], "column {x}");
    }
}

#[test]
fn consecutive_columns_are_connected() {
    let mut v = line();
    v.record(&Event::new(0, 2, 0));
    v.record(&Event::new(4, 32, 1));
    let img = v.render();
    for x in 0..4 {
        let lo = 8 + 8 * x as i64;
        let y = (96 - lo - 1) as u32;
        assert_eq!(rgb(&img, x, y), [160, 32, 32], "column {x}");
    }
    assert_eq!(rgb(&img, 3, 58), [160, 32, 32]);
    assert_eq!(rgb(&img, 1, 58), [0, 0, 0]);
}

#[test]
fn stroke_color_mixes_statuses() {
    let mut v = line();
    v.record(&Event::new(20, 4, 0));
    v.record(&Event::new(20, 4, 2));
    let img = v.render();
    // mean 4 s -> 16 px up
    assert_eq!(rgb(&img, 20, 79), [96, 32, 96]);
}

#[test]
fn out_of_range_events_are_ignored() {
    let mut v = line();
    v.record(&Event::new(32, 4, 0));
    v.record(&Event::new(-1, 4, 0));
    assert_eq!(v.render(), line().render());
}
