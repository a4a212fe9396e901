use super::*;

fn params() -> VisParams {
    VisParams {
        width: 32,
        height: 16,
        min_time: 0,
        max_time: 320,
        seed: Some(11),
        ..VisParams::default()
    }
}

#[test]
fn feed_counts_filtered_and_disordered_events() {
    let p = params();
    let mut vis = Visualization::new(VisKind::Wave, &p).unwrap();
    let events = [
        Event::new(10, 5, 0),
        Event::new(30, 5, 1),
        Event::new(20, 5, 0),
        Event::new(400, 5, 0),
        Event::new(40, 5, -1),
    ];
    let filter = EventFilter::window(0, 320).with_status_mask(6);
    let stats = feed_events(&mut vis, VisKind::Wave, &events, &filter);
    assert_eq!(
        stats,
        RenderStats {
            recorded: 3,
            skipped: 2,
            out_of_order: 1,
        }
    );
}

#[test]
fn render_clamps_the_filter_window_to_the_time_range() {
    let events = [Event::new(5, 4, 0), Event::new(500, 4, 0)];
    let (img, stats) =
        render_events(VisKind::Scatter, &params(), &events, &EventFilter::default()).unwrap();
    assert_eq!(img.dimensions(), (32, 16));
    assert_eq!(stats.recorded, 1);
    assert_eq!(stats.skipped, 1);
}

#[test]
fn render_rejects_bad_parameters_before_reading_events() {
    let p = VisParams {
        height: 0,
        ..params()
    };
    assert!(
        render_events(VisKind::Histogram, &p, std::iter::empty(), &EventFilter::default())
            .is_err()
    );
}

#[test]
fn png_writer_creates_parent_dirs() {
    let dir = std::env::temp_dir().join(format!(
        "perspective_png_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    let path = dir.join("nested").join("out.png");
    let img = RgbaImage::from_pixel(4, 3, image::Rgba([1, 2, 3, 255]));
    write_png(&img, &path).unwrap();
    let back = image::open(&path).unwrap().to_rgba8();
    assert_eq!(back, img);
}
