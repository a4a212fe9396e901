use super::*;
use crate::foundation::core::TimeRange;

fn geometry(width: u32, height: u32) -> Geometry {
    Geometry::new(width, height, 7, TimeRange::new(0, i64::from(width)).unwrap()).unwrap()
}

fn column(img: &RgbaImage, x: u32) -> Vec<Rgba<u8>> {
    (0..img.height()).map(|y| *img.get_pixel(x, y)).collect()
}

#[test]
fn segments_fill_the_column_exactly() {
    assert_eq!(stack_segments(&[1, 1, 1], 3, 10), vec![4, 4, 2]);
    assert_eq!(stack_segments(&[0, 5, 0], 5, 10), vec![0, 10, 0]);
    for counts in [vec![1u64, 2, 3, 4], vec![7, 0, 13], vec![1; 9], vec![999, 1]] {
        let total = counts.iter().sum();
        for height in [1u32, 7, 128, 1000] {
            let segs = stack_segments(&counts, total, height);
            assert_eq!(segs.iter().sum::<u32>(), height, "{counts:?} in {height}");
        }
    }
}

#[test]
fn partial_totals_never_overflow_the_column() {
    let segs = stack_segments(&[3, 3], 10, 10);
    assert_eq!(segs, vec![3, 3]);
    assert!(stack_segments(&[9, 9], 10, 10).iter().sum::<u32>() <= 10);
}

#[test]
fn zero_total_is_blank() {
    assert_eq!(stack_segments(&[0, 0], 0, 10), vec![0, 0]);
    for v in [
        StatusStack::new(geometry(4, 8)).render(),
        ErrorStack::new(geometry(4, 8)).render(),
        RollingStack::new(geometry(4, 8)).render(),
    ] {
        assert!(v.pixels().all(|px| *px == color::gray(7)));
    }
}

#[test]
fn status_stack_puts_failures_under_successes() {
    let mut v = StatusStack::new(geometry(3, 8));
    for _ in 0..3 {
        v.record(&Event::new(0, 1, 0));
    }
    v.record(&Event::new(0, 1, 1));
    v.record(&Event::new(0, 1, -1));
    let img = v.render();
    let col = column(&img, 2);
    let red = color::failure_class_color(1, 2);
    assert_eq!(&col[6..], &[red, red]);
    assert!(col[..6].iter().all(|px| *px == color::SUCCESS_BAR));
    assert_eq!(column(&img, 0), col);
}

#[test]
fn error_stack_counts_failures_only() {
    let mut v = ErrorStack::new(geometry(2, 8));
    v.record(&Event::new(0, 1, 1));
    for _ in 0..3 {
        v.record(&Event::new(0, 1, 3));
    }
    v.record(&Event::new(0, 1, 0));
    v.record(&Event::new(0, 1, -2));
    let col = column(&v.render(), 1);
    let (c1, c3) = (
        color::failure_class_color(1, 4),
        color::failure_class_color(3, 4),
    );
    assert_eq!(&col[6..], &[c1, c1]);
    assert!(col[..6].iter().all(|px| *px == c3));
}

#[test]
fn rolling_stack_normalizes_each_column() {
    let mut v = RollingStack::new(geometry(4, 4));
    v.record(&Event::new(0, 1, 0));
    v.record(&Event::new(2, 1, 2));
    v.record(&Event::new(2, 1, 0));
    v.record(&Event::new(10, 1, 0));
    v.record(&Event::new(-1, 1, 2));
    v.record(&Event::new(1, 1, -1));
    let img = v.render();

    assert!(column(&img, 0).iter().all(|px| *px == color::SUCCESS_BAR));
    assert!(column(&img, 1).iter().all(|px| *px == color::gray(7)));
    let red = color::failure_class_color(2, 3);
    assert_eq!(
        column(&img, 2),
        vec![color::SUCCESS_BAR, color::SUCCESS_BAR, red, red]
    );
    assert!(column(&img, 3).iter().all(|px| *px == color::SUCCESS_BAR));
}
