mod common;

use classic_cv::edges::{sobel_edges, CannyDetector, CannyParams};
use classic_cv::{canny, VisionError};
use common::synthetic_image::{checkerboard_u8, vertical_step_u8};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn output_is_binary_with_empty_frame() {
    init_logger();
    let img = checkerboard_u8(48, 40, 8);
    let out = CannyDetector::new(CannyParams::default())
        .run_with_report(&img)
        .expect("canny on checkerboard");
    let edges = &out.edges;

    assert_eq!((edges.w, edges.h), (48, 40));
    assert!(edges.data.iter().all(|&v| v == 0 || v == 255));
    for x in 0..edges.w {
        assert_eq!(edges.get(x, 0), 0);
        assert_eq!(edges.get(x, edges.h - 1), 0);
    }
    for y in 0..edges.h {
        assert_eq!(edges.get(0, y), 0);
        assert_eq!(edges.get(edges.w - 1, y), 0);
    }

    let strong = edges.data.iter().filter(|&&v| v == 255).count();
    assert_eq!(out.report.strong_count, strong);
    assert!(out.report.strong_count <= out.report.suppressed_count);
    let labels: Vec<&str> = out
        .report
        .timing
        .stages
        .iter()
        .map(|s| s.label.as_str())
        .collect();
    assert_eq!(labels, ["blur", "gradient", "suppress", "classify"]);
}

#[test]
fn step_edge_is_one_pixel_wide() {
    init_logger();
    let img = vertical_step_u8(40, 30, 20);
    let edges = canny(&img, 4, 100.0).expect("canny on step");
    for y in 1..29 {
        let kept: Vec<usize> = (0..40).filter(|&x| edges.get(x, y) == 255).collect();
        assert_eq!(kept, vec![20], "row {y}");
    }
}

#[test]
fn raising_the_bound_only_removes_edges() {
    let img = vertical_step_u8(40, 30, 20);
    let low = canny(&img, 4, 100.0).unwrap();
    let high = canny(&img, 4, 1.0e6).unwrap();
    assert!(high.data.iter().all(|&v| v == 0));
    assert!(low
        .data
        .iter()
        .zip(&high.data)
        .all(|(&l, &h)| h == 0 || l == 255));
}

#[test]
fn repeated_runs_are_identical() {
    let img = checkerboard_u8(33, 29, 5);
    let a = canny(&img, 3, 80.0).unwrap();
    let b = canny(&img, 3, 80.0).unwrap();
    assert_eq!(a, b);
}

#[test]
fn zero_kernel_size_fails() {
    let img = checkerboard_u8(16, 16, 4);
    assert!(matches!(
        canny(&img, 0, 100.0),
        Err(VisionError::InvalidRadius(_))
    ));
}

#[test]
fn sobel_edges_keep_input_size() {
    let img = vertical_step_u8(24, 12, 12);
    let out = sobel_edges(&img).unwrap();
    assert_eq!((out.w, out.h), (24, 12));
    // Flat regions far from the step have no response.
    assert_eq!(out.get(2, 6), 0);
    assert_eq!(out.get(21, 6), 0);
    assert!(out.get(12, 6) > 0);
}
