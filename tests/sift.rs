mod common;

use classic_cv::sift::{
    locate_extrema, Candidate, DogPyramid, SiftExtractor, SiftParams, DESCRIPTOR_LEN,
};
use classic_cv::{sift_features, ImageU8, VisionError};
use common::synthetic_image::{binary_noise_u8, blobs_u8, checkerboard_u8};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn scene() -> ImageU8 {
    blobs_u8(96, 80, &[(24, 20), (60, 44), (30, 60)], 7)
}

fn textured() -> ImageU8 {
    binary_noise_u8(128, 112, 7)
}

/// Two octaves with two interior DoG layers each; every candidate with a
/// non-zero gradient survives the magnitude filter.
fn permissive() -> SiftParams {
    SiftParams {
        octaves: 2,
        scales: 5,
        threshold: 0.0,
    }
}

#[test]
fn keypoints_respect_layout_and_margins() {
    init_logger();
    let params = permissive();
    let out = SiftExtractor::new(params)
        .extract_with_report(&textured())
        .expect("sift on noise");

    assert_eq!(out.report.levels.len(), params.octaves * params.scales);
    assert_eq!(out.report.keypoint_count, out.keypoints.len());
    assert!(out.keypoints.len() <= out.report.candidate_count);
    assert!(!out.keypoints.is_empty());

    for kp in &out.keypoints {
        let level = out
            .report
            .levels
            .iter()
            .find(|l| l.octave == kp.octave && l.scale == 0)
            .expect("octave is reported");
        assert!(kp.layer >= 1 && kp.layer + 3 <= params.scales);
        assert!(kp.x >= 8 && kp.x + 10 <= level.width);
        assert!(kp.y >= 8 && kp.y + 10 <= level.height);
        assert_eq!(kp.descriptor.as_slice().len(), DESCRIPTOR_LEN);
        assert!(kp.descriptor.as_slice().iter().all(|&v| v >= 0.0));
        // The keypoint's own non-zero magnitude lands in one of its cells.
        assert!(kp.descriptor.as_slice().iter().sum::<f32>() > 0.0);
        assert!(kp.orientation.is_finite());
    }
}

#[test]
fn smooth_blobs_keep_no_keypoints_at_default_threshold() {
    let out = SiftExtractor::default()
        .extract_with_report(&scene())
        .unwrap();
    assert!(out.keypoints.is_empty());
    assert_eq!(out.report.keypoint_count, 0);
}

#[test]
fn octave_sizes_halve() {
    let out = SiftExtractor::new(SiftParams {
        octaves: 3,
        scales: 3,
        threshold: 0.5,
    })
    .extract_with_report(&checkerboard_u8(64, 48, 8))
    .unwrap();
    let firsts: Vec<(usize, usize)> = out
        .report
        .levels
        .iter()
        .filter(|l| l.scale == 0)
        .map(|l| (l.width, l.height))
        .collect();
    assert_eq!(firsts, vec![(64, 48), (32, 24), (16, 12)]);
}

#[test]
fn extraction_is_deterministic() {
    let img = textured();
    let p = permissive();
    let a = sift_features(&img, p.octaves, p.scales, p.threshold).unwrap();
    let b = sift_features(&img, p.octaves, p.scales, p.threshold).unwrap();
    assert!(!a.is_empty());
    assert_eq!(a, b);
}

#[test]
fn flat_image_has_no_keypoints() {
    let img = ImageU8::filled(64, 64, 117);
    let out = SiftExtractor::default().extract_with_report(&img).unwrap();
    assert_eq!(out.report.candidate_count, 0);
    assert!(out.keypoints.is_empty());
}

#[test]
fn invalid_scale_space_is_rejected() {
    let img = scene();
    assert!(matches!(
        sift_features(&img, 0, 4, 0.9),
        Err(VisionError::InvalidScaleSpace { octaves: 0, .. })
    ));
    assert!(matches!(
        sift_features(&img, 2, 1, 0.9),
        Err(VisionError::InvalidScaleSpace { scales: 1, .. })
    ));
}

#[test]
fn single_peak_in_middle_layer_is_the_only_candidate() {
    let below = ImageU8::filled(20, 20, 10);
    let mut middle = ImageU8::filled(20, 20, 10);
    middle.set(10, 10, 200);
    let above = ImageU8::filled(20, 20, 10);
    let dog = DogPyramid::from_layers(vec![vec![below, middle, above]]);

    assert_eq!(
        locate_extrema(&dog),
        vec![Candidate {
            x: 10,
            y: 10,
            octave: 0,
            layer: 1
        }]
    );
}
