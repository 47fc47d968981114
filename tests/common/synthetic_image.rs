use classic_cv::image::ops::map_pixels;
use classic_cv::ImageU8;

/// Generates a simple high-contrast checkerboard image.
pub fn checkerboard_u8(width: usize, height: usize, cell: usize) -> ImageU8 {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(cell > 0, "cell size must be positive");

    map_pixels(width, height, |x, y| {
        if (x / cell + y / cell) & 1 == 0 {
            32u8
        } else {
            220u8
        }
    })
}

/// Dark background with filled bright squares of side `size` at `centres`.
pub fn blobs_u8(width: usize, height: usize, centres: &[(usize, usize)], size: usize) -> ImageU8 {
    let half = size / 2;
    map_pixels(width, height, |x, y| {
        let inside = centres
            .iter()
            .any(|&(cx, cy)| x.abs_diff(cx) <= half && y.abs_diff(cy) <= half);
        if inside {
            230u8
        } else {
            20u8
        }
    })
}

/// Left half 0, right half 255, with a single mid-grey column at `split`.
pub fn vertical_step_u8(width: usize, height: usize, split: usize) -> ImageU8 {
    map_pixels(width, height, |x, _| match x.cmp(&split) {
        std::cmp::Ordering::Less => 0u8,
        std::cmp::Ordering::Equal => 128,
        std::cmp::Ordering::Greater => 255,
    })
}

/// Black/white pixel noise from a fixed-seed linear congruential generator.
pub fn binary_noise_u8(width: usize, height: usize, seed: u64) -> ImageU8 {
    let mut state = seed;
    let data = (0..width * height)
        .map(|_| {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            if (state >> 33) & 1 == 0 {
                0u8
            } else {
                255u8
            }
        })
        .collect();
    ImageU8::from_vec(width, height, data).expect("buffer matches dimensions")
}
