//! Gaussian kernel synthesis and blur.
use super::convolve::convolve_u8;
use crate::error::{Result, VisionError};
use crate::image::ImageU8;
use crate::kernel::Kernel;
use std::f64::consts::PI;

/// Square Gaussian kernel of side `ceil(2·radius + 1)`, normalised to sum 1.
///
/// Cell `(x, y)` starts as `exp(-((x-r)² + (y-r)²) / 2σ²) / 2πσ²`; weights are
/// evaluated in `f64` and narrowed after normalisation. Fails with
/// `InvalidRadius` when `radius <= 0` and `InvalidSigma` when `sigma` is not
/// a positive finite number.
pub fn gaussian_kernel(radius: f32, sigma: f32) -> Result<Kernel> {
    if radius <= 0.0 || !radius.is_finite() {
        return Err(VisionError::InvalidRadius(radius));
    }
    if sigma <= 0.0 || !sigma.is_finite() {
        return Err(VisionError::InvalidSigma(sigma));
    }

    let r = radius as f64;
    let sig_sqr = (sigma as f64) * (sigma as f64);
    let side = (2.0 * r + 1.0).ceil() as usize;
    let mut weights = Vec::with_capacity(side * side);
    for y in 0..side {
        for x in 0..side {
            let dx = x as f64 - r;
            let dy = y as f64 - r;
            weights.push((-(dx * dx + dy * dy) / (2.0 * sig_sqr)).exp() / (2.0 * PI * sig_sqr));
        }
    }
    let sum: f64 = weights.iter().sum();
    let weights = weights.into_iter().map(|w| (w / sum) as f32).collect();
    Kernel::from_vec(side, side, weights)
}

/// Blur an intensity grid with `gaussian_kernel(radius, sigma)`.
pub fn gaussian_blur(src: &ImageU8, radius: f32, sigma: f32) -> Result<ImageU8> {
    let kernel = gaussian_kernel(radius, sigma)?;
    convolve_u8(src, &kernel)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn weights_sum_to_one() {
        for &(radius, sigma) in &[(1.0, 1.0), (2.0, 0.5), (4.0, 1.0), (5.0, 1.68), (1.5, 3.0)] {
            let k = gaussian_kernel(radius, sigma).unwrap();
            assert_relative_eq!(k.sum(), 1.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn side_is_ceil_of_two_radius_plus_one() {
        assert_eq!(gaussian_kernel(1.0, 1.0).unwrap().width(), 3);
        assert_eq!(gaussian_kernel(4.0, 1.0).unwrap().width(), 9);
        assert_eq!(gaussian_kernel(1.5, 1.0).unwrap().width(), 4);
        assert_eq!(gaussian_kernel(0.2, 1.0).unwrap().width(), 2);
    }

    #[test]
    fn kernel_is_symmetric_and_peaks_at_centre() {
        let k = gaussian_kernel(2.0, 1.0).unwrap();
        let c = k.at(2, 2);
        for y in 0..5 {
            for x in 0..5 {
                assert!(k.at(x, y) <= c);
                assert_eq!(k.at(x, y), k.at(4 - x, y));
                assert_eq!(k.at(x, y), k.at(y, x));
            }
        }
    }

    #[test]
    fn repeated_synthesis_is_bit_identical() {
        let a = gaussian_kernel(1.0, 1.0).unwrap();
        let b = gaussian_kernel(1.0, 1.0).unwrap();
        let bits = |k: &Kernel| k.weights().iter().map(|w| w.to_bits()).collect::<Vec<_>>();
        assert_eq!(bits(&a), bits(&b));
    }

    #[test]
    fn non_positive_radius_is_rejected() {
        let src = ImageU8::filled(4, 4, 10);
        assert!(matches!(
            gaussian_blur(&src, 0.0, 1.0),
            Err(VisionError::InvalidRadius(_))
        ));
        assert!(gaussian_kernel(-1.0, 1.0).is_err());
        assert!(gaussian_kernel(f32::NAN, 1.0).is_err());
    }

    #[test]
    fn non_positive_sigma_is_rejected() {
        assert!(matches!(
            gaussian_kernel(2.0, 0.0),
            Err(VisionError::InvalidSigma(_))
        ));
    }

    #[test]
    fn blur_preserves_flat_image() {
        let src = ImageU8::filled(10, 8, 100);
        let out = gaussian_blur(&src, 2.0, 1.0).unwrap();
        assert_eq!(out.size(), (10, 8));
        assert!(out.data.iter().all(|&v| v == 100));
    }
}
