//! Octave × scale pyramid of progressively blurred and halved images.
//!
//! With `k = 2^(1/S)` the blur sequence is `σ[0] = 1`, `σ[i] = σ[i-1]·k`.
//! Image `(0, 0)` is the input itself. The first image of every later octave
//! is the previous octave's first image halved (bilinear). Every other image
//! blurs its left neighbour in the same octave with `σ[col]` and a fixed
//! radius of 5.
use crate::error::{Result, VisionError};
use crate::filters::gaussian_blur;
use crate::image::ops::halve;
use crate::image::ImageU8;
use log::debug;

/// Gaussian radius used for every scale-space blur.
pub const SCALE_BLUR_RADIUS: f32 = 5.0;

#[derive(Clone, Debug)]
pub struct ScaleSpace {
    octaves: Vec<Vec<ImageU8>>,
    sigmas: Vec<f32>,
}

/// `σ[0] = 1`, `σ[i] = σ[i-1]·2^(1/scales)`.
pub fn sigma_sequence(scales: usize) -> Vec<f32> {
    let k = 2f32.powf(1.0 / scales as f32);
    let mut sigmas = Vec::with_capacity(scales);
    let mut sigma = 1.0f32;
    for _ in 0..scales {
        sigmas.push(sigma);
        sigma *= k;
    }
    sigmas
}

impl ScaleSpace {
    /// Build `octaves × scales` images from `img`.
    ///
    /// Fails with `InvalidScaleSpace` unless `octaves >= 1` and `scales >= 2`.
    /// Panics if a blur fails; radius and sigmas are always positive here.
    pub fn build(img: &ImageU8, octaves: usize, scales: usize) -> Result<Self> {
        if octaves == 0 || scales < 2 {
            return Err(VisionError::InvalidScaleSpace { octaves, scales });
        }
        let sigmas = sigma_sequence(scales);
        let mut rows: Vec<Vec<ImageU8>> = Vec::with_capacity(octaves);
        for row in 0..octaves {
            let base = match rows.last() {
                None => img.clone(),
                Some(prev) => halve(&prev[0]),
            };
            let mut images = Vec::with_capacity(scales);
            let mut prev = base;
            for &sigma in &sigmas[1..] {
                let blurred = gaussian_blur(&prev, SCALE_BLUR_RADIUS, sigma)
                    .unwrap_or_else(|e| panic!("scale-space blur failed: {e}"));
                images.push(std::mem::replace(&mut prev, blurred));
            }
            images.push(prev);
            debug!(
                "ScaleSpace octave {row}: {}x{}, {} scales",
                images[0].w,
                images[0].h,
                images.len()
            );
            rows.push(images);
        }
        Ok(Self {
            octaves: rows,
            sigmas,
        })
    }

    pub fn num_octaves(&self) -> usize {
        self.octaves.len()
    }

    pub fn scales_per_octave(&self) -> usize {
        self.sigmas.len()
    }

    pub fn sigmas(&self) -> &[f32] {
        &self.sigmas
    }

    pub fn get(&self, octave: usize, scale: usize) -> &ImageU8 {
        &self.octaves[octave][scale]
    }

    pub fn iter(&self) -> impl Iterator<Item = &[ImageU8]> {
        self.octaves.iter().map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn sigmas_double_over_an_octave() {
        let s = sigma_sequence(4);
        assert_eq!(s.len(), 4);
        assert_eq!(s[0], 1.0);
        assert_relative_eq!(s[3] * 2f32.powf(0.25), 2.0, epsilon = 1e-5);
    }

    #[test]
    fn octaves_halve_resolution() {
        let img = ImageU8::filled(64, 40, 60);
        let space = ScaleSpace::build(&img, 3, 3).unwrap();
        assert_eq!(space.num_octaves(), 3);
        assert_eq!(space.scales_per_octave(), 3);
        assert_eq!(space.sigmas(), sigma_sequence(3).as_slice());
        assert_eq!(space.get(0, 0), &img);
        assert_eq!(space.get(1, 0).size(), (32, 20));
        assert_eq!(space.get(2, 2).size(), (16, 10));
        for octave in space.iter() {
            for level in octave {
                assert!(level.data.iter().all(|&v| v == 60));
            }
        }
    }

    #[test]
    fn degenerate_shapes_are_rejected() {
        let img = ImageU8::filled(8, 8, 0);
        assert!(matches!(
            ScaleSpace::build(&img, 0, 4),
            Err(VisionError::InvalidScaleSpace { .. })
        ));
        assert!(ScaleSpace::build(&img, 2, 1).is_err());
    }
}
