//! Difference-of-Gaussians layers.
//!
//! Layer `i` of an octave is scale-space image `i` minus image `i + 1`,
//! computed in 8-bit arithmetic. Negative differences wrap modulo 256 rather
//! than clamp, and extremum detection sees the wrapped values.
use super::scale_space::ScaleSpace;
use crate::error::Result;
use crate::image::ops::subtract_wrapping;
use crate::image::ImageU8;

#[derive(Clone, Debug)]
pub struct DogPyramid {
    octaves: Vec<Vec<ImageU8>>,
}

impl DogPyramid {
    pub fn from_scale_space(space: &ScaleSpace) -> Result<Self> {
        let octaves = space
            .iter()
            .map(|images| {
                images
                    .windows(2)
                    .map(|pair| subtract_wrapping(&pair[0], &pair[1]))
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { octaves })
    }

    /// Wrap precomputed layers, `layers[octave][layer]`.
    pub fn from_layers(octaves: Vec<Vec<ImageU8>>) -> Self {
        Self { octaves }
    }

    pub fn num_octaves(&self) -> usize {
        self.octaves.len()
    }

    pub fn layers(&self, octave: usize) -> &[ImageU8] {
        &self.octaves[octave]
    }

    pub fn get(&self, octave: usize, layer: usize) -> &ImageU8 {
        &self.octaves[octave][layer]
    }

    /// Layers that have a neighbour on both sides: `1..layers - 1`.
    pub fn interior_layers(&self, octave: usize) -> std::ops::Range<usize> {
        1..self.octaves[octave].len().saturating_sub(1)
    }
}
