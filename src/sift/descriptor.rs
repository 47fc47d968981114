//! Orientation assignment and 128-bin descriptors for DoG extrema.
//!
//! For every interior DoG layer a Sobel gradient field is computed and its
//! magnitude divided by the layer maximum. A candidate survives when its
//! normalized magnitude exceeds the threshold and its 16×16 window fits well
//! inside the layer. Its dominant orientation is the largest gradient angle in
//! that window, and the descriptor concatenates one 8-bin histogram of
//! angles relative to the dominant orientation per 4×4 cell.
use super::dog::DogPyramid;
use super::extrema::Candidate;
use crate::edges::grad::GradientComputer;
use crate::error::Result;
use crate::image::ImageF32;
use serde::ser::{Serialize, Serializer};
use std::f32::consts::PI;

/// Side of a descriptor cell in pixels.
pub const CELL_SIZE: usize = 4;
/// Cells per window side.
pub const CELLS_PER_SIDE: usize = 4;
/// Orientation bins per cell, 45° each.
pub const ORIENTATION_BINS: usize = 8;
pub const DESCRIPTOR_LEN: usize = CELLS_PER_SIDE * CELLS_PER_SIDE * ORIENTATION_BINS;

/// Window offsets run from `-WINDOW_HALF` to `WINDOW_HALF - 1`.
const WINDOW_HALF: usize = CELL_SIZE * CELLS_PER_SIDE / 2;
/// Minimum distance to the left/top border.
pub const BORDER_MARGIN_LOW: usize = 8;
/// Minimum distance (`x + margin <= width`) to the right/bottom border.
pub const BORDER_MARGIN_HIGH: usize = 10;

#[derive(Clone, Debug, PartialEq)]
pub struct Descriptor([f32; DESCRIPTOR_LEN]);

impl Descriptor {
    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    /// The 8 orientation bins of cell `(cx, cy)`, `cx`/`cy` in `0..4`.
    pub fn cell(&self, cx: usize, cy: usize) -> &[f32] {
        let start = (cy * CELLS_PER_SIDE + cx) * ORIENTATION_BINS;
        &self.0[start..start + ORIENTATION_BINS]
    }
}

impl Serialize for Descriptor {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter())
    }
}

/// Described keypoint in the pixel grid of its octave.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyPoint {
    pub x: usize,
    pub y: usize,
    pub octave: usize,
    pub layer: usize,
    /// Dominant gradient angle in radians, range (-π, π].
    pub orientation: f32,
    pub descriptor: Descriptor,
}

/// Gradient of one DoG layer with magnitude normalized into `[0, 1]`.
#[derive(Clone, Debug)]
pub struct LayerGradient {
    pub magnitude: ImageF32,
    pub orientation: ImageF32,
}

impl LayerGradient {
    /// `true` if the whole descriptor window around `(x, y)` stays clear of the
    /// layer border by the configured margins.
    pub fn window_fits(&self, x: usize, y: usize) -> bool {
        x >= BORDER_MARGIN_LOW
            && y >= BORDER_MARGIN_LOW
            && x + BORDER_MARGIN_HIGH <= self.magnitude.w
            && y + BORDER_MARGIN_HIGH <= self.magnitude.h
    }

    /// Largest orientation value over the 16×16 window around `(x, y)`.
    pub fn dominant_orientation(&self, x: usize, y: usize) -> f32 {
        let mut best = f32::NEG_INFINITY;
        for py in y - WINDOW_HALF..y + WINDOW_HALF {
            for px in x - WINDOW_HALF..x + WINDOW_HALF {
                best = best.max(self.orientation.get(px, py));
            }
        }
        best
    }

    /// Cell histograms of the window around `(x, y)`, cell rows outermost.
    pub fn describe(&self, x: usize, y: usize, dominant: f32) -> Descriptor {
        let mut bins = [0.0f32; DESCRIPTOR_LEN];
        for cy in 0..CELLS_PER_SIDE {
            for cx in 0..CELLS_PER_SIDE {
                let hist = &mut bins[(cy * CELLS_PER_SIDE + cx) * ORIENTATION_BINS..]
                    [..ORIENTATION_BINS];
                let x0 = x - WINDOW_HALF + cx * CELL_SIZE;
                let y0 = y - WINDOW_HALF + cy * CELL_SIZE;
                for py in y0..y0 + CELL_SIZE {
                    for px in x0..x0 + CELL_SIZE {
                        let bin = orientation_bin(self.orientation.get(px, py), dominant);
                        hist[bin] += self.magnitude.get(px, py);
                    }
                }
            }
        }
        Descriptor(bins)
    }
}

/// Bin of `theta` relative to `dominant`: `floor(((θ - dominant)° mod 360) / 45)`.
pub fn orientation_bin(theta: f32, dominant: f32) -> usize {
    let relative = (180.0 * (theta - dominant) / PI).rem_euclid(360.0);
    ((relative / 45.0).floor() as usize).min(ORIENTATION_BINS - 1)
}

/// Normalized gradient fields of every interior DoG layer, `[octave][layer]`.
#[derive(Clone, Debug)]
pub struct GradientSpace {
    octaves: Vec<Vec<Option<LayerGradient>>>,
}

impl GradientSpace {
    pub fn build(dog: &DogPyramid, gradients: &GradientComputer) -> Result<Self> {
        let mut octaves = Vec::with_capacity(dog.num_octaves());
        for octave in 0..dog.num_octaves() {
            let mut layers = vec![None; dog.layers(octave).len()];
            for layer in dog.interior_layers(octave) {
                let field = gradients.compute(dog.get(octave, layer))?;
                layers[layer] = Some(LayerGradient {
                    magnitude: field.normalized_magnitude(),
                    orientation: field.orientation,
                });
            }
            octaves.push(layers);
        }
        Ok(Self { octaves })
    }

    pub fn get(&self, octave: usize, layer: usize) -> Option<&LayerGradient> {
        self.octaves.get(octave)?.get(layer)?.as_ref()
    }
}

/// Filters candidates and turns the survivors into described keypoints.
#[derive(Clone, Debug)]
pub struct DescriptorBuilder {
    threshold: f32,
}

impl DescriptorBuilder {
    pub fn new(threshold: f32) -> Self {
        Self { threshold }
    }

    /// `true` if the candidate passes the magnitude and border filters.
    pub fn accepts(&self, grad: &LayerGradient, c: &Candidate) -> bool {
        grad.window_fits(c.x, c.y) && grad.magnitude.get(c.x, c.y) > self.threshold
    }

    /// Keypoints for the accepted candidates, in candidate order.
    ///
    /// Candidates on layers without a gradient field are dropped.
    pub fn build(&self, space: &GradientSpace, candidates: &[Candidate]) -> Vec<KeyPoint> {
        candidates
            .iter()
            .filter_map(|c| {
                let grad = space.get(c.octave, c.layer)?;
                if !self.accepts(grad, c) {
                    return None;
                }
                let orientation = grad.dominant_orientation(c.x, c.y);
                Some(KeyPoint {
                    x: c.x,
                    y: c.y,
                    octave: c.octave,
                    layer: c.layer,
                    orientation,
                    descriptor: grad.describe(c.x, c.y, orientation),
                })
            })
            .collect()
    }
}
