//! SIFT-like keypoint extraction on 8-bit grayscale images.
//!
//! Pipeline
//! - Scale space: `octaves × scales` images, blurred with σ growing by
//!   `2^(1/scales)` per step and halved between octaves.
//! - Difference of Gaussians: adjacent scale-space images subtracted in 8-bit
//!   wrapping arithmetic, one layer fewer than scales per octave.
//! - Extrema: pixels strictly above or below all 26 neighbours in the
//!   3×3×3 block of an interior DoG layer.
//! - Description: Sobel gradients of each interior DoG layer, normalized by
//!   the layer maximum; candidates below the magnitude threshold or too close
//!   to the border are dropped, the rest get a dominant orientation and a
//!   4×4×8 descriptor.
//!
//! Notes
//! - Keypoint coordinates are integer pixels in their octave's grid; no
//!   sub-pixel refinement is performed.
//! - The descriptor is not rotated into the dominant orientation; angles are
//!   only binned relative to it.

pub mod descriptor;
pub mod dog;
pub mod extrema;
pub mod options;
pub mod scale_space;

pub use descriptor::{Descriptor, DescriptorBuilder, GradientSpace, KeyPoint, DESCRIPTOR_LEN};
pub use dog::DogPyramid;
pub use extrema::{locate_extrema, Candidate};
pub use options::SiftParams;
pub use scale_space::ScaleSpace;

use crate::diagnostics::{ScaleLevelReport, TimingBreakdown};
use crate::edges::grad::GradientComputer;
use crate::error::Result;
use crate::image::ImageU8;
use log::debug;
use serde::Serialize;

#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiftReport {
    pub levels: Vec<ScaleLevelReport>,
    pub candidate_count: usize,
    pub keypoint_count: usize,
    pub timing: TimingBreakdown,
}

pub struct SiftOutput {
    pub keypoints: Vec<KeyPoint>,
    pub report: SiftReport,
}

#[derive(Clone, Debug, Default)]
pub struct SiftExtractor {
    params: SiftParams,
    gradients: GradientComputer,
}

impl SiftExtractor {
    pub fn new(params: SiftParams) -> Self {
        Self {
            params,
            gradients: GradientComputer::default(),
        }
    }

    pub fn params(&self) -> &SiftParams {
        &self.params
    }

    /// Described keypoints of `img`, ordered by octave, layer and position.
    pub fn extract(&self, img: &ImageU8) -> Result<Vec<KeyPoint>> {
        Ok(self.extract_with_report(img)?.keypoints)
    }

    pub fn extract_with_report(&self, img: &ImageU8) -> Result<SiftOutput> {
        let mut timing = TimingBreakdown::default();
        let p = self.params;

        let space = timing.time("scale_space", || ScaleSpace::build(img, p.octaves, p.scales))?;
        let levels = space
            .iter()
            .enumerate()
            .flat_map(|(octave, images)| {
                images
                    .iter()
                    .enumerate()
                    .map(move |(scale, level)| ScaleLevelReport::from_image(octave, scale, level))
            })
            .collect();

        let dog = timing.time("dog", || DogPyramid::from_scale_space(&space))?;
        let candidates = timing.time("extrema", || locate_extrema(&dog));
        debug!("SiftExtractor: {} candidate keypoints", candidates.len());

        let grads = timing.time("gradients", || GradientSpace::build(&dog, &self.gradients))?;
        let keypoints = timing.time("describe", || {
            DescriptorBuilder::new(p.threshold).build(&grads, &candidates)
        });
        debug!(
            "SiftExtractor: kept {} of {} candidates (threshold {})",
            keypoints.len(),
            candidates.len(),
            p.threshold
        );

        Ok(SiftOutput {
            report: SiftReport {
                levels,
                candidate_count: candidates.len(),
                keypoint_count: keypoints.len(),
                timing,
            },
            keypoints,
        })
    }
}

/// Keypoints with explicit parameters.
pub fn sift_features(
    img: &ImageU8,
    octaves: usize,
    scales: usize,
    threshold: f32,
) -> Result<Vec<KeyPoint>> {
    SiftExtractor::new(SiftParams {
        octaves,
        scales,
        threshold,
    })
    .extract(img)
}
