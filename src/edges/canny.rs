//! Canny-style edge detector.
//!
//! Stages run strictly in order, once each:
//!
//! 1. `Blur`: Gaussian blur with radius `kernel_size` and σ = 1.
//! 2. `Gradient`: Sobel derivatives, magnitude and quantized edge direction.
//! 3. `Suppress`: non-maximum suppression along the edge direction.
//! 4. `Classify`: suppressed pixels whose magnitude exceeds `upper_threshold`
//!    become strong edges, everything else is rejected.
//!
//! The result is a binary grid (0 / 255) of the input size whose outer frame
//! is always 0. Classification is a single pass against one bound; weak edges
//! are never promoted through connectivity.
use super::grad::{GradientComputer, SobelKernels};
use super::nms::{classify_strong, suppress_non_maxima, EDGE};
use crate::diagnostics::TimingBreakdown;
use crate::error::{Result, VisionError};
use crate::filters::gaussian_blur;
use crate::image::ImageU8;
use log::debug;
use serde::{Deserialize, Serialize};

const BLUR_SIGMA: f32 = 1.0;

#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct CannyParams {
    /// Gaussian radius of the pre-blur (the kernel side is `2 * kernel_size + 1`).
    pub kernel_size: u32,
    /// Magnitude a suppressed pixel must exceed to be kept.
    pub upper_threshold: f32,
}

impl Default for CannyParams {
    fn default() -> Self {
        Self {
            kernel_size: 4,
            upper_threshold: 100.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CannyStage {
    Blur,
    Gradient,
    Suppress,
    Classify,
    Done,
}

impl CannyStage {
    pub fn label(self) -> &'static str {
        match self {
            CannyStage::Blur => "blur",
            CannyStage::Gradient => "gradient",
            CannyStage::Suppress => "suppress",
            CannyStage::Classify => "classify",
            CannyStage::Done => "done",
        }
    }

    pub fn next(self) -> Self {
        match self {
            CannyStage::Blur => CannyStage::Gradient,
            CannyStage::Gradient => CannyStage::Suppress,
            CannyStage::Suppress => CannyStage::Classify,
            CannyStage::Classify | CannyStage::Done => CannyStage::Done,
        }
    }
}

#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CannyReport {
    pub width: usize,
    pub height: usize,
    /// Pixels surviving non-maximum suppression.
    pub suppressed_count: usize,
    /// Pixels classified as strong edges.
    pub strong_count: usize,
    pub timing: TimingBreakdown,
}

pub struct CannyOutput {
    pub edges: ImageU8,
    pub report: CannyReport,
}

#[derive(Clone, Debug)]
pub struct CannyDetector {
    params: CannyParams,
    gradients: GradientComputer,
}

impl CannyDetector {
    pub fn new(params: CannyParams) -> Self {
        Self::with_kernels(params, SobelKernels::default())
    }

    pub fn with_kernels(params: CannyParams, kernels: SobelKernels) -> Self {
        Self {
            params,
            gradients: GradientComputer::new(kernels),
        }
    }

    pub fn params(&self) -> &CannyParams {
        &self.params
    }

    /// Binary edge map of `img`.
    pub fn run(&self, img: &ImageU8) -> Result<ImageU8> {
        Ok(self.run_with_report(img)?.edges)
    }

    /// Edge map plus per-stage timings and counts.
    pub fn run_with_report(&self, img: &ImageU8) -> Result<CannyOutput> {
        if self.params.kernel_size == 0 {
            return Err(VisionError::InvalidRadius(0.0));
        }
        let mut timing = TimingBreakdown::default();

        let mut stage = CannyStage::Blur;
        let blurred = timing.time(stage.label(), || {
            gaussian_blur(img, self.params.kernel_size as f32, BLUR_SIGMA)
        })?;
        debug!(
            "Canny {}: {}x{} radius={}",
            stage.label(),
            blurred.w,
            blurred.h,
            self.params.kernel_size
        );

        stage = stage.next();
        let (field, directions) = timing.time(stage.label(), || {
            self.gradients.compute(&blurred).map(|field| {
                let directions = field.edge_directions();
                (field, directions)
            })
        })?;
        debug!(
            "Canny {}: max magnitude {:.1}",
            stage.label(),
            field.magnitude.max_value()
        );

        stage = stage.next();
        let thin = timing.time(stage.label(), || {
            suppress_non_maxima(&field.magnitude, &directions)
        })?;
        let suppressed_count = count_edges(&thin);
        debug!("Canny {}: {} ridge pixels", stage.label(), suppressed_count);

        stage = stage.next();
        let edges = timing.time(stage.label(), || {
            classify_strong(&thin, &field.magnitude, self.params.upper_threshold)
        })?;
        let strong_count = count_edges(&edges);
        debug!(
            "Canny {}: {} strong edges above {}",
            stage.label(),
            strong_count,
            self.params.upper_threshold
        );

        debug_assert_eq!(stage.next(), CannyStage::Done);
        Ok(CannyOutput {
            report: CannyReport {
                width: edges.w,
                height: edges.h,
                suppressed_count,
                strong_count,
                timing,
            },
            edges,
        })
    }
}

/// Canny edges with explicit parameters.
pub fn canny(img: &ImageU8, kernel_size: u32, upper_threshold: f32) -> Result<ImageU8> {
    CannyDetector::new(CannyParams {
        kernel_size,
        upper_threshold,
    })
    .run(img)
}

fn count_edges(img: &ImageU8) -> usize {
    img.data.iter().filter(|&&v| v == EDGE).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::ops::map_pixels;

    #[test]
    fn stages_advance_in_order() {
        let mut stage = CannyStage::Blur;
        let mut seen = vec![stage];
        while stage != CannyStage::Done {
            stage = stage.next();
            seen.push(stage);
        }
        assert_eq!(
            seen,
            vec![
                CannyStage::Blur,
                CannyStage::Gradient,
                CannyStage::Suppress,
                CannyStage::Classify,
                CannyStage::Done
            ]
        );
    }

    #[test]
    fn zero_kernel_size_is_rejected() {
        let img = ImageU8::filled(8, 8, 50);
        let err = canny(&img, 0, 100.0).unwrap_err();
        assert!(matches!(err, VisionError::InvalidRadius(_)));
    }

    #[test]
    fn flat_image_has_no_edges() {
        let img = ImageU8::filled(20, 20, 90);
        let out = CannyDetector::new(CannyParams::default())
            .run_with_report(&img)
            .unwrap();
        assert!(out.edges.data.iter().all(|&v| v == 0));
        assert_eq!(out.report.strong_count, 0);
        assert_eq!(out.report.timing.stages.len(), 4);
    }

    #[test]
    fn step_edge_yields_thin_vertical_line() {
        // Centre the transition on column 16 so the blurred ramp has a single peak.
        let img = map_pixels(32, 24, |x, _| match x {
            0..=15 => 0u8,
            16 => 128,
            _ => 255,
        });
        let edges = canny(&img, 2, 100.0).unwrap();
        for y in 1..23 {
            let kept: Vec<usize> = (0..32).filter(|&x| edges.get(x, y) == 255).collect();
            assert_eq!(kept, vec![16], "row {y}");
        }
    }
}
