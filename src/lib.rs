#![doc = include_str!("../README.md")]

pub mod config;
pub mod diagnostics;
pub mod edges;
pub mod error;
pub mod filters;
pub mod image;
pub mod kernel;
pub mod sift;

// --- High-level re-exports -------------------------------------------------

pub use crate::edges::{canny, CannyDetector, CannyParams};
pub use crate::error::{Result, VisionError};
pub use crate::image::{ImageF32, ImageU8};
pub use crate::kernel::{Anchor, Kernel, Paddings};
pub use crate::sift::{sift_features, KeyPoint, SiftExtractor, SiftParams};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use classic_cv::prelude::*;
///
/// # fn main() -> classic_cv::Result<()> {
/// let (w, h) = (640usize, 480usize);
/// let gray = ImageU8::new(w, h);
///
/// let edges = CannyDetector::new(CannyParams::default()).run(&gray)?;
/// let keypoints = SiftExtractor::new(SiftParams::default()).extract(&gray)?;
/// println!("edges={}x{} keypoints={}", edges.w, edges.h, keypoints.len());
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::edges::{CannyDetector, CannyParams, GradientComputer};
    pub use crate::filters::{convolve_raw, convolve_u8, gaussian_blur, gaussian_kernel};
    pub use crate::image::{ImageF32, ImageU8};
    pub use crate::kernel::Kernel;
    pub use crate::sift::{KeyPoint, SiftExtractor, SiftParams};
}
