//! Edge processing: Sobel gradients, non-maximum suppression and a
//! Canny-style detector built from them.
//!
//! - Gradient computation returning `dx`, `dy`, magnitude, continuous
//!   orientation and a 4-way quantized edge direction.
//! - Direction-aligned non-maximum suppression producing a binary ridge map,
//!   and the single-bound strong-edge classification.
//! - `CannyDetector` chaining blur → gradient → suppression → classification.
//!
//! Borders are handled by replicate padding in the convolutions; suppression
//! ignores the outermost 1-pixel frame.

pub mod canny;
pub mod grad;
pub mod nms;

pub use canny::{canny, CannyDetector, CannyOutput, CannyParams, CannyReport, CannyStage};
pub use grad::{
    sobel_edges, sobel_gradients, Direction, GradientComputer, GradientField, SobelKernels, SOBEL,
};
pub use nms::{classify_strong, suppress_non_maxima};
