//! Border-aware linear filtering on grayscale grids.
//!
//! - `padding`: replicate-padded enlargement sized for a kernel and anchor.
//! - `convolve`: direct 2D convolution, clamped to 8 bits or left raw.
//! - `gaussian`: normalised Gaussian kernel synthesis and blur.
//!
//! Convolution is the plain O(W·H·kW·kH) sum over the padded grid; rows are
//! computed in parallel since every output pixel only reads finished input.

pub mod convolve;
pub mod gaussian;
pub mod padding;

pub use convolve::{convolve_f32, convolve_raw, convolve_u8};
pub use gaussian::{gaussian_blur, gaussian_kernel};
pub use padding::{crop_padding, pad_for_kernel, pad_with_anchor, replicate_border};
