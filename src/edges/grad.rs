//! Sobel gradients with magnitude, continuous orientation and a 4-way
//! direction quantization.
//!
//! - Convolves the input with a horizontal/vertical 3×3 kernel pair using
//!   replicate padding; responses are kept raw (unclamped).
//! - Outputs per-pixel `dx`, `dy`, `magnitude = hypot(dx, dy)` and
//!   `orientation = atan2(dy, dx)` in radians.
//! - `Direction` buckets an angle in degrees into 0°, 45°, 90° or 135° using
//!   half-open bands that partition the full circle.
//!
//! Both the Canny path and the keypoint descriptor consume this module.
use crate::error::Result;
use crate::filters::convolve::{convolve_raw, convolve_u8};
use crate::image::ops::{add_weighted, ensure_same_size, map_pixels};
use crate::image::{Image, ImageF32, ImageU8};
use crate::kernel::Kernel;

pub type Kernel3 = [[f32; 3]; 3];

pub const SOBEL_KERNEL_X: Kernel3 = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];
pub const SOBEL_KERNEL_Y: Kernel3 = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];

/// Immutable derivative kernel pair handed to a `GradientComputer`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SobelKernels {
    /// Responds to intensity changes along `x`.
    pub horizontal: Kernel3,
    /// Responds to intensity changes along `y`.
    pub vertical: Kernel3,
}

pub const SOBEL: SobelKernels = SobelKernels {
    horizontal: SOBEL_KERNEL_X,
    vertical: SOBEL_KERNEL_Y,
};

impl Default for SobelKernels {
    fn default() -> Self {
        SOBEL
    }
}

/// Quantized direction used by non-maximum suppression.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    #[default]
    Deg0,
    Deg45,
    Deg90,
    Deg135,
}

#[inline]
fn in_band(angle: f32, lower: f32, upper: f32) -> bool {
    angle >= lower && angle < upper
}

impl Direction {
    pub fn degrees(self) -> f32 {
        match self {
            Direction::Deg0 => 0.0,
            Direction::Deg45 => 45.0,
            Direction::Deg90 => 90.0,
            Direction::Deg135 => 135.0,
        }
    }

    /// Bucket an angle given in degrees; `None` if it lies outside every band
    /// (anything outside `[-180, 180)`, or NaN).
    pub fn from_degrees(angle: f32) -> Option<Self> {
        if in_band(angle, 0.0, 22.5)
            || in_band(angle, 157.5, 180.0)
            || in_band(angle, -180.0, -157.5)
            || in_band(angle, -22.5, 0.0)
        {
            return Some(Direction::Deg0);
        }
        if in_band(angle, 22.5, 67.5) || in_band(angle, -157.5, -112.5) {
            return Some(Direction::Deg45);
        }
        if in_band(angle, 67.5, 112.5) || in_band(angle, -112.5, -67.5) {
            return Some(Direction::Deg90);
        }
        if in_band(angle, 112.5, 157.5) || in_band(angle, -67.5, -22.5) {
            return Some(Direction::Deg135);
        }
        None
    }

    /// Bucket an angle in radians after folding it into `[-180°, 180°)`.
    ///
    /// Panics if the folded angle is not covered by any band, which can only
    /// happen for NaN input and means the gradient stage is broken.
    pub fn from_radians(theta: f32) -> Self {
        let mut deg = (180.0 * theta / std::f32::consts::PI + 180.0).rem_euclid(360.0) - 180.0;
        if deg >= 180.0 {
            deg -= 360.0;
        }
        Self::from_degrees(deg)
            .unwrap_or_else(|| panic!("orientation {theta} rad is outside every direction band"))
    }

    /// Direction of the edge line through a pixel whose gradient points at
    /// `orientation`: the gradient rotated by +90°.
    ///
    /// A vertical step edge (gradient along `x`) maps to 90°, so suppression
    /// compares the pixel against its left and right neighbours.
    pub fn of_edge(orientation: f32) -> Self {
        Self::from_radians(orientation + std::f32::consts::FRAC_PI_2)
    }
}

/// Per-pixel gradient buffers. All grids share the input's dimensions.
#[derive(Clone, Debug)]
pub struct GradientField {
    /// Horizontal derivative (convolution with the horizontal kernel)
    pub dx: ImageF32,
    /// Vertical derivative (convolution with the vertical kernel)
    pub dy: ImageF32,
    /// Euclidean magnitude per pixel: `hypot(dx, dy)`
    pub magnitude: ImageF32,
    /// Gradient angle in radians, range (-π, π]
    pub orientation: ImageF32,
}

impl GradientField {
    /// Combine two derivative grids of equal size.
    pub fn from_derivatives(dx: ImageF32, dy: ImageF32) -> Result<Self> {
        ensure_same_size(&dx, &dy)?;
        let magnitude = map_pixels(dx.w, dx.h, |x, y| dx.get(x, y).hypot(dy.get(x, y)));
        let orientation = map_pixels(dx.w, dx.h, |x, y| dy.get(x, y).atan2(dx.get(x, y)));
        Ok(Self {
            dx,
            dy,
            magnitude,
            orientation,
        })
    }

    pub fn width(&self) -> usize {
        self.magnitude.w
    }

    pub fn height(&self) -> usize {
        self.magnitude.h
    }

    /// Quantized edge direction per pixel (see `Direction::of_edge`).
    pub fn edge_directions(&self) -> Image<Direction> {
        map_pixels(self.width(), self.height(), |x, y| {
            Direction::of_edge(self.orientation.get(x, y))
        })
    }

    /// Magnitude divided by its maximum over the field, mapped into `[0, 1]`.
    pub fn normalized_magnitude(&self) -> ImageF32 {
        self.magnitude.normalized_by_max()
    }
}

/// Applies a fixed derivative kernel pair.
#[derive(Clone, Debug)]
pub struct GradientComputer {
    horizontal: Kernel,
    vertical: Kernel,
}

impl Default for GradientComputer {
    fn default() -> Self {
        Self::new(SOBEL)
    }
}

impl GradientComputer {
    pub fn new(kernels: SobelKernels) -> Self {
        Self {
            horizontal: Kernel::from_rows(&kernels.horizontal),
            vertical: Kernel::from_rows(&kernels.vertical),
        }
    }

    /// Gradient field of an intensity grid.
    pub fn compute(&self, src: &ImageU8) -> Result<GradientField> {
        let dx = convolve_raw(src, &self.horizontal)?;
        let dy = convolve_raw(src, &self.vertical)?;
        GradientField::from_derivatives(dx, dy)
    }

    /// Visual edge-strength image: the clamped horizontal and vertical
    /// responses averaged with equal weights.
    pub fn sobel_edges(&self, src: &ImageU8) -> Result<ImageU8> {
        let horizontal = convolve_u8(src, &self.horizontal)?;
        let vertical = convolve_u8(src, &self.vertical)?;
        add_weighted(&horizontal, 0.5, &vertical, 0.5)
    }
}

/// Sobel gradient field using the standard kernels.
pub fn sobel_gradients(src: &ImageU8) -> Result<GradientField> {
    GradientComputer::default().compute(src)
}

/// Sobel edge-strength image using the standard kernels.
pub fn sobel_edges(src: &ImageU8) -> Result<ImageU8> {
    GradientComputer::default().sobel_edges(src)
}
