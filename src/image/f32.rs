//! Unbounded floating-point grids used between filtering stages.
use super::{ops::clamp_u8, Image, ImageU8};

/// Row-major `f32` grid. Values are raw filter responses and may be negative
/// or exceed the 8-bit range.
pub type ImageF32 = Image<f32>;

impl ImageF32 {
    /// Largest sample, floored at `0.0` (empty and all-negative grids give `0.0`).
    pub fn max_value(&self) -> f32 {
        self.data.iter().copied().fold(0.0f32, f32::max)
    }

    /// Clamp to `[0, 255]` and round to the nearest integral sample.
    pub fn to_u8_clamped(&self) -> ImageU8 {
        ImageU8 {
            w: self.w,
            h: self.h,
            stride: self.w,
            data: self.data.iter().map(|&v| clamp_u8(v)).collect(),
        }
    }

    /// Divide every sample by the grid maximum, mapping non-negative grids into `[0, 1]`.
    ///
    /// A grid whose maximum is not positive is returned unchanged.
    pub fn normalized_by_max(&self) -> ImageF32 {
        let max = self.max_value();
        if max <= 0.0 {
            return self.clone();
        }
        ImageF32 {
            w: self.w,
            h: self.h,
            stride: self.w,
            data: self.data.iter().map(|&v| v / max).collect(),
        }
    }
}
