//! 8-bit intensity grids and their conversions.
use super::{Image, ImageF32};
use image::GrayImage;

/// Single-channel intensity grid with samples in `[0, 255]`.
pub type ImageU8 = Image<u8>;

impl ImageU8 {
    /// Widen every sample to `f32` without rescaling (values stay in `[0, 255]`).
    pub fn to_f32(&self) -> ImageF32 {
        ImageF32 {
            w: self.w,
            h: self.h,
            stride: self.w,
            data: self.data.iter().map(|&v| v as f32).collect(),
        }
    }

    /// Take ownership of the samples of an `image` crate luma buffer.
    pub fn from_gray_image(img: GrayImage) -> Self {
        let w = img.width() as usize;
        let h = img.height() as usize;
        Self {
            w,
            h,
            stride: w,
            data: img.into_raw(),
        }
    }

    /// Copy into an `image` crate luma buffer for resampling or encoding.
    pub fn to_gray_image(&self) -> GrayImage {
        GrayImage::from_fn(self.w as u32, self.h as u32, |x, y| {
            image::Luma([self.get(x as usize, y as usize)])
        })
    }
}
