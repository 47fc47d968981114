//! Per-pixel helpers shared by the filters and the feature pipelines.
//!
//! Everything here allocates a fresh output grid; inputs are never modified.
use super::{Image, ImageU8, ImageView};
use crate::error::{Result, VisionError};
use image::imageops::{resize, FilterType};

/// Clamp a filter response to `[0, 255]` and round it to an 8-bit sample.
///
/// Rounding is to nearest: a response of 127.5 becomes 128, where a
/// truncating `as u8` cast would give 127. Clamped outputs may therefore
/// differ by one from implementations that truncate.
#[inline]
pub fn clamp_u8(v: f32) -> u8 {
    if v.is_nan() {
        return 0;
    }
    v.clamp(0.0, 255.0).round() as u8
}

/// Build a `w × h` grid whose pixel `(x, y)` is `f(x, y)`.
///
/// `f` is a pure function of the coordinates; pixels are produced in
/// row-major order.
pub fn map_pixels<P, F>(w: usize, h: usize, f: F) -> Image<P>
where
    F: Fn(usize, usize) -> P,
{
    let mut data = Vec::with_capacity(w * h);
    for y in 0..h {
        for x in 0..w {
            data.push(f(x, y));
        }
    }
    Image {
        w,
        h,
        stride: w,
        data,
    }
}

/// Fail with `DimensionMismatch` unless both grids have the same size.
pub fn ensure_same_size<A: ImageView, B: ImageView>(a: &A, b: &B) -> Result<()> {
    if a.same_size(b) {
        Ok(())
    } else {
        Err(VisionError::mismatch(
            (a.width(), a.height()),
            (b.width(), b.height()),
        ))
    }
}

/// `clamp(a * wa + b * wb)` per pixel.
pub fn add_weighted(a: &ImageU8, wa: f32, b: &ImageU8, wb: f32) -> Result<ImageU8> {
    ensure_same_size(a, b)?;
    Ok(map_pixels(a.w, a.h, |x, y| {
        clamp_u8(a.get(x, y) as f32 * wa + b.get(x, y) as f32 * wb)
    }))
}

/// `a - b` per pixel in 8-bit arithmetic; negative differences wrap modulo 256.
pub fn subtract_wrapping(a: &ImageU8, b: &ImageU8) -> Result<ImageU8> {
    ensure_same_size(a, b)?;
    Ok(map_pixels(a.w, a.h, |x, y| a.get(x, y).wrapping_sub(b.get(x, y))))
}

/// Bilinear downsample to `(w / 2) × (h / 2)`.
pub fn halve(src: &ImageU8) -> ImageU8 {
    let (nw, nh) = (src.w / 2, src.h / 2);
    if nw == 0 || nh == 0 {
        return ImageU8::new(nw, nh);
    }
    let resized = resize(
        &src.to_gray_image(),
        nw as u32,
        nh as u32,
        FilterType::Triangle,
    );
    ImageU8::from_gray_image(resized)
}
