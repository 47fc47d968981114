//! Direct 2D convolution over a replicate-padded grid.
//!
//! For every output pixel `(x, y)` of the unpadded grid the response is
//! `Σ padded[x + kx, y + ky] · kernel[kx, ky]`. Two output forms exist:
//! `convolve_u8` clamps and rounds into an intensity grid for display, while
//! `convolve_raw`/`convolve_f32` keep the unclamped sums needed by derivative
//! filters, whose negative and out-of-range responses are meaningful.
use super::padding::pad_for_kernel;
use crate::error::Result;
use crate::image::ops::clamp_u8;
use crate::image::{Image, ImageF32, ImageU8, ImageView, Pixel};
use crate::kernel::Kernel;
use rayon::prelude::*;

/// Convolve an intensity grid, clamping every response into `[0, 255]`.
pub fn convolve_u8(src: &ImageU8, kernel: &Kernel) -> Result<ImageU8> {
    convolve_with(src, kernel, clamp_u8)
}

/// Convolve an intensity grid and keep the raw floating-point responses.
pub fn convolve_raw(src: &ImageU8, kernel: &Kernel) -> Result<ImageF32> {
    convolve_with(src, kernel, |sum| sum)
}

/// Convolve a float grid and keep the raw responses.
pub fn convolve_f32(src: &ImageF32, kernel: &Kernel) -> Result<ImageF32> {
    convolve_with(src, kernel, |sum| sum)
}

fn convolve_with<P, O, F>(src: &Image<P>, kernel: &Kernel, finish: F) -> Result<Image<O>>
where
    P: Pixel,
    O: Copy + Default + Send,
    F: Fn(f32) -> O + Sync,
{
    let padded = pad_for_kernel(src, kernel)?;
    let mut out = Image::new(src.w, src.h);
    if src.is_empty() {
        return Ok(out);
    }

    let (kw, kh) = (kernel.width(), kernel.height());
    out.data
        .par_chunks_mut(src.w)
        .enumerate()
        .for_each(|(y, dst_row)| {
            for (x, dst_px) in dst_row.iter_mut().enumerate() {
                let mut sum = 0.0f32;
                for ky in 0..kh {
                    let src_row = &padded.row(y + ky)[x..x + kw];
                    for (&px, &weight) in src_row.iter().zip(kernel.row(ky)) {
                        sum += px.to_f32() * weight;
                    }
                }
                *dst_px = finish(sum);
            }
        });

    Ok(out)
}
