//! Replicate padding.
//!
//! The interior of the padded grid is an exact copy of the source. Rows added
//! above repeat the top row and rows added below repeat the bottom row; the
//! left and right margins are then filled from the already extended columns,
//! so corner blocks repeat the corner pixels.
use crate::error::Result;
use crate::image::{Image, ImageView, ImageViewMut};
use crate::kernel::{Anchor, Kernel, Paddings};

/// Pad `src` for a `kernel_w × kernel_h` kernel anchored at `anchor`.
pub fn pad_with_anchor<P: Copy + Default>(
    src: &Image<P>,
    kernel_w: usize,
    kernel_h: usize,
    anchor: Anchor,
) -> Result<Image<P>> {
    let paddings = Paddings::for_kernel(kernel_w, kernel_h, anchor)?;
    Ok(replicate_border(src, paddings))
}

/// Pad `src` for `kernel`, honouring the kernel's anchor.
pub fn pad_for_kernel<P: Copy + Default>(src: &Image<P>, kernel: &Kernel) -> Result<Image<P>> {
    pad_with_anchor(src, kernel.width(), kernel.height(), kernel.anchor())
}

/// Build the enlarged grid for already validated margins.
///
/// An empty source has nothing to replicate; the margins are default-filled.
pub fn replicate_border<P: Copy + Default>(src: &Image<P>, p: Paddings) -> Image<P> {
    let pw = src.w + p.horizontal();
    let ph = src.h + p.vertical();
    let mut padded = Image::new(pw, ph);
    if src.is_empty() {
        return padded;
    }

    for y in 0..src.h {
        let dst = padded.row_mut(y + p.top);
        dst[p.left..p.left + src.w].copy_from_slice(src.row(y));
    }

    let first = src.row(0);
    for y in 0..p.top {
        padded.row_mut(y)[p.left..p.left + src.w].copy_from_slice(first);
    }
    let last = src.row(src.h - 1);
    for y in p.top + src.h..ph {
        padded.row_mut(y)[p.left..p.left + src.w].copy_from_slice(last);
    }

    for y in 0..ph {
        let row = padded.row_mut(y);
        let left_px = row[p.left];
        row[..p.left].fill(left_px);
        let right_px = row[p.left + src.w - 1];
        row[p.left + src.w..].fill(right_px);
    }

    padded
}

/// Recover the `w × h` interior of a grid padded with `p`.
pub fn crop_padding<P: Copy + Default>(padded: &Image<P>, p: Paddings, w: usize, h: usize) -> Image<P> {
    padded.crop(p.left, p.top, w, h)
}
