//! Convolution kernels with an explicit anchor, and the border margins they imply.
//!
//! Weights are stored row-major: `at(kx, ky)` is column `kx` of row `ky`, so a
//! kernel written as a nested array literal reads the way it is applied.
use crate::error::{Result, VisionError};

/// Kernel cell aligned with the output pixel being computed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Anchor {
    pub x: usize,
    pub y: usize,
}

impl Anchor {
    /// Geometric centre `(w / 2, h / 2)` (integer division).
    pub fn center(w: usize, h: usize) -> Self {
        Self { x: w / 2, y: h / 2 }
    }
}

/// Border margins needed so every kernel tap lands inside the padded grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Paddings {
    pub left: usize,
    pub right: usize,
    pub top: usize,
    pub bottom: usize,
}

impl Paddings {
    /// Margins for a `w × h` kernel anchored at `anchor`.
    ///
    /// Fails with `InvalidAnchor` unless the anchor lies in `[0, w) × [0, h)`,
    /// which also rejects zero-sized kernels.
    pub fn for_kernel(w: usize, h: usize, anchor: Anchor) -> Result<Self> {
        if anchor.x >= w || anchor.y >= h {
            return Err(VisionError::InvalidAnchor {
                x: anchor.x,
                y: anchor.y,
                width: w,
                height: h,
            });
        }
        Ok(Self {
            left: anchor.x,
            right: w - anchor.x - 1,
            top: anchor.y,
            bottom: h - anchor.y - 1,
        })
    }

    #[inline]
    pub fn horizontal(&self) -> usize {
        self.left + self.right
    }

    #[inline]
    pub fn vertical(&self) -> usize {
        self.top + self.bottom
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Kernel {
    w: usize,
    h: usize,
    weights: Vec<f32>,
    anchor: Anchor,
}

impl Kernel {
    /// Build from row-major weights; `weights.len()` must equal `w * h`.
    pub fn from_vec(w: usize, h: usize, weights: Vec<f32>) -> Result<Self> {
        if weights.len() != w * h {
            return Err(VisionError::KernelShape {
                width: w,
                height: h,
                len: weights.len(),
            });
        }
        Ok(Self {
            w,
            h,
            weights,
            anchor: Anchor::center(w, h),
        })
    }

    /// Build from a nested array literal, one inner array per row.
    pub fn from_rows<const W: usize, const H: usize>(rows: &[[f32; W]; H]) -> Self {
        Self {
            w: W,
            h: H,
            weights: rows.iter().flatten().copied().collect(),
            anchor: Anchor::center(W, H),
        }
    }

    /// Replace the anchor. Bounds are checked when the kernel is applied.
    pub fn with_anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.w
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.h
    }

    #[inline]
    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    #[inline]
    pub fn at(&self, kx: usize, ky: usize) -> f32 {
        self.weights[ky * self.w + kx]
    }

    #[inline]
    pub fn row(&self, ky: usize) -> &[f32] {
        &self.weights[ky * self.w..(ky + 1) * self.w]
    }

    pub fn weights(&self) -> &[f32] {
        &self.weights
    }

    pub fn sum(&self) -> f32 {
        self.weights.iter().sum()
    }

    /// Scale the weights so they sum to one. A zero-sum kernel is returned as is.
    pub fn normalized(mut self) -> Self {
        let sum = self.sum();
        if sum != 0.0 {
            for w in &mut self.weights {
                *w /= sum;
            }
        }
        self
    }

    pub fn paddings(&self) -> Result<Paddings> {
        Paddings::for_kernel(self.w, self.h, self.anchor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centre_anchor_gives_symmetric_margins() {
        let p = Paddings::for_kernel(5, 3, Anchor::center(5, 3)).unwrap();
        assert_eq!(
            p,
            Paddings {
                left: 2,
                right: 2,
                top: 1,
                bottom: 1
            }
        );
    }

    #[test]
    fn even_kernel_pads_more_on_the_low_side() {
        let p = Paddings::for_kernel(4, 4, Anchor::center(4, 4)).unwrap();
        assert_eq!((p.left, p.right, p.top, p.bottom), (2, 1, 2, 1));
    }

    #[test]
    fn anchor_outside_kernel_is_rejected() {
        let err = Paddings::for_kernel(3, 3, Anchor { x: 3, y: 0 }).unwrap_err();
        assert!(matches!(err, VisionError::InvalidAnchor { x: 3, .. }));
        assert!(Paddings::for_kernel(0, 0, Anchor::center(0, 0)).is_err());
    }

    #[test]
    fn from_rows_is_row_major() {
        let k = Kernel::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        assert_eq!((k.width(), k.height()), (3, 2));
        assert_eq!(k.at(2, 0), 3.0);
        assert_eq!(k.at(0, 1), 4.0);
        assert_eq!(k.anchor(), Anchor { x: 1, y: 1 });
    }

    #[test]
    fn from_vec_checks_length() {
        assert!(matches!(
            Kernel::from_vec(2, 2, vec![1.0; 3]),
            Err(VisionError::KernelShape { len: 3, .. })
        ));
    }

    #[test]
    fn normalized_sums_to_one() {
        let k = Kernel::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).normalized();
        assert!((k.sum() - 1.0).abs() < 1e-6);
    }
}
