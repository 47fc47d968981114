//! Owned single-channel image in row-major layout (stride == width).
//!
//! `Image<P>` is the one grid type of the crate. Intensity grids use `u8`
//! samples (`ImageU8`), intermediate numeric grids use unbounded `f32`
//! samples (`ImageF32`). Grids are value data: every stage allocates a fresh
//! output and never writes into an input it was handed.
use crate::error::{Result, VisionError};

/// Sample types that can take part in convolution and gradient arithmetic.
pub trait Pixel: Copy + Default + Send + Sync + 'static {
    fn to_f32(self) -> f32;
}

impl Pixel for u8 {
    #[inline]
    fn to_f32(self) -> f32 {
        self as f32
    }
}

impl Pixel for f32 {
    #[inline]
    fn to_f32(self) -> f32 {
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Image<P> {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Number of elements between consecutive rows (equals `w`)
    pub stride: usize,
    /// Backing storage in row-major order
    pub data: Vec<P>,
}

impl<P: Copy + Default> Image<P> {
    /// Construct a default-initialized buffer of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self::filled(w, h, P::default())
    }

    pub fn filled(w: usize, h: usize, value: P) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![value; w * h],
        }
    }

    /// Wrap an existing row-major buffer; `data.len()` must equal `w * h`.
    pub fn from_vec(w: usize, h: usize, data: Vec<P>) -> Result<Self> {
        if data.len() != w * h {
            return Err(VisionError::BufferSize {
                width: w,
                height: h,
                len: data.len(),
            });
        }
        Ok(Self {
            w,
            h,
            stride: w,
            data,
        })
    }

    #[inline]
    /// Convert (x, y) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.stride + x
    }
    #[inline]
    /// Get the pixel value at (x, y).
    pub fn get(&self, x: usize, y: usize) -> P {
        self.data[self.idx(x, y)]
    }
    #[inline]
    /// Set the pixel value at (x, y).
    pub fn set(&mut self, x: usize, y: usize, v: P) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }

    #[inline]
    pub fn size(&self) -> (usize, usize) {
        (self.w, self.h)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// Copy the `w × h` region whose top-left corner is `(x0, y0)`.
    ///
    /// Panics if the region does not fit inside the image.
    pub fn crop(&self, x0: usize, y0: usize, w: usize, h: usize) -> Self {
        assert!(
            x0 + w <= self.w && y0 + h <= self.h,
            "crop region {w}x{h}+{x0}+{y0} exceeds {}x{} image",
            self.w,
            self.h
        );
        let mut data = Vec::with_capacity(w * h);
        for y in y0..y0 + h {
            let start = self.idx(x0, y);
            data.extend_from_slice(&self.data[start..start + w]);
        }
        Self {
            w,
            h,
            stride: w,
            data,
        }
    }
}

impl<P: Copy> crate::image::traits::ImageView for Image<P> {
    type Pixel = P;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[P] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}

impl<P: Copy> crate::image::traits::ImageViewMut for Image<P> {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [P] {
        let start = y * self.stride;
        let end = start + self.w;
        &mut self.data[start..end]
    }
}
