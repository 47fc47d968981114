use thiserror::Error;

/// Recoverable errors reported by the filtering and feature pipelines.
///
/// Configuration errors abort the stage that raised them; no partial output is
/// produced. Defects (e.g. an orientation that falls outside every
/// discretisation band) are not represented here and panic instead.
#[derive(Debug, Error)]
pub enum VisionError {
    #[error("Gaussian radius must be greater than 0, got {0}")]
    InvalidRadius(f32),

    #[error("Anchor ({x}, {y}) lies outside a {width}x{height} kernel")]
    InvalidAnchor {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("Gaussian sigma must be positive and finite, got {0}")]
    InvalidSigma(f32),

    #[error("Kernel weights do not match a {width}x{height} kernel ({len} values)")]
    KernelShape {
        width: usize,
        height: usize,
        len: usize,
    },

    #[error("Buffer of {len} samples does not match a {width}x{height} image")]
    BufferSize {
        width: usize,
        height: usize,
        len: usize,
    },

    #[error("Image dimensions differ: {left_w}x{left_h} vs {right_w}x{right_h}")]
    DimensionMismatch {
        left_w: usize,
        left_h: usize,
        right_w: usize,
        right_h: usize,
    },

    #[error("Scale space needs at least one octave and two scales, got {octaves}x{scales}")]
    InvalidScaleSpace { octaves: usize, scales: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image codec error: {0}")]
    Image(#[from] image::ImageError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, VisionError>;

impl VisionError {
    pub(crate) fn mismatch(left: (usize, usize), right: (usize, usize)) -> Self {
        Self::DimensionMismatch {
            left_w: left.0,
            left_h: left.1,
            right_w: right.0,
            right_h: right.1,
        }
    }
}
