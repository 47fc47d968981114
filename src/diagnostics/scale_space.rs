use crate::image::{ImageU8, ImageView};
use serde::{Deserialize, Serialize};

/// Statistics for one scale-space image.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleLevelReport {
    pub octave: usize,
    pub scale: usize,
    pub width: usize,
    pub height: usize,
    pub mean_intensity: f32,
}

impl ScaleLevelReport {
    pub fn from_image(octave: usize, scale: usize, img: &ImageU8) -> Self {
        let sum: u64 = img
            .rows()
            .map(|r| r.iter().map(|&v| v as u64).sum::<u64>())
            .sum();
        let denom = (img.w * img.h).max(1) as f32;
        Self {
            octave,
            scale,
            width: img.w,
            height: img.h,
            mean_intensity: sum as f32 / denom,
        }
    }
}
