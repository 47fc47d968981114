use serde::{Deserialize, Serialize};

/// Parameters of the keypoint pipeline.
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct SiftParams {
    /// Number of octaves (each halves the resolution of the previous one).
    pub octaves: usize,
    /// Scale-space images per octave; each octave yields `scales - 1` DoG layers.
    pub scales: usize,
    /// Minimum normalized gradient magnitude (exclusive) a candidate must reach.
    pub threshold: f32,
}

impl Default for SiftParams {
    fn default() -> Self {
        Self {
            octaves: 4,
            scales: 4,
            threshold: 0.9,
        }
    }
}
