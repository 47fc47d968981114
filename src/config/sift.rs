use crate::sift::SiftParams;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
pub struct SiftToolConfig {
    pub input: PathBuf,
    #[serde(default)]
    pub sift: SiftParams,
    pub output: SiftOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct SiftOutputConfig {
    pub keypoints_json: PathBuf,
}
