use crate::edges::CannyParams;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
pub struct CannyToolConfig {
    pub input: PathBuf,
    #[serde(default)]
    pub canny: CannyParams,
    pub output: CannyOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct CannyOutputConfig {
    pub edges_image: PathBuf,
    /// Optional edge-strength image from the plain Sobel operator.
    #[serde(default)]
    pub sobel_image: Option<PathBuf>,
    #[serde(default)]
    pub report_json: Option<PathBuf>,
}
