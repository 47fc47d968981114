//! JSON configuration files for the command-line tools.

pub mod canny;
pub mod sift;

use crate::error::Result;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

pub use canny::{CannyOutputConfig, CannyToolConfig};
pub use sift::{SiftOutputConfig, SiftToolConfig};

/// Read and parse a JSON config file.
pub fn load_config<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}
