//! I/O helpers for grayscale images and JSON.
//!
//! These sit outside the numeric core and are used by the command-line tools.
//!
//! - `load_grayscale_image`: decode a PNG/JPEG into an owned 8-bit grid.
//! - `save_grayscale_u8`: write an 8-bit grid to an image file.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::ImageU8;
use crate::error::Result;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk and convert it to 8-bit grayscale.
pub fn load_grayscale_image(path: &Path) -> Result<ImageU8> {
    let img = image::open(path)?.into_luma8();
    Ok(ImageU8::from_gray_image(img))
}

/// Save an 8-bit grid; the format follows the file extension.
pub fn save_grayscale_u8(image: &ImageU8, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    image.to_gray_image().save(path)?;
    Ok(())
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
