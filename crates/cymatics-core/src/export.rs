use crate::error::{CymaticsError, Result};
use image::{ImageFormat, RgbaImage};
use std::path::Path;

/// Write `image` as PNG to `path`, replacing any existing file.
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<()> {
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| CymaticsError::Export {
            path: path.to_path_buf(),
            source,
        })?;
    log::debug!("saved snapshot to {}", path.display());
    Ok(())
}
