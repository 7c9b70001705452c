//! Error types for rendering and snapshot export.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CymaticsError {
    /// A render target was requested with no drawable area.
    #[error("render target has no area ({width}x{height})")]
    InvalidDimensions { width: u32, height: u32 },

    /// Writing a snapshot image failed.
    #[error("failed to save snapshot to {}: {source}", path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

pub type Result<T> = std::result::Result<T, CymaticsError>;
