//! PNG output for finished canvases.

use std::path::Path;

use image::ImageError;

use crate::canvas::Canvas;
use crate::error::{ArtError, Result};

/// Write a canvas to a PNG file at its own size.
///
/// File-system failures become [`ArtError::Io`], anything else the encoder
/// reports becomes [`ArtError::Encode`]; both name the path.
pub fn write_png(canvas: &Canvas, path: &Path) -> Result<()> {
    canvas
        .to_image()
        .save_with_format(path, image::ImageFormat::Png)
        .map_err(|e| match e {
            ImageError::IoError(err) => ArtError::io(path, "Failed to write PNG", err),
            other => ArtError::Encode {
                path: path.to_path_buf(),
                message: other.to_string(),
            },
        })
}
