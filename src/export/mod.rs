//! Multi-scale export: resampling, PNG files and `Contents.json` manifests.

mod manifest;
mod png;
mod resample;

use std::fs;
use std::path::Path;

use crate::error::{ArtError, Result};

pub use manifest::{write_manifest, ImageSetManifest, ManifestEntry, ManifestInfo, MANIFEST_FILENAME};
pub use png::write_png;
pub use resample::{export_scales, normalize_scales, resample, variant_filename, ScaleVariant, MAX_SCALE};

/// Create `path` and any missing parents. Existing directories are fine.
pub fn ensure_directory(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| ArtError::io(path, "Failed to create directory", e))
}
