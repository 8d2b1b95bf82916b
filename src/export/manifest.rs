//! Xcode asset catalog manifests.
//!
//! Each output directory carries a `Contents.json` listing every file in it
//! with its idiom and scale label. Asset loaders read it to discover which
//! resolutions exist, so it is written only after all files are in place.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ArtError, Result};

pub const MANIFEST_FILENAME: &str = "Contents.json";

/// One file in an image set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub filename: String,
    pub idiom: String,
    /// Density label such as `"2x"`.
    pub scale: String,
    /// Point size, only present for app icons (`"83.5x83.5"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

impl ManifestEntry {
    /// A device-independent entry.
    pub fn universal(filename: impl Into<String>, scale: u32) -> Self {
        Self {
            filename: filename.into(),
            idiom: "universal".to_string(),
            scale: format!("{scale}x"),
            size: None,
        }
    }

    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    pub fn with_idiom(mut self, idiom: impl Into<String>) -> Self {
        self.idiom = idiom.into();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestInfo {
    pub author: String,
    pub version: u32,
}

impl Default for ManifestInfo {
    fn default() -> Self {
        Self {
            author: "xcode".to_string(),
            version: 1,
        }
    }
}

/// The `Contents.json` document for one directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSetManifest {
    pub images: Vec<ManifestEntry>,
    #[serde(default)]
    pub info: ManifestInfo,
}

impl ImageSetManifest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: ManifestEntry) {
        self.images.push(entry);
    }

    pub fn extend(&mut self, entries: impl IntoIterator<Item = ManifestEntry>) {
        self.images.extend(entries);
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| ArtError::Build {
            message: format!("Failed to serialize manifest: {}", e),
            help: None,
        })
    }
}

/// Write `Contents.json` into `dir`, returning its path.
pub fn write_manifest(dir: &Path, manifest: &ImageSetManifest) -> Result<PathBuf> {
    let path = dir.join(MANIFEST_FILENAME);
    let json = manifest.to_json()?;
    fs::write(&path, json).map_err(|e| ArtError::io(&path, "Failed to write manifest", e))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_manifest_json_layout() {
        let mut manifest = ImageSetManifest::new();
        manifest.push(ManifestEntry::universal("rama.png", 1));
        manifest.push(ManifestEntry::universal("rama@2x.png", 2));

        insta::assert_snapshot!(manifest.to_json().unwrap(), @r###"
        {
          "images": [
            {
              "filename": "rama.png",
              "idiom": "universal",
              "scale": "1x"
            },
            {
              "filename": "rama@2x.png",
              "idiom": "universal",
              "scale": "2x"
            }
          ],
          "info": {
            "author": "xcode",
            "version": 1
          }
        }
        "###);
    }

    #[test]
    fn test_icon_entry_includes_size() {
        let entry = ManifestEntry::universal("83.5x83.5@2x.png", 2)
            .with_idiom("ipad")
            .with_size("83.5x83.5");
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["size"], "83.5x83.5");
        assert_eq!(value["idiom"], "ipad");
        assert_eq!(value["scale"], "2x");
    }

    #[test]
    fn test_write_manifest_round_trip() {
        let dir = tempdir().unwrap();
        let mut manifest = ImageSetManifest::new();
        manifest.extend([
            ManifestEntry::universal("a.png", 1),
            ManifestEntry::universal("a@3x.png", 3),
        ]);

        let path = write_manifest(dir.path(), &manifest).unwrap();
        assert_eq!(path, dir.path().join("Contents.json"));

        let text = std::fs::read_to_string(&path).unwrap();
        let parsed: ImageSetManifest = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, manifest);
    }

    #[test]
    fn test_write_manifest_missing_dir() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = write_manifest(&missing, &ImageSetManifest::new()).unwrap_err();
        assert!(matches!(err, ArtError::Io { path, .. } if path == missing.join("Contents.json")));
    }
}
