//! Build configuration (rama-assets.yaml).
//!
//! Every field is optional; a missing file means all defaults. Command-line
//! flags are applied on top after loading.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ArtError, Result};
use crate::export::normalize_scales;

/// Config filename looked up in the working directory.
pub const CONFIG_FILENAME: &str = "rama-assets.yaml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Root of the asset catalog.
    pub output: PathBuf,

    /// Density multipliers for sprites and scenes. Scale 1 is implicit.
    pub scales: Vec<u32>,

    /// Preferred font family, matched against candidate file names.
    pub font: String,

    /// TrueType files tried in order when resolving `font`.
    pub font_paths: Vec<PathBuf>,

    /// Stop at the first failed asset instead of reporting all failures.
    pub fail_fast: bool,

    /// Also generate the app icon set.
    pub icons: bool,
}

fn default_output() -> PathBuf {
    PathBuf::from("Assets.xcassets")
}

/// Common system locations for the default face and metric-compatible
/// fallbacks.
pub fn default_font_paths() -> Vec<PathBuf> {
    [
        "/System/Library/Fonts/Supplemental/Arial.ttf",
        "/System/Library/Fonts/Arial.ttf",
        "/Library/Fonts/Arial.ttf",
        "C:\\Windows\\Fonts\\arial.ttf",
        "/usr/share/fonts/truetype/msttcorefonts/Arial.ttf",
        "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
    ]
    .into_iter()
    .map(PathBuf::from)
    .collect()
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
            scales: vec![1, 2],
            font: "Arial".to_string(),
            font_paths: default_font_paths(),
            fail_fast: false,
            icons: true,
        }
    }
}

impl BuildConfig {
    /// Load from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ArtError::io(path, "Failed to read config", e))?;
        Self::parse(&content)
    }

    /// Parse from a YAML string and validate.
    pub fn parse(content: &str) -> Result<Self> {
        let mut config: Self = serde_yaml::from_str(content).map_err(|e| ArtError::Config {
            message: format!("Invalid config: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILENAME)),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load `rama-assets.yaml` from `dir` if it exists, else defaults.
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILENAME);
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Check values and normalize the scale list.
    pub fn validate(&mut self) -> Result<()> {
        self.scales = normalize_scales(&self.scales)?;
        if self.output.as_os_str().is_empty() {
            return Err(ArtError::Config {
                message: "Output directory is empty".to_string(),
                help: Some("Set `output` to a directory path".to_string()),
            });
        }
        Ok(())
    }
}
