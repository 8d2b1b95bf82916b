//! Scale variants of a canonical sprite.
//!
//! Scale 1 is always produced and is a plain copy of the canonical canvas.
//! Larger scales go through a Lanczos filter, which is the only place a
//! canvas changes size after creation.

use std::collections::BTreeSet;

use image::imageops::{self, FilterType};

use crate::canvas::{Canvas, Sprite};
use crate::error::{ArtError, Result};

use super::ManifestEntry;

/// Largest supported density multiplier.
pub const MAX_SCALE: u32 = 3;

/// One exported size of a sprite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaleVariant {
    pub scale: u32,
    pub filename: String,
    pub canvas: Canvas,
}

impl ScaleVariant {
    pub fn manifest_entry(&self) -> ManifestEntry {
        ManifestEntry::universal(&self.filename, self.scale)
    }
}

/// `<id>.png` at scale 1, `<id>@<s>x.png` otherwise.
pub fn variant_filename(id: &str, scale: u32) -> String {
    if scale <= 1 {
        format!("{id}.png")
    } else {
        format!("{id}@{scale}x.png")
    }
}

/// Resample by an integer factor. Scale 0 and 1 return an exact copy.
pub fn resample(canvas: &Canvas, scale: u32) -> Canvas {
    if scale <= 1 {
        return canvas.clone();
    }
    let (w, h) = canvas.size();
    let resized = imageops::resize(&canvas.to_image(), w * scale, h * scale, FilterType::Lanczos3);
    Canvas::from_image(&resized)
}

/// Produce one variant per scale, ascending, with scale 1 always first.
///
/// Zeros, duplicates and factors above `MAX_SCALE` in `scales` are ignored,
/// so an empty list still yields the canonical image.
pub fn export_scales(sprite: &Sprite, scales: &[u32]) -> Vec<ScaleVariant> {
    let wanted: BTreeSet<u32> = std::iter::once(1)
        .chain(scales.iter().copied().filter(|&s| s > 0 && s <= MAX_SCALE))
        .collect();

    wanted
        .into_iter()
        .map(|scale| ScaleVariant {
            scale,
            filename: variant_filename(sprite.name(), scale),
            canvas: resample(sprite.canvas(), scale),
        })
        .collect()
}

/// Validate a configured scale list: every entry in `1..=MAX_SCALE`.
/// Returns the sorted, deduplicated list with 1 included.
pub fn normalize_scales(scales: &[u32]) -> Result<Vec<u32>> {
    if let Some(&bad) = scales.iter().find(|&&s| s == 0 || s > MAX_SCALE) {
        return Err(ArtError::Config {
            message: format!("Unsupported scale factor: {bad}"),
            help: Some(format!("Scales must be between 1 and {MAX_SCALE}")),
        });
    }
    let set: BTreeSet<u32> = std::iter::once(1).chain(scales.iter().copied()).collect();
    Ok(set.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::FontBook;
    use crate::recipes::Identity;
    use crate::types::Colour;

    fn rama() -> Sprite {
        Identity::Rama.sprite(200, 300, &FontBook::builtin())
    }

    #[test]
    fn test_scale_one_is_identical() {
        let sprite = rama();
        assert_eq!(&resample(sprite.canvas(), 1), sprite.canvas());
    }

    #[test]
    fn test_scaled_dimensions() {
        let sprite = rama();
        for s in 1..=MAX_SCALE {
            let scaled = resample(sprite.canvas(), s);
            assert_eq!(scaled.size(), (200 * s, 300 * s));
        }
    }

    #[test]
    fn test_flat_colour_survives_filter() {
        let canvas = Canvas::filled(8, 8, Colour::rgb(40, 80, 120));
        let scaled = resample(&canvas, 2);
        assert!(scaled.pixels().iter().all(|&c| c == Colour::rgb(40, 80, 120)));
    }

    #[test]
    fn test_export_scales_names_and_order() {
        let variants = export_scales(&rama(), &[2, 2, 0]);
        let names: Vec<&str> = variants.iter().map(|v| v.filename.as_str()).collect();
        assert_eq!(names, vec!["rama.png", "rama@2x.png"]);
        assert_eq!(variants[1].canvas.size(), (400, 600));
    }

    #[test]
    fn test_export_scales_skips_unsupported_factors() {
        let variants = export_scales(&rama(), &[4, 7, 3, u32::MAX]);
        let scales: Vec<u32> = variants.iter().map(|v| v.scale).collect();
        assert_eq!(scales, vec![1, 3]);
    }

    #[test]
    fn test_empty_scale_list_still_exports_canonical() {
        let sprite = rama();
        let variants = export_scales(&sprite, &[]);
        assert_eq!(variants.len(), 1);
        assert_eq!(variants[0].scale, 1);
        assert_eq!(&variants[0].canvas, sprite.canvas());
    }

    #[test]
    fn test_normalize_scales() {
        assert_eq!(normalize_scales(&[]).unwrap(), vec![1]);
        assert_eq!(normalize_scales(&[3, 2, 3]).unwrap(), vec![1, 2, 3]);
        assert!(matches!(normalize_scales(&[0]), Err(ArtError::Config { .. })));
        assert!(matches!(normalize_scales(&[4]), Err(ArtError::Config { .. })));
    }

    #[test]
    fn test_variant_filename() {
        assert_eq!(variant_filename("title_screen", 1), "title_screen.png");
        assert_eq!(variant_filename("title_screen", 3), "title_screen@3x.png");
    }
}
