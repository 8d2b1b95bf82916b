//! App icon set.
//!
//! Icons skip the recipes and the resampler: each size in the table is
//! drawn directly at its pixel size from a gradient and a centred letter.

use crate::canvas::{Canvas, FontBook};
use crate::export::{ImageSetManifest, ManifestEntry};
use crate::types::{Axis, Colour, Point};

pub const ICON_SET: &str = "AppIcon.appiconset";

const ICON_TOP: Colour = Colour::rgb(128, 0, 128);
const ICON_BOTTOM: Colour = Colour::rgb(255, 165, 255);
const ICON_LETTER: &str = "R";

/// One row of the icon size table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSpec {
    /// Edge length of the square PNG.
    pub pixels: u32,
    /// Point size label, e.g. `"29x29"`.
    pub size: &'static str,
    pub scale: u32,
    pub idiom: &'static str,
}

impl IconSpec {
    const fn new(pixels: u32, size: &'static str, scale: u32, idiom: &'static str) -> Self {
        Self {
            pixels,
            size,
            scale,
            idiom,
        }
    }

    pub fn filename(&self) -> String {
        format!("{}@{}x.png", self.size, self.scale)
    }

    pub fn manifest_entry(&self) -> ManifestEntry {
        ManifestEntry::universal(self.filename(), self.scale)
            .with_idiom(self.idiom)
            .with_size(self.size)
    }
}

pub static ICON_SIZES: [IconSpec; 11] = [
    IconSpec::new(40, "20x20", 2, "iphone"),
    IconSpec::new(60, "20x20", 3, "iphone"),
    IconSpec::new(58, "29x29", 2, "iphone"),
    IconSpec::new(87, "29x29", 3, "iphone"),
    IconSpec::new(80, "40x40", 2, "iphone"),
    IconSpec::new(120, "40x40", 3, "iphone"),
    IconSpec::new(120, "60x60", 2, "iphone"),
    IconSpec::new(180, "60x60", 3, "iphone"),
    IconSpec::new(152, "76x76", 2, "ipad"),
    IconSpec::new(167, "83.5x83.5", 2, "ipad"),
    IconSpec::new(1024, "1024x1024", 1, "ios-marketing"),
];

/// Draw one square icon.
pub fn render_icon(pixels: u32, fonts: &FontBook) -> Canvas {
    let mut canvas = Canvas::gradient(pixels, pixels, ICON_TOP, ICON_BOTTOM, Axis::Vertical);
    let font = fonts.font((pixels / 3) as f32);
    let (tw, th) = font.measure(ICON_LETTER);
    let side = canvas.width() as i32;
    let origin = Point::new((side - tw as i32) / 2, (side - th as i32) / 2);
    canvas.stamp_text(&font, ICON_LETTER, origin, Colour::WHITE);
    canvas
}

/// Manifest for the whole icon table, in table order.
pub fn icon_manifest() -> ImageSetManifest {
    let mut manifest = ImageSetManifest::new();
    manifest.extend(ICON_SIZES.iter().map(IconSpec::manifest_entry));
    manifest
}
