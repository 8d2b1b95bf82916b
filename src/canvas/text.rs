//! Text stamping and font resolution.
//!
//! Fonts are resolved once at startup into a [`FontBook`] and passed to every
//! text-drawing call. Resolution never fails: when no candidate TrueType file
//! can be read and parsed, the book falls back to the built-in bitmap face.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};

use crate::types::{Colour, Point};

use super::glyphs::{self, GLYPH_HEIGHT, GLYPH_WIDTH};
use super::Canvas;

/// A loaded face.
pub enum Typeface {
    TrueType(Box<fontdue::Font>),
    Builtin,
}

impl fmt::Debug for Typeface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Typeface::TrueType(_) => f.write_str("TrueType"),
            Typeface::Builtin => f.write_str("Builtin"),
        }
    }
}

/// Where the resolved face came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontSource {
    File(PathBuf),
    Builtin,
}

impl fmt::Display for FontSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontSource::File(path) => write!(f, "{}", path.display()),
            FontSource::Builtin => f.write_str("built-in 5x7"),
        }
    }
}

/// The font capability threaded through text drawing.
#[derive(Debug)]
pub struct FontBook {
    typeface: Typeface,
    source: FontSource,
}

impl FontBook {
    /// A book backed only by the built-in bitmap face.
    pub fn builtin() -> Self {
        Self {
            typeface: Typeface::Builtin,
            source: FontSource::Builtin,
        }
    }

    /// Resolve a preferred font by name from candidate TrueType files.
    ///
    /// Candidates whose file name contains `preferred` (case-insensitive)
    /// are tried first, then the rest in the given order. The first file
    /// that reads and parses wins; otherwise the built-in face is used.
    pub fn resolve(preferred: &str, candidates: &[PathBuf]) -> Self {
        let wanted = preferred.to_ascii_lowercase();
        let (mut ordered, rest): (Vec<&PathBuf>, Vec<&PathBuf>) = candidates
            .iter()
            .partition(|path| file_name_matches(path, &wanted));
        ordered.extend(rest);

        ordered
            .into_iter()
            .find_map(|path| Self::from_file(path).ok())
            .unwrap_or_else(Self::builtin)
    }

    /// Load a TrueType/OpenType file.
    pub fn from_file(path: &Path) -> std::result::Result<Self, String> {
        let bytes = fs::read(path).map_err(|e| e.to_string())?;
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| e.to_string())?;
        Ok(Self {
            typeface: Typeface::TrueType(Box::new(font)),
            source: FontSource::File(path.to_path_buf()),
        })
    }

    pub fn source(&self) -> &FontSource {
        &self.source
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self.typeface, Typeface::Builtin)
    }

    /// A sized handle on the resolved face.
    pub fn font(&self, size: f32) -> Font<'_> {
        Font {
            face: &self.typeface,
            size: size.max(1.0),
        }
    }
}

impl Default for FontBook {
    fn default() -> Self {
        Self::builtin()
    }
}

fn file_name_matches(path: &Path, wanted: &str) -> bool {
    path.file_stem()
        .and_then(|s| s.to_str())
        .is_some_and(|stem| stem.to_ascii_lowercase().contains(wanted))
}

/// Glyph coverage for a string, origin at the top-left of its box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coverage {
    pub width: u32,
    pub height: u32,
    data: Vec<u8>,
}

impl Coverage {
    fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize],
        }
    }

    /// Coverage (0-255) at a position; zero outside.
    pub fn get(&self, x: u32, y: u32) -> u8 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        self.data[(y * self.width + x) as usize]
    }

    fn accumulate(&mut self, x: i32, y: i32, value: u8) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let i = (y as u32 * self.width + x as u32) as usize;
        self.data[i] = self.data[i].max(value);
    }
}

/// A face at a pixel size.
#[derive(Debug, Clone, Copy)]
pub struct Font<'a> {
    face: &'a Typeface,
    size: f32,
}

impl Font<'_> {
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Bounding box `(width, height)` of the rendered string.
    pub fn measure(&self, text: &str) -> (u32, u32) {
        match self.face {
            Typeface::Builtin => builtin_extent(text, self.size),
            Typeface::TrueType(_) => {
                let coverage = self.rasterize(text);
                (coverage.width, coverage.height)
            }
        }
    }

    /// Rasterize the string into a coverage mask.
    pub fn rasterize(&self, text: &str) -> Coverage {
        match self.face {
            Typeface::Builtin => rasterize_builtin(text, self.size),
            Typeface::TrueType(font) => rasterize_truetype(font, text, self.size),
        }
    }
}

/// Integer magnification of the 5x7 cell for a requested pixel size.
fn builtin_scale(size: f32) -> u32 {
    ((size / 8.0) as u32).max(1)
}

fn builtin_extent(text: &str, size: f32) -> (u32, u32) {
    let k = builtin_scale(size);
    let n = text.chars().count() as u32;
    if n == 0 {
        return (0, 0);
    }
    let advance = (GLYPH_WIDTH + 1) * k;
    (n * advance - k, GLYPH_HEIGHT * k)
}

fn rasterize_builtin(text: &str, size: f32) -> Coverage {
    let k = builtin_scale(size);
    let (width, height) = builtin_extent(text, size);
    let mut coverage = Coverage::new(width, height);
    let advance = (GLYPH_WIDTH + 1) * k;

    for (i, ch) in text.chars().enumerate() {
        let rows = glyphs::rows(ch);
        let base_x = i as u32 * advance;
        for gy in 0..GLYPH_HEIGHT {
            for gx in 0..GLYPH_WIDTH {
                if !glyphs::covers(&rows, gx, gy) {
                    continue;
                }
                for sy in 0..k {
                    for sx in 0..k {
                        let x = base_x + gx * k + sx;
                        let y = gy * k + sy;
                        coverage.accumulate(x as i32, y as i32, 255);
                    }
                }
            }
        }
    }

    coverage
}

fn rasterize_truetype(font: &fontdue::Font, text: &str, size: f32) -> Coverage {
    let mut layout: Layout = Layout::new(CoordinateSystem::PositiveYDown);
    layout.reset(&LayoutSettings::default());
    layout.append(&[font], &TextStyle::new(text, size, 0));

    let glyphs = layout.glyphs();
    let right = glyphs
        .iter()
        .map(|g| (g.x + g.width as f32).ceil() as i32)
        .max()
        .unwrap_or(0)
        .max(0);
    let bottom = glyphs
        .iter()
        .map(|g| (g.y + g.height as f32).ceil() as i32)
        .max()
        .unwrap_or(0)
        .max(layout.height().ceil() as i32)
        .max(0);

    let mut coverage = Coverage::new(right as u32, bottom as u32);
    for glyph in glyphs {
        if glyph.width == 0 || glyph.height == 0 {
            continue;
        }
        let (metrics, bitmap) = font.rasterize_config(glyph.key);
        let ox = glyph.x.round() as i32;
        let oy = glyph.y.round() as i32;
        for row in 0..metrics.height {
            for col in 0..metrics.width {
                let value = bitmap[row * metrics.width + col];
                coverage.accumulate(ox + col as i32, oy + row as i32, value);
            }
        }
    }

    coverage
}

impl Canvas {
    /// Stamp `text` with the top-left of its bounding box at `origin`.
    ///
    /// Glyph coverage scales the fill alpha, then blends over the buffer.
    pub fn stamp_text(&mut self, font: &Font<'_>, text: &str, origin: Point, colour: Colour) {
        let coverage = font.rasterize(text);
        for y in 0..coverage.height {
            for x in 0..coverage.width {
                let value = coverage.get(x, y);
                if value == 0 {
                    continue;
                }
                let alpha = (colour.a as u32 * value as u32 / 255) as u8;
                self.plot(
                    origin.x + x as i32,
                    origin.y + y as i32,
                    colour.with_alpha(alpha),
                );
            }
        }
    }

    /// Stamp `text` horizontally centred on `center_x`, top edge at `y`.
    /// Returns the measured size.
    pub fn stamp_text_centered(
        &mut self,
        font: &Font<'_>,
        text: &str,
        center_x: i32,
        y: i32,
        colour: Colour,
    ) -> (u32, u32) {
        let (w, h) = font.measure(text);
        self.stamp_text(font, text, Point::new(center_x - w as i32 / 2, y), colour);
        (w, h)
    }
}
