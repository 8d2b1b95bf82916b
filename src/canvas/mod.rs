//! Owned RGBA pixel buffer with drawing primitives.
//!
//! Every draw call clips to the canvas bounds; coordinates outside the
//! buffer are silently dropped. Draw order is the layering order: a later
//! call paints over whatever earlier calls left behind. Opaque colours
//! replace pixels, translucent colours blend with straight-alpha "over",
//! so repeating a translucent draw is *not* idempotent.

mod draw;
mod glyphs;
mod sprite;
mod text;

use image::{ImageBuffer, RgbaImage};

use crate::types::{Axis, Colour, Primitive};

pub use sprite::Sprite;
pub use text::{Coverage, Font, FontBook, FontSource, Typeface};

/// A 2-D RGBA pixel buffer. Dimensions are fixed at creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,

    /// Row-major pixels (`pixels[y * width + x]`).
    pixels: Vec<Colour>,
}

impl Canvas {
    /// Create a fully transparent canvas.
    ///
    /// Zero dimensions are raised to 1 so the buffer is never empty.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, Colour::TRANSPARENT)
    }

    /// Create a canvas filled with a background colour.
    pub fn filled(width: u32, height: u32, background: Colour) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        Self {
            width,
            height,
            pixels: vec![background; width as usize * height as usize],
        }
    }

    /// Create a canvas filled with a gradient between two colours.
    pub fn gradient(width: u32, height: u32, from: Colour, to: Colour, axis: Axis) -> Self {
        let mut canvas = Self::new(width, height);
        let full = canvas.bounds();
        match axis {
            Axis::Vertical => canvas.vertical_gradient(full, from, to),
            Axis::Horizontal => canvas.horizontal_gradient(full, from, to),
        }
        canvas
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the dimensions as (width, height).
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// The whole canvas as an inclusive rectangle.
    pub fn bounds(&self) -> crate::types::Rect {
        crate::types::Rect::sized(0, 0, self.width, self.height)
    }

    /// Get a pixel, or `None` outside the canvas.
    pub fn get(&self, x: i32, y: i32) -> Option<Colour> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Row-major view of every pixel.
    pub fn pixels(&self) -> &[Colour] {
        &self.pixels
    }

    /// Overwrite a pixel without blending. Clipped.
    pub fn set(&mut self, x: i32, y: i32, colour: Colour) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = colour;
        }
    }

    /// Paint a pixel: opaque replaces, translucent blends over. Clipped.
    pub fn plot(&mut self, x: i32, y: i32, colour: Colour) {
        if colour.is_transparent() {
            return;
        }
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = colour.over(self.pixels[i]);
        }
    }

    /// Apply one primitive. Text primitives are stamped with `fonts`.
    pub fn draw(&mut self, primitive: &Primitive, fonts: &FontBook) {
        match primitive {
            Primitive::Ellipse {
                bbox,
                fill,
                outline,
            } => {
                if let Some(fill) = fill {
                    self.fill_ellipse(*bbox, *fill);
                }
                if let Some(stroke) = outline {
                    self.stroke_ellipse(*bbox, stroke.colour, stroke.width);
                }
            }
            Primitive::Polygon {
                points,
                fill,
                outline,
            } => {
                self.fill_polygon(points, *fill);
                if let Some(stroke) = outline {
                    self.stroke_polygon(points, stroke.colour, stroke.width);
                }
            }
            Primitive::Rectangle {
                rect,
                fill,
                outline,
            } => {
                if let Some(fill) = fill {
                    self.fill_rect(*rect, *fill);
                }
                if let Some(stroke) = outline {
                    self.stroke_rect(*rect, stroke.colour, stroke.width);
                }
            }
            Primitive::Line { points, stroke } => {
                self.draw_line(points, stroke.colour, stroke.width);
            }
            Primitive::Arc {
                bbox,
                start_deg,
                end_deg,
                stroke,
            } => {
                self.arc(*bbox, *start_deg, *end_deg, stroke.colour, stroke.width);
            }
            Primitive::Gradient {
                rect,
                from,
                to,
                axis,
            } => match axis {
                Axis::Vertical => self.vertical_gradient(*rect, *from, *to),
                Axis::Horizontal => self.horizontal_gradient(*rect, *from, *to),
            },
            Primitive::Text {
                text,
                origin,
                size,
                fill,
            } => {
                let font = fonts.font(*size);
                self.stamp_text(&font, text, *origin, *fill);
            }
        }
    }

    /// Apply primitives in order.
    pub fn draw_all<'p>(&mut self, primitives: impl IntoIterator<Item = &'p Primitive>, fonts: &FontBook) {
        for primitive in primitives {
            self.draw(primitive, fonts);
        }
    }

    /// Paste `src` with its top-left corner at `(x, y)`, using the source
    /// alpha as a per-pixel mask (straight-alpha "over").
    pub fn paste(&mut self, src: &Canvas, x: i32, y: i32) {
        for sy in 0..src.height as i32 {
            let dy = y + sy;
            if dy < 0 || dy >= self.height as i32 {
                continue;
            }
            for sx in 0..src.width as i32 {
                let dx = x + sx;
                if dx < 0 || dx >= self.width as i32 {
                    continue;
                }
                let pixel = src.pixels[(sy as u32 * src.width + sx as u32) as usize];
                self.plot(dx, dy, pixel);
            }
        }
    }

    /// Convert to an `image` buffer for encoding or resampling.
    pub fn to_image(&self) -> RgbaImage {
        ImageBuffer::from_fn(self.width, self.height, |x, y| {
            self.pixels[(y * self.width + x) as usize].into()
        })
    }

    /// Build a canvas from an `image` buffer.
    pub fn from_image(img: &RgbaImage) -> Self {
        let mut canvas = Self::new(img.width(), img.height());
        for (x, y, pixel) in img.enumerate_pixels() {
            canvas.set(x as i32, y as i32, (*pixel).into());
        }
        canvas
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Rect, Stroke};

    fn red() -> Colour {
        Colour::rgb(255, 0, 0)
    }

    fn blue() -> Colour {
        Colour::rgb(0, 0, 255)
    }

    #[test]
    fn test_new_is_transparent() {
        let canvas = Canvas::new(4, 3);
        assert_eq!(canvas.size(), (4, 3));
        assert_eq!(canvas.pixels().len(), 12);
        assert!(canvas.pixels().iter().all(|c| c.is_transparent()));
    }

    #[test]
    fn test_zero_dimensions_raised_to_one() {
        let canvas = Canvas::new(0, 0);
        assert_eq!(canvas.size(), (1, 1));
    }

    #[test]
    fn test_out_of_bounds_is_clipped() {
        let mut canvas = Canvas::new(2, 2);
        canvas.plot(-1, 0, red());
        canvas.plot(2, 2, red());
        canvas.set(5, -5, red());
        assert!(canvas.pixels().iter().all(|c| c.is_transparent()));
        assert_eq!(canvas.get(-1, 0), None);
    }

    #[test]
    fn test_overlapping_opaque_last_write_wins() {
        let mut canvas = Canvas::filled(10, 10, Colour::WHITE);
        canvas.fill_rect(Rect::new(0, 0, 5, 5), red());
        canvas.fill_rect(Rect::new(3, 3, 8, 8), blue());

        // Overlap region belongs to the later rectangle
        assert_eq!(canvas.get(4, 4), Some(blue()));
        assert_eq!(canvas.get(5, 5), Some(blue()));
        // Non-overlapping parts keep their own colour
        assert_eq!(canvas.get(1, 1), Some(red()));
        assert_eq!(canvas.get(8, 8), Some(blue()));
        assert_eq!(canvas.get(9, 0), Some(Colour::WHITE));
    }

    #[test]
    fn test_opaque_redraw_is_idempotent() {
        let mut once = Canvas::new(20, 20);
        once.fill_ellipse(Rect::new(2, 2, 17, 12), red());
        let mut twice = once.clone();
        twice.fill_ellipse(Rect::new(2, 2, 17, 12), red());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_translucent_redraw_accumulates() {
        let translucent = Colour::new(255, 255, 255, 100);
        let mut once = Canvas::filled(4, 4, Colour::BLACK);
        once.fill_rect(Rect::new(0, 0, 3, 3), translucent);
        let mut twice = once.clone();
        twice.fill_rect(Rect::new(0, 0, 3, 3), translucent);
        assert_ne!(once, twice);
        assert!(twice.get(0, 0).unwrap().r > once.get(0, 0).unwrap().r);
    }

    #[test]
    fn test_paste_respects_alpha_mask() {
        let mut background = Canvas::filled(4, 1, Colour::WHITE);
        let mut layer = Canvas::new(3, 1);
        layer.set(0, 0, red());
        layer.set(1, 0, Colour::TRANSPARENT);
        layer.set(2, 0, Colour::new(0, 0, 0, 128));

        background.paste(&layer, 1, 0);

        assert_eq!(background.get(0, 0), Some(Colour::WHITE));
        assert_eq!(background.get(1, 0), Some(red()));
        assert_eq!(background.get(2, 0), Some(Colour::WHITE));
        let blended = background.get(3, 0).unwrap();
        assert!((blended.r as i32 - 127).abs() <= 1);
        assert_eq!(blended.a, 255);
    }

    #[test]
    fn test_paste_clips_negative_offset() {
        let mut background = Canvas::filled(2, 2, Colour::WHITE);
        let layer = Canvas::filled(2, 2, red());
        background.paste(&layer, -1, -1);
        assert_eq!(background.get(0, 0), Some(red()));
        assert_eq!(background.get(1, 1), Some(Colour::WHITE));
    }

    #[test]
    fn test_draw_applies_primitives_in_order() {
        let fonts = FontBook::builtin();
        let mut canvas = Canvas::new(10, 10);
        let primitives = vec![
            Primitive::rect(Rect::new(0, 0, 9, 9), red(), None),
            Primitive::rect(Rect::new(2, 2, 7, 7), blue(), Some(Stroke::black(1))),
        ];
        canvas.draw_all(&primitives, &fonts);
        assert_eq!(canvas.get(0, 0), Some(red()));
        assert_eq!(canvas.get(2, 2), Some(Colour::BLACK));
        assert_eq!(canvas.get(4, 4), Some(blue()));
    }

    #[test]
    fn test_image_round_trip_preserves_pixels() {
        let mut canvas = Canvas::new(3, 2);
        canvas.set(2, 1, Colour::new(9, 8, 7, 6));
        let back = Canvas::from_image(&canvas.to_image());
        assert_eq!(back, canvas);
    }
}
