//! Scene composition.
//!
//! Independently rendered sprites are pasted onto a background in list
//! order. Each sprite's own alpha is the paste mask: transparent pixels
//! leave the background alone, opaque pixels replace it and translucent
//! pixels blend with straight-alpha "over". Overlapping opaque layers are
//! last-write-wins.

mod scenes;

use crate::canvas::{Canvas, Font, FontBook, Sprite};
use crate::types::{Colour, Point, Rect};

pub use scenes::{Scene, SCENE_HEIGHT, SCENE_WIDTH};

/// Vertical distance from a layer's bottom edge to the top of its label.
pub const LABEL_GAP: i32 = 20;

/// Caption drawn centred beneath a layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub colour: Colour,
    pub size: f32,
}

impl Label {
    pub fn new(text: impl Into<String>, colour: Colour, size: f32) -> Self {
        Self {
            text: text.into(),
            colour,
            size,
        }
    }
}

/// A sprite placed at an offset, optionally captioned.
#[derive(Debug, Clone)]
pub struct Layer {
    pub sprite: Sprite,
    pub offset: Point,
    pub label: Option<Label>,
}

impl Layer {
    pub fn new(sprite: Sprite, x: i32, y: i32) -> Self {
        Self {
            sprite,
            offset: Point::new(x, y),
            label: None,
        }
    }

    pub fn with_label(mut self, label: Label) -> Self {
        self.label = Some(label);
        self
    }

    /// Area the sprite covers on the background.
    pub fn bounds(&self) -> Rect {
        Rect::sized(
            self.offset.x,
            self.offset.y,
            self.sprite.width(),
            self.sprite.height(),
        )
    }
}

/// Paste every layer onto `background` in order, then its label.
pub fn compose_scene(mut background: Canvas, layers: &[Layer], fonts: &FontBook) -> Canvas {
    for layer in layers {
        background.paste(layer.sprite.canvas(), layer.offset.x, layer.offset.y);

        if let Some(label) = &layer.label {
            let bounds = layer.bounds();
            let center_x = layer.offset.x + layer.sprite.width() as i32 / 2;
            background.stamp_text_centered(
                &fonts.font(label.size),
                &label.text,
                center_x,
                bounds.y1 + 1 + LABEL_GAP,
                label.colour,
            );
        }
    }
    background
}

/// Concentric filled circles around `center`, drawn in the given order.
///
/// Rings are listed outermost first so each smaller, hotter ring sits on top.
pub fn glow(canvas: &mut Canvas, center: Point, rings: &[(i32, Colour)]) {
    for &(radius, colour) in rings {
        canvas.fill_ellipse(Rect::circle(center.x, center.y, radius), colour);
    }
}

/// Lay out lines centred on the canvas, starting at `top` and moving down by
/// `advance` per line. Blank lines still advance. Returns the y after the
/// last line.
pub fn paragraph<S: AsRef<str>>(
    canvas: &mut Canvas,
    font: &Font<'_>,
    lines: &[S],
    top: i32,
    advance: i32,
    colour: Colour,
) -> i32 {
    let center_x = canvas.width() as i32 / 2;
    let mut y = top;
    for line in lines {
        let line = line.as_ref();
        if !line.is_empty() {
            canvas.stamp_text_centered(font, line, center_x, y, colour);
        }
        y += advance;
    }
    y
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipes::{Portrait, Recipe};
    use crate::types::{named, Axis};

    fn gradient_background() -> Canvas {
        Canvas::gradient(
            1024,
            768,
            Colour::rgb(50, 25, 75),
            Colour::rgb(100, 50, 125),
            Axis::Vertical,
        )
    }

    #[test]
    fn test_three_portraits_leave_background_outside_boxes() {
        let fonts = FontBook::builtin();
        let background = gradient_background();
        let layers: Vec<Layer> = Portrait::ALL
            .iter()
            .zip([100, 350, 600])
            .map(|(p, x)| {
                let canvas = p.render(200, 300, p.palette(), &fonts);
                Layer::new(Sprite::new(p.name(), canvas), x, 768 / 2 - 150)
            })
            .collect();

        let scene = compose_scene(background.clone(), &layers, &fonts);
        assert_eq!(scene.size(), (1024, 768));

        let boxes: Vec<Rect> = layers.iter().map(Layer::bounds).collect();
        let mut changed_inside = 0;
        for y in 0..768 {
            for x in 0..1024 {
                let p = Point::new(x, y);
                if boxes.iter().any(|b| b.contains(p)) {
                    if scene.get(x, y) != background.get(x, y) {
                        changed_inside += 1;
                    }
                    continue;
                }
                assert_eq!(scene.get(x, y), background.get(x, y), "at ({x}, {y})");
            }
        }
        assert!(changed_inside > 0);
    }

    #[test]
    fn test_later_layer_wins_overlap() {
        let fonts = FontBook::builtin();
        let red = Sprite::new("red", Canvas::filled(10, 10, named::RED));
        let gold = Sprite::new("gold", Canvas::filled(10, 10, named::GOLD));
        let scene = compose_scene(
            Canvas::new(20, 20),
            &[Layer::new(red, 0, 0), Layer::new(gold, 5, 5)],
            &fonts,
        );
        assert_eq!(scene.get(2, 2), Some(named::RED));
        assert_eq!(scene.get(7, 7), Some(named::GOLD));
        assert_eq!(scene.get(15, 15), Some(named::GOLD));
        assert_eq!(scene.get(15, 2), Some(Colour::TRANSPARENT));
    }

    #[test]
    fn test_layers_clip_at_edges() {
        let fonts = FontBook::builtin();
        let block = Sprite::new("block", Canvas::filled(10, 10, named::RED));
        let scene = compose_scene(Canvas::new(8, 8), &[Layer::new(block, -5, 4)], &fonts);
        assert_eq!(scene.get(0, 4), Some(named::RED));
        assert_eq!(scene.get(4, 7), Some(named::RED));
        assert_eq!(scene.get(5, 4), Some(Colour::TRANSPARENT));
    }

    #[test]
    fn test_label_sits_below_layer() {
        let fonts = FontBook::builtin();
        let layer = Layer::new(Sprite::new("x", Canvas::new(40, 30)), 10, 10)
            .with_label(Label::new("I", Colour::WHITE, 8.0));
        let scene = compose_scene(Canvas::new(60, 80), &[layer], &fonts);

        let white_rows: Vec<i32> = (0..80)
            .filter(|&y| (0..60).any(|x| scene.get(x, y) == Some(Colour::WHITE)))
            .collect();
        // 10 + 30 + LABEL_GAP, seven rows of glyph
        assert_eq!(white_rows.first(), Some(&60));
        assert_eq!(white_rows.last(), Some(&66));
    }

    #[test]
    fn test_glow_innermost_ring_on_top() {
        let mut canvas = Canvas::new(120, 120);
        glow(
            &mut canvas,
            Point::new(60, 60),
            &[
                (50, named::ORANGE_RED),
                (40, named::DARK_ORANGE),
                (30, named::GOLD),
            ],
        );
        assert_eq!(canvas.get(60, 60), Some(named::GOLD));
        assert_eq!(canvas.get(60 + 35, 60), Some(named::DARK_ORANGE));
        assert_eq!(canvas.get(60 + 45, 60), Some(named::ORANGE_RED));
        assert_eq!(canvas.get(0, 0), Some(Colour::TRANSPARENT));
    }

    #[test]
    fn test_paragraph_advances_over_blank_lines() {
        let fonts = FontBook::builtin();
        let mut canvas = Canvas::new(100, 200);
        let font = fonts.font(8.0);
        let end = paragraph(&mut canvas, &font, &["A", "", "B"], 10, 40, Colour::WHITE);
        assert_eq!(end, 130);

        let row_has_ink = |y: i32| (0..100).any(|x| canvas.get(x, y) != Some(Colour::TRANSPARENT));
        assert!(row_has_ink(10));
        assert!(!row_has_ink(55));
        assert!(row_has_ink(90));
    }
}
