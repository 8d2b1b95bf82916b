//! Interface chrome: buttons and panels.

use crate::canvas::{Canvas, FontBook};
use crate::types::{named, Axis, Colour, Point, Primitive, Rect};

/// Amber end of the button gradient.
const BUTTON_SHADE: Colour = Colour::rgb(200, 150, 50);
const BUTTON_TEXT_SIZE: f32 = 20.0;
const PANEL_INSET: i32 = 5;
const PANEL_CORNER: i32 = 15;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiElement {
    Button { label: String },
    Panel,
}

impl UiElement {
    pub fn button(label: impl Into<String>) -> Self {
        UiElement::Button {
            label: label.into(),
        }
    }

    /// Text placement depends on measured glyph extents, so sketching needs
    /// the resolved fonts.
    pub fn sketch(&self, width: u32, height: u32, fonts: &FontBook) -> Vec<Primitive> {
        let (w, h) = (width as i32, height as i32);
        let frame = Primitive::rect(Rect::sized(0, 0, width, height), named::SADDLE_BROWN, None);

        match self {
            UiElement::Button { label } => {
                let mut out = vec![
                    frame,
                    Primitive::Gradient {
                        rect: Rect::sized(0, 0, width, height).inset(2),
                        from: named::GOLD,
                        to: BUTTON_SHADE,
                        axis: Axis::Vertical,
                    },
                ];
                if !label.is_empty() {
                    let (tw, th) = fonts.font(BUTTON_TEXT_SIZE).measure(label);
                    out.push(Primitive::Text {
                        text: label.clone(),
                        origin: Point::new((w - tw as i32) / 2, (h - th as i32) / 2),
                        size: BUTTON_TEXT_SIZE,
                        fill: Colour::WHITE,
                    });
                }
                out
            }
            UiElement::Panel => {
                let mut out = vec![
                    frame,
                    Primitive::rect(
                        Rect::new(PANEL_INSET, PANEL_INSET, w - 1 - PANEL_INSET, h - 1 - PANEL_INSET),
                        named::CHARCOAL,
                        None,
                    ),
                ];
                for (x, y) in [
                    (0, 0),
                    (w - PANEL_CORNER, 0),
                    (0, h - PANEL_CORNER),
                    (w - PANEL_CORNER, h - PANEL_CORNER),
                ] {
                    out.push(Primitive::rect(
                        Rect::new(x, y, x + PANEL_CORNER, y + PANEL_CORNER),
                        named::GOLD,
                        None,
                    ));
                }
                out
            }
        }
    }

    pub fn render(&self, width: u32, height: u32, fonts: &FontBook) -> Canvas {
        let mut canvas = Canvas::new(width, height);
        canvas.draw_all(&self.sketch(width, height, fonts), fonts);
        canvas
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_border_and_gradient() {
        let fonts = FontBook::builtin();
        let canvas = UiElement::button("").render(100, 40, &fonts);
        assert_eq!(canvas.get(0, 0), Some(named::SADDLE_BROWN));
        assert_eq!(canvas.get(1, 20), Some(named::SADDLE_BROWN));
        assert_eq!(canvas.get(50, 2), Some(named::GOLD));
        assert_eq!(canvas.get(50, 37), Some(BUTTON_SHADE));
    }

    #[test]
    fn test_button_label_is_white_and_centered() {
        let fonts = FontBook::builtin();
        let canvas = UiElement::button("GO").render(120, 50, &fonts);
        let white: Vec<(i32, i32)> = (0..50)
            .flat_map(|y| (0..120).map(move |x| (x, y)))
            .filter(|&(x, y)| canvas.get(x, y) == Some(Colour::WHITE))
            .collect();
        assert!(!white.is_empty());
        let min_x = white.iter().map(|p| p.0).min().unwrap_or(0);
        let max_x = white.iter().map(|p| p.0).max().unwrap_or(0);
        // Symmetric within one glyph cell of rounding
        assert!(((min_x + max_x) / 2 - 60).abs() <= 3);
    }

    #[test]
    fn test_panel_layers() {
        let fonts = FontBook::builtin();
        let canvas = UiElement::Panel.render(200, 100, &fonts);
        assert_eq!(canvas.get(3, 50), Some(named::SADDLE_BROWN));
        assert_eq!(canvas.get(100, 50), Some(named::CHARCOAL));
        for (x, y) in [(0, 0), (199, 0), (0, 99), (199, 99), (10, 10)] {
            assert_eq!(canvas.get(x, y), Some(named::GOLD), "corner at ({x}, {y})");
        }
    }
}
