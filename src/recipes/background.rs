//! Sunset forest backdrop.
//!
//! The palette roles are reused as scenery colours: skin and hair are the
//! top and bottom of the sky, clothing is foliage, weapon is bark and
//! earth, accent is the sun.

use crate::types::{named, Axis, Palette, Primitive, Rect, Stroke};

pub static BACKGROUND_PALETTE: Palette = Palette::new(
    "background",
    named::DARK_ORANGE,
    named::ORANGE_RED,
    named::FOREST_GREEN,
    named::SADDLE_BROWN,
    named::GOLD,
);

const TREES: i32 = 8;
const TRUNK_WIDTH: i32 = 20;
const FOLIAGE_RADIUS: i32 = 40;

pub fn sketch_background(width: u32, height: u32, p: &Palette) -> Vec<Primitive> {
    let (w, h) = (width as i32, height as i32);
    let mut out = vec![Primitive::Gradient {
        rect: Rect::sized(0, 0, width, height),
        from: p.skin(),
        to: p.hair(),
        axis: Axis::Vertical,
    }];

    let sun_r = w / 8;
    out.push(Primitive::ellipse(
        Rect::circle(w * 8 / 10, h * 2 / 10, sun_r),
        p.accent(),
        Some(Stroke::new(named::ORANGE, 3)),
    ));

    let tree_y = h * 7 / 10;
    let trunk_h = h * 3 / 10;
    for i in 0..TREES {
        let x = w * (1 + i) / 10;
        out.push(Primitive::rect(
            Rect::new(x - TRUNK_WIDTH / 2, tree_y, x + TRUNK_WIDTH / 2, tree_y + trunk_h),
            p.weapon(),
            Some(Stroke::black(2)),
        ));
        out.push(Primitive::ellipse(
            Rect::circle(x, tree_y, FOLIAGE_RADIUS),
            p.clothing(),
            Some(Stroke::black(1)),
        ));
    }

    out.push(Primitive::rect(
        Rect::new(0, h * 8 / 10, w, h),
        p.weapon(),
        Some(Stroke::black(2)),
    ));
    out
}
