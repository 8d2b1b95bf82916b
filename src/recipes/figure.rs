//! Full-body figures built with a fixed layering order.
//!
//! Every figure is drawn head -> headdress -> face -> torso -> garment ->
//! arms -> prop -> legs. Later layers paint over earlier ones, so a prop
//! held at the hip covers the arm it hangs from. Implementors override only
//! the layers where they differ.

use crate::types::{Colour, Palette, Primitive, Rect, Stroke};

/// Proportional layout of a figure within its canvas.
///
/// Integer proportion math can collapse to zero or negative sizes on tiny
/// canvases; that renders degenerate shapes rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FigureLayout {
    pub width: i32,
    pub height: i32,
    pub head_x: i32,
    pub head_y: i32,
    pub head_r: i32,
    pub eye_r: i32,
    pub body_x: i32,
    pub body_y: i32,
    pub body_w: i32,
    pub body_h: i32,
    pub arm_w: i32,
    pub arm_h: i32,
    /// How far the right arm is raised above the torso centre.
    pub right_arm_lift: i32,
    pub leg_w: i32,
    pub leg_h: i32,
    /// Horizontal distance of each leg centre from the body centre.
    pub leg_spread: i32,
    /// Outline width for head and torso.
    pub outline: u32,
    /// Outline width for limbs and garments.
    pub limb_outline: u32,
}

impl FigureLayout {
    /// Slender heroic proportions: head is a sixth of the width.
    pub fn standard(width: u32, height: u32) -> Self {
        let (w, h) = (width as i32, height as i32);
        let head_r = w / 6;
        let body_w = w / 3;
        let body_h = h / 2;
        let head_y = h / 4;
        let leg_w = body_w / 3;
        Self {
            width: w,
            height: h,
            head_x: w / 2,
            head_y,
            head_r,
            eye_r: head_r / 4,
            body_x: w / 2,
            body_y: head_y + head_r + body_h / 2,
            body_w,
            body_h,
            arm_w: body_w / 4,
            arm_h: body_h / 2,
            right_arm_lift: 0,
            leg_w,
            leg_h: body_h / 2,
            leg_spread: leg_w,
            outline: 2,
            limb_outline: 1,
        }
    }

    /// Bulky proportions: head is a fifth of the width, thick limbs.
    pub fn heavy(width: u32, height: u32) -> Self {
        let (w, h) = (width as i32, height as i32);
        let head_r = w / 5;
        let body_w = w * 2 / 5;
        let body_h = h * 5 / 9;
        let head_y = h / 3;
        let leg_w = body_w * 2 / 5;
        Self {
            width: w,
            height: h,
            head_x: w / 2,
            head_y,
            head_r,
            eye_r: head_r / 3,
            body_x: w / 2,
            body_y: head_y + head_r + body_h / 2,
            body_w,
            body_h,
            arm_w: body_w / 3,
            arm_h: body_h * 2 / 3,
            right_arm_lift: 0,
            leg_w,
            leg_h: body_h * 5 / 6,
            leg_spread: leg_w / 2,
            outline: 3,
            limb_outline: 2,
        }
    }

    pub fn left_arm(&self) -> (i32, i32) {
        (self.body_x - self.body_w / 2 - self.arm_w / 2, self.body_y)
    }

    pub fn right_arm(&self) -> (i32, i32) {
        (
            self.body_x + self.body_w / 2 + self.arm_w / 2,
            self.body_y - self.right_arm_lift,
        )
    }

    /// Point where a held prop attaches: the bottom of an arm.
    pub fn hand(&self, (x, y): (i32, i32)) -> (i32, i32) {
        (x, y + self.arm_h / 2)
    }

    fn leg_y(&self) -> i32 {
        self.body_y + self.body_h / 2 + self.leg_h / 2
    }
}

/// A full-body character drawn in the fixed layer order.
pub trait Figure {
    fn layout(&self, width: u32, height: u32) -> FigureLayout {
        FigureLayout::standard(width, height)
    }

    fn head(&self, l: &FigureLayout, p: &Palette, out: &mut Vec<Primitive>) {
        out.push(Primitive::ellipse(
            Rect::circle(l.head_x, l.head_y, l.head_r),
            p.skin(),
            Some(Stroke::black(l.outline)),
        ));
    }

    /// Hair, ears, horns: whatever sits on or around the head.
    fn headdress(&self, l: &FigureLayout, p: &Palette, out: &mut Vec<Primitive>);

    fn face(&self, l: &FigureLayout, _p: &Palette, out: &mut Vec<Primitive>) {
        out.extend(eyes(l, Colour::WHITE, Stroke::black(1), Colour::BLACK));
    }

    fn torso(&self, l: &FigureLayout, p: &Palette, out: &mut Vec<Primitive>) {
        out.push(Primitive::rect(
            Rect::centered(l.body_x, l.body_y, l.body_w / 2, l.body_h / 2),
            p.skin(),
            Some(Stroke::black(l.outline)),
        ));
    }

    fn garment(&self, l: &FigureLayout, p: &Palette, out: &mut Vec<Primitive>);

    fn arms(&self, l: &FigureLayout, p: &Palette, out: &mut Vec<Primitive>) {
        for (x, y) in [l.left_arm(), l.right_arm()] {
            out.push(Primitive::rect(
                Rect::centered(x, y, l.arm_w / 2, l.arm_h / 2),
                p.skin(),
                Some(Stroke::black(l.limb_outline)),
            ));
        }
    }

    /// Weapon or held object.
    fn prop(&self, l: &FigureLayout, p: &Palette, out: &mut Vec<Primitive>);

    fn legs(&self, l: &FigureLayout, p: &Palette, out: &mut Vec<Primitive>) {
        let y = l.leg_y();
        for x in [l.body_x - l.leg_spread, l.body_x + l.leg_spread] {
            out.push(Primitive::rect(
                Rect::centered(x, y, l.leg_w / 2, l.leg_h / 2),
                p.skin(),
                Some(Stroke::black(l.limb_outline)),
            ));
        }
    }

    /// Emit every layer in order.
    fn sketch_figure(&self, width: u32, height: u32, palette: &Palette) -> Vec<Primitive> {
        let l = self.layout(width, height);
        let mut out = Vec::new();
        self.head(&l, palette, &mut out);
        self.headdress(&l, palette, &mut out);
        self.face(&l, palette, &mut out);
        self.torso(&l, palette, &mut out);
        self.garment(&l, palette, &mut out);
        self.arms(&l, palette, &mut out);
        self.prop(&l, palette, &mut out);
        self.legs(&l, palette, &mut out);
        out
    }
}

/// Two eyes with pupils, placed halfway between the head centre and edge.
pub fn eyes(l: &FigureLayout, sclera: Colour, outline: Stroke, pupil: Colour) -> [Primitive; 4] {
    let left = l.head_x - l.head_r / 2;
    let right = l.head_x + l.head_r / 2;
    let pupil_r = l.eye_r / 2;
    let eye = |x: i32| Primitive::Ellipse {
        bbox: Rect::centered(x, l.head_y, l.eye_r, l.eye_r / 2),
        fill: Some(sclera),
        outline: Some(outline),
    };
    let iris = |x: i32| Primitive::Ellipse {
        bbox: Rect::centered(x, l.head_y, pupil_r, pupil_r / 2),
        fill: Some(pupil),
        outline: None,
    };
    [eye(left), eye(right), iris(left), iris(right)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_layout_200x300() {
        let l = FigureLayout::standard(200, 300);
        assert_eq!(l.head_r, 33);
        assert_eq!(l.body_w, 66);
        assert_eq!(l.body_h, 150);
        assert_eq!((l.head_x, l.head_y), (100, 75));
        assert_eq!(l.body_y, 75 + 33 + 75);
        assert_eq!(l.left_arm(), (100 - 33 - 8, 183));
    }

    #[test]
    fn test_heavy_layout_200x300() {
        let l = FigureLayout::heavy(200, 300);
        assert_eq!(l.head_r, 40);
        assert_eq!(l.body_w, 80);
        assert_eq!(l.body_h, 166);
        assert_eq!(l.arm_h, 110);
        assert_eq!(l.leg_w, 32);
        assert_eq!(l.leg_h, 138);
        assert_eq!(l.leg_spread, 16);
    }

    #[test]
    fn test_tiny_layout_does_not_underflow() {
        let l = FigureLayout::standard(1, 1);
        assert_eq!(l.head_r, 0);
        assert_eq!(l.arm_w, 0);
    }
}
