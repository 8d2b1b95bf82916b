//! The four full-body characters and their palettes.

use crate::types::{named, Colour, Palette, Primitive, Rect, Stroke};

use super::figure::{eyes, Figure, FigureLayout};

pub static RAMA_PALETTE: Palette = Palette::new(
    "rama",
    Colour::rgb(135, 206, 235),
    Colour::rgb(25, 25, 112),
    named::ORANGE,
    named::SADDLE_BROWN,
    Colour::WHITE,
);

pub static SITA_PALETTE: Palette = Palette::new(
    "sita",
    Colour::rgb(255, 228, 196),
    named::SADDLE_BROWN,
    named::CRIMSON,
    named::LOTUS_PINK,
    named::GOLD,
);

pub static HANUMAN_PALETTE: Palette = Palette::new(
    "hanuman",
    named::ORANGE,
    named::SADDLE_BROWN,
    named::GOLD,
    named::SADDLE_BROWN,
    named::GOLD,
);

pub static DEMON_PALETTE: Palette = Palette::new(
    "demon",
    named::CRIMSON,
    Colour::rgb(139, 0, 0),
    Colour::rgb(101, 67, 33),
    named::SADDLE_BROWN,
    named::RED,
);

/// Blue-skinned archer with flowing hair and a recurve bow.
#[derive(Debug, Clone, Copy)]
pub struct Rama;

/// Crimson-clad figure with long hair, gold jewellery and a lotus.
#[derive(Debug, Clone, Copy)]
pub struct Sita;

/// Monkey-eared figure with a gold sash and a mace.
#[derive(Debug, Clone, Copy)]
pub struct Hanuman;

/// Horned, fanged brute with a loincloth and a clenched fist.
#[derive(Debug, Clone, Copy)]
pub struct Demon;

/// Hair polygon arching over the head, closed on the head's top corners.
///
/// `reach` gives the (dx, dy) offsets of the four outer points, left pair
/// then right pair, measured outward and upward from those corners.
fn swept_hair(l: &FigureLayout, reach: [(i32, i32); 4], colour: Colour) -> Primitive {
    let left = l.head_x - l.head_r;
    let right = l.head_x + l.head_r;
    let top = l.head_y - l.head_r;
    Primitive::polygon(
        [
            (left, top),
            (left - reach[0].0, top - reach[0].1),
            (left - reach[1].0, top - reach[1].1),
            (right + reach[2].0, top - reach[2].1),
            (right + reach[3].0, top - reach[3].1),
            (right, top),
        ],
        colour,
    )
}

/// A band across the torso, wider than the body by `extra`.
fn sash(l: &FigureLayout, extra: i32, height: i32, colour: Colour, outline: u32) -> Primitive {
    Primitive::rect(
        Rect::centered(l.body_x, l.body_y, (l.body_w + extra) / 2, height / 2),
        colour,
        Some(Stroke::black(outline)),
    )
}

impl Figure for Rama {
    fn layout(&self, width: u32, height: u32) -> FigureLayout {
        let mut l = FigureLayout::standard(width, height);
        // Drawing arm is raised to the string
        l.right_arm_lift = l.arm_h / 4;
        l
    }

    fn headdress(&self, l: &FigureLayout, p: &Palette, out: &mut Vec<Primitive>) {
        out.push(swept_hair(l, [(10, 15), (5, 25), (5, 20), (10, 10)], p.hair()));
    }

    fn garment(&self, l: &FigureLayout, p: &Palette, out: &mut Vec<Primitive>) {
        out.push(sash(l, 10, l.body_h / 3, p.clothing(), 1));
    }

    fn prop(&self, l: &FigureLayout, p: &Palette, out: &mut Vec<Primitive>) {
        let (cx, cy) = l.hand(l.left_arm());
        let bow_w = l.width / 2;
        let bow_h = l.height / 3;

        out.push(Primitive::line(
            [
                (cx - bow_w / 2, cy),
                (cx - bow_w / 3, cy - bow_h / 2),
                (cx, cy - bow_h / 3),
                (cx + bow_w / 3, cy - bow_h / 2),
                (cx + bow_w / 2, cy),
            ],
            p.weapon(),
            8,
        ));
        out.push(Primitive::line(
            [(cx - bow_w / 2, cy), (cx + bow_w / 2, cy)],
            p.accent(),
            2,
        ));
        let arrow = bow_w / 2;
        out.push(Primitive::line(
            [(cx - arrow / 2, cy), (cx + arrow / 2, cy)],
            p.weapon(),
            3,
        ));
    }
}

impl Figure for Sita {
    fn headdress(&self, l: &FigureLayout, p: &Palette, out: &mut Vec<Primitive>) {
        out.push(swept_hair(l, [(15, 20), (10, 40), (10, 35), (15, 15)], p.hair()));
    }

    fn garment(&self, l: &FigureLayout, p: &Palette, out: &mut Vec<Primitive>) {
        out.push(sash(l, 15, l.body_h, p.clothing(), 1));
        out.push(Primitive::ellipse(
            Rect::circle(l.head_x, l.head_y, l.head_r / 3),
            p.accent(),
            Some(Stroke::black(1)),
        ));
    }

    fn prop(&self, l: &FigureLayout, p: &Palette, out: &mut Vec<Primitive>) {
        let (cx, cy) = l.hand(l.right_arm());
        out.extend(lotus(cx, cy, 15, 8, p.weapon()));
    }
}

impl Figure for Hanuman {
    fn headdress(&self, l: &FigureLayout, p: &Palette, out: &mut Vec<Primitive>) {
        let ear_r = l.head_r / 2;
        for x in [l.head_x - l.head_r, l.head_x + l.head_r] {
            out.push(Primitive::ellipse(
                Rect::circle(x, l.head_y, ear_r),
                p.skin(),
                Some(Stroke::black(1)),
            ));
        }
    }

    fn garment(&self, l: &FigureLayout, p: &Palette, out: &mut Vec<Primitive>) {
        out.push(sash(l, 10, l.body_h / 3, p.clothing(), 1));
    }

    fn prop(&self, l: &FigureLayout, p: &Palette, out: &mut Vec<Primitive>) {
        let (mx, my) = l.hand(l.right_arm());
        let handle_w = 20;
        out.push(Primitive::rect(
            Rect::new(mx - handle_w / 2, my, mx + handle_w / 2, my + l.height / 3),
            p.weapon(),
            Some(Stroke::black(2)),
        ));
        out.push(Primitive::ellipse(
            Rect::circle(mx, my, handle_w * 2),
            p.clothing(),
            Some(Stroke::black(2)),
        ));
    }
}

impl Figure for Demon {
    fn layout(&self, width: u32, height: u32) -> FigureLayout {
        FigureLayout::heavy(width, height)
    }

    fn headdress(&self, l: &FigureLayout, p: &Palette, out: &mut Vec<Primitive>) {
        let top = l.head_y - l.head_r;
        for side in [-1, 1] {
            let base = l.head_x + side * (l.head_r / 2);
            out.push(Primitive::polygon(
                [
                    (base, top),
                    (base + side * 10, top - 20),
                    (base + side * 5, top - 30),
                ],
                p.weapon(),
            ));
        }

        for i in 0..5 {
            let x = l.head_x - l.head_r + i * l.head_r / 2;
            let y = top - 10;
            out.push(Primitive::polygon(
                [(x, y), (x - 5, y - 15), (x + 5, y - 15)],
                p.hair(),
            ));
        }
    }

    fn face(&self, l: &FigureLayout, p: &Palette, out: &mut Vec<Primitive>) {
        out.extend(eyes(l, p.accent(), Stroke::black(2), Colour::WHITE));

        let (fang_w, fang_h) = (8, 15);
        let y = l.head_y + l.head_r / 2;
        for x in [l.head_x - 10, l.head_x + 10] {
            out.push(Primitive::polygon(
                [(x, y), (x - fang_w / 2, y + fang_h), (x + fang_w / 2, y + fang_h)],
                Colour::WHITE,
            ));
        }
    }

    fn garment(&self, l: &FigureLayout, p: &Palette, out: &mut Vec<Primitive>) {
        let cloth_w = l.body_w + 10;
        let cloth_h = l.body_h / 4;
        let bottom = l.body_y + l.body_h / 2;
        out.push(Primitive::rect(
            Rect::new(
                l.body_x - cloth_w / 2,
                bottom - cloth_h,
                l.body_x + cloth_w / 2,
                bottom,
            ),
            p.clothing(),
            Some(Stroke::black(2)),
        ));
    }

    fn prop(&self, l: &FigureLayout, p: &Palette, out: &mut Vec<Primitive>) {
        let (fx, fy) = l.hand(l.right_arm());
        out.push(Primitive::ellipse(
            Rect::circle(fx, fy, l.arm_w / 2),
            p.skin(),
            Some(Stroke::black(2)),
        ));
    }
}

/// Ring of eight circular petals around a centre, one every 45 degrees.
pub fn lotus(cx: i32, cy: i32, ring: i32, petal_r: i32, colour: Colour) -> Vec<Primitive> {
    (0..8)
        .map(|i| {
            let angle = (i as f64 * 45.0).to_radians();
            let x = cx + (ring as f64 * angle.cos()) as i32;
            let y = cy + (ring as f64 * angle.sin()) as i32;
            Primitive::ellipse(Rect::circle(x, y, petal_r), colour, None)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(primitives: &[Primitive]) -> Vec<&'static str> {
        primitives.iter().map(Primitive::kind).collect()
    }

    #[test]
    fn test_rama_layer_order() {
        let out = Rama.sketch_figure(200, 300, &RAMA_PALETTE);
        assert_eq!(
            kinds(&out),
            vec![
                "ellipse", // head
                "polygon", // hair
                "ellipse", "ellipse", "ellipse", "ellipse", // eyes and pupils
                "rectangle", // torso
                "rectangle", // sash
                "rectangle", "rectangle", // arms
                "line", "line", "line", // bow, string, arrow
                "rectangle", "rectangle", // legs
            ]
        );
    }

    #[test]
    fn test_hair_covers_the_crown() {
        // Head top is y = 42 at 200x300; hair must meet it with no gap
        for (name, palette) in [("rama", &RAMA_PALETTE), ("sita", &SITA_PALETTE)] {
            let sprite = crate::recipes::render_character(name, 200, 300).unwrap();
            for y in [34, 37, 40] {
                assert_eq!(sprite.canvas().get(100, y), Some(palette.hair()), "{name} at y={y}");
            }
        }
    }

    #[test]
    fn test_rama_right_arm_is_raised() {
        let l = Rama.layout(200, 300);
        assert!(l.right_arm().1 < l.left_arm().1);
    }

    #[test]
    fn test_demon_has_horns_spikes_and_fangs() {
        let out = Demon.sketch_figure(200, 300, &DEMON_PALETTE);
        let polygons = out.iter().filter(|p| p.kind() == "polygon").count();
        // 2 horns + 5 spikes + 2 fangs
        assert_eq!(polygons, 9);
    }

    #[test]
    fn test_sita_lotus_has_eight_petals() {
        let petals = lotus(0, 0, 15, 8, named::LOTUS_PINK);
        assert_eq!(petals.len(), 8);
        // First petal sits on the positive x axis
        assert_eq!(
            petals[0],
            Primitive::ellipse(Rect::circle(15, 0, 8), named::LOTUS_PINK, None)
        );
    }

    #[test]
    fn test_hanuman_ears_follow_head() {
        let out = Hanuman.sketch_figure(200, 300, &HANUMAN_PALETTE);
        assert_eq!(out[1].kind(), "ellipse");
        assert_eq!(out[2].kind(), "ellipse");
    }
}
