//! Head-and-shoulders portraits for the selection screen.
//!
//! Portraits share a face layout (head in the upper half, two white eyes)
//! and differ by a signature element: Rama's crown and bow, Sita's hair and
//! lotus, Hanuman's ears and mace.

use crate::types::{named, Colour, Palette, Primitive, Rect, Stroke};

use super::characters::{lotus, HANUMAN_PALETTE, RAMA_PALETTE, SITA_PALETTE};
use super::Recipe;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Portrait {
    Rama,
    Sita,
    Hanuman,
}

impl Portrait {
    /// Selection screen order.
    pub const ALL: [Portrait; 3] = [Portrait::Rama, Portrait::Sita, Portrait::Hanuman];

    pub fn name(self) -> &'static str {
        match self {
            Portrait::Rama => "rama",
            Portrait::Sita => "sita",
            Portrait::Hanuman => "hanuman",
        }
    }

    /// Caption shown under the portrait.
    pub fn label(self) -> String {
        self.name().to_uppercase()
    }

    pub fn palette(self) -> &'static Palette {
        match self {
            Portrait::Rama => &RAMA_PALETTE,
            Portrait::Sita => &SITA_PALETTE,
            Portrait::Hanuman => &HANUMAN_PALETTE,
        }
    }
}

impl Recipe for Portrait {
    fn sketch(&self, width: u32, height: u32, p: &Palette) -> Vec<Primitive> {
        let (w, h) = (width as i32, height as i32);
        let head = Primitive::ellipse(Rect::new(w / 4, h / 6, 3 * w / 4, h / 2), p.skin(), None);
        let eyes = [
            Primitive::ellipse(
                Rect::new(w / 3, h / 3, w / 2 - 10, h / 2 - 10),
                Colour::WHITE,
                None,
            ),
            Primitive::ellipse(
                Rect::new(w / 2 + 10, h / 3, 2 * w / 3, h / 2 - 10),
                Colour::WHITE,
                None,
            ),
        ];

        let mut out = Vec::new();
        match self {
            Portrait::Rama => {
                out.push(head);
                out.push(Primitive::polygon(
                    [(w / 2, h / 8), (w / 3, h / 4), (2 * w / 3, h / 4)],
                    named::GOLD,
                ));
                out.extend(eyes);
                out.push(Primitive::Arc {
                    bbox: Rect::new(w / 6, h / 2, 5 * w / 6, h),
                    start_deg: 0.0,
                    end_deg: 180.0,
                    stroke: Stroke::new(p.weapon(), 8),
                });
            }
            Portrait::Sita => {
                out.push(head);
                out.push(Primitive::ellipse(
                    Rect::new(w / 4 - 10, h / 6 - 10, 3 * w / 4 + 10, h / 3),
                    p.hair(),
                    None,
                ));
                out.extend(eyes);
                out.extend(lotus(w / 2, h / 2, 20, 15, p.weapon()));
            }
            Portrait::Hanuman => {
                out.push(head);
                for ear in [
                    Rect::new(w / 6, h / 8, w / 3, h / 3),
                    Rect::new(2 * w / 3, h / 8, 5 * w / 6, h / 3),
                ] {
                    out.push(Primitive::ellipse(ear, p.skin(), None));
                }
                out.extend(eyes);
                out.push(Primitive::rect(
                    Rect::new(w / 2 - 5, h / 2, w / 2 + 5, h),
                    p.weapon(),
                    None,
                ));
                out.push(Primitive::ellipse(
                    Rect::circle(w / 2, h / 2, 15),
                    p.clothing(),
                    None,
                ));
            }
        }
        out
    }
}
