//! Parametric drawing recipes.
//!
//! A recipe turns a canvas size and a palette into an ordered list of
//! [`Primitive`]s. Recipes never touch pixels themselves; rendering applies
//! the list to a fresh [`Canvas`] in order. Character identities are a
//! closed set resolved through a static table, so adding one means adding a
//! variant and a table row.

mod background;
mod characters;
mod figure;
mod portrait;
mod ui;

use std::fmt;
use std::str::FromStr;

use crate::canvas::{Canvas, FontBook, Sprite};
use crate::error::{ArtError, Result};
use crate::types::{Palette, Primitive};

pub use background::{sketch_background, BACKGROUND_PALETTE};
pub use characters::{
    lotus, Demon, Hanuman, Rama, Sita, DEMON_PALETTE, HANUMAN_PALETTE, RAMA_PALETTE, SITA_PALETTE,
};
pub use figure::{eyes, Figure, FigureLayout};
pub use portrait::Portrait;
pub use ui::UiElement;

/// Something that can describe itself as draw calls for a given size.
pub trait Recipe: Sync {
    fn sketch(&self, width: u32, height: u32, palette: &Palette) -> Vec<Primitive>;

    /// Draw the sketch onto a transparent canvas of exactly `width` x `height`.
    fn render(&self, width: u32, height: u32, palette: &Palette, fonts: &FontBook) -> Canvas {
        let mut canvas = Canvas::new(width, height);
        canvas.draw_all(&self.sketch(width, height, palette), fonts);
        canvas
    }
}

macro_rules! figure_recipe {
    ($($ty:ty),*) => {
        $(
            impl Recipe for $ty {
                fn sketch(&self, width: u32, height: u32, palette: &Palette) -> Vec<Primitive> {
                    self.sketch_figure(width, height, palette)
                }
            }
        )*
    };
}

figure_recipe!(Rama, Sita, Hanuman, Demon);

/// The backdrop has no figure; it is a scenery recipe.
#[derive(Debug, Clone, Copy)]
pub struct Background;

impl Recipe for Background {
    fn sketch(&self, width: u32, height: u32, palette: &Palette) -> Vec<Primitive> {
        sketch_background(width, height, palette)
    }
}

/// A renderable sprite identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Identity {
    Rama,
    Sita,
    Hanuman,
    Demon,
    Background,
}

struct RecipeEntry {
    identity: Identity,
    name: &'static str,
    recipe: &'static dyn Recipe,
    palette: &'static Palette,
}

/// Lookup table, indexed by `Identity as usize`.
static RECIPES: [RecipeEntry; 5] = [
    RecipeEntry {
        identity: Identity::Rama,
        name: "rama",
        recipe: &Rama,
        palette: &RAMA_PALETTE,
    },
    RecipeEntry {
        identity: Identity::Sita,
        name: "sita",
        recipe: &Sita,
        palette: &SITA_PALETTE,
    },
    RecipeEntry {
        identity: Identity::Hanuman,
        name: "hanuman",
        recipe: &Hanuman,
        palette: &HANUMAN_PALETTE,
    },
    RecipeEntry {
        identity: Identity::Demon,
        name: "demon",
        recipe: &Demon,
        palette: &DEMON_PALETTE,
    },
    RecipeEntry {
        identity: Identity::Background,
        name: "background",
        recipe: &Background,
        palette: &BACKGROUND_PALETTE,
    },
];

impl Identity {
    pub const ALL: [Identity; 5] = [
        Identity::Rama,
        Identity::Sita,
        Identity::Hanuman,
        Identity::Demon,
        Identity::Background,
    ];

    fn entry(self) -> &'static RecipeEntry {
        &RECIPES[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.entry().name
    }

    pub fn palette(self) -> &'static Palette {
        self.entry().palette
    }

    pub fn recipe(self) -> &'static dyn Recipe {
        self.entry().recipe
    }

    pub fn render(self, width: u32, height: u32, fonts: &FontBook) -> Canvas {
        self.recipe().render(width, height, self.palette(), fonts)
    }

    pub fn sprite(self, width: u32, height: u32, fonts: &FontBook) -> Sprite {
        Sprite::new(self.name(), self.render(width, height, fonts))
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Identity {
    type Err = ArtError;

    fn from_str(s: &str) -> Result<Self> {
        RECIPES
            .iter()
            .find(|entry| entry.name == s)
            .map(|entry| entry.identity)
            .ok_or_else(|| ArtError::UnknownIdentity {
                name: s.to_string(),
            })
    }
}

/// Render a named identity. Unknown names fail before any pixels are allocated.
pub fn render_character(name: &str, width: u32, height: u32) -> Result<Sprite> {
    let identity: Identity = name.parse()?;
    Ok(identity.sprite(width, height, &FontBook::builtin()))
}
