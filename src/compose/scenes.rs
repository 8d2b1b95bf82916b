//! Full-screen artwork built from gradients, recipes and text.

use std::fmt;

use crate::canvas::{Canvas, FontBook, Sprite};
use crate::recipes::{Portrait, Recipe};
use crate::types::{named, Axis, Colour, Point, Rect};

use super::{compose_scene, glow, paragraph, Label, Layer};

pub const SCENE_WIDTH: u32 = 1024;
pub const SCENE_HEIGHT: u32 = 768;

const PORTRAIT_WIDTH: u32 = 200;
const PORTRAIT_HEIGHT: u32 = 300;
const PORTRAIT_SPACING: i32 = 250;

const PARTICLES: i32 = 50;
const TITLE: &str = "RAMAYANA";
const SUBTITLE: &str = "Divine Epic Adventure";

const INTRO: [&str; 8] = [
    "In the ancient land of Ayodhya,",
    "where dharma and devotion reign supreme,",
    "begins the epic tale of Lord Rama,",
    "the seventh avatar of Lord Vishnu.",
    "",
    "Join the divine adventure as you",
    "embark on a journey through the",
    "sacred pages of the Ramayana.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scene {
    TitleScreen,
    CharacterSelect,
    IntroScene,
}

impl Scene {
    pub const ALL: [Scene; 3] = [Scene::TitleScreen, Scene::CharacterSelect, Scene::IntroScene];

    pub fn name(self) -> &'static str {
        match self {
            Scene::TitleScreen => "title_screen",
            Scene::CharacterSelect => "character_select",
            Scene::IntroScene => "intro_scene",
        }
    }

    /// Top and bottom of the backdrop gradient.
    pub fn sky(self) -> (Colour, Colour) {
        match self {
            Scene::TitleScreen => (Colour::rgb(25, 25, 50), Colour::rgb(75, 25, 100)),
            Scene::CharacterSelect => (Colour::rgb(50, 25, 75), Colour::rgb(100, 50, 125)),
            Scene::IntroScene => (Colour::rgb(25, 25, 25), Colour::rgb(75, 50, 25)),
        }
    }

    pub fn backdrop(self) -> Canvas {
        let (from, to) = self.sky();
        Canvas::gradient(SCENE_WIDTH, SCENE_HEIGHT, from, to, Axis::Vertical)
    }

    pub fn render(self, fonts: &FontBook) -> Canvas {
        let canvas = self.backdrop();
        match self {
            Scene::TitleScreen => title_screen(canvas, fonts),
            Scene::CharacterSelect => character_select(canvas, fonts),
            Scene::IntroScene => intro_scene(canvas, fonts),
        }
    }

    pub fn sprite(self, fonts: &FontBook) -> Sprite {
        Sprite::new(self.name(), self.render(fonts))
    }
}

impl fmt::Display for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn title_screen(mut canvas: Canvas, fonts: &FontBook) -> Canvas {
    let (w, h) = (canvas.width() as i32, canvas.height() as i32);

    // Deterministic scatter of faint sparkles
    let sparkle = Colour::WHITE.with_alpha(100);
    for i in 0..PARTICLES {
        let r = i % 3 + 1;
        canvas.fill_ellipse(Rect::circle((i * 37) % w, (i * 23) % h, r), sparkle);
    }

    let title = fonts.font(72.0);
    canvas.stamp_text_centered(&title, TITLE, w / 2 - 2, h / 3 - 2, Colour::BLACK);
    canvas.stamp_text_centered(&title, TITLE, w / 2, h / 3, named::GOLD);

    let subtitle = fonts.font(36.0);
    canvas.stamp_text_centered(&subtitle, SUBTITLE, w / 2, h / 3 + 100, Colour::WHITE);
    canvas
}

fn character_select(canvas: Canvas, fonts: &FontBook) -> Canvas {
    let top = canvas.height() as i32 / 2 - PORTRAIT_HEIGHT as i32 / 2;
    let layers: Vec<Layer> = Portrait::ALL
        .iter()
        .enumerate()
        .map(|(i, portrait)| {
            let art = portrait.render(PORTRAIT_WIDTH, PORTRAIT_HEIGHT, portrait.palette(), fonts);
            Layer::new(
                Sprite::new(portrait.name(), art),
                100 + i as i32 * PORTRAIT_SPACING,
                top,
            )
            .with_label(Label::new(portrait.label(), named::GOLD, 24.0))
        })
        .collect();
    compose_scene(canvas, &layers, fonts)
}

fn intro_scene(mut canvas: Canvas, fonts: &FontBook) -> Canvas {
    let (w, h) = (canvas.width() as i32, canvas.height() as i32);
    let pillar_shade = named::SADDLE_BROWN.darken(30.0);

    for i in 0..5 {
        let x = 100 + i * 180;
        canvas.fill_rect(Rect::new(x, h / 2, x + 40, h - 50), named::SADDLE_BROWN);
        canvas.fill_rect(Rect::new(x + 30, h / 2, x + 40, h - 50), pillar_shade);
        canvas.fill_rect(Rect::new(x - 10, h / 2 - 20, x + 50, h / 2), named::GOLD);
    }

    glow(
        &mut canvas,
        Point::new(w / 2, h / 2),
        &[
            (50, named::ORANGE_RED),
            (40, named::DARK_ORANGE),
            (30, named::GOLD),
        ],
    );

    paragraph(&mut canvas, &fonts.font(28.0), &INTRO, 100, 40, named::GOLD);
    canvas
}
