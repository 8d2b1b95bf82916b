//! Core value types shared by the canvas, recipes and exporter:
//! - `Colour` - RGBA colour values and straight-alpha blending
//! - `Palette` - per-identity colours keyed by `Role`
//! - `Point`/`Rect` - integer geometry
//! - `Primitive` - stateless draw-call descriptions

mod colour;
mod geometry;
mod palette;
mod primitive;

pub use colour::Colour;
pub use geometry::{Point, Rect};
pub use palette::{named, Palette, Role};
pub use primitive::{Axis, Primitive, Stroke};
