//! rama-assets - Procedural sprite, scene and icon generator
//!
//! Draws a fixed catalog of character sprites, composed scenes, interface
//! elements and app icons from parametric recipes, then exports every image
//! at several pixel densities into an Xcode asset catalog with
//! `Contents.json` manifests.

pub mod canvas;
pub mod catalog;
pub mod cli;
pub mod compose;
pub mod config;
pub mod error;
pub mod export;
pub mod icons;
pub mod output;
pub mod recipes;
pub mod types;

pub use canvas::{Canvas, FontBook, Sprite};
pub use catalog::{build_catalog, catalog, run_catalog, BuildReport, CatalogEntry, ImageSet};
pub use compose::{compose_scene, Label, Layer, Scene};
pub use config::BuildConfig;
pub use error::{ArtError, Result};
pub use export::{
    export_scales, write_manifest, write_png, ImageSetManifest, ManifestEntry, ScaleVariant,
};
pub use recipes::{render_character, Identity, Portrait, Recipe, UiElement};
pub use types::{Colour, Palette, Point, Primitive, Rect, Role};
