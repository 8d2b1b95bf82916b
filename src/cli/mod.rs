pub mod build;
pub mod list;
pub mod render;

use clap::{Parser, Subcommand};

/// rama-assets - Procedural sprite, scene and icon generator
#[derive(Parser, Debug)]
#[command(name = "rama-assets")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the full catalog into an asset catalog directory
    Build(build::BuildArgs),

    /// Show the catalog: image sets, assets and output files
    List(list::ListArgs),

    /// Render a single identity to a PNG
    Render(render::RenderArgs),
}
