use clap::Parser;
use miette::Result;
use rama_assets::cli::{Cli, Commands};
use rama_assets::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Build(args) => rama_assets::cli::build::run(args, &printer)?,
        Commands::List(args) => rama_assets::cli::list::run(args, &printer)?,
        Commands::Render(args) => rama_assets::cli::render::run(args, &printer)?,
    }

    Ok(())
}
