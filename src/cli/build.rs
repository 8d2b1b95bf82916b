//! Build command implementation.
//!
//! Loads configuration, resolves fonts once and runs the catalog.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::canvas::FontBook;
use crate::catalog::{catalog, run_catalog};
use crate::config::BuildConfig;
use crate::error::Result;
use crate::output::{display_path, plural, Printer};

/// Render the full catalog
#[derive(Args, Debug, Default)]
pub struct BuildArgs {
    /// Output directory (overrides config)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Scale factor to export; repeat for several (scale 1 is always written)
    #[arg(long = "scale", value_name = "N")]
    pub scales: Vec<u32>,

    /// Preferred font family
    #[arg(long)]
    pub font: Option<String>,

    /// Stop at the first failed file
    #[arg(long)]
    pub fail_fast: bool,

    /// Skip the app icon set
    #[arg(long)]
    pub no_icons: bool,

    /// Config file (default: ./rama-assets.yaml if present)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Merge config file and flags.
pub fn resolve_config(args: &BuildArgs) -> Result<BuildConfig> {
    let mut config = match &args.config {
        Some(path) => BuildConfig::load(path)?,
        None => BuildConfig::discover(Path::new("."))?,
    };

    if let Some(output) = &args.output {
        config.output = output.clone();
    }
    if !args.scales.is_empty() {
        config.scales = args.scales.clone();
    }
    if let Some(font) = &args.font {
        config.font = font.clone();
    }
    config.fail_fast |= args.fail_fast;
    if args.no_icons {
        config.icons = false;
    }

    config.validate()?;
    Ok(config)
}

pub fn run(args: BuildArgs, printer: &Printer) -> Result<()> {
    let config = resolve_config(&args)?;

    let fonts = FontBook::resolve(&config.font, &config.font_paths);
    if fonts.is_builtin() {
        printer.warning(
            "Font",
            &format!("{} not found, using {}", config.font, fonts.source()),
        );
    } else {
        printer.info("Font", &fonts.source().to_string());
    }

    let report = run_catalog(&catalog(), &config, &fonts, printer)?;

    let summary = format!(
        "{}, {} in {}",
        plural(report.assets, "asset", "assets"),
        plural(report.files.len(), "file", "files"),
        display_path(&config.output)
    );
    if report.is_success() {
        printer.success("Finished", &summary);
    } else {
        printer.error(
            "Failed",
            &format!(
                "{} ({} written)",
                plural(report.failures.len(), "failure", "failures"),
                summary
            ),
        );
    }

    report.into_result().map(|_| ())
}
