//! List command implementation.
//!
//! Prints the catalog without rendering anything.

use clap::Args;

use crate::catalog::catalog;
use crate::error::Result;
use crate::export::{normalize_scales, variant_filename};
use crate::icons::{ICON_SET, ICON_SIZES};
use crate::output::Printer;
use crate::recipes::Identity;

/// Show the catalog
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Scales to show file names for
    #[arg(long = "scale", value_name = "N", default_values_t = [1, 2])]
    pub scales: Vec<u32>,

    /// Also print each identity's palette
    #[arg(long)]
    pub palettes: bool,
}

pub fn run(args: ListArgs, printer: &Printer) -> Result<()> {
    let scales = normalize_scales(&args.scales)?;

    for set in catalog() {
        printer.info("Image set", set.name);
        for entry in &set.entries {
            let files: Vec<String> = scales
                .iter()
                .map(|&s| variant_filename(entry.name, s))
                .collect();
            println!(
                "  {:<18} {:>9}  {}",
                entry.name,
                format!("{}x{}", entry.width, entry.height),
                printer.dim(&files.join(", "))
            );
        }
    }

    printer.info("Image set", ICON_SET);
    for entry in &ICON_SIZES {
        println!(
            "  {:<18} {:>9}  {}",
            entry.filename(),
            format!("{0}x{0}", entry.pixels),
            printer.dim(entry.idiom)
        );
    }

    if args.palettes {
        for identity in Identity::ALL {
            let colours: Vec<String> = identity
                .palette()
                .iter()
                .map(|(role, colour)| format!("{role}={colour}"))
                .collect();
            printer.info("Palette", &format!("{} {}", identity, colours.join(" ")));
        }
    }

    Ok(())
}
