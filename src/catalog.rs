//! The fixed asset catalog and the build driver.
//!
//! Each image set is one output directory. Entries are rendered and
//! exported one at a time, every scale variant written before the next
//! entry starts. A set's `Contents.json` is written last, and only when all
//! of its files were written, so a manifest never names a missing file.
//!
//! Failures are collected and reported after the whole catalog has been
//! attempted, unless `fail_fast` is set, in which case the first error
//! aborts the run.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::canvas::{Canvas, FontBook, Sprite};
use crate::compose::{Scene, SCENE_HEIGHT, SCENE_WIDTH};
use crate::config::BuildConfig;
use crate::error::{ArtError, Result};
use crate::export::{
    ensure_directory, export_scales, write_manifest, write_png, ImageSetManifest, ManifestEntry,
    MANIFEST_FILENAME,
};
use crate::icons::{render_icon, ICON_SET, ICON_SIZES};
use crate::output::{display_path, plural, Printer};
use crate::recipes::{Identity, UiElement};

pub const SPRITE_SET: &str = "GameSprites.imageset";
pub const SCENE_SET: &str = "GameArt.imageset";
pub const UI_SET: &str = "GameUI.imageset";

/// What draws an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Character(Identity),
    Scene(Scene),
    Ui(UiElement),
}

/// One logical asset at its canonical size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub source: Source,
    pub width: u32,
    pub height: u32,
}

impl CatalogEntry {
    fn character(identity: Identity, width: u32, height: u32) -> Self {
        Self {
            name: identity.name(),
            source: Source::Character(identity),
            width,
            height,
        }
    }

    fn scene(scene: Scene) -> Self {
        Self {
            name: scene.name(),
            source: Source::Scene(scene),
            width: SCENE_WIDTH,
            height: SCENE_HEIGHT,
        }
    }

    fn ui(name: &'static str, element: UiElement, width: u32, height: u32) -> Self {
        Self {
            name,
            source: Source::Ui(element),
            width,
            height,
        }
    }

    pub fn render(&self, fonts: &FontBook) -> Sprite {
        let canvas = match &self.source {
            Source::Character(identity) => identity.render(self.width, self.height, fonts),
            Source::Scene(scene) => scene.render(fonts),
            Source::Ui(element) => element.render(self.width, self.height, fonts),
        };
        Sprite::new(self.name, canvas)
    }
}

/// A directory of related assets sharing one manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSet {
    pub name: &'static str,
    pub entries: Vec<CatalogEntry>,
}

/// The complete catalog in build order.
pub fn catalog() -> Vec<ImageSet> {
    let mut sprites: Vec<CatalogEntry> = [Identity::Rama, Identity::Sita, Identity::Hanuman, Identity::Demon]
        .into_iter()
        .map(|identity| CatalogEntry::character(identity, 200, 300))
        .collect();
    sprites.push(CatalogEntry::character(Identity::Background, 400, 300));

    vec![
        ImageSet {
            name: SPRITE_SET,
            entries: sprites,
        },
        ImageSet {
            name: SCENE_SET,
            entries: Scene::ALL.into_iter().map(CatalogEntry::scene).collect(),
        },
        ImageSet {
            name: UI_SET,
            entries: vec![
                CatalogEntry::ui("button", UiElement::button("BEGIN"), 240, 60),
                CatalogEntry::ui("panel", UiElement::Panel, 400, 300),
            ],
        },
    ]
}

/// A file or directory that could not be produced.
#[derive(Debug)]
pub struct AssetFailure {
    pub image_set: String,
    pub asset: String,
    pub error: ArtError,
}

impl fmt::Display for AssetFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}: {}", self.image_set, self.asset, self.error)
    }
}

/// Outcome of a catalog run.
#[derive(Debug, Default)]
pub struct BuildReport {
    /// Assets whose every file was written.
    pub assets: usize,
    pub files: Vec<PathBuf>,
    pub manifests: Vec<PathBuf>,
    pub failures: Vec<AssetFailure>,
}

impl BuildReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Turn collected failures into a single error.
    pub fn into_result(self) -> Result<Self> {
        if self.is_success() {
            return Ok(self);
        }
        let failed = self.failures.len();
        Err(ArtError::Build {
            message: format!(
                "{} failed to write",
                plural(failed, "file or directory", "files or directories")
            ),
            help: Some(
                self.failures
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("\n"),
            ),
        })
    }
}

/// Writes the files of one image set and tracks whether its manifest may
/// be written.
struct SetWriter<'a> {
    name: &'static str,
    dir: PathBuf,
    manifest: ImageSetManifest,
    clean: bool,
    fail_fast: bool,
    report: &'a mut BuildReport,
    printer: &'a Printer,
}

impl<'a> SetWriter<'a> {
    fn open(
        root: &Path,
        name: &'static str,
        config: &BuildConfig,
        report: &'a mut BuildReport,
        printer: &'a Printer,
    ) -> Result<Option<Self>> {
        let dir = root.join(name);
        let mut writer = Self {
            name,
            dir,
            manifest: ImageSetManifest::new(),
            clean: true,
            fail_fast: config.fail_fast,
            report,
            printer,
        };
        if let Err(e) = ensure_directory(&writer.dir) {
            writer.fail(name, e)?;
            return Ok(None);
        }
        Ok(Some(writer))
    }

    /// Record a failure, or return it when failing fast.
    fn fail(&mut self, asset: &str, error: ArtError) -> Result<()> {
        self.clean = false;
        self.printer.error("error", &format!("{}/{}: {}", self.name, asset, error));
        if self.fail_fast {
            return Err(error);
        }
        self.report.failures.push(AssetFailure {
            image_set: self.name.to_string(),
            asset: asset.to_string(),
            error,
        });
        Ok(())
    }

    /// Write one file. Returns `Ok(false)` when the write failed and was
    /// recorded.
    fn write(&mut self, asset: &str, filename: &str, canvas: &Canvas, entry: ManifestEntry) -> Result<bool> {
        let path = self.dir.join(filename);
        match write_png(canvas, &path) {
            Ok(()) => {
                self.printer.status("Writing", &display_path(&path));
                self.report.files.push(path);
                self.manifest.push(entry);
                Ok(true)
            }
            Err(e) => {
                self.fail(asset, e)?;
                Ok(false)
            }
        }
    }

    fn finish(mut self) -> Result<()> {
        if !self.clean {
            self.printer.warning(
                "Skipping",
                &format!("{}/{} (image set incomplete)", self.name, MANIFEST_FILENAME),
            );
            return Ok(());
        }
        match write_manifest(&self.dir, &self.manifest) {
            Ok(path) => {
                self.printer.status("Manifest", &display_path(&path));
                self.report.manifests.push(path);
                Ok(())
            }
            Err(e) => self.fail(MANIFEST_FILENAME, e),
        }
    }
}

/// Render and export `sets`, then the icon set when enabled.
///
/// Returns `Err` only in fail-fast mode; otherwise failures are in the
/// report.
pub fn run_catalog(
    sets: &[ImageSet],
    config: &BuildConfig,
    fonts: &FontBook,
    printer: &Printer,
) -> Result<BuildReport> {
    let mut report = BuildReport::default();

    for set in sets {
        let Some(mut writer) = SetWriter::open(&config.output, set.name, config, &mut report, printer)? else {
            continue;
        };

        for entry in &set.entries {
            printer.status(
                "Rendering",
                &format!("{} {}", entry.name, printer.dim(&format!("({}x{})", entry.width, entry.height))),
            );
            let sprite = entry.render(fonts);

            let mut complete = true;
            for variant in export_scales(&sprite, &config.scales) {
                complete &= writer.write(entry.name, &variant.filename, &variant.canvas, variant.manifest_entry())?;
            }
            if complete {
                writer.report.assets += 1;
            }
        }
        writer.finish()?;
    }

    if config.icons {
        if let Some(mut writer) = SetWriter::open(&config.output, ICON_SET, config, &mut report, printer)? {
            for entry in &ICON_SIZES {
                let icon = render_icon(entry.pixels, fonts);
                let filename = entry.filename();
                if writer.write(&filename, &filename, &icon, entry.manifest_entry())? {
                    writer.report.assets += 1;
                }
            }
            writer.finish()?;
        }
    }

    Ok(report)
}

/// Build the full catalog, failing if any file could not be written.
pub fn build_catalog(config: &BuildConfig, fonts: &FontBook, printer: &Printer) -> Result<BuildReport> {
    run_catalog(&catalog(), config, fonts, printer)?.into_result()
}
