//! End-to-end export tests against a temporary directory.

use std::fs;

use pretty_assertions::assert_eq;
use tempfile::tempdir;

use rama_assets::canvas::FontBook;
use rama_assets::catalog::{catalog, run_catalog, SPRITE_SET};
use rama_assets::export::{ensure_directory, export_scales, write_manifest, write_png};
use rama_assets::output::Printer;
use rama_assets::{render_character, BuildConfig, ImageSetManifest, ManifestEntry};

#[test]
fn test_rama_exports_two_scales_with_manifest() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("GameSprites.imageset");
    ensure_directory(&out).unwrap();

    let sprite = render_character("rama", 200, 300).unwrap();
    let mut manifest = ImageSetManifest::new();
    for variant in export_scales(&sprite, &[1, 2]) {
        write_png(&variant.canvas, &out.join(&variant.filename)).unwrap();
        manifest.push(variant.manifest_entry());
    }
    write_manifest(&out, &manifest).unwrap();

    let base = image::open(out.join("rama.png")).unwrap();
    assert_eq!((base.width(), base.height()), (200, 300));
    let double = image::open(out.join("rama@2x.png")).unwrap();
    assert_eq!((double.width(), double.height()), (400, 600));

    let text = fs::read_to_string(out.join("Contents.json")).unwrap();
    let parsed: ImageSetManifest = serde_json::from_str(&text).unwrap();
    assert_eq!(
        parsed.images,
        vec![
            ManifestEntry::universal("rama.png", 1),
            ManifestEntry::universal("rama@2x.png", 2),
        ]
    );
    assert_eq!(parsed.info.author, "xcode");
    assert_eq!(parsed.info.version, 1);
}

#[test]
fn test_canonical_png_matches_render() {
    let dir = tempdir().unwrap();
    let sprite = render_character("sita", 200, 300).unwrap();
    let path = dir.path().join("sita.png");
    write_png(sprite.canvas(), &path).unwrap();

    let read_back = image::open(&path).unwrap().to_rgba8();
    assert_eq!(read_back, sprite.canvas().to_image());
}

#[test]
fn test_sprite_set_manifest_has_two_entries_per_asset() {
    let dir = tempdir().unwrap();
    let config = BuildConfig {
        output: dir.path().join("Assets.xcassets"),
        scales: vec![1, 2],
        icons: false,
        ..BuildConfig::default()
    };
    let sets: Vec<_> = catalog().into_iter().filter(|s| s.name == SPRITE_SET).collect();
    let n = sets[0].entries.len();

    let report = run_catalog(&sets, &config, &FontBook::builtin(), &Printer::silent()).unwrap();
    assert!(report.is_success());
    assert_eq!(report.assets, n);
    assert_eq!(report.files.len(), 2 * n);

    let text = fs::read_to_string(config.output.join(SPRITE_SET).join("Contents.json")).unwrap();
    let manifest: ImageSetManifest = serde_json::from_str(&text).unwrap();
    assert_eq!(manifest.len(), 2 * n);

    for pair in manifest.images.chunks(2) {
        let id = pair[0].filename.trim_end_matches(".png");
        assert_eq!(pair[0].scale, "1x");
        assert_eq!(pair[1].filename, format!("{id}@2x.png"));
        assert_eq!(pair[1].scale, "2x");
        assert!(pair.iter().all(|e| e.idiom == "universal"));
    }
}

#[test]
fn test_unknown_identity_fails_before_rendering() {
    let err = render_character("kumbhakarna", 200, 300).unwrap_err();
    assert!(err.to_string().contains("kumbhakarna"));
}
