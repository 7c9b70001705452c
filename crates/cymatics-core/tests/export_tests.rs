// Tests for PNG snapshot export.

use cymatics_core::export::save_png;
use cymatics_core::render::render_heatmap;
use cymatics_core::{ColorMap, CymaticsError, FieldParams, WaveField};
use std::path::PathBuf;

fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("cymatics-{}-{name}", std::process::id()))
}

#[test]
fn saved_heatmap_reads_back_identically() {
    let field = WaveField::generate(440.0, 3, &FieldParams::default());
    let heatmap = render_heatmap(&field, ColorMap::Viridis, 160, 120).unwrap();
    let path = scratch_path("roundtrip.png");

    save_png(&heatmap, &path).unwrap();
    let loaded = image::open(&path).unwrap().to_rgba8();
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded.dimensions(), (160, 120));
    assert_eq!(loaded.as_raw(), heatmap.as_raw());
}

#[test]
fn saving_overwrites_previous_snapshot() {
    let path = scratch_path("overwrite.png");
    let field = WaveField::generate(0.0, 0, &FieldParams::default());
    let first = render_heatmap(&field, ColorMap::Viridis, 64, 48).unwrap();
    let second = render_heatmap(&field, ColorMap::Magma, 80, 60).unwrap();

    save_png(&first, &path).unwrap();
    save_png(&second, &path).unwrap();
    let loaded = image::open(&path).unwrap().to_rgba8();
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded.dimensions(), (80, 60));
}

#[test]
fn unwritable_path_reports_export_error() {
    let dir = scratch_path("missing-dir");
    let path = dir.join("nested").join("out.png");
    let image = image::RgbaImage::new(4, 4);
    match save_png(&image, &path) {
        Err(CymaticsError::Export { path: p, .. }) => assert_eq!(p, path),
        other => panic!("expected export error, got {other:?}"),
    }
}
