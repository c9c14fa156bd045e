// File: crates/brushplot-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG.

use brushplot_core::{Chart, DataOptionDescriptor, DataRow, RenderOptions};
use serde_json::json;

fn row(x: f64, y: f64) -> DataRow {
    let mut m = serde_json::Map::new();
    m.insert("x".into(), json!(x));
    m.insert("y".into(), json!(y));
    m
}

#[test]
fn render_smoke_png() {
    let mut chart = Chart::new();
    chart.set_dataset(vec![
        row(0.0, 0.0),
        row(1.0, 2.0),
        row(2.0, 1.0),
        row(3.0, 3.5),
        row(4.0, 2.5),
    ]);
    chart.set_data_options(vec![
        DataOptionDescriptor::new("x", json!("x")),
        DataOptionDescriptor::new("y", json!("y")),
    ]);
    chart.update().expect("update should succeed");

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();

    chart.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    // And the SVG twin
    let svg_out = out.with_extension("svg");
    chart.render_to_svg(&opts, &svg_out).expect("svg render");
    let markup = std::fs::read_to_string(&svg_out).unwrap();
    assert!(markup.starts_with("<svg"));
}
