// File: crates/demo/src/main.rs
// Summary: Demo host: loads a CSV dataset (or synthesizes one), feeds the chart
// settings/data-options, simulates resize and a brush drag, writes PNG and SVG.

use anyhow::{Context, Result};
use brushplot_core::{Chart, DataOptionDescriptor, DataRow, RenderOptions, SettingDescriptor};
use serde_json::json;
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    env_logger::init();

    // The dataset normally arrives from the host's fetch; here it is a CSV
    // path on the command line, or a synthetic waveform when omitted.
    let (dataset, x_field, y_field) = match std::env::args().nth(1) {
        Some(path) => {
            let path = PathBuf::from(path);
            let (rows, headers) = load_csv(&path)
                .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
            anyhow::ensure!(headers.len() >= 2, "need at least two CSV columns");
            println!("Loaded {} rows from {}", rows.len(), path.display());
            (rows, headers[0].clone(), headers[1].clone())
        }
        None => (synthetic_dataset(60), "t".to_string(), "value".to_string()),
    };

    // Mock settings, the shape a host settings panel produces.
    let settings = vec![
        SettingDescriptor::new("height", json!(400)),
        SettingDescriptor::new("show_reg_line", json!(true)),
        SettingDescriptor::new("show_line", json!(true)),
        SettingDescriptor::new("curve_type", json!("CurveBasis")),
        SettingDescriptor::new("translate_y_label", json!(0)),
    ];
    let data_options = vec![
        DataOptionDescriptor::new("x", json!(x_field)),
        DataOptionDescriptor::new("y", json!(y_field)),
    ];

    let mut chart = Chart::new();
    chart.set_dataset(dataset);
    chart.set_settings(settings);
    chart.set_data_options(data_options);
    chart.update()?;
    log::info!("initial cycle produced {} points", chart.scene().points.len());
    println!("Initial selection: {}", chart.selection().label());

    let opts = RenderOptions::default();
    let out_dir = Path::new("target/demo_out");
    chart.render_to_png(&opts, out_dir.join("chart.png"))?;
    chart.render_to_svg(&opts, out_dir.join("chart.svg"))?;

    // Container resize: only the width comes from outside.
    chart.set_viewport_width(640.0);
    chart.update()?;
    println!(
        "After resize, selection unchanged: {} (epoch {})",
        chart.selection().label(),
        chart.selection_epoch()
    );

    // A user drag across the middle of the plot.
    chart.pointer_down(160.0);
    chart.pointer_move(320.0);
    chart.pointer_up(320.0);
    chart.update()?;
    println!(
        "After brush drag: {} (epoch {})",
        chart.selection().label(),
        chart.selection_epoch()
    );

    chart.render_to_png(&opts, out_dir.join("chart_brushed.png"))?;
    chart.render_to_svg(&opts, out_dir.join("chart_brushed.svg"))?;
    println!("Wrote chart.png / chart.svg / chart_brushed.png / chart_brushed.svg in {}", out_dir.display());
    Ok(())
}

/// Read a CSV with headers into row maps. Values stay strings; the engine's
/// normalizer does the numeric coercion.
fn load_csv(path: &Path) -> Result<(Vec<DataRow>, Vec<String>)> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let mut row = serde_json::Map::new();
        for (header, value) in headers.iter().zip(record.iter()) {
            row.insert(header.clone(), json!(value));
        }
        rows.push(row);
    }
    Ok((rows, headers))
}

fn synthetic_dataset(n: usize) -> Vec<DataRow> {
    (0..n)
        .map(|i| {
            let t = i as f64 * 0.1;
            let mut row = serde_json::Map::new();
            row.insert("t".into(), json!(t));
            row.insert("value".into(), json!((t * 2.0).sin() + t * 0.3));
            row
        })
        .collect()
}
