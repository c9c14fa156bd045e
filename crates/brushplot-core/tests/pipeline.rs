// File: crates/brushplot-core/tests/pipeline.rs
// Purpose: End-to-end update cycles: scales, scene, highlights, resync, diffing.

use brushplot_core::scene::{reconcile, PointNode};
use brushplot_core::{
    Chart, DataOptionDescriptor, DataRow, Selection, SettingDescriptor,
};
use serde_json::{json, Value};

fn row(x: Value, y: Value) -> DataRow {
    let mut m = serde_json::Map::new();
    m.insert("x".into(), x);
    m.insert("y".into(), y);
    m
}

fn xy_options() -> Vec<DataOptionDescriptor> {
    vec![
        DataOptionDescriptor::new("x", json!("x")),
        DataOptionDescriptor::new("y", json!("y")),
    ]
}

fn scenario_chart() -> Chart {
    let mut chart = Chart::new();
    chart.set_dataset(vec![
        row(json!(1), json!(2)),
        row(json!(3), json!(1)),
        row(json!(2), json!(5)),
    ]);
    chart.set_data_options(xy_options());
    chart
}

#[test]
fn end_to_end_scenario() {
    let mut chart = scenario_chart();
    let scene = chart.update().unwrap().clone();

    let (x_scale, y_scale) = chart.scales().unwrap();
    assert_eq!(x_scale.domain, [1.0, 3.0]);
    assert_eq!(x_scale.range, [0.0, 400.0]);
    assert_eq!(y_scale.domain, [1.0, 5.0]);
    assert_eq!(y_scale.range, [400.0, 0.0]);

    // Rows are sorted x = 1, 2, 3; keys reflect source dataset order.
    assert_eq!(scene.points.len(), 3);
    let keys: Vec<usize> = scene.points.iter().map(|p| p.key).collect();
    assert_eq!(keys, vec![0, 2, 1]);

    // The x = 2 row lands on the midpoint pixel.
    let mid = scene.points.iter().find(|p| p.key == 2).unwrap();
    assert!((mid.cx - 200.0).abs() < 1e-9);

    // x axis sits at the bottom of the viewport.
    let x_axis = scene.x_axis.as_ref().unwrap();
    assert_eq!(x_axis.start.1, 400.0);
    assert_eq!(x_axis.end.1, 400.0);
}

#[test]
fn highlight_is_strictly_inside_the_selection() {
    let mut chart = scenario_chart();
    chart.set_selection(Selection::new(1.0, 3.0));
    let scene = chart.update().unwrap();

    let by_key = |k: usize| scene.points.iter().find(|p| p.key == k).unwrap();
    // Boundary rows (x = 1, x = 3) are not highlighted; x = 2 is.
    assert!(!by_key(0).highlighted);
    assert!(!by_key(1).highlighted);
    assert!(by_key(2).highlighted);
    assert_eq!(by_key(2).radius, 7.0);
    assert_eq!(by_key(0).radius, 4.0);
}

#[test]
fn line_is_removed_when_disabled() {
    let mut chart = scenario_chart();
    chart.set_settings(vec![SettingDescriptor::new("show_line", json!(false))]);
    let scene = chart.update().unwrap();
    assert!(scene.line.is_none());

    chart.set_settings(vec![SettingDescriptor::new("show_line", json!(true))]);
    let scene = chart.update().unwrap();
    let line = scene.line.as_ref().unwrap();
    assert_eq!(line.subpaths.len(), 1);
    assert_eq!(line.stroke_width, 3.0);
}

#[test]
fn settings_drive_height_and_curve() {
    let mut chart = scenario_chart();
    chart.set_settings(vec![
        SettingDescriptor::new("height", json!(600)),
        SettingDescriptor::new("curve_type", json!("CurveLinear")),
    ]);
    let scene = chart.update().unwrap().clone();
    assert_eq!(chart.viewport().height, 600.0);
    let (_, y_scale) = chart.scales().unwrap();
    assert_eq!(y_scale.range, [600.0, 0.0]);
    // CurveLinear keeps the control points untouched.
    let line = scene.line.as_ref().unwrap();
    assert_eq!(line.subpaths[0].len(), 3);
}

#[test]
fn unknown_curve_type_surfaces_to_the_host() {
    let mut chart = scenario_chart();
    chart.set_settings(vec![SettingDescriptor::new("curve_type", json!("Bogus"))]);
    let err = chart.update().unwrap_err();
    assert_eq!(err.to_string(), "unknown curve type 'Bogus'");
}

#[test]
fn empty_dataset_renders_nothing_but_keeps_selection() {
    let mut chart = Chart::new();
    chart.set_dataset(Vec::new());
    chart.set_data_options(xy_options());
    chart.set_selection(Selection::new(0.5, 0.9));
    let scene = chart.update().unwrap();

    assert!(scene.points.is_empty());
    assert!(scene.line.is_none());
    assert!(scene.x_axis.is_none());
    assert!(scene.y_axis.is_none());
    assert!(scene.brush.is_none());
    assert_eq!(chart.selection(), Selection::new(0.5, 0.9));
}

#[test]
fn nan_rows_are_skipped_not_fatal() {
    let mut chart = Chart::new();
    chart.set_dataset(vec![
        row(json!(1), json!(2)),
        row(json!("wat"), json!(3)),
        row(json!(3), json!(4)),
    ]);
    chart.set_data_options(xy_options());
    let scene = chart.update().unwrap();
    // The bad row renders no point and does not join the line.
    assert_eq!(scene.points.len(), 2);
    let (x_scale, _) = chart.scales().unwrap();
    assert_eq!(x_scale.domain, [1.0, 3.0]);
}

#[test]
fn resize_is_idempotent() {
    let mut chart = scenario_chart();
    chart.set_viewport_width(512.0);
    chart.update().unwrap();
    let first = chart.scales();
    let first_scene = chart.scene().clone();

    chart.set_viewport_width(512.0);
    chart.update().unwrap();
    assert_eq!(chart.scales(), first);
    assert_eq!(chart.scene(), &first_scene);
}

#[test]
fn brush_extent_follows_scale_after_resize() {
    let mut chart = scenario_chart();
    chart.set_selection(Selection::new(2.0, 2.2));
    let scene = chart.update().unwrap();
    // x domain [1,3] over [0,400]: 2.0 -> 200, 2.2 -> 240.
    let rect = scene.brush.as_ref().unwrap().rect;
    assert!((rect.left - 200.0).abs() < 1e-9);
    assert!((rect.right - 240.0).abs() < 1e-9);

    chart.set_viewport_width(800.0);
    let scene = chart.update().unwrap();
    // Same data-space selection, doubled pixel range.
    let rect = scene.brush.as_ref().unwrap().rect;
    assert!((rect.left - 400.0).abs() < 1e-9);
    assert!((rect.right - 480.0).abs() < 1e-9);
    assert_eq!(chart.selection(), Selection::new(2.0, 2.2));
}

#[test]
fn pointer_drag_updates_selection_and_epoch() {
    let mut chart = scenario_chart();
    chart.update().unwrap();
    assert_eq!(chart.selection_epoch(), 0);

    // x domain [1,3] over [0,400]: 100 px -> 1.5, 300 px -> 2.5.
    chart.pointer_down(100.0);
    chart.pointer_move(300.0);
    chart.pointer_up(300.0);
    let scene = chart.update().unwrap();
    assert_eq!(scene.selection_label.as_ref().unwrap().text, "[1.50, 2.50]");

    let sel = chart.selection();
    assert!((sel.low - 1.5).abs() < 1e-9);
    assert!((sel.high - 2.5).abs() < 1e-9);
    assert_eq!(chart.selection_epoch(), 3);
}

#[test]
fn selection_readout_has_two_decimals() {
    let mut chart = scenario_chart();
    chart.set_selection(Selection::new(2.0, 2.2));
    let scene = chart.update().unwrap();
    assert_eq!(scene.selection_label.as_ref().unwrap().text, "[2.00, 2.20]");
}

#[test]
fn regression_hook_is_a_noop_by_default() {
    let mut chart = scenario_chart();
    chart.set_settings(vec![SettingDescriptor::new("show_reg_line", json!(true))]);
    let scene = chart.update().unwrap();
    assert!(scene.overlays.is_empty());
}

#[test]
fn svg_output_mirrors_the_scene() {
    let mut chart = scenario_chart();
    chart.update().unwrap();
    let svg = chart.svg_document(&Default::default());
    assert_eq!(svg.matches("<circle").count(), 3);
    assert_eq!(svg.matches("<path").count(), 1);
    assert!(svg.contains("<rect"));
    assert!(svg.starts_with("<svg"));
}

// ---- keyed reconciliation ---------------------------------------------------

fn point(key: usize, cx: f64) -> PointNode {
    PointNode { key, cx, cy: 0.0, radius: 4.0, opacity: 0.7, highlighted: false }
}

#[test]
fn reconcile_reports_created_updated_removed_retained() {
    let mut retained = Vec::new();
    let diff = reconcile(&mut retained, vec![point(0, 1.0), point(1, 2.0), point(2, 3.0)]);
    assert_eq!(diff.created, vec![0, 1, 2]);

    // Key 1 moves, key 2 disappears, key 3 appears, key 0 is untouched.
    let diff = reconcile(&mut retained, vec![point(0, 1.0), point(1, 5.0), point(3, 4.0)]);
    assert_eq!(diff.retained, vec![0]);
    assert_eq!(diff.updated, vec![1]);
    assert_eq!(diff.created, vec![3]);
    assert_eq!(diff.removed, vec![2]);
    assert_eq!(retained.len(), 3);
}

#[test]
fn unchanged_cycles_retain_every_node() {
    let mut chart = scenario_chart();
    chart.update().unwrap();
    let before = chart.scene().points.clone();
    // Same inputs, new cycle: nodes must come out identical.
    chart.set_selection(chart.selection());
    chart.update().unwrap();
    assert_eq!(chart.scene().points, before);
}
