// File: crates/brushplot-core/tests/normalize.rs
// Purpose: Validate dataset normalization: coercion, ordering, non-mutation.

use brushplot_core::{normalize, DataRow, FieldSelection};
use serde_json::{json, Value};

fn row(x: Value, y: Value) -> DataRow {
    let mut m = serde_json::Map::new();
    m.insert("x".into(), x);
    m.insert("y".into(), y);
    m
}

fn fields() -> FieldSelection {
    FieldSelection::new("x", "y")
}

#[test]
fn sorts_ascending_by_x() {
    let dataset = vec![row(json!(3), json!(1)), row(json!(1), json!(2)), row(json!(2), json!(5))];
    let rows = normalize(&dataset, &fields());
    let keys: Vec<usize> = rows.iter().map(|r| r.key).collect();
    let xs: Vec<f64> = rows.iter().map(|r| r.x).collect();
    assert_eq!(keys, vec![1, 2, 0]);
    assert_eq!(xs, vec![1.0, 2.0, 3.0]);
}

#[test]
fn ties_keep_input_order() {
    let dataset = vec![
        row(json!(2), json!(0)),
        row(json!(1), json!(0)),
        row(json!(2), json!(1)),
        row(json!(2), json!(2)),
    ];
    let rows = normalize(&dataset, &fields());
    let keys: Vec<usize> = rows.iter().map(|r| r.key).collect();
    assert_eq!(keys, vec![1, 0, 2, 3]);
}

#[test]
fn output_is_a_permutation_of_input() {
    let dataset = vec![row(json!(5), json!(1)), row(json!(-2), json!(2)), row(json!(0.5), json!(3))];
    let rows = normalize(&dataset, &fields());
    assert_eq!(rows.len(), dataset.len());
    let mut keys: Vec<usize> = rows.iter().map(|r| r.key).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec![0, 1, 2]);
}

#[test]
fn coerces_strings_and_propagates_nan() {
    let dataset = vec![
        row(json!(" 2.5 "), json!("10")),
        row(json!(true), json!(1)),
        row(json!(null), json!(2)),
        row(json!(1), json!("not a number")),
    ];
    let rows = normalize(&dataset, &fields());

    // String coercion succeeds.
    let first = rows.iter().find(|r| r.key == 0).unwrap();
    assert_eq!((first.x, first.y), (2.5, 10.0));

    // Bool, null, unparsable strings all become NaN, not errors.
    assert!(rows.iter().find(|r| r.key == 1).unwrap().x.is_nan());
    assert!(rows.iter().find(|r| r.key == 2).unwrap().x.is_nan());
    assert!(rows.iter().find(|r| r.key == 3).unwrap().y.is_nan());
}

#[test]
fn missing_fields_become_nan_and_sort_last() {
    let mut short = serde_json::Map::new();
    short.insert("y".into(), json!(7));
    let dataset = vec![short, row(json!(9), json!(1)), row(json!(1), json!(1))];
    let rows = normalize(&dataset, &fields());
    // NaN x rows are kept, ordered after every finite x.
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].key, 2);
    assert_eq!(rows[1].key, 1);
    assert!(rows[2].x.is_nan());
    assert!(!rows[2].is_plottable());
}

#[test]
fn input_rows_are_not_mutated() {
    let dataset = vec![row(json!("3.5"), json!("1")), row(json!(1), json!(2))];
    let before = dataset.clone();
    let _ = normalize(&dataset, &fields());
    // Coercion works on copies; the host's rows still hold raw strings.
    assert_eq!(dataset, before);
    assert_eq!(dataset[0].get("x"), Some(&json!("3.5")));
}
