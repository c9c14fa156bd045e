use brushplot_core::{Chart, DataOptionDescriptor, DataRow, Selection};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde_json::json;

fn gen_dataset(n: usize) -> Vec<DataRow> {
    (0..n)
        .map(|i| {
            let mut m = serde_json::Map::new();
            m.insert("x".into(), json!(i as f64 * 0.5));
            m.insert("y".into(), json!((i as f64 * 0.01).sin() * 10.0));
            m
        })
        .collect()
}

fn bench_update_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("update_cycle");
    for &n in &[1_000usize, 10_000usize] {
        let dataset = gen_dataset(n);
        group.bench_function(format!("n{n}"), |b| {
            let mut chart = Chart::new();
            chart.set_dataset(dataset.clone());
            chart.set_data_options(vec![
                DataOptionDescriptor::new("x", json!("x")),
                DataOptionDescriptor::new("y", json!("y")),
            ]);
            chart.update().unwrap();
            let mut flip = false;
            b.iter(|| {
                // Alternate the selection so every cycle re-runs the scene
                // stage and the keyed reconciler has work to do.
                flip = !flip;
                let sel = if flip {
                    Selection::new(10.0, 50.0)
                } else {
                    Selection::new(20.0, 60.0)
                };
                chart.set_selection(sel);
                let scene = chart.update().unwrap();
                black_box(scene.points.len());
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_update_cycle);
criterion_main!(benches);
