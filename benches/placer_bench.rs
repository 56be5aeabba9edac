//! Criterion benchmarks for the annealing label placer.
//!
//! Uses a synthetic grid of anchors with labels starting on top of them,
//! the worst case for the overlap terms.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use label_anneal::placer::{Anchor, Label, LabelPlacer, PlacerConfig};

fn grid_instance(n: usize) -> (Vec<Label>, Vec<Anchor>) {
    let cols = (n as f64).sqrt().ceil() as usize;
    let mut labels = Vec::with_capacity(n);
    let mut anchors = Vec::with_capacity(n);
    for k in 0..n {
        let x = 100.0 + 60.0 * (k % cols) as f64;
        let y = 100.0 + 40.0 * (k / cols) as f64;
        anchors.push(Anchor::new(x, y, 3.0));
        labels.push(Label::new(x, y, 45.0, 14.0));
    }
    (labels, anchors)
}

fn bench_placer(c: &mut Criterion) {
    let mut group = c.benchmark_group("placer");

    for &n in &[10usize, 50, 200] {
        group.bench_with_input(BenchmarkId::new("sweep_100", n), &n, |b, &n| {
            let (labels, anchors) = grid_instance(n);
            let config = PlacerConfig::default()
                .with_width(1200.0)
                .with_height(900.0)
                .with_seed(42);
            let placer = LabelPlacer::new(config);

            b.iter(|| {
                let mut working = labels.clone();
                let stats = placer.start(&mut working, &anchors, 100).unwrap();
                black_box((working, stats))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_placer);
criterion_main!(benches);
