use criterion::{black_box, criterion_group, criterion_main, Criterion};

use bayes_average::{RatedItem, RatingSet};

/// 1K items with rating counts spread over 0..500.
fn build_1k_item_set() -> RatingSet {
    (0..1000u64)
        .map(|i| {
            let count = (i * 7919) % 500;
            let ratings = (0..count).map(|j| (j % 5 + 1) as f64).collect();
            RatedItem::new(format!("item-{i}"), ratings, count)
        })
        .collect()
}

fn bench_adjusted_average(c: &mut Criterion) {
    let set = build_1k_item_set();
    let calc = set.calculator();

    c.bench_function("adjusted_average_1k_items", |b| {
        b.iter(|| {
            for item in set.items() {
                black_box(calc.adjusted_average(item.average(), item.ratings.len() as f64));
            }
        });
    });
}

fn bench_derive_weight(c: &mut Criterion) {
    let set = build_1k_item_set();

    c.bench_function("derive_weight_1k_items", |b| {
        b.iter(|| black_box(set.calculator()));
    });
}

criterion_group!(benches, bench_adjusted_average, bench_derive_weight);
criterion_main!(benches);
