//! Performance benchmarks for the entity adapter.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use roster::{EntityAdapter, EntityState};
use serde_json::{json, Value};

fn entities(count: usize) -> Vec<Value> {
    (0..count)
        .map(|i| json!({"id": format!("entity-{i}"), "payload": i}))
        .collect()
}

/// Benchmark bulk insertion at varying collection sizes
fn bench_bulk_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("bulk_insert");

    for size in [100, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::new("entities", size), &size, |b, &size| {
            let adapter = EntityAdapter::new("id").unwrap();
            let batch = entities(size);

            b.iter(|| {
                let mut state = EntityState::new();
                adapter.add_many(&mut state, batch.clone()).unwrap();
                black_box(state.len());
            });
        });
    }

    group.finish();
}

/// Benchmark ordered read-back at varying collection sizes
fn bench_ordered_read(c: &mut Criterion) {
    let mut group = c.benchmark_group("ordered_read");

    for size in [100, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::new("entities", size), &size, |b, &size| {
            let adapter = EntityAdapter::new("id").unwrap();
            let mut state = EntityState::new();
            adapter.add_many(&mut state, entities(size)).unwrap();

            b.iter(|| {
                black_box(adapter.get_all(&state).len());
            });
        });
    }

    group.finish();
}

/// Benchmark identifier resolution through a nested path
fn bench_nested_resolution(c: &mut Criterion) {
    let adapter = EntityAdapter::new("ticket.meta.id").unwrap();
    let entity = json!({
        "ticket": {"meta": {"id": "deep"}, "tags": ["a", "b"]},
        "body": "text",
    });

    c.bench_function("nested_resolution", |b| {
        b.iter(|| {
            black_box(adapter.resolve_id(&entity).unwrap());
        });
    });
}

criterion_group!(
    benches,
    bench_bulk_insert,
    bench_ordered_read,
    bench_nested_resolution
);
criterion_main!(benches);
