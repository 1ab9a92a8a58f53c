//! Benchmarks for building order sync batches.
//!
//! Run with: cargo bench
//!
//! Results are saved to `target/criterion/` with HTML reports.
#![allow(
    clippy::expect_used,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss
)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use order_sheets::{build_setup_request, build_sync_request, Order, OrderStatus};

fn make_orders(count: usize) -> Vec<Order> {
    (0..count)
        .map(|i| {
            Order::new(
                i as u64,
                format!("Customer {i}"),
                format!("SKU-{}", i % 32),
                (i % 100) as u32 + 1,
                0.99 + (i % 20) as f64,
                OrderStatus::Shipped,
            )
        })
        .collect()
}

/// Benchmark the sync batch for growing order lists
fn bench_sync_request(c: &mut Criterion) {
    let mut group = c.benchmark_group("sync_request");
    for count in [10_usize, 1_000, 10_000] {
        let orders = make_orders(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("build", count), &orders, |b, orders| {
            b.iter(|| build_sync_request(black_box(0), black_box(orders)).expect("build failed"))
        });
    }
    group.finish();
}

/// Benchmark serializing a large sync batch to the JSON wire format
fn bench_sync_serialize(c: &mut Criterion) {
    let batch = build_sync_request(0, &make_orders(10_000)).expect("build failed");
    c.bench_function("sync_serialize_10k", |b| {
        b.iter(|| serde_json::to_vec(black_box(&batch)).expect("serialize failed"))
    });
}

/// Benchmark the fixed setup batch
fn bench_setup_request(c: &mut Criterion) {
    c.bench_function("setup_request", |b| {
        b.iter(|| build_setup_request(black_box(0), black_box(1)))
    });
}

criterion_group!(
    benches,
    bench_sync_request,
    bench_sync_serialize,
    bench_setup_request
);
criterion_main!(benches);
