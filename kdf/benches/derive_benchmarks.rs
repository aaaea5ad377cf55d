//! Criterion benchmarks for derivation throughput

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pbctx_kdf::{CtxDeriver, DeriveConfig, Seed};
use tokio::runtime::Runtime;

/// Single-key derivation across output lengths
fn benchmark_derive_key(c: &mut Criterion) {
    let rt = Runtime::new().expect("tokio runtime");
    let seed = Seed::from("bench-seed@example.com")
        .validate()
        .expect("valid seed");
    let mut group = c.benchmark_group("derive_key");

    for length in [32usize, 64, 256, 1024] {
        group.throughput(Throughput::Bytes(length as u64));

        let deriver = CtxDeriver::new(DeriveConfig::default().with_length(length));
        group.bench_with_input(BenchmarkId::from_parameter(length), &deriver, |b, deriver| {
            b.iter(|| {
                rt.block_on(async {
                    let key = deriver
                        .derive_key(&seed, 0)
                        .await
                        .expect("derivation should succeed");
                    std::hint::black_box(key);
                });
            });
        });
    }
    group.finish();
}

/// Sequential batch derivation across batch sizes
fn benchmark_derive_batch(c: &mut Criterion) {
    let rt = Runtime::new().expect("tokio runtime");
    let seed = Seed::from("bench-seed@example.com")
        .validate()
        .expect("valid seed");
    let mut group = c.benchmark_group("derive_batch");

    for count in [1usize, 10, 100] {
        group.throughput(Throughput::Elements(count as u64));

        let deriver = CtxDeriver::new_default();
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| {
                rt.block_on(async {
                    let keys = deriver
                        .derive_batch(&seed, count)
                        .await
                        .expect("derivation should succeed");
                    std::hint::black_box(keys);
                });
            });
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_derive_key, benchmark_derive_batch);
criterion_main!(benches);
