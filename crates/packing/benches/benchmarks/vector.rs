use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};

use packing::resources::{ByteAmount, ResourceVector};

fn create_vectors(count: u64) -> Vec<ResourceVector> {
    (0..count)
        .map(|i| {
            ResourceVector::new(
                (i % 8) as f64 + 0.5,
                ByteAmount::from_megabytes(128 * (i % 16 + 1)),
                ByteAmount::from_megabytes(512),
                (i % 2) as u32,
            )
        })
        .collect()
}

fn bench_sum(c: &mut Criterion) {
    for count in [10, 1_000, 100_000] {
        let vectors = create_vectors(count);
        c.bench_with_input(BenchmarkId::new("sum vectors", count), &vectors, |b, vectors| {
            b.iter(|| black_box(vectors.iter().sum::<ResourceVector>()));
        });
    }
}

fn bench_divide(c: &mut Criterion) {
    for count in [10, 1_000, 100_000] {
        let vectors = create_vectors(count);
        let shape = ResourceVector::new(
            4.0,
            ByteAmount::from_gigabytes(8),
            ByteAmount::from_gigabytes(8),
            1,
        );
        c.bench_with_input(
            BenchmarkId::new("divide by container shape", count),
            &vectors,
            |b, vectors| {
                b.iter(|| {
                    vectors
                        .iter()
                        .map(|v| v.divide_by(&shape).unwrap_or_default())
                        .fold(0.0f64, f64::max)
                });
            },
        );
    }
}

fn bench_subtract(c: &mut Criterion) {
    for count in [10, 1_000, 100_000] {
        let vectors = create_vectors(count);
        let capacity = ResourceVector::new(
            4.0,
            ByteAmount::from_gigabytes(1),
            ByteAmount::from_gigabytes(1),
            1,
        );
        c.bench_with_input(
            BenchmarkId::new("subtract absolute", count),
            &vectors,
            |b, vectors| {
                b.iter(|| {
                    vectors
                        .iter()
                        .map(|v| v.subtract_absolute(&capacity))
                        .sum::<ResourceVector>()
                });
            },
        );
    }
}

pub fn benchmark(c: &mut Criterion) {
    bench_sum(c);
    bench_divide(c);
    bench_subtract(c);
}
