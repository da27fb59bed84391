use std::hint::black_box;

use criterion::Criterion;

use packing::resources::{parse_byte_amount, parse_resource_vector};

fn bench_parse_byte_amount(c: &mut Criterion) {
    c.bench_function("parse byte amount", |b| {
        b.iter(|| parse_byte_amount(black_box("1_536 MiB")))
    });
}

fn bench_parse_resource_vector(c: &mut Criterion) {
    c.bench_function("parse resource vector", |b| {
        b.iter(|| parse_resource_vector(black_box("cpu=2.5, ram=4GiB, disk=10GiB, gpu=1")))
    });
}

pub fn benchmark(c: &mut Criterion) {
    bench_parse_byte_amount(c);
    bench_parse_resource_vector(c);
}
