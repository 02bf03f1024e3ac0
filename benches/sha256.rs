use fingerprint::digest_hex;
use fingerprint::hash::sha256;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_sha256(c: &mut Criterion) {
    let mut group = c.benchmark_group("sha256");

    for len in [64usize, 1024, 64 * 1024] {
        let data = vec![0u8; len];
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &data, |b, data| {
            b.iter(|| sha256(black_box(data)))
        });
    }

    group.finish();
}

pub fn bench_digest_hex(c: &mut Criterion) {
    let text = "The quick brown fox jumps over the lazy dog";

    c.bench_function("digest_hex 43 bytes", |b| {
        b.iter(|| digest_hex(black_box(text)))
    });
}

criterion_group!(benches, bench_sha256, bench_digest_hex);
criterion_main!(benches);
