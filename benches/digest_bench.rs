//! Benchmarks for pagededup.
//!
//! Run with:
//!     cargo bench

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use pagededup::{DEFAULT_BLOCK_SIZE, DedupIndex, HashState, OwnerId, digest_of};

fn bench_digest(c: &mut Criterion) {
    let mut group = c.benchmark_group("digest");

    for size in [64, DEFAULT_BLOCK_SIZE, 1024 * 1024] {
        // Deterministic pseudo-random data
        let data: Vec<u8> = (0..size).map(|i| (i * 7 + 13) as u8).collect();

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(format!("one_shot_{}b", size), &data, |b, data| {
            b.iter(|| digest_of(black_box(data)));
        });

        // Odd-sized appends keep the carry buffer busy
        group.bench_with_input(format!("append_61b_{}b", size), &data, |b, data| {
            b.iter(|| {
                let mut state = HashState::new();
                for chunk in black_box(data).chunks(61) {
                    state.append(chunk);
                }
                state.finish()
            });
        });
    }

    group.finish();
}

fn bench_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("index");
    let pages = 1024;

    // Mix of zero, shared and private pages
    let memory: Vec<(OwnerId, Vec<u8>)> = (0..pages)
        .map(|i| {
            let fill = match i % 4 {
                0 => 0,
                1 => 0xaa,
                _ => (i % 251) as u8 + 1,
            };
            (OwnerId::new(i as u32 % 8), vec![fill; DEFAULT_BLOCK_SIZE])
        })
        .collect();

    group.throughput(Throughput::Bytes((pages * DEFAULT_BLOCK_SIZE) as u64));
    group.bench_function("observe_pages", |b| {
        b.iter(|| {
            let mut index = DedupIndex::new(pages);
            for (owner, page) in &memory {
                index.observe(black_box(page), *owner).unwrap();
            }
            black_box(index.stats())
        });
    });

    // All zeros never touches the hash engine
    let zero = vec![0u8; DEFAULT_BLOCK_SIZE];
    group.bench_function("observe_zero_pages", |b| {
        b.iter(|| {
            let mut index = DedupIndex::new(1);
            for _ in 0..pages {
                index.observe(black_box(&zero), OwnerId::new(0)).unwrap();
            }
            black_box(index.stats())
        });
    });

    group.finish();
}

criterion_group!(benches, bench_digest, bench_index);
criterion_main!(benches);
