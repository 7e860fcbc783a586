//! Criterion benchmarks for block compression and decompression.
//!
//! Run with:
//!   cargo bench --bench codec
//!
//! Set `LZJB_BENCH_FILE` to a file path to benchmark real data instead of
//! synthetic text. The file is cut into blocks of each benchmarked size.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// Sizes typical for filesystem records
const BLOCK_SIZES: &[usize] = &[4096, 32_768, 131_072];

fn synthetic_block(size: usize) -> Vec<u8> {
    const LOREM: &[u8] = b"Lorem ipsum dolor sit amet, consectetur adipiscing elit, \
        sed do eiusmod tempor incididunt ut labore et dolore magna aliqua. \
        Ut enim ad minim veniam, quis nostrud exercitation ullamco laboris nisi \
        ut aliquip ex ea commodo consequat. ";

    let mut out = Vec::with_capacity(size);
    let mut n = 0u32;
    while out.len() < size {
        // vary the text a little so it is not a single long match
        out.extend_from_slice(LOREM);
        out.extend_from_slice(n.to_string().as_bytes());
        n = n.wrapping_mul(31).wrapping_add(7);
    }
    out.truncate(size);
    out
}

fn bench_block(size: usize) -> Vec<u8> {
    match std::env::var_os("LZJB_BENCH_FILE") {
        Some(path) => {
            let mut data = std::fs::read(path).expect("could not read LZJB_BENCH_FILE");
            assert!(!data.is_empty(), "LZJB_BENCH_FILE is empty");
            while data.len() < size {
                data.extend_from_within(..);
            }
            data.truncate(size);
            data
        }
        None => synthetic_block(size),
    }
}

fn bench_compress_decompress(c: &mut Criterion) {
    let mut group = c.benchmark_group("block");

    for &size in BLOCK_SIZES {
        let block = bench_block(size);
        let bound = lzjb_rs::max_compressed_size(size);
        group.throughput(Throughput::Bytes(size as u64));

        {
            let mut dst = vec![0u8; bound];
            group.bench_with_input(BenchmarkId::new("compress", size), &block, |b, block| {
                b.iter(|| lzjb_rs::compress_to_buf(block, &mut dst))
            });
        }

        {
            let mut tmp = vec![0u8; bound];
            let n = lzjb_rs::compress_to_buf(&block, &mut tmp);
            let compressed = tmp[..n].to_vec();
            let mut dst = vec![0u8; size];
            group.bench_with_input(
                BenchmarkId::new("decompress", size),
                &compressed,
                |b, compressed| b.iter(|| lzjb_rs::decompress_to_buf(compressed, &mut dst).unwrap()),
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_compress_decompress);
criterion_main!(benches);
