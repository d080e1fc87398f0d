//! Criterion benchmarks for the nested-parallel kernel.
//!
//! Uses a reduced problem size so a full run stays short; the binary target
//! runs the real 1000×1000 sweep.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use matmul_sweep::matrix::random::{MatrixGenerator, SEED};
use matmul_sweep::sweep::THREAD_SWEEP;
use matmul_sweep::{KernelConfig, Reduction, matmul_naive_ijk, multiply};

const SIZE: usize = 128;

fn bench_thread_sweep(c: &mut Criterion) {
    let mut generator = MatrixGenerator::new(SEED);
    let a = generator.generate(SIZE, SIZE).unwrap();
    let b = generator.generate(SIZE, SIZE).unwrap();
    let flops = 2 * SIZE * SIZE * SIZE;

    let mut group = c.benchmark_group("thread_sweep");
    group.sample_size(10);
    group.throughput(Throughput::Elements(flops as u64));

    group.bench_function("naive_ijk", |bencher| {
        bencher.iter(|| matmul_naive_ijk(black_box(&a), black_box(&b)).unwrap())
    });

    for threads in THREAD_SWEEP {
        let reductions = [
            ("nested", Reduction::Nested { splits: threads }),
            ("sequential", Reduction::Sequential),
        ];
        for (label, reduction) in reductions {
            let config = KernelConfig::new(threads).with_reduction(reduction);
            group.bench_with_input(BenchmarkId::new(label, threads), &config, |bencher, &config| {
                bencher.iter(|| multiply(black_box(&a), black_box(&b), config).unwrap())
            });
        }
    }

    group.finish();
}

fn bench_reduction_split(c: &mut Criterion) {
    let mut generator = MatrixGenerator::new(SEED);
    let a = generator.generate(SIZE, SIZE).unwrap();
    let b = generator.generate(SIZE, SIZE).unwrap();

    let mut group = c.benchmark_group("reduction_split");
    group.sample_size(10);

    for splits in [1, 2, 4, 8, 16, 32] {
        let config = KernelConfig::new(4).with_reduction(Reduction::Nested { splits });
        group.bench_with_input(BenchmarkId::from_parameter(splits), &config, |bencher, &config| {
            bencher.iter(|| multiply(black_box(&a), black_box(&b), config).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_thread_sweep, bench_reduction_split);
criterion_main!(benches);
