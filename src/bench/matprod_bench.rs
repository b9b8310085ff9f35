//! Criterion comparison of the four product kernels.
//!
//! Run with: cargo bench --bench matprod_bench

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use matprod::harness::{Kernel, seeded_operands};
use matprod::{Matrix, default_thread_count};

fn bench_kernels(c: &mut Criterion) {
    let threads = default_thread_count();
    let mut group = c.benchmark_group("matmul");
    group.sample_size(10);

    for size in [128, 256, 512] {
        let (a, b) = seeded_operands(size, 12345);
        let mut out = Matrix::new(size, size);
        group.throughput(Throughput::Elements((2 * size * size * size) as u64));

        for kernel in Kernel::ALL {
            group.bench_with_input(BenchmarkId::new(kernel.label(), size), &size, |bench, _| {
                bench.iter(|| kernel.run(black_box(&a), black_box(&b), &mut out, threads))
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_kernels);
criterion_main!(benches);
