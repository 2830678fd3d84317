use divan::{Bencher, black_box};
use enquad::{chebyshev_series, gauss_legendre, simpson_composite};

fn main() {
    // Run registered benchmarks.
    divan::main();
}

/// Test the speed of generating coefficient tables at a few representative sizes
#[divan::bench(args = [64, 512, 4096])]
fn chebyshev_table(bencher: Bencher, size: usize) {
    let identity = |_len: usize, _a1: f64, _a2: f64, _buf: &mut [f64]| {};
    bencher.bench_local(move || black_box(chebyshev_series(black_box(size), &identity)));
}

#[divan::bench]
fn gauss_legendre_smooth(bencher: Bencher) {
    bencher.bench_local(|| black_box(gauss_legendre(|x| (x * x).sin(), 0.0, 2.0)));
}

#[divan::bench]
fn composite_simpson(bencher: Bencher) {
    let odds = vec![1.0; 512];
    let evens = vec![1.0; 511];
    bencher.bench_local(move || {
        black_box(simpson_composite(
            1.0,
            1.0,
            black_box(&odds),
            black_box(&evens),
            1.0e-3,
        ))
    });
}
