//! Seeded synthetic datasets for tests and benchmarks.

use ndarray::{Array1, Array2, ArrayView2};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// `n` points with coordinates drawn uniformly from `[-1, 1)`.
pub fn uniform_points(n: usize, features: usize, seed: u64) -> Array2<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    Array2::from_shape_simple_fn((n, features), || rng.gen_range(-1.0..1.0))
}

/// `n_per_class` points around every row of `centers`, each coordinate
/// offset uniformly by at most `spread`. Class `c` is the `c`-th center.
pub fn blobs(
    n_per_class: usize,
    centers: ArrayView2<f64>,
    spread: f64,
    seed: u64,
) -> (Array2<f64>, Array1<usize>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let n = n_per_class * centers.nrows();

    let classes = Array1::from_shape_fn(n, |i| i / n_per_class);
    let x = Array2::from_shape_fn((n, centers.ncols()), |(i, j)| {
        centers[(classes[i], j)] + rng.gen_range(-spread..=spread)
    });
    (x, classes)
}

/// Piecewise curve: `cos(x / 10)` up to 40, `log2(x) - 6` after.
pub fn wave(x: f64) -> f64 {
    if x > 40.0 {
        x.log2() - 6.0
    } else {
        (x * 0.1).cos()
    }
}

/// Samples of [`wave`] at `x = 1, 2, ..., n` jittered by up to 1, with
/// targets perturbed by up to 0.1.
pub fn noisy_wave(n: usize, seed: u64) -> (Array2<f64>, Array1<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let x = Array2::from_shape_fn((n, 1), |(i, _)| (i + 1) as f64 + rng.gen_range(-1.0..1.0));
    let y = x
        .column(0)
        .mapv(|v| wave(v) + rng.gen_range(-0.1..0.1));
    (x, y)
}
