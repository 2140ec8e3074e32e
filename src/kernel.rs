//! Smoothing kernels, applied as `kernel(distance / bandwidth)`.

/// `1 / sqrt(2 pi)`
const GAUSSIAN_SCALE: f64 = 0.398_942_280_401_432_7;

pub fn rectangular(x: f64) -> f64 {
    if x.abs() <= 1.0 {
        0.5
    } else {
        0.0
    }
}

pub fn gaussian(x: f64) -> f64 {
    GAUSSIAN_SCALE * (-2.0 * x * x).exp()
}

pub fn epanechnikov(x: f64) -> f64 {
    if x.abs() <= 1.0 {
        0.75 * (1.0 - x * x)
    } else {
        0.0
    }
}
