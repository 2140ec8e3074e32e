//! Distance metrics with the shape `predict` expects.

use ndarray::ArrayView1;

pub fn euclidean(x: ArrayView1<f64>, y: ArrayView1<f64>) -> f64 {
    x.iter()
        .zip(y.iter())
        .map(|(a, b)| (a - b).powi(2))
        .sum::<f64>()
        .sqrt()
}

pub fn manhattan(x: ArrayView1<f64>, y: ArrayView1<f64>) -> f64 {
    x.iter().zip(y.iter()).map(|(a, b)| (a - b).abs()).sum()
}

/// `1 - cos(angle)`. NaN if either vector has zero norm.
pub fn cosine(x: ArrayView1<f64>, y: ArrayView1<f64>) -> f64 {
    let norm_x = x.dot(&x).sqrt();
    let norm_y = y.dot(&y).sqrt();
    1.0 - x.dot(&y) / (norm_x * norm_y)
}
