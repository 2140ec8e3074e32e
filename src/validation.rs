use ndarray::{ArrayView, ArrayView1, ArrayView2, Dimension, Ix1, Ix2};

use crate::{DimensionError, NeighboursError, Result};

/// Checks that `points` is a matrix with one column per feature.
pub(crate) fn point_matrix<D: Dimension>(
    points: ArrayView<'_, f64, D>,
    features: usize,
) -> Result<ArrayView2<'_, f64>> {
    let rank = points.ndim();
    let points = points
        .into_dimensionality::<Ix2>()
        .map_err(|_| DimensionError::Rank {
            name: "points",
            expected: 2,
            actual: rank,
        })?;

    check_features(points.ncols(), features)?;
    Ok(points)
}

/// Checks that `labels` is a flat sequence parallel to `n_points` points.
pub(crate) fn parallel_labels<'a, T, D: Dimension>(
    labels: ArrayView<'a, T, D>,
    name: &'static str,
    n_points: usize,
) -> Result<ArrayView1<'a, T>> {
    let labels = labels
        .into_dimensionality::<Ix1>()
        .map_err(|_| NeighboursError::InvalidType {
            name,
            expected: "a one-dimensional array",
        })?;

    if labels.len() != n_points {
        return Err(DimensionError::Length {
            name,
            expected: n_points,
            actual: labels.len(),
        }
        .into());
    }
    Ok(labels)
}

pub(crate) fn check_features(actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(DimensionError::Features { expected, actual }.into());
    }
    Ok(())
}
