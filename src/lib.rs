pub mod classifier;
pub mod distance;
pub mod error;
pub mod forest;
pub mod kernel;
pub mod partition;
pub mod regressor;
pub mod test_data;
pub mod tree;
mod validation;

use ndarray::{Array1, ArrayView1, ArrayView2};

#[cfg(feature = "use-rayon")]
use rayon::prelude::*;

pub use classifier::{params::ClassifierParams, KnnClassifier};
pub use error::{DimensionError, NeighboursError};
pub use forest::{params::ForestParams, RpForest};
pub use regressor::KnnRegressor;

pub type Result<T> = std::result::Result<T, NeighboursError>;

/// A model that predicts from the kernel-weighted neighbour set of a loaded
/// random projection forest.
pub trait NeighbourModel {
    type Prediction: Send;

    fn predict<D, K>(
        &self,
        point: ArrayView1<f64>,
        distance: D,
        kernel: K,
        bandwidth: f64,
    ) -> Result<Self::Prediction>
    where
        D: Fn(ArrayView1<f64>, ArrayView1<f64>) -> f64,
        K: Fn(f64) -> f64;

    /// Predicts every row of `x`, stopping at the first failing row.
    fn predict_batch<D, K>(
        &self,
        x: ArrayView2<f64>,
        distance: D,
        kernel: K,
        bandwidth: f64,
    ) -> Result<Array1<Self::Prediction>>
    where
        Self: Sync,
        D: Fn(ArrayView1<f64>, ArrayView1<f64>) -> f64 + Sync,
        K: Fn(f64) -> f64 + Sync,
    {
        #[cfg(not(feature = "use-rayon"))]
        let predictions: Result<Vec<Self::Prediction>> = (0..x.nrows())
            .map(|i| self.predict(x.row(i), &distance, &kernel, bandwidth))
            .collect();

        #[cfg(feature = "use-rayon")]
        let predictions: Result<Vec<Self::Prediction>> = (0..x.nrows())
            .into_par_iter()
            .map(|i| self.predict(x.row(i), &distance, &kernel, bandwidth))
            .collect();

        predictions.map(Array1::from)
    }
}
