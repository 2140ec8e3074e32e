use ndarray::{Array1, ArrayView, ArrayView1, Dimension};
use tracing::debug;

use crate::{
    forest::{params::ForestParams, RpForest},
    validation::{parallel_labels, point_matrix},
    NeighbourModel, NeighboursError, Result,
};

/// Nadaraya-Watson regressor over a random projection forest.
#[derive(Debug, Clone)]
pub struct KnnRegressor {
    forest: RpForest,
    targets: Option<Array1<f64>>,
}

impl KnnRegressor {
    pub fn new(params: ForestParams) -> Result<Self> {
        Ok(Self {
            forest: RpForest::new(params)?,
            targets: None,
        })
    }

    pub fn forest(&self) -> &RpForest {
        &self.forest
    }

    /// Loads training points (one row per sample) and their target values,
    /// rebuilding the forest. A failed load leaves the previous model intact.
    pub fn load<D1: Dimension, D2: Dimension>(
        &mut self,
        points: ArrayView<f64, D1>,
        targets: ArrayView<f64, D2>,
    ) -> Result<()> {
        let points = point_matrix(points, self.forest.params().features)?;
        let targets = parallel_labels(targets, "targets", points.nrows())?;

        self.forest.load(points)?;
        self.targets = Some(targets.to_owned());
        Ok(())
    }
}

impl NeighbourModel for KnnRegressor {
    type Prediction = f64;

    /// Kernel-weighted average of the candidates' targets.
    ///
    /// Returns `f64::NAN` when the weights sum to zero, which includes an
    /// empty candidate set.
    fn predict<D, K>(
        &self,
        point: ArrayView1<f64>,
        distance: D,
        kernel: K,
        bandwidth: f64,
    ) -> Result<f64>
    where
        D: Fn(ArrayView1<f64>, ArrayView1<f64>) -> f64,
        K: Fn(f64) -> f64,
    {
        let targets = self.targets.as_ref().ok_or(NeighboursError::NotLoaded)?;

        let (numerator, denominator) = self
            .forest
            .weighted_neighbours(point, distance, kernel, bandwidth)?
            .into_iter()
            .fold((0.0, 0.0), |(num, den), (ix, weight)| {
                (num + weight * targets[ix], den + weight)
            });

        if denominator == 0.0 {
            debug!("kernel weights sum to zero, no prediction");
            return Ok(f64::NAN);
        }
        Ok(numerator / denominator)
    }
}
