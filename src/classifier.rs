pub mod params;

use ndarray::{Array1, ArrayView, ArrayView1, Dimension};
use tracing::debug;

use crate::{
    forest::RpForest,
    validation::{parallel_labels, point_matrix},
    NeighbourModel, NeighboursError, Result,
};

use params::ClassifierParams;

/// Weighted kNN classifier over a random projection forest.
///
/// Each candidate neighbour votes for its class with weight
/// `kernel(distance / bandwidth)`; the class with the largest total wins.
#[derive(Debug, Clone)]
pub struct KnnClassifier {
    classes_count: usize,
    forest: RpForest,
    classes: Option<Array1<usize>>,
}

impl KnnClassifier {
    pub fn new(params: ClassifierParams) -> Result<Self> {
        params.validate()?;
        Ok(Self {
            classes_count: params.classes_count,
            forest: RpForest::new(params.forest_params)?,
            classes: None,
        })
    }

    pub fn classes_count(&self) -> usize {
        self.classes_count
    }

    pub fn forest(&self) -> &RpForest {
        &self.forest
    }

    /// Loads training points (one row per sample) and their class labels,
    /// rebuilding the forest.
    ///
    /// Inputs are validated before anything is replaced, so a failed load
    /// leaves the previous model usable.
    pub fn load<D1: Dimension, D2: Dimension>(
        &mut self,
        points: ArrayView<f64, D1>,
        classes: ArrayView<usize, D2>,
    ) -> Result<()> {
        let points = point_matrix(points, self.forest.params().features)?;
        let classes = parallel_labels(classes, "classes", points.nrows())?;

        if let Some(&label) = classes.iter().find(|&&label| label >= self.classes_count) {
            return Err(NeighboursError::InvalidClass {
                label,
                classes_count: self.classes_count,
            });
        }

        self.forest.load(points)?;
        self.classes = Some(classes.to_owned());
        Ok(())
    }

    /// Per-class sums of kernel weights over the candidate set of `point`.
    pub fn votes<D, K>(
        &self,
        point: ArrayView1<f64>,
        distance: D,
        kernel: K,
        bandwidth: f64,
    ) -> Result<Array1<f64>>
    where
        D: Fn(ArrayView1<f64>, ArrayView1<f64>) -> f64,
        K: Fn(f64) -> f64,
    {
        let classes = self.classes.as_ref().ok_or(NeighboursError::NotLoaded)?;

        let mut votes = Array1::<f64>::zeros(self.classes_count);
        for (ix, weight) in self
            .forest
            .weighted_neighbours(point, distance, kernel, bandwidth)?
        {
            votes[classes[ix]] += weight;
        }
        Ok(votes)
    }
}

impl NeighbourModel for KnnClassifier {
    type Prediction = usize;

    /// Class with the largest vote; ties go to the lowest class index.
    ///
    /// An empty candidate set leaves every vote at zero and therefore
    /// predicts class 0.
    fn predict<D, K>(
        &self,
        point: ArrayView1<f64>,
        distance: D,
        kernel: K,
        bandwidth: f64,
    ) -> Result<usize>
    where
        D: Fn(ArrayView1<f64>, ArrayView1<f64>) -> f64,
        K: Fn(f64) -> f64,
    {
        let votes = self.votes(point, distance, kernel, bandwidth)?;
        if votes.iter().all(|&vote| vote == 0.0) {
            debug!("all class votes are zero, falling back to class 0");
        }
        Ok(first_argmax(votes.view()))
    }
}

fn first_argmax(values: ArrayView1<f64>) -> usize {
    let mut best = (0, f64::NEG_INFINITY);
    for (i, &value) in values.indexed_iter() {
        if value > best.1 {
            best = (i, value);
        }
    }
    best.0
}
