pub mod params;

use std::collections::BTreeSet;

use itertools::{Itertools, MinMaxResult};
use ndarray::{Array2, ArrayView1, ArrayView2};
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::{debug, trace};

#[cfg(feature = "use-rayon")]
use rayon::prelude::*;

use crate::{tree::PartitionTree, validation::check_features, NeighboursError, Result};

use params::ForestParams;

/// Forest of random projection trees over one shared point store.
///
/// Trees hold indices into the store, never copies of the points. A point is
/// a neighbour candidate when it shares a leaf with the query in any tree.
#[derive(Debug, Clone)]
pub struct RpForest {
    params: ForestParams,
    points: Array2<f64>,
    trees: Vec<PartitionTree>,
}

impl RpForest {
    pub fn new(params: ForestParams) -> Result<Self> {
        params.validate()?;
        let points = Array2::zeros((0, params.features));
        Ok(Self {
            params,
            points,
            trees: Vec::new(),
        })
    }

    pub fn params(&self) -> &ForestParams {
        &self.params
    }

    /// Replaces the point store and rebuilds every tree, seeding from
    /// `params.seed`.
    pub fn load(&mut self, points: ArrayView2<f64>) -> Result<()> {
        let mut rng = StdRng::seed_from_u64(self.params.seed);
        self.load_with_rng(points, &mut rng)
    }

    /// Same as [`RpForest::load`] with a caller-supplied random source. One
    /// seed per tree is drawn from `rng` up front, so the result does not
    /// depend on whether trees are built in parallel.
    pub fn load_with_rng<R: Rng + ?Sized>(
        &mut self,
        points: ArrayView2<f64>,
        rng: &mut R,
    ) -> Result<()> {
        check_features(points.ncols(), self.params.features)?;

        let store = points.as_standard_layout().into_owned();
        let seeds: Vec<u64> = (0..self.params.trees_count).map(|_| rng.gen()).collect();
        let trees = build_trees(store.view(), &seeds, self.params.max_leaf_size);

        let leaf_sizes = trees
            .iter()
            .flat_map(|tree| tree.leaves())
            .map(<[usize]>::len)
            .minmax();
        let (smallest, largest) = match leaf_sizes {
            MinMaxResult::NoElements => (0, 0),
            MinMaxResult::OneElement(size) => (size, size),
            MinMaxResult::MinMax(min, max) => (min, max),
        };
        debug!(
            points = store.nrows(),
            trees = trees.len(),
            smallest_leaf = smallest,
            largest_leaf = largest,
            "loaded random projection forest"
        );

        self.points = store;
        self.trees = trees;
        Ok(())
    }

    pub fn is_loaded(&self) -> bool {
        !self.trees.is_empty()
    }

    /// Number of stored points.
    pub fn len(&self) -> usize {
        self.points.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.points.nrows() == 0
    }

    pub fn trees(&self) -> &[PartitionTree] {
        &self.trees
    }

    /// Stored point `ix`.
    ///
    /// # Panics
    ///
    /// If `ix` is not below [`RpForest::len`].
    pub fn get_point(&self, ix: usize) -> ArrayView1<'_, f64> {
        self.points.row(ix)
    }

    /// Union of the buckets `point` lands in across all trees.
    pub fn get_neighbours(&self, point: ArrayView1<f64>) -> Result<BTreeSet<usize>> {
        if !self.is_loaded() {
            return Err(NeighboursError::NotLoaded);
        }
        check_features(point.len(), self.params.features)?;

        let neighbours: BTreeSet<usize> = self
            .trees
            .iter()
            .flat_map(|tree| tree.locate_bucket(point).iter().copied())
            .collect();
        trace!(candidates = neighbours.len(), "collected neighbour candidates");
        Ok(neighbours)
    }

    /// Candidates paired with `kernel(distance(point, candidate) / bandwidth)`,
    /// in ascending index order.
    pub fn weighted_neighbours<D, K>(
        &self,
        point: ArrayView1<f64>,
        distance: D,
        kernel: K,
        bandwidth: f64,
    ) -> Result<Vec<(usize, f64)>>
    where
        D: Fn(ArrayView1<f64>, ArrayView1<f64>) -> f64,
        K: Fn(f64) -> f64,
    {
        let weighted = self
            .get_neighbours(point)?
            .into_iter()
            .map(|ix| (ix, kernel(distance(point, self.get_point(ix)) / bandwidth)))
            .collect();
        Ok(weighted)
    }
}

fn build_trees(points: ArrayView2<f64>, seeds: &[u64], max_leaf_size: usize) -> Vec<PartitionTree> {
    let n = points.nrows();
    let grow = |seed: u64| {
        let mut tree_rng = StdRng::seed_from_u64(seed);
        PartitionTree::build(points, (0..n).collect(), max_leaf_size, &mut tree_rng)
    };

    #[cfg(not(feature = "use-rayon"))]
    let trees = seeds.iter().map(|&seed| grow(seed)).collect();

    #[cfg(feature = "use-rayon")]
    let trees = seeds.par_iter().map(|&seed| grow(seed)).collect();

    trees
}
