use crate::{NeighboursError, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct ForestParams {
    /// Dimensionality of every stored and queried point.
    pub features: usize,
    /// More trees raise recall and query cost.
    pub trees_count: usize,
    /// Largest subset kept as a leaf without splitting.
    pub max_leaf_size: usize,
    pub seed: u64,
}

impl ForestParams {
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("features", self.features),
            ("trees_count", self.trees_count),
            ("max_leaf_size", self.max_leaf_size),
        ] {
            if value == 0 {
                return Err(NeighboursError::InvalidParameter { name, value });
            }
        }
        Ok(())
    }
}

// Builder for ForestParams
#[derive(Debug, Clone)]
pub struct ForestParamsBuilder {
    features: usize,
    trees_count: usize,
    max_leaf_size: usize,
    seed: u64,
}

impl ForestParamsBuilder {
    pub fn new(features: usize) -> Self {
        Self {
            features,
            trees_count: 10,
            max_leaf_size: 7,
            seed: 42,
        }
    }

    pub fn trees_count(mut self, trees_count: usize) -> Self {
        self.trees_count = trees_count;
        self
    }

    pub fn max_leaf_size(mut self, max_leaf_size: usize) -> Self {
        self.max_leaf_size = max_leaf_size;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn build(self) -> ForestParams {
        ForestParams {
            features: self.features,
            trees_count: self.trees_count,
            max_leaf_size: self.max_leaf_size,
            seed: self.seed,
        }
    }
}

impl Default for ForestParamsBuilder {
    fn default() -> Self {
        Self::new(1)
    }
}

impl Default for ForestParams {
    fn default() -> Self {
        ForestParamsBuilder::default().build()
    }
}
