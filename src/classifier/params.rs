use crate::{
    forest::params::{ForestParams, ForestParamsBuilder},
    NeighboursError, Result,
};

#[derive(Debug, Clone, PartialEq)]
pub struct ClassifierParams {
    /// Labels are expected in `0..classes_count`.
    pub classes_count: usize,
    pub forest_params: ForestParams,
}

impl ClassifierParams {
    pub fn validate(&self) -> Result<()> {
        if self.classes_count == 0 {
            return Err(NeighboursError::InvalidParameter {
                name: "classes_count",
                value: 0,
            });
        }
        self.forest_params.validate()
    }
}

// Builder for ClassifierParams
#[derive(Debug, Clone)]
pub struct ClassifierParamsBuilder {
    classes_count: usize,
    forest_params_builder: ForestParamsBuilder,
}

impl ClassifierParamsBuilder {
    pub fn new(features: usize, classes_count: usize) -> Self {
        Self {
            classes_count,
            forest_params_builder: ForestParamsBuilder::new(features),
        }
    }

    // Convenience methods for the nested forest parameters
    pub fn trees_count(mut self, trees_count: usize) -> Self {
        self.forest_params_builder = self.forest_params_builder.trees_count(trees_count);
        self
    }

    pub fn max_leaf_size(mut self, max_leaf_size: usize) -> Self {
        self.forest_params_builder = self.forest_params_builder.max_leaf_size(max_leaf_size);
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.forest_params_builder = self.forest_params_builder.seed(seed);
        self
    }

    pub fn build(self) -> ClassifierParams {
        ClassifierParams {
            classes_count: self.classes_count,
            forest_params: self.forest_params_builder.build(),
        }
    }
}
