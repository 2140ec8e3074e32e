use thiserror::Error;

/// Shape problems found while validating load inputs or query points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DimensionError {
    #[error("{name} array should be {expected}-dimensional, got {actual} dimensions")]
    Rank {
        name: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("invalid number of features in sample (expected {expected}, got {actual})")]
    Features { expected: usize, actual: usize },
    #[error("{name} should hold one entry per point (expected {expected}, got {actual})")]
    Length {
        name: &'static str,
        expected: usize,
        actual: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NeighboursError {
    /// A load input is not the kind of container the model accepts.
    #[error("{name} should be represented as {expected}")]
    InvalidType {
        name: &'static str,
        expected: &'static str,
    },
    #[error(transparent)]
    InvalidDimension(#[from] DimensionError),
    #[error("{name} must be at least 1, got {value}")]
    InvalidParameter { name: &'static str, value: usize },
    #[error("class label {label} is out of range for {classes_count} classes")]
    InvalidClass { label: usize, classes_count: usize },
    #[error("model has no loaded points, call load first")]
    NotLoaded,
}

impl NeighboursError {
    pub fn is_invalid_dimension(&self) -> bool {
        matches!(self, NeighboursError::InvalidDimension(_))
    }
}
