//! Error type shared by the trainer, the dataset providers and the bindings.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PerceptronError>;

/// Everything that can go wrong while preparing, running or reporting a training run.
///
/// The precondition variants (`EmptyDataset`, `EmptyWeights`, `DimensionMismatch`,
/// `NonFiniteValue`) are always raised before the weight vector is touched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PerceptronError {
    #[error("dataset is empty; there is nothing to converge on")]
    EmptyDataset,

    #[error("weight vector must have at least one component (the bias weight)")]
    EmptyWeights,

    #[error("sample {index} has {actual} coordinates but the weight vector has {expected}")]
    DimensionMismatch {
        index: usize,
        expected: usize,
        actual: usize,
    },

    /// `index` is the offending sample, or `None` for the initial weights.
    #[error("non-finite value in {}", location(.index))]
    NonFiniteValue { index: Option<usize> },

    #[error("decision boundary undefined: feature weight w2 is zero")]
    DegenerateBoundary,

    #[error("no separating weights found after {epochs} epochs ({updates} updates)")]
    NonConvergence { epochs: usize, updates: usize },

    #[error("label {0} is not one of +1 or -1")]
    InvalidLabel(i64),

    #[error("invalid value for '{field}': {message}")]
    InvalidConfig { field: String, message: String },

    #[error("classifier has not been fitted yet")]
    NotFitted,

    #[cfg(feature = "plot")]
    #[error("failed to render plot: {0}")]
    Render(String),
}

fn location(index: &Option<usize>) -> String {
    match index {
        Some(i) => format!("sample {i}"),
        None => "initial weights".to_string(),
    }
}

impl PerceptronError {
    pub fn invalid_config(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            message: message.into(),
        }
    }

    /// True for the precondition failures that reject a run before it starts.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            Self::EmptyDataset
                | Self::EmptyWeights
                | Self::DimensionMismatch { .. }
                | Self::NonFiniteValue { .. }
        )
    }
}
