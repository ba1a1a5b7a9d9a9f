//! Helpers for presenting a dataset and a training run.

use crate::common_types::{DataPoint, Label};
use crate::error::{PerceptronError, Result};
use ordered_float::OrderedFloat;

/// Bounding box of the two raw features of a 2-D dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub x1: (f64, f64),
    pub x2: (f64, f64),
}

impl Extent {
    /// Expects bias-augmented 2-D points (`[1, x1, x2]`).
    pub fn of(dataset: &[DataPoint<f64>]) -> Result<Self> {
        if dataset.is_empty() {
            return Err(PerceptronError::EmptyDataset);
        }
        if let Some(index) = dataset.iter().position(|p| p.features.len() != 3) {
            return Err(PerceptronError::DimensionMismatch {
                index,
                expected: 3,
                actual: dataset[index].features.len(),
            });
        }
        Ok(Extent {
            x1: min_max(dataset.iter().map(|p| p.features[1])),
            x2: min_max(dataset.iter().map(|p| p.features[2])),
        })
    }

    /// Grows both ranges by `amount` on each side.
    pub fn padded(self, amount: f64) -> Self {
        Extent {
            x1: (self.x1.0 - amount, self.x1.1 + amount),
            x2: (self.x2.0 - amount, self.x2.1 + amount),
        }
    }
}

fn min_max(values: impl Iterator<Item = f64> + Clone) -> (f64, f64) {
    let lo = values.clone().map(OrderedFloat).min().map_or(0.0, |v| v.0);
    let hi = values.map(OrderedFloat).max().map_or(0.0, |v| v.0);
    (lo, hi)
}

/// How many points carry each label, as `(positive, negative)`.
pub fn label_counts<F>(dataset: &[DataPoint<F>]) -> (usize, usize) {
    let positive = dataset.iter().filter(|p| p.label == Label::Positive).count();
    (positive, dataset.len() - positive)
}
