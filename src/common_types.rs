//! This module contains the data structures shared by the trainer, the dataset providers and reporting.

use crate::error::{PerceptronError, Result};
use num_traits::Float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the two classes a perceptron separates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Label {
    Positive,
    Negative,
}

impl Label {
    /// `+1` for `Positive`, `-1` for `Negative`.
    pub fn sign<F: Float>(self) -> F {
        match self {
            Label::Positive => F::one(),
            Label::Negative => -F::one(),
        }
    }

    pub fn as_i64(self) -> i64 {
        match self {
            Label::Positive => 1,
            Label::Negative => -1,
        }
    }
}

impl TryFrom<i64> for Label {
    type Error = PerceptronError;

    fn try_from(value: i64) -> Result<Self> {
        match value {
            1 => Ok(Label::Positive),
            -1 => Ok(Label::Negative),
            other => Err(PerceptronError::InvalidLabel(other)),
        }
    }
}

/// A labeled sample whose `features` already include the bias coordinate at index 0.
///
/// - `F`: The numeric type of the coordinates (`f32` or `f64`).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DataPoint<F> {
    pub features: Vec<F>,
    pub label: Label,
}

impl<F: Float> DataPoint<F> {
    /// Takes already-augmented coordinates as they are.
    pub fn new(features: Vec<F>, label: Label) -> Self {
        DataPoint { features, label }
    }

    /// Prepends the bias coordinate `1` to `raw`.
    pub fn augmented(raw: &[F], label: Label) -> Self {
        let mut features = Vec::with_capacity(raw.len() + 1);
        features.push(F::one());
        features.extend_from_slice(raw);
        DataPoint { features, label }
    }

    /// The coordinates after the bias.
    pub fn raw_features(&self) -> &[F] {
        self.features.get(1..).unwrap_or(&[])
    }

    pub fn dimension(&self) -> usize {
        self.features.len()
    }
}

/// A line `y = slope * x + intercept` in the plane of the two raw features.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Line<F> {
    pub slope: F,
    pub intercept: F,
}

impl<F: Float> Line<F> {
    pub fn new(slope: F, intercept: F) -> Self {
        Line { slope, intercept }
    }

    pub fn y_at(&self, x: F) -> F {
        self.slope * x + self.intercept
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_sign() {
        assert_eq!(Label::Positive.sign::<f64>(), 1.0);
        assert_eq!(Label::Negative.sign::<f32>(), -1.0);
    }

    #[test]
    fn test_label_try_from_accepts_only_unit_signs() {
        assert_eq!(Label::try_from(1).unwrap(), Label::Positive);
        assert_eq!(Label::try_from(-1).unwrap(), Label::Negative);
        assert_eq!(Label::try_from(0), Err(PerceptronError::InvalidLabel(0)));
        assert_eq!(Label::try_from(2), Err(PerceptronError::InvalidLabel(2)));
    }

    #[test]
    fn test_augmented_prepends_bias() {
        let point = DataPoint::augmented(&[0.5_f64, -2.0], Label::Negative);
        assert_eq!(point.features, vec![1.0, 0.5, -2.0]);
        assert_eq!(point.raw_features(), &[0.5, -2.0]);
        assert_eq!(point.dimension(), 3);
    }

    #[test]
    fn test_raw_features_of_empty_point() {
        let point: DataPoint<f64> = DataPoint::new(vec![], Label::Positive);
        assert!(point.raw_features().is_empty());
    }

    #[test]
    fn test_line_y_at() {
        let line = Line::new(0.5_f64, 1.0);
        assert_eq!(line.y_at(2.0), 2.0);
        assert_eq!(line.y_at(-2.0), 0.0);
    }
}
