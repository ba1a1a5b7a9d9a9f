//! Perceptron classifier: a linear binary classifier trained by the online mistake-driven rule.

pub mod boundary;
pub mod trainer;

pub use boundary::decision_boundary;
pub use trainer::{
    dot, is_separated_by, margin, train, train_with_observer, TrainingEvent, TrainingOutcome,
};

use crate::common_types::{DataPoint, Label, Line};
use crate::config::TrainerConfig;
use crate::error::{PerceptronError, Result};
use num_traits::Float;
use std::fmt::Debug;

/// Perceptron classifier.
///
/// Holds its configuration and, once fitted, the outcome of the last training run.
/// Fitting on data that cannot be separated within `max_epochs` still stores the
/// partial weights; check [`TrainingOutcome::converged`] before trusting predictions.
#[derive(Debug, Clone)]
pub struct Perceptron<F> {
    pub config: TrainerConfig,
    outcome: Option<TrainingOutcome<F>>,
}

impl<F> Perceptron<F>
where
    F: Float + Debug,
{
    pub fn new(config: TrainerConfig) -> Self {
        Perceptron { config, outcome: None }
    }

    /// Trains from scratch on `training_data`, replacing any previous outcome.
    ///
    /// The weight vector takes its dimensionality from the first sample.
    pub fn fit(&mut self, training_data: &[DataPoint<F>]) -> Result<&TrainingOutcome<F>> {
        let first = training_data.first().ok_or(PerceptronError::EmptyDataset)?;
        let initial_weights = self.config.weight_init.materialize(first.dimension());
        let outcome = train(training_data, initial_weights, self.config.max_epochs)?;
        Ok(&*self.outcome.insert(outcome))
    }

    pub fn outcome(&self) -> Option<&TrainingOutcome<F>> {
        self.outcome.as_ref()
    }

    pub fn weights(&self) -> Option<&[F]> {
        self.outcome.as_ref().map(|o| o.weights.as_slice())
    }

    /// Raw weighted sum `w0 + w·x` for un-augmented `features`.
    pub fn score(&self, features: &[F]) -> Result<F> {
        let weights = self.weights().ok_or(PerceptronError::NotFitted)?;
        if features.len() + 1 != weights.len() {
            return Err(PerceptronError::DimensionMismatch {
                index: 0,
                expected: weights.len() - 1,
                actual: features.len(),
            });
        }
        Ok(weights[0] + dot(&weights[1..], features))
    }

    /// A score of exactly zero is on the boundary and predicts `Negative`, matching the update rule.
    pub fn predict(&self, features: &[F]) -> Result<Label> {
        let score = self.score(features)?;
        Ok(if score > F::zero() { Label::Positive } else { Label::Negative })
    }

    pub fn decision_boundary(&self) -> Result<Line<F>> {
        let weights = self.weights().ok_or(PerceptronError::NotFitted)?;
        decision_boundary(weights)
    }
}

impl<F: Float + Debug> Default for Perceptron<F> {
    fn default() -> Self {
        Perceptron::new(TrainerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WeightInit;
    use crate::datasets::and_gate;

    #[test]
    fn test_new_is_unfitted() {
        let classifier = Perceptron::<f64>::default();
        assert!(classifier.outcome().is_none());
        assert_eq!(classifier.predict(&[1.0, 1.0]), Err(PerceptronError::NotFitted));
        assert_eq!(classifier.decision_boundary(), Err(PerceptronError::NotFitted));
    }

    #[test]
    fn test_fit_and_predict_and_gate() {
        let mut classifier = Perceptron::new(TrainerConfig::new(10, WeightInit::Zeros));
        let outcome = classifier.fit(&and_gate::<f64>()).unwrap();
        assert!(outcome.converged);

        assert_eq!(classifier.predict(&[0.0, 0.0]).unwrap(), Label::Negative);
        assert_eq!(classifier.predict(&[0.0, 1.0]).unwrap(), Label::Negative);
        assert_eq!(classifier.predict(&[1.0, 0.0]).unwrap(), Label::Negative);
        assert_eq!(classifier.predict(&[1.0, 1.0]).unwrap(), Label::Positive);
        assert_eq!(classifier.score(&[1.0, 1.0]).unwrap(), 1.0);
    }

    #[test]
    fn test_fit_with_ones_init() {
        let mut classifier = Perceptron::<f64>::new(TrainerConfig::new(100, WeightInit::Ones));
        let outcome = classifier.fit(&and_gate()).unwrap().clone();
        assert!(outcome.converged);
        assert!(is_separated_by(&outcome.weights, &and_gate()));
    }

    #[test]
    fn test_refit_replaces_outcome() {
        let mut classifier = Perceptron::new(TrainerConfig::new(2, WeightInit::Zeros));
        assert!(!classifier.fit(&and_gate::<f64>()).unwrap().converged);
        classifier.config.max_epochs = 10;
        assert!(classifier.fit(&and_gate::<f64>()).unwrap().converged);
        assert_eq!(classifier.weights().unwrap(), &[-4.0, 3.0, 2.0]);
    }

    #[test]
    fn test_fit_empty_rejected() {
        let mut classifier = Perceptron::<f64>::default();
        assert_eq!(classifier.fit(&[]).unwrap_err(), PerceptronError::EmptyDataset);
        assert!(classifier.outcome().is_none());
    }

    #[test]
    fn test_predict_wrong_width() {
        let mut classifier = Perceptron::new(TrainerConfig::new(10, WeightInit::Zeros));
        classifier.fit(&and_gate::<f64>()).unwrap();
        assert_eq!(
            classifier.predict(&[1.0]),
            Err(PerceptronError::DimensionMismatch { index: 0, expected: 2, actual: 1 })
        );
    }

    #[test]
    fn test_classifier_boundary() {
        let mut classifier = Perceptron::new(TrainerConfig::new(10, WeightInit::Zeros));
        classifier.fit(&and_gate::<f64>()).unwrap();
        assert_eq!(classifier.decision_boundary().unwrap(), Line::new(-1.5, 2.0));
    }
}
