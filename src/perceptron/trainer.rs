//! Mistake-driven perceptron training loop.

use crate::common_types::DataPoint;
use crate::error::{PerceptronError, Result};
use num_traits::Float;
use std::fmt;
use tracing::{debug, info, trace, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub fn dot<F: Float>(a: &[F], b: &[F]) -> F {
    a.iter().zip(b.iter()).fold(F::zero(), |acc, (&x, &y)| acc + x * y)
}

/// `dot(weights, sample) * label`. Positive means the point is on the right side.
pub fn margin<F: Float>(weights: &[F], point: &DataPoint<F>) -> F {
    dot(weights, &point.features) * point.label.sign()
}

/// True when every point has a strictly positive margin under `weights`.
pub fn is_separated_by<F: Float>(weights: &[F], dataset: &[DataPoint<F>]) -> bool {
    dataset.iter().all(|point| margin(weights, point) > F::zero())
}

/// What the trainer saw while evaluating one sample, or at the end of one epoch.
///
/// Epochs are numbered from 1, sample indices from 0.
#[derive(Debug, Clone, PartialEq)]
pub enum TrainingEvent<F> {
    Correct { epoch: usize, index: usize, margin: F },
    /// `weights` holds the vector after the update was applied.
    Misclassified {
        epoch: usize,
        index: usize,
        margin: F,
        weights: Vec<F>,
    },
    EpochCompleted { epoch: usize, updates: usize },
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TrainingOutcome<F> {
    pub weights: Vec<F>,
    /// Completed passes, the final clean one included.
    pub epochs_run: usize,
    pub updates_applied: usize,
    pub converged: bool,
}

impl<F> TrainingOutcome<F> {
    /// Treats a run that never produced a clean pass as an error.
    pub fn into_converged(self) -> Result<Self> {
        if self.converged {
            Ok(self)
        } else {
            Err(PerceptronError::NonConvergence {
                epochs: self.epochs_run,
                updates: self.updates_applied,
            })
        }
    }
}

impl<F: fmt::Debug> fmt::Display for TrainingOutcome<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.converged { "converged" } else { "did not converge" };
        write!(
            f,
            "{} after {} epochs with {} weight updates, weights = {:?}",
            state, self.epochs_run, self.updates_applied, self.weights
        )
    }
}

/// Runs the perceptron rule until a full pass makes no update, or `max_epochs` passes have run.
///
/// Samples are visited in the order given, and an update `w <- w + label * x` takes effect
/// immediately for the rest of the pass. A margin of exactly zero counts as a mistake.
pub fn train<F: Float + fmt::Debug>(
    dataset: &[DataPoint<F>],
    initial_weights: Vec<F>,
    max_epochs: usize,
) -> Result<TrainingOutcome<F>> {
    train_with_observer(dataset, initial_weights, max_epochs, |_| {})
}

/// Same as [`train`], reporting every evaluated sample and every finished epoch to `observer`.
pub fn train_with_observer<F, O>(
    dataset: &[DataPoint<F>],
    initial_weights: Vec<F>,
    max_epochs: usize,
    mut observer: O,
) -> Result<TrainingOutcome<F>>
where
    F: Float + fmt::Debug,
    O: FnMut(&TrainingEvent<F>),
{
    validate(dataset, &initial_weights)?;

    let mut weights = initial_weights;
    let mut updates_applied = 0;
    let mut epochs_run = 0;

    while epochs_run < max_epochs {
        epochs_run += 1;
        let mut epoch_updates = 0;

        for (index, point) in dataset.iter().enumerate() {
            let m = margin(&weights, point);
            // NaN never compares greater than zero, so it is treated as a mistake too.
            if m > F::zero() {
                trace!(epoch = epochs_run, index, "correctly classified");
                observer(&TrainingEvent::Correct { epoch: epochs_run, index, margin: m });
                continue;
            }

            let sign = point.label.sign::<F>();
            for (w, &x) in weights.iter_mut().zip(point.features.iter()) {
                *w = *w + sign * x;
            }
            epoch_updates += 1;
            debug!(epoch = epochs_run, index, weights = ?weights, "misclassified, weights updated");
            observer(&TrainingEvent::Misclassified {
                epoch: epochs_run,
                index,
                margin: m,
                weights: weights.clone(),
            });
        }

        updates_applied += epoch_updates;
        observer(&TrainingEvent::EpochCompleted { epoch: epochs_run, updates: epoch_updates });

        if epoch_updates == 0 {
            info!(epochs = epochs_run, updates = updates_applied, weights = ?weights, "converged");
            return Ok(TrainingOutcome {
                weights,
                epochs_run,
                updates_applied,
                converged: true,
            });
        }
    }

    warn!(epochs = epochs_run, updates = updates_applied, weights = ?weights, "epoch bound reached without a clean pass");
    Ok(TrainingOutcome {
        weights,
        epochs_run,
        updates_applied,
        converged: false,
    })
}

fn validate<F: Float>(dataset: &[DataPoint<F>], initial_weights: &[F]) -> Result<()> {
    if dataset.is_empty() {
        return Err(PerceptronError::EmptyDataset);
    }
    if initial_weights.is_empty() {
        return Err(PerceptronError::EmptyWeights);
    }
    if initial_weights.iter().any(|w| !w.is_finite()) {
        return Err(PerceptronError::NonFiniteValue { index: None });
    }
    let expected = initial_weights.len();
    for (index, point) in dataset.iter().enumerate() {
        if point.features.len() != expected {
            return Err(PerceptronError::DimensionMismatch {
                index,
                expected,
                actual: point.features.len(),
            });
        }
        if point.features.iter().any(|x| !x.is_finite()) {
            return Err(PerceptronError::NonFiniteValue { index: Some(index) });
        }
    }
    Ok(())
}
