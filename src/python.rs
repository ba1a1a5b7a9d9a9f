//! Python bindings, built with the `python` feature.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::common_types::{DataPoint, Label};
use crate::config::{TrainerConfig, WeightInit};
use crate::datasets::and_gate;
use crate::error::PerceptronError;
use crate::perceptron::{self, Perceptron, TrainingOutcome};

impl From<PerceptronError> for PyErr {
    fn from(err: PerceptronError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

/// Pairs already-augmented samples with integer labels (+1 / -1).
fn to_dataset(samples: Vec<Vec<f64>>, labels: Vec<i64>) -> PyResult<Vec<DataPoint<f64>>> {
    if samples.len() != labels.len() {
        return Err(PyValueError::new_err(format!(
            "got {} samples but {} labels",
            samples.len(),
            labels.len()
        )));
    }
    samples
        .into_iter()
        .zip(labels)
        .map(|(features, label)| -> PyResult<DataPoint<f64>> {
            Ok(DataPoint::new(features, Label::try_from(label)?))
        })
        .collect()
}

#[pyclass(name = "TrainingOutcome", get_all)]
#[derive(Clone)]
struct PyTrainingOutcome {
    weights: Vec<f64>,
    epochs_run: usize,
    updates_applied: usize,
    converged: bool,
}

impl From<TrainingOutcome<f64>> for PyTrainingOutcome {
    fn from(o: TrainingOutcome<f64>) -> Self {
        PyTrainingOutcome {
            weights: o.weights,
            epochs_run: o.epochs_run,
            updates_applied: o.updates_applied,
            converged: o.converged,
        }
    }
}

#[pyclass(name = "Perceptron")]
struct PyPerceptron {
    classifier: Perceptron<f64>,
}

#[pymethods]
impl PyPerceptron {
    #[new]
    #[pyo3(signature = (max_epochs = TrainerConfig::DEFAULT_MAX_EPOCHS, init = "zeros"))]
    fn new(max_epochs: usize, init: &str) -> PyResult<Self> {
        let weight_init: WeightInit = init.parse()?;
        Ok(PyPerceptron {
            classifier: Perceptron::new(TrainerConfig::new(max_epochs, weight_init)),
        })
    }

    /// Returns whether training converged.
    fn fit(&mut self, samples: Vec<Vec<f64>>, labels: Vec<i64>) -> PyResult<bool> {
        let data = to_dataset(samples, labels)?;
        Ok(self.classifier.fit(&data)?.converged)
    }

    /// Takes raw features (no bias coordinate) and returns +1 or -1.
    fn predict(&self, features: Vec<f64>) -> PyResult<i64> {
        Ok(self.classifier.predict(&features)?.as_i64())
    }

    fn decision_boundary(&self) -> PyResult<(f64, f64)> {
        let line = self.classifier.decision_boundary()?;
        Ok((line.slope, line.intercept))
    }

    #[getter]
    fn weights(&self) -> Option<Vec<f64>> {
        self.classifier.weights().map(|w| w.to_vec())
    }

    #[getter]
    fn epochs_run(&self) -> Option<usize> {
        self.classifier.outcome().map(|o| o.epochs_run)
    }

    #[getter]
    fn updates_applied(&self) -> Option<usize> {
        self.classifier.outcome().map(|o| o.updates_applied)
    }

    #[getter]
    fn converged(&self) -> bool {
        self.classifier.outcome().is_some_and(|o| o.converged)
    }
}

#[pyfunction]
fn train(
    samples: Vec<Vec<f64>>,
    labels: Vec<i64>,
    initial_weights: Vec<f64>,
    max_epochs: usize,
) -> PyResult<PyTrainingOutcome> {
    let data = to_dataset(samples, labels)?;
    Ok(perceptron::train(&data, initial_weights, max_epochs)?.into())
}

/// The AND gate as `(samples, labels)`, samples already augmented with the bias.
#[pyfunction]
fn and_gate_dataset() -> (Vec<Vec<f64>>, Vec<i64>) {
    and_gate::<f64>()
        .into_iter()
        .map(|p| (p.features, p.label.as_i64()))
        .unzip()
}

/// The name of this function must match the `lib.name` in `Cargo.toml`.
#[pymodule]
fn perceptron_learning(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(train, m)?)?;
    m.add_function(wrap_pyfunction!(and_gate_dataset, m)?)?;
    m.add_class::<PyPerceptron>()?;
    m.add_class::<PyTrainingOutcome>()?;
    Ok(())
}
