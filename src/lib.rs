pub mod common_types;
pub mod config;
pub mod datasets;
pub mod error;
pub mod perceptron;
pub mod report;

#[cfg(feature = "plot")]
pub mod plot;

#[cfg(feature = "python")]
mod python;

pub use common_types::{DataPoint, Label, Line};
pub use config::{TrainerConfig, WeightInit};
pub use error::{PerceptronError, Result};
pub use perceptron::{decision_boundary, train, train_with_observer, Perceptron, TrainingEvent, TrainingOutcome};
