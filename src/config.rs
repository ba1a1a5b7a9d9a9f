//! Trainer configuration.

use num_traits::Float;
use std::str::FromStr;

use crate::error::PerceptronError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Starting point for the weight vector. Both converge on separable data; they only change the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum WeightInit {
    #[default]
    Zeros,
    Ones,
}

impl WeightInit {
    pub fn materialize<F: Float>(self, dimension: usize) -> Vec<F> {
        match self {
            WeightInit::Zeros => vec![F::zero(); dimension],
            WeightInit::Ones => vec![F::one(); dimension],
        }
    }
}

impl FromStr for WeightInit {
    type Err = PerceptronError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "zeros" | "zero" => Ok(WeightInit::Zeros),
            "ones" | "one" => Ok(WeightInit::Ones),
            other => Err(PerceptronError::invalid_config(
                "weight_init",
                format!("expected 'zeros' or 'ones', got '{other}'"),
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TrainerConfig {
    /// Upper bound on full passes over the dataset.
    pub max_epochs: usize,
    pub weight_init: WeightInit,
}

impl TrainerConfig {
    pub const DEFAULT_MAX_EPOCHS: usize = 1000;

    pub fn new(max_epochs: usize, weight_init: WeightInit) -> Self {
        TrainerConfig { max_epochs, weight_init }
    }
}

impl Default for TrainerConfig {
    fn default() -> Self {
        TrainerConfig {
            max_epochs: Self::DEFAULT_MAX_EPOCHS,
            weight_init: WeightInit::Zeros,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_materialize() {
        assert_eq!(WeightInit::Zeros.materialize::<f64>(3), vec![0.0, 0.0, 0.0]);
        assert_eq!(WeightInit::Ones.materialize::<f32>(2), vec![1.0, 1.0]);
        assert!(WeightInit::Ones.materialize::<f64>(0).is_empty());
    }

    #[test]
    fn test_weight_init_from_str() {
        assert_eq!("zeros".parse::<WeightInit>().unwrap(), WeightInit::Zeros);
        assert_eq!("Ones".parse::<WeightInit>().unwrap(), WeightInit::Ones);
        assert!(matches!(
            "random".parse::<WeightInit>(),
            Err(PerceptronError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_default_config() {
        let config = TrainerConfig::default();
        assert_eq!(config.max_epochs, 1000);
        assert_eq!(config.weight_init, WeightInit::Zeros);
    }
}
