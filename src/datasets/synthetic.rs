//! Random 2-D datasets labeled by an ideal target line.

use crate::common_types::{DataPoint, Label, Line};
use crate::error::{PerceptronError, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Parameters for [`generate_linearly_separable`].
///
/// Points are drawn from a normal distribution with diagonal covariance,
/// so each coordinate is sampled independently with its own standard deviation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SyntheticConfig {
    pub target: Line<f64>,
    pub mean: [f64; 2],
    pub std_dev: [f64; 2],
    pub n_points: usize,
    pub seed: u64,
}

impl Default for SyntheticConfig {
    fn default() -> Self {
        SyntheticConfig {
            target: Line::new(0.5, 1.0),
            mean: [0.0, 1.0],
            std_dev: [1.0, 1.0],
            n_points: 20,
            seed: 42,
        }
    }
}

impl SyntheticConfig {
    pub fn validate(&self) -> Result<()> {
        if self.n_points == 0 {
            return Err(PerceptronError::invalid_config("n_points", "must be at least 1"));
        }
        if self.std_dev.iter().any(|s| !s.is_finite() || *s <= 0.0) {
            return Err(PerceptronError::invalid_config(
                "std_dev",
                "both standard deviations must be finite and positive",
            ));
        }
        let finite = self.mean.iter().all(|m| m.is_finite())
            && self.target.slope.is_finite()
            && self.target.intercept.is_finite();
        if !finite {
            return Err(PerceptronError::invalid_config(
                "target/mean",
                "slope, intercept and mean must be finite",
            ));
        }
        Ok(())
    }
}

/// `+1` strictly above the target line, `-1` on or below it.
pub fn label_with_target(target: &Line<f64>, x1: f64, x2: f64) -> Label {
    if x2 > target.y_at(x1) {
        Label::Positive
    } else {
        Label::Negative
    }
}

/// Samples `n_points` bias-augmented points and labels them with the target line.
///
/// The same config (seed included) always yields the same dataset.
pub fn generate_linearly_separable(config: &SyntheticConfig) -> Result<Vec<DataPoint<f64>>> {
    config.validate()?;
    let x1_dist = Normal::new(config.mean[0], config.std_dev[0])
        .map_err(|e| PerceptronError::invalid_config("std_dev", e.to_string()))?;
    let x2_dist = Normal::new(config.mean[1], config.std_dev[1])
        .map_err(|e| PerceptronError::invalid_config("std_dev", e.to_string()))?;
    let mut rng = StdRng::seed_from_u64(config.seed);

    let points: Vec<DataPoint<f64>> = (0..config.n_points)
        .map(|_| {
            let x1 = x1_dist.sample(&mut rng);
            let x2 = x2_dist.sample(&mut rng);
            let label = label_with_target(&config.target, x1, x2);
            debug!(x1, x2, label = label.as_i64(), "sampled point");
            DataPoint::augmented(&[x1, x2], label)
        })
        .collect();
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_with_target() {
        let target = Line::new(0.5, 1.0);
        assert_eq!(label_with_target(&target, 0.0, 1.5), Label::Positive);
        assert_eq!(label_with_target(&target, 0.0, 0.5), Label::Negative);
        // On the line counts as below.
        assert_eq!(label_with_target(&target, 2.0, 2.0), Label::Negative);
    }

    #[test]
    fn test_generated_points_match_target() {
        let config = SyntheticConfig::default();
        let data = generate_linearly_separable(&config).unwrap();
        assert_eq!(data.len(), 20);
        for p in &data {
            assert_eq!(p.features.len(), 3);
            assert_eq!(p.features[0], 1.0);
            assert_eq!(p.label, label_with_target(&config.target, p.features[1], p.features[2]));
        }
    }

    #[test]
    fn test_same_seed_same_data() {
        let config = SyntheticConfig { n_points: 50, seed: 7, ..SyntheticConfig::default() };
        assert_eq!(
            generate_linearly_separable(&config).unwrap(),
            generate_linearly_separable(&config).unwrap()
        );
        let other = SyntheticConfig { seed: 8, ..config.clone() };
        assert_ne!(
            generate_linearly_separable(&config).unwrap(),
            generate_linearly_separable(&other).unwrap()
        );
    }

    #[test]
    fn test_invalid_configs() {
        let zero = SyntheticConfig { n_points: 0, ..SyntheticConfig::default() };
        assert!(matches!(
            generate_linearly_separable(&zero),
            Err(PerceptronError::InvalidConfig { field, .. }) if field == "n_points"
        ));
        let flat = SyntheticConfig { std_dev: [1.0, 0.0], ..SyntheticConfig::default() };
        assert!(matches!(
            generate_linearly_separable(&flat),
            Err(PerceptronError::InvalidConfig { field, .. }) if field == "std_dev"
        ));
        let nan = SyntheticConfig { target: Line::new(f64::NAN, 1.0), ..SyntheticConfig::default() };
        assert!(generate_linearly_separable(&nan).is_err());
    }
}
