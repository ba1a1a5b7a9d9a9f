//! Decision boundary of a trained 2-D perceptron.

use crate::common_types::Line;
use crate::error::{PerceptronError, Result};
use num_traits::Float;

/// Solves `w0 + w1*x1 + w2*x2 = 0` for `x2`, giving `x2 = -(w1/w2)*x1 - w0/w2`.
///
/// Only defined for three components (bias plus two features) and a non-zero `w2`.
pub fn decision_boundary<F: Float>(weights: &[F]) -> Result<Line<F>> {
    let [w0, w1, w2] = weights else {
        return Err(PerceptronError::DimensionMismatch {
            index: 0,
            expected: 3,
            actual: weights.len(),
        });
    };
    if *w2 == F::zero() {
        return Err(PerceptronError::DegenerateBoundary);
    }
    Ok(Line::new(-(*w1 / *w2), -(*w0 / *w2)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_boundary_of_and_gate_weights() {
        let line = decision_boundary(&[-4.0_f64, 3.0, 2.0]).unwrap();
        assert_relative_eq!(line.slope, -1.5);
        assert_relative_eq!(line.intercept, 2.0);
    }

    #[test]
    fn test_points_on_boundary_have_zero_score() {
        let w = [0.7_f64, -1.3, 2.9];
        let line = decision_boundary(&w).unwrap();
        for x1 in [-3.0, 0.0, 1.25, 10.0] {
            let x2 = line.y_at(x1);
            assert_relative_eq!(w[0] + w[1] * x1 + w[2] * x2, 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_zero_w2_is_degenerate() {
        assert_eq!(
            decision_boundary(&[1.0_f64, 2.0, 0.0]),
            Err(PerceptronError::DegenerateBoundary)
        );
        assert_eq!(
            decision_boundary(&[1.0_f64, 2.0, -0.0]),
            Err(PerceptronError::DegenerateBoundary)
        );
    }

    #[test]
    fn test_wrong_dimension() {
        assert_eq!(
            decision_boundary(&[1.0_f64, 2.0]),
            Err(PerceptronError::DimensionMismatch { index: 0, expected: 3, actual: 2 })
        );
    }
}
