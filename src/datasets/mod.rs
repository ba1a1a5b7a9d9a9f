//! Dataset providers: a fixed truth table and a seeded generator labeled by a target line.

pub mod synthetic;

pub use synthetic::{generate_linearly_separable, label_with_target, SyntheticConfig};

use crate::common_types::{DataPoint, Label};
use num_traits::Float;

/// The 2-bit AND gate, bias-augmented, in truth-table order.
///
/// (0,0) -> -1, (0,1) -> -1, (1,0) -> -1, (1,1) -> +1
pub fn and_gate<F: Float>() -> Vec<DataPoint<F>> {
    let (zero, one) = (F::zero(), F::one());
    vec![
        DataPoint::augmented(&[zero, zero], Label::Negative),
        DataPoint::augmented(&[zero, one], Label::Negative),
        DataPoint::augmented(&[one, zero], Label::Negative),
        DataPoint::augmented(&[one, one], Label::Positive),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_and_gate_rows() {
        let rows = and_gate::<f64>();
        let features: Vec<_> = rows.iter().map(|p| p.features.clone()).collect();
        assert_eq!(
            features,
            vec![
                vec![1.0, 0.0, 0.0],
                vec![1.0, 0.0, 1.0],
                vec![1.0, 1.0, 0.0],
                vec![1.0, 1.0, 1.0],
            ]
        );
        let labels: Vec<i64> = rows.iter().map(|p| p.label.as_i64()).collect();
        assert_eq!(labels, vec![-1, -1, -1, 1]);
    }
}
