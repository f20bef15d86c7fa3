//! Defines loss function trait and its instances.
use std::fmt;

use serde::{Serialize, Deserialize};


/// This trait defines the loss functions.
/// Implementations must be pure and defined
/// for every finite prediction value.
pub trait LossFunction {
    /// The name of the loss function.
    fn name(&self) -> &str;


    /// Loss value for a single point.
    fn eval_at_point(&self, prediction: f64, true_value: f64) -> f64;


    /// First derivative of the loss with respect to the prediction,
    /// at a single point.
    fn derivative_at_point(&self, prediction: f64, true_value: f64) -> f64;


    /// Total weighted loss over a batch of points.
    fn eval(
        &self,
        predictions: &[f64],
        target: &[f64],
        weight: &[f64],
    ) -> f64
    {
        let n_items = predictions.len();

        assert_eq!(n_items, target.len());
        assert_eq!(n_items, weight.len());


        predictions.iter()
            .zip(target)
            .zip(weight)
            .map(|((&p, &y), &w)| w * self.eval_at_point(p, y))
            .sum::<f64>()
    }
}


/// The loss functions available for training.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Loss {
    /// Squared loss, `(p - y)^2 / 2`.
    /// The loss-minimizing constant for a set of examples
    /// is the weighted mean label.
    Squared,


    /// Logistic loss, `ln(1 + exp(-y p))` for labels in `{-1, +1}`.
    Log,
}


impl LossFunction for Loss {
    fn name(&self) -> &str {
        match self {
            Self::Squared => "Squared loss",
            Self::Log => "Log loss",
        }
    }


    fn eval_at_point(&self, prediction: f64, true_value: f64) -> f64 {
        match self {
            Self::Squared => 0.5 * (prediction - true_value).powi(2),
            Self::Log => {
                // Stable softplus: ln(1 + exp(z)) for z = -y p.
                let z = - true_value * prediction;
                z.max(0f64) + (- z.abs()).exp().ln_1p()
            },
        }
    }


    fn derivative_at_point(&self, prediction: f64, true_value: f64) -> f64 {
        match self {
            Self::Squared => prediction - true_value,
            Self::Log => {
                // Saturates to 0 or -y for extreme predictions
                // without producing NaN.
                let z = true_value * prediction;
                - true_value / (1f64 + z.exp())
            },
        }
    }
}


impl fmt::Display for Loss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}


/// Running sufficient statistics of a (sub)set of weighted examples.
/// Everything the split sweep and the leaf-output rule need is
/// derivable from these three sums.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct Sums {
    pub(crate) weight: f64,
    pub(crate) weighted_label: f64,
    pub(crate) weighted_sq_label: f64,
}


impl Sums {
    /// Accumulate sums over `indices` into the immutable example data.
    pub(crate) fn collect(indices: &[usize], target: &[f64], weight: &[f64])
        -> Self
    {
        let mut sums = Self::default();
        for &i in indices {
            sums.add(target[i], weight[i]);
        }
        sums
    }


    pub(crate) fn add(&mut self, label: f64, weight: f64) {
        self.weight += weight;
        self.weighted_label += weight * label;
        self.weighted_sq_label += weight * label * label;
    }


    pub(crate) fn sub(&mut self, label: f64, weight: f64) {
        self.weight -= weight;
        self.weighted_label -= weight * label;
        self.weighted_sq_label -= weight * label * label;
    }


    /// Weighted variance-like spread of the labels.
    /// Zero iff all labels in the set are identical.
    pub(crate) fn label_variance(&self) -> f64 {
        if self.weight <= 0f64 {
            return 0f64;
        }
        self.weighted_sq_label
            - self.weighted_label.powi(2) / self.weight
    }
}


impl Loss {
    /// The loss-minimizing constant output for a set of examples
    /// described by `sums`.
    /// - Squared loss: the weighted mean label.
    /// - Log loss: a single Newton step from `0`
    ///   on the aggregated objective, `2 Σwy / Σw`.
    pub(crate) fn leaf_output(&self, sums: &Sums) -> f64 {
        if sums.weight <= 0f64 {
            return 0f64;
        }
        let mean = sums.weighted_label / sums.weight;
        match self {
            Self::Squared => mean,
            Self::Log => 2f64 * mean,
        }
    }


    /// Weighted loss of the set at its optimal constant output,
    /// from sufficient statistics.
    /// - Squared loss: exact, `(Σwy² - (Σwy)²/Σw) / 2`.
    /// - Log loss: second-order expansion at `0`,
    ///   `Σw ln2 - (Σwy)²/(2Σw)`; the constant term cancels
    ///   inside a split gain.
    pub(crate) fn node_loss(&self, sums: &Sums) -> f64 {
        if sums.weight <= 0f64 {
            return 0f64;
        }
        let score = sums.weighted_label.powi(2) / sums.weight;
        match self {
            Self::Squared => 0.5 * (sums.weighted_sq_label - score),
            Self::Log => {
                sums.weight * std::f64::consts::LN_2 - 0.5 * score
            },
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn squared_loss_values() {
        let loss = Loss::Squared;
        assert_eq!(loss.eval_at_point(3f64, 1f64), 2f64);
        assert_eq!(loss.derivative_at_point(3f64, 1f64), 2f64);
        assert_eq!(loss.eval_at_point(1f64, 1f64), 0f64);
    }

    #[test]
    fn log_loss_values() {
        let loss = Loss::Log;
        let v = loss.eval_at_point(0f64, 1f64);
        assert!((v - std::f64::consts::LN_2).abs() < 1e-12);

        let d = loss.derivative_at_point(0f64, 1f64);
        assert!((d + 0.5).abs() < 1e-12);
    }

    #[test]
    fn log_loss_is_stable_for_extreme_predictions() {
        let loss = Loss::Log;
        for p in [1e3, 1e6, 1e300] {
            for y in [-1f64, 1f64] {
                assert!(loss.eval_at_point(p, y).is_finite());
                assert!(loss.eval_at_point(-p, y).is_finite());
                assert!(loss.derivative_at_point(p, y).is_finite());
                assert!(loss.derivative_at_point(-p, y).is_finite());
            }
        }
    }

    #[test]
    fn squared_leaf_output_is_weighted_mean() {
        let target = [0f64, 0f64, 1f64, 1f64];
        let weight = [1f64, 1f64, 1f64, 3f64];
        let indices = [0, 1, 2, 3];
        let sums = Sums::collect(&indices, &target, &weight);
        let out = Loss::Squared.leaf_output(&sums);
        assert!((out - 4f64 / 6f64).abs() < 1e-12);
    }

    #[test]
    fn label_variance_is_zero_for_constant_labels() {
        let target = [2.5f64, 2.5, 2.5];
        let weight = [1f64, 2f64, 1f64];
        let indices = [0, 1, 2];
        let sums = Sums::collect(&indices, &target, &weight);
        assert!(sums.label_variance().abs() < 1e-9);
    }
}
