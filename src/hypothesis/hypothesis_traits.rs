use crate::Sample;


/// A trait that defines the behavior of a predictor.
/// You only need to implement `predict` method.
///
/// Predictions are real-valued;
/// for binary classification tasks the sign of the prediction
/// is the predicted label,
/// which is how [`BinaryEvaluator`](crate::BinaryEvaluator)
/// counts classification errors.
pub trait Regressor {
    /// Predicts the target value of the i'th row of the `sample`.
    fn predict(&self, sample: &Sample, row: usize) -> f64;


    /// Predicts the target values of `sample`.
    fn predict_all(&self, sample: &Sample) -> Vec<f64>
    {
        let n_sample = sample.shape().0;
        (0..n_sample).map(|row| self.predict(sample, row))
            .collect::<Vec<_>>()
    }
}
