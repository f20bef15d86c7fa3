use crate::{Regressor, Sample};
use crate::common::checker;
use crate::common::loss_functions::LossFunction;

use std::fmt;


/// One evaluation pass over a sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvaluationRecord {
    /// Total weighted loss over the sample.
    pub total_loss: f64,
    /// Weighted fraction of examples whose prediction sign
    /// disagrees with the label sign.
    pub error_rate: f64,
    /// The number of evaluated examples.
    pub n_sample: usize,
}


/// Evaluates a predictor on a sample
/// for binary classification tasks.
/// Each call to [`BinaryEvaluator::evaluate`] makes a single
/// read-only pass over the sample, accumulating the total weighted
/// loss under the configured loss function and the weighted
/// classification error (prediction sign against label sign;
/// a prediction of `0` counts as `+1`),
/// and appends the result to the evaluation history.
///
/// The `Display` implementation renders the history
/// in a stable, human-readable form.
///
/// # Example
/// ```no_run
/// use treebag::prelude::*;
///
/// let sample = SampleReader::new()
///     .file("/path/to/data/file.csv")
///     .has_header(true)
///     .target_feature("class")
///     .read()
///     .unwrap();
///
/// let tree = SortingTreeBuilder::new().build().unwrap();
/// let mut bagging = BaggingBuilder::new(tree).build().unwrap();
/// bagging.update(&sample).unwrap();
///
/// let f = bagging.predictor();
/// let mut evaluator = BinaryEvaluator::new(Loss::Log);
/// evaluator.evaluate(&sample, &f);
/// println!("{evaluator}");
/// ```
pub struct BinaryEvaluator<L> {
    loss: L,
    records: Vec<EvaluationRecord>,
}


impl<L> BinaryEvaluator<L> {
    /// Construct a new instance of `BinaryEvaluator`
    /// with the given loss function.
    pub fn new(loss: L) -> Self {
        Self { loss, records: Vec::new(), }
    }


    /// Returns the evaluation history.
    pub fn records(&self) -> &[EvaluationRecord] {
        &self.records[..]
    }


    /// Returns the total weighted loss of the latest evaluation.
    pub fn total_loss(&self) -> Option<f64> {
        self.records.last().map(|r| r.total_loss)
    }


    /// Returns the classification error of the latest evaluation.
    pub fn error_rate(&self) -> Option<f64> {
        self.records.last().map(|r| r.error_rate)
    }
}


impl<L: LossFunction> BinaryEvaluator<L> {
    /// Evaluate `f` on `sample` and append the result
    /// to the evaluation history.
    /// This method reads the sample and the predictor,
    /// but modifies neither.
    pub fn evaluate<H>(&mut self, sample: &Sample, f: &H)
        -> EvaluationRecord
        where H: Regressor,
    {
        checker::check_sample(sample);

        let target = sample.target();
        let weight = sample.weight();
        let n_sample = sample.shape().0;

        let predictions = f.predict_all(sample);
        let total_loss = self.loss.eval(&predictions[..], target, weight);

        let mut error = 0f64;
        let mut total_weight = 0f64;

        for ((&p, &y), &w) in predictions.iter().zip(target).zip(weight) {
            if (p >= 0f64) != (y >= 0f64) {
                error += w;
            }
            total_weight += w;
        }

        let error_rate = if total_weight > 0f64 {
            error / total_weight
        } else {
            0f64
        };

        let record = EvaluationRecord { total_loss, error_rate, n_sample, };
        self.records.push(record);
        record
    }
}


impl<L: LossFunction> fmt::Display for BinaryEvaluator<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "\
            ----------\n\
            # Binary classification evaluation ({})\
            ",
            self.loss.name(),
        )?;

        for (pass, record) in self.records.iter().enumerate() {
            writeln!(
                f,
                "- pass {pass}: loss (total) {loss:.5}, \
                 error {error:.5}, over {n} examples",
                pass = pass + 1,
                loss = record.total_loss,
                error = record.error_rate,
                n = record.n_sample,
            )?;
        }

        write!(f, "----------")
    }
}
