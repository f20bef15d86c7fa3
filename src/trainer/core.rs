//! Provides `IncrementalTrainer` trait.

use crate::Sample;
use crate::common::error::TrainError;


/// The trait [`IncrementalTrainer`] defines the incremental
/// training contract.
///
/// A trainer starts out empty and grows its predictor
/// on every successful call to [`IncrementalTrainer::update`]:
/// callers may feed the same sample across epochs
/// or fresh batches over time,
/// and training progress accumulates monotonically.
/// An update never discards or reorders
/// what earlier updates produced.
///
/// [`IncrementalTrainer::predictor`] is callable at any point,
/// including before the first update
/// (which yields an empty predictor),
/// and returns a snapshot that later updates do not touch.
///
/// # Required Methods
/// - [`IncrementalTrainer::name`]
/// - [`IncrementalTrainer::update`]
/// - [`IncrementalTrainer::predictor`]
/// - [`IncrementalTrainer::info`] ... optional.
pub trait IncrementalTrainer {
    /// The predictor accumulated by the trainer.
    type Predictor;


    /// Returns the name of the training algorithm.
    fn name(&self) -> &str;


    /// Returns the information of the trainer as `String`.
    fn info(&self) -> Option<Vec<(&str, String)>> {
        None
    }


    /// Perform one pass over `sample` and grow the predictor.
    /// Input errors (an empty sample, a feature-dimension change)
    /// fail the call without corrupting the trainer state.
    fn update(&mut self, sample: &Sample) -> Result<(), TrainError>;


    /// Returns a snapshot of the predictor accumulated so far.
    fn predictor(&self) -> Self::Predictor;
}
