//! Provides `BaseLearner` trait.

use crate::Sample;


/// The trait [`BaseLearner`] defines the seam between
/// an ensemble trainer and the algorithm that fits a single predictor.
///
/// A base learner receives the training sample together with an
/// index multiset into it (duplicates allowed, so a bootstrap sample
/// is representable without copying example data)
/// and produces one predictor.
///
/// Implementations must be deterministic:
/// the same `(sample, indices)` pair always yields
/// a structurally identical predictor.
/// Any randomness belongs to the caller.
pub trait BaseLearner {
    /// The type of predictor this learner produces.
    type Predictor;


    /// Returns the name of the base learner.
    fn name(&self) -> &str;


    /// Returns the parameters of the base learner as `String`.
    fn info(&self) -> Option<Vec<(&str, String)>> {
        None
    }


    /// Fit one predictor to the examples referenced by `indices`.
    fn induce(&self, sample: &Sample, indices: &[usize])
        -> Self::Predictor;
}
