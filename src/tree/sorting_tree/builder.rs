use crate::common::error::TrainError;
use crate::common::loss_functions::Loss;
use super::sorting_tree_algorithm::SortingTree;


/// The maximal depth set as default.
pub const DEFAULT_MAX_DEPTH: usize = 3;
/// The minimal number of examples per leaf set as default.
pub const DEFAULT_MIN_EXAMPLES_PER_LEAF: usize = 1;
/// The minimal gain to accept a split set as default.
pub const DEFAULT_MIN_GAIN: f64 = 0.0;


/// A struct that builds `SortingTree`.
/// `SortingTreeBuilder` keeps hyperparameters
/// for constructing `SortingTree`.
///
/// # Example
///
/// ```no_run
/// use treebag::prelude::*;
///
/// let tree = SortingTreeBuilder::new()
///     .max_depth(2)
///     .min_examples_per_leaf(1)
///     .loss(Loss::Squared)
///     .build()
///     .unwrap();
/// ```
#[derive(Clone)]
pub struct SortingTreeBuilder {
    max_depth: usize,
    min_examples_per_leaf: usize,
    min_gain: f64,
    loss: Loss,
}


impl SortingTreeBuilder {
    /// Construct a new instance of `SortingTreeBuilder`.
    /// By default,
    /// `SortingTreeBuilder` sets the parameters as follows;
    /// ```text
    /// max_depth: DEFAULT_MAX_DEPTH == 3,
    /// min_examples_per_leaf: DEFAULT_MIN_EXAMPLES_PER_LEAF == 1,
    /// min_gain: DEFAULT_MIN_GAIN == 0.0,
    /// loss: Loss::Squared,
    /// ```
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            min_examples_per_leaf: DEFAULT_MIN_EXAMPLES_PER_LEAF,
            min_gain: DEFAULT_MIN_GAIN,
            loss: Loss::Squared,
        }
    }


    /// Specify the maximal depth of the tree.
    /// Depth `0` is legal and yields a single-leaf tree
    /// that outputs the loss-minimizing constant.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }


    /// Specify the minimal number of examples each leaf must cover.
    /// Duplicated indices of a bootstrap sample count once
    /// per occurrence.
    pub fn min_examples_per_leaf(mut self, count: usize) -> Self {
        self.min_examples_per_leaf = count;
        self
    }


    /// Specify the minimal loss reduction to accept a split.
    pub fn min_gain(mut self, gain: f64) -> Self {
        self.min_gain = gain;
        self
    }


    /// Specify the loss function. Default is `Loss::Squared`.
    pub fn loss(mut self, loss: Loss) -> Self {
        self.loss = loss;
        self
    }


    /// Build a `SortingTree`.
    /// This method consumes `self` and rejects
    /// invalid hyperparameters before any computation.
    pub fn build(self) -> Result<SortingTree, TrainError> {
        if self.min_examples_per_leaf == 0 {
            return Err(TrainError::InvalidConfig(
                "min_examples_per_leaf must be at least 1".into()
            ));
        }
        if !self.min_gain.is_finite() || self.min_gain < 0.0 {
            return Err(TrainError::InvalidConfig(
                format!("min_gain must be finite and non-negative, \
                         got {}", self.min_gain)
            ));
        }

        Ok(SortingTree::from_components(
            self.loss,
            self.max_depth,
            self.min_examples_per_leaf,
            self.min_gain,
        ))
    }
}


impl Default for SortingTreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
