use rand::prelude::*;

use crate::common::error::TrainError;
use crate::tree::core::BaseLearner;
use super::bagging_algorithm::{Bagging, Weighting};


/// The number of trees trained per update set as default.
pub const DEFAULT_TREES_PER_UPDATE: usize = 10;
/// The seed of the random generator set as default.
pub const DEFAULT_SEED: u64 = 1234;


/// A struct that builds `Bagging`.
/// `BaggingBuilder` keeps hyperparameters
/// for constructing `Bagging`.
///
/// # Example
///
/// ```no_run
/// use treebag::prelude::*;
///
/// let tree = SortingTreeBuilder::new()
///     .max_depth(2)
///     .build()
///     .unwrap();
///
/// let bagging = BaggingBuilder::new(tree)
///     .trees_per_update(50)
///     .seed(777)
///     .build()
///     .unwrap();
/// ```
pub struct BaggingBuilder<B> {
    base: B,
    trees_per_update: usize,
    sample_size: Option<usize>,
    weighting: Weighting,
    seed: u64,
    verbose: bool,
}


impl<B> BaggingBuilder<B> {
    /// Construct a new instance of `BaggingBuilder`
    /// around the given base learner.
    /// By default,
    /// `BaggingBuilder` sets the parameters as follows;
    /// ```text
    /// trees_per_update: DEFAULT_TREES_PER_UPDATE == 10,
    /// sample_size: the number of examples, taken at update time,
    /// weighting: Weighting::Uniform,
    /// seed: DEFAULT_SEED == 1234,
    /// verbose: false,
    /// ```
    pub fn new(base: B) -> Self {
        Self {
            base,
            trees_per_update: DEFAULT_TREES_PER_UPDATE,
            sample_size: None,
            weighting: Weighting::Uniform,
            seed: DEFAULT_SEED,
            verbose: false,
        }
    }


    /// Set the number of trees trained per update call.
    pub fn trees_per_update(mut self, count: usize) -> Self {
        self.trees_per_update = count;
        self
    }


    /// Set the bootstrap sample size.
    /// If not set, every bootstrap sample has as many draws
    /// as the training sample has examples.
    pub fn sample_size(mut self, size: usize) -> Self {
        self.sample_size = Some(size);
        self
    }


    /// Set the ensemble weighting policy.
    /// The policy is fixed once the trainer is built
    /// and applies to every snapshot it returns.
    pub fn weighting(mut self, weighting: Weighting) -> Self {
        self.weighting = weighting;
        self
    }


    /// Set the seed of the random generator
    /// used for bootstrap sampling.
    /// Two trainers built with the same seed and configuration,
    /// driven by the same update calls,
    /// produce bit-identical ensembles.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }


    /// Set the verbose parameter.
    /// If `true`, `Bagging` prints a line per trained tree.
    /// Default value is `false.`
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }


    /// Build a `Bagging` trainer.
    /// This method consumes `self` and rejects
    /// invalid hyperparameters before any computation.
    pub fn build(self) -> Result<Bagging<B>, TrainError>
        where B: BaseLearner,
    {
        if self.trees_per_update == 0 {
            return Err(TrainError::InvalidConfig(
                "trees_per_update must be at least 1".into()
            ));
        }
        if self.sample_size == Some(0) {
            return Err(TrainError::InvalidConfig(
                "sample_size must be at least 1".into()
            ));
        }
        if let Weighting::Constant(c) = self.weighting {
            if !c.is_finite() || c <= 0.0 {
                return Err(TrainError::InvalidConfig(
                    format!("constant tree weight must be finite \
                             and positive, got {c}")
                ));
            }
        }

        Ok(Bagging::from_components(
            self.base,
            self.trees_per_update,
            self.sample_size,
            self.weighting,
            StdRng::seed_from_u64(self.seed),
            self.verbose,
        ))
    }
}
