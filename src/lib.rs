#![warn(missing_docs)]

//!
//! A crate that trains bagged decision-tree ensembles
//! for binary classification and regression.
//!
//! Training proceeds in two layers:
//!
//! - A **base learner**, [`SortingTree`],
//!     grows a single decision tree over an index multiset
//!     into the training sample.
//!     At every node it sorts the examples by each feature and
//!     sweeps the ordering with running sufficient statistics,
//!     so the loss-minimizing split is found without
//!     copying any example data.
//!
//! - An **incremental trainer**, [`Bagging`],
//!     repeatedly draws bootstrap samples with its own seeded
//!     random generator, invokes the base learner on each,
//!     and accumulates the trees into an [`Ensemble`].
//!     Repeated calls to `update` extend training;
//!     they never restart it.
//!
//! The trained [`Ensemble`] predicts by a weighted sum over
//! its member trees, and [`BinaryEvaluator`] reports the
//! aggregate loss and classification error on a sample.

pub mod sample;
pub mod common;
pub mod hypothesis;
pub mod tree;
pub mod trainer;
pub mod evaluator;
pub mod prelude;


pub use sample::{
    Sample,
    SampleReader,
    Feature,
};

pub use common::{
    Loss,
    LossFunction,
    TrainError,
};

pub use hypothesis::{
    Regressor,
    Ensemble,
};

pub use tree::{
    BaseLearner,
    SortingTree,
    SortingTreeBuilder,
    TreePredictor,
};

pub use trainer::{
    IncrementalTrainer,
    Bagging,
    BaggingBuilder,
    Weighting,
};

pub use evaluator::BinaryEvaluator;
