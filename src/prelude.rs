//! Exports the standard traits and structs of this crate.
//!
pub use crate::sample::{
    Sample,
    SampleReader,
    Feature,
};


pub use crate::common::{
    Loss,
    LossFunction,
    TrainError,
};


pub use crate::hypothesis::{
    Regressor,
    Ensemble,
};


pub use crate::tree::{
    // Base learner trait
    BaseLearner,

    // The sorting tree inducer and its predictor
    SortingTree,
    SortingTreeBuilder,
    TreePredictor,
};


pub use crate::trainer::{
    // Incremental trainer trait
    IncrementalTrainer,

    // Bootstrap aggregation
    Bagging,
    BaggingBuilder,
    Weighting,
};


pub use crate::evaluator::{
    BinaryEvaluator,
    EvaluationRecord,
};
