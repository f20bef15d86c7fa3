//! Provides evaluators for trained predictors.

pub(crate) mod binary_evaluator;


pub use binary_evaluator::{
    BinaryEvaluator,
    EvaluationRecord,
};
