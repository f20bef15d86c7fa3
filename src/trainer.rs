//! Provides incremental ensemble trainers.

/// Provides `IncrementalTrainer` trait.
pub mod core;

/// Defines the bagging trainer.
pub mod bagging;


pub use self::core::IncrementalTrainer;

pub use self::bagging::{
    Bagging,
    BaggingBuilder,
    Weighting,
};
