//! Provides the bagging trainer.

mod builder;
mod bagging_algorithm;


pub use builder::{
    BaggingBuilder,
    DEFAULT_TREES_PER_UPDATE,
    DEFAULT_SEED,
};
pub use bagging_algorithm::{Bagging, Weighting};
