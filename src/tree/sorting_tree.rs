//! Defines the sorting tree algorithm and its predictor.

mod builder;
mod sorting_tree_algorithm;
mod tree_predictor;


pub use builder::{
    SortingTreeBuilder,
    DEFAULT_MAX_DEPTH,
    DEFAULT_MIN_EXAMPLES_PER_LEAF,
    DEFAULT_MIN_GAIN,
};
pub use sorting_tree_algorithm::SortingTree;
pub use tree_predictor::TreePredictor;
