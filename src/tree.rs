//! The files in `tree/` directory defines
//! `BaseLearner` trait and the sorting tree algorithm.

/// Provides `BaseLearner` trait.
pub mod core;

// Splitting rules shared by tree nodes.
pub(crate) mod split_rule;

// Inner tree node representation.
mod node;

/// Defines the sorting tree.
pub mod sorting_tree;


pub use self::core::BaseLearner;

pub use self::sorting_tree::{
    SortingTree,
    SortingTreeBuilder,
    TreePredictor,
};
