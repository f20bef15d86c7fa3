//! This file defines split rules for decision tree.
use serde::{Serialize, Deserialize};

use crate::Sample;


/// The output of the function `split` of `Splitter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LR {
    /// The example goes to the left child.
    Left,
    /// The example goes to the right child.
    Right,
}


/// An axis-aligned threshold rule.
/// Examples whose `feature`-th value is at most `threshold`
/// go left; the rest go right.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub(crate) struct Splitter {
    pub(crate) feature: usize,
    pub(crate) threshold: f64,
}


impl Splitter {
    #[inline]
    pub(crate) fn new(feature: usize, threshold: f64) -> Self {
        Self { feature, threshold, }
    }


    /// Defines the splitting.
    #[inline]
    pub(crate) fn split(&self, sample: &Sample, row: usize) -> LR {
        let value = sample.feature(self.feature)[row];

        if value <= self.threshold {
            LR::Left
        } else {
            LR::Right
        }
    }
}
