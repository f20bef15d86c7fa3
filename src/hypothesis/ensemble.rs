use serde::{Serialize, Deserialize};
use crate::{
    common::utils,
    Regressor,
    Sample,
};


/// A weighted collection of base predictors.
/// This is what the bagging trainer accumulates and returns:
/// an ordered sequence of `(weight, member)` pairs,
/// append-only during training and immutable for inference.
/// You can read/write this struct by `Serde` trait.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Ensemble<H> {
    /// Weights on each member in `self.members`.
    pub weights: Vec<f64>,
    /// Set of base predictors.
    pub members: Vec<H>,
}


impl<H> Ensemble<H> {
    /// Construct an empty `Ensemble`.
    /// An empty ensemble predicts `0` for every example.
    #[inline]
    pub fn new() -> Self {
        Self { weights: Vec::new(), members: Vec::new(), }
    }


    /// Append a pair `(weight, member)` to the current ensemble.
    #[inline]
    pub fn push(&mut self, weight: f64, member: H) {
        self.weights.push(weight);
        self.members.push(member);
    }


    /// Returns the number of members.
    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }


    /// Returns `true` if the ensemble has no member.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }


    /// Normalize `self.weights`, `\| w \|_1 = 1`.
    #[inline]
    pub fn normalize(&mut self) {
        utils::normalize(&mut self.weights);
    }


    /// Decompose the ensemble
    /// into the two vectors `Vec<f64>` and `Vec<H>`
    #[inline]
    pub fn decompose(self) -> (Vec<f64>, Vec<H>) {
        (self.weights, self.members)
    }
}


impl<H: Clone> Ensemble<H> {
    /// Construct a new `Ensemble` from given slices.
    #[inline]
    pub fn from_slices(weights: &[f64], members: &[H]) -> Self {
        assert_eq!(weights.len(), members.len());
        Self {
            weights: weights.to_vec(),
            members: members.to_vec(),
        }
    }
}


impl<H> Default for Ensemble<H> {
    fn default() -> Self {
        Self::new()
    }
}


impl<F> Regressor for Ensemble<F>
    where F: Regressor,
{
    fn predict(&self, sample: &Sample, row: usize) -> f64 {
        self.weights.iter()
            .zip(&self.members[..])
            .map(|(w, h)| *w * h.predict(sample, row))
            .sum::<f64>()
    }
}
