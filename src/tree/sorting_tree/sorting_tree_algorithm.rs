use rayon::prelude::*;

use crate::{Feature, Sample, common::checker};
use crate::common::loss_functions::{Loss, Sums};
use crate::tree::core::BaseLearner;
use crate::tree::split_rule::*;
use crate::tree::node::*;
use super::tree_predictor::TreePredictor;

use std::fmt;


// A node whose weighted label variance falls below this value is
// treated as label-pure and becomes a leaf.
const VARIANCE_TOLERANCE: f64 = 1e-12;


/// The sorting tree algorithm.
/// Given a training sample and an index multiset into it,
/// [`SortingTree`] greedily grows a binary tree of axis-aligned
/// threshold splits and outputs a [`TreePredictor`].
///
/// At every node, each feature is sorted once
/// (ascending value, ties by example index) and swept left-to-right
/// with running sufficient statistics,
/// so the loss-minimizing split of the node is found in
/// `O(D |S| log |S|)`.
/// The feature/threshold pair with the globally maximal gain wins;
/// ties break toward the lowest feature index,
/// then the lowest threshold.
/// The algorithm itself is fully deterministic;
/// any randomness (e.g. bootstrap resampling) belongs to the caller.
///
/// [`SortingTree`] is constructed by
/// [`SortingTreeBuilder`](crate::tree::SortingTreeBuilder).
///
/// # Example
/// ```no_run
/// use treebag::prelude::*;
///
/// let sample = SampleReader::new()
///     .file("/path/to/data/file.csv")
///     .has_header(true)
///     .target_feature("class")
///     .read()
///     .unwrap();
///
/// let tree = SortingTreeBuilder::new()
///     .max_depth(2)
///     .build()
///     .unwrap();
///
/// let n_sample = sample.shape().0;
/// let indices = (0..n_sample).collect::<Vec<_>>();
/// let f = tree.induce(&sample, &indices);
///
/// let predictions = f.predict_all(&sample);
/// ```
pub struct SortingTree {
    loss: Loss,
    max_depth: usize,
    min_examples_per_leaf: usize,
    min_gain: f64,
}


// The best admissible split of one node.
struct SplitCandidate {
    gain: f64,
    feature: usize,
    threshold: f64,
}


impl SortingTree {
    /// Initialize [`SortingTree`].
    /// This method is called only via `SortingTreeBuilder::build`.
    #[inline]
    pub(super) fn from_components(
        loss: Loss,
        max_depth: usize,
        min_examples_per_leaf: usize,
        min_gain: f64,
    ) -> Self
    {
        Self { loss, max_depth, min_examples_per_leaf, min_gain, }
    }


    /// Grow the subtree for the node covering `indices`.
    fn grow(&self, sample: &Sample, indices: Vec<usize>, depth: usize)
        -> Node
    {
        let target = sample.target();
        let weight = sample.weight();

        let sums = Sums::collect(&indices, target, weight);
        let output = self.loss.leaf_output(&sums);


        // Too few examples to split, depth exhausted,
        // or all labels effectively identical.
        if indices.len() < 2 * self.min_examples_per_leaf
            || depth >= self.max_depth
            || sums.label_variance() <= VARIANCE_TOLERANCE
        {
            return Node::leaf(output);
        }


        let node_loss = self.loss.node_loss(&sums);
        let candidate = self.best_split(sample, &indices, &sums, node_loss);

        let Some(candidate) = candidate else {
            // No admissible boundary on any feature.
            return Node::leaf(output);
        };

        if candidate.gain < self.min_gain {
            return Node::leaf(output);
        }

        let rule = Splitter::new(candidate.feature, candidate.threshold);


        // Split the examples for the left/right children.
        let mut lindices = Vec::new();
        let mut rindices = Vec::new();
        for i in indices {
            match rule.split(sample, i) {
                LR::Left  => { lindices.push(i); },
                LR::Right => { rindices.push(i); },
            }
        }

        let ltree = self.grow(sample, lindices, depth + 1);
        let rtree = self.grow(sample, rindices, depth + 1);


        Node::branch(rule, ltree, rtree)
    }


    /// Find the split with the globally maximal gain over all features.
    /// Each feature is searched independently (in parallel);
    /// the comparator is a total order over `(gain, feature)`,
    /// so the winner does not depend on scheduling.
    fn best_split(
        &self,
        sample: &Sample,
        indices: &[usize],
        parent: &Sums,
        parent_loss: f64,
    ) -> Option<SplitCandidate>
    {
        sample.features()
            .par_iter()
            .enumerate()
            .filter_map(|(j, feature)| {
                self.best_split_at(
                    sample, feature, j, indices, parent, parent_loss,
                )
            })
            .max_by(|a, b| {
                a.gain.partial_cmp(&b.gain)
                    .unwrap()
                    .then_with(|| b.feature.cmp(&a.feature))
            })
    }


    /// Sweep one feature for the best threshold.
    /// The index multiset is sorted by the feature value
    /// (ties by example index) and each boundary between two distinct
    /// values is scored in `O(1)` from the running sums.
    fn best_split_at(
        &self,
        sample: &Sample,
        feature: &Feature,
        feature_index: usize,
        indices: &[usize],
        parent: &Sums,
        parent_loss: f64,
    ) -> Option<SplitCandidate>
    {
        let target = sample.target();
        let weight = sample.weight();

        let mut order = indices.to_vec();
        order.sort_by(|&a, &b|
            feature[a].partial_cmp(&feature[b])
                .unwrap()
                .then(a.cmp(&b))
        );

        let n = order.len();
        let min_leaf = self.min_examples_per_leaf;

        let mut left = Sums::default();
        let mut right = *parent;

        let mut best: Option<(f64, f64)> = None;

        for (pos, &i) in order.iter().enumerate() {
            left.add(target[i], weight[i]);
            right.sub(target[i], weight[i]);

            let n_left = pos + 1;
            let n_right = n - n_left;
            if n_right == 0 {
                break;
            }

            // Only a strict value boundary is a valid threshold;
            // equal values must land on the same side.
            if feature[i] >= feature[order[pos + 1]] {
                continue;
            }
            if n_left < min_leaf || n_right < min_leaf {
                continue;
            }

            let gain = parent_loss
                - (self.loss.node_loss(&left) + self.loss.node_loss(&right));

            // Strict improvement keeps the lowest threshold on ties.
            if best.map_or(true, |(g, _)| gain > g) {
                best = Some((gain, feature[i]));
            }
        }

        best.map(|(gain, threshold)| SplitCandidate {
            gain,
            feature: feature_index,
            threshold,
        })
    }
}


impl BaseLearner for SortingTree {
    type Predictor = TreePredictor;


    fn name(&self) -> &str {
        "Sorting Tree"
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let info = Vec::from([
            ("Loss", format!("{}", self.loss)),
            ("Max depth", format!("{}", self.max_depth)),
            (
                "Min examples per leaf",
                format!("{}", self.min_examples_per_leaf),
            ),
            ("Min gain", format!("{}", self.min_gain)),
        ]);
        Some(info)
    }


    fn induce(&self, sample: &Sample, indices: &[usize])
        -> Self::Predictor
    {
        checker::check_sample(sample);
        checker::check_indices(indices, sample.shape().0);

        let root = self.grow(sample, indices.to_vec(), 0);

        TreePredictor::from(root)
    }
}


impl fmt::Display for SortingTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\
            ----------\n\
            # Sorting Tree\n\n\
            - Loss function: {}\n\
            - Max depth: {}\n\
            - Min examples per leaf: {}\n\
            - Min gain: {}\n\
            ----------\
            ",
            self.loss,
            self.max_depth,
            self.min_examples_per_leaf,
            self.min_gain,
        )
    }
}
