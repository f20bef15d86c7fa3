//! Defines the inner representation
//! of the decision tree predictor.
use serde::{Serialize, Deserialize};

use crate::{Regressor, Sample};
use super::split_rule::*;


/// Enumeration of `BranchNode` and `LeafNode`.
/// Every node exclusively owns its descendants;
/// no node is shared between trees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// A node that have two childrens.
    Branch(BranchNode),


    /// A node that have no child.
    Leaf(LeafNode),
}


/// Represents the branch nodes of decision tree.
/// Each `BranchNode` must have two childrens
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchNode {
    pub(super) rule: Splitter,
    pub(super) left: Box<Node>,
    pub(super) right: Box<Node>,
}


/// Represents the leaf nodes of decision tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeafNode {
    pub(super) output: f64,
}


impl Node {
    /// Construct a leaf node that outputs `output`.
    #[inline]
    pub(super) fn leaf(output: f64) -> Self {
        Node::Leaf(LeafNode { output })
    }


    /// Construct a branch node from the splitting rule
    /// and the two child nodes.
    #[inline]
    pub(super) fn branch(rule: Splitter, left: Node, right: Node) -> Self {
        Node::Branch(BranchNode {
            rule,
            left: Box::new(left),
            right: Box::new(right),
        })
    }
}


impl Regressor for LeafNode {
    #[inline]
    fn predict(&self, _sample: &Sample, _row: usize) -> f64 {
        self.output
    }
}


impl Regressor for BranchNode {
    #[inline]
    fn predict(&self, sample: &Sample, row: usize) -> f64 {
        match self.rule.split(sample, row) {
            LR::Left => self.left.predict(sample, row),
            LR::Right => self.right.predict(sample, row),
        }
    }
}


impl Regressor for Node {
    #[inline]
    fn predict(&self, sample: &Sample, row: usize) -> f64 {
        match self {
            Node::Branch(ref node) => node.predict(sample, row),
            Node::Leaf(ref node) => node.predict(sample, row),
        }
    }
}


impl Node {
    pub(super) fn to_dot_info(&self, id: usize) -> (Vec<String>, usize) {
        match self {
            Node::Branch(b) => {
                let b_info = format!(
                    "\tnode_{id} [ label = \"x[{feat}] <= {thr:.2} ?\" ];\n",
                    feat = b.rule.feature,
                    thr = b.rule.threshold,
                );

                let (l_info, next_id) = b.left.to_dot_info(id + 1);
                let (mut r_info, ret_id) = b.right.to_dot_info(next_id);

                let mut info = l_info;
                info.push(b_info);
                info.append(&mut r_info);

                let l_edge = format!(
                    "\tnode_{id} -- node_{l_id} [ label = \"Yes\" ];\n",
                    l_id = id + 1
                );
                let r_edge = format!(
                    "\tnode_{id} -- node_{r_id} [ label = \"No\" ];\n",
                    r_id = next_id
                );

                info.push(l_edge);
                info.push(r_edge);

                (info, ret_id)
            },
            Node::Leaf(l) => {
                let info = format!(
                    "\tnode_{id} [ \
                     label = \"{p}\", \
                     shape = box, \
                     ];\n",
                    p = l.output
                );

                (vec![info], id + 1)
            }
        }
    }
}
