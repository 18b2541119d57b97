//! Tree
//!
//! The recursive ID3 builder and the trained tree it produces.
use crate::data::{attribute_values, distinct_values, split_on, Record};
use crate::errors::TreeError;
use crate::node::{FeatureValueEdge, TreeNode};
use crate::splitter::max_gain;
use crate::utils::majority_value;
use serde::{Deserialize, Serialize};
use std::cmp::max;
use std::fmt::{self, Display};

/// A trained decision tree: the root node plus derived statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tree {
    pub root: TreeNode,
    pub depth: usize,
    pub n_leaves: usize,
}

impl Tree {
    /// Build a tree from labeled records.
    ///
    /// * `records` - the training dataset; must not be empty.
    /// * `target` - name of the attribute to predict; every record must
    ///   carry it.
    /// * `features` - candidate split attributes, in tie-break order.
    pub fn fit(records: &[Record], target: &str, features: &[String]) -> Result<Self, TreeError> {
        if records.is_empty() {
            return Err(TreeError::EmptyDataset);
        }
        if records.iter().any(|record| !record.contains_key(target)) {
            return Err(TreeError::MissingTarget(target.to_string()));
        }
        let refs: Vec<&Record> = records.iter().collect();
        let root = build_node(&refs, target, features);
        Ok(Tree::from_root(root))
    }

    /// Wrap an existing root node, recomputing the derived statistics.
    pub fn from_root(root: TreeNode) -> Self {
        let (depth, n_leaves) = measure(&root);
        Tree { root, depth, n_leaves }
    }
}

/// Depth in node levels and leaf count of the subtree under `node`.
fn measure(node: &TreeNode) -> (usize, usize) {
    match node {
        TreeNode::Result { .. } => (1, 1),
        TreeNode::Feature { children, .. } => {
            let mut depth = 0;
            let mut leaves = 0;
            for edge in children {
                let (d, l) = measure(&edge.child);
                depth = max(depth, d);
                leaves += l;
            }
            (depth + 1, leaves)
        }
    }
}

/// The three-case ID3 recursion.
///
/// `records` is never empty here: `fit` guards the root call, and children
/// are only built for values actually observed in the parent partition.
fn build_node(records: &[&Record], target: &str, features: &[String]) -> TreeNode {
    let target_values = attribute_values(records, target);
    if let Some((&first, rest)) = target_values.split_first() {
        if rest.iter().all(|&value| value == first) {
            return TreeNode::result(first.clone());
        }
    }

    // Labels are mixed; a majority vote settles any branch that cannot be
    // split further. `fit` rejects records without the target, so the vote
    // never comes up empty.
    let majority = majority_value(&target_values)
        .expect("every record carries the target attribute")
        .clone();

    let best = match max_gain(records, target, features) {
        Some(feature) => feature,
        None => return TreeNode::result(majority),
    };

    let values = distinct_values(records, best);
    if values.is_empty() {
        // No record in this partition carries the selected feature.
        return TreeNode::result(majority);
    }

    let remaining: Vec<String> = features
        .iter()
        .filter(|feature| feature.as_str() != best)
        .cloned()
        .collect();

    let children = values
        .into_iter()
        .map(|value| FeatureValueEdge {
            value: value.clone(),
            child: build_node(&split_on(records, best, value), target, &remaining),
        })
        .collect();

    TreeNode::Feature {
        name: best.to_string(),
        children,
    }
}

impl Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt_node(f, &self.root, 0)
    }
}

fn fmt_node(f: &mut fmt::Formatter, node: &TreeNode, depth: usize) -> fmt::Result {
    let pad = "      ".repeat(depth);
    match node {
        TreeNode::Result { label, .. } => writeln!(f, "{}-> {}", pad, label),
        TreeNode::Feature { name, children } => {
            writeln!(f, "{}{}?", pad, name)?;
            for edge in children {
                writeln!(f, "{}  = {}:", pad, edge.value)?;
                fmt_node(f, &edge.child, depth + 1)?;
            }
            Ok(())
        }
    }
}
