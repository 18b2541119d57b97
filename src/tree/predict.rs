//! Predict
//!
//! Walking a trained tree from the root down to a `Result` node.
use super::tree::Tree;
use crate::data::{Record, Value};
use crate::node::TreeNode;

impl Tree {
    /// Predict the target value for `record`.
    ///
    /// At each `Feature` node the edge matching the record's reading by
    /// value equality is taken. A reading never seen during training, or an
    /// absent attribute, deterministically falls back to the FIRST edge of
    /// the node rather than failing. The fallback is part of the prediction
    /// contract: prediction never errors on out-of-vocabulary readings, and
    /// changing it changes model outputs.
    pub fn predict<'a>(&'a self, record: &Record) -> &'a Value {
        let mut node = &self.root;
        loop {
            match node {
                TreeNode::Result { value, .. } => return value,
                TreeNode::Feature { name, children } => {
                    let reading = record.get(name);
                    // A feature node always carries at least one edge.
                    let edge = children
                        .iter()
                        .find(|edge| Some(&edge.value) == reading)
                        .unwrap_or(&children[0]);
                    node = &edge.child;
                }
            }
        }
    }
}
