//! Node
//!
//! The immutable node structure produced by the tree builder.
use crate::data::Value;
use crate::errors::TreeError;
use serde::{Deserialize, Serialize};

/// A node of a trained decision tree.
///
/// Terminal `Result` nodes carry the predicted target value; internal
/// `Feature` nodes split on one attribute and hold one value-labeled edge
/// per distinct value observed in the partition that reached the node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TreeNode {
    Result {
        value: Value,
        label: String,
    },
    Feature {
        name: String,
        children: Vec<FeatureValueEdge>,
    },
}

/// One outgoing edge of a `Feature` node. Edge values are unique among
/// siblings and keep the first-occurrence order of the training partition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureValueEdge {
    pub value: Value,
    pub child: TreeNode,
}

impl TreeNode {
    /// Terminal node for a predicted value, labeled with its display form.
    pub fn result(value: Value) -> Self {
        let label = value.to_string();
        TreeNode::Result { value, label }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, TreeNode::Result { .. })
    }

    /// Check the structural invariants: every `Feature` node has at least
    /// one edge, and no two sibling edges share a value.
    pub fn validate(&self) -> Result<(), TreeError> {
        match self {
            TreeNode::Result { .. } => Ok(()),
            TreeNode::Feature { name, children } => {
                if children.is_empty() {
                    return Err(TreeError::InvalidSnapshot(format!(
                        "feature node {} has no edges",
                        name
                    )));
                }
                for (i, edge) in children.iter().enumerate() {
                    if children[..i].iter().any(|other| other.value == edge.value) {
                        return Err(TreeError::InvalidSnapshot(format!(
                            "feature node {} has duplicate edge value {}",
                            name, edge.value
                        )));
                    }
                    edge.child.validate()?;
                }
                Ok(())
            }
        }
    }
}
