//! Model IO
//!
//! The persisted snapshot structure, and the JSON surface shared by the
//! classifier and its snapshots. The persisted form is a single
//! self-describing JSON document with no framing or version header.
use crate::data::Record;
use crate::errors::TreeError;
use crate::node::TreeNode;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A plain structural snapshot of a trained classifier: the tree, the
/// training dataset it was built from, the target attribute, and the
/// candidate feature list. Enough to reconstruct an equivalent classifier
/// without retraining.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSnapshot {
    pub tree: TreeNode,
    pub dataset: Vec<Record>,
    pub target: String,
    pub features: Vec<String>,
}

/// IO
pub trait ModelIO: Serialize + DeserializeOwned + Sized {
    /// Save a model as a json object to a file.
    ///
    /// * `path` - Path to save the model.
    fn save_model<P: AsRef<Path>>(&self, path: P) -> Result<(), TreeError> {
        fs::write(path, self.json_dump()?).map_err(|e| TreeError::UnableToWrite(e.to_string()))
    }

    /// Dump a model as a json object
    fn json_dump(&self) -> Result<String, TreeError> {
        serde_json::to_string(self).map_err(|e| TreeError::UnableToWrite(e.to_string()))
    }

    /// Load a model from Json string
    ///
    /// * `json_str` - String object, which can be serialized to json.
    fn from_json(json_str: &str) -> Result<Self, TreeError> {
        serde_json::from_str::<Self>(json_str).map_err(|e| TreeError::UnableToRead(e.to_string()))
    }

    /// Load a model from a path to a json model object.
    ///
    /// * `path` - Path to load the model from.
    fn load_model<P: AsRef<Path>>(path: P) -> Result<Self, TreeError> {
        let json_str = fs::read_to_string(path).map_err(|e| TreeError::UnableToRead(e.to_string()))?;
        Self::from_json(&json_str)
    }
}

impl ModelIO for ModelSnapshot {}
