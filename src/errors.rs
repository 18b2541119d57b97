//! Errors
//!
//! Custom error types used throughout the `branchwise` crate.
use thiserror::Error;

/// Errors that can occur while training, evaluating, or persisting a tree.
#[derive(Debug, Error)]
pub enum TreeError {
    /// Training was attempted on an empty dataset.
    #[error("Cannot train on an empty dataset.")]
    EmptyDataset,
    /// Evaluation was attempted on an empty sample list.
    #[error("Cannot evaluate an empty sample list.")]
    EmptySampleSet,
    /// The target attribute was also listed as a split feature.
    #[error("The target attribute {0} cannot be used as a split feature.")]
    TargetIsFeature(String),
    /// A split feature that no training record carries.
    #[error("Feature {0} is not present in any training record.")]
    UnknownFeature(String),
    /// A training record without the target attribute.
    #[error("A training record is missing the target attribute {0}.")]
    MissingTarget(String),
    /// A snapshot that violates the tree structural invariants.
    #[error("Invalid model snapshot: {0}")]
    InvalidSnapshot(String),
    /// Unable to write model to file.
    #[error("Unable to write model to file: {0}")]
    UnableToWrite(String),
    /// Unable to read model from file.
    #[error("Unable to read model from a file: {0}")]
    UnableToRead(String),
}
