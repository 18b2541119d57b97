//! Classifier
//!
//! The trained decision-tree classifier: construction via `fit` or `load`,
//! single and batch prediction, accuracy evaluation, and whole-model
//! snapshot exchange.
use crate::classifier::io::{ModelIO, ModelSnapshot};
use crate::data::{Record, Value};
use crate::errors::TreeError;
use crate::metrics::accuracy_score;
use crate::tree::tree::Tree;
use log::info;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// An ID3 decision-tree classifier over categorical records.
///
/// The tree is owned by the instance; there is no shared or global model
/// state. A trained instance can serve concurrent read-only `predict`
/// calls, while `import` takes `&mut self` and replaces the whole model in
/// one step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionTreeClassifier {
    pub tree: Tree,
    pub dataset: Vec<Record>,
    pub target: String,
    pub features: Vec<String>,
}

impl DecisionTreeClassifier {
    /// Train a fresh tree.
    ///
    /// * `dataset` - labeled training records; must not be empty, and every
    ///   record must carry the target attribute.
    /// * `target` - the attribute to predict.
    /// * `features` - candidate split attributes, in tie-break order. The
    ///   list must not contain the target, and each feature must appear in
    ///   at least one record.
    pub fn fit(dataset: Vec<Record>, target: &str, features: Vec<String>) -> Result<Self, TreeError> {
        if dataset.is_empty() {
            return Err(TreeError::EmptyDataset);
        }
        for feature in &features {
            if feature == target {
                return Err(TreeError::TargetIsFeature(feature.clone()));
            }
            if !dataset.iter().any(|record| record.contains_key(feature)) {
                return Err(TreeError::UnknownFeature(feature.clone()));
            }
        }
        let tree = Tree::fit(&dataset, target, &features)?;
        info!(
            "trained a tree of depth {} with {} leaves on {} records",
            tree.depth,
            tree.n_leaves,
            dataset.len()
        );
        Ok(DecisionTreeClassifier {
            tree,
            dataset,
            target: target.to_string(),
            features,
        })
    }

    /// Reconstruct a classifier from an exported snapshot, with no training
    /// performed. The snapshot tree is validated against the structural
    /// invariants before it is accepted.
    pub fn load(snapshot: ModelSnapshot) -> Result<Self, TreeError> {
        snapshot.tree.validate()?;
        let ModelSnapshot {
            tree,
            dataset,
            target,
            features,
        } = snapshot;
        Ok(DecisionTreeClassifier {
            tree: Tree::from_root(tree),
            dataset,
            target,
            features,
        })
    }

    /// Predict the target value for a single record.
    pub fn predict(&self, record: &Record) -> &Value {
        self.tree.predict(record)
    }

    /// Predict a batch of records. Prediction only reads the tree, so the
    /// records are scored in parallel.
    pub fn predict_batch(&self, records: &[Record]) -> Vec<Value> {
        records
            .par_iter()
            .map(|record| self.predict(record).clone())
            .collect()
    }

    /// Accuracy of the tree against labeled `samples`, in `[0, 1]`.
    ///
    /// A sample without the target attribute counts as a miss. An empty
    /// sample list is rejected rather than reported as NaN.
    pub fn evaluate(&self, samples: &[Record]) -> Result<f64, TreeError> {
        if samples.is_empty() {
            return Err(TreeError::EmptySampleSet);
        }
        let predictions = self.predict_batch(samples);
        let labels: Vec<Option<&Value>> = samples.iter().map(|s| s.get(&self.target)).collect();
        Ok(accuracy_score(&labels, &predictions))
    }

    /// Export a structural snapshot sufficient to reconstruct an equivalent
    /// classifier without retraining. Exporting twice without an
    /// intervening `import` yields identical snapshots.
    pub fn export(&self) -> ModelSnapshot {
        ModelSnapshot {
            tree: self.tree.root.clone(),
            dataset: self.dataset.clone(),
            target: self.target.clone(),
            features: self.features.clone(),
        }
    }

    /// Replace the whole model from a snapshot in one step.
    ///
    /// The snapshot is validated before anything is touched, so a malformed
    /// snapshot leaves the current model intact. Callers must not run
    /// concurrent readers across an import.
    pub fn import(&mut self, snapshot: ModelSnapshot) -> Result<(), TreeError> {
        *self = DecisionTreeClassifier::load(snapshot)?;
        info!("imported a tree model for target {}", self.target);
        Ok(())
    }
}

impl ModelIO for DecisionTreeClassifier {}
