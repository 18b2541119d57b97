//! Metrics
//!
//! Evaluation metrics for categorical predictions.
use crate::data::Value;

/// Fraction of predictions that match their label, in `[0, 1]`.
///
/// Labels are optional so that an unlabeled sample can be scored as a
/// miss. Callers guard against empty input; see
/// [`DecisionTreeClassifier::evaluate`](crate::DecisionTreeClassifier::evaluate).
pub fn accuracy_score(y: &[Option<&Value>], yhat: &[Value]) -> f64 {
    let correct = y
        .iter()
        .zip(yhat)
        .filter(|&(label, prediction)| matches!(label, Some(l) if *l == prediction))
        .count();
    correct as f64 / y.len() as f64
}
