//! Sampler
//!
//! Splitting a dataset into training records and a held-out set for
//! accuracy evaluation.
use crate::data::Record;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Randomly split `records` into a training set and a held-out set.
///
/// Each record lands in the training set with probability
/// `train_fraction`. The same seed always produces the same split.
pub fn train_test_split(records: &[Record], train_fraction: f64, seed: u64) -> (Vec<Record>, Vec<Record>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut train = Vec::new();
    let mut test = Vec::new();
    for record in records {
        if rng.gen::<f64>() < train_fraction {
            train.push(record.clone());
        } else {
            test.push(record.clone());
        }
    }
    (train, test)
}
