//! Splitter
//!
//! The information-theoretic split criterion: Shannon entropy of a label
//! distribution, and the information gain of partitioning a dataset on a
//! candidate attribute.
use crate::data::{attribute_values, distinct_values, split_on, Record, Value};
use hashbrown::HashMap;

/// Shannon entropy, in bits, of the label distribution in `values`.
///
/// Empty input is explicitly zero; a single-class distribution also comes
/// out at zero since `p log2 p` vanishes at `p = 1`.
pub fn entropy(values: &[&Value]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut counts: HashMap<&Value, usize> = HashMap::new();
    for value in values {
        *counts.entry(*value).or_insert(0) += 1;
    }
    let total = values.len() as f64;
    counts
        .values()
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Information gain of splitting `records` on `feature`, relative to the
/// entropy of the `target` labels.
///
/// Plain ID3 gain: the weighted partition entropies subtracted from the
/// base entropy. No gain-ratio normalization is applied.
pub fn gain(records: &[&Record], target: &str, feature: &str) -> f64 {
    let base = entropy(&attribute_values(records, target));
    let total = records.len() as f64;
    let mut remainder = 0.0;
    for value in distinct_values(records, feature) {
        let subset = split_on(records, feature, value);
        let weight = subset.len() as f64 / total;
        remainder += weight * entropy(&attribute_values(&subset, target));
    }
    base - remainder
}

/// The candidate feature with the highest information gain.
///
/// The first feature, in the order given, to achieve the maximum wins any
/// tie; no secondary criterion is applied. Callers rely on this for
/// reproducible trees. `None` only when `features` is empty.
pub fn max_gain<'a>(records: &[&Record], target: &str, features: &'a [String]) -> Option<&'a str> {
    let mut best: Option<(&'a str, f64)> = None;
    for feature in features {
        let g = gain(records, target, feature);
        match best {
            Some((_, top)) if g <= top => {}
            _ => best = Some((feature, g)),
        }
    }
    best.map(|(feature, _)| feature)
}
