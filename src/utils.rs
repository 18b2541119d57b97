//! Utilities
use crate::data::Value;
use hashbrown::HashMap;

/// Round a float to `precision` decimal places.
pub fn precision_round(n: f64, precision: i32) -> f64 {
    let p = (10.0_f64).powi(precision);
    (n * p).round() / p
}

/// Majority vote over `values`. Ties go to the first value to reach the
/// maximum count while scanning in order. Returns `None` for empty input.
pub fn majority_value<'a>(values: &[&'a Value]) -> Option<&'a Value> {
    let mut counts: HashMap<&Value, usize> = HashMap::new();
    let mut best: Option<(&'a Value, usize)> = None;
    for value in values {
        let count = {
            let entry = counts.entry(*value).or_insert(0);
            *entry += 1;
            *entry
        };
        match best {
            Some((_, top)) if count <= top => {}
            _ => best = Some((*value, count)),
        }
    }
    best.map(|(value, _)| value)
}
