//! Data
//!
//! Value and record types for categorical tabular datasets, along with the
//! column helpers used by the tree builder.
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// A discrete attribute value.
///
/// Values compare by equality only; no ordering between them is ever used.
/// The serialized form is a bare JSON scalar, so persisted models stay
/// readable by other tooling.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Str(String),
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Str(s) => write!(f, "{}", s),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

/// A single record: a mapping from attribute name to discrete value.
/// The attribute set includes the target attribute.
pub type Record = HashMap<String, Value>;

/// Build a [`Record`] from `key => value` pairs.
#[macro_export]
macro_rules! record {
    ($($key:expr => $value:expr),* $(,)?) => {{
        let mut record = $crate::data::Record::new();
        $(record.insert(($key).to_string(), $crate::data::Value::from($value));)*
        record
    }};
}

/// All readings of `attribute` across `records`, in dataset order.
/// Records without the attribute contribute nothing.
pub fn attribute_values<'a>(records: &[&'a Record], attribute: &str) -> Vec<&'a Value> {
    records.iter().filter_map(|record| record.get(attribute)).collect()
}

/// Distinct readings of `attribute` across `records`, in first-occurrence
/// order. The ordering is load-bearing: it fixes the edge order of the
/// built tree and with it the unseen-value fallback in prediction.
pub fn distinct_values<'a>(records: &[&'a Record], attribute: &str) -> Vec<&'a Value> {
    let mut seen: Vec<&Value> = Vec::new();
    for record in records {
        if let Some(value) = record.get(attribute) {
            if !seen.contains(&value) {
                seen.push(value);
            }
        }
    }
    seen
}

/// The subset of `records` where `attribute` reads exactly `value`.
pub fn split_on<'a>(records: &[&'a Record], attribute: &str, value: &Value) -> Vec<&'a Record> {
    records
        .iter()
        .filter(|record| record.get(attribute) == Some(value))
        .copied()
        .collect()
}

/// The classic 14-row weather table used across the test suite.
#[cfg(test)]
pub(crate) fn weather_dataset() -> Vec<Record> {
    let rows = [
        ("Sunny", "High", false, "No"),
        ("Sunny", "High", true, "No"),
        ("Overcast", "High", false, "Yes"),
        ("Rain", "High", false, "Yes"),
        ("Rain", "Normal", false, "Yes"),
        ("Rain", "Normal", true, "No"),
        ("Overcast", "Normal", true, "Yes"),
        ("Sunny", "High", false, "No"),
        ("Sunny", "Normal", false, "Yes"),
        ("Rain", "Normal", false, "Yes"),
        ("Sunny", "Normal", true, "Yes"),
        ("Overcast", "High", true, "Yes"),
        ("Overcast", "Normal", false, "Yes"),
        ("Rain", "High", true, "No"),
    ];
    rows.iter()
        .map(|(outlook, humidity, windy, play)| {
            record! {
                "outlook" => *outlook,
                "humidity" => *humidity,
                "windy" => *windy,
                "play" => *play,
            }
        })
        .collect()
}
