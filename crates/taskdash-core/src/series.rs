//! Category counts and the ordered series built from them

use crate::ColorToken;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Errors raised by the validating series constructors
#[derive(Debug, Error)]
pub enum SeriesError {
    #[error("duplicate category key `{0}`")]
    DuplicateKey(String),
    #[error("invalid series payload: {0}")]
    Json(#[from] serde_json::Error),
}

/// One named, non-negative count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDatum {
    pub key: String,
    #[serde(deserialize_with = "clamp_count")]
    pub value: u64,
    pub color: ColorToken,
}

impl CategoryDatum {
    /// Create a datum; negative counts are clamped to zero
    pub fn new(key: impl Into<String>, value: i64, color: impl Into<ColorToken>) -> Self {
        Self {
            key: key.into(),
            value: value.max(0) as u64,
            color: color.into(),
        }
    }
}

fn clamp_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = i64::deserialize(deserializer)?;
    Ok(raw.max(0) as u64)
}

/// Ordered, immutable list of categories.
///
/// Order is significant: it fixes draw order, legend order and, for arc
/// modes, angular position. A new `Series` is built on every data refresh.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Series {
    entries: Vec<CategoryDatum>,
}

impl Series {
    /// Build from already-validated entries, keeping their order
    pub fn new(entries: Vec<CategoryDatum>) -> Self {
        Self { entries }
    }

    /// Build from entries, rejecting duplicate keys
    pub fn try_new(entries: Vec<CategoryDatum>) -> Result<Self, SeriesError> {
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !seen.insert(entry.key.as_str()) {
                return Err(SeriesError::DuplicateKey(entry.key.clone()));
            }
        }
        Ok(Self::new(entries))
    }

    /// Parse a JSON array of `{ "key", "value", "color" }` objects
    pub fn from_json(payload: &str) -> Result<Self, SeriesError> {
        let entries: Vec<CategoryDatum> = serde_json::from_str(payload)?;
        Self::try_new(entries)
    }

    pub fn entries(&self) -> &[CategoryDatum] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CategoryDatum> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, widened so any number of `u64` counts sums exactly
    pub fn total(&self) -> u128 {
        self.entries.iter().map(|e| u128::from(e.value)).sum()
    }

    /// Largest single count, never below 1 so linear extents stay finite
    pub fn max_value(&self) -> u64 {
        self.entries.iter().map(|e| e.value).max().unwrap_or(0).max(1)
    }

    /// True when there is nothing to apportion (total is zero)
    pub fn is_empty_total(&self) -> bool {
        self.total() == 0
    }

    pub fn get(&self, key: &str) -> Option<&CategoryDatum> {
        self.entries.iter().find(|e| e.key == key)
    }
}

impl FromIterator<CategoryDatum> for Series {
    fn from_iter<I: IntoIterator<Item = CategoryDatum>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a CategoryDatum;
    type IntoIter = std::slice::Iter<'a, CategoryDatum>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Series {
        Series::new(vec![
            CategoryDatum::new("pending", 3, "#7e57c2"),
            CategoryDatum::new("in_progress", 9, "#42a5f5"),
            CategoryDatum::new("done", 6, "#66bb6a"),
        ])
    }

    #[test]
    fn test_total_and_max() {
        let series = sample();
        assert_eq!(series.total(), 18);
        assert_eq!(series.max_value(), 9);
        assert!(!series.is_empty_total());
    }

    #[test]
    fn test_total_does_not_saturate() {
        let series = Series::new(vec![
            CategoryDatum::new("a", i64::MAX, "red"),
            CategoryDatum::new("b", i64::MAX, "green"),
            CategoryDatum::new("c", i64::MAX, "blue"),
        ]);
        assert_eq!(series.total(), 3 * i64::MAX as u128);
    }

    #[test]
    fn test_all_zero_max_defaults_to_one() {
        let series = Series::new(vec![
            CategoryDatum::new("a", 0, "red"),
            CategoryDatum::new("b", 0, "green"),
            CategoryDatum::new("c", 0, "blue"),
        ]);
        assert_eq!(series.total(), 0);
        assert_eq!(series.max_value(), 1);
        assert!(series.is_empty_total());
        assert_eq!(Series::default().max_value(), 1);
    }

    #[test]
    fn test_negative_values_clamped() {
        let datum = CategoryDatum::new("a", -4, "red");
        assert_eq!(datum.value, 0);
    }

    #[test]
    fn test_duplicate_keys_rejected() {
        let result = Series::try_new(vec![
            CategoryDatum::new("a", 1, "red"),
            CategoryDatum::new("a", 2, "green"),
        ]);
        assert!(matches!(result, Err(SeriesError::DuplicateKey(k)) if k == "a"));
    }

    #[test]
    fn test_from_json_clamps_and_keeps_order() {
        let payload = r#"[
            {"key": "done", "value": 5, "color": "green"},
            {"key": "pending", "value": -2, "color": "purple"},
            {"key": "in_progress", "value": 2, "color": "blue"}
        ]"#;
        let series = Series::from_json(payload).unwrap();
        let keys: Vec<&str> = series.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, ["done", "pending", "in_progress"]);
        assert_eq!(series.get("pending").map(|e| e.value), Some(0));
        assert_eq!(series.total(), 7);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(Series::from_json("{"), Err(SeriesError::Json(_))));
    }
}
