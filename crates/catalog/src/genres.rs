use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Lookup table from genre id to display name.
///
/// Fetched once per aggregation pass and never mutated afterwards. A missing
/// id yields no label, never an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenreTable(HashMap<i64, String>);

impl GenreTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn label(&self, id: i64) -> Option<&str> {
        self.0.get(&id).map(String::as_str)
    }

    /// Resolve a list of ids to the labels that are known, skipping the rest.
    pub fn labels(&self, ids: &[i64]) -> Vec<&str> {
        ids.iter().filter_map(|id| self.label(*id)).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(i64, String)> for GenreTable {
    fn from_iter<I: IntoIterator<Item = (i64, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> GenreTable {
        [(28, "액션"), (18, "드라마"), (878, "SF")]
            .into_iter()
            .map(|(id, name)| (id, name.to_string()))
            .collect()
    }

    #[test]
    fn label_lookup() {
        let t = table();
        assert_eq!(t.label(28), Some("액션"));
        assert_eq!(t.label(999), None);
    }

    #[test]
    fn labels_skip_unknown_ids() {
        let t = table();
        assert_eq!(t.labels(&[28, 999, 878]), vec!["액션", "SF"]);
    }
}
