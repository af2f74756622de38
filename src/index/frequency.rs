//! Ordered frequency tables.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

/// Occurrence counts, ordered by descending count.
///
/// Ties keep first-occurrence order: keys are counted in traversal order and
/// then stably sorted, so the output is deterministic for a given corpus.
/// Serializes as a JSON object in that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: Vec<(String, usize)>,
}

impl FrequencyTable {
    /// Count every key yielded by `keys`.
    pub fn count<I>(keys: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut positions: HashMap<String, usize> = HashMap::new();
        let mut counts: Vec<(String, usize)> = Vec::new();

        for key in keys {
            match positions.get(&key) {
                Some(&pos) => counts[pos].1 += 1,
                None => {
                    positions.insert(key.clone(), counts.len());
                    counts.push((key, 1));
                }
            }
        }

        counts.sort_by(|a, b| b.1.cmp(&a.1));
        Self { counts }
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.counts.len()
    }
}

/// Lookups used by callers inspecting a built table.
#[allow(unused)]
impl FrequencyTable {
    pub fn get(&self, key: &str) -> Option<usize> {
        self.counts
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, count)| *count)
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, count)| count).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(k, count)| (k.as_str(), *count))
    }
}

impl Serialize for FrequencyTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.counts.len()))?;
        for (key, count) in &self.counts {
            map.serialize_entry(key, count)?;
        }
        map.end()
    }
}
