//! Ordered in-memory movie registry.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::model::movie::{Locator, MovieEntry};

/// Mapping of movie name to locator, in insertion order.
///
/// Serializes as a flat JSON object. Insertion order is part of the contract: listings and
/// suggestions present movies in the order they were added, and saving a freshly loaded
/// registry writes the keys back in the same order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieRegistry {
    entries: IndexMap<String, Locator>,
}

impl MovieRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Movie names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Exact-key lookup. Use the name resolver for user input.
    pub fn get(&self, name: &str) -> Option<MovieEntry> {
        self.entries.get(name).map(|locator| MovieEntry {
            name: name.to_string(),
            locator: locator.clone(),
        })
    }

    /// Inserts or replaces an entry by exact key.
    ///
    /// A replaced key keeps its original position. Returns the previous locator, if any.
    pub fn insert(&mut self, name: String, locator: Locator) -> Option<Locator> {
        self.entries.insert(name, locator)
    }

    /// Removes an entry by exact key, keeping the order of the remaining entries.
    pub fn remove(&mut self, name: &str) -> Option<MovieEntry> {
        self.entries
            .shift_remove_entry(name)
            .map(|(name, locator)| MovieEntry { name, locator })
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for MovieRegistry {
    fn from_iter<T: IntoIterator<Item = (&'a str, &'a str)>>(iter: T) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(name, raw)| (name.to_string(), Locator::from(raw.to_string())))
                .collect(),
        }
    }
}
