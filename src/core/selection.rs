use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Set of category keys the user currently has selected.
///
/// The host UI layer owns this value and passes it by reference into every
/// bind call. Keys that match nothing in a dataset filter to zero rows; they
/// are never an error. Equality is set equality, independent of insertion
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    keys: IndexSet<String>,
}

impl SelectionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_keys<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns `true` when the key was not already selected.
    pub fn insert(&mut self, key: impl Into<String>) -> bool {
        self.keys.insert(key.into())
    }

    /// Returns `true` when the key was present.
    pub fn remove(&mut self, key: &str) -> bool {
        self.keys.shift_remove(key)
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::SelectionState;

    #[test]
    fn selection_equality_ignores_insertion_order() {
        let forward = SelectionState::from_keys(["Netherlands", "Sweden"]);
        let backward = SelectionState::from_keys(["Sweden", "Netherlands"]);
        assert_eq!(forward, backward);
    }

    #[test]
    fn selection_insert_and_remove_report_membership_change() {
        let mut selection = SelectionState::new();
        assert!(selection.insert("Belgium"));
        assert!(!selection.insert("Belgium"));
        assert!(selection.remove("Belgium"));
        assert!(!selection.remove("Belgium"));
        assert!(selection.is_empty());
    }
}
