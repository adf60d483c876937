use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::Dataset;
use crate::error::{BindError, BindResult};

/// The datasets one dashboard session works with, keyed by name.
///
/// A catalog is filled once during explicit start-up and then only read;
/// render calls borrow it immutably. Iteration order is insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetCatalog {
    datasets: IndexMap<String, Dataset>,
}

impl DatasetCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a dataset under its own name.
    ///
    /// Registering the same name twice is a start-up bug, not a request to
    /// replace, so it fails instead of silently clobbering.
    pub fn insert(&mut self, dataset: Dataset) -> BindResult<()> {
        if self.datasets.contains_key(dataset.name()) {
            return Err(BindError::InvalidData(format!(
                "catalog already holds a dataset named `{}`",
                dataset.name()
            )));
        }
        debug!(dataset = dataset.name(), rows = dataset.row_count(), "registered dataset");
        self.datasets.insert(dataset.name().to_owned(), dataset);
        Ok(())
    }

    pub fn get(&self, name: &str) -> BindResult<&Dataset> {
        self.datasets
            .get(name)
            .ok_or_else(|| BindError::UnknownDataset(name.to_owned()))
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.datasets.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.datasets.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.datasets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }
}
