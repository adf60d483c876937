//! Dataset loading and the start-up catalog.

mod catalog;
mod csv_reader;

pub use catalog::DatasetCatalog;
pub use csv_reader::{read_dataset, read_dataset_from_path};
