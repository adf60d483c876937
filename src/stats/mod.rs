//! Descriptive statistics feeding overview tables and heatmaps.

mod correlation;
mod summary;

pub use correlation::{CorrelationMatrix, correlation_matrix};
pub use summary::{FieldSummary, summarize};
