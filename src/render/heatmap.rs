use serde::{Deserialize, Serialize};

use crate::error::{BindError, BindResult};
use crate::render::ChartSizing;

/// Square matrix heatmap descriptor, row-major.
///
/// `None` cells render blank (an undefined correlation, for example). Labels
/// apply to both axes in the same order as the value rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapChart {
    pub title: String,
    pub labels: Vec<String>,
    pub values: Vec<Vec<Option<f64>>>,
    pub show_values: bool,
    pub sizing: ChartSizing,
}

impl HeatmapChart {
    #[must_use]
    pub fn size(&self) -> usize {
        self.labels.len()
    }

    pub fn validate(&self) -> BindResult<()> {
        if self.values.len() != self.labels.len() {
            return Err(BindError::InvalidData(
                "heatmap row count must match label count".to_owned(),
            ));
        }
        for row in &self.values {
            if row.len() != self.labels.len() {
                return Err(BindError::InvalidData(
                    "heatmap rows must be square with the label count".to_owned(),
                ));
            }
            for cell in row.iter().flatten() {
                if !cell.is_finite() {
                    return Err(BindError::InvalidData(
                        "heatmap cells must be finite or empty".to_owned(),
                    ));
                }
            }
        }
        Ok(())
    }
}
