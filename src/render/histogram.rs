use serde::{Deserialize, Serialize};

use crate::core::Color;
use crate::error::{BindError, BindResult};
use crate::render::ChartSizing;

/// One equal-width bin. Bins are half-open `[x_start, x_end)` except the last
/// bin, which also admits values equal to its end.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub x_start: f64,
    pub x_end: f64,
    pub count: u64,
}

/// Descriptor for a single-field distribution chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub color: Color,
    pub sizing: ChartSizing,
    pub bins: Vec<HistogramBin>,
}

impl HistogramChart {
    /// Total sample count across all bins.
    #[must_use]
    pub fn total_count(&self) -> u64 {
        self.bins.iter().map(|bin| bin.count).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    pub fn validate(&self) -> BindResult<()> {
        self.color.validate()?;
        for bin in &self.bins {
            if !bin.x_start.is_finite() || !bin.x_end.is_finite() {
                return Err(BindError::InvalidData(
                    "histogram bin edges must be finite".to_owned(),
                ));
            }
            if bin.x_end < bin.x_start {
                return Err(BindError::InvalidData(
                    "histogram bin end must not precede its start".to_owned(),
                ));
            }
        }
        Ok(())
    }
}
