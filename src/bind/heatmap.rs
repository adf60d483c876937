use serde::{Deserialize, Serialize};

use crate::error::BindResult;
use crate::render::{ChartSizing, HeatmapChart};
use crate::stats::CorrelationMatrix;

/// Presentation metadata for a correlation heatmap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapSpec {
    #[serde(default)]
    pub title: String,
    #[serde(default = "default_show_values")]
    pub show_values: bool,
    #[serde(default)]
    pub sizing: ChartSizing,
}

impl Default for HeatmapSpec {
    fn default() -> Self {
        Self {
            title: String::new(),
            show_values: default_show_values(),
            sizing: ChartSizing::default(),
        }
    }
}

impl HeatmapSpec {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_show_values(mut self, show_values: bool) -> Self {
        self.show_values = show_values;
        self
    }

    #[must_use]
    pub fn with_sizing(mut self, sizing: ChartSizing) -> Self {
        self.sizing = sizing;
        self
    }
}

/// Wraps a correlation matrix into a renderable heatmap descriptor.
///
/// Cells stay `None` where the matrix had no defined coefficient, so a
/// surface can paint them as gaps instead of inventing a zero.
pub fn bind_heatmap(matrix: &CorrelationMatrix, spec: &HeatmapSpec) -> BindResult<HeatmapChart> {
    let chart = HeatmapChart {
        title: spec.title.clone(),
        labels: matrix.fields().to_vec(),
        values: matrix.rows().to_vec(),
        show_values: spec.show_values,
        sizing: spec.sizing,
    };
    chart.validate()?;
    Ok(chart)
}

fn default_show_values() -> bool {
    true
}
