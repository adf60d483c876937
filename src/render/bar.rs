use serde::{Deserialize, Serialize};

use crate::core::Color;
use crate::error::{BindError, BindResult};
use crate::render::ChartSizing;

/// One measure's bar within a category group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarValue {
    pub measure: String,
    pub value: f64,
    pub color: Color,
}

/// All bars sharing one category label. A single-measure chart has one bar
/// per group; multiple measures render side by side as grouped bars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarGroup {
    pub label: String,
    pub bars: Vec<BarValue>,
}

/// Descriptor for single- or grouped-measure bar charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub sizing: ChartSizing,
    pub groups: Vec<BarGroup>,
}

impl BarChart {
    #[must_use]
    pub fn bar_count(&self) -> usize {
        self.groups.iter().map(|group| group.bars.len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bar_count() == 0
    }

    pub fn validate(&self) -> BindResult<()> {
        for group in &self.groups {
            if group.label.is_empty() {
                return Err(BindError::InvalidData(
                    "bar group label must not be empty".to_owned(),
                ));
            }
            for bar in &group.bars {
                if bar.measure.is_empty() {
                    return Err(BindError::InvalidData(
                        "bar measure name must not be empty".to_owned(),
                    ));
                }
                if !bar.value.is_finite() {
                    return Err(BindError::InvalidData(format!(
                        "bar value for `{}` / `{}` must be finite",
                        group.label, bar.measure
                    )));
                }
                bar.color.validate()?;
            }
        }
        Ok(())
    }
}
