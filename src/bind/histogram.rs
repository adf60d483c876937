use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Color, Dataset, FieldKind};
use crate::error::{BindError, BindResult};
use crate::render::{ChartSizing, HistogramBin, HistogramChart};

use super::ChartBinder;

/// Declarative description of a single-field distribution chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramSpec {
    pub field: String,
    #[serde(default = "default_bins")]
    pub bins: u32,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub x_label: Option<String>,
    /// Explicit bar color; when unset the binder's color map resolves the
    /// field name like any other category key.
    #[serde(default)]
    pub color: Option<Color>,
    #[serde(default)]
    pub sizing: ChartSizing,
}

impl HistogramSpec {
    #[must_use]
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            bins: default_bins(),
            title: String::new(),
            x_label: None,
            color: None,
            sizing: ChartSizing::default(),
        }
    }

    #[must_use]
    pub fn with_bins(mut self, bins: u32) -> Self {
        self.bins = bins;
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_x_label(mut self, x_label: impl Into<String>) -> Self {
        self.x_label = Some(x_label.into());
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    #[must_use]
    pub fn with_sizing(mut self, sizing: ChartSizing) -> Self {
        self.sizing = sizing;
        self
    }

    pub fn validate(&self) -> BindResult<()> {
        if self.field.is_empty() {
            return Err(BindError::InvalidData(
                "histogram spec field must not be empty".to_owned(),
            ));
        }
        if self.bins == 0 {
            return Err(BindError::InvalidData(
                "histogram spec must ask for at least one bin".to_owned(),
            ));
        }
        Ok(())
    }
}

impl ChartBinder {
    /// Bins one numeric field into an equal-width histogram.
    ///
    /// Null cells are skipped. An empty or all-null field yields a chart
    /// with zero bins; an all-equal field yields one unit-width bin around
    /// the value. The last bin is closed so the maximum lands inside it.
    pub fn bind_histogram(
        &self,
        dataset: &Dataset,
        spec: &HistogramSpec,
    ) -> BindResult<HistogramChart> {
        spec.validate()?;
        self.colors().validate()?;
        let field =
            dataset.require_field_of_kind(&spec.field, FieldKind::is_numeric, FieldKind::Float)?;

        let values: Vec<f64> = dataset
            .rows()
            .filter_map(|row| row[field].as_f64())
            .filter(|value| value.is_finite())
            .collect();
        let color = match spec.color {
            Some(color) => color,
            None => self.colors().assigner().resolve(&spec.field),
        };
        let mut chart = HistogramChart {
            title: spec.title.clone(),
            x_label: spec.x_label.clone().unwrap_or_else(|| spec.field.clone()),
            y_label: "count".to_owned(),
            color,
            sizing: spec.sizing,
            bins: Vec::new(),
        };
        if values.is_empty() {
            debug!(dataset = dataset.name(), field = %spec.field, "histogram over empty field");
            return Ok(chart);
        }

        let min = values
            .iter()
            .copied()
            .min_by_key(|value| OrderedFloat(*value))
            .unwrap_or_default();
        let max = values
            .iter()
            .copied()
            .max_by_key(|value| OrderedFloat(*value))
            .unwrap_or_default();
        if min == max {
            // Degenerate span: a single unit-width bin centered on the value.
            chart.bins.push(HistogramBin {
                x_start: min - 0.5,
                x_end: min + 0.5,
                count: values.len() as u64,
            });
            return Ok(chart);
        }

        let bin_count = spec.bins as usize;
        let width = (max - min) / spec.bins as f64;
        let mut counts = vec![0_u64; bin_count];
        for value in &values {
            let offset = ((value - min) / width).floor() as usize;
            counts[offset.min(bin_count - 1)] += 1;
        }
        chart.bins = counts
            .into_iter()
            .enumerate()
            .map(|(index, count)| HistogramBin {
                x_start: min + index as f64 * width,
                x_end: min + (index + 1) as f64 * width,
                count,
            })
            .collect();
        debug!(
            dataset = dataset.name(),
            field = %spec.field,
            samples = values.len(),
            bins = chart.bins.len(),
            "bound histogram"
        );
        Ok(chart)
    }
}

fn default_bins() -> u32 {
    40
}
