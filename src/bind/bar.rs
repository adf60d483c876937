use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Color, Dataset, FieldKind};
use crate::error::{BindError, BindResult};
use crate::render::{BarChart, BarGroup, BarValue, ChartSizing};

use super::ChartBinder;

/// Declarative description of a grouped bar chart.
///
/// One bar group per dataset row, one bar per measure field. Rows keep
/// dataset order, so ranked charts are produced by sorting the dataset
/// first with [`Dataset::sorted_by_float`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarSpec {
    pub category: String,
    pub measures: Vec<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub x_label: Option<String>,
    #[serde(default)]
    pub y_label: Option<String>,
    #[serde(default)]
    pub sizing: ChartSizing,
}

impl BarSpec {
    #[must_use]
    pub fn new(
        category: impl Into<String>,
        measures: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            category: category.into(),
            measures: measures.into_iter().map(Into::into).collect(),
            title: String::new(),
            x_label: None,
            y_label: None,
            sizing: ChartSizing::default(),
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_labels(mut self, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        self.x_label = Some(x_label.into());
        self.y_label = Some(y_label.into());
        self
    }

    #[must_use]
    pub fn with_sizing(mut self, sizing: ChartSizing) -> Self {
        self.sizing = sizing;
        self
    }

    pub fn validate(&self) -> BindResult<()> {
        if self.category.is_empty() {
            return Err(BindError::InvalidData(
                "bar spec category field must not be empty".to_owned(),
            ));
        }
        if self.measures.is_empty() {
            return Err(BindError::InvalidData(
                "bar spec must name at least one measure field".to_owned(),
            ));
        }
        if self.measures.iter().any(String::is_empty) {
            return Err(BindError::InvalidData(
                "bar spec measure fields must not be empty".to_owned(),
            ));
        }
        Ok(())
    }
}

impl ChartBinder {
    /// Binds a grouped bar chart over one label field and several measures.
    ///
    /// Measure colors resolve through the color map in declared order, so
    /// hosts pin them the same way they pin category colors. A null measure
    /// cell contributes no bar; a row with a null label is dropped whole.
    pub fn bind_bar(&self, dataset: &Dataset, spec: &BarSpec) -> BindResult<BarChart> {
        spec.validate()?;
        self.colors().validate()?;
        let category = dataset.require_field_of_kind(
            &spec.category,
            |kind| kind == FieldKind::Text,
            FieldKind::Text,
        )?;
        let measures = spec
            .measures
            .iter()
            .map(|name| {
                let index =
                    dataset.require_field_of_kind(name, FieldKind::is_numeric, FieldKind::Float)?;
                Ok((name.as_str(), index))
            })
            .collect::<BindResult<Vec<_>>>()?;

        let mut assigner = self.colors().assigner();
        let measure_colors: Vec<Color> = measures
            .iter()
            .map(|(name, _)| assigner.resolve(name))
            .collect();

        let mut groups = Vec::new();
        for row in dataset.rows() {
            let Some(label) = row[category].as_text() else {
                continue;
            };
            let bars = measures
                .iter()
                .zip(&measure_colors)
                .filter_map(|(&(name, index), &color)| {
                    let value = row[index].as_f64()?;
                    value.is_finite().then(|| BarValue {
                        measure: name.to_owned(),
                        value,
                        color,
                    })
                })
                .collect();
            groups.push(BarGroup {
                label: label.to_owned(),
                bars,
            });
        }

        let y_label = spec.y_label.clone().unwrap_or_else(|| {
            if let [only] = spec.measures.as_slice() {
                only.clone()
            } else {
                "value".to_owned()
            }
        });
        let chart = BarChart {
            title: spec.title.clone(),
            x_label: spec.x_label.clone().unwrap_or_else(|| spec.category.clone()),
            y_label,
            sizing: spec.sizing,
            groups,
        };
        debug!(
            dataset = dataset.name(),
            groups = chart.groups.len(),
            bars = chart.bar_count(),
            "bound bar chart"
        );
        Ok(chart)
    }
}
