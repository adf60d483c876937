use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::core::{ColorMap, Dataset, SelectionState, Value};
use crate::error::BindResult;
use crate::render::{FacetPanel, RenderedChart, RenderedSeries, SeriesPoint};

use super::ChartSpec;
use super::plan::BindPlan;

/// Selection-filtered chart binder.
///
/// The binder holds color configuration and nothing else; `bind` is a pure
/// function of its arguments plus that configuration. No state survives
/// between calls, so equal inputs always produce equal descriptors and a
/// superseded call's output can simply be dropped by the host.
#[derive(Debug, Clone, Default)]
pub struct ChartBinder {
    colors: ColorMap,
}

impl ChartBinder {
    #[must_use]
    pub fn new(colors: ColorMap) -> Self {
        Self { colors }
    }

    #[must_use]
    pub fn colors(&self) -> &ColorMap {
        &self.colors
    }

    /// Binds one chart from a dataset, the current selection, and a spec.
    ///
    /// Rows whose category cell is not in the selection are dropped first;
    /// the survivors are partitioned into facets and grouped into series,
    /// both in first-encountered order. An empty selection, or one whose
    /// keys never occur in the data, yields a valid chart with zero series
    /// rather than an error or a show-everything fallback. Rows with an
    /// empty facet cell land in an untitled panel, and points with a null
    /// or non-finite x or y are left out of their series as gaps.
    pub fn bind(
        &self,
        dataset: &Dataset,
        selection: &SelectionState,
        spec: &ChartSpec,
    ) -> BindResult<RenderedChart> {
        self.colors.validate()?;
        let plan = BindPlan::resolve(dataset, spec)?;

        let picked: Vec<usize> = (0..dataset.row_count())
            .filter(|&row| {
                dataset
                    .value(row, plan.color)
                    .and_then(Value::as_text)
                    .is_some_and(|key| selection.contains(key))
            })
            .collect();
        trace!(
            dataset = dataset.name(),
            rows = dataset.row_count(),
            picked = picked.len(),
            "filtered rows by selection"
        );

        let mut partitions: IndexMap<Option<String>, Vec<usize>> = IndexMap::new();
        for &row in &picked {
            let facet_key = plan
                .facet
                .and_then(|field| dataset.value(row, field))
                .and_then(Value::as_text)
                .map(str::to_owned);
            partitions.entry(facet_key).or_default().push(row);
        }

        let mut assigner = self.colors.assigner();
        let columns = spec.facet_columns;
        let mut facets = Vec::with_capacity(partitions.len());
        for (facet_index, (facet_key, rows)) in partitions.into_iter().enumerate() {
            let mut groups: IndexMap<(String, Option<String>), Vec<SeriesPoint>> = IndexMap::new();
            for row in rows {
                let Some(category) = dataset.value(row, plan.color).and_then(Value::as_text) else {
                    continue;
                };
                let group = plan
                    .line_group
                    .and_then(|field| dataset.value(row, field))
                    .and_then(Value::as_text)
                    .map(str::to_owned);
                let points = groups.entry((category.to_owned(), group)).or_default();
                let x = dataset.value(row, plan.x).and_then(Value::as_f64);
                let y = dataset.value(row, plan.y).and_then(Value::as_f64);
                if let (Some(x), Some(y)) = (x, y) {
                    if x.is_finite() && y.is_finite() {
                        points.push(SeriesPoint::new(x, y));
                    }
                }
            }
            let series = groups
                .into_iter()
                .map(|((category, group), points)| {
                    let color = assigner.resolve(&category);
                    RenderedSeries {
                        category,
                        group,
                        color,
                        points,
                    }
                })
                .collect();
            let facet_index = facet_index as u32;
            facets.push(FacetPanel {
                key: facet_key,
                grid_row: facet_index / columns,
                grid_column: facet_index % columns,
                series,
            });
        }

        let chart = RenderedChart {
            title: spec.title.clone(),
            x_label: spec.x_axis_label().to_owned(),
            y_label: spec.y_axis_label().to_owned(),
            mark: spec.mark,
            opacity: spec.opacity,
            facet_columns: columns,
            sizing: spec.sizing,
            facets,
        };
        debug!(
            dataset = dataset.name(),
            title = %chart.title,
            facets = chart.facets.len(),
            series = chart.series_count(),
            "bound chart"
        );
        Ok(chart)
    }
}
