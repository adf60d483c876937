use serde::{Deserialize, Serialize};

use crate::error::{BindError, BindResult};
use crate::render::{RenderedSeries, SeriesMark};

/// Pixel sizing hints forwarded verbatim to the rendering surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSizing {
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl ChartSizing {
    #[must_use]
    pub const fn new(width: Option<u32>, height: Option<u32>) -> Self {
        Self { width, height }
    }
}

/// One sub-plot in the wrapped facet grid.
///
/// `key` is `None` for the single implicit panel of an unfaceted chart, and
/// for the untitled panel collecting rows whose facet cell is null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacetPanel {
    pub key: Option<String>,
    pub grid_row: u32,
    pub grid_column: u32,
    pub series: Vec<RenderedSeries>,
}

impl FacetPanel {
    /// Total points across the panel's series.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|series| series.points.len()).sum()
    }
}

/// Surface-agnostic descriptor for one bound chart.
///
/// A rendered chart is a pure function of (dataset, selection, spec): it is
/// recreated whole on every bind call and compared by deep equality. A chart
/// with zero series is valid and must be displayed as empty, not rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub mark: SeriesMark,
    pub opacity: f64,
    pub facet_columns: u32,
    pub sizing: ChartSizing,
    pub facets: Vec<FacetPanel>,
}

impl RenderedChart {
    #[must_use]
    pub fn series_count(&self) -> usize {
        self.facets.iter().map(|facet| facet.series.len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series_count() == 0
    }

    /// Looks up a facet panel by its key.
    #[must_use]
    pub fn facet(&self, key: &str) -> Option<&FacetPanel> {
        self.facets
            .iter()
            .find(|facet| facet.key.as_deref() == Some(key))
    }

    /// All series across all facets, in facet order.
    pub fn all_series(&self) -> impl Iterator<Item = &RenderedSeries> {
        self.facets.iter().flat_map(|facet| facet.series.iter())
    }

    pub fn validate(&self) -> BindResult<()> {
        if self.facet_columns == 0 {
            return Err(BindError::InvalidData(
                "facet grid must have at least one column".to_owned(),
            ));
        }
        if !self.opacity.is_finite() || !(0.0..=1.0).contains(&self.opacity) {
            return Err(BindError::InvalidData(
                "chart opacity must be finite and in [0, 1]".to_owned(),
            ));
        }
        for facet in &self.facets {
            if facet.grid_column >= self.facet_columns {
                return Err(BindError::InvalidData(format!(
                    "facet column {} exceeds grid width {}",
                    facet.grid_column, self.facet_columns
                )));
            }
            for series in &facet.series {
                series.validate()?;
            }
        }
        Ok(())
    }
}
