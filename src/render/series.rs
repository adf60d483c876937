use serde::{Deserialize, Serialize};

use crate::core::Color;
use crate::error::{BindError, BindResult};

/// Drawing mode for the series of a bound chart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeriesMark {
    #[default]
    Line,
    Points,
}

/// One (x, y) sample in data coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub x: f64,
    pub y: f64,
}

impl SeriesPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn validate(self) -> BindResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(BindError::InvalidData(
                "series point coordinates must be finite".to_owned(),
            ));
        }
        Ok(())
    }
}

/// One drawn trace, identified by a category and an optional secondary group.
///
/// The color is keyed by category alone; the group only separates line
/// identity within a facet (e.g. gender within a country panel).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedSeries {
    pub category: String,
    pub group: Option<String>,
    pub color: Color,
    pub points: Vec<SeriesPoint>,
}

impl RenderedSeries {
    pub fn validate(&self) -> BindResult<()> {
        if self.category.is_empty() {
            return Err(BindError::InvalidData(
                "series category must not be empty".to_owned(),
            ));
        }
        self.color.validate()?;
        for point in &self.points {
            point.validate()?;
        }
        Ok(())
    }
}
