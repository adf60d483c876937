use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::{Dataset, FieldKind};
use crate::error::BindResult;

/// Describe-style numeric summary of one field.
///
/// Statistics that need more samples than the field has stay `None`: every
/// aggregate needs at least one, the sample standard deviation at least two.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSummary {
    pub field: String,
    pub count: u64,
    pub mean: Option<f64>,
    pub std_dev: Option<f64>,
    pub min: Option<f64>,
    pub q25: Option<f64>,
    pub median: Option<f64>,
    pub q75: Option<f64>,
    pub max: Option<f64>,
}

/// Summarizes numeric fields for a report overview table.
///
/// Null cells are skipped per field, so `count` is the number of usable
/// samples, not the row count. Quantiles interpolate linearly between
/// closest ranks.
pub fn summarize(dataset: &Dataset, fields: &[&str]) -> BindResult<Vec<FieldSummary>> {
    fields
        .iter()
        .map(|name| {
            let index =
                dataset.require_field_of_kind(name, FieldKind::is_numeric, FieldKind::Float)?;
            let mut values: Vec<f64> = dataset
                .rows()
                .filter_map(|row| row[index].as_f64())
                .filter(|value| value.is_finite())
                .collect();
            values.sort_by_key(|value| OrderedFloat(*value));
            Ok(summarize_sorted(name, &values))
        })
        .collect()
}

fn summarize_sorted(field: &str, sorted: &[f64]) -> FieldSummary {
    let count = sorted.len() as u64;
    let mean = (!sorted.is_empty()).then(|| sorted.iter().sum::<f64>() / sorted.len() as f64);
    let std_dev = match (mean, sorted.len()) {
        (Some(mean), n) if n >= 2 => {
            let sum_sq: f64 = sorted.iter().map(|value| (value - mean).powi(2)).sum();
            Some((sum_sq / (n - 1) as f64).sqrt())
        }
        _ => None,
    };
    FieldSummary {
        field: field.to_owned(),
        count,
        mean,
        std_dev,
        min: sorted.first().copied(),
        q25: quantile(sorted, 0.25),
        median: quantile(sorted, 0.5),
        q75: quantile(sorted, 0.75),
        max: sorted.last().copied(),
    }
}

/// Linear-interpolation quantile over an ascending slice.
fn quantile(sorted: &[f64], q: f64) -> Option<f64> {
    let last = sorted.len().checked_sub(1)?;
    let rank = q * last as f64;
    let below = rank.floor() as usize;
    let above = rank.ceil() as usize;
    let fraction = rank - below as f64;
    Some(sorted[below] + (sorted[above] - sorted[below]) * fraction)
}
