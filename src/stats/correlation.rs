use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Dataset, FieldKind};
use crate::error::BindResult;

/// Pairwise Pearson correlation over a set of numeric fields.
///
/// The matrix is square and symmetric, ordered like the requested fields.
/// A cell is `None` when the coefficient is undefined: fewer than two
/// complete pairs, or zero variance on either side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationMatrix {
    fields: Vec<String>,
    values: Vec<Vec<Option<f64>>>,
}

impl CorrelationMatrix {
    #[must_use]
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<Option<f64>>] {
        &self.values
    }

    #[must_use]
    pub fn value(&self, row: usize, column: usize) -> Option<f64> {
        self.values.get(row)?.get(column).copied().flatten()
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.fields.len()
    }
}

/// Computes the correlation matrix for `fields` over `dataset`.
///
/// Rows with a null on either side of a pair are dropped for that cell
/// only (pairwise-complete observations), so one gappy field does not
/// blank the whole matrix.
pub fn correlation_matrix(dataset: &Dataset, fields: &[&str]) -> BindResult<CorrelationMatrix> {
    let columns = fields
        .iter()
        .map(|name| {
            let index =
                dataset.require_field_of_kind(name, FieldKind::is_numeric, FieldKind::Float)?;
            let samples: Vec<Option<f64>> = dataset
                .rows()
                .map(|row| row[index].as_f64().filter(|value| value.is_finite()))
                .collect();
            Ok(samples)
        })
        .collect::<BindResult<Vec<_>>>()?;

    let size = columns.len();
    let mut values = vec![vec![None; size]; size];
    for i in 0..size {
        for j in i..size {
            let r = pearson(&columns[i], &columns[j]);
            values[i][j] = r;
            values[j][i] = r;
        }
    }
    debug!(
        dataset = dataset.name(),
        fields = size,
        "computed correlation matrix"
    );
    Ok(CorrelationMatrix {
        fields: fields.iter().map(|name| (*name).to_owned()).collect(),
        values,
    })
}

/// Pearson coefficient over the pairwise-complete samples of two columns.
fn pearson(left: &[Option<f64>], right: &[Option<f64>]) -> Option<f64> {
    let pairs: Vec<(f64, f64)> = left
        .iter()
        .zip(right)
        .filter_map(|(a, b)| Some(((*a)?, (*b)?)))
        .collect();
    if pairs.len() < 2 {
        return None;
    }
    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|(_, y)| y).sum::<f64>() / n;
    let mut covariance = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in &pairs {
        let dx = x - mean_x;
        let dy = y - mean_y;
        covariance += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }
    if var_x == 0.0 || var_y == 0.0 {
        return None;
    }
    Some((covariance / (var_x * var_y).sqrt()).clamp(-1.0, 1.0))
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::core::{Field, Schema, Value};

    fn dataset(rows: Vec<Vec<Value>>) -> Dataset {
        let schema = Schema::new(vec![
            Field::new("a", FieldKind::Float),
            Field::new("b", FieldKind::Float),
        ])
        .expect("schema");
        Dataset::new("pairs", schema, rows).expect("dataset")
    }

    #[test]
    fn perfectly_linear_fields_correlate_to_one() {
        let data = dataset(vec![
            vec![Value::Float(1.0), Value::Float(2.0)],
            vec![Value::Float(2.0), Value::Float(4.0)],
            vec![Value::Float(3.0), Value::Float(6.0)],
        ]);
        let matrix = correlation_matrix(&data, &["a", "b"]).expect("matrix");
        assert_relative_eq!(matrix.value(0, 1).expect("r"), 1.0);
        assert_relative_eq!(matrix.value(0, 0).expect("diagonal"), 1.0);
    }

    #[test]
    fn anticorrelated_fields_hit_minus_one() {
        let data = dataset(vec![
            vec![Value::Float(1.0), Value::Float(3.0)],
            vec![Value::Float(2.0), Value::Float(2.0)],
            vec![Value::Float(3.0), Value::Float(1.0)],
        ]);
        let matrix = correlation_matrix(&data, &["a", "b"]).expect("matrix");
        assert_relative_eq!(matrix.value(1, 0).expect("r"), -1.0);
    }

    #[test]
    fn constant_field_yields_undefined_cells() {
        let data = dataset(vec![
            vec![Value::Float(5.0), Value::Float(1.0)],
            vec![Value::Float(5.0), Value::Float(2.0)],
        ]);
        let matrix = correlation_matrix(&data, &["a", "b"]).expect("matrix");
        assert_eq!(matrix.value(0, 1), None);
        assert_eq!(matrix.value(0, 0), None);
        assert_relative_eq!(matrix.value(1, 1).expect("diagonal"), 1.0);
    }

    #[test]
    fn nulls_drop_pairs_not_rows_elsewhere() {
        let data = dataset(vec![
            vec![Value::Float(1.0), Value::Null],
            vec![Value::Float(2.0), Value::Float(2.0)],
            vec![Value::Float(3.0), Value::Float(3.0)],
        ]);
        let matrix = correlation_matrix(&data, &["a", "b"]).expect("matrix");
        assert_relative_eq!(matrix.value(0, 1).expect("r"), 1.0);
    }
}
