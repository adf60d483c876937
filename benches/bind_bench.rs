use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use trellis_rs::bind::{ChartBinder, ChartSpec, HistogramSpec};
use trellis_rs::core::{Dataset, Field, FieldKind, Schema, SelectionState, Value};

const COUNTRIES: [&str; 6] = [
    "Netherlands",
    "Sweden",
    "Belgium",
    "Norway",
    "France",
    "Italy",
];

fn generated_dataset(rows_per_country: usize) -> Dataset {
    let schema = Schema::new(vec![
        Field::new("Year", FieldKind::Int),
        Field::new("Rate", FieldKind::Float),
        Field::new("Country", FieldKind::Text),
        Field::new("Gender", FieldKind::Text),
    ])
    .expect("schema");

    let mut rows = Vec::with_capacity(rows_per_country * COUNTRIES.len());
    for (country_index, country) in COUNTRIES.iter().enumerate() {
        for i in 0..rows_per_country {
            let year = 1960 + (i % 60) as i64;
            let rate = 70.0 + country_index as f64 + (i as f64 * 0.37).sin() * 5.0;
            let gender = if i % 2 == 0 { "female" } else { "male" };
            rows.push(vec![
                Value::Int(year),
                Value::Float(rate),
                Value::Text((*country).to_owned()),
                Value::Text(gender.to_owned()),
            ]);
        }
    }
    Dataset::new("generated", schema, rows).expect("dataset")
}

fn bench_faceted_bind_12k(c: &mut Criterion) {
    let dataset = generated_dataset(2_000);
    let binder = ChartBinder::default();
    let selection = SelectionState::from_keys(COUNTRIES);
    let spec = ChartSpec::new("Year", "Rate", "Country")
        .with_facet("Country")
        .with_line_group("Gender");

    c.bench_function("faceted_bind_12k", |b| {
        b.iter(|| {
            let _ = binder
                .bind(black_box(&dataset), black_box(&selection), black_box(&spec))
                .expect("bind should succeed");
        })
    });
}

fn bench_narrow_selection_bind_12k(c: &mut Criterion) {
    let dataset = generated_dataset(2_000);
    let binder = ChartBinder::default();
    let selection = SelectionState::from_keys(["Netherlands"]);
    let spec = ChartSpec::new("Year", "Rate", "Country").with_facet("Country");

    c.bench_function("narrow_selection_bind_12k", |b| {
        b.iter(|| {
            let _ = binder
                .bind(black_box(&dataset), black_box(&selection), black_box(&spec))
                .expect("bind should succeed");
        })
    });
}

fn bench_histogram_bind_12k(c: &mut Criterion) {
    let dataset = generated_dataset(2_000);
    let binder = ChartBinder::default();
    let spec = HistogramSpec::new("Rate");

    c.bench_function("histogram_bind_12k", |b| {
        b.iter(|| {
            let _ = binder
                .bind_histogram(black_box(&dataset), black_box(&spec))
                .expect("histogram should succeed");
        })
    });
}

fn bench_chart_json_contract_12k(c: &mut Criterion) {
    let dataset = generated_dataset(2_000);
    let binder = ChartBinder::default();
    let selection = SelectionState::from_keys(COUNTRIES);
    let spec = ChartSpec::new("Year", "Rate", "Country").with_facet("Country");
    let chart = binder
        .bind(&dataset, &selection, &spec)
        .expect("bind should succeed");

    c.bench_function("chart_json_contract_12k", |b| {
        b.iter(|| {
            let _ = black_box(&chart)
                .to_json_contract_v1_pretty()
                .expect("contract json should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_faceted_bind_12k,
    bench_narrow_selection_bind_12k,
    bench_histogram_bind_12k,
    bench_chart_json_contract_12k
);
criterion_main!(benches);
