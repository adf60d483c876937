use trellis_rs::bind::{ChartBinder, ChartSpec};
use trellis_rs::core::{Dataset, Field, FieldKind, Schema, SelectionState, Value};
use trellis_rs::error::BindError;

fn countries(names: &[&str]) -> Dataset {
    let schema = Schema::new(vec![
        Field::new("Year", FieldKind::Int),
        Field::new("Rate", FieldKind::Float),
        Field::new("Country", FieldKind::Text),
    ])
    .expect("schema");
    let rows = names
        .iter()
        .map(|name| {
            vec![
                Value::Int(2015),
                Value::Float(1.0),
                Value::Text((*name).to_owned()),
            ]
        })
        .collect();
    Dataset::new("countries", schema, rows).expect("dataset")
}

fn faceted() -> ChartSpec {
    ChartSpec::new("Year", "Rate", "Country").with_facet("Country")
}

#[test]
fn facets_wrap_row_major_at_the_column_limit() {
    let names = ["Netherlands", "Sweden", "Belgium", "Norway", "France"];
    let binder = ChartBinder::default();
    let chart = binder
        .bind(
            &countries(&names),
            &SelectionState::from_keys(names),
            &faceted(),
        )
        .expect("chart");

    let cells: Vec<(u32, u32)> = chart
        .facets
        .iter()
        .map(|facet| (facet.grid_row, facet.grid_column))
        .collect();
    assert_eq!(cells, vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1)]);
    chart.validate().expect("grid within bounds");
}

#[test]
fn single_column_grid_stacks_vertically() {
    let names = ["Netherlands", "Sweden", "Belgium"];
    let binder = ChartBinder::default();
    let chart = binder
        .bind(
            &countries(&names),
            &SelectionState::from_keys(names),
            &faceted().with_facet_columns(1),
        )
        .expect("chart");

    let rows: Vec<u32> = chart.facets.iter().map(|facet| facet.grid_row).collect();
    assert_eq!(rows, vec![0, 1, 2]);
    assert!(chart.facets.iter().all(|facet| facet.grid_column == 0));
}

#[test]
fn zero_facet_columns_is_rejected() {
    let binder = ChartBinder::default();
    let err = binder
        .bind(
            &countries(&["Netherlands"]),
            &SelectionState::from_keys(["Netherlands"]),
            &faceted().with_facet_columns(0),
        )
        .expect_err("must fail");
    assert!(matches!(err, BindError::InvalidData(_)));
}

#[test]
fn null_facet_cells_collect_into_an_untitled_panel() {
    let schema = Schema::new(vec![
        Field::new("Year", FieldKind::Int),
        Field::new("Rate", FieldKind::Float),
        Field::new("Country", FieldKind::Text),
        Field::new("Region", FieldKind::Text),
    ])
    .expect("schema");
    let dataset = Dataset::new(
        "regions",
        schema,
        vec![
            vec![
                Value::Int(2015),
                Value::Float(1.0),
                Value::Text("Norway".to_owned()),
                Value::Text("North".to_owned()),
            ],
            vec![
                Value::Int(2015),
                Value::Float(2.0),
                Value::Text("Norway".to_owned()),
                Value::Null,
            ],
        ],
    )
    .expect("dataset");

    let binder = ChartBinder::default();
    let chart = binder
        .bind(
            &dataset,
            &SelectionState::from_keys(["Norway"]),
            &ChartSpec::new("Year", "Rate", "Country").with_facet("Region"),
        )
        .expect("chart");

    assert_eq!(chart.facets.len(), 2);
    assert_eq!(chart.facets[0].key.as_deref(), Some("North"));
    assert_eq!(chart.facets[1].key, None);
    assert_eq!(chart.facets[1].series.len(), 1);
    assert_eq!(chart.facets[0].point_count(), 1);
    assert_eq!(chart.facets[1].point_count(), 1);
}

#[test]
fn facet_panels_appear_in_first_encounter_order() {
    let schema = Schema::new(vec![
        Field::new("Year", FieldKind::Int),
        Field::new("Rate", FieldKind::Float),
        Field::new("Country", FieldKind::Text),
    ])
    .expect("schema");
    let dataset = Dataset::new(
        "interleaved",
        schema,
        vec![
            vec![
                Value::Int(2014),
                Value::Float(1.0),
                Value::Text("Sweden".to_owned()),
            ],
            vec![
                Value::Int(2014),
                Value::Float(2.0),
                Value::Text("Belgium".to_owned()),
            ],
            vec![
                Value::Int(2015),
                Value::Float(3.0),
                Value::Text("Sweden".to_owned()),
            ],
        ],
    )
    .expect("dataset");

    let binder = ChartBinder::default();
    let chart = binder
        .bind(
            &dataset,
            &SelectionState::from_keys(["Belgium", "Sweden"]),
            &ChartSpec::new("Year", "Rate", "Country").with_facet("Country"),
        )
        .expect("chart");

    let keys: Vec<Option<&str>> = chart.facets.iter().map(|f| f.key.as_deref()).collect();
    assert_eq!(keys, vec![Some("Sweden"), Some("Belgium")]);
    let sweden = chart.facet("Sweden").expect("panel");
    assert_eq!(sweden.series[0].points.len(), 2);
}
