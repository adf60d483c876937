use std::collections::HashMap;

use proptest::prelude::*;
use proptest::sample::subsequence;

use trellis_rs::bind::{ChartBinder, ChartSpec};
use trellis_rs::core::{Color, ColorMap, Dataset, Field, FieldKind, Schema, SelectionState, Value};
use trellis_rs::render::RenderedChart;

const COUNTRIES: [&str; 6] = [
    "Netherlands",
    "Sweden",
    "Belgium",
    "Norway",
    "France",
    "Italy",
];

fn dataset(rows: &[(i64, f64, usize)]) -> Dataset {
    let schema = Schema::new(vec![
        Field::new("Year", FieldKind::Int),
        Field::new("Rate", FieldKind::Float),
        Field::new("Country", FieldKind::Text),
    ])
    .expect("schema");
    let rows = rows
        .iter()
        .map(|&(year, rate, country)| {
            vec![
                Value::Int(year),
                Value::Float(rate),
                Value::Text(COUNTRIES[country].to_owned()),
            ]
        })
        .collect();
    Dataset::new("generated", schema, rows).expect("dataset")
}

fn faceted_spec() -> ChartSpec {
    ChartSpec::new("Year", "Rate", "Country").with_facet("Country")
}

fn rows_strategy() -> impl Strategy<Value = Vec<(i64, f64, usize)>> {
    prop::collection::vec(
        (2000i64..2020, -100.0f64..100.0, 0usize..COUNTRIES.len()),
        0..40,
    )
}

fn selection_strategy() -> impl Strategy<Value = Vec<&'static str>> {
    subsequence(COUNTRIES.to_vec(), 0..=COUNTRIES.len())
}

proptest! {
    #[test]
    fn rendered_series_only_hold_selected_categories(
        rows in rows_strategy(),
        selected in selection_strategy()
    ) {
        let data = dataset(&rows);
        let selection = SelectionState::from_keys(selected.iter().copied());
        let chart = ChartBinder::default()
            .bind(&data, &selection, &faceted_spec())
            .expect("bind");

        for series in chart.all_series() {
            prop_assert!(selection.contains(&series.category));
        }
    }

    #[test]
    fn empty_selection_always_renders_empty(rows in rows_strategy()) {
        let data = dataset(&rows);
        let chart = ChartBinder::default()
            .bind(&data, &SelectionState::new(), &faceted_spec())
            .expect("bind");

        prop_assert!(chart.is_empty());
        prop_assert!(chart.facets.is_empty());
    }

    #[test]
    fn binding_is_deterministic(
        rows in rows_strategy(),
        selected in selection_strategy()
    ) {
        let data = dataset(&rows);
        let selection = SelectionState::from_keys(selected.iter().copied());
        let binder = ChartBinder::default();

        let first = binder.bind(&data, &selection, &faceted_spec()).expect("first");
        let second = binder.bind(&data, &selection, &faceted_spec()).expect("second");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn unknown_keys_never_change_the_chart(
        rows in rows_strategy(),
        selected in selection_strategy()
    ) {
        let data = dataset(&rows);
        let binder = ChartBinder::default();
        let plain = SelectionState::from_keys(selected.iter().copied());
        let mut with_ghosts = plain.clone();
        with_ghosts.insert("Atlantis");
        with_ghosts.insert("Elbonia");

        let expected = binder.bind(&data, &plain, &faceted_spec()).expect("plain");
        let actual = binder.bind(&data, &with_ghosts, &faceted_spec()).expect("ghosts");
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn no_selected_row_is_lost_or_invented(
        rows in rows_strategy(),
        selected in selection_strategy()
    ) {
        let data = dataset(&rows);
        let selection = SelectionState::from_keys(selected.iter().copied());
        let chart = ChartBinder::default()
            .bind(&data, &selection, &faceted_spec())
            .expect("bind");

        // Generated samples are all finite and non-null, so every selected
        // row must surface as exactly one point.
        let expected = rows
            .iter()
            .filter(|(_, _, country)| selected.contains(&COUNTRIES[*country]))
            .count();
        let actual: usize = chart.all_series().map(|series| series.points.len()).sum();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn category_color_is_consistent_across_facets(
        rows in rows_strategy(),
        selected in selection_strategy()
    ) {
        let data = dataset(&rows);
        let selection = SelectionState::from_keys(selected.iter().copied());
        let chart = ChartBinder::default()
            .bind(&data, &selection, &faceted_spec())
            .expect("bind");

        let mut seen: HashMap<String, Color> = HashMap::new();
        for series in chart.all_series() {
            let color = *seen.entry(series.category.clone()).or_insert(series.color);
            prop_assert_eq!(color, series.color);
        }
    }

    #[test]
    fn widening_the_selection_never_drops_points(
        rows in rows_strategy(),
        narrow in selection_strategy(),
        extra in selection_strategy()
    ) {
        let data = dataset(&rows);
        let binder = ChartBinder::default();
        let narrow_selection = SelectionState::from_keys(narrow.iter().copied());
        let mut wide_selection = narrow_selection.clone();
        for key in &extra {
            wide_selection.insert(*key);
        }

        let narrow_chart = binder
            .bind(&data, &narrow_selection, &faceted_spec())
            .expect("narrow");
        let wide_chart = binder
            .bind(&data, &wide_selection, &faceted_spec())
            .expect("wide");

        let points = |chart: &RenderedChart| -> usize {
            chart.all_series().map(|series| series.points.len()).sum()
        };
        prop_assert!(points(&wide_chart) >= points(&narrow_chart));
    }

    #[test]
    fn configured_colors_survive_any_selection(
        rows in rows_strategy(),
        selected in selection_strategy()
    ) {
        let pinned = Color::rgb(1.0, 0.65, 0.0);
        let binder = ChartBinder::new(ColorMap::new().with_color("Netherlands", pinned));
        let data = dataset(&rows);
        let mut selection = SelectionState::from_keys(selected.iter().copied());
        selection.insert("Netherlands");

        let chart = binder.bind(&data, &selection, &faceted_spec()).expect("bind");
        for series in chart.all_series() {
            if series.category == "Netherlands" {
                prop_assert_eq!(series.color, pinned);
            }
        }
    }

    #[test]
    fn facet_keys_follow_first_encounter_order(
        rows in rows_strategy(),
        selected in selection_strategy()
    ) {
        let data = dataset(&rows);
        let selection = SelectionState::from_keys(selected.iter().copied());
        let chart = ChartBinder::default()
            .bind(&data, &selection, &faceted_spec())
            .expect("bind");

        let mut expected: Vec<&str> = Vec::new();
        for (_, _, country) in &rows {
            let name = COUNTRIES[*country];
            if selection.contains(name) && !expected.contains(&name) {
                expected.push(name);
            }
        }
        let actual: Vec<&str> = chart
            .facets
            .iter()
            .filter_map(|facet| facet.key.as_deref())
            .collect();
        prop_assert_eq!(actual, expected);
    }
}
