//! DASH quintile scoring: rank spread, reversed components, monotonicity.

mod common;

use common::{frame, unwrap_scores};

fn dash_frame(values: Vec<f64>) -> polars::prelude::DataFrame {
    let columns: Vec<(&str, Vec<f64>)> = dqi_score::DASH_COMPONENT_KEYS
        .iter()
        .map(|name| (*name, values.clone()))
        .collect();
    frame(&columns)
}

#[test]
fn five_distinct_rows_spread_across_quintiles() {
    // every component runs 1..5, so each row lands in one quintile per
    // component: 5 healthy components score the rank, 3 reversed components
    // score 6 - rank, giving 2*rank + 18
    let df = dash_frame(vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    let totals = unwrap_scores(&dqi_score::calculate_dash(&df).unwrap());
    assert_eq!(totals, vec![20.0, 22.0, 24.0, 26.0, 28.0]);

    let distinct: std::collections::BTreeSet<i64> =
        totals.iter().map(|t| (t * 100.0) as i64).collect();
    assert!(distinct.len() > 1, "quintile assignment must produce spread");
}

#[test]
fn healthy_scores_rise_and_reversed_scores_fall_with_intake() {
    let increasing: Vec<f64> = (1..=10).map(f64::from).collect();
    let constant = vec![3.0; 10];

    // only fruits varies: totals must be non-decreasing
    let mut columns: Vec<(&str, Vec<f64>)> = dqi_score::DASH_COMPONENT_KEYS
        .iter()
        .map(|name| (*name, constant.clone()))
        .collect();
    columns[0] = ("fruits", increasing.clone());
    let totals = unwrap_scores(&dqi_score::calculate_dash(&frame(&columns)).unwrap());
    for pair in totals.windows(2) {
        assert!(pair[0] <= pair[1] + 1e-9);
    }
    assert!((totals[9] - totals[0] - 4.0).abs() < 1e-9, "rank 1 to rank 5");

    // only sodium varies: totals must be non-increasing
    let mut columns: Vec<(&str, Vec<f64>)> = dqi_score::DASH_COMPONENT_KEYS
        .iter()
        .map(|name| (*name, constant.clone()))
        .collect();
    columns[5] = ("sodium", increasing);
    let totals = unwrap_scores(&dqi_score::calculate_dash(&frame(&columns)).unwrap());
    for pair in totals.windows(2) {
        assert!(pair[0] >= pair[1] - 1e-9);
    }
    assert!((totals[0] - totals[9] - 4.0).abs() < 1e-9);
}

#[test]
fn tied_cohort_scores_uniformly() {
    let df = dash_frame(vec![2.0; 6]);
    let totals = unwrap_scores(&dqi_score::calculate_dash(&df).unwrap());
    let first = totals[0];
    assert!(totals.iter().all(|t| (t - first).abs() < 1e-9));
}

#[test]
fn row_order_matches_input_order() {
    let df = dash_frame(vec![5.0, 1.0, 3.0, 2.0, 4.0]);
    let totals = unwrap_scores(&dqi_score::calculate_dash(&df).unwrap());
    // 2*rank + 18 for ranks 5,1,3,2,4
    assert_eq!(totals, vec![28.0, 20.0, 24.0, 22.0, 26.0]);
}
