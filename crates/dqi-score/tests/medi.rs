//! MEDI screener: binary cut-offs and the graded v2 variant.

mod common;

use common::{frame, unwrap_scores};
use polars::prelude::DataFrame;

fn medi_frame(rows: &[[f64; 11]]) -> DataFrame {
    let columns: Vec<(&str, Vec<f64>)> = dqi_score::MEDI_COMPONENT_KEYS
        .iter()
        .enumerate()
        .map(|(idx, name)| (*name, rows.iter().map(|row| row[idx]).collect()))
        .collect();
    frame(&columns)
}

#[test]
fn meeting_every_cutoff_scores_eleven() {
    // order: olive, fruit, veg, legumes, nuts, fish, alcohol, ssb, sweets,
    // discretionary fat, red/processed meat
    let df = medi_frame(&[
        [5.0, 3.0, 2.0, 0.43, 0.43, 0.43, 1.0, 0.9, 0.2, 0.9, 0.9],
        [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.3, 1.5, 2.0],
    ]);
    let totals = unwrap_scores(&dqi_score::calculate_medi(&df).unwrap());
    assert_eq!(totals, vec![11.0, 0.0]);
}

#[test]
fn cutoffs_are_inclusive_for_adequacy_and_exclusive_for_moderation() {
    // exactly at the adequacy cut-off earns the point; exactly at the
    // moderation cut-off does not
    let df = medi_frame(&[[5.0, 3.0, 2.0, 3.0 / 7.0, 3.0 / 7.0, 3.0 / 7.0, 1.0, 1.0, 2.0 / 7.0, 1.0, 1.0]]);
    let totals = unwrap_scores(&dqi_score::calculate_medi(&df).unwrap());
    assert_eq!(totals, vec![7.0]);
}

#[test]
fn graded_v2_awards_proportional_credit() {
    // every adequacy component at half its cut-off, every moderation
    // component at half its cut-off: 0.5 points each
    let df = medi_frame(&[[2.5, 1.5, 1.0, 1.5 / 7.0, 1.5 / 7.0, 1.5 / 7.0, 0.5, 0.5, 1.0 / 7.0, 0.5, 0.5]]);
    let totals = unwrap_scores(&dqi_score::calculate_medi_v2(&df).unwrap());
    assert!((totals[0] - 5.5).abs() < 1e-9);
}

#[test]
fn graded_v2_saturates_at_one_point_per_component() {
    let df = medi_frame(&[[50.0, 30.0, 20.0, 4.3, 4.3, 4.3, 10.0, 0.0, 0.0, 0.0, 0.0]]);
    let totals = unwrap_scores(&dqi_score::calculate_medi_v2(&df).unwrap());
    assert!((totals[0] - 11.0).abs() < 1e-9);
}
