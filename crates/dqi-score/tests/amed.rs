//! aMED: cohort-median scoring, the zero-intake rules and the fixed
//! alcohol range.

mod common;

use common::{frame, unwrap_scores};
use polars::prelude::DataFrame;

fn amed_frame(alcohol: Vec<f64>) -> DataFrame {
    let values = vec![1.0, 2.0, 3.0, 4.0];
    let columns: Vec<(&str, Vec<f64>)> = dqi_score::AMED_COMPONENT_KEYS
        .iter()
        .map(|name| {
            if *name == "ALCOHOL_SERV_MED" {
                (*name, alcohol.clone())
            } else {
                (*name, values.clone())
            }
        })
        .collect();
    frame(&columns)
}

#[test]
fn components_score_against_the_cohort_median() {
    // median of 1..4 is 2.5: healthy components pay rows 3 and 4, the
    // unhealthy red meat component pays rows 1 and 2; alcohol pays within
    // the fixed 10-25 range
    let totals = unwrap_scores(&dqi_score::calculate_amed(&amed_frame(vec![5.0, 10.0, 25.0, 30.0])).unwrap());
    // 7 healthy: [0,0,1,1] each; 1 unhealthy: [1,1,0,0]; alcohol: [0,1,1,0]
    assert_eq!(totals, vec![1.0, 2.0, 8.0, 7.0]);
}

#[test]
fn zero_intake_never_pays_a_healthy_component() {
    let base = amed_frame(vec![15.0; 4]);
    let mut zeroed = base.clone();
    {
        use polars::prelude::{IntoColumn, NamedFrom, Series};
        zeroed
            .with_column(Series::new("FRT_FRTJ_SERV_MED".into(), vec![0.0; 4]).into_column())
            .unwrap();
    }
    let before = unwrap_scores(&dqi_score::calculate_amed(&base).unwrap());
    let after = unwrap_scores(&dqi_score::calculate_amed(&zeroed).unwrap());
    // with all fruit intakes zero the median is zero; v >= median holds but
    // v > 0 does not, so the component pays nobody
    for (idx, (b, a)) in before.iter().zip(&after).enumerate() {
        let fruit_paid = if idx >= 2 { 1.0 } else { 0.0 };
        assert!((b - fruit_paid - a).abs() < 1e-9, "row {idx}");
    }
}

#[test]
fn zero_intake_always_pays_the_unhealthy_component() {
    let df = amed_frame(vec![15.0; 4]);
    let mut zeroed = df.clone();
    {
        use polars::prelude::{IntoColumn, NamedFrom, Series};
        zeroed
            .with_column(
                Series::new("REDPROC_MEAT_SERV_MED".into(), vec![0.0; 4]).into_column(),
            )
            .unwrap();
    }
    let before = unwrap_scores(&dqi_score::calculate_amed(&df).unwrap());
    let after = unwrap_scores(&dqi_score::calculate_amed(&zeroed).unwrap());
    // rows 3 and 4 previously failed the meat component (at/above median);
    // zero intake pays everyone
    assert!((after[2] - before[2] - 1.0).abs() < 1e-9);
    assert!((after[3] - before[3] - 1.0).abs() < 1e-9);
}

#[test]
fn alcohol_range_boundaries_are_inclusive() {
    let totals = unwrap_scores(&dqi_score::calculate_amed(&amed_frame(vec![9.9, 10.0, 25.0, 25.1])).unwrap());
    assert_eq!(totals[1] - totals[0], 1.0);
    assert_eq!(totals[2] - totals[3], 1.0);
}
