//! ACS2020: gender-stratified quartile schedules, the fixed SSB schedule,
//! energy normalization in v2 and strict missing propagation.

mod common;

use common::{frame, unwrap_scores};
use polars::prelude::DataFrame;

/// Two gender strata, component values 1..4 within each.
fn stratified_frame() -> DataFrame {
    let values = vec![1.0, 2.0, 3.0, 4.0, 1.0, 2.0, 3.0, 4.0];
    frame(&[
        ("gender", vec![2.0, 2.0, 2.0, 2.0, 1.0, 1.0, 1.0, 1.0]),
        ("VEG_SERV_ACS2020", values.clone()),
        ("VEG_ITEMS_SERV_ACS2020", values.clone()),
        ("FRT_SERV_ACS2020", values.clone()),
        ("FRT_ITEMS_SERV_ACS2020", values.clone()),
        ("WGRAIN_SERV_ACS2020", values.clone()),
        ("REDPROC_MEAT_SERV_ACS2020", values.clone()),
        ("HPFRG_RATIO_SERV_ACS2020", values),
        ("SSB_FRTJ_SERV_ACS2020", vec![0.0; 8]),
    ])
}

#[test]
fn quartile_schedules_apply_within_each_gender() {
    let totals = unwrap_scores(&dqi_score::calculate_acs2020_v1(&stratified_frame()).unwrap());
    // per quartile rank q (0..3): 4 quarter-point components (0.25q each),
    // whole grain q, red meat 3-q, processed food 1.5-0.5q, SSB at zero
    // consumption 1.5: total = 6 + 0.5q
    let expected = [6.0, 6.5, 7.0, 7.5];
    for stratum in totals.chunks(4) {
        for (total, expected) in stratum.iter().zip(expected) {
            assert!((total - expected).abs() < 1e-9);
        }
    }
}

#[test]
fn ssb_schedule_is_piecewise() {
    let constant = vec![2.0; 4];
    let df = frame(&[
        ("gender", vec![1.0; 4]),
        ("VEG_SERV_ACS2020", constant.clone()),
        ("VEG_ITEMS_SERV_ACS2020", constant.clone()),
        ("FRT_SERV_ACS2020", constant.clone()),
        ("FRT_ITEMS_SERV_ACS2020", constant.clone()),
        ("WGRAIN_SERV_ACS2020", constant.clone()),
        ("REDPROC_MEAT_SERV_ACS2020", constant.clone()),
        ("HPFRG_RATIO_SERV_ACS2020", constant),
        ("SSB_FRTJ_SERV_ACS2020", vec![1.2, 0.5, 0.2, 0.0]),
    ]);
    let totals = unwrap_scores(&dqi_score::calculate_acs2020_v1(&df).unwrap());
    // everything but SSB is tied, so totals differ by the SSB schedule
    assert!((totals[1] - totals[0] - 0.5).abs() < 1e-9);
    assert!((totals[2] - totals[0] - 1.0).abs() < 1e-9);
    assert!((totals[3] - totals[0] - 1.5).abs() < 1e-9);
}

#[test]
fn missing_component_makes_the_row_total_missing() {
    let mut df = stratified_frame();
    {
        use polars::prelude::{IntoColumn, NamedFrom, Series};
        let mut veg: Vec<Option<f64>> = vec![
            Some(1.0),
            Some(2.0),
            Some(3.0),
            Some(4.0),
            Some(1.0),
            Some(2.0),
            Some(3.0),
            Some(4.0),
        ];
        veg[2] = None;
        df.with_column(Series::new("VEG_SERV_ACS2020".into(), veg).into_column())
            .unwrap();
    }
    let totals = dqi_score::calculate_acs2020_v1(&df).unwrap();
    assert!(totals[2].is_none());
    assert!(totals[0].is_some());
    assert!(totals[7].is_some());
}

#[test]
fn v2_normalizes_processed_food_per_1000_kcal() {
    let constant = vec![2.0; 4];
    let df = frame(&[
        ("gender", vec![1.0; 4]),
        ("VEG_SERV_ACS2020", constant.clone()),
        ("VEG_ITEMS_SERV_ACS2020", constant.clone()),
        ("FRT_SERV_ACS2020", constant.clone()),
        ("FRT_ITEMS_SERV_ACS2020", constant.clone()),
        ("WGRAIN_SERV_ACS2020", constant.clone()),
        ("REDPROC_MEAT_SERV_ACS2020", constant),
        // same servings at different energies rank by density 4, 2, 1, 0.5
        ("HPFRG_SERV_ACS2020", vec![4.0, 4.0, 2.0, 1.0]),
        ("TOTALKCAL_ACS2020", vec![1000.0, 2000.0, 2000.0, 2000.0]),
        ("SSB_FRTJ_SERV_ACS2020", vec![0.0; 4]),
    ]);
    let totals = unwrap_scores(&dqi_score::calculate_acs2020_v2(&df).unwrap());
    // processed food is reverse-scored: the densest intake earns 0, the
    // leanest 1.5
    assert!((totals[3] - totals[0] - 1.5).abs() < 1e-9);
    assert!((totals[2] - totals[0] - 1.0).abs() < 1e-9);
    assert!((totals[1] - totals[0] - 0.5).abs() < 1e-9);
}
