//! Registry coverage: every calculator is reachable generically.

mod common;

use common::{constant_frame, unwrap_scores};

use dqi_score::DietIndex;

#[test]
fn registry_lists_every_index_once() {
    let parameters = dqi_standards::load_default_dii_parameters().unwrap();
    let indices = dqi_score::all_indices(&parameters);
    assert_eq!(indices.len(), 16);

    let mut names: Vec<&str> = indices.iter().map(|index| index.name()).collect();
    names.sort_unstable();
    let mut deduped = names.clone();
    deduped.dedup();
    assert_eq!(names, deduped);
    assert!(names.contains(&"DII"));
    assert!(names.contains(&"HEI_TODDLERS_2020"));
    assert!(names.contains(&"ACS2020_V2"));
}

#[test]
fn registry_reports_required_columns() {
    let parameters = dqi_standards::load_default_dii_parameters().unwrap();
    let indices = dqi_score::all_indices(&parameters);
    for index in &indices {
        assert!(
            !index.required_columns().is_empty(),
            "{} reports no required columns",
            index.name()
        );
    }
    let dii = indices.iter().find(|index| index.name() == "DII").unwrap();
    assert_eq!(dii.required_columns().len(), 45);
}

#[test]
fn registry_evaluation_matches_direct_calls() {
    let parameters = dqi_standards::load_default_dii_parameters().unwrap();
    let indices = dqi_score::all_indices(&parameters);
    let dash = indices.iter().find(|index| index.name() == "DASH").unwrap();

    let df = constant_frame(&dqi_score::DASH_COMPONENT_KEYS, 4, 2.0);
    let via_registry = unwrap_scores(&dash.evaluate(&df).unwrap());
    let direct = unwrap_scores(&dqi_score::calculate_dash(&df).unwrap());
    assert_eq!(via_registry, direct);
}
