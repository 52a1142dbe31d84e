//! Tests for unit inference and conversion.

use polars::prelude::{DataFrame, IntoColumn, NamedFrom, Series};

use dqi_model::Unit;
use dqi_transform::{convert_to_canonical, infer_units, normalize_units, rename_for_scoring};

fn defaults() -> dqi_standards::DefaultUnits {
    dqi_standards::load_defaults().expect("load default units")
}

fn frame(columns: &[(&str, &[f64])]) -> DataFrame {
    let columns = columns
        .iter()
        .map(|(name, values)| Series::new((*name).into(), *values).into_column())
        .collect();
    DataFrame::new(columns).unwrap()
}

#[test]
fn infers_units_from_suffixes_and_defaults() {
    let df = frame(&[
        ("energy_kj", &[418.4][..]),
        ("vitamin_c_mcg", &[1_000_000.0][..]),
        ("protein_g", &[10.0][..]),
    ]);
    let (stripped, units) = infer_units(&df, &defaults()).unwrap();

    assert_eq!(units.get("energy"), Some(&Some(Unit::Kj)));
    assert_eq!(units.get("vitamin_c"), Some(&Some(Unit::Mcg)));
    assert_eq!(units.get("protein"), Some(&Some(Unit::G)));

    let names: Vec<String> = stripped
        .get_column_names_owned()
        .iter()
        .map(|n| n.to_string())
        .collect();
    assert_eq!(names, vec!["energy", "vitamin_c", "protein"]);
}

#[test]
fn converts_to_canonical_units() {
    let df = frame(&[
        ("energy_kj", &[418.4][..]),
        ("vitamin_c_mcg", &[1_000_000.0][..]),
        ("protein_g", &[10.0][..]),
    ]);
    let table = defaults();
    let (stripped, units) = infer_units(&df, &table).unwrap();
    let converted = convert_to_canonical(&stripped, &units, &table).unwrap();
    let scored = rename_for_scoring(&converted, &table).unwrap();

    let energy = scored.column("energy_kcal").unwrap().f64().unwrap().get(0);
    assert!((energy.unwrap() - 100.0).abs() < 1e-9);
    let vit_c = scored.column("vitamin_c_mg").unwrap().f64().unwrap().get(0);
    assert!((vit_c.unwrap() - 1000.0).abs() < 1e-9);
    assert!(scored.column("protein_g").is_ok());
}

#[test]
fn default_unit_suffix_is_appended() {
    let df = frame(&[("energy", &[50.0][..]), ("protein", &[5.0][..])]);
    let table = defaults();
    let (stripped, units) = infer_units(&df, &table).unwrap();
    assert_eq!(units.get("energy"), Some(&Some(Unit::Kcal)));

    let scored = rename_for_scoring(&stripped, &table).unwrap();
    let names: Vec<String> = scored
        .get_column_names_owned()
        .iter()
        .map(|n| n.to_string())
        .collect();
    assert_eq!(names, vec!["energy_kcal", "protein_g"]);
}

#[test]
fn canonical_data_round_trips_unchanged() {
    let df = frame(&[
        ("sodium_mg", &[1500.0, 2300.0][..]),
        ("fiber_g", &[18.5, 22.0][..]),
        ("energy_kcal", &[2000.0, 1800.0][..]),
    ]);
    let out = normalize_units(&df, &defaults()).unwrap();

    let names: Vec<String> = out
        .get_column_names_owned()
        .iter()
        .map(|n| n.to_string())
        .collect();
    assert_eq!(names, vec!["sodium_mg", "fiber_g", "energy_kcal"]);
    for column in ["sodium_mg", "fiber_g", "energy_kcal"] {
        let before = df.column(column).unwrap().f64().unwrap();
        let after = out.column(column).unwrap().f64().unwrap();
        for idx in 0..df.height() {
            assert_eq!(before.get(idx), after.get(idx), "{column} row {idx}");
        }
    }
}

#[test]
fn unsupported_pairs_are_left_unconverted() {
    // energy declared in grams has no mass-to-energy factor
    let df = frame(&[("energy_g", &[50.0][..])]);
    let table = defaults();
    let (stripped, units) = infer_units(&df, &table).unwrap();
    let converted = convert_to_canonical(&stripped, &units, &table).unwrap();
    assert_eq!(
        converted.column("energy").unwrap().f64().unwrap().get(0),
        Some(50.0)
    );
}

#[test]
fn unknown_columns_keep_their_names() {
    let df = frame(&[("whole_grain_serv", &[1.5][..])]);
    let out = normalize_units(&df, &defaults()).unwrap();
    assert!(out.column("whole_grain_serv").is_ok());
}
