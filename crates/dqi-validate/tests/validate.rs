//! Tests for required-column checks and numeric coercion.

use polars::prelude::{Column, DataFrame, DataType, IntoColumn, NamedFrom, Series};

use dqi_validate::{
    CoercionMode, ValidateError, ValidateOptions, coerce_numeric, require_columns, validate_frame,
};

fn string_frame() -> DataFrame {
    DataFrame::new(vec![
        Series::new("id".into(), &["A", "B", "C"]).into_column(),
        Series::new("fiber_g".into(), &["1.5", "", "2"]).into_column(),
        Series::new("vit_c_mg".into(), &["3", "4", ""]).into_column(),
    ])
    .unwrap()
}

#[test]
fn lists_every_missing_column() {
    let df = string_frame();
    let err = require_columns(&df, &["fiber_g", "sodium_mg", "energy_kcal"]).unwrap_err();
    match err {
        ValidateError::MissingColumns(missing) => {
            assert_eq!(missing, vec!["sodium_mg", "energy_kcal"]);
        }
        other => panic!("unexpected error: {other}"),
    }
    let message = require_columns(&df, &["sodium_mg", "energy_kcal"])
        .unwrap_err()
        .to_string();
    assert!(message.contains("sodium_mg"));
    assert!(message.contains("energy_kcal"));
}

#[test]
fn matches_columns_ignoring_case_and_whitespace() {
    let df = DataFrame::new(vec![
        Series::new("  Fiber_G ".into(), &[1.0, 2.0]).into_column(),
    ])
    .unwrap();
    assert!(require_columns(&df, &["fiber_g"]).is_ok());
}

#[test]
fn permissive_mode_coerces_and_leaves_blanks_missing() {
    let df = string_frame();
    let coerced = coerce_numeric(&df, &ValidateOptions::permissive()).unwrap();

    let fiber = coerced.column("fiber_g").unwrap();
    assert_eq!(fiber.dtype(), &DataType::Float64);
    assert_eq!(fiber.f64().unwrap().get(0), Some(1.5));
    assert_eq!(fiber.f64().unwrap().get(1), None);
    assert_eq!(fiber.f64().unwrap().get(2), Some(2.0));

    // identifier column untouched
    assert_eq!(coerced.column("id").unwrap().dtype(), &DataType::String);
}

#[test]
fn permissive_mode_turns_text_into_missing() {
    let df = DataFrame::new(vec![
        Series::new("fiber_g".into(), &["1.5", "n/a"]).into_column(),
    ])
    .unwrap();
    let coerced = coerce_numeric(&df, &ValidateOptions::permissive()).unwrap();
    assert_eq!(coerced.column("fiber_g").unwrap().f64().unwrap().get(1), None);
}

#[test]
fn strict_mode_rejects_text() {
    let df = DataFrame::new(vec![
        Series::new("fiber_g".into(), &["1.5", "n/a"]).into_column(),
    ])
    .unwrap();
    let err = coerce_numeric(&df, &ValidateOptions::default()).unwrap_err();
    match err {
        ValidateError::NonNumericColumn { column } => assert_eq!(column, "fiber_g"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn strict_mode_allows_blanks() {
    let df = DataFrame::new(vec![
        Series::new("fiber_g".into(), &["1.5", ""]).into_column(),
    ])
    .unwrap();
    let coerced = coerce_numeric(&df, &ValidateOptions::default()).unwrap();
    assert_eq!(coerced.column("fiber_g").unwrap().f64().unwrap().get(1), None);
}

#[test]
fn numeric_columns_pass_through() {
    let df = DataFrame::new(vec![Column::new("kcal".into(), &[2000i64, 1800])]).unwrap();
    let coerced = coerce_numeric(&df, &ValidateOptions::default()).unwrap();
    assert_eq!(coerced.column("kcal").unwrap().dtype(), &DataType::Int64);
}

#[test]
fn column_names_are_trimmed_in_output() {
    let df = DataFrame::new(vec![
        Series::new(" fiber_g ".into(), &[1.0, 2.0]).into_column(),
    ])
    .unwrap();
    let coerced = coerce_numeric(&df, &ValidateOptions::default()).unwrap();
    assert!(coerced.column("fiber_g").is_ok());
}

#[test]
fn caller_frame_is_not_mutated() {
    let df = string_frame();
    let _ = validate_frame(&df, &["fiber_g"], &ValidateOptions::permissive()).unwrap();
    // original still holds strings
    assert_eq!(df.column("fiber_g").unwrap().dtype(), &DataType::String);
}

#[test]
fn validate_frame_checks_before_coercing() {
    let df = string_frame();
    let options = ValidateOptions {
        mode: CoercionMode::Strict,
        ..ValidateOptions::default()
    };
    let err = validate_frame(&df, &["sodium_mg"], &options).unwrap_err();
    assert!(matches!(err, ValidateError::MissingColumns(_)));
}
