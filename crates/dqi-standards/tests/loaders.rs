//! Tests for standards file loading.

use std::path::Path;

use dqi_model::Unit;
use dqi_standards::{StandardsError, load_default_units, load_dii_parameters};

fn unique_temp_dir(label: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "dqi-standards-test-{label}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn loads_bundled_dii_parameters() {
    let parameters = dqi_standards::load_default_dii_parameters().expect("load dii parameters");
    assert_eq!(parameters.len(), 45);

    let fiber = parameters
        .iter()
        .find(|p| p.name == "Fiber")
        .expect("fiber parameter present");
    assert!(fiber.effect < 0.0, "fiber is anti-inflammatory");
    assert!(parameters.iter().all(|p| p.sd > 0.0));
}

#[test]
fn bundled_parameter_names_are_unique() {
    let parameters = dqi_standards::load_default_dii_parameters().expect("load dii parameters");
    let mut names: Vec<&str> = parameters.iter().map(|p| p.name.as_str()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), parameters.len());
}

#[test]
fn missing_parameter_file_is_reported() {
    let err = load_dii_parameters(Path::new("/nonexistent/dii_parameters.json")).unwrap_err();
    assert!(matches!(err, StandardsError::MissingParameterFile { .. }));
}

#[test]
fn non_positive_sd_is_rejected() {
    let dir = unique_temp_dir("bad-sd");
    let path = dir.join("dii_parameters.json");
    std::fs::write(
        &path,
        r#"[{ "name": "Fiber", "mean": 18.8, "sd": 0.0, "effect": -0.663 }]"#,
    )
    .unwrap();

    let err = load_dii_parameters(&path).unwrap_err();
    assert!(matches!(err, StandardsError::InvalidParameter { .. }));
}

#[test]
fn loads_bundled_default_units() {
    let units = dqi_standards::load_defaults().expect("load default units");
    assert_eq!(units.get("energy"), Some(&Unit::Kcal));
    assert_eq!(units.get("sodium"), Some(&Unit::Mg));
    assert_eq!(units.get("protein"), Some(&Unit::G));
    assert_eq!(units.get("vitamin_b12"), Some(&Unit::Mcg));
}

#[test]
fn malformed_units_file_is_reported() {
    let dir = unique_temp_dir("bad-units");
    let path = dir.join("default_units.json");
    std::fs::write(&path, r#"{ "energy": "cups" }"#).unwrap();

    let err = load_default_units(&path).unwrap_err();
    assert!(matches!(err, StandardsError::Json { .. }));
}
