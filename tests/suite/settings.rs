//! Settings loading as seen by the binary

use std::fs;

use gunghap::{compute, load_settings};
use gunghap_config::OutputFormat;
use gunghap_types::DecompositionKind;

#[test]
fn explicit_config_is_applied() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gunghap.toml");
    fs::write(
        &path,
        "[display]\nformat = \"json\"\ndecomposition = \"compound\"\n\n[rules]\nmax_name_diff = 3\n",
    )
    .unwrap();

    let settings = load_settings(Some(path.as_path())).unwrap();
    assert_eq!(settings.format, OutputFormat::Json);
    assert_eq!(settings.decomposition, DecompositionKind::Compound);
    assert_eq!(settings.rules.max_diff, 3);

    // A gap of two is allowed once max_name_diff is raised
    assert!(compute("철수", "선우재덕", &settings).is_ok());
}

#[test]
fn compound_setting_changes_compound_finals() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gunghap.toml");
    fs::write(&path, "[display]\ndecomposition = \"compound\"\n").unwrap();

    let settings = load_settings(Some(path.as_path())).unwrap();
    let destiny = compute("의정", "외곬", &settings).unwrap();
    assert_eq!(destiny.stroke_totals(), &[3, 4, 6, 4]);
    assert_eq!(destiny.percentage().get(), 70);
}

#[test]
fn missing_explicit_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_settings(Some(dir.path().join("absent.toml").as_path())).unwrap_err();
    assert!(err.to_string().contains("does not exist"));
}

#[test]
fn malformed_explicit_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gunghap.toml");
    fs::write(&path, "[display\n").unwrap();
    assert!(load_settings(Some(path.as_path())).is_err());
}
