//! Caller-side validation before computing

use gunghap::{compute, exit_code, load_settings};
use gunghap_config::Settings;
use gunghap_types::{NameError, NameSlot};

fn name_error(name1: &str, name2: &str) -> NameError {
    let err = compute(name1, name2, &Settings::default()).unwrap_err();
    err.downcast::<NameError>()
        .expect("validation failures surface as NameError")
}

#[test]
fn valid_names_compute() {
    let destiny = compute("철수", "영희", &Settings::default()).unwrap();
    assert_eq!(destiny.percentage().get(), 58);
}

#[test]
fn names_are_trimmed_before_computing() {
    let destiny = compute(" 철수 ", "영희 ", &Settings::default()).unwrap();
    assert_eq!(destiny.name1(), "철수");
    assert_eq!(destiny.combined().len(), 4);
}

#[test]
fn rejects_short_names() {
    assert!(matches!(
        name_error("철", "영희"),
        NameError::TooShort {
            slot: NameSlot::First,
            ..
        }
    ));
}

#[test]
fn rejects_non_hangul() {
    assert!(matches!(
        name_error("철수", "Alice"),
        NameError::NotHangul {
            slot: NameSlot::Second,
            ch: 'A',
            ..
        }
    ));
    // Vowel jamo alone are not accepted
    assert!(matches!(
        name_error("ㅏㅏ", "영희"),
        NameError::NotHangul { ch: 'ㅏ', .. }
    ));
}

#[test]
fn rejects_large_length_gap() {
    assert!(matches!(
        name_error("철수", "선우재덕"),
        NameError::LengthMismatch { diff: 2, .. }
    ));
}

#[test]
fn empty_input_is_rejected() {
    assert!(matches!(name_error("", "영희"), NameError::Empty { .. }));
}

#[test]
fn rejected_names_exit_with_two() {
    let err = compute("철수", "Alice", &Settings::default()).unwrap_err();
    assert_eq!(exit_code(&err), 2);
}

#[test]
fn other_failures_exit_with_one() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.toml");
    let err = load_settings(Some(missing.as_path())).unwrap_err();
    assert_eq!(exit_code(&err), 1);
}
