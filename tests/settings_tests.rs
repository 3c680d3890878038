#![cfg(feature = "yaml")]

use std::io::Write;

use chrono::NaiveDate;
use lodas::core::*;

const SETTINGS: &str = "\
consultant_number: \"123456\"
client_numbers:
  Acme GmbH: \"00042\"
  Beta AG: \"00043\"
restrictions:
  ma_iban: true
export_email: lohn@example.de
valid_from: 2025-01-01
";

#[test]
fn load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SETTINGS.as_bytes()).unwrap();

    let settings = ExportSettings::load(file.path()).unwrap();
    assert_eq!(settings.consultant_number, "123456");
    assert_eq!(settings.client_number("Beta AG"), Some("00043"));
    assert_eq!(settings.client_number("Untracked"), None);
    assert!(settings.restrictions.is_suppressed("ma_iban"));
    assert_eq!(settings.valid_from, NaiveDate::from_ymd_opt(2025, 1, 1));
    assert_eq!(settings.completeness, CompletenessPolicy::Warn);
    assert!(settings.validate().is_ok());
}

#[test]
fn missing_file_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ExportSettings::load(dir.path().join("missing.yaml")).unwrap_err();
    match err {
        ExportError::Config(message) => assert!(message.contains("missing.yaml")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn yaml_and_builder_agree() {
    let from_yaml = ExportSettings::from_yaml_str(SETTINGS).unwrap();
    let built = ExportSettingsBuilder::new("123456")
        .client("Acme GmbH", "00042")
        .client("Beta AG", "00043")
        .restrict("ma_iban")
        .export_email("lohn@example.de")
        .valid_from(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap())
        .build();
    assert_eq!(from_yaml, built);
}

#[test]
fn bad_client_number_is_reported_with_company() {
    let yaml = SETTINGS.replace("\"00043\"", "\"43\"");
    let settings = ExportSettings::from_yaml_str(&yaml).unwrap();
    let err = settings.validate().unwrap_err();
    assert_eq!(
        err.to_string(),
        "client number must be exactly 5 digits for company 'Beta AG', got '43'"
    );
}
