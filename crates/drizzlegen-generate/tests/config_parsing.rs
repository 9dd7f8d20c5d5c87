use drizzlegen_core::DateMode;
use drizzlegen_generate::{parse_config, Config, ImportFileExtension};
use serde_json::json;

#[test]
fn empty_config_is_fully_defaulted() {
    let config = parse_config(&json!({})).expect("empty config parses");

    assert!(config.relational_query);
    assert_eq!(config.import_file_extension, ImportFileExtension::None);
    assert!(config.abort_on_failed_formatting);
    assert!(!config.verbose);
    assert_eq!(config.formatter, None);
    assert_eq!(config.date_mode, None);
    assert_eq!(config, Config::default());
}

#[test]
fn string_encoded_booleans_are_coerced() {
    let config = parse_config(&json!({
        "relationalQuery": "false",
        "verbose": "true",
        "abortOnFailedFormatting": false,
    }))
    .expect("string booleans parse");

    assert!(!config.relational_query);
    assert!(config.verbose);
    assert!(!config.abort_on_failed_formatting);
}

#[test]
fn other_strings_fail_boolean_fields() {
    let err = parse_config(&json!({ "verbose": "yes" })).expect_err("invalid boolean");

    assert_eq!(err.issues.len(), 1);
    assert_eq!(err.issues[0].path.as_deref(), Some("verbose"));
    assert!(err.to_string().contains("\n- verbose: "));
}

#[test]
fn every_invalid_field_is_reported() {
    let err = parse_config(&json!({
        "importFileExtension": "xml",
        "relationalQuery": "maybe",
    }))
    .expect_err("two invalid fields");

    let rendered = err.to_string();
    assert!(rendered.starts_with("[drizzlegen] Invalid Config:\n"));
    assert!(rendered.contains("\n- importFileExtension: "), "{rendered}");
    assert!(rendered.contains("\n- relationalQuery: "), "{rendered}");
    assert_eq!(rendered.matches("\n- ").count(), 2, "{rendered}");
    assert_eq!(err.field_messages("importFileExtension").count(), 1);
    assert_eq!(err.field_messages("relationalQuery").count(), 1);
}

#[test]
fn non_object_config_is_a_root_issue() {
    let err = parse_config(&json!(["relationalQuery"])).expect_err("array config");

    assert!(err.issues.iter().any(|issue| issue.path.is_none()));
    assert!(!err.to_string().contains("relationalQuery:"));
}

#[test]
fn unknown_keys_are_ignored() {
    let config = parse_config(&json!({
        "provider": "node ./dist/bin.js",
        "importFileExtension": "js",
    }))
    .expect("unknown keys are ignored");

    assert_eq!(config.import_file_extension, ImportFileExtension::Js);
}

#[test]
fn optional_settings_are_carried() {
    let config = parse_config(&json!({
        "formatter": "prettier",
        "dateMode": "string",
        "importFileExtension": "ts",
    }))
    .expect("optional settings parse");

    assert_eq!(config.formatter.as_deref(), Some("prettier"));
    assert_eq!(config.date_mode, Some(DateMode::String));
    assert_eq!(config.date_mode.map(DateMode::as_str), Some("string"));
    assert_eq!(config.import_file_extension, ImportFileExtension::Ts);
    assert_eq!(config.import_file_extension.suffix(), Some("ts"));
}

#[test]
fn invalid_date_mode_and_formatter_are_reported_together() {
    let err = parse_config(&json!({
        "dateMode": "weekly",
        "formatter": 42,
    }))
    .expect_err("invalid optional settings");

    assert_eq!(err.field_messages("dateMode").count(), 1);
    assert_eq!(err.field_messages("formatter").count(), 1);
}
