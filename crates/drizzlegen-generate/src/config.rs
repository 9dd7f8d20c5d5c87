//! Generator configuration: declared keys, defaults and validation.
//!
//! The raw `generator` block arrives as untyped JSON whose values are often
//! strings. It is checked against the JSON Schema derived from [`Config`] so
//! that every violation is reported at once, then deserialized.

use drizzlegen_core::DateMode;
use jsonschema::JSONSchema;
use schemars::r#gen::SchemaGenerator;
use schemars::schema::{InstanceType, RootSchema, Schema, SchemaObject, SubschemaValidation};
use schemars::{schema_for, JsonSchema};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::errors::{ConfigError, ConfigIssue};

/// Suffix policy for relative import paths.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ImportFileExtension {
    /// Leave import paths untouched.
    #[default]
    None,
    Js,
    Ts,
}

impl ImportFileExtension {
    /// Extension appended to relative paths, if any.
    pub fn suffix(self) -> Option<&'static str> {
        match self {
            ImportFileExtension::None => None,
            ImportFileExtension::Js => Some("js"),
            ImportFileExtension::Ts => Some("ts"),
        }
    }
}

/// Validated generator configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Emit relational query helpers (`relations(...)` declarations).
    #[serde(default = "enabled", deserialize_with = "bool_in_str")]
    #[schemars(schema_with = "bool_in_str_schema")]
    pub relational_query: bool,
    #[serde(default)]
    pub import_file_extension: ImportFileExtension,
    #[serde(default, deserialize_with = "bool_in_str")]
    #[schemars(schema_with = "bool_in_str_schema")]
    pub verbose: bool,
    /// External formatter to run on the emitted files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatter: Option<String>,
    #[serde(default = "enabled", deserialize_with = "bool_in_str")]
    #[schemars(schema_with = "bool_in_str_schema")]
    pub abort_on_failed_formatting: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_mode: Option<DateMode>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            relational_query: true,
            import_file_extension: ImportFileExtension::None,
            verbose: false,
            formatter: None,
            abort_on_failed_formatting: true,
            date_mode: None,
        }
    }
}

/// JSON Schema describing the accepted `generator` block.
pub fn config_json_schema() -> RootSchema {
    schema_for!(Config)
}

/// Validate a raw `generator` block into a [`Config`].
///
/// Unknown keys are ignored. All issues are collected before failing.
pub fn parse_config(raw: &Value) -> Result<Config, ConfigError> {
    let schema = serde_json::to_value(config_json_schema()).map_err(|err| ConfigError {
        issues: vec![ConfigIssue::root(format!("config schema error: {err}"))],
    })?;
    let compiled = JSONSchema::compile(&schema).map_err(|err| ConfigError {
        issues: vec![ConfigIssue::root(format!("config schema error: {err}"))],
    })?;

    if let Err(errors) = compiled.validate(raw) {
        let issues = errors
            .map(|error| issue_at(&error.instance_path.to_string(), error.to_string()))
            .collect();
        return Err(ConfigError { issues });
    }

    let config = Config::deserialize(raw).map_err(|err| ConfigError {
        issues: vec![ConfigIssue::root(err.to_string())],
    })?;

    tracing::debug!(
        event = "config_parsed",
        relational_query = config.relational_query,
        import_file_extension = ?config.import_file_extension,
        verbose = config.verbose
    );

    Ok(config)
}

fn issue_at(pointer: &str, message: String) -> ConfigIssue {
    match pointer.trim_start_matches('/') {
        "" => ConfigIssue::root(message),
        path => ConfigIssue::field(path, message),
    }
}

fn enabled() -> bool {
    true
}

fn parse_bool_str(value: &str) -> Option<bool> {
    match value {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Accept a native boolean or its string encoding.
fn bool_in_str<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolInStr {
        Native(bool),
        Encoded(String),
    }

    match BoolInStr::deserialize(deserializer)? {
        BoolInStr::Native(value) => Ok(value),
        BoolInStr::Encoded(value) => parse_bool_str(&value).ok_or_else(|| {
            D::Error::custom(format!("expected \"true\" or \"false\", got \"{value}\""))
        }),
    }
}

fn bool_in_str_schema(_: &mut SchemaGenerator) -> Schema {
    let native = SchemaObject {
        instance_type: Some(InstanceType::Boolean.into()),
        ..Default::default()
    };
    let encoded = SchemaObject {
        instance_type: Some(InstanceType::String.into()),
        enum_values: Some(vec![Value::from("true"), Value::from("false")]),
        ..Default::default()
    };

    SchemaObject {
        subschemas: Some(Box::new(SubschemaValidation {
            any_of: Some(vec![native.into(), encoded.into()]),
            ..Default::default()
        })),
        ..Default::default()
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn string_booleans_decode() {
        assert_eq!(parse_bool_str("true"), Some(true));
        assert_eq!(parse_bool_str("false"), Some(false));
        assert_eq!(parse_bool_str("TRUE"), None);
        assert_eq!(parse_bool_str("yes"), None);
    }

    #[test]
    fn schema_does_not_require_any_key() {
        let schema = serde_json::to_value(config_json_schema()).expect("serialize schema");
        assert!(schema.get("required").is_none());
        assert_eq!(schema["type"], json!("object"));
    }

    #[test]
    fn root_pointer_maps_to_root_issue() {
        assert_eq!(issue_at("", "x".to_string()).path, None);
        assert_eq!(
            issue_at("/verbose", "x".to_string()).path.as_deref(),
            Some("verbose")
        );
    }
}
