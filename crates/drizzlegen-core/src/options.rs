use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::dmmf::Dmmf;
use crate::error::Result;

/// Options the host tool passes to the generator for a single run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorOptions {
    pub generator: GeneratorConfig,
    #[serde(default)]
    pub dmmf: Dmmf,
}

impl GeneratorOptions {
    /// Decode host options from their JSON form.
    pub fn from_json(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }
}

/// The `generator` block of the user's schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorConfig {
    #[serde(default)]
    pub name: String,
    /// Raw, unvalidated key/value settings.
    #[serde(default = "empty_config")]
    pub config: Value,
    #[serde(default)]
    pub output: Option<EnvValue>,
}

impl GeneratorConfig {
    /// Configured output path, treating an empty string as absent.
    pub fn output_path(&self) -> Option<&str> {
        self.output
            .as_ref()
            .and_then(|output| output.value.as_deref())
            .filter(|path| !path.is_empty())
    }
}

/// Value that may originate from an environment variable on the host side.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvValue {
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub from_env_var: Option<String>,
}

fn empty_config() -> Value {
    Value::Object(serde_json::Map::new())
}
