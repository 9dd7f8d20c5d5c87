use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How date and time columns surface in the emitted TypeScript.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum DateMode {
    /// Columns are typed as JS `Date` objects.
    Date,
    /// Columns are typed as ISO-8601 strings.
    String,
}

impl DateMode {
    /// Drizzle column `mode` option for this setting.
    pub fn as_str(self) -> &'static str {
        match self {
            DateMode::Date => "date",
            DateMode::String => "string",
        }
    }
}
