use drizzlegen_core::GENERATOR_NAME;
use thiserror::Error;

/// Single configuration problem.
///
/// `path` names the offending key; `None` marks an issue with the value as a
/// whole (for example a config that is not an object).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub path: Option<String>,
    pub message: String,
}

impl ConfigIssue {
    /// Issue attached to the whole configuration value.
    pub fn root(message: impl Into<String>) -> Self {
        Self {
            path: None,
            message: message.into(),
        }
    }

    /// Issue attached to a single key.
    pub fn field(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: Some(path.into()),
            message: message.into(),
        }
    }
}

/// Every issue found while validating the generator config.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[{}] Invalid Config:\n{}", GENERATOR_NAME, format_issues(.issues))]
pub struct ConfigError {
    pub issues: Vec<ConfigIssue>,
}

impl ConfigError {
    /// Issues reported for a given key, in discovery order.
    pub fn field_messages<'a>(&'a self, path: &'a str) -> impl Iterator<Item = &'a str> {
        self.issues
            .iter()
            .filter(move |issue| issue.path.as_deref() == Some(path))
            .map(|issue| issue.message.as_str())
    }
}

/// Errors raised while setting up a generation run.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("No output path specified")]
    MissingOutputPath,
    #[error("Generator context not set")]
    ContextNotSet,
}

/// Errors raised while building import statements.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportError {
    #[error("named import from '{module}' needs at least one name")]
    EmptyNames { module: String },
}

/// Root issues first, then one line per key with its messages joined.
fn format_issues(issues: &[ConfigIssue]) -> String {
    let mut message = String::new();

    for issue in issues.iter().filter(|issue| issue.path.is_none()) {
        message.push_str("\n- ");
        message.push_str(&issue.message);
    }

    let mut keys: Vec<&str> = Vec::new();
    for path in issues.iter().filter_map(|issue| issue.path.as_deref()) {
        if !keys.contains(&path) {
            keys.push(path);
        }
    }

    for key in keys {
        let messages: Vec<&str> = issues
            .iter()
            .filter(|issue| issue.path.as_deref() == Some(key))
            .map(|issue| issue.message.as_str())
            .collect();
        message.push_str(&format!("\n- {key}: {}", messages.join(", ")));
    }

    message
}
