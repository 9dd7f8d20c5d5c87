//! Code-emission core for drizzlegen.
//!
//! Turns the host's generator options into a run-scoped
//! [`GeneratorContext`] and provides the import statement values every
//! Drizzle emitter renders against it.

pub mod config;
pub mod context;
pub mod errors;
pub mod logger;
pub mod syntaxes;

pub use config::{config_json_schema, parse_config, Config, ImportFileExtension};
pub use context::{Generator, GeneratorContext, OutputTarget, SINGLE_FILE_EXTENSION};
pub use errors::{ConfigError, ConfigIssue, GenerateError, ImportError};
pub use logger::{Logger, Task};
pub use syntaxes::{
    default_import_value, named_import, wildcard_import, ImportKind, ImportValue,
};
