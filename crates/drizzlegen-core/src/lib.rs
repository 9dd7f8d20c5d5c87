//! Core contracts shared by the drizzlegen crates.
//!
//! This crate defines the host's generator options, the read-only DMMF
//! datamodel, and the field name resolution helper used by emitters.

pub mod db_name;
pub mod dmmf;
pub mod error;
pub mod options;
pub mod types;

pub use db_name::{get_db_name, DbNameResolver, FieldSource};
pub use dmmf::{Datamodel, DatamodelEnum, Dmmf, EnumValue, Field, FieldKind, Model};
pub use error::{Error, Result};
pub use options::{EnvValue, GeneratorConfig, GeneratorOptions};
pub use types::DateMode;

/// Name used to prefix user-facing messages.
pub const GENERATOR_NAME: &str = "drizzlegen";
