//! Physical column name resolution.
//!
//! Field metadata reaches the emitters in two shapes: wrappers that already
//! know their column name, and raw DMMF objects carrying an optional `dbName`.
//! Both are folded into [`FieldSource`] where the schema model is ingested.

use serde_json::Value;

use crate::dmmf::{EnumValue, Field, Model};
use crate::error::{Error, Result};

/// Capability of field wrappers that compute their own column name.
pub trait DbNameResolver {
    fn get_db_name(&self) -> String;
}

/// A field in one of the two recognized shapes.
#[derive(Clone, Copy)]
pub enum FieldSource<'a> {
    Resolver(&'a dyn DbNameResolver),
    Declared {
        name: &'a str,
        db_name: Option<&'a str>,
    },
}

impl<'a> FieldSource<'a> {
    /// Classify an untyped field object.
    ///
    /// Accepts an object with a string `name` and a `dbName` key that is
    /// either a string or `null`.
    pub fn from_json(value: &'a Value) -> Result<Self> {
        let object = value
            .as_object()
            .ok_or_else(|| Error::UnsupportedFieldShape(value.to_string()))?;

        let name = object.get("name").and_then(Value::as_str);
        match (name, object.get("dbName")) {
            (Some(name), Some(Value::Null)) => Ok(FieldSource::Declared {
                name,
                db_name: None,
            }),
            (Some(name), Some(Value::String(db_name))) => Ok(FieldSource::Declared {
                name,
                db_name: Some(db_name),
            }),
            _ => Err(Error::UnsupportedFieldShape(value.to_string())),
        }
    }
}

impl<'a> From<&'a Field> for FieldSource<'a> {
    fn from(field: &'a Field) -> Self {
        FieldSource::Declared {
            name: &field.name,
            db_name: field.db_name.as_deref(),
        }
    }
}

impl<'a> From<&'a Model> for FieldSource<'a> {
    fn from(model: &'a Model) -> Self {
        FieldSource::Declared {
            name: &model.name,
            db_name: model.db_name.as_deref(),
        }
    }
}

impl<'a> From<&'a EnumValue> for FieldSource<'a> {
    fn from(value: &'a EnumValue) -> Self {
        FieldSource::Declared {
            name: &value.name,
            db_name: value.db_name.as_deref(),
        }
    }
}

/// Effective physical name: the resolver wins, then `db_name`, then `name`.
pub fn get_db_name<'a>(field: impl Into<FieldSource<'a>>) -> String {
    match field.into() {
        FieldSource::Resolver(resolver) => resolver.get_db_name(),
        FieldSource::Declared { name, db_name } => db_name.unwrap_or(name).to_string(),
    }
}
