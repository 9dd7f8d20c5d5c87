//! Import statements of the emitted TypeScript modules.
//!
//! Values are built by the emitters, rendered once the statements of a file
//! are collected, and never mutated in between.

use std::borrow::Cow;

use crate::config::ImportFileExtension;
use crate::context::GeneratorContext;
use crate::errors::ImportError;

/// Tag distinguishing the import variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImportKind {
    NamedImport,
    DefaultImport,
    WildcardImport,
}

impl ImportKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ImportKind::NamedImport => "namedImport",
            ImportKind::DefaultImport => "defaultImport",
            ImportKind::WildcardImport => "wildcardImport",
        }
    }
}

/// `import { a, b } from 'module';`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedImport {
    names: Vec<String>,
    module: String,
    is_type_import: bool,
}

impl NamedImport {
    /// Imported bindings, never empty.
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

/// `import name from 'module';`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultImport {
    name: String,
    module: String,
    is_type_import: bool,
}

impl DefaultImport {
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// `import * as alias from 'module';`
///
/// Type-only star imports are not representable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WildcardImport {
    alias: String,
    module: String,
}

impl WildcardImport {
    pub fn alias(&self) -> &str {
        &self.alias
    }
}

/// Any import statement an emitter can produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportValue {
    Named(NamedImport),
    Default(DefaultImport),
    Wildcard(WildcardImport),
}

impl ImportValue {
    pub fn kind(&self) -> ImportKind {
        match self {
            ImportValue::Named(_) => ImportKind::NamedImport,
            ImportValue::Default(_) => ImportKind::DefaultImport,
            ImportValue::Wildcard(_) => ImportKind::WildcardImport,
        }
    }

    /// Module specifier as given, before any extension rewriting.
    pub fn module(&self) -> &str {
        match self {
            ImportValue::Named(import) => &import.module,
            ImportValue::Default(import) => &import.module,
            ImportValue::Wildcard(import) => &import.module,
        }
    }

    pub fn is_type_import(&self) -> bool {
        match self {
            ImportValue::Named(import) => import.is_type_import,
            ImportValue::Default(import) => import.is_type_import,
            ImportValue::Wildcard(_) => false,
        }
    }

    /// Render the statement using the extension policy of `context`.
    pub fn render(&self, context: &GeneratorContext<'_>) -> String {
        let path = render_import_path(self.module(), context.import_file_extension());
        let marker = if self.is_type_import() { "type " } else { "" };

        match self {
            ImportValue::Named(import) => {
                format!("import {marker}{{ {} }} from '{path}';", import.names.join(", "))
            }
            ImportValue::Default(import) => {
                format!("import {marker}{} from '{path}';", import.name)
            }
            ImportValue::Wildcard(import) => {
                format!("import * as {} from '{path}';", import.alias)
            }
        }
    }
}

/// Build a named import; `names` must not be empty.
pub fn named_import<I, S>(
    names: I,
    module: impl Into<String>,
    is_type_import: bool,
) -> Result<ImportValue, ImportError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let module = module.into();
    let names: Vec<String> = names.into_iter().map(Into::into).collect();
    if names.is_empty() {
        return Err(ImportError::EmptyNames { module });
    }

    Ok(ImportValue::Named(NamedImport {
        names,
        module,
        is_type_import,
    }))
}

pub fn default_import_value(
    name: impl Into<String>,
    module: impl Into<String>,
    is_type_import: bool,
) -> ImportValue {
    ImportValue::Default(DefaultImport {
        name: name.into(),
        module: module.into(),
        is_type_import,
    })
}

pub fn wildcard_import(alias: impl Into<String>, module: impl Into<String>) -> ImportValue {
    ImportValue::Wildcard(WildcardImport {
        alias: alias.into(),
        module: module.into(),
    })
}

/// Append the configured extension to relative module paths.
///
/// Package specifiers are returned unchanged whatever the policy.
pub fn render_import_path(path: &str, extension: ImportFileExtension) -> Cow<'_, str> {
    match extension.suffix() {
        Some(suffix) if path.starts_with('.') => Cow::Owned(format!("{path}.{suffix}")),
        _ => Cow::Borrowed(path),
    }
}
