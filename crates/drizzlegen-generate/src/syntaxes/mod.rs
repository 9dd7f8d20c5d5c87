//! Source-text building blocks shared by the emitters.

pub mod imports;

pub use imports::{
    default_import_value, named_import, render_import_path, wildcard_import, DefaultImport,
    ImportKind, ImportValue, NamedImport, WildcardImport,
};
