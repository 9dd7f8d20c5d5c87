use thiserror::Error;

/// Core error type shared across drizzlegen crates.
#[derive(Debug, Error)]
pub enum Error {
    /// A field object matched neither the resolver nor the DMMF shape.
    #[error("invalid field object passed to get_db_name: {0}")]
    UnsupportedFieldShape(String),
    /// Host options could not be decoded.
    #[error("invalid generator options: {0}")]
    InvalidOptions(#[from] serde_json::Error),
}

/// Convenience alias for results returned by drizzlegen crates.
pub type Result<T> = std::result::Result<T, Error>;
