//! Errors raised while loading and validating a catalog.

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("failed to read catalog file {path}: {source}", path = path.display())]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("translation error: {0}")]
    Translation(String),

    #[error("duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: String },
    #[error("{kind} {id}: field `{field}` cannot be empty")]
    EmptyField {
        kind: &'static str,
        id: String,
        field: &'static str,
    },
    #[error("disease {0} lists no common symptoms")]
    NoCommonSymptoms(String),
    #[error("medicine {id}: price minimum {min} exceeds maximum {max}")]
    InvalidPrice { id: String, min: u32, max: u32 },
}

pub type CatalogResult<T> = std::result::Result<T, CatalogError>;
