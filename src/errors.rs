use schema::StatName;
use thiserror::Error;

/// Main error type for the Pokedex browser
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BrowserError {
    /// The species catalog could not be obtained
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
    /// A type's membership could not be obtained
    #[error("Type index error: {0}")]
    TypeIndex(#[from] TypeIndexError),
    /// A species' detail payload could not be loaded or projected
    #[error("Species detail error: {0}")]
    Detail(#[from] DetailError),
    /// Invalid trainer session input
    #[error("Session error: {0}")]
    Session(#[from] SessionError),
}

/// Failures reported by the collaborators behind the source traits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// The backing service or snapshot could not answer
    #[error("source unavailable: {0}")]
    Unavailable(String),
    /// The requested resource does not exist
    #[error("resource not found: {0}")]
    NotFound(String),
    /// The response could not be projected into the expected shape
    #[error("malformed payload: {0}")]
    Malformed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("species catalog unavailable: {0}")]
    Unavailable(SourceError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeIndexError {
    #[error("membership for type '{type_name}' unavailable: {reason}")]
    Unavailable {
        type_name: String,
        reason: SourceError,
    },
}

/// A single move-learn record that could not be projected. Always recovered
/// locally by skipping the record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("missing field '{0}'")]
    MissingField(&'static str),
    #[error("invalid field '{field}': {details}")]
    InvalidField { field: &'static str, details: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DetailError {
    #[error("{0}")]
    Source(#[from] SourceError),
    #[error("detail payload is missing '{0}'")]
    MissingField(&'static str),
    #[error("detail payload has invalid '{field}': {details}")]
    InvalidField { field: &'static str, details: String },
    #[error("expected stat '{0}' is absent")]
    MissingStat(StatName),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("trainer name cannot be empty")]
    EmptyName,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("could not read config {path}: {details}")]
    Io { path: String, details: String },
    #[error("could not parse config: {0}")]
    Parse(String),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Type alias for Results using BrowserError
pub type BrowserResult<T> = Result<T, BrowserError>;

/// Type alias for Results using SourceError
pub type SourceResult<T> = Result<T, SourceError>;

/// Type alias for Results using CatalogError
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Type alias for Results using TypeIndexError
pub type TypeIndexResult<T> = Result<T, TypeIndexError>;

/// Type alias for Results using DetailError
pub type DetailResult<T> = Result<T, DetailError>;

/// Type alias for Results using ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
