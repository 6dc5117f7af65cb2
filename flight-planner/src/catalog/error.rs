//! Catalog error types.

use std::path::PathBuf;

use crate::domain::DomainError;

/// Errors that can occur while loading the flight catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The catalog file does not exist
    #[error("catalog not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// Reading the catalog failed
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    /// A line violated the record grammar
    #[error("malformed record on line {line}: {source}")]
    Malformed {
        line: usize,
        #[source]
        source: RecordError,
    },
}

/// Why a single catalog line was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    /// Line did not have exactly three `|`-separated fields
    #[error("expected 3 '|'-separated fields, found {0}")]
    FieldCount(usize),

    /// Route field lacked the `->` separator
    #[error("route must have the form ORIGIN->DESTINATION")]
    Route,

    /// A leg token was not `HH:MM-HH:MM,PRICE`
    #[error("flight must have the form HH:MM-HH:MM,PRICE: {0:?}")]
    Flight(String),

    /// A field failed domain validation
    #[error(transparent)]
    Field(#[from] DomainError),
}
