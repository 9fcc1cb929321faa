//! Top-level error type for the command-line front end.

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::dictionary::DictionaryError;
use crate::headers::HeaderError;

/// Errors surfaced to the binary entry point.
#[derive(Error, Debug)]
pub enum Error {
    /// Dictionary discovery, loading or measurement failed.
    #[error(transparent)]
    Dictionary(#[from] DictionaryError),

    /// Catalog assembly or persistence failed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// A `--header` override could not be applied.
    #[error(transparent)]
    Header(#[from] HeaderError),
}
