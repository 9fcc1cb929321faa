//! Catalog output: locale resolution and PO assembly.

mod locale;
mod writer;

pub use locale::resolve;
pub use writer::{
    CatalogConfig,
    CatalogError,
    write_catalogs,
};
