//! Catalog content loading.
//!
//! Products and reviews live in `catalog.json` inside the content directory
//! and are loaded once at startup. The loaded catalog is read-only for the
//! lifetime of the process.

use std::path::{Path, PathBuf};

use bakery_core::{CatalogError, CatalogProvider, StaticCatalog};

/// File name of the catalog document inside the content directory.
pub const CATALOG_FILE: &str = "catalog.json";

/// Errors that can occur when loading content.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid catalog in {path}: {source}")]
    Catalog {
        path: PathBuf,
        #[source]
        source: CatalogError,
    },
}

/// Load and validate the catalog document at `path`.
///
/// # Errors
///
/// Returns [`ContentError::Read`] if the file cannot be read and
/// [`ContentError::Catalog`] if it is not a valid catalog.
pub fn load_catalog(path: &Path) -> Result<StaticCatalog, ContentError> {
    let json = std::fs::read_to_string(path).map_err(|source| ContentError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let catalog = StaticCatalog::from_json(&json).map_err(|source| ContentError::Catalog {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(
        path = %path.display(),
        products = catalog.products().len(),
        reviews = catalog.reviews().len(),
        "Catalog loaded"
    );

    Ok(catalog)
}
