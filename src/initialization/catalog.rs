//! Indicator catalog initialization.

use std::path::Path;
use std::sync::Arc;

use log::info;

use crate::catalog::IndicatorCatalog;
use crate::error_handling::InitializationError;

/// Loads the catalog used for the whole session.
///
/// Reads `path` when given; otherwise returns the shared built-in catalog.
///
/// # Errors
///
/// Returns `InitializationError::CatalogError` if the file cannot be read or
/// parsed, or holds no indicators.
pub fn init_catalog(path: Option<&Path>) -> Result<Arc<IndicatorCatalog>, InitializationError> {
    match path {
        Some(path) => {
            let catalog = IndicatorCatalog::from_json_file(path)?;
            info!("Loaded indicator catalog from {}", path.display());
            Ok(Arc::new(catalog))
        }
        None => Ok(IndicatorCatalog::shared_builtin()),
    }
}
