use crate::catalog::OptionCatalog;
use crate::errors::CatalogError;

/// Boundary trait for catalog population (CMS, REST, fixture files).
///
/// The core treats the result as an already-resolved input: callers do
/// any async fetching themselves and hand over a loaded catalog. A
/// failure is surfaced as [`CatalogError::Unavailable`] and the session
/// degrades to a read-only "customization unavailable" state.
pub trait CatalogSource {
    fn load(&self, product_id: &str) -> Result<OptionCatalog, CatalogError>;
}

/// A source backed by an in-memory catalog, for tests and fixtures.
pub struct StaticSource {
    catalog: OptionCatalog,
}

impl StaticSource {
    pub fn new(catalog: OptionCatalog) -> Self {
        Self { catalog }
    }
}

impl CatalogSource for StaticSource {
    fn load(&self, _product_id: &str) -> Result<OptionCatalog, CatalogError> {
        Ok(self.catalog.clone())
    }
}

/// A source that always fails, for exercising the degraded path.
pub struct UnavailableSource;

impl CatalogSource for UnavailableSource {
    fn load(&self, product_id: &str) -> Result<OptionCatalog, CatalogError> {
        Err(CatalogError::Unavailable {
            reason: format!("no catalog backend for product {}", product_id),
        })
    }
}
