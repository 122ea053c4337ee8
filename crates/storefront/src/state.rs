//! Application state shared across handlers.

use std::sync::Arc;

use bakery_core::{CatalogProvider, Review, StaticCatalog};

use crate::config::StorefrontConfig;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides read-only access
/// to the configuration, the catalog and the review list.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Arc<dyn CatalogProvider>,
    reviews: Vec<Review>,
}

impl AppState {
    /// Create a new application state from a loaded catalog.
    #[must_use]
    pub fn new(config: StorefrontConfig, catalog: StaticCatalog) -> Self {
        let reviews = catalog.reviews().to_vec();
        Self::with_provider(config, Arc::new(catalog), reviews)
    }

    /// Create a new application state from any catalog source.
    #[must_use]
    pub fn with_provider(
        config: StorefrontConfig,
        catalog: Arc<dyn CatalogProvider>,
        reviews: Vec<Review>,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                reviews,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get the read-only product catalog.
    #[must_use]
    pub fn catalog(&self) -> &dyn CatalogProvider {
        self.inner.catalog.as_ref()
    }

    /// Get the customer reviews shown on the home page.
    #[must_use]
    pub fn reviews(&self) -> &[Review] {
        &self.inner.reviews
    }
}
