//! Product catalog and the read-only catalog interface.
//!
//! The cart never owns product data. It resolves prices through a
//! [`CatalogProvider`], which any read-only source can implement; the
//! storefront uses [`StaticCatalog`] loaded from a JSON content file.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::review::Review;
use crate::types::{Category, CategoryFilter, Price, ProductId};

/// Errors that can occur when building a catalog.
#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    /// The content document is not valid JSON for the catalog schema.
    #[error("invalid catalog document: {0}")]
    Parse(#[from] serde_json::Error),
    /// Two products share an id.
    #[error("duplicate product id {0}")]
    DuplicateProductId(ProductId),
    /// A product has a blank name.
    #[error("product {0} has an empty name")]
    EmptyName(ProductId),
}

/// A product offered by the bakery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Price,
    /// Opaque reference to the product photo.
    pub image: String,
    pub category: Category,
    /// Display-only "Популярное" badge.
    #[serde(default)]
    pub is_popular: bool,
}

/// Read-only access to the product list.
///
/// Implementors only need [`products`](Self::products); lookups and filters
/// are derived from it and never mutate the source.
pub trait CatalogProvider: Send + Sync {
    /// Every product, in display order.
    fn products(&self) -> &[Product];

    /// Find a product by id.
    fn find(&self, id: ProductId) -> Option<&Product> {
        self.products().iter().find(|product| product.id == id)
    }

    /// Products passing `filter`, in their original relative order.
    ///
    /// [`CategoryFilter::All`] returns the full list unchanged.
    fn filter_by_category(&self, filter: &CategoryFilter) -> Vec<&Product> {
        self.products()
            .iter()
            .filter(|product| filter.matches(&product.category))
            .collect()
    }

    /// Filter entries for the catalog: [`CategoryFilter::All`] first, then
    /// each distinct product category in order of first appearance.
    fn category_filters(&self) -> Vec<CategoryFilter> {
        let mut seen = HashSet::new();
        let mut filters = vec![CategoryFilter::All];
        for product in self.products() {
            if seen.insert(&product.category) {
                filters.push(CategoryFilter::Only(product.category.clone()));
            }
        }
        filters
    }
}

/// Serialized form of the catalog content file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogDocument {
    pub products: Vec<Product>,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

/// An in-memory catalog with its reviews.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    products: Vec<Product>,
    reviews: Vec<Review>,
}

impl StaticCatalog {
    /// Build a catalog from products.
    ///
    /// # Errors
    ///
    /// Returns an error if two products share an id or a product name is blank.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        Self::from_document(CatalogDocument {
            products,
            reviews: Vec::new(),
        })
    }

    /// Build a catalog from a parsed content document.
    ///
    /// # Errors
    ///
    /// Returns an error if two products share an id or a product name is blank.
    pub fn from_document(document: CatalogDocument) -> Result<Self, CatalogError> {
        let mut ids = HashSet::new();
        for product in &document.products {
            if product.name.trim().is_empty() {
                return Err(CatalogError::EmptyName(product.id));
            }
            if !ids.insert(product.id) {
                return Err(CatalogError::DuplicateProductId(product.id));
            }
        }

        Ok(Self {
            products: document.products,
            reviews: document.reviews,
        })
    }

    /// Parse a JSON content document.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] for malformed JSON and the validation
    /// errors of [`StaticCatalog::from_document`].
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        Self::from_document(document)
    }

    /// Customer reviews, in display order.
    #[must_use]
    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }
}

impl CatalogProvider for StaticCatalog {
    fn products(&self) -> &[Product] {
        &self.products
    }
}
