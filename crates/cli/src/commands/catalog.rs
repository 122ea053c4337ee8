//! Catalog commands.
//!
//! # Environment Variables
//!
//! - `BAKERY_CONTENT_DIR` - directory holding `catalog.json` when `--content`
//!   is not given

use std::path::PathBuf;

use bakery_core::{CatalogProvider, CategoryFilter, Product, StaticCatalog};
use bakery_storefront::config::StorefrontConfig;
use bakery_storefront::content::load_catalog;

use super::CommandError;

/// Resolve the catalog file: explicit path, else the storefront's configured one.
fn catalog_path(content: Option<PathBuf>) -> Result<PathBuf, CommandError> {
    match content {
        Some(path) => Ok(path),
        None => Ok(StorefrontConfig::from_env()?.catalog_path()),
    }
}

fn load(content: Option<PathBuf>) -> Result<StaticCatalog, CommandError> {
    let path = catalog_path(content)?;
    tracing::info!("Loading catalog from {}", path.display());
    Ok(load_catalog(&path)?)
}

/// One product as a table row.
fn format_row(product: &Product) -> String {
    let id = product.id.to_string();
    let price = product.price.to_string();
    let popular = if product.is_popular { "  *" } else { "" };
    format!(
        "{id:>4}  {:<28}  {price:>8}  {}{popular}",
        product.name, product.category
    )
}

/// Print the products in `category` (all of them when `None`).
///
/// # Errors
///
/// Returns an error if the catalog cannot be located, read or validated.
#[allow(clippy::print_stdout)]
pub fn list(content: Option<PathBuf>, category: Option<&str>) -> Result<(), CommandError> {
    let catalog = load(content)?;
    let filter = category.map_or(CategoryFilter::All, CategoryFilter::from_label);

    let products = catalog.filter_by_category(&filter);
    println!("{filter}: {} product(s)", products.len());
    for product in products {
        println!("{}", format_row(product));
    }
    Ok(())
}

/// Summary printed by `catalog check`.
fn summary(catalog: &StaticCatalog) -> String {
    let categories: Vec<String> = catalog
        .category_filters()
        .iter()
        .filter(|filter| !matches!(filter, CategoryFilter::All))
        .map(ToString::to_string)
        .collect();
    let popular = catalog.products().iter().filter(|p| p.is_popular).count();

    format!(
        "{} product(s), {} popular, {} review(s)\ncategories: {}",
        catalog.products().len(),
        popular,
        catalog.reviews().len(),
        categories.join(", "),
    )
}

/// Validate a catalog file and print its summary.
///
/// # Errors
///
/// Returns an error if the catalog cannot be located, read or validated.
#[allow(clippy::print_stdout)]
pub fn check(content: Option<PathBuf>) -> Result<(), CommandError> {
    let catalog = load(content)?;
    println!("{}", summary(&catalog));
    tracing::info!("Catalog is valid");
    Ok(())
}
