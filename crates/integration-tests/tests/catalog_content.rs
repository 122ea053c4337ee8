//! The bundled catalog file against the cart model.

#![allow(clippy::unwrap_used)]

use bakery_core::{Cart, CatalogProvider, CategoryFilter, Price, ProductId};
use bakery_integration_tests::bundled_catalog;

#[test]
fn test_bundled_catalog_shape() {
    let catalog = bundled_catalog();
    assert_eq!(catalog.products().len(), 4);
    assert_eq!(catalog.reviews().len(), 2);

    let labels: Vec<String> = catalog
        .category_filters()
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(labels, ["Все", "Сладкие пироги", "Пирожки"]);
}

#[test]
fn test_cart_totals_against_bundled_catalog() {
    let catalog = bundled_catalog();
    let mut cart = Cart::new();

    cart.add_item(ProductId::new(2), None);
    assert_eq!(cart.total_price(&catalog), Price::new(120));

    cart.add_item(ProductId::new(2), None);
    assert_eq!(cart.total_price(&catalog), Price::new(240));

    cart.add_item(ProductId::new(1), None);
    assert_eq!(cart.total_price(&catalog), Price::new(1090));
    assert_eq!(cart.total_item_count(), 3);
}

#[test]
fn test_filter_partitions_catalog() {
    let catalog = bundled_catalog();
    let total: usize = catalog
        .category_filters()
        .iter()
        .filter(|f| !matches!(f, CategoryFilter::All))
        .map(|f| catalog.filter_by_category(f).len())
        .sum();
    assert_eq!(total, catalog.products().len());
}
