//! The visitor's shopping cart.
//!
//! A cart is a list of [`CartLine`]s, at most one per product id, kept in the
//! order products were first added. Totals are never stored: they are
//! recomputed from the current lines against a [`CatalogProvider`] on every
//! read, so a price change in the catalog is reflected immediately.
//!
//! Lines are never removed, decremented or cleared.

use serde::{Deserialize, Serialize};

use crate::catalog::{CatalogProvider, Product};
use crate::types::{DeliveryDate, Price, ProductId};

/// One product's accumulated quantity within the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    product_id: ProductId,
    quantity: u32,
    requested_date: Option<DeliveryDate>,
}

impl CartLine {
    /// Product this line refers to. The id is not guaranteed to exist in
    /// the catalog.
    #[must_use]
    pub const fn product_id(&self) -> ProductId {
        self.product_id
    }

    /// Number of units, always at least 1.
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Delivery date selected when this product was last added.
    #[must_use]
    pub const fn requested_date(&self) -> Option<DeliveryDate> {
        self.requested_date
    }
}

/// A cart line paired with the catalog product it refers to.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedLine<'a> {
    pub line: &'a CartLine,
    pub product: &'a Product,
}

impl ResolvedLine<'_> {
    /// `price × quantity` for this line.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.product.price.times(self.line.quantity)
    }
}

/// The visitor's cart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add one unit of `product_id`.
    ///
    /// An existing line has its quantity incremented and its requested date
    /// replaced by `selected_date`, including being cleared when
    /// `selected_date` is `None`. Otherwise a new line with quantity 1 is
    /// appended. The id is not checked against any catalog.
    pub fn add_item(&mut self, product_id: ProductId, selected_date: Option<DeliveryDate>) {
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.product_id == product_id)
        {
            line.quantity = line.quantity.saturating_add(1);
            line.requested_date = selected_date;
            return;
        }

        self.lines.push(CartLine {
            product_id,
            quantity: 1,
            requested_date: selected_date,
        });
    }

    /// Lines in the order their products were first added.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// The line for `product_id`, if that product has been added.
    #[must_use]
    pub fn line(&self, product_id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.product_id == product_id)
    }

    /// Whether nothing has been added yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of `price × quantity` over all lines.
    ///
    /// Lines whose product the catalog does not know contribute nothing.
    #[must_use]
    pub fn total_price<C>(&self, catalog: &C) -> Price
    where
        C: CatalogProvider + ?Sized,
    {
        self.lines
            .iter()
            .map(|line| {
                catalog
                    .find(line.product_id)
                    .map_or(Price::ZERO, |product| product.price.times(line.quantity))
            })
            .sum()
    }

    /// Sum of quantities over all lines; zero exactly when the cart is empty.
    #[must_use]
    pub fn total_item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Lines whose product the catalog knows, paired with that product.
    ///
    /// Unknown ids are skipped here but still counted by
    /// [`total_item_count`](Self::total_item_count).
    #[must_use]
    pub fn resolved_lines<'a, C>(&'a self, catalog: &'a C) -> Vec<ResolvedLine<'a>>
    where
        C: CatalogProvider + ?Sized,
    {
        self.lines
            .iter()
            .filter_map(|line| {
                catalog
                    .find(line.product_id)
                    .map(|product| ResolvedLine { line, product })
            })
            .collect()
    }
}
