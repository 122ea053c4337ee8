//! Home Bakery Core - catalog, cart and order-draft library.
//!
//! This crate provides the domain model shared by the Home Bakery components:
//! - `storefront` - Public-facing bakery page (catalog, cart, order form)
//! - `cli` - Command-line tools for inspecting catalog content
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no I/O, no HTTP, no
//! async. Catalog content is handed in by the caller through the
//! [`CatalogProvider`] trait, which keeps the cart independent of where the
//! product list comes from.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for ids, prices, categories, ratings and delivery dates
//! - [`catalog`] - Products and the read-only [`CatalogProvider`] interface
//! - [`cart`] - The session cart and its derived totals
//! - [`order`] - The customer's uncommitted order form
//! - [`review`] - Customer reviews shown on the page

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod order;
pub mod review;
pub mod types;

pub use cart::{Cart, CartLine, ResolvedLine};
pub use catalog::{CatalogDocument, CatalogError, CatalogProvider, Product, StaticCatalog};
pub use order::{OrderDraft, OrderField, UnknownOrderField};
pub use review::Review;
pub use types::*;
