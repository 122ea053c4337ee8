//! Core types for Home Bakery.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod category;
pub mod delivery;
pub mod id;
pub mod price;
pub mod rating;

pub use category::{ALL_CATEGORIES_LABEL, Category, CategoryFilter};
pub use delivery::{DeliveryDate, DeliveryDateError};
pub use id::*;
pub use price::Price;
pub use rating::{Rating, RatingError};
