//! Catalog records.
//!
//! Products and reviews are defined once at startup from static data and
//! never created, mutated, or destroyed at runtime. The storefront crate
//! owns loading; this module owns the shapes.

use crate::types::{Price, ProductId, Rating};

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    /// Unique catalog identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Price,
    /// Image URI.
    pub image: String,
    /// Category label (e.g., "Вазы", "Посуда").
    pub category: String,
}

/// A customer review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    /// Reviewer's display name.
    pub author: String,
    /// Review text.
    pub text: String,
    /// Star rating, 1 to 5.
    pub rating: Rating,
}
