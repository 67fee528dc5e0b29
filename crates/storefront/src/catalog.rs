//! Static catalog loaded at startup.
//!
//! The product and review content lives in `data/catalog.json`, embedded
//! into the binary at compile time. The store is built once at startup and
//! shared read-only; nothing in the catalog changes at runtime.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Deserialize;
use thiserror::Error;

use sakura_core::{Currency, Price, Product, ProductId, Rating, RatingError, Review};

/// Embedded catalog content.
const EMBEDDED_CATALOG: &str = include_str!("../data/catalog.json");

/// Errors raised while building the catalog store.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog JSON did not parse.
    #[error("invalid catalog data: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two products share an id.
    #[error("duplicate product id: {0}")]
    DuplicateId(ProductId),

    /// A review carries an out-of-range rating.
    #[error("invalid review rating: {0}")]
    Rating(#[from] RatingError),
}

/// On-disk product record. Prices are whole rubles.
#[derive(Debug, Deserialize)]
struct ProductRecord {
    id: i32,
    name: String,
    price: i64,
    image: String,
    category: String,
}

/// On-disk review record.
#[derive(Debug, Deserialize)]
struct ReviewRecord {
    author: String,
    text: String,
    rating: u8,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    products: Vec<ProductRecord>,
    reviews: Vec<ReviewRecord>,
}

/// Read-only catalog store shared across handlers.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    products: Arc<Vec<Product>>,
    reviews: Arc<Vec<Review>>,
    by_id: Arc<HashMap<ProductId, usize>>,
}

impl CatalogStore {
    /// Build the store from the embedded catalog file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the embedded data is malformed. This only
    /// fires when the data file is edited badly; it is a startup failure,
    /// not a runtime condition.
    pub fn load_embedded() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Build the store from a catalog JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] on malformed JSON, duplicate product ids, or
    /// out-of-range review ratings.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(raw)?;

        let mut products = Vec::with_capacity(file.products.len());
        let mut by_id = HashMap::with_capacity(file.products.len());
        for record in file.products {
            let id = ProductId::new(record.id);
            if by_id.insert(id, products.len()).is_some() {
                return Err(CatalogError::DuplicateId(id));
            }
            products.push(Product {
                id,
                name: record.name,
                price: Price::from_units(record.price, Currency::RUB),
                image: record.image,
                category: record.category,
            });
        }

        let reviews = file
            .reviews
            .into_iter()
            .map(|record| {
                Ok(Review {
                    author: record.author,
                    text: record.text,
                    rating: Rating::new(record.rating)?,
                })
            })
            .collect::<Result<Vec<_>, RatingError>>()?;

        tracing::info!(
            products = products.len(),
            reviews = reviews.len(),
            "Catalog loaded"
        );

        Ok(Self {
            products: Arc::new(products),
            reviews: Arc::new(reviews),
            by_id: Arc::new(by_id),
        })
    }

    /// Look up a product by id.
    #[must_use]
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.by_id.get(&id).and_then(|&idx| self.products.get(idx))
    }

    /// All products, in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// All reviews, in catalog order.
    #[must_use]
    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_load_embedded() {
        let catalog = CatalogStore::load_embedded().unwrap();
        assert_eq!(catalog.products().len(), 6);
        assert_eq!(catalog.reviews().len(), 3);
    }

    #[test]
    fn test_embedded_prices() {
        let catalog = CatalogStore::load_embedded().unwrap();
        let vase = catalog.product(ProductId::new(1)).unwrap();
        assert_eq!(vase.price, Price::from_units(3500, Currency::RUB));
        let bowl = catalog.product(ProductId::new(4)).unwrap();
        assert_eq!(bowl.price, Price::from_units(1800, Currency::RUB));
    }

    #[test]
    fn test_unknown_id_is_none() {
        let catalog = CatalogStore::load_embedded().unwrap();
        assert!(catalog.product(ProductId::new(999)).is_none());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let raw = r#"{
            "products": [
                {"id": 1, "name": "a", "price": 100, "image": "x", "category": "c"},
                {"id": 1, "name": "b", "price": 200, "image": "y", "category": "c"}
            ],
            "reviews": []
        }"#;
        assert!(matches!(
            CatalogStore::from_json(raw),
            Err(CatalogError::DuplicateId(_))
        ));
    }

    #[test]
    fn test_out_of_range_rating_rejected() {
        let raw = r#"{
            "products": [],
            "reviews": [{"author": "a", "text": "t", "rating": 6}]
        }"#;
        assert!(matches!(
            CatalogStore::from_json(raw),
            Err(CatalogError::Rating(_))
        ));
    }
}
